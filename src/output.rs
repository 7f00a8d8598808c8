//! Rank table persistence.

use crate::stats::RankRow;
use anyhow::Result;
use std::fs;
use std::path::Path;

/// Create the output directory if it does not exist yet. No-op otherwise.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Write the rank table as delimited text, overwriting any existing file.
///
/// Columns: course name, mean rank, final rank position. A course with no
/// ranked responses gets an empty mean-rank cell.
pub fn write_rank_table(rows: &[RankRow], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
