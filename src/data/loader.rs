//! Survey Export Loader
//! Reads a Qualtrics-style export into a Polars DataFrame.
//!
//! The export layout is: one banner row, one header row carrying the
//! human-readable question prompts, then one row per respondent (plus one
//! platform metadata row the processor strips later).

use calamine::{open_workbook_auto, Reader};
use polars::prelude::*;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("failed to open workbook {path}: {source}")]
    Workbook {
        path: String,
        source: calamine::Error,
    },
    #[error("workbook {0} contains no worksheets")]
    NoWorksheet(String),
    #[error("{0} has no header row (expected headers on the second physical row)")]
    MissingHeader(String),
    #[error("failed to load table: {0}")]
    Polars(#[from] PolarsError),
}

/// Load a survey export. Excel workbooks go through calamine, anything else
/// is read as delimited text. Either way the first physical row is skipped
/// and the second supplies the column headers.
pub fn load_survey(path: &Path) -> Result<DataFrame, LoaderError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("xlsx") | Some("xlsm") | Some("xlsb") | Some("xls") | Some("ods") => {
            load_workbook(path)
        }
        _ => load_csv(path),
    }
}

fn load_csv(path: &Path) -> Result<DataFrame, LoaderError> {
    let df = LazyCsvReader::new(path)
        .with_skip_rows(1)
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .finish()?
        .collect()?;
    Ok(df)
}

fn load_workbook(path: &Path) -> Result<DataFrame, LoaderError> {
    let display = path.display().to_string();
    let mut workbook = open_workbook_auto(path).map_err(|source| LoaderError::Workbook {
        path: display.clone(),
        source,
    })?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| LoaderError::NoWorksheet(display.clone()))?;
    let range = workbook
        .worksheet_range(&sheet)
        .ok_or_else(|| LoaderError::NoWorksheet(display.clone()))?
        .map_err(|source| LoaderError::Workbook {
            path: display.clone(),
            source,
        })?;

    let mut rows = range.rows();
    // Banner row; the headers live on the row after it.
    rows.next();
    let headers: Vec<String> = match rows.next() {
        Some(row) => row
            .iter()
            .map(|cell| cell_to_text(cell).unwrap_or_default())
            .collect(),
        None => return Err(LoaderError::MissingHeader(display)),
    };

    // Column-major buffers; every cell is kept as text so the aggregator
    // controls numeric coercion.
    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for row in rows {
        for (idx, column) in cells.iter_mut().enumerate() {
            column.push(row.get(idx).and_then(cell_to_text));
        }
    }

    let columns: Vec<Column> = headers
        .iter()
        .zip(cells)
        .map(|(name, values)| Column::new(name.as_str().into(), values))
        .collect();
    Ok(DataFrame::new(columns)?)
}

/// Render a spreadsheet cell to text. Empty and error cells are missing.
fn cell_to_text(cell: &calamine::DataType) -> Option<String> {
    match cell {
        calamine::DataType::Empty => None,
        calamine::DataType::Error(_) => None,
        calamine::DataType::String(s) => Some(s.clone()),
        // Excel stores rank entries as floats; render whole numbers without
        // the trailing ".0" so they read back as the respondent typed them.
        calamine::DataType::Float(f) if f.fract() == 0.0 => Some(format!("{}", *f as i64)),
        calamine::DataType::Float(f) => Some(f.to_string()),
        calamine::DataType::Int(i) => Some(i.to_string()),
        calamine::DataType::Bool(b) => Some(b.to_string()),
        calamine::DataType::DateTime(dt) => Some(dt.to_string()),
    }
}
