//! The end-to-end run: read → clean → aggregate → sort → write.
//!
//! A single synchronous pass. Both validation failures (unreadable input,
//! no matching columns) fire before the export stage, so either both output
//! files are produced or neither is.

use crate::charts::ChartRenderer;
use crate::config::PipelineConfig;
use crate::data::{loader, ResponseProcessor};
use crate::output;
use crate::stats::{RankCalculator, RankRow};
use anyhow::{Context, Result};
use log::{debug, info};

/// Run the full pipeline and return the finished rank table.
pub fn run(config: &PipelineConfig) -> Result<Vec<RankRow>> {
    let df = loader::load_survey(&config.input_path).with_context(|| {
        format!(
            "failed to read survey export {}",
            config.input_path.display()
        )
    })?;
    info!(
        "loaded {} rows x {} columns from {}",
        df.height(),
        df.width(),
        config.input_path.display()
    );

    let responses = ResponseProcessor::drop_metadata_rows(&df, &config.metadata_marker)?;
    debug!(
        "{} response rows after metadata filter",
        responses.height()
    );

    let labels: Vec<String> = responses
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let core_columns = ResponseProcessor::select_ranking_columns(&labels, &config.prompt_prefix)?;
    info!("{} CORE ranking columns matched", core_columns.len());

    let rank_table = RankCalculator::build_rank_table(&responses, &core_columns)?;
    for row in &rank_table {
        debug!(
            "#{} {} (mean {})",
            row.position,
            row.course,
            row.mean_rank
                .map(|m| m.to_string())
                .unwrap_or_else(|| "n/a".to_string())
        );
    }

    output::ensure_output_dir(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    let table_path = config.table_path();
    output::write_rank_table(&rank_table, &table_path)
        .with_context(|| format!("failed to write rank table {}", table_path.display()))?;
    info!("wrote rank table to {}", table_path.display());

    let chart_path = config.chart_path();
    ChartRenderer::render(&rank_table, &config.chart, &chart_path)
        .with_context(|| format!("failed to render chart {}", chart_path.display()))?;
    info!("wrote chart to {}", chart_path.display());

    Ok(rank_table)
}
