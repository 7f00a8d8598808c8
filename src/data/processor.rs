//! Response Processor Module
//! Handles metadata-row removal and CORE ranking column selection.

use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("no CORE ranking columns start with {prefix:?}")]
    NoMatchingColumns { prefix: String },
}

/// Cleans the loaded export and picks out the ranking questions.
pub struct ResponseProcessor;

impl ResponseProcessor {
    /// Drop platform metadata rows: any row whose first cell, read as text,
    /// starts with `marker`. Every other row is kept unchanged and in order.
    pub fn drop_metadata_rows(df: &DataFrame, marker: &str) -> Result<DataFrame, ProcessorError> {
        let Some(first) = df.get_column_names().first().map(|s| s.to_string()) else {
            return Ok(df.clone());
        };

        let filtered = df
            .clone()
            .lazy()
            .filter(
                col(first.as_str())
                    .cast(DataType::String)
                    .str()
                    .starts_with(lit(marker))
                    // a null first cell is not a metadata row
                    .fill_null(lit(false))
                    .eq(lit(false)),
            )
            .collect()?;
        Ok(filtered)
    }

    /// Labels of the CORE ranking questions, in original column order.
    pub fn select_ranking_columns(
        columns: &[String],
        prefix: &str,
    ) -> Result<Vec<String>, ProcessorError> {
        let selected: Vec<String> = columns
            .iter()
            .filter(|label| label.starts_with(prefix))
            .cloned()
            .collect();

        if selected.is_empty() {
            return Err(ProcessorError::NoMatchingColumns {
                prefix: prefix.to_string(),
            });
        }
        Ok(selected)
    }

    /// Course name from an export column label: the part after the first
    /// " - ", trimmed. Labels without the delimiter are used whole.
    pub fn display_name(label: &str) -> String {
        match label.split_once(" - ") {
            Some((_, rest)) => rest.trim().to_string(),
            None => label.trim().to_string(),
        }
    }
}
