//! Rank Calculator Module
//! Computes the mean rank per CORE course and the final rank order.

use crate::data::ResponseProcessor;
use polars::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// One course in the finished rank table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankRow {
    #[serde(rename = "Course name")]
    pub course: String,
    /// Mean of the non-missing ranks, rounded to 3 decimal places. `None`
    /// when every respondent left the course unranked.
    #[serde(rename = "Mean rank")]
    pub mean_rank: Option<f64>,
    /// 1-based position after sorting, dense over 1..N.
    #[serde(rename = "Final rank position")]
    pub position: u32,
}

pub struct RankCalculator;

impl RankCalculator {
    /// Mean of one ranking column. Cells that fail numeric coercion count
    /// as missing and are excluded from the mean, never treated as zero.
    pub fn column_mean(df: &DataFrame, column: &str) -> Result<Option<f64>, RankError> {
        let ranks = df.column(column)?.cast(&DataType::Float64)?;
        Ok(ranks.f64()?.mean())
    }

    /// Build the rank table from the filtered responses: one row per CORE
    /// column, sorted ascending by (mean rank, course name). Courses with no
    /// ranked responses at all sort after every course with a mean.
    pub fn build_rank_table(df: &DataFrame, columns: &[String]) -> Result<Vec<RankRow>, RankError> {
        let mut courses: Vec<(String, Option<f64>)> = Vec::with_capacity(columns.len());
        for column in columns {
            let mean = Self::column_mean(df, column)?;
            courses.push((ResponseProcessor::display_name(column), mean));
        }

        courses.sort_by(|a, b| match (a.1, b.1) {
            (Some(x), Some(y)) => x
                .partial_cmp(&y)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.0.cmp(&b.0),
        });

        Ok(courses
            .into_iter()
            .enumerate()
            .map(|(idx, (course, mean))| RankRow {
                course,
                mean_rank: mean.map(|m| (m * 1000.0).round() / 1000.0),
                position: (idx + 1) as u32,
            })
            .collect())
    }
}
