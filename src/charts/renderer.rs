//! Static Chart Renderer
//! Rasterizes the rank table as a horizontal bar chart.
//!
//! Layout mirrors the survey report figure: one bar per course, bar length =
//! mean rank, best-ranked course at the top, faint dashed vertical gridlines
//! at whole ranks, fixed title and axis labels.

use crate::config::ChartConfig;
use crate::stats::RankRow;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

const GRID_GRAY: RGBColor = RGBColor(128, 128, 128);

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("nothing to chart: rank table is empty")]
    EmptyTable,
    #[error("chart rendering failed: {0}")]
    Render(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Render(err.to_string())
    }
}

pub struct ChartRenderer;

impl ChartRenderer {
    /// Render `rows` (already in final rank order) to a PNG at `path`,
    /// overwriting any existing file. Courses without a mean keep their
    /// axis label but get no bar.
    pub fn render(rows: &[RankRow], cfg: &ChartConfig, path: &Path) -> Result<(), ChartError> {
        if rows.is_empty() {
            return Err(ChartError::EmptyTable);
        }

        let n = rows.len();
        let max_mean = rows
            .iter()
            .filter_map(|row| row.mean_rank)
            .fold(1.0f64, f64::max);
        let x_max = max_mean * 1.05;

        let root = BitMapBackend::new(path, (cfg.width, cfg.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let bar_color = RGBColor(cfg.bar_color.0, cfg.bar_color.1, cfg.bar_color.2);

        let mut chart = ChartBuilder::on(&root)
            .caption(&cfg.title, ("sans-serif", 44))
            .margin(24)
            .x_label_area_size(100)
            .y_label_area_size(420)
            .build_cartesian_2d(0f64..x_max, (0..n).into_segmented())?;

        // Segment 0 sits at the bottom, so the y axis is filled in reverse
        // to put rank position 1 at the top.
        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_desc(&cfg.x_label)
            .y_desc(&cfg.y_label)
            .axis_desc_style(("sans-serif", 32))
            .label_style(("sans-serif", 26))
            .y_labels(n)
            .y_label_formatter(&|segment| match segment {
                SegmentValue::CenterOf(idx) if *idx < n => rows[n - 1 - idx].course.clone(),
                _ => String::new(),
            })
            .draw()?;

        let grid_style = ShapeStyle::from(&GRID_GRAY.mix(0.35)).stroke_width(1);
        let mut tick = 1.0;
        while tick < x_max {
            chart.draw_series(DashedLineSeries::new(
                vec![
                    (tick, SegmentValue::Exact(0)),
                    (tick, SegmentValue::Exact(n)),
                ],
                8,
                6,
                grid_style,
            ))?;
            tick += 1.0;
        }

        for (idx, row) in rows.iter().enumerate() {
            let Some(mean) = row.mean_rank else {
                continue;
            };
            let segment = n - 1 - idx;
            let mut bar = Rectangle::new(
                [
                    (0.0, SegmentValue::Exact(segment)),
                    (mean, SegmentValue::Exact(segment + 1)),
                ],
                bar_color.filled(),
            );
            bar.set_margin(10, 10, 0, 0);
            chart.draw_series(std::iter::once(bar))?;
        }

        root.present()?;
        Ok(())
    }
}
