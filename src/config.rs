//! Pipeline configuration.
//!
//! The original workflow hard-coded its paths and prompts; carrying them in
//! one value passed into the pipeline lets tests run against alternate
//! inputs and output locations.

use std::path::PathBuf;

/// Bar chart rendering settings.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Output raster width in pixels.
    pub width: u32,
    /// Output raster height in pixels.
    pub height: u32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Bar fill color as (r, g, b).
    pub bar_color: (u8, u8, u8),
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            // 11x6 inches at 200 dpi
            width: 2200,
            height: 1200,
            title: "2024 MAcc Exit Survey: CORE Courses Ranked by Mean Student Benefit"
                .to_string(),
            x_label: "Mean rank (1 = most beneficial, 8 = least beneficial)".to_string(),
            y_label: "CORE course".to_string(),
            bar_color: (0x2f, 0x6f, 0x95),
        }
    }
}

/// Everything one pipeline run needs to know.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Survey export to analyze (.xlsx/.xls, or delimited text).
    pub input_path: PathBuf,
    /// Directory both outputs are written into. Created if absent.
    pub output_dir: PathBuf,
    /// Rank table file name inside `output_dir`.
    pub table_file: String,
    /// Chart image file name inside `output_dir`.
    pub chart_file: String,
    /// Column labels starting with this prefix are CORE ranking questions.
    pub prompt_prefix: String,
    /// Rows whose first cell starts with this marker are platform metadata.
    pub metadata_marker: String,
    pub chart: ChartConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("2024 MAcc Results Sydney.xlsx"),
            output_dir: PathBuf::from("outputs"),
            table_file: "rank_order.csv".to_string(),
            chart_file: "rank_order.png".to_string(),
            prompt_prefix: "Please place each MAcc CORE course into rank order".to_string(),
            metadata_marker: "{\"ImportId\"".to_string(),
            chart: ChartConfig::default(),
        }
    }
}

impl PipelineConfig {
    pub fn table_path(&self) -> PathBuf {
        self.output_dir.join(&self.table_file)
    }

    pub fn chart_path(&self) -> PathBuf {
        self.output_dir.join(&self.chart_file)
    }
}
