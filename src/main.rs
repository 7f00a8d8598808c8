//! Course Rank - survey export analysis
//!
//! Reads the exit-survey export, ranks the CORE courses by mean student
//! benefit, and writes a sorted table plus a bar chart.

use anyhow::Result;
use course_rank::config::PipelineConfig;
use course_rank::pipeline;
use env_logger::Env;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    pipeline::run(&PipelineConfig::default())?;
    Ok(())
}
