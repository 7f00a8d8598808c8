//! Course Rank - survey export analysis
//!
//! Reads a ranked-choice survey export, computes the mean rank per CORE
//! course, and writes a sorted table plus a horizontal bar chart.

pub mod charts;
pub mod config;
pub mod data;
pub mod output;
pub mod pipeline;
pub mod stats;
