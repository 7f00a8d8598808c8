//! Data module - survey export loading and response cleaning

pub mod loader;
pub mod processor;

pub use loader::LoaderError;
pub use processor::{ProcessorError, ResponseProcessor};
