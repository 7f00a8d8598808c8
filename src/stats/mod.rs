//! Stats module - mean-rank aggregation

mod ranker;

pub use ranker::{RankCalculator, RankError, RankRow};
