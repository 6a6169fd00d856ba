pub mod cli;
pub mod output;

pub use output::{PathSummary, TrajectoryRecord};
