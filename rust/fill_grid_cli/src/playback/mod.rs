// rust/fill_grid_cli/src/playback/mod.rs
#![forbid(unsafe_code)]

pub mod report;
pub mod runner;

pub use report::RunReport;
pub use runner::{Runner, RunnerConfig};
