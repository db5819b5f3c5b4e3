pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod generator;
pub mod logging;
pub mod output;
pub mod report;
pub mod table;

pub use error::{PlotError, Result};
pub use generator::ReportGenerator;
pub use report::ReportDocument;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INPUT_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
