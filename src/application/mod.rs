//! Application layer: report rendering and output
//!
//! This layer orchestrates domain logic and owns the output format.

pub mod report;

pub use report::{render_profile, render_report, write_report, SEPARATOR_WIDTH};
