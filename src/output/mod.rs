//! Output formats for triage results.

mod csv;
mod json;
pub mod progress;
mod types;
mod writer;

pub use csv::CsvWriter;
pub use json::{JsonResultFile, JsonResultWriter};
pub use types::ImageDecision;
pub use writer::OutputWriter;
