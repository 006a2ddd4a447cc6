//! Output writer trait definition.

use crate::error::Result;
use crate::output::ImageDecision;

/// Trait for writing triage results.
pub trait OutputWriter {
    /// Write the file header (if applicable).
    fn write_header(&mut self) -> Result<()>;

    /// Write a single triaged image.
    fn write_decision(&mut self, decision: &ImageDecision) -> Result<()>;

    /// Finalize the output (flush, close, etc.).
    fn finalize(&mut self) -> Result<()>;
}
