//! CSV output format writer.

use crate::constants::{RISK_DECIMAL_PLACES, UTF8_BOM, confidence::DECIMAL_PLACES};
use crate::error::Result;
use crate::output::{ImageDecision, OutputWriter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// CSV format output writer.
pub struct CsvWriter {
    writer: BufWriter<Box<dyn Write>>,
    bom: bool,
}

impl CsvWriter {
    /// Create a CSV writer targeting a file.
    ///
    /// `bom` prepends a UTF-8 BOM for Excel compatibility.
    pub fn new(path: &Path, bom: bool) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(Box::new(file)),
            bom,
        })
    }

    /// Create a CSV writer targeting stdout. Never writes a BOM.
    pub fn to_stdout() -> Self {
        Self {
            writer: BufWriter::new(Box::new(std::io::stdout())),
            bom: false,
        }
    }
}

impl OutputWriter for CsvWriter {
    fn write_header(&mut self) -> Result<()> {
        if self.bom {
            self.writer.write_all(UTF8_BOM)?;
        }
        writeln!(
            self.writer,
            "Image,Prediction,Confidence,Risk score,Priority,Escalate,Captured,File"
        )?;
        Ok(())
    }

    fn write_decision(&mut self, decision: &ImageDecision) -> Result<()> {
        let captured = decision
            .captured_at
            .map(|t| t.to_rfc3339())
            .unwrap_or_default();

        writeln!(
            self.writer,
            "{},{},{:.conf$},{:.risk$},{},{},{},{}",
            escape_csv(&decision.image),
            escape_csv(&decision.record.prediction),
            decision.record.confidence,
            decision.record.risk_score,
            decision.record.priority,
            decision.record.escalate,
            captured,
            escape_csv(&decision.source.display().to_string()),
            conf = DECIMAL_PLACES,
            risk = RISK_DECIMAL_PLACES,
        )?;
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Escape a value for CSV output.
fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
