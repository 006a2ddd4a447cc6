//! CLI argument validators.
//!
//! Shared validation functions for CLI argument parsing.

/// Parse and validate a confidence value (0.0-1.0).
pub fn parse_confidence(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !(0.0..=1.0).contains(&value) {
        return Err(format!(
            "confidence must be between 0.0 and 1.0, got {value}"
        ));
    }

    Ok(value)
}

/// Parse and validate a risk threshold (non-negative, finite).
pub fn parse_risk_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !value.is_finite() || value < 0.0 {
        return Err(format!(
            "risk threshold must be a non-negative number, got {value}"
        ));
    }

    Ok(value)
}
