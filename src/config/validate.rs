//! Configuration validation.
//!
//! Runs once at startup; a malformed configuration is fatal and the
//! process refuses to serve until it is corrected.

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    // Taxonomy construction enforces its own invariants (unique labels,
    // positive finite weights).
    config.build_taxonomy()?;

    config.priority.validate()?;
    config.escalation.validate()?;

    if config.defaults.formats.is_empty() {
        return Err(Error::InvalidConfiguration {
            message: "defaults.formats must name at least one output format".to_string(),
        });
    }

    Ok(())
}
