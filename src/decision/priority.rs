//! Priority tier assignment from risk scores.

use crate::constants::priority::{DEFAULT_LOW_MAX, DEFAULT_MEDIUM_MAX};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Discrete priority tier of a triaged case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    /// Routine monitoring.
    Low,
    /// Elevated attention.
    Medium,
    /// Immediate attention.
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Tier boundaries over the risk score.
///
/// Boundary values are inclusive to the lower tier, so an exact hit on
/// `low_max` is LOW and an exact hit on `medium_max` is MEDIUM.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityThresholds {
    /// Upper bound (inclusive) of the LOW tier.
    pub low_max: f64,
    /// Upper bound (inclusive) of the MEDIUM tier.
    pub medium_max: f64,
}

impl Default for PriorityThresholds {
    fn default() -> Self {
        Self {
            low_max: DEFAULT_LOW_MAX,
            medium_max: DEFAULT_MEDIUM_MAX,
        }
    }
}

impl PriorityThresholds {
    /// Validate the threshold ordering.
    ///
    /// `low_max` must be strictly below `medium_max`; a violating
    /// configuration is rejected at startup, never silently swapped.
    pub fn validate(&self) -> Result<()> {
        if !self.low_max.is_finite() || !self.medium_max.is_finite() {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "priority thresholds must be finite, got low_max={}, medium_max={}",
                    self.low_max, self.medium_max
                ),
            });
        }
        if self.low_max >= self.medium_max {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "priority low_max ({}) must be below medium_max ({})",
                    self.low_max, self.medium_max
                ),
            });
        }
        Ok(())
    }
}

/// Map a risk score into its priority tier.
pub fn assign(risk_score: f64, thresholds: &PriorityThresholds) -> Priority {
    if risk_score <= thresholds.low_max {
        Priority::Low
    } else if risk_score <= thresholds.medium_max {
        Priority::Medium
    } else {
        Priority::High
    }
}
