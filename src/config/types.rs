//! Configuration type definitions.

use crate::constants::{DEFAULT_DEER_WEIGHT, DEFAULT_OTHER_WEIGHT, DEFAULT_PREDATOR_WEIGHT};
use crate::decision::{EscalationPolicy, PriorityThresholds, Taxonomy, TaxonomyEntry};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Complete application configuration.
///
/// Loaded once at startup and read-only for the remainder of the process
/// lifetime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Class taxonomy in classifier output order.
    #[serde(default)]
    pub taxonomy: TaxonomyConfig,

    /// Priority tier thresholds.
    #[serde(default)]
    pub priority: PriorityThresholds,

    /// Escalation policy.
    #[serde(default)]
    pub escalation: EscalationPolicy,

    /// Default analysis settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl Config {
    /// Build the validated runtime taxonomy from this configuration.
    pub fn build_taxonomy(&self) -> Result<Taxonomy> {
        Taxonomy::new(
            self.taxonomy
                .classes
                .iter()
                .map(|c| TaxonomyEntry {
                    label: c.label.clone(),
                    risk_weight: c.risk_weight,
                })
                .collect(),
        )
    }
}

/// Taxonomy section of the configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    /// Classes in the order the upstream classifier emits them.
    pub classes: Vec<ClassConfig>,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        // Matches the upstream extractor, which emits classes in sorted
        // label order.
        Self {
            classes: vec![
                ClassConfig {
                    label: "deer".to_string(),
                    risk_weight: DEFAULT_DEER_WEIGHT,
                },
                ClassConfig {
                    label: "other".to_string(),
                    risk_weight: DEFAULT_OTHER_WEIGHT,
                },
                ClassConfig {
                    label: "predator".to_string(),
                    risk_weight: DEFAULT_PREDATOR_WEIGHT,
                },
            ],
        }
    }
}

/// Configuration for a single taxonomy class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassConfig {
    /// Class label as emitted by the classifier.
    pub label: String,

    /// Intrinsic risk weight of the class.
    pub risk_weight: f64,
}

/// Default analysis settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Output formats.
    pub formats: Vec<OutputFormat>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            formats: vec![OutputFormat::Csv],
        }
    }
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Triage results as CSV.
    Csv,
    /// Triage results as JSON with summary statistics.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}
