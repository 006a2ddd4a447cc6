//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "camtriage";

/// Default risk weight for the deer class.
pub const DEFAULT_DEER_WEIGHT: f64 = 1.0;

/// Default risk weight for the other-wildlife class.
pub const DEFAULT_OTHER_WEIGHT: f64 = 0.5;

/// Default risk weight for the predator class.
pub const DEFAULT_PREDATOR_WEIGHT: f64 = 3.0;

/// Priority tier defaults.
pub mod priority {
    /// Default upper bound (inclusive) of the LOW tier.
    pub const DEFAULT_LOW_MAX: f64 = 1.0;

    /// Default upper bound (inclusive) of the MEDIUM tier.
    pub const DEFAULT_MEDIUM_MAX: f64 = 2.0;
}

/// Escalation policy defaults.
pub mod escalation {
    /// Default risk score at or above which a case is escalation-eligible.
    pub const DEFAULT_RISK_THRESHOLD: f64 = 2.0;

    /// Default confidence below which an escalation-eligible case escalates.
    pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.85;
}

/// Score file suffixes recognized as pipeline input.
pub mod score_extensions {
    /// JSON score dump suffix.
    pub const JSON: &str = ".scores.json";
    /// CSV score dump suffix.
    pub const CSV: &str = ".scores.csv";
}

/// Output file suffixes by format.
pub mod output_extensions {
    /// CSV triage output suffix.
    pub const CSV: &str = ".triage.csv";
    /// JSON triage output suffix.
    pub const JSON: &str = ".triage.json";
}

/// Confidence value bounds.
pub mod confidence {
    /// Minimum valid confidence value.
    pub const MIN: f64 = 0.0;
    /// Maximum valid confidence value.
    pub const MAX: f64 = 1.0;
    /// Decimal places for confidence formatting.
    pub const DECIMAL_PLACES: usize = 4;
}

/// Decimal places for risk score formatting.
pub const RISK_DECIMAL_PLACES: usize = 4;

/// Allowed drift of a probability vector's sum from 1.0 before a debug
/// log is emitted. Upstream softmax output sums to 1 up to float rounding;
/// larger drift usually means a truncated or re-normalized dump.
pub const PROBABILITY_SUM_DRIFT: f64 = 1e-3;

/// UTF-8 Byte Order Mark for Excel compatibility in CSV files.
pub const UTF8_BOM: &[u8; 3] = b"\xEF\xBB\xBF";
