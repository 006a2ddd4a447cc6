//! Escalation gate for secondary processing.

use crate::constants::escalation::{DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_RISK_THRESHOLD};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Policy deciding whether a case warrants secondary, more expensive
/// classification.
///
/// Escalation exists to resolve dangerous ambiguity, not general
/// uncertainty: a case escalates only when it is high risk AND the
/// classifier was not confident about it. A confidently classified
/// high-risk case stays on the fast path, and a low-risk uncertain case
/// is not worth the extra cost.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct EscalationPolicy {
    /// Risk score at or above which a case is escalation-eligible.
    pub risk_threshold: f64,
    /// Confidence below which an eligible case escalates.
    pub confidence_threshold: f64,
}

impl Default for EscalationPolicy {
    fn default() -> Self {
        Self {
            risk_threshold: DEFAULT_RISK_THRESHOLD,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}

impl EscalationPolicy {
    /// Validate the policy parameters.
    pub fn validate(&self) -> Result<()> {
        if !self.risk_threshold.is_finite() || self.risk_threshold < 0.0 {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "escalation risk_threshold must be a non-negative finite number, got {}",
                    self.risk_threshold
                ),
            });
        }
        if !self.confidence_threshold.is_finite()
            || !(0.0..=1.0).contains(&self.confidence_threshold)
        {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "escalation confidence_threshold must be between 0.0 and 1.0, got {}",
                    self.confidence_threshold
                ),
            });
        }
        Ok(())
    }

    /// Whether a case should be routed to secondary processing.
    ///
    /// Pure boolean gate; its only externally visible effect is the
    /// `escalate` flag on the decision record.
    pub fn should_escalate(&self, confidence: f64, risk_score: f64) -> bool {
        risk_score >= self.risk_threshold && confidence < self.confidence_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_policy() -> EscalationPolicy {
        EscalationPolicy {
            risk_threshold: 2.0,
            confidence_threshold: 0.85,
        }
    }

    #[test]
    fn test_high_risk_low_confidence_escalates() {
        assert!(test_policy().should_escalate(0.8, 2.55));
    }

    #[test]
    fn test_high_risk_high_confidence_stays_on_fast_path() {
        assert!(!test_policy().should_escalate(0.95, 2.55));
    }

    #[test]
    fn test_low_risk_low_confidence_does_not_escalate() {
        assert!(!test_policy().should_escalate(0.4, 1.5));
    }

    #[test]
    fn test_low_risk_high_confidence_does_not_escalate() {
        assert!(!test_policy().should_escalate(0.95, 0.8));
    }

    #[test]
    fn test_risk_threshold_inclusive_confidence_exclusive() {
        let policy = test_policy();

        // Risk at the threshold is eligible.
        assert!(policy.should_escalate(0.5, 2.0));
        // Confidence exactly at the threshold is not "low confidence".
        assert!(!policy.should_escalate(0.85, 2.5));
    }

    #[test]
    fn test_invalid_policies_rejected() {
        let policy = EscalationPolicy {
            risk_threshold: -1.0,
            confidence_threshold: 0.85,
        };
        assert!(policy.validate().is_err());

        let policy = EscalationPolicy {
            risk_threshold: 2.0,
            confidence_threshold: 1.5,
        };
        assert!(policy.validate().is_err());

        let policy = EscalationPolicy {
            risk_threshold: f64::NAN,
            confidence_threshold: 0.85,
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_default_policy_valid() {
        assert!(EscalationPolicy::default().validate().is_ok());
    }
}
