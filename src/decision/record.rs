//! Decision record assembly.

use crate::decision::{EscalationPolicy, Priority, PriorityThresholds, Taxonomy, risk};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Terminal output of one triage decision.
///
/// Created once per probability vector, immutable once constructed, and
/// returned by value. The field set is the stable contract presentation
/// layers depend on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Predicted class label (argmax of the probability vector).
    pub prediction: String,
    /// Probability assigned to the predicted class.
    pub confidence: f64,
    /// Expected risk under the classifier's belief.
    pub risk_score: f64,
    /// Priority tier derived from the risk score.
    pub priority: Priority,
    /// Whether the case should be routed to secondary processing.
    pub escalate: bool,
}

/// Build a decision record from a probability vector.
///
/// Deterministic: the same vector always yields the same record. On an
/// exact probability tie, the lowest-index class wins. The only error path
/// is [`Error::InvalidDistribution`] from input validation; assembly either
/// fully succeeds or fails without producing a partial record.
pub fn decide(
    probabilities: &[f64],
    taxonomy: &Taxonomy,
    thresholds: &PriorityThresholds,
    policy: &EscalationPolicy,
) -> Result<DecisionRecord> {
    // Validates length, range, and finiteness before anything else; the
    // vector is non-empty and taxonomy-sized past this point.
    let risk_score = risk::risk_score(probabilities, taxonomy)?;

    let prediction_index = argmax(probabilities);
    let confidence = probabilities[prediction_index];

    Ok(DecisionRecord {
        prediction: taxonomy.entries()[prediction_index].label.clone(),
        confidence,
        risk_score,
        priority: super::priority::assign(risk_score, thresholds),
        escalate: policy.should_escalate(confidence, risk_score),
    })
}

/// Index of the largest value. Ties resolve to the lowest index.
///
/// Callers must pass a non-empty, validated slice.
fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (index, &value) in values.iter().enumerate().skip(1) {
        if value > values[best] {
            best = index;
        }
    }
    best
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::decision::TaxonomyEntry;
    use crate::error::Error;

    fn test_taxonomy() -> Taxonomy {
        Taxonomy::new(vec![
            TaxonomyEntry {
                label: "deer".to_string(),
                risk_weight: 1.0,
            },
            TaxonomyEntry {
                label: "other".to_string(),
                risk_weight: 0.5,
            },
            TaxonomyEntry {
                label: "predator".to_string(),
                risk_weight: 3.0,
            },
        ])
        .unwrap()
    }

    fn test_thresholds() -> PriorityThresholds {
        PriorityThresholds {
            low_max: 1.0,
            medium_max: 2.0,
        }
    }

    fn test_policy() -> EscalationPolicy {
        EscalationPolicy {
            risk_threshold: 2.0,
            confidence_threshold: 0.85,
        }
    }

    #[test]
    fn test_uncertain_predator_escalates_high() {
        let record = decide(
            &[0.1, 0.1, 0.8],
            &test_taxonomy(),
            &test_thresholds(),
            &test_policy(),
        )
        .unwrap();

        assert_eq!(record.prediction, "predator");
        assert_eq!(record.confidence, 0.8);
        assert!((record.risk_score - 2.55).abs() < 1e-12);
        assert_eq!(record.priority, Priority::High);
        assert!(record.escalate);
    }

    #[test]
    fn test_uniform_distribution_is_medium_without_escalation() {
        let third = 1.0 / 3.0;
        let record = decide(
            &[third, third, third],
            &test_taxonomy(),
            &test_thresholds(),
            &test_policy(),
        )
        .unwrap();

        // Uniform belief lands on the mean weight; below the escalation
        // risk threshold despite the low confidence.
        assert!((record.risk_score - 1.5).abs() < 1e-12);
        assert_eq!(record.priority, Priority::Medium);
        assert!(!record.escalate);
    }

    #[test]
    fn test_confident_deer_is_low_priority() {
        let record = decide(
            &[0.9, 0.05, 0.05],
            &test_taxonomy(),
            &test_thresholds(),
            &test_policy(),
        )
        .unwrap();

        assert_eq!(record.prediction, "deer");
        assert_eq!(record.priority, Priority::Low);
        assert!(!record.escalate);
    }

    #[test]
    fn test_tie_breaks_to_lowest_index() {
        // deer and other tie exactly; deer (index 0) must win, and the
        // result must be identical across repeated calls.
        for _ in 0..10 {
            let record = decide(
                &[0.4, 0.4, 0.2],
                &test_taxonomy(),
                &test_thresholds(),
                &test_policy(),
            )
            .unwrap();
            assert_eq!(record.prediction, "deer");
            assert_eq!(record.confidence, 0.4);
        }
    }

    #[test]
    fn test_exact_uniform_tie_picks_first_class() {
        let third = 1.0 / 3.0;
        let record = decide(
            &[third, third, third],
            &test_taxonomy(),
            &test_thresholds(),
            &test_policy(),
        )
        .unwrap();
        assert_eq!(record.prediction, "deer");
    }

    #[test]
    fn test_malformed_input_produces_no_record() {
        let result = decide(
            &[0.5, 0.6],
            &test_taxonomy(),
            &test_thresholds(),
            &test_policy(),
        );
        assert!(matches!(result, Err(Error::InvalidDistribution { .. })));
    }

    #[test]
    fn test_record_serializes_priority_uppercase() {
        let record = decide(
            &[0.1, 0.1, 0.8],
            &test_taxonomy(),
            &test_thresholds(),
            &test_policy(),
        )
        .unwrap();

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"priority\":\"HIGH\""));
        assert!(json.contains("\"escalate\":true"));
    }
}
