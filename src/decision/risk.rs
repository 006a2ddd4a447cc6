//! Risk scoring over classifier probability vectors.

use crate::constants::PROBABILITY_SUM_DRIFT;
use crate::decision::Taxonomy;
use crate::error::{Error, Result};
use tracing::debug;

/// Compute the expected risk of a case under the classifier's belief.
///
/// The score is the probability-weighted sum of per-class risk weights,
/// computed in double precision. It is monotonic both in the mass the model
/// places on dangerous classes and in the configured danger of those classes,
/// and a uniform distribution yields the mean risk weight rather than a
/// spurious extreme. The result always lies within
/// `[taxonomy.min_weight(), taxonomy.max_weight()]`.
///
/// Fails with [`Error::InvalidDistribution`] if the vector length does not
/// match the taxonomy or any value is negative, above 1, or non-finite.
pub fn risk_score(probabilities: &[f64], taxonomy: &Taxonomy) -> Result<f64> {
    validate_distribution(probabilities, taxonomy)?;

    let sum: f64 = probabilities.iter().sum();
    if (sum - 1.0).abs() > PROBABILITY_SUM_DRIFT {
        debug!("probability vector sums to {sum:.6}, expected 1.0");
    }

    let score = probabilities
        .iter()
        .zip(taxonomy.entries())
        .map(|(p, entry)| p * entry.risk_weight)
        .sum();

    Ok(score)
}

/// Check a probability vector against the taxonomy contract.
///
/// Length must equal the taxonomy size and every value must be a finite
/// number in `[0, 1]`.
pub fn validate_distribution(probabilities: &[f64], taxonomy: &Taxonomy) -> Result<()> {
    if probabilities.len() != taxonomy.len() {
        return Err(Error::InvalidDistribution {
            reason: format!(
                "expected {} probabilities (one per class), got {}",
                taxonomy.len(),
                probabilities.len()
            ),
        });
    }

    for (index, &p) in probabilities.iter().enumerate() {
        if !p.is_finite() {
            return Err(Error::InvalidDistribution {
                reason: format!("probability at index {index} is not finite"),
            });
        }
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidDistribution {
                reason: format!("probability at index {index} is out of range: {p}"),
            });
        }
    }

    Ok(())
}
