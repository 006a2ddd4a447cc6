//! Post-classification decision policy.
//!
//! Transforms a class-probability vector into a risk score, a priority
//! tier, and an escalation flag. Every function here is pure and operates
//! on immutable inputs; calls are independent and safe to run in parallel.

mod escalation;
mod priority;
pub mod record;
pub mod risk;
mod taxonomy;

pub use escalation::EscalationPolicy;
pub use priority::{Priority, PriorityThresholds, assign};
pub use record::{DecisionRecord, decide};
pub use risk::{risk_score, validate_distribution};
pub use taxonomy::{Taxonomy, TaxonomyEntry};
