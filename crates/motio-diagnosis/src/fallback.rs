//! Deterministic fallback ranking.
//!
//! The guaranteed-success branch: when the collaborator is unreachable
//! or returns garbage, the first N catalog candidates are ranked in
//! catalog order with decreasing synthetic confidence. This path never
//! fails.

use motio_core::models::condition::Condition;
use motio_core::models::diagnosis::{DiagnosticResult, RankedCondition, TreatmentUrgency};

const BASE_CONFIDENCE: f64 = 0.6;
const CONFIDENCE_STEP: f64 = 0.1;
const MIN_CONFIDENCE: f64 = 0.05;

pub const FALLBACK_REASONING: &str = "Automated differential unavailable; \
candidate ranked by catalog order. Manual clinical correlation required.";

/// Rank the first `max` candidates with confidences 0.6, 0.5, 0.4, …
pub fn differential(candidates: &[Condition], max: usize) -> DiagnosticResult {
    let differential_diagnosis: Vec<RankedCondition> = candidates
        .iter()
        .take(max)
        .enumerate()
        .map(|(i, c)| RankedCondition {
            condition_id: c.id.clone(),
            condition_name: c.name.clone(),
            confidence_score: (BASE_CONFIDENCE - i as f64 * CONFIDENCE_STEP)
                .max(MIN_CONFIDENCE),
            supporting_evidence: Vec::new(),
            clinical_reasoning: FALLBACK_REASONING.to_string(),
        })
        .collect();

    DiagnosticResult {
        differential_diagnosis,
        excluded_conditions: Vec::new(),
        additional_testing_needed: Vec::new(),
        red_flags_identified: Vec::new(),
        treatment_urgency: TreatmentUrgency::Low,
        fallback: true,
    }
}
