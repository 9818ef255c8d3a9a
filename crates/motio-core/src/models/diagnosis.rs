use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::condition::Condition;

/// Session answers flattened into the three clinical buckets, keyed by
/// question id. Anything that fits no bucket lands in `additional` so no
/// answered question is ever dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalFindings {
    pub subjective: BTreeMap<String, serde_json::Value>,
    pub objective: BTreeMap<String, serde_json::Value>,
    pub functional: BTreeMap<String, serde_json::Value>,
    pub additional: BTreeMap<String, serde_json::Value>,
}

/// Request sent to the external diagnostic collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosticRequest {
    pub assessment_data: ClinicalFindings,
    pub available_conditions: Vec<Condition>,
    pub request_type: String,
    pub max_conditions: u32,
    pub confidence_threshold: f64,
}

/// One ranked candidate in a differential diagnosis.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RankedCondition {
    pub condition_id: String,
    pub condition_name: String,
    /// 0.0..=1.0.
    pub confidence_score: f64,
    pub supporting_evidence: Vec<String>,
    pub clinical_reasoning: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TreatmentUrgency {
    Low,
    Moderate,
    High,
    Urgent,
}

/// Response from the diagnostic collaborator, or the deterministic
/// fallback ranking when the collaborator is unavailable.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosticResult {
    pub differential_diagnosis: Vec<RankedCondition>,
    #[serde(default)]
    pub excluded_conditions: Vec<String>,
    #[serde(default)]
    pub additional_testing_needed: Vec<String>,
    #[serde(default)]
    pub red_flags_identified: Vec<String>,
    pub treatment_urgency: TreatmentUrgency,
    /// True when this result came from the fallback ranking rather than
    /// the collaborator.
    #[serde(default)]
    pub fallback: bool,
}
