use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FlagSeverity {
    /// Batched and shown with the summary.
    Advisory,
    /// Surfaced to the clinician before the next question is presented.
    Urgent,
}

/// A response pattern indicating possible serious pathology. Always
/// derived from the session — never stored as mutable state.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RedFlag {
    pub text: String,
    pub source_question_id: String,
    pub severity: FlagSeverity,
}
