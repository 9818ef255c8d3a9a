use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Lifecycle of a queued physical test. Forward-only:
/// pending -> in_progress -> completed | skipped. No reopening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentState {
    Pending,
    InProgress,
    Completed,
    Skipped,
}

impl AssessmentState {
    /// True once the item can never change again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, AssessmentState::Completed | AssessmentState::Skipped)
    }
}

/// A physical/clinical test selected for execution during the encounter.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QueuedAssessment {
    pub test_id: String,
    pub display_name: String,
    /// 0-100, drives the initial ordering of recommended tests.
    pub relevance_score: u8,
    pub category: String,
    pub state: AssessmentState,
    /// Form data captured when the test was submitted.
    pub captured_data: Option<serde_json::Value>,
}
