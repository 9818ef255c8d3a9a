use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::diagnosis::{ClinicalFindings, DiagnosticResult, RankedCondition};
use super::red_flag::RedFlag;
use super::referral::ReferralFinding;
use super::response::Response;
use super::test_queue::QueuedAssessment;

/// How the final diagnosis was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentMethod {
    /// Physical tests were executed before diagnosis.
    TestsCompleted,
    /// Physical tests were skipped; diagnosis ran on interview data only.
    TestsSkipped,
}

/// The final persisted artifact of one encounter: session snapshot,
/// completed assessments, the full diagnosis result (even unselected
/// candidates, for audit), and the clinician's chosen condition.
/// Built once, immutable, handed off to the persistence collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalRecord {
    pub id: Uuid,
    pub session_id: Uuid,
    pub findings: ClinicalFindings,
    /// Raw responses in interview order, for replay/audit.
    pub responses: Vec<Response>,
    pub red_flags: Vec<RedFlag>,
    pub referral_findings: Vec<ReferralFinding>,
    pub assessments: Vec<QueuedAssessment>,
    pub diagnosis: DiagnosticResult,
    pub selected_condition: RankedCondition,
    pub assessment_method: AssessmentMethod,
    pub started_at: jiff::Timestamp,
    pub finalized_at: jiff::Timestamp,
}
