//! The assessment record builder.
//!
//! Pure aggregation: flattens the session into categorized clinical
//! findings and combines it with the diagnosis outcome into the one
//! immutable artifact handed to persistence. Every answered question
//! lands in a bucket — nothing is silently dropped.

use tracing::info;
use uuid::Uuid;

use motio_catalog::questions;
use motio_core::models::diagnosis::{ClinicalFindings, DiagnosticResult, RankedCondition};
use motio_core::models::question::PathwayTag;
use motio_core::models::record::{AssessmentMethod, ClinicalRecord};
use motio_core::models::referral::ReferralFinding;
use motio_core::models::session::Session;
use motio_core::models::test_queue::{AssessmentState, QueuedAssessment};

use crate::{red_flags, referral};

/// Flatten every answered question into the subjective / objective /
/// functional buckets, keyed by question id. Questions with no bucket
/// (or not found in the catalog) go to `additional` rather than being
/// dropped.
pub fn findings(session: &Session) -> ClinicalFindings {
    let mut out = ClinicalFindings::default();

    for response in &session.responses {
        let value = serde_json::to_value(&response.value)
            .unwrap_or(serde_json::Value::Null);
        let key = response.question_id.clone();

        let bucket = match questions::question(&response.question_id) {
            Ok(template) => match template.pathway {
                PathwayTag::Intake
                | PathwayTag::Pain
                | PathwayTag::Neurological
                | PathwayTag::Referral(_) => &mut out.subjective,
                // ROM grids are measured findings; the factor questions
                // are still patient-reported.
                PathwayTag::Regional(_) if template.id.ends_with("_rom") => &mut out.objective,
                PathwayTag::Regional(_) => &mut out.subjective,
                PathwayTag::Functional => &mut out.functional,
            },
            Err(_) => &mut out.additional,
        };
        bucket.insert(key, value);
    }

    out
}

/// Referral findings for every region the session activated.
fn referral_findings(session: &Session) -> Vec<ReferralFinding> {
    session
        .active_pathways
        .iter()
        .filter_map(|p| match p {
            PathwayTag::Referral(region) => Some(*region),
            _ => None,
        })
        .map(|region| {
            let answers = referral::answers_from_session(region, session);
            referral::evaluate(region, &answers)
        })
        .collect()
}

/// Build the final clinical record.
///
/// The full diagnosis result is embedded — including unselected
/// candidates — for audit; `selected` is the clinician's choice from the
/// ranked list or from a manual out-of-band search. No side effects:
/// handing the record to persistence is the caller's job.
pub fn build(
    session: &Session,
    assessments: &[QueuedAssessment],
    diagnosis: &DiagnosticResult,
    selected: RankedCondition,
) -> ClinicalRecord {
    let method = if assessments
        .iter()
        .any(|a| a.state == AssessmentState::Completed)
    {
        AssessmentMethod::TestsCompleted
    } else {
        AssessmentMethod::TestsSkipped
    };

    let record = ClinicalRecord {
        id: Uuid::new_v4(),
        session_id: session.id,
        findings: findings(session),
        responses: session.responses.clone(),
        red_flags: red_flags::evaluate(session),
        referral_findings: referral_findings(session),
        assessments: assessments.to_vec(),
        diagnosis: diagnosis.clone(),
        selected_condition: selected,
        assessment_method: method,
        started_at: session.started_at,
        finalized_at: jiff::Timestamp::now(),
    };

    info!(
        record_id = %record.id,
        session_id = %session.id,
        responses = record.responses.len(),
        method = ?record.assessment_method,
        "clinical record built"
    );

    record
}
