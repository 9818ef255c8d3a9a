//! Diagnostic request assembly.

use motio_core::models::diagnosis::DiagnosticRequest;
use motio_core::models::session::Session;
use motio_core::models::test_queue::QueuedAssessment;

/// Maximum number of ranked candidates requested from the collaborator.
pub const MAX_CONDITIONS: u32 = 5;

/// Fixed confidence floor for collaborator results.
pub const CONFIDENCE_THRESHOLD: f64 = 0.3;

pub const REQUEST_TYPE: &str = "differential_diagnosis";

/// Build the collaborator request: categorized session findings, the
/// completed test records folded into the objective bucket, and the full
/// static condition catalog as candidates.
pub fn build(session: &Session, completed_tests: &[QueuedAssessment]) -> DiagnosticRequest {
    let mut findings = motio_engine::record::findings(session);

    for test in completed_tests {
        let value = serde_json::json!({
            "test_id": test.test_id,
            "name": test.display_name,
            "category": test.category,
            "result": test.captured_data,
        });
        findings.objective.insert(format!("test:{}", test.test_id), value);
    }

    DiagnosticRequest {
        assessment_data: findings,
        available_conditions: motio_catalog::conditions::all().to_vec(),
        request_type: REQUEST_TYPE.to_string(),
        max_conditions: MAX_CONDITIONS,
        confidence_threshold: CONFIDENCE_THRESHOLD,
    }
}
