use motio_core::models::diagnosis::{DiagnosticResult, RankedCondition, TreatmentUrgency};
use motio_core::models::record::AssessmentMethod;
use motio_core::models::referral::BodyRegion;
use motio_core::models::response::ResponseValue;
use motio_core::models::session::Session;
use motio_core::models::test_queue::{AssessmentState, QueuedAssessment};
use motio_engine::interview::process_response;
use motio_engine::record::{build, findings};

fn sample_diagnosis() -> DiagnosticResult {
    DiagnosticResult {
        differential_diagnosis: vec![sample_candidate()],
        excluded_conditions: vec![],
        additional_testing_needed: vec![],
        red_flags_identified: vec![],
        treatment_urgency: TreatmentUrgency::Low,
        fallback: false,
    }
}

fn sample_candidate() -> RankedCondition {
    RankedCondition {
        condition_id: "rotator_cuff_tendinopathy".to_string(),
        condition_name: "Rotator cuff tendinopathy".to_string(),
        confidence_score: 0.74,
        supporting_evidence: vec!["painful arc".to_string()],
        clinical_reasoning: "Load-related lateral shoulder pain.".to_string(),
    }
}

fn completed_test(id: &str) -> QueuedAssessment {
    QueuedAssessment {
        test_id: id.to_string(),
        display_name: id.to_string(),
        relevance_score: 80,
        category: "special_test".to_string(),
        state: AssessmentState::Completed,
        captured_data: Some(serde_json::json!({"positive": true})),
    }
}

fn answered_session() -> Session {
    let mut session = Session::new();
    for (id, value) in [
        ("chief_complaint", ResponseValue::Text("Shoulder pain".into())),
        ("pain_screening", ResponseValue::YesNo(true)),
        ("affected_region", ResponseValue::Region(BodyRegion::Shoulder)),
        ("pain_intensity", ResponseValue::Number(6.0)),
        ("daily_activity_impact", ResponseValue::YesNo(true)),
        ("work_impact", ResponseValue::Choice("modified_duties".into())),
    ] {
        process_response(&mut session, id, value).expect("valid step");
    }
    let rom: std::collections::BTreeMap<String, u8> =
        [("flexion".to_string(), 2), ("abduction".to_string(), 3)].into();
    process_response(&mut session, "shoulder_rom", ResponseValue::Grid(rom)).expect("valid");
    session
}

#[test]
fn every_answered_question_lands_in_a_bucket() {
    let session = answered_session();
    let f = findings(&session);

    for response in &session.responses {
        let id = &response.question_id;
        let present = f.subjective.contains_key(id)
            || f.objective.contains_key(id)
            || f.functional.contains_key(id)
            || f.additional.contains_key(id);
        assert!(present, "answered question '{id}' was dropped from the findings");
    }
}

#[test]
fn buckets_follow_question_category() {
    let session = answered_session();
    let f = findings(&session);

    assert!(f.subjective.contains_key("pain_intensity"));
    assert!(f.objective.contains_key("shoulder_rom"), "ROM grids are objective findings");
    assert!(f.functional.contains_key("work_impact"));
}

#[test]
fn record_embeds_the_full_diagnosis_and_session_snapshot() {
    let session = answered_session();
    let tests = vec![completed_test("empty_can")];
    let diagnosis = sample_diagnosis();

    let record = build(&session, &tests, &diagnosis, sample_candidate());

    assert_eq!(record.session_id, session.id);
    assert_eq!(record.responses.len(), session.responses.len());
    assert_eq!(record.assessments.len(), 1);
    assert_eq!(record.diagnosis.differential_diagnosis.len(), 1);
    assert_eq!(record.assessment_method, AssessmentMethod::TestsCompleted);
    assert_eq!(record.started_at, session.started_at);
    assert_eq!(
        record.referral_findings.len(),
        1,
        "one referral finding per active region"
    );
}

#[test]
fn record_without_completed_tests_is_marked_tests_skipped() {
    let session = answered_session();
    let mut skipped = completed_test("empty_can");
    skipped.state = AssessmentState::Skipped;
    skipped.captured_data = None;

    let record = build(&session, &[skipped], &sample_diagnosis(), sample_candidate());
    assert_eq!(record.assessment_method, AssessmentMethod::TestsSkipped);
}

#[test]
fn record_serializes_to_stable_json() {
    let session = answered_session();
    let record = build(&session, &[], &sample_diagnosis(), sample_candidate());

    let json = serde_json::to_value(&record).expect("record must serialize");
    assert!(json.get("findings").is_some());
    assert!(json.get("selected_condition").is_some());
    assert_eq!(json["session_id"], serde_json::json!(session.id));
}
