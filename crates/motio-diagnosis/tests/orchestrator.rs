use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use motio_core::models::diagnosis::{
    DiagnosticRequest, DiagnosticResult, RankedCondition, TreatmentUrgency,
};
use motio_core::models::session::Session;
use motio_diagnosis::{DiagnosisError, DiagnosisOrchestrator, DiagnosticProvider, Phase};

/// Scripted collaborator: counts invocations and either succeeds with a
/// canned ranking or fails like a network timeout.
struct ScriptedProvider {
    calls: AtomicUsize,
    response: Result<DiagnosticResult, String>,
    latency: Duration,
}

impl ScriptedProvider {
    fn succeeding(result: DiagnosticResult) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            response: Ok(result),
            latency: Duration::from_millis(20),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            response: Err(message.to_string()),
            latency: Duration::from_millis(5),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DiagnosticProvider for ScriptedProvider {
    async fn differential(
        &self,
        _request: &DiagnosticRequest,
    ) -> Result<DiagnosticResult, DiagnosisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.latency).await;
        match &self.response {
            Ok(result) => Ok(result.clone()),
            Err(message) => Err(DiagnosisError::Collaborator(message.clone())),
        }
    }
}

fn request() -> DiagnosticRequest {
    motio_diagnosis::request::build(&Session::new(), &[])
}

fn ranked(id: &str, confidence: f64) -> RankedCondition {
    RankedCondition {
        condition_id: id.to_string(),
        condition_name: id.to_string(),
        confidence_score: confidence,
        supporting_evidence: vec![],
        clinical_reasoning: "scripted".to_string(),
    }
}

fn scripted_result(entries: Vec<RankedCondition>) -> DiagnosticResult {
    DiagnosticResult {
        differential_diagnosis: entries,
        excluded_conditions: vec![],
        additional_testing_needed: vec![],
        red_flags_identified: vec![],
        treatment_urgency: TreatmentUrgency::Moderate,
        fallback: false,
    }
}

#[tokio::test]
async fn racing_callers_share_one_invocation_and_one_result() {
    let provider = ScriptedProvider::succeeding(scripted_result(vec![ranked(
        "rotator_cuff_tendinopathy",
        0.8,
    )]));
    let orchestrator = Arc::new(DiagnosisOrchestrator::new(provider));

    let a = {
        let o = Arc::clone(&orchestrator);
        tokio::spawn(async move { o.run(request()).await })
    };
    let b = {
        let o = Arc::clone(&orchestrator);
        tokio::spawn(async move { o.run(request()).await })
    };

    let result_a = a.await.expect("task a");
    let result_b = b.await.expect("task b");

    assert!(
        Arc::ptr_eq(&result_a, &result_b),
        "racing callers must observe the same shared result object"
    );
    assert_eq!(orchestrator.phase().await, Phase::Done);
}

#[tokio::test]
async fn done_is_terminal_and_the_result_is_cached() {
    let provider = ScriptedProvider::succeeding(scripted_result(vec![ranked(
        "mechanical_neck_pain",
        0.7,
    )]));
    let orchestrator = Arc::new(DiagnosisOrchestrator::new(provider));

    let first = orchestrator.run(request()).await;
    let second = orchestrator.run(request()).await;

    assert!(Arc::ptr_eq(&first, &second), "a delivered diagnosis is terminal");
    assert_eq!(orchestrator.result().map(|r| r.differential_diagnosis.len()), Some(1));
}

#[tokio::test]
async fn collaborator_failure_resolves_to_the_deterministic_fallback() {
    let orchestrator = Arc::new(DiagnosisOrchestrator::new(ScriptedProvider::failing(
        "connection timed out",
    )));

    let result = orchestrator.run(request()).await;

    assert!(result.fallback);
    assert_eq!(result.differential_diagnosis.len(), 5);

    // Scenario C: first five catalog candidates, scores 0.6 down to 0.2.
    let catalog = motio_catalog::conditions::all();
    for (i, entry) in result.differential_diagnosis.iter().enumerate() {
        assert_eq!(entry.condition_id, catalog[i].id, "fallback must follow catalog order");
        let expected = 0.6 - i as f64 * 0.1;
        assert!(
            (entry.confidence_score - expected).abs() < 1e-9,
            "expected confidence {expected} at rank {i}, got {}",
            entry.confidence_score
        );
    }
}

#[tokio::test]
async fn malformed_collaborator_response_falls_back() {
    // References a condition that is not a catalog candidate.
    let provider =
        ScriptedProvider::succeeding(scripted_result(vec![ranked("made_up_condition", 0.9)]));
    let orchestrator = Arc::new(DiagnosisOrchestrator::new(provider));

    let result = orchestrator.run(request()).await;
    assert!(result.fallback, "an out-of-catalog id must trigger the fallback");
}

#[tokio::test]
async fn empty_ranking_falls_back() {
    let provider = ScriptedProvider::succeeding(scripted_result(vec![]));
    let orchestrator = Arc::new(DiagnosisOrchestrator::new(provider));

    let result = orchestrator.run(request()).await;
    assert!(result.fallback);
    assert!(!result.differential_diagnosis.is_empty());
}

#[tokio::test]
async fn valid_response_is_sorted_and_truncated() {
    let provider = ScriptedProvider::succeeding(scripted_result(vec![
        ranked("mechanical_neck_pain", 0.4),
        ranked("cervical_radiculopathy", 0.9),
        ranked("whiplash_associated_disorder", 0.6),
    ]));
    let orchestrator = Arc::new(DiagnosisOrchestrator::new(provider));

    let result = orchestrator.run(request()).await;
    let scores: Vec<f64> = result
        .differential_diagnosis
        .iter()
        .map(|e| e.confidence_score)
        .collect();
    assert_eq!(scores, vec![0.9, 0.6, 0.4], "ranking must sort descending by confidence");
    assert!(!result.fallback);
}

#[tokio::test]
async fn scheduled_diagnosis_fires_once_after_the_delay() {
    let provider = ScriptedProvider::succeeding(scripted_result(vec![ranked(
        "hip_osteoarthritis",
        0.65,
    )]));
    let orchestrator = Arc::new(DiagnosisOrchestrator::new(provider));

    orchestrator
        .schedule(request(), Duration::from_millis(10))
        .await
        .expect("schedule from idle");
    assert_eq!(orchestrator.phase().await, Phase::Scheduled);

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(orchestrator.phase().await, Phase::Done);
    assert!(orchestrator.result().is_some());
}

#[tokio::test]
async fn rearming_supersedes_the_earlier_timer() {
    let provider = ScriptedProvider::succeeding(scripted_result(vec![ranked(
        "knee_osteoarthritis",
        0.7,
    )]));
    let orchestrator = Arc::new(DiagnosisOrchestrator::new(provider));

    orchestrator
        .schedule(request(), Duration::from_millis(10))
        .await
        .expect("first arm");
    orchestrator
        .schedule(request(), Duration::from_millis(30))
        .await
        .expect("re-arm while scheduled");

    tokio::time::sleep(Duration::from_millis(150)).await;

    assert_eq!(orchestrator.phase().await, Phase::Done);
    let result = orchestrator.result().expect("delivered");
    assert_eq!(result.differential_diagnosis.len(), 1);
}

#[tokio::test]
async fn cancel_disarms_a_scheduled_diagnosis() {
    let provider = ScriptedProvider::succeeding(scripted_result(vec![ranked("gtps", 0.5)]));
    let orchestrator = Arc::new(DiagnosisOrchestrator::new(provider));

    orchestrator
        .schedule(request(), Duration::from_millis(10))
        .await
        .expect("arm");
    orchestrator.cancel().await.expect("cancel while scheduled");
    assert_eq!(orchestrator.phase().await, Phase::Idle);

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(
        orchestrator.phase().await,
        Phase::Idle,
        "a cancelled timer must not fire"
    );
    assert!(orchestrator.result().is_none());
}

#[tokio::test]
async fn scheduling_after_done_is_rejected() {
    let provider = ScriptedProvider::succeeding(scripted_result(vec![ranked(
        "lumbar_disc_herniation",
        0.75,
    )]));
    let orchestrator = Arc::new(DiagnosisOrchestrator::new(provider));

    orchestrator.run(request()).await;

    let err = orchestrator
        .schedule(request(), Duration::from_millis(5))
        .await
        .expect_err("scheduling after done must be rejected");
    assert!(matches!(err, DiagnosisError::InvalidTransition(_)), "got {err:?}");

    let err = orchestrator.cancel().await.expect_err("cancel after done");
    assert!(matches!(err, DiagnosisError::InvalidTransition(_)));
}

#[tokio::test]
async fn completed_queue_then_single_orchestrator_execution() {
    use motio_core::models::test_queue::{AssessmentState, QueuedAssessment};
    use motio_engine::queue::{AdvanceOutcome, AssessmentQueue};

    // Scenario B: three queued tests submitted in order, then the
    // diagnosis runs idle -> scheduled -> running -> done exactly once.
    let mut queue = AssessmentQueue::from_candidates(
        ["empty_can", "hawkins_kennedy", "painful_arc"]
            .iter()
            .enumerate()
            .map(|(i, id)| QueuedAssessment {
                test_id: id.to_string(),
                display_name: id.to_string(),
                relevance_score: 90 - i as u8 * 10,
                category: "special_test".to_string(),
                state: AssessmentState::Pending,
                captured_data: None,
            })
            .collect(),
    );

    let mut index = queue.start().expect("start").expect("first");
    while let Some(next) = queue
        .advance(index, AdvanceOutcome::Submitted(serde_json::json!({"positive": true})))
        .expect("advance")
    {
        index = next;
    }
    assert!(queue.is_finished());
    assert_eq!(queue.current_index(), None);

    let provider = ScriptedProvider::succeeding(scripted_result(vec![ranked(
        "rotator_cuff_tendinopathy",
        0.8,
    )]));
    let orchestrator = Arc::new(DiagnosisOrchestrator::new(provider));
    assert_eq!(orchestrator.phase().await, Phase::Idle);

    let completed: Vec<QueuedAssessment> =
        queue.completed().into_iter().cloned().collect();
    let req = motio_diagnosis::request::build(&Session::new(), &completed);

    orchestrator
        .schedule(req.clone(), Duration::from_millis(5))
        .await
        .expect("schedule");
    assert_eq!(orchestrator.phase().await, Phase::Scheduled);

    // A racing direct trigger arrives before the timer: still one run.
    let result = orchestrator.run(req).await;
    assert_eq!(orchestrator.phase().await, Phase::Done);
    assert_eq!(result.differential_diagnosis.len(), 1);

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(
        orchestrator.phase().await,
        Phase::Done,
        "the stale timer must not re-run the diagnosis"
    );
}

#[tokio::test]
async fn exactly_one_collaborator_invocation_under_contention() {
    let provider = Arc::new(ScriptedProvider::succeeding(scripted_result(vec![ranked(
        "fai_syndrome",
        0.55,
    )])));
    let orchestrator = Arc::new(DiagnosisOrchestrator::new(SharedProvider(Arc::clone(
        &provider,
    ))));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let o = Arc::clone(&orchestrator);
        handles.push(tokio::spawn(async move { o.run(request()).await }));
    }
    for handle in handles {
        handle.await.expect("caller task");
    }

    assert_eq!(
        provider.call_count(),
        1,
        "the collaborator must be invoked exactly once despite 8 racing triggers"
    );
}

/// Wrapper so the test can keep a counting handle to the provider after
/// handing it to the orchestrator.
struct SharedProvider(Arc<ScriptedProvider>);

impl DiagnosticProvider for SharedProvider {
    async fn differential(
        &self,
        request: &DiagnosticRequest,
    ) -> Result<DiagnosticResult, DiagnosisError> {
        self.0.differential(request).await
    }
}
