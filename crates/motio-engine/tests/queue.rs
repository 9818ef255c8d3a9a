use motio_core::models::test_queue::{AssessmentState, QueuedAssessment};
use motio_engine::queue::{AdvanceOutcome, AssessmentQueue};
use motio_engine::EngineError;

fn test_item(id: &str, score: u8) -> QueuedAssessment {
    QueuedAssessment {
        test_id: id.to_string(),
        display_name: id.to_string(),
        relevance_score: score,
        category: "special_test".to_string(),
        state: AssessmentState::Pending,
        captured_data: None,
    }
}

fn in_progress_count(queue: &AssessmentQueue) -> usize {
    queue
        .items()
        .iter()
        .filter(|i| i.state == AssessmentState::InProgress)
        .count()
}

#[test]
fn candidates_order_by_score_with_stable_ties() {
    let queue = AssessmentQueue::from_candidates(vec![
        test_item("hawkins_kennedy", 70),
        test_item("empty_can", 90),
        test_item("neer", 70),
    ]);

    let ids: Vec<&str> = queue.items().iter().map(|i| i.test_id.as_str()).collect();
    assert_eq!(ids, ["empty_can", "hawkins_kennedy", "neer"]);
    assert!(queue.items().iter().all(|i| i.state == AssessmentState::Pending));
}

#[test]
fn three_submissions_complete_the_queue_in_order() {
    let mut queue = AssessmentQueue::from_candidates(vec![
        test_item("t1", 90),
        test_item("t2", 80),
        test_item("t3", 70),
    ]);

    let mut index = queue.start().expect("start").expect("first item");
    loop {
        assert_eq!(in_progress_count(&queue), 1, "exactly one item in progress");
        let next = queue
            .advance(index, AdvanceOutcome::Submitted(serde_json::json!({"positive": false})))
            .expect("advance");
        match next {
            Some(i) => {
                assert!(i > index, "index must only move forward");
                index = i;
            }
            None => break,
        }
    }

    assert!(queue.is_finished());
    assert_eq!(queue.current_index(), None);
    assert_eq!(queue.completed().len(), 3);
    assert!(
        queue.items().iter().all(|i| i.captured_data.is_some()),
        "submitted tests keep their captured form data"
    );
}

#[test]
fn skipped_items_are_terminal_too() {
    let mut queue = AssessmentQueue::from_candidates(vec![test_item("t1", 50), test_item("t2", 40)]);
    let first = queue.start().expect("start").expect("first");
    let second = queue.advance(first, AdvanceOutcome::Skipped).expect("advance").expect("second");
    queue.advance(second, AdvanceOutcome::Skipped).expect("advance");

    assert!(queue.is_finished());
    assert!(queue.completed().is_empty());
}

#[test]
fn advancing_a_finished_item_is_rejected() {
    let mut queue = AssessmentQueue::from_candidates(vec![test_item("t1", 50), test_item("t2", 40)]);
    let first = queue.start().expect("start").expect("first");
    queue
        .advance(first, AdvanceOutcome::Submitted(serde_json::json!({})))
        .expect("advance");

    let before: Vec<AssessmentState> = queue.items().iter().map(|i| i.state).collect();
    let err = queue
        .advance(first, AdvanceOutcome::Skipped)
        .expect_err("completed item must not reopen");
    assert!(matches!(err, EngineError::InvalidTransition(_)), "got {err:?}");

    let after: Vec<AssessmentState> = queue.items().iter().map(|i| i.state).collect();
    assert_eq!(before, after, "a rejected transition must not mutate the queue");
}

#[test]
fn advancing_a_pending_item_out_of_turn_is_rejected() {
    let mut queue = AssessmentQueue::from_candidates(vec![test_item("t1", 50), test_item("t2", 40)]);
    queue.start().expect("start");

    // Index 1 is still pending; only the in-progress item may advance.
    let err = queue
        .advance(1, AdvanceOutcome::Skipped)
        .expect_err("pending item is not the item in progress");
    assert!(matches!(err, EngineError::InvalidTransition(_)));
}

#[test]
fn add_custom_is_only_legal_before_the_queue_starts() {
    let mut queue = AssessmentQueue::from_candidates(vec![test_item("t1", 50)]);
    queue.add_custom(test_item("thessaly", 0)).expect("add before start");

    queue.start().expect("start");
    let err = queue
        .add_custom(test_item("mcmurray", 0))
        .expect_err("add after start must be rejected");
    assert!(matches!(err, EngineError::InvalidTransition(_)));
}

#[test]
fn remove_protects_in_progress_and_completed_items() {
    let mut queue = AssessmentQueue::from_candidates(vec![
        test_item("t1", 90),
        test_item("t2", 80),
        test_item("t3", 70),
    ]);
    queue.remove("t3").expect("pending item is removable");

    let first = queue.start().expect("start").expect("first");
    let err = queue.remove("t1").expect_err("in-progress item is protected");
    assert!(matches!(err, EngineError::InvalidTransition(_)));

    queue
        .advance(first, AdvanceOutcome::Submitted(serde_json::json!({})))
        .expect("advance");
    let err = queue.remove("t1").expect_err("completed item is protected");
    assert!(matches!(err, EngineError::InvalidTransition(_)));
}
