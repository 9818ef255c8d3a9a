//! The physical-test queue.
//!
//! Lifecycle invariants, enforced here rather than by callers:
//! at most one item is in progress at a time, the cursor only moves
//! forward, and a completed or skipped item never reopens.

use tracing::debug;

use motio_core::models::test_queue::{AssessmentState, QueuedAssessment};

use crate::error::EngineError;

/// How the current test finished.
#[derive(Debug, Clone)]
pub enum AdvanceOutcome {
    /// Submitted with its captured form data.
    Submitted(serde_json::Value),
    Skipped,
}

/// The ordered queue of recommended or hand-picked tests for one session.
#[derive(Debug, Clone)]
pub struct AssessmentQueue {
    items: Vec<QueuedAssessment>,
    current: Option<usize>,
}

impl AssessmentQueue {
    /// Seed a queue from candidates, all pending. Order is by descending
    /// relevance score; the stable sort preserves candidate order for
    /// equal scores.
    pub fn from_candidates(mut candidates: Vec<QueuedAssessment>) -> Self {
        for c in &mut candidates {
            c.state = AssessmentState::Pending;
            c.captured_data = None;
        }
        candidates.sort_by_key(|c| std::cmp::Reverse(c.relevance_score));
        Self {
            items: candidates,
            current: None,
        }
    }

    pub fn items(&self) -> &[QueuedAssessment] {
        &self.items
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// True once any item has left `pending`.
    pub fn started(&self) -> bool {
        self.items
            .iter()
            .any(|i| i.state != AssessmentState::Pending)
    }

    /// True when every item is completed or skipped.
    pub fn is_finished(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|i| i.state.is_terminal())
    }

    pub fn completed(&self) -> Vec<&QueuedAssessment> {
        self.items
            .iter()
            .filter(|i| i.state == AssessmentState::Completed)
            .collect()
    }

    /// Begin execution: the first pending item becomes in-progress.
    pub fn start(&mut self) -> Result<Option<usize>, EngineError> {
        if self.current.is_some() {
            return Err(EngineError::InvalidTransition(
                "queue already has an item in progress".to_string(),
            ));
        }
        let next = self
            .items
            .iter()
            .position(|i| i.state == AssessmentState::Pending);
        if let Some(idx) = next {
            self.items[idx].state = AssessmentState::InProgress;
            self.current = Some(idx);
            debug!(test_id = %self.items[idx].test_id, index = idx, "test started");
        }
        Ok(next)
    }

    /// Finish the item at `index` with the given outcome and promote the
    /// next pending item. Returns the new in-progress index, or `None`
    /// when the queue is exhausted.
    ///
    /// Only the current in-progress item may be advanced; anything else
    /// is an `InvalidTransition` and mutates nothing.
    pub fn advance(
        &mut self,
        index: usize,
        outcome: AdvanceOutcome,
    ) -> Result<Option<usize>, EngineError> {
        let item = self.items.get(index).ok_or_else(|| {
            EngineError::InvalidTransition(format!("no queued test at index {index}"))
        })?;
        if item.state.is_terminal() {
            return Err(EngineError::InvalidTransition(format!(
                "test '{}' is already {:?}",
                item.test_id, item.state
            )));
        }
        if self.current != Some(index) || item.state != AssessmentState::InProgress {
            return Err(EngineError::InvalidTransition(format!(
                "test '{}' is not the item in progress",
                item.test_id
            )));
        }

        match outcome {
            AdvanceOutcome::Submitted(data) => {
                self.items[index].state = AssessmentState::Completed;
                self.items[index].captured_data = Some(data);
            }
            AdvanceOutcome::Skipped => {
                self.items[index].state = AssessmentState::Skipped;
            }
        }
        debug!(
            test_id = %self.items[index].test_id,
            state = ?self.items[index].state,
            "test finished"
        );

        // The cursor only moves forward.
        let next = self
            .items
            .iter()
            .enumerate()
            .skip(index + 1)
            .find(|(_, i)| i.state == AssessmentState::Pending)
            .map(|(idx, _)| idx);
        if let Some(idx) = next {
            self.items[idx].state = AssessmentState::InProgress;
        }
        self.current = next;
        Ok(next)
    }

    /// Add a hand-picked test. Only legal before the queue has started.
    pub fn add_custom(&mut self, test: QueuedAssessment) -> Result<(), EngineError> {
        if self.started() {
            return Err(EngineError::InvalidTransition(
                "cannot add a test after the queue has started".to_string(),
            ));
        }
        let mut test = test;
        test.state = AssessmentState::Pending;
        test.captured_data = None;
        self.items.push(test);
        Ok(())
    }

    /// Remove a test by id. In-progress and completed items are
    /// protected; pending and skipped items may be removed.
    pub fn remove(&mut self, test_id: &str) -> Result<(), EngineError> {
        let idx = self
            .items
            .iter()
            .position(|i| i.test_id == test_id)
            .ok_or_else(|| {
                EngineError::InvalidTransition(format!("no queued test with id '{test_id}'"))
            })?;
        match self.items[idx].state {
            AssessmentState::InProgress | AssessmentState::Completed => {
                Err(EngineError::InvalidTransition(format!(
                    "test '{test_id}' is {:?} and cannot be removed",
                    self.items[idx].state
                )))
            }
            AssessmentState::Pending | AssessmentState::Skipped => {
                self.items.remove(idx);
                // Keep the cursor pointing at the same item.
                if let Some(cur) = self.current
                    && idx < cur
                {
                    self.current = Some(cur - 1);
                }
                Ok(())
            }
        }
    }
}
