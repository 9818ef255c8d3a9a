use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::question::PathwayTag;
use super::response::{Response, ResponseValue};

/// One complete run of the adaptive interview for a single patient
/// encounter. Created at interview start, mutated only by the pathway
/// state machine, read by every other component.
///
/// Responses are kept in submission order; re-answering a question
/// replaces the value in place so the original interview position is
/// preserved for replay and audit.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Session {
    pub id: Uuid,
    pub responses: Vec<Response>,
    pub active_pathways: BTreeSet<PathwayTag>,
    /// answered-required / total-activated-required, 0..=100.
    pub completion_percent: f64,
    pub started_at: jiff::Timestamp,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            responses: Vec::new(),
            active_pathways: BTreeSet::from([PathwayTag::Intake]),
            completion_percent: 0.0,
            started_at: jiff::Timestamp::now(),
        }
    }

    pub fn response(&self, question_id: &str) -> Option<&Response> {
        self.responses.iter().find(|r| r.question_id == question_id)
    }

    pub fn value(&self, question_id: &str) -> Option<&ResponseValue> {
        self.response(question_id).map(|r| &r.value)
    }

    pub fn is_answered(&self, question_id: &str) -> bool {
        self.response(question_id).is_some()
    }

    /// Record a response, replacing any earlier answer to the same
    /// question in place.
    pub fn record(&mut self, response: Response) {
        if let Some(existing) = self
            .responses
            .iter_mut()
            .find(|r| r.question_id == response.question_id)
        {
            *existing = response;
        } else {
            self.responses.push(response);
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
