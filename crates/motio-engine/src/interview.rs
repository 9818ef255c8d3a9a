//! The pathway state machine.
//!
//! States are "awaiting question Q" for each reachable Q plus a terminal
//! "complete" state; transitions are labeled by a validated response.
//! Pathway activation is a declarative rule table evaluated uniformly
//! after every response, so replaying a fixed response sequence from a
//! fresh session always yields the same activated-pathway set and the
//! same next-question sequence.

use std::collections::BTreeSet;

use tracing::{debug, info};

use motio_catalog::questions;
use motio_core::models::question::{InputKind, PathwayTag, QuestionTemplate};
use motio_core::models::red_flag::{FlagSeverity, RedFlag};
use motio_core::models::response::{Response, ResponseValue};
use motio_core::models::session::Session;

use crate::error::EngineError;
use crate::red_flags;

/// What `process_response` hands back to the caller.
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    /// The next unanswered question, or `None` when the interview is
    /// complete.
    pub next_question_id: Option<String>,
    /// Urgent flags must be shown before the next question is presented.
    /// Advisory flags are batched and not repeated here.
    pub urgent_flags: Vec<RedFlag>,
    pub completion_percent: f64,
}

/// A pathway activation rule: a source question plus a function from its
/// answer to the pathways it switches on. The full rule table is
/// re-evaluated over all responses after every submission, so revising
/// an earlier answer deactivates pathways it no longer justifies.
struct ActivationRule {
    source_question: &'static str,
    activate: fn(&ResponseValue) -> Vec<PathwayTag>,
}

static ACTIVATION_RULES: &[ActivationRule] = &[
    ActivationRule {
        source_question: "pain_screening",
        activate: |v| {
            if v.is_yes() {
                vec![PathwayTag::Pain]
            } else {
                vec![]
            }
        },
    },
    ActivationRule {
        source_question: "neuro_screening",
        activate: |v| {
            if v.is_yes() {
                vec![PathwayTag::Neurological]
            } else {
                vec![]
            }
        },
    },
    ActivationRule {
        source_question: "daily_activity_impact",
        activate: |v| {
            if v.is_yes() {
                vec![PathwayTag::Functional]
            } else {
                vec![]
            }
        },
    },
    ActivationRule {
        source_question: "affected_region",
        activate: |v| match v.as_region() {
            Some(region) => vec![PathwayTag::Referral(region), PathwayTag::Regional(region)],
            None => vec![],
        },
    },
];

/// Recompute the activated-pathway set from scratch. `Intake` is always
/// active.
fn active_pathways(session: &Session) -> BTreeSet<PathwayTag> {
    let mut active = BTreeSet::from([PathwayTag::Intake]);
    for rule in ACTIVATION_RULES {
        if let Some(value) = session.value(rule.source_question) {
            active.extend((rule.activate)(value));
        }
    }
    active
}

/// The next unanswered question among currently activated pathways, in
/// catalog priority order. `None` signals interview completion.
pub fn current_question(session: &Session) -> Option<&'static QuestionTemplate> {
    questions::questions_for(&session.active_pathways)
        .into_iter()
        .find(|q| !session.is_answered(&q.id))
}

fn completion_percent(session: &Session) -> f64 {
    let required: Vec<_> = questions::questions_for(&session.active_pathways)
        .into_iter()
        .filter(|q| q.required)
        .collect();
    if required.is_empty() {
        return 100.0;
    }
    let answered = required.iter().filter(|q| session.is_answered(&q.id)).count();
    (answered as f64 / required.len() as f64) * 100.0
}

/// Validate a submitted value against a question's declared input kind.
/// Runs before any session mutation.
fn validate(template: &QuestionTemplate, value: &ResponseValue) -> Result<(), EngineError> {
    let fail = |message: String| EngineError::Validation {
        question_id: template.id.clone(),
        message,
    };

    match (&template.kind, value) {
        (InputKind::FreeText, ResponseValue::Text(t)) => {
            if template.required && t.trim().is_empty() {
                return Err(fail("required free-text answer is empty".to_string()));
            }
        }
        (InputKind::YesNo, ResponseValue::YesNo(_)) => {}
        (InputKind::SingleChoice, ResponseValue::Choice(v)) => {
            if !template.options.iter().any(|o| o.value == *v) {
                return Err(fail(format!("'{v}' is not one of the offered options")));
            }
        }
        (InputKind::MultiChoice, ResponseValue::MultiChoice(vs)) => {
            if template.required && vs.is_empty() {
                return Err(fail("at least one option must be selected".to_string()));
            }
            for v in vs {
                if !template.options.iter().any(|o| o.value == *v) {
                    return Err(fail(format!("'{v}' is not one of the offered options")));
                }
            }
        }
        (InputKind::NumericSlider { min, max }, ResponseValue::Number(n)) => {
            if !n.is_finite() || *n < *min || *n > *max {
                return Err(fail(format!("{n} is outside the {min}..={max} range")));
            }
        }
        (InputKind::BodyMap, ResponseValue::Region(_)) => {}
        (InputKind::GradedGrid { rows, scale_max }, ResponseValue::Grid(cells)) => {
            for (row, rating) in cells {
                if !rows.contains(row) {
                    return Err(fail(format!("'{row}' is not a row of this grid")));
                }
                if rating > scale_max {
                    return Err(fail(format!(
                        "rating {rating} for '{row}' exceeds the 0..={scale_max} scale"
                    )));
                }
            }
            if template.required && cells.is_empty() {
                return Err(fail("the grid has no ratings".to_string()));
            }
        }
        (InputKind::Measurement { unit }, ResponseValue::Measurement(n)) => {
            if !n.is_finite() {
                return Err(fail(format!("measurement in {unit} must be finite")));
            }
        }
        (kind, _) => {
            return Err(fail(format!(
                "response shape does not match input kind {kind:?}"
            )));
        }
    }
    Ok(())
}

/// Validate and record one response, re-evaluate pathway activation, and
/// return the next question (or completion) plus any urgent red flags.
///
/// On a validation error the session is left exactly as it was.
pub fn process_response(
    session: &mut Session,
    question_id: &str,
    value: ResponseValue,
) -> Result<ProcessOutcome, EngineError> {
    let template = questions::question(question_id)?;
    validate(template, &value)?;

    session.record(Response {
        question_id: question_id.to_string(),
        value,
        recorded_at: jiff::Timestamp::now(),
    });

    session.active_pathways = active_pathways(session);
    session.completion_percent = completion_percent(session);

    let urgent_flags: Vec<RedFlag> = red_flags::evaluate(session)
        .into_iter()
        .filter(|f| f.severity == FlagSeverity::Urgent)
        .collect();

    let next = current_question(session);

    debug!(
        session_id = %session.id,
        question_id,
        pathways = session.active_pathways.len(),
        "response recorded"
    );
    if next.is_none() {
        info!(
            session_id = %session.id,
            responses = session.responses.len(),
            "interview complete"
        );
    }

    Ok(ProcessOutcome {
        next_question_id: next.map(|q| q.id.clone()),
        urgent_flags,
        completion_percent: session.completion_percent,
    })
}
