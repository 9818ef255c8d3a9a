//! Red-flag screening.
//!
//! A pure, read-only pass over the session, run after every response.
//! Flags are always derived, never stored: revising an answer that
//! triggered a flag makes the flag disappear on the next evaluation.

use motio_core::models::red_flag::{FlagSeverity, RedFlag};
use motio_core::models::response::ResponseValue;
use motio_core::models::session::Session;

/// One declarative rule: a source question, a predicate over its value,
/// and the resulting flag.
struct FlagRule {
    question_id: &'static str,
    predicate: fn(&ResponseValue) -> bool,
    text: &'static str,
    severity: FlagSeverity,
}

static FLAG_RULES: &[FlagRule] = &[
    FlagRule {
        question_id: "bladder_bowel_changes",
        predicate: ResponseValue::is_yes,
        text: "Recent bladder or bowel changes — possible cauda equina syndrome. \
Urgent medical referral indicated.",
        severity: FlagSeverity::Urgent,
    },
    FlagRule {
        question_id: "fever_chills",
        predicate: ResponseValue::is_yes,
        text: "Fever, chills, or night sweats alongside musculoskeletal pain — \
possible infection or systemic illness.",
        severity: FlagSeverity::Urgent,
    },
    FlagRule {
        question_id: "unexplained_weight_loss",
        predicate: ResponseValue::is_yes,
        text: "Unexplained weight loss — screen for serious systemic pathology.",
        severity: FlagSeverity::Urgent,
    },
    FlagRule {
        question_id: "recent_trauma",
        predicate: ResponseValue::is_yes,
        text: "Recent significant trauma — consider imaging before manual techniques.",
        severity: FlagSeverity::Advisory,
    },
    FlagRule {
        question_id: "night_pain",
        predicate: ResponseValue::is_yes,
        text: "Pain wakes the patient at night — correlate with pattern and intensity.",
        severity: FlagSeverity::Advisory,
    },
    FlagRule {
        question_id: "pain_intensity",
        predicate: |v| v.as_number().is_some_and(|n| n >= 9.0),
        text: "Very high reported pain intensity (VAS 9+).",
        severity: FlagSeverity::Advisory,
    },
    FlagRule {
        question_id: "gait_disturbance",
        predicate: ResponseValue::is_yes,
        text: "Recent gait or balance change — assess for neurological involvement.",
        severity: FlagSeverity::Advisory,
    },
];

/// Evaluate every rule against the session. Pure; no question is ever
/// consumed by this pass.
pub fn evaluate(session: &Session) -> Vec<RedFlag> {
    let mut flags = Vec::new();

    for rule in FLAG_RULES {
        if let Some(value) = session.value(rule.question_id)
            && (rule.predicate)(value)
        {
            flags.push(RedFlag {
                text: rule.text.to_string(),
                source_question_id: rule.question_id.to_string(),
                severity: rule.severity,
            });
        }
    }

    // Compound screen: unremitting night pain with a high VAS is treated
    // as urgent rather than two advisories.
    let severe_night_pain = session.value("night_pain").is_some_and(ResponseValue::is_yes)
        && session
            .value("pain_intensity")
            .and_then(ResponseValue::as_number)
            .is_some_and(|n| n >= 8.0);
    if severe_night_pain {
        flags.push(RedFlag {
            text: "Severe unremitting night pain — screen for serious pathology \
before continuing routine assessment.".to_string(),
            source_question_id: "night_pain".to_string(),
            severity: FlagSeverity::Urgent,
        });
    }

    // Referral screening questions marked as red flags contribute an
    // advisory when answered positively.
    for profile in motio_catalog::regions::all_profiles() {
        for rq in &profile.referral_questions {
            if rq.is_red_flag
                && session.value(&rq.id).is_some_and(ResponseValue::is_yes)
            {
                flags.push(RedFlag {
                    text: format!("Positive referral screen: {}", rq.prompt),
                    source_question_id: rq.id.clone(),
                    severity: FlagSeverity::Advisory,
                });
            }
        }
    }

    flags
}
