//! Referred-pain screening: classify the active region's pain as local
//! or referred from the region's screening answers.

use motio_core::models::referral::{BodyRegion, PainSource, ReferralFinding, ReferralQuestion};
use motio_core::models::response::ResponseValue;
use motio_core::models::session::Session;

use motio_catalog::regions::{self, GENERIC_REGION_NOTE};

/// The screening questions for a region. Empty for an unmapped region —
/// callers fall back to the generic finding rather than failing.
pub fn questions_for(region: BodyRegion) -> Vec<ReferralQuestion> {
    regions::profile(region)
        .map(|p| p.referral_questions.clone())
        .unwrap_or_default()
}

/// Pull this region's screening answers out of the session as
/// (question id, yes/no) pairs, in screening order. Unanswered questions
/// are omitted.
pub fn answers_from_session(region: BodyRegion, session: &Session) -> Vec<(String, bool)> {
    questions_for(region)
        .into_iter()
        .filter_map(|rq| match session.value(&rq.id) {
            Some(ResponseValue::YesNo(answer)) => Some((rq.id, *answer)),
            _ => None,
        })
        .collect()
}

/// Classify the pain source for a region.
///
/// Fixed scoring rule: any positive referral-indicating answer classifies
/// the pain as referred and implicates that question's source region;
/// otherwise the source is local. Unmapped regions get a generic note and
/// a local classification.
pub fn evaluate(region: BodyRegion, answers: &[(String, bool)]) -> ReferralFinding {
    let Some(profile) = regions::profile(region) else {
        return ReferralFinding {
            region,
            classification: PainSource::Local,
            implicated_region: None,
            supporting_question_ids: Vec::new(),
            clinical_note: GENERIC_REGION_NOTE.to_string(),
        };
    };

    let positives: Vec<&ReferralQuestion> = profile
        .referral_questions
        .iter()
        .filter(|rq| {
            rq.indicates_referred
                && answers.iter().any(|(id, yes)| *yes && *id == rq.id)
        })
        .collect();

    if let Some(first) = positives.first() {
        ReferralFinding {
            region,
            classification: PainSource::Referred,
            implicated_region: Some(first.source_region),
            supporting_question_ids: positives.iter().map(|rq| rq.id.clone()).collect(),
            clinical_note: profile.referred_note.to_string(),
        }
    } else {
        ReferralFinding {
            region,
            classification: PainSource::Local,
            implicated_region: None,
            supporting_question_ids: answers.iter().map(|(id, _)| id.clone()).collect(),
            clinical_note: profile.local_note.to_string(),
        }
    }
}
