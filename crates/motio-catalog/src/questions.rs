//! The question catalog: every template the interview can present,
//! tagged with the pathway that activates it.
//!
//! Region-specific templates (aggravating/relieving factors, the ROM
//! grid, referral screening) are generated from the region profiles so
//! the reference tables stay single-source. An unmapped region simply
//! contributes no templates.

use std::sync::LazyLock;

use motio_core::models::question::{InputKind, PathwayTag, QuestionOption, QuestionTemplate};
use motio_core::models::referral::BodyRegion;

use crate::error::CatalogError;
use crate::regions;

fn opt(value: &str, label: &str) -> QuestionOption {
    QuestionOption {
        value: value.to_string(),
        label: label.to_string(),
    }
}

fn template(
    id: &str,
    prompt: &str,
    kind: InputKind,
    options: Vec<QuestionOption>,
    pathway: PathwayTag,
    priority: u32,
) -> QuestionTemplate {
    QuestionTemplate {
        id: id.to_string(),
        prompt: prompt.to_string(),
        kind,
        options,
        required: true,
        pathway,
        priority,
    }
}

fn intake_templates() -> Vec<QuestionTemplate> {
    use PathwayTag::Intake;
    vec![
        template(
            "chief_complaint",
            "What brings the patient in today?",
            InputKind::FreeText,
            vec![],
            Intake,
            0,
        ),
        template(
            "symptom_onset",
            "When did the symptoms start?",
            InputKind::SingleChoice,
            vec![
                opt("under_1_week", "Less than a week ago"),
                opt("1_4_weeks", "1-4 weeks ago"),
                opt("1_3_months", "1-3 months ago"),
                opt("over_3_months", "More than 3 months ago"),
            ],
            Intake,
            1,
        ),
        template(
            "pain_screening",
            "Is the patient currently experiencing pain?",
            InputKind::YesNo,
            vec![],
            Intake,
            2,
        ),
        template(
            "affected_region",
            "Select the primary affected region on the body map.",
            InputKind::BodyMap,
            vec![],
            Intake,
            3,
        ),
        template(
            "recent_trauma",
            "Was there recent significant trauma (fall, collision, direct blow)?",
            InputKind::YesNo,
            vec![],
            Intake,
            4,
        ),
        template(
            "unexplained_weight_loss",
            "Has there been unexplained weight loss?",
            InputKind::YesNo,
            vec![],
            Intake,
            5,
        ),
        template(
            "fever_chills",
            "Any fever, chills, or night sweats?",
            InputKind::YesNo,
            vec![],
            Intake,
            6,
        ),
        template(
            "neuro_screening",
            "Any numbness, tingling, or weakness in the limbs?",
            InputKind::YesNo,
            vec![],
            Intake,
            7,
        ),
        template(
            "daily_activity_impact",
            "Do the symptoms interfere with daily activities?",
            InputKind::YesNo,
            vec![],
            Intake,
            8,
        ),
    ]
}

fn pain_templates() -> Vec<QuestionTemplate> {
    use PathwayTag::Pain;
    vec![
        template(
            "pain_intensity",
            "Rate the current pain on a 0-10 scale (VAS).",
            InputKind::NumericSlider {
                min: 0.0,
                max: 10.0,
            },
            vec![],
            Pain,
            10,
        ),
        template(
            "pain_quality",
            "How would the patient describe the pain?",
            InputKind::MultiChoice,
            vec![
                opt("sharp", "Sharp"),
                opt("dull_aching", "Dull / aching"),
                opt("burning", "Burning"),
                opt("throbbing", "Throbbing"),
                opt("shooting", "Shooting"),
                opt("stiffness", "Stiffness"),
            ],
            Pain,
            11,
        ),
        template(
            "pain_pattern",
            "What is the pain pattern over a day?",
            InputKind::SingleChoice,
            vec![
                opt("constant", "Constant"),
                opt("intermittent", "Intermittent"),
                opt("activity_related", "Related to activity"),
                opt("nocturnal", "Worst at night"),
            ],
            Pain,
            12,
        ),
        template(
            "night_pain",
            "Does pain wake the patient at night?",
            InputKind::YesNo,
            vec![],
            Pain,
            13,
        ),
    ]
}

fn neurological_templates() -> Vec<QuestionTemplate> {
    use PathwayTag::Neurological;
    vec![
        template(
            "numbness_location",
            "Where is the numbness or tingling felt?",
            InputKind::FreeText,
            vec![],
            Neurological,
            20,
        ),
        template(
            "muscle_weakness",
            "Is there noticeable muscle weakness?",
            InputKind::YesNo,
            vec![],
            Neurological,
            21,
        ),
        template(
            "bladder_bowel_changes",
            "Any recent change in bladder or bowel control?",
            InputKind::YesNo,
            vec![],
            Neurological,
            22,
        ),
        template(
            "gait_disturbance",
            "Any recent change in walking or balance?",
            InputKind::YesNo,
            vec![],
            Neurological,
            23,
        ),
    ]
}

fn functional_templates() -> Vec<QuestionTemplate> {
    use PathwayTag::Functional;
    let adl = template(
        "adl_grid",
        "Rate difficulty with each daily activity (0 = none, 4 = unable).",
        InputKind::GradedGrid {
            rows: vec![
                "walking".to_string(),
                "stairs".to_string(),
                "lifting".to_string(),
                "dressing".to_string(),
                "sleeping".to_string(),
            ],
            scale_max: 4,
        },
        vec![],
        Functional,
        51,
    );

    let mut exercise = template(
        "exercise_tolerance",
        "How is exercise tolerance compared to before onset?",
        InputKind::SingleChoice,
        vec![
            opt("unchanged", "Unchanged"),
            opt("reduced", "Reduced"),
            opt("severely_reduced", "Severely reduced"),
        ],
        Functional,
        52,
    );
    exercise.required = false;

    vec![
        template(
            "work_impact",
            "How are the symptoms affecting work?",
            InputKind::SingleChoice,
            vec![
                opt("none", "No impact"),
                opt("modified_duties", "Modified duties"),
                opt("off_work", "Off work"),
            ],
            Functional,
            50,
        ),
        adl,
        exercise,
    ]
}

/// Templates generated from one region's profile: factor questions, the
/// ROM grid, then that region's referral screening questions. Empty for
/// an unmapped region.
fn regional_templates(region: BodyRegion) -> Vec<QuestionTemplate> {
    let Some(profile) = regions::profile(region) else {
        return Vec::new();
    };

    let mut out = vec![
        template(
            &format!("{}_aggravating", region.id()),
            &format!("Which activities aggravate the {} symptoms?", region.display_name().to_lowercase()),
            InputKind::MultiChoice,
            profile.aggravating.iter().map(|(v, l)| opt(v, l)).collect(),
            PathwayTag::Regional(region),
            30,
        ),
        template(
            &format!("{}_relieving", region.id()),
            &format!("What relieves the {} symptoms?", region.display_name().to_lowercase()),
            InputKind::MultiChoice,
            profile.relieving.iter().map(|(v, l)| opt(v, l)).collect(),
            PathwayTag::Regional(region),
            31,
        ),
        template(
            &format!("{}_rom", region.id()),
            &format!(
                "Rate pain/limitation for each {} movement (0 = none, 4 = unable).",
                region.display_name().to_lowercase()
            ),
            InputKind::GradedGrid {
                rows: profile.rom_movements.iter().map(|m| m.to_string()).collect(),
                scale_max: 4,
            },
            vec![],
            PathwayTag::Regional(region),
            32,
        ),
    ];

    for (i, rq) in profile.referral_questions.iter().enumerate() {
        out.push(template(
            &rq.id,
            &rq.prompt,
            InputKind::YesNo,
            vec![],
            PathwayTag::Referral(region),
            40 + i as u32,
        ));
    }

    out
}

/// The full catalog in canonical order. Regional blocks follow the
/// static pathways, one block per mapped region.
static CATALOG: LazyLock<Vec<QuestionTemplate>> = LazyLock::new(|| {
    let mut all = Vec::new();
    all.extend(intake_templates());
    all.extend(pain_templates());
    all.extend(neurological_templates());
    all.extend(functional_templates());
    for profile in regions::all_profiles() {
        all.extend(regional_templates(profile.region));
    }
    all
});

pub fn all() -> &'static [QuestionTemplate] {
    &CATALOG
}

/// Look up a template by id.
pub fn question(id: &str) -> Result<&'static QuestionTemplate, CatalogError> {
    CATALOG
        .iter()
        .find(|q| q.id == id)
        .ok_or_else(|| CatalogError::UnknownQuestion(id.to_string()))
}

/// The catalog's designated first question — the interview's initial
/// state.
pub fn first_question() -> &'static QuestionTemplate {
    &CATALOG[0]
}

/// Templates belonging to any of the given pathways, in presentation
/// order: ascending priority, ties broken by catalog position.
pub fn questions_for<'a, I>(pathways: I) -> Vec<&'static QuestionTemplate>
where
    I: IntoIterator<Item = &'a PathwayTag>,
{
    let active: Vec<PathwayTag> = pathways.into_iter().copied().collect();
    let mut selected: Vec<(usize, &'static QuestionTemplate)> = CATALOG
        .iter()
        .enumerate()
        .filter(|(_, q)| active.contains(&q.pathway))
        .collect();
    selected.sort_by_key(|(idx, q)| (q.priority, *idx));
    selected.into_iter().map(|(_, q)| q).collect()
}
