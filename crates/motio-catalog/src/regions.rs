//! Per-body-region reference tables: aggravating/relieving factors,
//! range-of-motion movements, neurological screening references, and
//! referred-pain screening questions.
//!
//! Not every body-map region has a profile yet. Callers must treat a
//! missing profile as "unmapped" and fall back to generic behavior
//! rather than failing the session.

use std::sync::LazyLock;

use motio_core::models::referral::{BodyRegion, ReferralQuestion};

/// Reference data for one body region.
pub struct RegionProfile {
    pub region: BodyRegion,
    /// (option value, display label) pairs for the aggravating-factors
    /// multi-choice question.
    pub aggravating: &'static [(&'static str, &'static str)],
    pub relieving: &'static [(&'static str, &'static str)],
    /// Movements rated in the range-of-motion grid.
    pub rom_movements: &'static [&'static str],
    pub dermatomes: &'static [&'static str],
    pub myotomes: &'static [&'static str],
    pub reflexes: &'static [&'static str],
    pub referral_questions: Vec<ReferralQuestion>,
    /// Attached to the referral finding when pain is classified local.
    pub local_note: &'static str,
    /// Attached when any referral-indicating answer is positive.
    pub referred_note: &'static str,
}

/// Note used for regions with no profile.
pub const GENERIC_REGION_NOTE: &str = "No region-specific referral screening is \
mapped for this area. Correlate subjective findings manually and screen \
adjacent joints and the relevant spinal segment before treating locally.";

fn rq(
    id: &str,
    prompt: &str,
    source: BodyRegion,
    indicates_referred: bool,
    is_red_flag: bool,
) -> ReferralQuestion {
    ReferralQuestion {
        id: id.to_string(),
        prompt: prompt.to_string(),
        source_region: source,
        indicates_referred,
        is_red_flag,
    }
}

static PROFILES: LazyLock<Vec<RegionProfile>> = LazyLock::new(|| {
    vec![
        RegionProfile {
            region: BodyRegion::Shoulder,
            aggravating: &[
                ("overhead_reach", "Reaching overhead"),
                ("lifting", "Lifting or carrying"),
                ("lying_on_side", "Lying on the affected side"),
                ("hand_behind_back", "Reaching behind the back"),
                ("throwing", "Throwing or fast arm movements"),
            ],
            relieving: &[
                ("rest", "Rest"),
                ("arm_support", "Supporting the arm"),
                ("heat", "Heat"),
                ("ice", "Ice"),
            ],
            rom_movements: &[
                "flexion",
                "abduction",
                "external_rotation",
                "internal_rotation",
                "hand_behind_back",
            ],
            dermatomes: &["C4", "C5", "C6"],
            myotomes: &["C5 shoulder abduction", "C6 elbow flexion"],
            reflexes: &["biceps", "brachioradialis"],
            referral_questions: vec![
                rq(
                    "shoulder_ref_neck_movement",
                    "Does neck movement reproduce the shoulder pain?",
                    BodyRegion::Neck,
                    true,
                    false,
                ),
                rq(
                    "shoulder_ref_distal_paraesthesia",
                    "Are there pins and needles below the elbow?",
                    BodyRegion::Neck,
                    true,
                    false,
                ),
                rq(
                    "shoulder_ref_constant_ache",
                    "Is the pain a constant deep ache unaffected by shoulder position?",
                    BodyRegion::Shoulder,
                    false,
                    true,
                ),
            ],
            local_note: "Screening favors a local shoulder source. Proceed with \
rotator cuff and subacromial testing.",
            referred_note: "Positive cervical screening: the shoulder pain is \
likely referred from the neck. Clear the cervical spine before treating the \
shoulder.",
        },
        RegionProfile {
            region: BodyRegion::Neck,
            aggravating: &[
                ("sustained_flexion", "Sustained flexion (desk work)"),
                ("rotation_driving", "Rotation, e.g. when driving"),
                ("overhead_work", "Working overhead"),
                ("carrying", "Carrying bags"),
            ],
            relieving: &[
                ("rest", "Rest"),
                ("heat", "Heat"),
                ("posture_change", "Changing posture"),
            ],
            rom_movements: &[
                "flexion",
                "extension",
                "rotation_left",
                "rotation_right",
                "side_flexion_left",
                "side_flexion_right",
            ],
            dermatomes: &["C5", "C6", "C7", "C8"],
            myotomes: &[
                "C5 shoulder abduction",
                "C6 wrist extension",
                "C7 elbow extension",
                "C8 finger flexion",
            ],
            reflexes: &["biceps", "triceps", "brachioradialis"],
            referral_questions: vec![
                rq(
                    "neck_ref_shoulder_movement",
                    "Is the pain reproduced by shoulder movement rather than neck movement?",
                    BodyRegion::Shoulder,
                    true,
                    false,
                ),
                rq(
                    "neck_ref_arm_symptoms",
                    "Do symptoms extend below the elbow with neck movement?",
                    BodyRegion::Neck,
                    false,
                    false,
                ),
                rq(
                    "neck_ref_dizziness",
                    "Is there dizziness or visual disturbance with neck rotation?",
                    BodyRegion::Neck,
                    false,
                    true,
                ),
            ],
            local_note: "Screening favors a local cervical source. Segmental \
mobility and deep flexor assessment are appropriate.",
            referred_note: "Positive shoulder screening: consider a \
glenohumeral source masquerading as neck pain.",
        },
        RegionProfile {
            region: BodyRegion::LowerBack,
            aggravating: &[
                ("sitting", "Prolonged sitting"),
                ("bending_forward", "Bending forward"),
                ("lifting", "Lifting"),
                ("cough_sneeze", "Coughing or sneezing"),
            ],
            relieving: &[
                ("walking", "Walking"),
                ("position_change", "Changing position"),
                ("lying_flat", "Lying flat"),
            ],
            rom_movements: &[
                "flexion",
                "extension",
                "side_flexion_left",
                "side_flexion_right",
            ],
            dermatomes: &["L4", "L5", "S1"],
            myotomes: &[
                "L4 ankle dorsiflexion",
                "L5 great toe extension",
                "S1 ankle plantarflexion",
            ],
            reflexes: &["patellar", "achilles"],
            referral_questions: vec![
                rq(
                    "back_ref_hip_rotation",
                    "Does passive hip rotation reproduce the pain?",
                    BodyRegion::Hip,
                    true,
                    false,
                ),
                rq(
                    "back_ref_groin_pain",
                    "Is there groin pain on weight bearing?",
                    BodyRegion::Hip,
                    true,
                    false,
                ),
                rq(
                    "back_ref_rest_pain",
                    "Is there deep abdominal or back pain at rest, unrelated to movement?",
                    BodyRegion::LowerBack,
                    false,
                    true,
                ),
            ],
            local_note: "Screening favors a local lumbar source. Proceed with \
movement-based lumbar assessment.",
            referred_note: "Positive hip screening: the back pain may be \
referred from the hip joint. Assess the hip before segmental treatment.",
        },
        RegionProfile {
            region: BodyRegion::Knee,
            aggravating: &[
                ("stairs", "Stairs"),
                ("squatting", "Squatting"),
                ("kneeling", "Kneeling"),
                ("twisting", "Twisting on a planted foot"),
            ],
            relieving: &[
                ("rest", "Rest"),
                ("ice", "Ice"),
                ("straightening", "Straightening the leg"),
            ],
            rom_movements: &["flexion", "extension"],
            dermatomes: &["L3", "L4"],
            myotomes: &["L3 knee extension", "L4 ankle dorsiflexion"],
            reflexes: &["patellar"],
            referral_questions: vec![
                rq(
                    "knee_ref_hip_movement",
                    "Does hip movement reproduce the knee pain?",
                    BodyRegion::Hip,
                    true,
                    false,
                ),
                rq(
                    "knee_ref_back_symptoms",
                    "Is there low back pain or leg numbness alongside the knee pain?",
                    BodyRegion::LowerBack,
                    true,
                    false,
                ),
            ],
            local_note: "Screening favors a local knee source. Ligament and \
meniscal testing are appropriate.",
            referred_note: "Positive proximal screening: knee pain may be \
referred from the hip or lumbar spine. Clear both before local treatment.",
        },
        RegionProfile {
            region: BodyRegion::Hip,
            aggravating: &[
                ("walking", "Walking"),
                ("stairs_up", "Going up stairs"),
                ("shoes_socks", "Putting on shoes and socks"),
                ("rising", "Rising from a chair"),
            ],
            relieving: &[
                ("rest", "Rest"),
                ("unloading", "Unloading the leg"),
            ],
            rom_movements: &[
                "flexion",
                "internal_rotation",
                "external_rotation",
                "abduction",
            ],
            dermatomes: &["L2", "L3"],
            myotomes: &["L2 hip flexion", "L3 knee extension"],
            reflexes: &["patellar"],
            referral_questions: vec![
                rq(
                    "hip_ref_back_stiffness",
                    "Is there morning low back stiffness alongside the hip pain?",
                    BodyRegion::LowerBack,
                    true,
                    false,
                ),
                rq(
                    "hip_ref_below_knee",
                    "Does the pain radiate below the knee?",
                    BodyRegion::LowerBack,
                    true,
                    false,
                ),
            ],
            local_note: "Screening favors a local hip source. Proceed with \
FADIR/FABER and strength testing.",
            referred_note: "Positive lumbar screening: hip-area pain may be \
referred from the lumbar spine. Clear the spine before treating the hip.",
        },
    ]
});

/// Look up the profile for a region. `None` means the region is unmapped
/// and callers should use the generic fallback.
pub fn profile(region: BodyRegion) -> Option<&'static RegionProfile> {
    PROFILES.iter().find(|p| p.region == region)
}

/// All mapped region profiles, in catalog order.
pub fn all_profiles() -> &'static [RegionProfile] {
    &PROFILES
}
