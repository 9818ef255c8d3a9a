use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Body regions selectable from the body map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BodyRegion {
    Shoulder,
    Neck,
    LowerBack,
    Knee,
    Hip,
    Elbow,
}

impl BodyRegion {
    pub fn id(&self) -> &'static str {
        match self {
            BodyRegion::Shoulder => "shoulder",
            BodyRegion::Neck => "neck",
            BodyRegion::LowerBack => "lower_back",
            BodyRegion::Knee => "knee",
            BodyRegion::Hip => "hip",
            BodyRegion::Elbow => "elbow",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BodyRegion::Shoulder => "Shoulder",
            BodyRegion::Neck => "Neck",
            BodyRegion::LowerBack => "Lower back",
            BodyRegion::Knee => "Knee",
            BodyRegion::Hip => "Hip",
            BodyRegion::Elbow => "Elbow",
        }
    }
}

/// A yes/no screening question used to separate local from referred pain.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferralQuestion {
    pub id: String,
    pub prompt: String,
    /// The region implicated as the true source when the answer is yes.
    pub source_region: BodyRegion,
    /// A positive answer points at a distant source rather than the
    /// assessed region itself.
    pub indicates_referred: bool,
    /// A positive answer also counts as an advisory red flag.
    pub is_red_flag: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PainSource {
    Local,
    Referred,
}

/// Outcome of referred-pain screening for one body region.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferralFinding {
    pub region: BodyRegion,
    pub classification: PainSource,
    /// The implicated true source when classified as referred.
    pub implicated_region: Option<BodyRegion>,
    /// Question ids whose answers drove the classification.
    pub supporting_question_ids: Vec<String>,
    pub clinical_note: String,
}
