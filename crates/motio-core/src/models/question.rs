use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::referral::BodyRegion;

/// A named subset of the question catalog that becomes reachable based on
/// prior answers. `Intake` is always active; the rest are switched on by
/// the engine's activation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case", tag = "pathway", content = "region")]
#[ts(export)]
pub enum PathwayTag {
    Intake,
    Pain,
    Neurological,
    Functional,
    /// Referred-pain screening questions for one body region.
    Referral(BodyRegion),
    /// Region-specific aggravating/relieving and range-of-motion questions.
    Regional(BodyRegion),
}

/// The kind of input a question collects. A response's shape must match
/// its question's kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case", tag = "kind")]
#[ts(export)]
pub enum InputKind {
    FreeText,
    YesNo,
    SingleChoice,
    MultiChoice,
    NumericSlider { min: f64, max: f64 },
    /// Picks one body region from the body map.
    BodyMap,
    /// A grid of named rows each rated on a 0..=scale_max integer scale.
    GradedGrid { rows: Vec<String>, scale_max: u8 },
    Measurement { unit: String },
}

/// One selectable option for a choice-kind question.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionOption {
    pub value: String,
    pub label: String,
}

/// An immutable question template from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionTemplate {
    pub id: String,
    pub prompt: String,
    pub kind: InputKind,
    /// Populated for `SingleChoice` / `MultiChoice`, empty otherwise.
    pub options: Vec<QuestionOption>,
    pub required: bool,
    /// The pathway that makes this question reachable.
    pub pathway: PathwayTag,
    /// Lower sorts first; ties break by catalog order.
    pub priority: u32,
}
