use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::referral::BodyRegion;

/// A typed answer value. The variant must match the question's `InputKind`;
/// the engine rejects mismatches with a validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case", tag = "type", content = "value")]
#[ts(export)]
pub enum ResponseValue {
    Text(String),
    YesNo(bool),
    Choice(String),
    MultiChoice(Vec<String>),
    Number(f64),
    Region(BodyRegion),
    /// Keyed map for graded-grid answers: row id -> rating.
    Grid(BTreeMap<String, u8>),
    Measurement(f64),
}

impl ResponseValue {
    /// True for a yes/no answer of `yes`. Any other variant is `false`.
    pub fn is_yes(&self) -> bool {
        matches!(self, ResponseValue::YesNo(true))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            ResponseValue::Number(n) | ResponseValue::Measurement(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_region(&self) -> Option<BodyRegion> {
        match self {
            ResponseValue::Region(r) => Some(*r),
            _ => None,
        }
    }
}

/// A recorded answer to one catalog question.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Response {
    pub question_id: String,
    pub value: ResponseValue,
    pub recorded_at: jiff::Timestamp,
}
