use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::referral::BodyRegion;

/// One entry in the static condition catalog, used as a diagnostic
/// candidate.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Condition {
    pub id: String,
    pub name: String,
    pub body_region: BodyRegion,
    pub specialty: String,
}
