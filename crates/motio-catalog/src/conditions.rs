//! The condition catalog: every diagnosable condition the clinic
//! recognizes, in stable catalog order. This order is load-bearing — the
//! diagnostic fallback ranking walks it front to back.

use std::sync::LazyLock;

use motio_core::models::condition::Condition;
use motio_core::models::referral::BodyRegion;

use crate::error::CatalogError;

fn condition(id: &str, name: &str, region: BodyRegion, specialty: &str) -> Condition {
    Condition {
        id: id.to_string(),
        name: name.to_string(),
        body_region: region,
        specialty: specialty.to_string(),
    }
}

static CONDITIONS: LazyLock<Vec<Condition>> = LazyLock::new(|| {
    use BodyRegion::*;
    vec![
        condition("rotator_cuff_tendinopathy", "Rotator cuff tendinopathy", Shoulder, "musculoskeletal"),
        condition("subacromial_impingement", "Subacromial pain syndrome", Shoulder, "musculoskeletal"),
        condition("adhesive_capsulitis", "Adhesive capsulitis (frozen shoulder)", Shoulder, "musculoskeletal"),
        condition("acj_sprain", "Acromioclavicular joint sprain", Shoulder, "musculoskeletal"),
        condition("mechanical_neck_pain", "Mechanical neck pain", Neck, "musculoskeletal"),
        condition("cervical_radiculopathy", "Cervical radiculopathy", Neck, "neuromusculoskeletal"),
        condition("whiplash_associated_disorder", "Whiplash-associated disorder", Neck, "musculoskeletal"),
        condition("nonspecific_low_back_pain", "Non-specific low back pain", LowerBack, "musculoskeletal"),
        condition("lumbar_disc_herniation", "Lumbar disc herniation", LowerBack, "neuromusculoskeletal"),
        condition("lumbar_radiculopathy", "Lumbar radiculopathy", LowerBack, "neuromusculoskeletal"),
        condition("lumbar_spinal_stenosis", "Lumbar spinal stenosis", LowerBack, "neuromusculoskeletal"),
        condition("patellofemoral_pain", "Patellofemoral pain syndrome", Knee, "musculoskeletal"),
        condition("meniscal_injury", "Meniscal injury", Knee, "musculoskeletal"),
        condition("acl_sprain", "Anterior cruciate ligament sprain", Knee, "musculoskeletal"),
        condition("knee_osteoarthritis", "Knee osteoarthritis", Knee, "musculoskeletal"),
        condition("hip_osteoarthritis", "Hip osteoarthritis", Hip, "musculoskeletal"),
        condition("gtps", "Greater trochanteric pain syndrome", Hip, "musculoskeletal"),
        condition("fai_syndrome", "Femoroacetabular impingement syndrome", Hip, "musculoskeletal"),
        condition("lateral_epicondylalgia", "Lateral epicondylalgia (tennis elbow)", Elbow, "musculoskeletal"),
        condition("medial_epicondylalgia", "Medial epicondylalgia (golfer's elbow)", Elbow, "musculoskeletal"),
    ]
});

/// All conditions, in catalog order.
pub fn all() -> &'static [Condition] {
    &CONDITIONS
}

pub fn by_id(id: &str) -> Result<&'static Condition, CatalogError> {
    CONDITIONS
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| CatalogError::UnknownCondition(id.to_string()))
}

/// Conditions whose primary region matches, in catalog order.
pub fn for_region(region: BodyRegion) -> Vec<&'static Condition> {
    CONDITIONS.iter().filter(|c| c.body_region == region).collect()
}
