use ilr_core::query::{has_any_monitoring, has_fam_type};
use ilr_model::LearningDelivery;
use ilr_model::codes::fam;

pub fn is_restart(delivery: &LearningDelivery) -> bool {
    has_fam_type(&delivery.learning_delivery_fams, fam::RES)
}

/// OLASS funded delivery for a learner in custody.
pub fn is_learner_in_custody(delivery: &LearningDelivery) -> bool {
    has_any_monitoring(&delivery.learning_delivery_fams, &[fam::LDM_OLASS])
}
