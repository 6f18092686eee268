use ilr_core::query::{employment_status_for_date, has_any_monitoring, has_esm_code, is_not_employed};
use ilr_model::codes::{esm, fam, fund_model};
use ilr_model::{Learner, LearningDelivery};

/// Adult-skills delivery, flagged with a qualifying learning monitoring code,
/// for a learner who was not employed and claiming other state benefits when
/// the delivery started.
pub fn is_adult_funded_unemployed_with_other_state_benefits(
    delivery: &LearningDelivery,
    learner: &Learner,
) -> bool {
    fund_model::ADULT_SKILLS_ELIGIBLE.contains(&delivery.fund_model)
        && has_any_monitoring(
            &delivery.learning_delivery_fams,
            fam::QUALIFYING_LEARNING_MONITORING,
        )
        && employment_status_for_date(&learner.learner_employment_statuses, delivery.learn_start_date)
            .is_some_and(|status| {
                is_not_employed(status)
                    && has_esm_code(status, esm::BSI, esm::OTHER_STATE_BENEFITS)
            })
}
