//! LARS validity category derivation.

use ilr_core::query::{employment_status_for_date, has_esm_code, has_fam_type, is_not_employed};
use ilr_model::codes::{esm, fam, fund_model, prog_type, validity_category};
use ilr_model::{LearnerEmploymentStatus, LearningDelivery};

use crate::apprenticeship::is_apprenticeship;
use crate::flags::is_learner_in_custody;

/// The LARS validity category a delivery is checked against, or `None` when
/// its funding has no category.
pub fn validity_category(
    delivery: &LearningDelivery,
    employment_statuses: &[LearnerEmploymentStatus],
) -> Option<&'static str> {
    if delivery.prog_type == Some(prog_type::TRAINEESHIP) {
        return match delivery.fund_model {
            fund_model::AGE_16_TO_19 => Some(validity_category::TRAINEESHIPS_16_TO_19),
            fund_model::ADULT_SKILLS => Some(validity_category::TRAINEESHIPS_19_TO_24),
            _ => None,
        };
    }

    if delivery.fund_model == fund_model::APPRENTICESHIPS || is_apprenticeship(delivery) {
        return Some(validity_category::APPRENTICESHIPS);
    }

    match delivery.fund_model {
        fund_model::COMMUNITY_LEARNING => Some(validity_category::COMMUNITY_LEARNING),
        fund_model::AGE_16_TO_19 | fund_model::OTHER_16_TO_19 => {
            Some(validity_category::EFA_16_TO_19)
        }
        fund_model::EUROPEAN_SOCIAL_FUND => Some(validity_category::ESF),
        fund_model::NOT_FUNDED_BY_ESFA
            if has_fam_type(&delivery.learning_delivery_fams, fam::ADL) =>
        {
            Some(validity_category::LOANS)
        }
        fund_model::OTHER_ADULT | fund_model::NOT_FUNDED_BY_ESFA => Some(validity_category::ANY),
        fund_model::ADULT_SKILLS => Some(adult_skills_category(delivery, employment_statuses)),
        _ => None,
    }
}

fn adult_skills_category(
    delivery: &LearningDelivery,
    employment_statuses: &[LearnerEmploymentStatus],
) -> &'static str {
    if is_learner_in_custody(delivery) {
        return validity_category::OLASS_ADULT;
    }

    let unemployed = employment_status_for_date(employment_statuses, delivery.learn_start_date)
        .is_some_and(|status| {
            is_not_employed(status) && has_esm_code(status, esm::BSI, esm::UNEMPLOYMENT_BENEFITS)
        });
    if unemployed {
        validity_category::UNEMPLOYED
    } else {
        validity_category::ADULT_SKILLS
    }
}
