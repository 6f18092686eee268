use ilr_model::LearningDelivery;
use ilr_model::codes::prog_type;

/// Is the delivery part of an apprenticeship programme?
pub fn is_apprenticeship(delivery: &LearningDelivery) -> bool {
    delivery
        .prog_type
        .is_some_and(|code| prog_type::APPRENTICESHIPS.contains(&code))
}
