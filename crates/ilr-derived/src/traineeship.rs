use ilr_model::codes::{aim_ref, prog_type};
use ilr_model::{Learner, LearningDelivery};

pub fn is_traineeship(delivery: &LearningDelivery) -> bool {
    delivery.prog_type == Some(prog_type::TRAINEESHIP)
}

/// Is the delivery a work experience aim, recognised for traineeships?
pub fn is_work_experience(delivery: &LearningDelivery) -> bool {
    let reference = delivery.learn_aim_ref.trim();
    aim_ref::WORK_EXPERIENCE
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(reference))
}

/// The work experience element of a traineeship cannot be dropped from the
/// programme.
pub fn is_inflexible_element_of_training_aim(delivery: &LearningDelivery) -> bool {
    is_traineeship(delivery) && is_work_experience(delivery)
}

pub fn learner_has_inflexible_element(learner: &Learner) -> bool {
    learner
        .learning_deliveries
        .iter()
        .any(is_inflexible_element_of_training_aim)
}
