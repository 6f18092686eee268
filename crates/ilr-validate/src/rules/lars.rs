//! Learning aim reference checks against LARS.

use std::sync::Arc;

use ilr_model::codes::{fund_model, lars_category};
use ilr_model::fields;
use ilr_model::{ErrorMessageParameter, Learner, LearningDelivery};
use ilr_reference::LarsDataService;

use super::raise_for_delivery;
use crate::rule::{Rule, RuleContext};

fn aim_parameters(
    context: &RuleContext<'_>,
    delivery: &LearningDelivery,
) -> Vec<ErrorMessageParameter> {
    vec![
        context.parameter(fields::LEARN_AIM_REF, delivery.learn_aim_ref.as_str()),
        context.parameter(fields::LEARN_START_DATE, delivery.learn_start_date),
        context.parameter(fields::FUND_MODEL, delivery.fund_model),
    ]
}

/// The aim must be valid in LARS for its derived category on the start date.
pub struct LearnAimRef88 {
    lars: Arc<dyn LarsDataService>,
}

impl LearnAimRef88 {
    pub const NAME: &'static str = "LearnAimRef_88";

    pub fn new(lars: Arc<dyn LarsDataService>) -> Self {
        Self { lars }
    }

    pub fn build_error_message_parameters(
        context: &RuleContext<'_>,
        delivery: &LearningDelivery,
    ) -> Vec<ErrorMessageParameter> {
        aim_parameters(context, delivery)
    }
}

impl Rule<Learner> for LearnAimRef88 {
    fn rule_name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, learner: &Learner, context: &RuleContext<'_>) {
        let Some(derived) = context.derived() else {
            return;
        };
        for delivery in &learner.learning_deliveries {
            // Work experience aims are not catalogued by category.
            if derived.is_inflexible_element_of_training_aim(delivery) {
                continue;
            }
            let Some(category) = derived.validity_category(delivery) else {
                continue;
            };
            if self
                .lars
                .validity_for(&delivery.learn_aim_ref, category, delivery.learn_start_date)
                .is_none()
            {
                raise_for_delivery(
                    context,
                    Self::NAME,
                    learner,
                    delivery,
                    Self::build_error_message_parameters(context, delivery),
                );
            }
        }
    }
}

/// Adult skills aims for learners in custody must be in the OLASS offenders
/// category on the start date.
pub struct LearnAimRef89 {
    lars: Arc<dyn LarsDataService>,
}

impl LearnAimRef89 {
    pub const NAME: &'static str = "LearnAimRef_89";

    pub fn new(lars: Arc<dyn LarsDataService>) -> Self {
        Self { lars }
    }

    pub fn build_error_message_parameters(
        context: &RuleContext<'_>,
        delivery: &LearningDelivery,
    ) -> Vec<ErrorMessageParameter> {
        aim_parameters(context, delivery)
    }
}

impl Rule<Learner> for LearnAimRef89 {
    fn rule_name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, learner: &Learner, context: &RuleContext<'_>) {
        let Some(derived) = context.derived() else {
            return;
        };
        for delivery in &learner.learning_deliveries {
            if delivery.fund_model == fund_model::ADULT_SKILLS
                && derived.is_learner_in_custody(delivery)
                && !self.lars.has_category_on(
                    &delivery.learn_aim_ref,
                    lars_category::OLASS_OFFENDERS_IN_CUSTODY,
                    delivery.learn_start_date,
                )
            {
                raise_for_delivery(
                    context,
                    Self::NAME,
                    learner,
                    delivery,
                    Self::build_error_message_parameters(context, delivery),
                );
            }
        }
    }
}
