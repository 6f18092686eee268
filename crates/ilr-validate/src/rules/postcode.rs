use std::sync::Arc;

use ilr_model::fields;
use ilr_model::{ErrorMessageParameter, Learner, LearningDelivery};
use ilr_reference::PostcodesDataService;

use super::raise_for_delivery;
use crate::rule::{Rule, RuleContext};

/// The delivery location postcode must be current in the ONS postcode
/// directory on the start date.
pub struct DelLocPostCode16 {
    postcodes: Arc<dyn PostcodesDataService>,
}

impl DelLocPostCode16 {
    pub const NAME: &'static str = "DelLocPostCode_16";

    pub fn new(postcodes: Arc<dyn PostcodesDataService>) -> Self {
        Self { postcodes }
    }

    pub fn build_error_message_parameters(
        context: &RuleContext<'_>,
        delivery: &LearningDelivery,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            context.parameter(fields::LEARN_START_DATE, delivery.learn_start_date),
            context.parameter(fields::DEL_LOC_POST_CODE, delivery.del_loc_post_code.as_deref()),
        ]
    }
}

impl Rule<Learner> for DelLocPostCode16 {
    fn rule_name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, learner: &Learner, context: &RuleContext<'_>) {
        for delivery in &learner.learning_deliveries {
            let Some(postcode) = delivery
                .del_loc_post_code
                .as_deref()
                .filter(|postcode| !postcode.trim().is_empty())
            else {
                continue;
            };
            if !self.postcodes.is_current_on(postcode, delivery.learn_start_date) {
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
