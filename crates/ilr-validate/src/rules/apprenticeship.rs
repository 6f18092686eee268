use ilr_core::query::has_app_fin_record;
use ilr_model::codes::{aim_type, app_fin, fund_model, prog_type};
use ilr_model::fields;
use ilr_model::{ErrorMessageParameter, Learner, LearningDelivery};

use super::raise_for_delivery;
use crate::rule::{Rule, RuleContext};

/// Apprenticeship standard programme aims must carry a total negotiated
/// price record.
#[derive(Debug, Default)]
pub struct AFinType10;

impl AFinType10 {
    pub const NAME: &'static str = "AFinType_10";

    pub fn build_error_message_parameters(
        context: &RuleContext<'_>,
        delivery: &LearningDelivery,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            context.parameter(fields::AIM_TYPE, delivery.aim_type),
            context.parameter(fields::FUND_MODEL, delivery.fund_model),
            context.parameter(fields::PROG_TYPE, delivery.prog_type),
            context.parameter(fields::AFIN_TYPE, app_fin::TOTAL_NEGOTIATED_PRICE),
        ]
    }

    fn applies_to(delivery: &LearningDelivery) -> bool {
        delivery.fund_model == fund_model::APPRENTICESHIPS
            && delivery.prog_type == Some(prog_type::APPRENTICESHIP_STANDARD)
            && delivery.aim_type == aim_type::PROGRAMME_AIM
    }
}

impl Rule<Learner> for AFinType10 {
    fn rule_name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, learner: &Learner, context: &RuleContext<'_>) {
        for delivery in &learner.learning_deliveries {
            if Self::applies_to(delivery)
                && !has_app_fin_record(&delivery.app_fin_records, app_fin::TOTAL_NEGOTIATED_PRICE)
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
