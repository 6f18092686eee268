use std::sync::Arc;

use ilr_model::codes::{fund_model, funding_stream_period};
use ilr_model::fields;
use ilr_model::{ErrorMessageParameter, Learner, LearningDelivery};
use ilr_reference::{FcsDataService, FileDataService};

use super::raise_for_delivery;
use crate::rule::{Rule, RuleContext};

/// ESF deliveries must name a contract allocation that is taking new starts
/// on the start date.
pub struct ConRefNumber03 {
    fcs: Arc<dyn FcsDataService>,
    file: Arc<dyn FileDataService>,
}

impl ConRefNumber03 {
    pub const NAME: &'static str = "ConRefNumber_03";

    pub fn new(fcs: Arc<dyn FcsDataService>, file: Arc<dyn FileDataService>) -> Self {
        Self { fcs, file }
    }

    pub fn build_error_message_parameters(
        context: &RuleContext<'_>,
        delivery: &LearningDelivery,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            context.parameter(fields::FUND_MODEL, delivery.fund_model),
            context.parameter(fields::CON_REF_NUMBER, delivery.con_ref_number.as_deref()),
            context.parameter(fields::LEARN_START_DATE, delivery.learn_start_date),
        ]
    }

    fn has_open_allocation(&self, delivery: &LearningDelivery) -> bool {
        delivery.con_ref_number.as_deref().is_some_and(|con_ref| {
            self.fcs
                .contract_allocation_for(
                    self.file.ukprn(),
                    con_ref,
                    funding_stream_period::ESF_2014_TO_2020,
                    delivery.learn_start_date,
                )
                .is_some()
        })
    }
}

impl Rule<Learner> for ConRefNumber03 {
    fn rule_name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, learner: &Learner, context: &RuleContext<'_>) {
        for delivery in &learner.learning_deliveries {
            if delivery.fund_model == fund_model::EUROPEAN_SOCIAL_FUND
                && !self.has_open_allocation(delivery)
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
