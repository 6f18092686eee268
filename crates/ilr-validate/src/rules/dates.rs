//! Date ordering rules on learning deliveries.

use std::sync::Arc;

use ilr_model::fields;
use ilr_model::{ErrorMessageParameter, Learner, LearningDelivery};
use ilr_reference::FileDataService;

use super::raise_for_delivery;
use crate::rule::{Rule, RuleContext};

fn raise_each<F>(rule_name: &str, learner: &Learner, context: &RuleContext<'_>, mut check: F)
where
    F: FnMut(&LearningDelivery) -> Option<Vec<ErrorMessageParameter>>,
{
    for delivery in &learner.learning_deliveries {
        if let Some(parameters) = check(delivery) {
            raise_for_delivery(context, rule_name, learner, delivery, parameters);
        }
    }
}

#[derive(Debug, Default)]
pub struct LearnPlanEndDate02;

impl LearnPlanEndDate02 {
    pub const NAME: &'static str = "LearnPlanEndDate_02";

    pub fn build_error_message_parameters(
        context: &RuleContext<'_>,
        delivery: &LearningDelivery,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            context.parameter(fields::LEARN_START_DATE, delivery.learn_start_date),
            context.parameter(fields::LEARN_PLAN_END_DATE, delivery.learn_plan_end_date),
        ]
    }
}

impl Rule<Learner> for LearnPlanEndDate02 {
    fn rule_name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, learner: &Learner, context: &RuleContext<'_>) {
        raise_each(Self::NAME, learner, context, |delivery| {
            delivery
                .learn_plan_end_date
                .filter(|planned| *planned < delivery.learn_start_date)
                .map(|_| Self::build_error_message_parameters(context, delivery))
        });
    }
}

#[derive(Debug, Default)]
pub struct LearnActEndDate01;

impl LearnActEndDate01 {
    pub const NAME: &'static str = "LearnActEndDate_01";

    pub fn build_error_message_parameters(
        context: &RuleContext<'_>,
        delivery: &LearningDelivery,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            context.parameter(fields::LEARN_START_DATE, delivery.learn_start_date),
            context.parameter(fields::LEARN_ACT_END_DATE, delivery.learn_act_end_date),
        ]
    }
}

impl Rule<Learner> for LearnActEndDate01 {
    fn rule_name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, learner: &Learner, context: &RuleContext<'_>) {
        raise_each(Self::NAME, learner, context, |delivery| {
            delivery
                .learn_act_end_date
                .filter(|ended| *ended < delivery.learn_start_date)
                .map(|_| Self::build_error_message_parameters(context, delivery))
        });
    }
}

/// An actual end date cannot be later than the file preparation date.
pub struct LearnActEndDate04 {
    file: Arc<dyn FileDataService>,
}

impl LearnActEndDate04 {
    pub const NAME: &'static str = "LearnActEndDate_04";

    pub fn new(file: Arc<dyn FileDataService>) -> Self {
        Self { file }
    }

    pub fn build_error_message_parameters(
        &self,
        context: &RuleContext<'_>,
        delivery: &LearningDelivery,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            context.parameter(fields::LEARN_ACT_END_DATE, delivery.learn_act_end_date),
            context.parameter(fields::FILE_PREPARATION_DATE, self.file.file_preparation_date()),
        ]
    }
}

impl Rule<Learner> for LearnActEndDate04 {
    fn rule_name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, learner: &Learner, context: &RuleContext<'_>) {
        let prepared = self.file.file_preparation_date();
        raise_each(Self::NAME, learner, context, |delivery| {
            delivery
                .learn_act_end_date
                .filter(|ended| *ended > prepared)
                .map(|_| self.build_error_message_parameters(context, delivery))
        });
    }
}

#[derive(Debug, Default)]
pub struct AchDate05;

impl AchDate05 {
    pub const NAME: &'static str = "AchDate_05";

    pub fn build_error_message_parameters(
        context: &RuleContext<'_>,
        delivery: &LearningDelivery,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            context.parameter(fields::LEARN_ACT_END_DATE, delivery.learn_act_end_date),
            context.parameter(fields::ACH_DATE, delivery.ach_date),
        ]
    }
}

impl Rule<Learner> for AchDate05 {
    fn rule_name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, learner: &Learner, context: &RuleContext<'_>) {
        raise_each(Self::NAME, learner, context, |delivery| {
            match (delivery.ach_date, delivery.learn_act_end_date) {
                (Some(achieved), Some(ended)) if achieved < ended => {
                    Some(Self::build_error_message_parameters(context, delivery))
                }
                _ => None,
            }
        });
    }
}
