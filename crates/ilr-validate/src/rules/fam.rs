//! Learning delivery FAM rules.

use ilr_core::EndBound;
use ilr_core::query::{has_fam_code, has_fam_type_active_on, non_contiguous_fams};
use ilr_model::codes::{fam, fund_model};
use ilr_model::fields;
use ilr_model::{ErrorMessageParameter, Learner, LearningDelivery, LearningDeliveryFam};

use super::raise_for_delivery;
use crate::rule::{Rule, RuleContext};

fn fam_window_parameters(
    context: &RuleContext<'_>,
    fam: &LearningDeliveryFam,
) -> Vec<ErrorMessageParameter> {
    vec![
        context.parameter(fields::LEARN_DEL_FAM_TYPE, fam.learn_del_fam_type.as_str()),
        context.parameter(fields::LEARN_DEL_FAM_DATE_FROM, fam.learn_del_fam_date_from),
        context.parameter(fields::LEARN_DEL_FAM_DATE_TO, fam.learn_del_fam_date_to),
    ]
}

/// ACT windows on a delivery must follow on from each other with no gap
/// and no overlap.
#[derive(Debug, Default)]
pub struct LearnDelFamDateFrom04;

impl LearnDelFamDateFrom04 {
    pub const NAME: &'static str = "LearnDelFAMDateFrom_04";

    pub fn build_error_message_parameters(
        context: &RuleContext<'_>,
        fam: &LearningDeliveryFam,
    ) -> Vec<ErrorMessageParameter> {
        fam_window_parameters(context, fam)
    }
}

impl Rule<Learner> for LearnDelFamDateFrom04 {
    fn rule_name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, learner: &Learner, context: &RuleContext<'_>) {
        for delivery in &learner.learning_deliveries {
            for offending in non_contiguous_fams(&delivery.learning_delivery_fams, fam::ACT) {
                raise_for_delivery(
                    context,
                    Self::NAME,
                    learner,
                    delivery,
                    Self::build_error_message_parameters(context, offending),
                );
            }
        }
    }
}

/// Apprenticeship funded deliveries need an ACT record covering the start.
#[derive(Debug, Default)]
pub struct LearnDelFamType60;

impl LearnDelFamType60 {
    pub const NAME: &'static str = "LearnDelFAMType_60";

    pub fn build_error_message_parameters(
        context: &RuleContext<'_>,
        delivery: &LearningDelivery,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            context.parameter(fields::FUND_MODEL, delivery.fund_model),
            context.parameter(fields::LEARN_START_DATE, delivery.learn_start_date),
            context.parameter(fields::LEARN_DEL_FAM_TYPE, fam::ACT),
        ]
    }
}

impl Rule<Learner> for LearnDelFamType60 {
    fn rule_name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, learner: &Learner, context: &RuleContext<'_>) {
        for delivery in &learner.learning_deliveries {
            if delivery.fund_model != fund_model::APPRENTICESHIPS {
                continue;
            }
            if !has_fam_type_active_on(
                &delivery.learning_delivery_fams,
                fam::ACT,
                delivery.learn_start_date,
                EndBound::Inclusive,
            ) {
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

/// A FAM's date-to must not precede its date-from. Equal dates are allowed.
#[derive(Debug, Default)]
pub struct LearnDelFamDateTo02;

impl LearnDelFamDateTo02 {
    pub const NAME: &'static str = "LearnDelFAMDateTo_02";

    pub fn build_error_message_parameters(
        context: &RuleContext<'_>,
        fam: &LearningDeliveryFam,
    ) -> Vec<ErrorMessageParameter> {
        fam_window_parameters(context, fam)
    }
}

impl Rule<Learner> for LearnDelFamDateTo02 {
    fn rule_name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, learner: &Learner, context: &RuleContext<'_>) {
        for delivery in &learner.learning_deliveries {
            let inverted = delivery.learning_delivery_fams.iter().filter(|fam| {
                matches!(
                    (fam.learn_del_fam_date_from, fam.learn_del_fam_date_to),
                    (Some(from), Some(to)) if to < from
                )
            });
            for fam in inverted {
                raise_for_delivery(
                    context,
                    Self::NAME,
                    learner,
                    delivery,
                    Self::build_error_message_parameters(context, fam),
                );
            }
        }
    }
}

/// Adult skills funded English and maths aims are fully funded and must not
/// be recorded as co-funded.
#[derive(Debug, Default)]
pub struct LearnDelFamType39;

impl LearnDelFamType39 {
    pub const NAME: &'static str = "LearnDelFAMType_39";

    pub fn build_error_message_parameters(
        context: &RuleContext<'_>,
        delivery: &LearningDelivery,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            context.parameter(fields::FUND_MODEL, delivery.fund_model),
            context.parameter(fields::LEARN_AIM_REF, delivery.learn_aim_ref.as_str()),
            context.parameter(fields::LEARN_DEL_FAM_TYPE, fam::FFI),
            context.parameter(fields::LEARN_DEL_FAM_CODE, fam::FFI_CO_FUNDED),
        ]
    }
}

impl Rule<Learner> for LearnDelFamType39 {
    fn rule_name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, learner: &Learner, context: &RuleContext<'_>) {
        let Some(derived) = context.derived() else {
            return;
        };
        for delivery in &learner.learning_deliveries {
            if delivery.fund_model == fund_model::ADULT_SKILLS
                && has_fam_code(&delivery.learning_delivery_fams, fam::FFI, fam::FFI_CO_FUNDED)
                && derived.is_basic_skills_learner(delivery)
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
