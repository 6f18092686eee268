//! Learner-level eligibility rules.

use ilr_core::dates::age_at;
use ilr_core::query::{employment_status_for_date, has_fam_code};
use ilr_model::codes::{fam, fund_model};
use ilr_model::fields;
use ilr_model::{ErrorMessageParameter, Learner, LearningDelivery};

use super::raise_for_delivery;
use crate::rule::{Rule, RuleContext};

const ADULT_MINIMUM_AGE: i32 = 19;

/// Adult skills funding for learners under 19 is restricted to
/// apprenticeships, restarts and traineeship work experience.
#[derive(Debug, Default)]
pub struct DateOfBirth51;

impl DateOfBirth51 {
    pub const NAME: &'static str = "DateOfBirth_51";

    pub fn build_error_message_parameters(
        context: &RuleContext<'_>,
        learner: &Learner,
        delivery: &LearningDelivery,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            context.parameter(fields::DATE_OF_BIRTH, learner.date_of_birth),
            context.parameter(fields::LEARN_START_DATE, delivery.learn_start_date),
            context.parameter(fields::FUND_MODEL, delivery.fund_model),
        ]
    }
}

impl Rule<Learner> for DateOfBirth51 {
    fn rule_name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, learner: &Learner, context: &RuleContext<'_>) {
        let (Some(date_of_birth), Some(derived)) = (learner.date_of_birth, context.derived())
        else {
            return;
        };
        for delivery in &learner.learning_deliveries {
            if delivery.fund_model != fund_model::ADULT_SKILLS
                || derived.is_apprenticeship(delivery)
                || derived.is_restart(delivery)
                || derived.is_inflexible_element_of_training_aim(delivery)
            {
                continue;
            }
            if age_at(date_of_birth, delivery.learn_start_date) < ADULT_MINIMUM_AGE {
                raise_for_delivery(
                    context,
                    Self::NAME,
                    learner,
                    delivery,
                    Self::build_error_message_parameters(context, learner, delivery),
                );
            }
        }
    }
}

/// Adult skills funded deliveries need an employment status applying on the
/// start date.
#[derive(Debug, Default)]
pub struct EmpStat01;

impl EmpStat01 {
    pub const NAME: &'static str = "EmpStat_01";

    pub fn build_error_message_parameters(
        context: &RuleContext<'_>,
        delivery: &LearningDelivery,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            context.parameter(fields::FUND_MODEL, delivery.fund_model),
            context.parameter(fields::LEARN_START_DATE, delivery.learn_start_date),
        ]
    }
}

impl Rule<Learner> for EmpStat01 {
    fn rule_name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, learner: &Learner, context: &RuleContext<'_>) {
        for delivery in &learner.learning_deliveries {
            if delivery.fund_model == fund_model::ADULT_SKILLS
                && employment_status_for_date(
                    &learner.learner_employment_statuses,
                    delivery.learn_start_date,
                )
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

/// Unemployed learners on other state benefits taking a qualifying adult
/// skills aim must be fully funded.
#[derive(Debug, Default)]
pub struct EsmType16;

impl EsmType16 {
    pub const NAME: &'static str = "ESMType_16";

    pub fn build_error_message_parameters(
        context: &RuleContext<'_>,
        delivery: &LearningDelivery,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            context.parameter(fields::FUND_MODEL, delivery.fund_model),
            context.parameter(fields::LEARN_START_DATE, delivery.learn_start_date),
            context.parameter(fields::LEARN_DEL_FAM_TYPE, fam::FFI),
            context.parameter(fields::LEARN_DEL_FAM_CODE, fam::FFI_CO_FUNDED),
        ]
    }
}

impl Rule<Learner> for EsmType16 {
    fn rule_name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, learner: &Learner, context: &RuleContext<'_>) {
        let Some(derived) = context.derived() else {
            return;
        };
        for delivery in &learner.learning_deliveries {
            if has_fam_code(&delivery.learning_delivery_fams, fam::FFI, fam::FFI_CO_FUNDED)
                && derived.is_adult_funded_unemployed_with_other_state_benefits(delivery)
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

#[cfg(test)]
mod tests {
    use ilr_model::{LearnerEmploymentStatus, LearningDeliveryFam};

    use super::*;
    use crate::rules::test_support::{date, learner_with, run};

    fn adult_delivery() -> LearningDelivery {
        LearningDelivery::new(1, "60133533", 35, date(2018, 9, 1))
    }

    fn born(learner: Learner, y: i32, m: u32, d: u32) -> Learner {
        Learner {
            date_of_birth: Some(date(y, m, d)),
            ..learner
        }
    }

    #[test]
    fn under_19_on_start_date() {
        let young = born(learner_with(adult_delivery()), 1999, 9, 2);
        assert_eq!(run(&DateOfBirth51, &young).len(), 1);

        let birthday = born(learner_with(adult_delivery()), 1999, 9, 1);
        assert!(run(&DateOfBirth51, &birthday).is_empty());

        let unknown = learner_with(adult_delivery());
        assert!(run(&DateOfBirth51, &unknown).is_empty());
    }

    #[test]
    fn apprenticeships_and_restarts_are_exempt() {
        let mut apprenticeship = adult_delivery();
        apprenticeship.prog_type = Some(3);
        assert!(run(&DateOfBirth51, &born(learner_with(apprenticeship), 2001, 1, 1)).is_empty());

        let mut restart = adult_delivery();
        restart
            .learning_delivery_fams
            .push(LearningDeliveryFam::new("RES", "1"));
        assert!(run(&DateOfBirth51, &born(learner_with(restart), 2001, 1, 1)).is_empty());

        let mut work_experience = LearningDelivery::new(1, "Z0007834", 35, date(2018, 9, 1));
        work_experience.prog_type = Some(24);
        assert!(run(&DateOfBirth51, &born(learner_with(work_experience), 2001, 1, 1)).is_empty());
    }

    #[test]
    fn exemption_stays_with_its_own_delivery() {
        let mut apprenticeship = adult_delivery();
        apprenticeship.prog_type = Some(3);
        let mut learner = born(learner_with(apprenticeship), 2001, 1, 1);
        learner.learning_deliveries.push(adult_delivery());

        let errors = run(&DateOfBirth51, &learner);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].aim_sequence_number, Some(1));
    }

    #[test]
    fn employment_status_must_precede_start() {
        let mut learner = learner_with(adult_delivery());
        assert_eq!(run(&EmpStat01, &learner).len(), 1);

        learner
            .learner_employment_statuses
            .push(LearnerEmploymentStatus::new(10, date(2018, 9, 2)));
        assert_eq!(run(&EmpStat01, &learner).len(), 1);

        learner
            .learner_employment_statuses
            .push(LearnerEmploymentStatus::new(11, date(2018, 9, 1)));
        assert!(run(&EmpStat01, &learner).is_empty());
    }

    #[test]
    fn co_funded_unemployed_claimant() {
        let mut delivery = adult_delivery();
        delivery.learning_delivery_fams = vec![
            LearningDeliveryFam::new("LDM", "328"),
            LearningDeliveryFam::new("FFI", "2"),
        ];
        let mut learner = learner_with(delivery);
        learner
            .learner_employment_statuses
            .push(LearnerEmploymentStatus::new(12, date(2018, 1, 1)).with_monitoring("BSI", 4));
        assert_eq!(run(&EsmType16, &learner).len(), 1);

        learner.learning_deliveries[0].learning_delivery_fams[1].learn_del_fam_code =
            "1".to_string();
        assert!(run(&EsmType16, &learner).is_empty());
    }
}
