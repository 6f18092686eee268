//! Traineeship rules.

use ilr_core::query::has_qualifying_outcome;
use ilr_model::codes::{aim_type, comp_status, outcome_type, prog_type};
use ilr_model::fields;
use ilr_model::{ErrorMessageParameter, Learner, LearningDelivery};

use super::raise_for_delivery;
use crate::rule::{Rule, RuleContext};

/// The work experience element of a traineeship must record a work
/// placement.
#[derive(Debug, Default)]
pub struct WorkPlaceStartDate01;

impl WorkPlaceStartDate01 {
    pub const NAME: &'static str = "WorkPlaceStartDate_01";

    pub fn build_error_message_parameters(
        context: &RuleContext<'_>,
        delivery: &LearningDelivery,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            context.parameter(fields::LEARN_AIM_REF, delivery.learn_aim_ref.as_str()),
            context.parameter(fields::PROG_TYPE, delivery.prog_type),
        ]
    }
}

impl Rule<Learner> for WorkPlaceStartDate01 {
    fn rule_name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, learner: &Learner, context: &RuleContext<'_>) {
        let Some(derived) = context.derived() else {
            return;
        };
        if !derived.learner_has_inflexible_element() {
            return;
        }
        for delivery in &learner.learning_deliveries {
            if derived.is_inflexible_element_of_training_aim(delivery)
                && delivery.learning_delivery_work_placements.is_empty()
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

/// A completed traineeship needs a progression outcome starting after the
/// programme ended and within the outcome window.
#[derive(Debug)]
pub struct OutStartDate03 {
    window_months: u32,
}

impl OutStartDate03 {
    pub const NAME: &'static str = "OutStartDate_03";

    pub fn new(window_months: u32) -> Self {
        Self { window_months }
    }

    pub fn build_error_message_parameters(
        context: &RuleContext<'_>,
        delivery: &LearningDelivery,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            context.parameter(fields::PROG_TYPE, delivery.prog_type),
            context.parameter(fields::AIM_TYPE, delivery.aim_type),
            context.parameter(fields::COMP_STATUS, delivery.comp_status),
            context.parameter(fields::LEARN_ACT_END_DATE, delivery.learn_act_end_date),
        ]
    }
}

impl Rule<Learner> for OutStartDate03 {
    fn rule_name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, learner: &Learner, context: &RuleContext<'_>) {
        for delivery in &learner.learning_deliveries {
            if delivery.prog_type != Some(prog_type::TRAINEESHIP)
                || delivery.aim_type != aim_type::PROGRAMME_AIM
                || delivery.comp_status != comp_status::COMPLETED
            {
                continue;
            }
            let Some(ended) = delivery.learn_act_end_date else {
                continue;
            };
            if !has_qualifying_outcome(
                context.outcomes().iter().copied(),
                outcome_type::PROGRESSION,
                ended,
                self.window_months,
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

#[cfg(test)]
mod tests {
    use ilr_model::{DpOutcome, LearningDeliveryWorkPlacement};
    use ilr_reference::ReferenceDataSet;

    use super::*;
    use crate::rules::test_support::{date, learner_with, reference, run, run_with};

    #[test]
    fn work_experience_without_placement() {
        let mut delivery = LearningDelivery::new(2, "Z0007835", 25, date(2018, 9, 1));
        delivery.prog_type = Some(24);
        let learner = learner_with(delivery);
        assert_eq!(run(&WorkPlaceStartDate01, &learner).len(), 1);

        let mut placed = learner.clone();
        placed.learning_deliveries[0]
            .learning_delivery_work_placements
            .push(LearningDeliveryWorkPlacement {
                work_place_start_date: date(2018, 10, 1),
                work_place_end_date: None,
                work_place_mode: 1,
                work_place_emp_id: None,
            });
        assert!(run(&WorkPlaceStartDate01, &placed).is_empty());
    }

    fn completed_traineeship() -> Learner {
        let mut delivery = LearningDelivery::new(1, "ZPROG001", 25, date(2018, 9, 1));
        delivery.prog_type = Some(24);
        delivery.aim_type = 1;
        delivery.comp_status = 2;
        delivery.learn_act_end_date = Some(date(2019, 1, 31));
        learner_with(delivery)
    }

    fn check(outcome: &DpOutcome) -> usize {
        run_with(
            &OutStartDate03::new(6),
            &completed_traineeship(),
            reference(ReferenceDataSet::default()),
            &[outcome],
        )
        .len()
    }

    #[test]
    fn outcome_must_start_after_end_and_within_window() {
        assert_eq!(check(&DpOutcome::new("EMP", 1, date(2019, 1, 31))), 1);
        assert_eq!(check(&DpOutcome::new("EMP", 1, date(2019, 2, 1))), 0);
        assert_eq!(check(&DpOutcome::new("EDU", 1, date(2019, 7, 31))), 0);
        assert_eq!(check(&DpOutcome::new("EDU", 1, date(2019, 8, 1))), 1);
        assert_eq!(check(&DpOutcome::new("GAP", 1, date(2019, 3, 1))), 1);
    }

    #[test]
    fn no_outcomes_recorded() {
        assert_eq!(run(&OutStartDate03::new(6), &completed_traineeship()).len(), 1);

        let mut continuing = completed_traineeship();
        continuing.learning_deliveries[0].comp_status = 1;
        assert!(run(&OutStartDate03::new(6), &continuing).is_empty());
    }
}
