//! The rule catalog.
//!
//! Each rule is a thin composition of the primitives in `ilr-core`, derived
//! data and the reference collaborators. Message parameters are built by a
//! per-rule `build_error_message_parameters`.

pub mod apprenticeship;
pub mod contract;
pub mod dates;
pub mod fam;
pub mod lars;
pub mod learner;
pub mod message;
pub mod organisation;
pub mod postcode;
pub mod traineeship;

pub use apprenticeship::AFinType10;
pub use contract::ConRefNumber03;
pub use dates::{AchDate05, LearnActEndDate01, LearnActEndDate04, LearnPlanEndDate02};
pub use fam::{LearnDelFamDateFrom04, LearnDelFamDateTo02, LearnDelFamType39, LearnDelFamType60};
pub use lars::{LearnAimRef88, LearnAimRef89};
pub use learner::{DateOfBirth51, EmpStat01, EsmType16};
pub use message::{LearnRefNumber04, R106};
pub use organisation::Ukprn21;
pub use postcode::DelLocPostCode16;
pub use traineeship::{OutStartDate03, WorkPlaceStartDate01};

use ilr_model::{ErrorMessageParameter, Learner, LearningDelivery};

use crate::rule::RuleContext;

fn raise_for_delivery(
    context: &RuleContext<'_>,
    rule_name: &str,
    learner: &Learner,
    delivery: &LearningDelivery,
    parameters: Vec<ErrorMessageParameter>,
) {
    context.raise(
        rule_name,
        Some(&learner.learn_ref_number),
        Some(delivery.aim_seq_number),
        parameters,
    );
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use chrono::NaiveDate;
    use ilr_derived::DerivedData;
    use ilr_model::{DpOutcome, Learner, LearningDelivery, ValidationError};
    use ilr_reference::{ReferenceData, ReferenceDataSet};

    use crate::handler::ValidationErrorCollector;
    use crate::rule::{Rule, RuleContext};

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub fn learner_with(delivery: LearningDelivery) -> Learner {
        let mut learner = Learner::new("LRN001");
        learner.learning_deliveries.push(delivery);
        learner
    }

    pub fn reference(set: ReferenceDataSet) -> Arc<ReferenceData> {
        Arc::new(ReferenceData::new(set))
    }

    /// Run one learner rule with LARS answers from `reference`.
    pub fn run_with(
        rule: &dyn Rule<Learner>,
        learner: &Learner,
        reference: Arc<ReferenceData>,
        outcomes: &[&DpOutcome],
    ) -> Vec<ValidationError> {
        let derived = DerivedData::builder()
            .with_lars(reference)
            .build()
            .unwrap();
        let view = derived.for_learner(learner);
        let collector = ValidationErrorCollector::new();
        let context = RuleContext::for_learner(&collector, &view, outcomes);
        rule.validate(learner, &context);
        collector.into_raised()
    }

    pub fn run(rule: &dyn Rule<Learner>, learner: &Learner) -> Vec<ValidationError> {
        run_with(rule, learner, reference(ReferenceDataSet::default()), &[])
    }
}
