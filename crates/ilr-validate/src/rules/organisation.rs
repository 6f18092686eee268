use std::sync::Arc;

use ilr_model::codes::{fund_model, legal_org_type};
use ilr_model::fields;
use ilr_model::{ErrorMessageParameter, Learner, LearningDelivery};
use ilr_reference::{FileDataService, OrganisationDataService};

use super::raise_for_delivery;
use crate::rule::{Rule, RuleContext};

/// Specialist designated colleges may not deliver community learning.
pub struct Ukprn21 {
    organisations: Arc<dyn OrganisationDataService>,
    file: Arc<dyn FileDataService>,
}

impl Ukprn21 {
    pub const NAME: &'static str = "UKPRN_21";

    pub fn new(
        organisations: Arc<dyn OrganisationDataService>,
        file: Arc<dyn FileDataService>,
    ) -> Self {
        Self {
            organisations,
            file,
        }
    }

    pub fn build_error_message_parameters(
        &self,
        context: &RuleContext<'_>,
        delivery: &LearningDelivery,
    ) -> Vec<ErrorMessageParameter> {
        vec![
            context.parameter(fields::UKPRN, self.file.ukprn()),
            context.parameter(fields::FUND_MODEL, delivery.fund_model),
        ]
    }
}

impl Rule<Learner> for Ukprn21 {
    fn rule_name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, learner: &Learner, context: &RuleContext<'_>) {
        let specialist = self.organisations.legal_org_type_matches(
            self.file.ukprn(),
            legal_org_type::SPECIALIST_DESIGNATED_COLLEGE,
        );
        if !specialist {
            return;
        }
        for delivery in &learner.learning_deliveries {
            if delivery.fund_model == fund_model::COMMUNITY_LEARNING {
                raise_for_delivery(
                    context,
                    Self::NAME,
                    learner,
                    delivery,
                    self.build_error_message_parameters(context, delivery),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ilr_model::Organisation;
    use ilr_reference::{FileData, ReferenceDataSet};

    use super::*;
    use crate::rules::test_support::{date, learner_with, reference, run};

    fn rule_for(legal_org_type: &str) -> Ukprn21 {
        let data = reference(ReferenceDataSet {
            organisations: vec![Organisation {
                ukprn: 10000001,
                legal_org_type: legal_org_type.to_string(),
            }],
            ..ReferenceDataSet::default()
        });
        Ukprn21::new(data, Arc::new(FileData::new(10000001, date(2019, 1, 1))))
    }

    #[test]
    fn specialist_college_community_learning() {
        let community = learner_with(LearningDelivery::new(1, "60133533", 10, date(2018, 9, 1)));
        let errors = run(&rule_for("USDC"), &community);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].parameter("UKPRN").map(ToString::to_string),
            Some("10000001".to_string())
        );

        assert!(run(&rule_for("PLBG"), &community).is_empty());

        let adult = learner_with(LearningDelivery::new(1, "60133533", 35, date(2018, 9, 1)));
        assert!(run(&rule_for("USDC"), &adult).is_empty());
    }
}
