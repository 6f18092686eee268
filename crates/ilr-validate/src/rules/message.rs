//! Rules over the whole message rather than a single learner.

use std::collections::HashSet;

use ilr_model::fields;
use ilr_model::{ErrorMessageParameter, Message};

use crate::rule::{Rule, RuleContext};

fn normalized(learn_ref_number: &str) -> String {
    learn_ref_number.trim().to_ascii_uppercase()
}

/// Learner reference numbers must be unique within the message. Every
/// repeat after the first occurrence is reported.
#[derive(Debug, Default)]
pub struct LearnRefNumber04;

impl LearnRefNumber04 {
    pub const NAME: &'static str = "LearnRefNumber_04";

    pub fn build_error_message_parameters(
        context: &RuleContext<'_>,
        learn_ref_number: &str,
    ) -> Vec<ErrorMessageParameter> {
        vec![context.parameter(fields::LEARN_REF_NUMBER, learn_ref_number)]
    }
}

impl Rule<Message> for LearnRefNumber04 {
    fn rule_name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, message: &Message, context: &RuleContext<'_>) {
        let mut seen = HashSet::new();
        for learner in &message.learners {
            if !seen.insert(normalized(&learner.learn_ref_number)) {
                context.raise(
                    Self::NAME,
                    Some(&learner.learn_ref_number),
                    None,
                    Self::build_error_message_parameters(context, &learner.learn_ref_number),
                );
            }
        }
    }
}

/// Destination and progression records must belong to a learner in the
/// same message.
#[derive(Debug, Default)]
pub struct R106;

impl R106 {
    pub const NAME: &'static str = "R106";

    pub fn build_error_message_parameters(
        context: &RuleContext<'_>,
        learn_ref_number: &str,
    ) -> Vec<ErrorMessageParameter> {
        vec![context.parameter(fields::LEARN_REF_NUMBER, learn_ref_number)]
    }
}

impl Rule<Message> for R106 {
    fn rule_name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, message: &Message, context: &RuleContext<'_>) {
        let learners: HashSet<String> = message
            .learners
            .iter()
            .map(|learner| normalized(&learner.learn_ref_number))
            .collect();
        for record in &message.learner_destination_and_progressions {
            if !learners.contains(&normalized(&record.learn_ref_number)) {
                context.raise(
                    Self::NAME,
                    Some(&record.learn_ref_number),
                    None,
                    Self::build_error_message_parameters(context, &record.learn_ref_number),
                );
            }
        }
    }
}
