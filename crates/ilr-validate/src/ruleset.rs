//! The rules a run evaluates.

use std::sync::Arc;

use ilr_model::{Learner, Message};
use tracing::debug;

use crate::options::ValidationOptions;
use crate::rule::Rule;
use crate::rules::{
    AFinType10, AchDate05, ConRefNumber03, DateOfBirth51, DelLocPostCode16, EmpStat01, EsmType16,
    LearnActEndDate01, LearnActEndDate04, LearnAimRef88, LearnAimRef89, LearnDelFamDateFrom04,
    LearnDelFamDateTo02, LearnDelFamType39, LearnDelFamType60, LearnPlanEndDate02,
    LearnRefNumber04, OutStartDate03, R106, Ukprn21, WorkPlaceStartDate01,
};
use crate::services::ReferenceServices;

/// Flat lists of learner-level and message-level rules.
#[derive(Default)]
pub struct RuleSet {
    learner_rules: Vec<Box<dyn Rule<Learner>>>,
    message_rules: Vec<Box<dyn Rule<Message>>>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full catalog, minus rules disabled in `options`.
    pub fn standard(services: &ReferenceServices, options: &ValidationOptions) -> Self {
        let learner_rules: Vec<Box<dyn Rule<Learner>>> = vec![
            Box::new(LearnDelFamDateFrom04),
            Box::new(LearnDelFamType60),
            Box::new(LearnDelFamDateTo02),
            Box::new(LearnPlanEndDate02),
            Box::new(LearnActEndDate01),
            Box::new(LearnActEndDate04::new(Arc::clone(&services.file))),
            Box::new(AchDate05),
            Box::new(DateOfBirth51),
            Box::new(EmpStat01),
            Box::new(EsmType16),
            Box::new(LearnAimRef88::new(Arc::clone(&services.lars))),
            Box::new(LearnAimRef89::new(Arc::clone(&services.lars))),
            Box::new(LearnDelFamType39),
            Box::new(ConRefNumber03::new(
                Arc::clone(&services.fcs),
                Arc::clone(&services.file),
            )),
            Box::new(DelLocPostCode16::new(Arc::clone(&services.postcodes))),
            Box::new(Ukprn21::new(
                Arc::clone(&services.organisations),
                Arc::clone(&services.file),
            )),
            Box::new(AFinType10),
            Box::new(WorkPlaceStartDate01),
            Box::new(OutStartDate03::new(options.outcome_window_months)),
        ];
        let message_rules: Vec<Box<dyn Rule<Message>>> =
            vec![Box::new(LearnRefNumber04), Box::new(R106)];

        let mut rules = Self::new();
        for rule in learner_rules {
            rules.add_learner_rule(rule, options);
        }
        for rule in message_rules {
            rules.add_message_rule(rule, options);
        }
        rules
    }

    pub fn add_learner_rule(&mut self, rule: Box<dyn Rule<Learner>>, options: &ValidationOptions) {
        if options.is_rule_enabled(rule.rule_name()) {
            self.learner_rules.push(rule);
        } else {
            debug!(rule = rule.rule_name(), "rule disabled");
        }
    }

    pub fn add_message_rule(&mut self, rule: Box<dyn Rule<Message>>, options: &ValidationOptions) {
        if options.is_rule_enabled(rule.rule_name()) {
            self.message_rules.push(rule);
        } else {
            debug!(rule = rule.rule_name(), "rule disabled");
        }
    }

    pub fn learner_rules(&self) -> &[Box<dyn Rule<Learner>>] {
        &self.learner_rules
    }

    pub fn message_rules(&self) -> &[Box<dyn Rule<Message>>] {
        &self.message_rules
    }

    pub fn len(&self) -> usize {
        self.learner_rules.len() + self.message_rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.learner_rules
            .iter()
            .map(|rule| rule.rule_name())
            .chain(self.message_rules.iter().map(|rule| rule.rule_name()))
    }
}
