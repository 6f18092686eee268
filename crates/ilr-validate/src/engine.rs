//! Validation engine: runs the rule set over every learner, then over the
//! message.

use std::sync::Arc;
use std::time::Instant;

use ilr_derived::DerivedData;
use ilr_model::{DpOutcome, IlrError, Learner, Message, Result, ValidationError};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{info, info_span, trace};

use crate::handler::{ValidationErrorCollector, ValidationErrorHandler};
use crate::logging::redact_value;
use crate::options::ValidationOptions;
use crate::report::ValidationReport;
use crate::rule::RuleContext;
use crate::ruleset::RuleSet;
use crate::services::ReferenceServices;

pub struct ValidationEngine {
    rules: RuleSet,
    derived: DerivedData,
    options: ValidationOptions,
    pool: Option<ThreadPool>,
}

impl ValidationEngine {
    /// Engine with the standard rule catalog.
    pub fn new(services: &ReferenceServices, options: ValidationOptions) -> Result<Self> {
        let derived = DerivedData::builder()
            .with_lars(Arc::clone(&services.lars))
            .build()?;
        let rules = RuleSet::standard(services, &options);
        Self::with_rules(rules, derived, options)
    }

    pub fn with_rules(
        rules: RuleSet,
        derived: DerivedData,
        options: ValidationOptions,
    ) -> Result<Self> {
        options.check()?;
        let pool = match (options.parallel, options.worker_threads) {
            (true, Some(threads)) => Some(
                ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|index| format!("ilr-validate-{index}"))
                    .build()
                    .map_err(|err| IlrError::InvalidConfiguration(err.to_string()))?,
            ),
            _ => None,
        };
        Ok(Self {
            rules,
            derived,
            options,
            pool,
        })
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Validate a message. The report lists learner errors in learner order
    /// followed by message-level errors, whatever the thread count.
    pub fn validate(&self, message: &Message) -> ValidationReport {
        let started = Instant::now();
        info!(
            learners = message.learners.len(),
            rules = self.rules.len(),
            parallel = self.options.parallel,
            "validation started"
        );

        let per_learner: Vec<Vec<ValidationError>> = if self.options.parallel {
            let run = || {
                message
                    .learners
                    .par_iter()
                    .map(|learner| self.collect_learner(message, learner))
                    .collect::<Vec<_>>()
            };
            match &self.pool {
                Some(pool) => pool.install(run),
                None => run(),
            }
        } else {
            message
                .learners
                .iter()
                .map(|learner| self.collect_learner(message, learner))
                .collect()
        };

        let message_errors = ValidationErrorCollector::new();
        self.validate_message(message, &message_errors);

        let mut errors: Vec<ValidationError> = per_learner.into_iter().flatten().collect();
        errors.extend(message_errors.into_raised());

        let report = ValidationReport {
            learners_validated: message.learners.len(),
            rules_evaluated: self.rules.len(),
            errors,
        };
        info!(
            errors = report.error_count(),
            elapsed_ms = started.elapsed().as_millis(),
            "validation finished"
        );
        report
    }

    /// Validate into a caller-supplied sink. Learners are evaluated
    /// concurrently when enabled, so arrival order at the handler is not
    /// fixed.
    pub fn validate_with_handler(&self, message: &Message, handler: &dyn ValidationErrorHandler) {
        if self.options.parallel {
            let run = || {
                message
                    .learners
                    .par_iter()
                    .for_each(|learner| self.validate_learner(message, learner, handler));
            };
            match &self.pool {
                Some(pool) => pool.install(run),
                None => run(),
            }
        } else {
            for learner in &message.learners {
                self.validate_learner(message, learner, handler);
            }
        }
        self.validate_message(message, handler);
    }

    fn collect_learner(&self, message: &Message, learner: &Learner) -> Vec<ValidationError> {
        let collector = ValidationErrorCollector::new();
        self.validate_learner(message, learner, &collector);
        collector.into_raised()
    }

    fn validate_learner(
        &self,
        message: &Message,
        learner: &Learner,
        handler: &dyn ValidationErrorHandler,
    ) {
        let span = info_span!("learner", learn_ref = redact_value(&learner.learn_ref_number));
        let _guard = span.enter();

        let derived = self.derived.for_learner(learner);
        let outcomes: Vec<&DpOutcome> = message
            .destinations_for(&learner.learn_ref_number)
            .flat_map(|record| record.dp_outcomes.iter())
            .collect();
        let context = RuleContext::for_learner(handler, &derived, &outcomes);

        for rule in self.rules.learner_rules() {
            rule.validate(learner, &context);
        }
        trace!(
            memoized = derived.cache().len(),
            hits = derived.cache().hits(),
            "derived data cache"
        );
    }

    fn validate_message(&self, message: &Message, handler: &dyn ValidationErrorHandler) {
        let context = RuleContext::for_message(handler);
        for rule in self.rules.message_rules() {
            rule.validate(message, &context);
        }
    }
}
