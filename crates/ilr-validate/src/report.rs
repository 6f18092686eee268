//! Outcome of one validation run.

use std::collections::BTreeMap;

use ilr_model::ValidationError;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub learners_validated: usize,
    pub rules_evaluated: usize,
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn counts_by_rule(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for error in &self.errors {
            *counts.entry(error.rule_name.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Error counts per learner; message-level errors without a learner are
    /// not counted.
    pub fn counts_by_learner(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for error in &self.errors {
            if let Some(learn_ref_number) = error.learn_ref_number.as_deref() {
                *counts.entry(learn_ref_number).or_insert(0) += 1;
            }
        }
        counts
    }

    pub fn errors_for_rule<'a>(
        &'a self,
        rule_name: &'a str,
    ) -> impl Iterator<Item = &'a ValidationError> + 'a {
        self.errors
            .iter()
            .filter(move |error| error.rule_name == rule_name)
    }

    /// Plain text summary: a headline followed by one line per rule.
    pub fn summary_lines(&self) -> Vec<String> {
        let by_rule = self.counts_by_rule();
        let mut lines = vec![format!(
            "{} learners, {} rules, {} errors",
            self.learners_validated,
            self.rules_evaluated,
            self.error_count()
        )];
        let width = by_rule.keys().map(|name| name.len()).max().unwrap_or(0);
        for (rule_name, count) in by_rule {
            lines.push(format!("  {rule_name:<width$}  {count}"));
        }
        lines
    }
}
