//! Error sink shared by every rule.

use std::sync::{Mutex, PoisonError};

use ilr_model::{ErrorMessageParameter, ParameterValue, ValidationError};
use tracing::debug;

use crate::logging::redact_value;

/// Receives violations raised by rules. Implementations must tolerate
/// concurrent calls from learner tasks.
pub trait ValidationErrorHandler: Send + Sync {
    fn handle(
        &self,
        rule_name: &str,
        learn_ref_number: Option<&str>,
        aim_sequence_number: Option<i64>,
        parameters: Vec<ErrorMessageParameter>,
    );

    fn build_error_message_parameter(
        &self,
        name: &str,
        value: ParameterValue,
    ) -> ErrorMessageParameter {
        ErrorMessageParameter::new(name, value)
    }
}

/// Collects violations in memory.
#[derive(Debug, Default)]
pub struct ValidationErrorCollector {
    errors: Mutex<Vec<ValidationError>>,
}

impl ValidationErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Errors in the order they were raised.
    pub fn into_raised(self) -> Vec<ValidationError> {
        self.errors
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Errors ordered by learner, aim sequence number and rule name.
    pub fn into_errors(self) -> Vec<ValidationError> {
        let mut errors = self.into_raised();
        errors.sort_by(|a, b| {
            a.learn_ref_number
                .cmp(&b.learn_ref_number)
                .then(a.aim_sequence_number.cmp(&b.aim_sequence_number))
                .then_with(|| a.rule_name.cmp(&b.rule_name))
        });
        errors
    }
}

impl ValidationErrorHandler for ValidationErrorCollector {
    fn handle(
        &self,
        rule_name: &str,
        learn_ref_number: Option<&str>,
        aim_sequence_number: Option<i64>,
        parameters: Vec<ErrorMessageParameter>,
    ) {
        debug!(
            rule = rule_name,
            learn_ref = learn_ref_number.map(redact_value),
            aim_seq = aim_sequence_number,
            "rule raised error"
        );
        let error = ValidationError {
            rule_name: rule_name.to_string(),
            learn_ref_number: learn_ref_number.map(str::to_string),
            aim_sequence_number,
            parameters,
        };
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_for_presentation() {
        let collector = ValidationErrorCollector::new();
        collector.handle("R2", Some("B"), Some(1), Vec::new());
        collector.handle("R1", Some("A"), Some(2), Vec::new());
        collector.handle("R3", Some("A"), Some(1), Vec::new());
        collector.handle("R1", Some("A"), Some(1), Vec::new());
        assert_eq!(collector.len(), 4);

        let order: Vec<_> = collector
            .into_errors()
            .into_iter()
            .map(|error| (error.learn_ref_number.unwrap_or_default(), error.rule_name))
            .collect();
        assert_eq!(
            order,
            vec![
                ("A".to_string(), "R1".to_string()),
                ("A".to_string(), "R3".to_string()),
                ("A".to_string(), "R1".to_string()),
                ("B".to_string(), "R2".to_string()),
            ]
        );
    }

    #[test]
    fn builds_parameters() {
        let collector = ValidationErrorCollector::new();
        let parameter = collector.build_error_message_parameter("FundModel", 35_i32.into());
        assert_eq!(parameter.name, "FundModel");
        assert_eq!(parameter.value.to_string(), "35");
    }
}
