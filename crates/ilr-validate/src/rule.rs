//! Rule contract and the per-evaluation context handed to rules.

use ilr_derived::LearnerDerivedData;
use ilr_model::{DpOutcome, ErrorMessageParameter, ParameterValue};

use crate::handler::ValidationErrorHandler;

/// A single named compliance check over `T` (a learner or the whole message).
///
/// Rules are stateless apart from injected collaborators and are shared by
/// all learner tasks.
pub trait Rule<T>: Send + Sync {
    fn rule_name(&self) -> &'static str;

    fn validate(&self, item: &T, context: &RuleContext<'_>);
}

/// What a rule sees besides the record under evaluation.
pub struct RuleContext<'a> {
    handler: &'a dyn ValidationErrorHandler,
    derived: Option<&'a LearnerDerivedData<'a>>,
    outcomes: &'a [&'a DpOutcome],
}

impl<'a> RuleContext<'a> {
    pub fn for_message(handler: &'a dyn ValidationErrorHandler) -> Self {
        Self {
            handler,
            derived: None,
            outcomes: &[],
        }
    }

    pub fn for_learner(
        handler: &'a dyn ValidationErrorHandler,
        derived: &'a LearnerDerivedData<'a>,
        outcomes: &'a [&'a DpOutcome],
    ) -> Self {
        Self {
            handler,
            derived: Some(derived),
            outcomes,
        }
    }

    pub fn handler(&self) -> &'a dyn ValidationErrorHandler {
        self.handler
    }

    /// Memoized derived data for the learner; `None` for message rules.
    pub fn derived(&self) -> Option<&'a LearnerDerivedData<'a>> {
        self.derived
    }

    /// Destination and progression outcomes recorded for the learner.
    pub fn outcomes(&self) -> &'a [&'a DpOutcome] {
        self.outcomes
    }

    pub fn parameter(&self, name: &str, value: impl Into<ParameterValue>) -> ErrorMessageParameter {
        self.handler.build_error_message_parameter(name, value.into())
    }

    pub fn raise(
        &self,
        rule_name: &str,
        learn_ref_number: Option<&str>,
        aim_sequence_number: Option<i64>,
        parameters: Vec<ErrorMessageParameter>,
    ) {
        self.handler
            .handle(rule_name, learn_ref_number, aim_sequence_number, parameters);
    }
}
