//! Rule evaluation for ILR returns.
//!
//! A [`ValidationEngine`] evaluates every learner in a [`Message`] against a
//! [`RuleSet`], each learner with its own memoized derived data, then runs
//! the message-level rules. Violations go to a [`ValidationErrorHandler`];
//! the engine's own collector produces a [`ValidationReport`].
//!
//! [`Message`]: ilr_model::Message

pub mod engine;
pub mod handler;
pub mod logging;
pub mod options;
pub mod report;
pub mod rule;
pub mod rules;
pub mod ruleset;
pub mod services;

pub use engine::ValidationEngine;
pub use handler::{ValidationErrorCollector, ValidationErrorHandler};
pub use options::ValidationOptions;
pub use report::ValidationReport;
pub use rule::{Rule, RuleContext};
pub use ruleset::RuleSet;
pub use services::{ReferenceServices, ReferenceServicesBuilder};
