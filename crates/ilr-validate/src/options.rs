//! Run options for the validation engine.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use ilr_model::IlrError;
use serde::{Deserialize, Serialize};

/// Months after an actual end date within which a progression outcome
/// counts.
pub const DEFAULT_OUTCOME_WINDOW_MONTHS: u32 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default, deny_unknown_fields)]
pub struct ValidationOptions {
    /// Evaluate learners concurrently.
    pub parallel: bool,
    /// Worker thread count; `None` uses one per available core.
    pub worker_threads: Option<usize>,
    /// Rule names to skip, compared case-insensitively.
    pub disabled_rules: BTreeSet<String>,
    pub outcome_window_months: u32,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            worker_threads: None,
            disabled_rules: BTreeSet::new(),
            outcome_window_months: DEFAULT_OUTCOME_WINDOW_MONTHS,
        }
    }
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_worker_threads(mut self, worker_threads: usize) -> Self {
        self.worker_threads = Some(worker_threads);
        self
    }

    pub fn with_disabled_rule(mut self, rule_name: impl Into<String>) -> Self {
        self.disabled_rules.insert(rule_name.into());
        self
    }

    pub fn with_outcome_window_months(mut self, months: u32) -> Self {
        self.outcome_window_months = months;
        self
    }

    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        !self
            .disabled_rules
            .iter()
            .any(|disabled| disabled.trim().eq_ignore_ascii_case(rule_name))
    }

    /// Reject option combinations the engine cannot run with.
    pub fn check(&self) -> Result<(), IlrError> {
        if self.worker_threads == Some(0) {
            return Err(IlrError::InvalidConfiguration(
                "worker_threads must be at least 1".to_string(),
            ));
        }
        if self.outcome_window_months == 0 {
            return Err(IlrError::InvalidConfiguration(
                "outcome_window_months must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, IlrError> {
        let options: Self = serde_json::from_str(json)?;
        options.check()?;
        Ok(options)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read validation options {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("parse validation options {}", path.display()))
    }
}
