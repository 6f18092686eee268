//! Learner records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::delivery::LearningDelivery;
use crate::serde_utils::null_as_empty;

/// One learner in a return. `learn_ref_number` is unique within a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Learner {
    pub learn_ref_number: String,
    #[serde(rename = "ULN")]
    pub uln: i64,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub prior_attain: Option<i32>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(rename = "LearnerFAM", default, deserialize_with = "null_as_empty")]
    pub learner_fams: Vec<LearnerFam>,
    #[serde(
        rename = "LearnerEmploymentStatus",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub learner_employment_statuses: Vec<LearnerEmploymentStatus>,
    #[serde(
        rename = "LearningDelivery",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub learning_deliveries: Vec<LearningDelivery>,
}

impl Learner {
    pub fn new(learn_ref_number: impl Into<String>) -> Self {
        Self {
            learn_ref_number: learn_ref_number.into(),
            uln: 9_999_999_999,
            date_of_birth: None,
            prior_attain: None,
            postcode: None,
            learner_fams: Vec::new(),
            learner_employment_statuses: Vec::new(),
            learning_deliveries: Vec::new(),
        }
    }

    /// Find a delivery by its aim sequence number.
    pub fn delivery(&self, aim_seq_number: i64) -> Option<&LearningDelivery> {
        self.learning_deliveries
            .iter()
            .find(|delivery| delivery.aim_seq_number == aim_seq_number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerFam {
    #[serde(rename = "LearnFAMType")]
    pub learn_fam_type: String,
    #[serde(rename = "LearnFAMCode")]
    pub learn_fam_code: i32,
}

/// Employment status that applies from `date_emp_stat_app` until superseded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LearnerEmploymentStatus {
    pub emp_stat: i32,
    pub date_emp_stat_app: NaiveDate,
    #[serde(default)]
    pub emp_id: Option<i64>,
    #[serde(
        rename = "EmploymentStatusMonitoring",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub employment_status_monitorings: Vec<EmploymentStatusMonitoring>,
}

impl LearnerEmploymentStatus {
    pub fn new(emp_stat: i32, date_emp_stat_app: NaiveDate) -> Self {
        Self {
            emp_stat,
            date_emp_stat_app,
            emp_id: None,
            employment_status_monitorings: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_monitoring(mut self, esm_type: impl Into<String>, esm_code: i32) -> Self {
        self.employment_status_monitorings
            .push(EmploymentStatusMonitoring {
                esm_type: esm_type.into(),
                esm_code,
            });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentStatusMonitoring {
    #[serde(rename = "ESMType")]
    pub esm_type: String,
    #[serde(rename = "ESMCode")]
    pub esm_code: i32,
}
