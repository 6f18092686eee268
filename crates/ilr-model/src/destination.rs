//! Destination and progression records, keyed by learner reference number.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::serde_utils::null_as_empty;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LearnerDestinationAndProgression {
    pub learn_ref_number: String,
    #[serde(rename = "ULN")]
    pub uln: i64,
    #[serde(rename = "DPOutcome", default, deserialize_with = "null_as_empty")]
    pub dp_outcomes: Vec<DpOutcome>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DpOutcome {
    pub out_type: String,
    pub out_code: i32,
    pub out_start_date: NaiveDate,
    #[serde(default)]
    pub out_end_date: Option<NaiveDate>,
    pub out_collection_date: NaiveDate,
}

impl DpOutcome {
    pub fn new(out_type: impl Into<String>, out_code: i32, out_start_date: NaiveDate) -> Self {
        Self {
            out_type: out_type.into(),
            out_code,
            out_start_date,
            out_end_date: None,
            out_collection_date: out_start_date,
        }
    }
}
