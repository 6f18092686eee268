//! External reference records (LARS, FCS, ONS, organisations).
//!
//! These are owned by the reference collaborators and never mutated once
//! loaded. A `None` end date means the record is open-ended.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// LARS learning delivery header for an aim reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LarsLearningDelivery {
    pub learn_aim_ref: String,
    #[serde(default)]
    pub learn_aim_ref_title: String,
    #[serde(default)]
    pub learn_aim_ref_type: String,
    #[serde(default)]
    pub notional_nvq_level: Option<String>,
    pub effective_from: NaiveDate,
    #[serde(default)]
    pub effective_to: Option<NaiveDate>,
}

/// Window in which an aim may be started under a validity category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LarsValidity {
    pub learn_aim_ref: String,
    pub validity_category: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub last_new_start_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LarsLearningDeliveryCategory {
    pub learn_aim_ref: String,
    pub category_ref: i32,
    pub effective_from: NaiveDate,
    #[serde(default)]
    pub effective_to: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LarsAnnualValue {
    pub learn_aim_ref: String,
    #[serde(default)]
    pub basic_skills_type: Option<i32>,
    pub effective_from: NaiveDate,
    #[serde(default)]
    pub effective_to: Option<NaiveDate>,
}

/// FCS contract allocation for a provider and funding stream period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FcsContractAllocation {
    pub contract_allocation_number: String,
    pub funding_stream_period_code: String,
    #[serde(rename = "UKPRN")]
    pub ukprn: i64,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub stop_new_starts_from_date: Option<NaiveDate>,
}

/// ONS postcode record with its local authority window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OnsPostcode {
    pub postcode: String,
    #[serde(default)]
    pub local_authority: String,
    pub effective_from: NaiveDate,
    #[serde(default)]
    pub effective_to: Option<NaiveDate>,
    #[serde(default)]
    pub termination: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Organisation {
    #[serde(rename = "UKPRN")]
    pub ukprn: i64,
    pub legal_org_type: String,
}
