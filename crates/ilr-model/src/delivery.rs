//! Learning delivery records and their sub-records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::serde_utils::null_as_empty;

/// A single funded learning aim within a learner's record.
///
/// `aim_seq_number` is unique per learner, not globally, and is the
/// sub-record key reported with violations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LearningDelivery {
    pub learn_aim_ref: String,
    pub aim_type: i32,
    pub aim_seq_number: i64,
    pub learn_start_date: NaiveDate,
    #[serde(default)]
    pub learn_plan_end_date: Option<NaiveDate>,
    pub fund_model: i32,
    #[serde(default)]
    pub prog_type: Option<i32>,
    #[serde(default)]
    pub fwork_code: Option<i32>,
    #[serde(default)]
    pub pway_code: Option<i32>,
    #[serde(default)]
    pub std_code: Option<i32>,
    #[serde(default)]
    pub del_loc_post_code: Option<String>,
    #[serde(default)]
    pub con_ref_number: Option<String>,
    pub comp_status: i32,
    #[serde(default)]
    pub learn_act_end_date: Option<NaiveDate>,
    #[serde(default)]
    pub outcome: Option<i32>,
    #[serde(default)]
    pub ach_date: Option<NaiveDate>,
    #[serde(
        rename = "LearningDeliveryFAM",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub learning_delivery_fams: Vec<LearningDeliveryFam>,
    #[serde(
        rename = "LearningDeliveryWorkPlacement",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub learning_delivery_work_placements: Vec<LearningDeliveryWorkPlacement>,
    #[serde(rename = "AppFinRecord", default, deserialize_with = "null_as_empty")]
    pub app_fin_records: Vec<AppFinRecord>,
}

impl LearningDelivery {
    /// Minimal delivery with every optional attribute left empty.
    pub fn new(
        aim_seq_number: i64,
        learn_aim_ref: impl Into<String>,
        fund_model: i32,
        learn_start_date: NaiveDate,
    ) -> Self {
        Self {
            learn_aim_ref: learn_aim_ref.into(),
            aim_type: 0,
            aim_seq_number,
            learn_start_date,
            learn_plan_end_date: None,
            fund_model,
            prog_type: None,
            fwork_code: None,
            pway_code: None,
            std_code: None,
            del_loc_post_code: None,
            con_ref_number: None,
            comp_status: 0,
            learn_act_end_date: None,
            outcome: None,
            ach_date: None,
            learning_delivery_fams: Vec::new(),
            learning_delivery_work_placements: Vec::new(),
            app_fin_records: Vec::new(),
        }
    }
}

/// Funding/monitoring attribute on a delivery, optionally time-bounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningDeliveryFam {
    #[serde(rename = "LearnDelFAMType")]
    pub learn_del_fam_type: String,
    #[serde(rename = "LearnDelFAMCode")]
    pub learn_del_fam_code: String,
    #[serde(rename = "LearnDelFAMDateFrom", default)]
    pub learn_del_fam_date_from: Option<NaiveDate>,
    #[serde(rename = "LearnDelFAMDateTo", default)]
    pub learn_del_fam_date_to: Option<NaiveDate>,
}

impl LearningDeliveryFam {
    pub fn new(fam_type: impl Into<String>, fam_code: impl Into<String>) -> Self {
        Self {
            learn_del_fam_type: fam_type.into(),
            learn_del_fam_code: fam_code.into(),
            learn_del_fam_date_from: None,
            learn_del_fam_date_to: None,
        }
    }

    /// Attach an effective window.
    #[must_use]
    pub fn with_dates(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.learn_del_fam_date_from = from;
        self.learn_del_fam_date_to = to;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LearningDeliveryWorkPlacement {
    pub work_place_start_date: NaiveDate,
    #[serde(default)]
    pub work_place_end_date: Option<NaiveDate>,
    pub work_place_mode: i32,
    #[serde(default)]
    pub work_place_emp_id: Option<i64>,
}

/// Apprenticeship financial record (TNP/PMR).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppFinRecord {
    #[serde(rename = "AFinType")]
    pub afin_type: String,
    #[serde(rename = "AFinCode")]
    pub afin_code: i32,
    #[serde(rename = "AFinDate")]
    pub afin_date: NaiveDate,
    #[serde(rename = "AFinAmount")]
    pub afin_amount: i64,
}
