use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::destination::LearnerDestinationAndProgression;
use crate::learner::Learner;
use crate::serde_utils::null_as_empty;

/// A complete return: file header, learners and their destination records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Message {
    pub header: Header,
    #[serde(rename = "Learner", default, deserialize_with = "null_as_empty")]
    pub learners: Vec<Learner>,
    #[serde(
        rename = "LearnerDestinationandProgression",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub learner_destination_and_progressions: Vec<LearnerDestinationAndProgression>,
}

impl Message {
    pub fn new(header: Header, learners: Vec<Learner>) -> Self {
        Self {
            header,
            learners,
            learner_destination_and_progressions: Vec::new(),
        }
    }

    /// Destination records for one learner (case-insensitive reference match).
    pub fn destinations_for<'a>(
        &'a self,
        learn_ref_number: &'a str,
    ) -> impl Iterator<Item = &'a LearnerDestinationAndProgression> + 'a {
        self.learner_destination_and_progressions
            .iter()
            .filter(move |dp| {
                dp.learn_ref_number
                    .trim()
                    .eq_ignore_ascii_case(learn_ref_number.trim())
            })
    }
}

/// File-level metadata. `file_preparation_date` stands in for "today".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Header {
    #[serde(rename = "UKPRN")]
    pub ukprn: i64,
    pub file_preparation_date: NaiveDate,
}
