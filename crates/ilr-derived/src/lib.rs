//! Derived data: predicates computed from a learner's raw fields and
//! reference data, shared by many rules.
//!
//! Pure predicates live in their own modules. [`DerivedData`] adds those
//! that need reference collaborators, and [`LearnerDerivedData`] memoizes
//! all of them for one learner's evaluation.

pub mod apprenticeship;
pub mod benefits;
pub mod cache;
pub mod category;
pub mod flags;
pub mod learner;
pub mod traineeship;

use std::fmt;
use std::sync::Arc;

use ilr_model::codes::basic_skills;
use ilr_model::{IlrError, Learner, LearningDelivery, Result};
use ilr_reference::LarsDataService;

pub use apprenticeship::is_apprenticeship;
pub use benefits::is_adult_funded_unemployed_with_other_state_benefits;
pub use cache::{CacheKey, DerivedDataCache};
pub use category::validity_category;
pub use flags::{is_learner_in_custody, is_restart};
pub use learner::LearnerDerivedData;
pub use traineeship::{
    is_inflexible_element_of_training_aim, is_traineeship, is_work_experience,
    learner_has_inflexible_element,
};

/// Derived predicates backed by reference data.
#[derive(Clone)]
pub struct DerivedData {
    lars: Arc<dyn LarsDataService>,
}

impl fmt::Debug for DerivedData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedData").finish_non_exhaustive()
    }
}

impl DerivedData {
    pub fn builder() -> DerivedDataBuilder {
        DerivedDataBuilder::default()
    }

    /// Is the aim an English or maths basic skills aim on its start date?
    pub fn is_basic_skills_learner(&self, delivery: &LearningDelivery) -> bool {
        self.lars
            .basic_skills_type_for(&delivery.learn_aim_ref, delivery.learn_start_date)
            .is_some_and(|skills_type| basic_skills::ENGLISH_AND_MATHS.contains(&skills_type))
    }

    /// Start a memoized view for one learner's evaluation.
    pub fn for_learner<'a>(&'a self, learner: &'a Learner) -> LearnerDerivedData<'a> {
        LearnerDerivedData::new(self, learner)
    }
}

/// Collects collaborators for [`DerivedData`]; `build` fails when one is
/// missing.
#[derive(Default)]
pub struct DerivedDataBuilder {
    lars: Option<Arc<dyn LarsDataService>>,
}

impl DerivedDataBuilder {
    pub fn with_lars(mut self, lars: Arc<dyn LarsDataService>) -> Self {
        self.lars = Some(lars);
        self
    }

    pub fn build(self) -> Result<DerivedData> {
        let lars = self
            .lars
            .ok_or(IlrError::MissingService("LARS data service"))?;
        Ok(DerivedData { lars })
    }
}
