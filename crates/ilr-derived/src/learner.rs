use ilr_model::{Learner, LearningDelivery};

use crate::cache::DerivedDataCache;
use crate::{DerivedData, apprenticeship, benefits, category, flags, traineeship};

/// Derived data for one learner, memoized for the length of its evaluation.
///
/// Delivery answers are cached by the delivery's position in
/// [`LearnerDerivedData::learner`]. A delivery from elsewhere is computed
/// afresh on every call.
#[derive(Debug)]
pub struct LearnerDerivedData<'a> {
    derived: &'a DerivedData,
    learner: &'a Learner,
    cache: DerivedDataCache,
}

impl<'a> LearnerDerivedData<'a> {
    pub(crate) fn new(derived: &'a DerivedData, learner: &'a Learner) -> Self {
        Self {
            derived,
            learner,
            cache: DerivedDataCache::new(learner.learn_ref_number.as_str()),
        }
    }

    pub fn learner(&self) -> &'a Learner {
        self.learner
    }

    pub fn cache(&self) -> &DerivedDataCache {
        &self.cache
    }

    /// Position of `delivery` in this learner's delivery list, by identity.
    fn delivery_index(&self, delivery: &LearningDelivery) -> Option<usize> {
        self.learner
            .learning_deliveries
            .iter()
            .position(|candidate| std::ptr::eq(candidate, delivery))
    }

    fn delivery_flag(
        &self,
        predicate: &'static str,
        delivery: &LearningDelivery,
        compute: impl FnOnce() -> bool,
    ) -> bool {
        match self.delivery_index(delivery) {
            Some(index) => self.cache.flag(predicate, Some(index), compute),
            None => compute(),
        }
    }

    /// Is the delivery on an apprenticeship programme?
    pub fn is_apprenticeship(&self, delivery: &LearningDelivery) -> bool {
        self.delivery_flag("is_apprenticeship", delivery, || {
            apprenticeship::is_apprenticeship(delivery)
        })
    }

    pub fn is_adult_funded_unemployed_with_other_state_benefits(
        &self,
        delivery: &LearningDelivery,
    ) -> bool {
        self.delivery_flag(
            "is_adult_funded_unemployed_with_other_state_benefits",
            delivery,
            || benefits::is_adult_funded_unemployed_with_other_state_benefits(delivery, self.learner),
        )
    }

    /// Is the delivery the work experience element of a traineeship?
    pub fn is_inflexible_element_of_training_aim(&self, delivery: &LearningDelivery) -> bool {
        self.delivery_flag("is_inflexible_element_of_training_aim", delivery, || {
            traineeship::is_inflexible_element_of_training_aim(delivery)
        })
    }

    /// Does any of the learner's deliveries carry an inflexible element?
    pub fn learner_has_inflexible_element(&self) -> bool {
        self.cache.flag("learner_has_inflexible_element", None, || {
            traineeship::learner_has_inflexible_element(self.learner)
        })
    }

    /// LARS validity category to check the delivery's aim against.
    pub fn validity_category(&self, delivery: &LearningDelivery) -> Option<&'static str> {
        let compute =
            || category::validity_category(delivery, &self.learner.learner_employment_statuses);
        match self.delivery_index(delivery) {
            Some(index) => self.cache.category("validity_category", Some(index), compute),
            None => compute(),
        }
    }

    pub fn is_basic_skills_learner(&self, delivery: &LearningDelivery) -> bool {
        self.delivery_flag("is_basic_skills_learner", delivery, || {
            self.derived.is_basic_skills_learner(delivery)
        })
    }

    pub fn is_restart(&self, delivery: &LearningDelivery) -> bool {
        self.delivery_flag("is_restart", delivery, || flags::is_restart(delivery))
    }

    pub fn is_learner_in_custody(&self, delivery: &LearningDelivery) -> bool {
        self.delivery_flag("is_learner_in_custody", delivery, || {
            flags::is_learner_in_custody(delivery)
        })
    }
}
