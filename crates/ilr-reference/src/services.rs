//! Collaborator contracts consumed by derived data and rules.
//!
//! All lookups are in-memory and read-only; an unknown key yields an empty
//! slice or `None`, never an error.

use chrono::NaiveDate;
use ilr_core::{EndBound, TimeBounded, select_applicable};
use ilr_model::{
    FcsContractAllocation, LarsAnnualValue, LarsLearningDelivery, LarsLearningDeliveryCategory,
    LarsValidity, OnsPostcode,
};

pub trait LarsDataService: Send + Sync {
    fn learning_delivery(&self, learn_aim_ref: &str) -> Option<&LarsLearningDelivery>;

    fn validities(&self, learn_aim_ref: &str) -> &[LarsValidity];

    fn categories(&self, learn_aim_ref: &str) -> &[LarsLearningDeliveryCategory];

    fn annual_values(&self, learn_aim_ref: &str) -> &[LarsAnnualValue];

    /// Validity of `category` applicable on `date` (inclusive end).
    fn validity_for(
        &self,
        learn_aim_ref: &str,
        category: &str,
        date: NaiveDate,
    ) -> Option<&LarsValidity> {
        let candidates = self
            .validities(learn_aim_ref)
            .iter()
            .filter(|validity| validity.validity_category.trim().eq_ignore_ascii_case(category));
        select_applicable(candidates, date, EndBound::Inclusive)
    }

    /// Is the aim in `category_ref` on `date` (inclusive end)?
    fn has_category_on(&self, learn_aim_ref: &str, category_ref: i32, date: NaiveDate) -> bool {
        self.categories(learn_aim_ref).iter().any(|category| {
            category.category_ref == category_ref && category.applies_on(date, EndBound::Inclusive)
        })
    }

    /// Basic skills type from the annual value applicable on `date`. An
    /// applicable value without a type yields `None` even when an older one
    /// has a type.
    fn basic_skills_type_for(&self, learn_aim_ref: &str, date: NaiveDate) -> Option<i32> {
        select_applicable(self.annual_values(learn_aim_ref), date, EndBound::Inclusive)
            .and_then(|value| value.basic_skills_type)
    }
}

pub trait FcsDataService: Send + Sync {
    fn contract_allocations(&self, ukprn: i64) -> &[FcsContractAllocation];

    /// Allocation matching the contract reference and funding stream period
    /// that is taking new starts on `date`. A start on the stop-new-starts
    /// date is refused.
    fn contract_allocation_for(
        &self,
        ukprn: i64,
        con_ref_number: &str,
        funding_stream_period_code: &str,
        date: NaiveDate,
    ) -> Option<&FcsContractAllocation> {
        let candidates = self.contract_allocations(ukprn).iter().filter(|allocation| {
            allocation
                .contract_allocation_number
                .trim()
                .eq_ignore_ascii_case(con_ref_number.trim())
                && allocation
                    .funding_stream_period_code
                    .trim()
                    .eq_ignore_ascii_case(funding_stream_period_code)
        });
        select_applicable(candidates, date, EndBound::Exclusive)
    }
}

pub trait PostcodesDataService: Send + Sync {
    fn ons_postcodes(&self, postcode: &str) -> &[OnsPostcode];

    fn is_valid_postcode(&self, postcode: &str) -> bool {
        !self.ons_postcodes(postcode).is_empty()
    }

    /// Record current on `date`: effective window inclusive, termination
    /// date exclusive.
    fn ons_postcode_for(&self, postcode: &str, date: NaiveDate) -> Option<&OnsPostcode> {
        let candidates = self
            .ons_postcodes(postcode)
            .iter()
            .filter(|record| record.termination.is_none_or(|terminated| date < terminated));
        select_applicable(candidates, date, EndBound::Inclusive)
    }

    fn is_current_on(&self, postcode: &str, date: NaiveDate) -> bool {
        self.ons_postcode_for(postcode, date).is_some()
    }
}

pub trait OrganisationDataService: Send + Sync {
    fn legal_org_type(&self, ukprn: i64) -> Option<&str>;

    fn legal_org_type_matches(&self, ukprn: i64, legal_org_type: &str) -> bool {
        self.legal_org_type(ukprn)
            .is_some_and(|found| found.trim().eq_ignore_ascii_case(legal_org_type))
    }
}

/// File-level metadata. The preparation date is the run's notion of "now".
pub trait FileDataService: Send + Sync {
    fn ukprn(&self) -> i64;

    fn file_preparation_date(&self) -> NaiveDate;
}
