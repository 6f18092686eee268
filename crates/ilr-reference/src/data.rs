//! In-memory reference data implementing every collaborator contract.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use ilr_model::{
    FcsContractAllocation, IlrError, LarsAnnualValue, LarsLearningDelivery,
    LarsLearningDeliveryCategory, LarsValidity, OnsPostcode, Organisation,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::index::KeyedIndex;
use crate::services::{
    FcsDataService, LarsDataService, OrganisationDataService, PostcodesDataService,
};

/// Flat reference records as delivered by the reference data loader.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReferenceDataSet {
    pub lars_learning_deliveries: Vec<LarsLearningDelivery>,
    pub lars_validities: Vec<LarsValidity>,
    pub lars_categories: Vec<LarsLearningDeliveryCategory>,
    pub lars_annual_values: Vec<LarsAnnualValue>,
    pub fcs_contract_allocations: Vec<FcsContractAllocation>,
    pub ons_postcodes: Vec<OnsPostcode>,
    pub organisations: Vec<Organisation>,
}

/// Reference data indexed once for keyed lookups.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    lars_learning_deliveries: KeyedIndex<LarsLearningDelivery>,
    lars_validities: KeyedIndex<LarsValidity>,
    lars_categories: KeyedIndex<LarsLearningDeliveryCategory>,
    lars_annual_values: KeyedIndex<LarsAnnualValue>,
    fcs_contract_allocations: HashMap<i64, Vec<FcsContractAllocation>>,
    ons_postcodes: KeyedIndex<OnsPostcode>,
    organisations: HashMap<i64, Organisation>,
}

impl ReferenceData {
    pub fn new(set: ReferenceDataSet) -> Self {
        let mut fcs_contract_allocations: HashMap<i64, Vec<FcsContractAllocation>> =
            HashMap::new();
        for allocation in set.fcs_contract_allocations {
            fcs_contract_allocations
                .entry(allocation.ukprn)
                .or_default()
                .push(allocation);
        }

        let data = Self {
            lars_learning_deliveries: KeyedIndex::new(set.lars_learning_deliveries, |record| {
                record.learn_aim_ref.as_str()
            }),
            lars_validities: KeyedIndex::new(set.lars_validities, |record| record.learn_aim_ref.as_str()),
            lars_categories: KeyedIndex::new(set.lars_categories, |record| record.learn_aim_ref.as_str()),
            lars_annual_values: KeyedIndex::new(set.lars_annual_values, |record| {
                record.learn_aim_ref.as_str()
            }),
            fcs_contract_allocations,
            ons_postcodes: KeyedIndex::new(set.ons_postcodes, |record| record.postcode.as_str()),
            organisations: set
                .organisations
                .into_iter()
                .map(|organisation| (organisation.ukprn, organisation))
                .collect(),
        };

        debug!(
            lars_aims = data.lars_learning_deliveries.len(),
            providers_with_allocations = data.fcs_contract_allocations.len(),
            postcodes = data.ons_postcodes.len(),
            organisations = data.organisations.len(),
            "indexed reference data"
        );
        data
    }

    /// Deserialize a [`ReferenceDataSet`] from JSON and index it.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, IlrError> {
        let set: ReferenceDataSet = serde_json::from_reader(reader)?;
        Ok(Self::new(set))
    }

    /// Load reference data from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("open reference data {}", path.display()))?;
        Self::from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("parse reference data {}", path.display()))
    }
}

impl From<ReferenceDataSet> for ReferenceData {
    fn from(set: ReferenceDataSet) -> Self {
        Self::new(set)
    }
}

impl LarsDataService for ReferenceData {
    fn learning_delivery(&self, learn_aim_ref: &str) -> Option<&LarsLearningDelivery> {
        self.lars_learning_deliveries.get(learn_aim_ref).first()
    }

    fn validities(&self, learn_aim_ref: &str) -> &[LarsValidity] {
        self.lars_validities.get(learn_aim_ref)
    }

    fn categories(&self, learn_aim_ref: &str) -> &[LarsLearningDeliveryCategory] {
        self.lars_categories.get(learn_aim_ref)
    }

    fn annual_values(&self, learn_aim_ref: &str) -> &[LarsAnnualValue] {
        self.lars_annual_values.get(learn_aim_ref)
    }
}

impl FcsDataService for ReferenceData {
    fn contract_allocations(&self, ukprn: i64) -> &[FcsContractAllocation] {
        self.fcs_contract_allocations
            .get(&ukprn)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl PostcodesDataService for ReferenceData {
    fn ons_postcodes(&self, postcode: &str) -> &[OnsPostcode] {
        self.ons_postcodes.get(postcode)
    }
}

impl OrganisationDataService for ReferenceData {
    fn legal_org_type(&self, ukprn: i64) -> Option<&str> {
        self.organisations
            .get(&ukprn)
            .map(|organisation| organisation.legal_org_type.as_str())
    }
}
