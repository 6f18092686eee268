//! Collaborators injected into rules.

use std::fmt;
use std::sync::Arc;

use ilr_model::{IlrError, Result};
use ilr_reference::{
    FcsDataService, FileData, FileDataService, LarsDataService, OrganisationDataService,
    PostcodesDataService, ReferenceData,
};

/// Reference collaborators for one run. Cloning shares the underlying data.
#[derive(Clone)]
pub struct ReferenceServices {
    pub lars: Arc<dyn LarsDataService>,
    pub fcs: Arc<dyn FcsDataService>,
    pub postcodes: Arc<dyn PostcodesDataService>,
    pub organisations: Arc<dyn OrganisationDataService>,
    pub file: Arc<dyn FileDataService>,
}

impl fmt::Debug for ReferenceServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceServices")
            .field("ukprn", &self.file.ukprn())
            .field("file_preparation_date", &self.file.file_preparation_date())
            .finish_non_exhaustive()
    }
}

impl ReferenceServices {
    pub fn builder() -> ReferenceServicesBuilder {
        ReferenceServicesBuilder::default()
    }

    /// Every reference contract served by one in-memory data set.
    pub fn from_reference_data(data: Arc<ReferenceData>, file: FileData) -> Self {
        let lars: Arc<dyn LarsDataService> = data.clone();
        let fcs: Arc<dyn FcsDataService> = data.clone();
        let postcodes: Arc<dyn PostcodesDataService> = data.clone();
        Self {
            lars,
            fcs,
            postcodes,
            organisations: data,
            file: Arc::new(file),
        }
    }
}

#[derive(Default)]
pub struct ReferenceServicesBuilder {
    lars: Option<Arc<dyn LarsDataService>>,
    fcs: Option<Arc<dyn FcsDataService>>,
    postcodes: Option<Arc<dyn PostcodesDataService>>,
    organisations: Option<Arc<dyn OrganisationDataService>>,
    file: Option<Arc<dyn FileDataService>>,
}

impl ReferenceServicesBuilder {
    pub fn with_lars(mut self, lars: Arc<dyn LarsDataService>) -> Self {
        self.lars = Some(lars);
        self
    }

    pub fn with_fcs(mut self, fcs: Arc<dyn FcsDataService>) -> Self {
        self.fcs = Some(fcs);
        self
    }

    pub fn with_postcodes(mut self, postcodes: Arc<dyn PostcodesDataService>) -> Self {
        self.postcodes = Some(postcodes);
        self
    }

    pub fn with_organisations(mut self, organisations: Arc<dyn OrganisationDataService>) -> Self {
        self.organisations = Some(organisations);
        self
    }

    pub fn with_file(mut self, file: Arc<dyn FileDataService>) -> Self {
        self.file = Some(file);
        self
    }

    /// Fails with [`IlrError::MissingService`] naming the first absent
    /// collaborator.
    pub fn build(self) -> Result<ReferenceServices> {
        Ok(ReferenceServices {
            lars: self.lars.ok_or(IlrError::MissingService("LARS data service"))?,
            fcs: self.fcs.ok_or(IlrError::MissingService("FCS data service"))?,
            postcodes: self
                .postcodes
                .ok_or(IlrError::MissingService("postcodes data service"))?,
            organisations: self
                .organisations
                .ok_or(IlrError::MissingService("organisation data service"))?,
            file: self.file.ok_or(IlrError::MissingService("file data service"))?,
        })
    }
}
