//! Reference data collaborators.
//!
//! Traits describe what derived data and rules may ask of LARS, FCS, ONS
//! postcodes, the organisation registry and file metadata. [`ReferenceData`]
//! is the in-memory implementation a batch driver builds once per run.

pub mod data;
pub mod file;
pub mod index;
pub mod services;

pub use data::{ReferenceData, ReferenceDataSet};
pub use file::FileData;
pub use index::{KeyedIndex, normalize_key};
pub use services::{
    FcsDataService, FileDataService, LarsDataService, OrganisationDataService,
    PostcodesDataService,
};
