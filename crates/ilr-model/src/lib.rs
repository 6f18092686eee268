pub mod codes;
pub mod conformance;
pub mod delivery;
pub mod destination;
pub mod error;
pub mod fields;
pub mod learner;
pub mod message;
pub mod reference;
mod serde_utils;

pub use conformance::{
    DATE_FORMAT, ErrorMessageParameter, ParameterValue, ValidationError, format_date,
};
pub use delivery::{AppFinRecord, LearningDelivery, LearningDeliveryFam, LearningDeliveryWorkPlacement};
pub use destination::{DpOutcome, LearnerDestinationAndProgression};
pub use error::{IlrError, Result};
pub use learner::{EmploymentStatusMonitoring, Learner, LearnerEmploymentStatus, LearnerFam};
pub use message::{Header, Message};
pub use reference::{
    FcsContractAllocation, LarsAnnualValue, LarsLearningDelivery, LarsLearningDeliveryCategory,
    LarsValidity, OnsPostcode, Organisation,
};
