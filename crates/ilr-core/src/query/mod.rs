//! Typed convenience queries over a learner's collections.

pub mod app_fin;
pub mod employment;
pub mod fam;
pub mod outcome;

pub use app_fin::{has_app_fin_code, has_app_fin_record};
pub use employment::{employment_status_for_date, has_esm_code, is_not_employed};
pub use fam::{
    FamWindow, dated_windows, fam_for_date, fams_of_type, has_any_fam_codes, has_any_monitoring,
    has_fam_code, has_fam_type, has_fam_type_active_on, non_contiguous_fams,
};
pub use outcome::has_qualifying_outcome;
