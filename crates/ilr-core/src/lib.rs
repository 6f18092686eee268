//! Evaluation primitives shared by the rule catalog.
//!
//! - [`interval`]: window containment, overlap and combined-code matching
//! - [`temporal`]: latest-start selection among time-bounded records
//! - [`query`]: FAM, employment, outcome and AppFin queries
//! - [`dates`]: age and month arithmetic, message date formatting

pub mod dates;
pub mod interval;
pub mod query;
pub mod temporal;

pub use interval::{EndBound, code_matches, code_matches_any, interval_contains, intervals_overlap};
pub use temporal::{TimeBounded, non_contiguous, select_applicable};
