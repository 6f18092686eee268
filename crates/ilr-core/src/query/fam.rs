//! Learning delivery FAM queries.
//!
//! Every query accepts an empty collection and answers `false`/`None`;
//! missing monitoring data is never an error. Type and code comparisons are
//! case-insensitive.

use chrono::NaiveDate;
use ilr_model::LearningDeliveryFam;

use crate::interval::{EndBound, code_matches_any, interval_contains};
use crate::temporal::{TimeBounded, non_contiguous, select_applicable};

fn is_type(fam: &LearningDeliveryFam, fam_type: &str) -> bool {
    fam.learn_del_fam_type.trim().eq_ignore_ascii_case(fam_type)
}

fn is_code(fam: &LearningDeliveryFam, code: &str) -> bool {
    fam.learn_del_fam_code.trim().eq_ignore_ascii_case(code)
}

/// FAMs of `fam_type`, in input order.
pub fn fams_of_type<'a>(
    fams: &'a [LearningDeliveryFam],
    fam_type: &'a str,
) -> impl Iterator<Item = &'a LearningDeliveryFam> + 'a {
    fams.iter().filter(move |fam| is_type(fam, fam_type))
}

/// Does the delivery carry any FAM of `fam_type`?
pub fn has_fam_type(fams: &[LearningDeliveryFam], fam_type: &str) -> bool {
    fams.iter().any(|fam| is_type(fam, fam_type))
}

/// Does the delivery carry a `fam_type` FAM with `code`?
pub fn has_fam_code(fams: &[LearningDeliveryFam], fam_type: &str, code: &str) -> bool {
    fams.iter()
        .any(|fam| is_type(fam, fam_type) && is_code(fam, code))
}

/// Does the delivery carry a `fam_type` FAM with any of `codes`?
pub fn has_any_fam_codes(fams: &[LearningDeliveryFam], fam_type: &str, codes: &[&str]) -> bool {
    fams.iter()
        .any(|fam| is_type(fam, fam_type) && codes.iter().any(|code| is_code(fam, code)))
}

/// Matches combined `type + code` tokens such as `"LDM034"`.
pub fn has_any_monitoring(fams: &[LearningDeliveryFam], tokens: &[&str]) -> bool {
    fams.iter().any(|fam| {
        code_matches_any(&fam.learn_del_fam_type, &fam.learn_del_fam_code, tokens)
    })
}

/// Is any FAM of `fam_type` active on `date`? FAMs without a date-from
/// are undated and never active.
pub fn has_fam_type_active_on(
    fams: &[LearningDeliveryFam],
    fam_type: &str,
    date: NaiveDate,
    bound: EndBound,
) -> bool {
    fams_of_type(fams, fam_type).any(|fam| {
        fam.learn_del_fam_date_from.is_some_and(|from| {
            interval_contains(date, from, fam.learn_del_fam_date_to, bound)
        })
    })
}

/// A FAM viewed through its date window. Only FAMs with a date-from qualify.
#[derive(Debug, Clone, Copy)]
pub struct FamWindow<'a> {
    pub fam: &'a LearningDeliveryFam,
    from: NaiveDate,
}

impl TimeBounded for FamWindow<'_> {
    fn start(&self) -> NaiveDate {
        self.from
    }

    fn end(&self) -> Option<NaiveDate> {
        self.fam.learn_del_fam_date_to
    }

    fn tie_break_key(&self) -> &str {
        &self.fam.learn_del_fam_code
    }
}

/// Dated windows of `fam_type`, in input order.
pub fn dated_windows<'a>(fams: &'a [LearningDeliveryFam], fam_type: &str) -> Vec<FamWindow<'a>> {
    fams.iter()
        .filter(|fam| is_type(fam, fam_type))
        .filter_map(|fam| {
            fam.learn_del_fam_date_from
                .map(|from| FamWindow { fam, from })
        })
        .collect()
}

/// The `fam_type` FAM applicable on `date` (latest date-from wins).
pub fn fam_for_date<'a>(
    fams: &'a [LearningDeliveryFam],
    fam_type: &str,
    date: NaiveDate,
    bound: EndBound,
) -> Option<&'a LearningDeliveryFam> {
    let windows = dated_windows(fams, fam_type);
    select_applicable(&windows, date, bound).map(|window| window.fam)
}

/// FAMs of `fam_type` whose windows do not follow on from the previous one.
pub fn non_contiguous_fams<'a>(
    fams: &'a [LearningDeliveryFam],
    fam_type: &str,
) -> Vec<&'a LearningDeliveryFam> {
    let windows = dated_windows(fams, fam_type);
    non_contiguous(&windows)
        .into_iter()
        .map(|window| window.fam)
        .collect()
}
