//! Selection among time-bounded candidate records.
//!
//! When several windows contain the same date, the one with the latest start
//! wins. Equal starts are broken by the greatest `tie_break_key`, then by
//! input order (first encountered).

use chrono::{Days, NaiveDate};
use ilr_model::{
    FcsContractAllocation, LarsAnnualValue, LarsLearningDelivery, LarsLearningDeliveryCategory,
    LarsValidity, LearnerEmploymentStatus, OnsPostcode,
};

use crate::interval::{EndBound, interval_contains};

/// A record with an effective window.
pub trait TimeBounded {
    fn start(&self) -> NaiveDate;

    /// `None` means open-ended.
    fn end(&self) -> Option<NaiveDate>;

    /// Secondary ordering for candidates sharing a start date.
    fn tie_break_key(&self) -> &str {
        ""
    }

    fn applies_on(&self, date: NaiveDate, bound: EndBound) -> bool {
        interval_contains(date, self.start(), self.end(), bound)
    }
}

fn supersedes<T: TimeBounded + ?Sized>(candidate: &T, current: &T) -> bool {
    (candidate.start(), candidate.tie_break_key()) > (current.start(), current.tie_break_key())
}

/// Select the applicable candidate for `as_of`.
///
/// Returns `None` when the collection is empty or no window contains the date.
pub fn select_applicable<'a, T, I>(candidates: I, as_of: NaiveDate, bound: EndBound) -> Option<&'a T>
where
    T: TimeBounded + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut selected: Option<&'a T> = None;
    for candidate in candidates {
        if !candidate.applies_on(as_of, bound) {
            continue;
        }
        selected = match selected {
            Some(current) if !supersedes(candidate, current) => Some(current),
            _ => Some(candidate),
        };
    }
    selected
}

/// Windows that break a contiguous run.
///
/// Windows are ordered by start (stable). Each window after the first must
/// start exactly one day after the previous window ends; a gap, an overlap or
/// a window following an open-ended one is reported. The later window of each
/// offending pair is returned.
pub fn non_contiguous<'a, T, I>(windows: I) -> Vec<&'a T>
where
    T: TimeBounded + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut ordered: Vec<&'a T> = windows.into_iter().collect();
    ordered.sort_by_key(|window| window.start());

    ordered
        .windows(2)
        .filter(|pair| !follows_on(pair[0], pair[1]))
        .map(|pair| pair[1])
        .collect()
}

/// True when `next` starts the day after `previous` ends.
pub fn follows_on<T: TimeBounded + ?Sized>(previous: &T, next: &T) -> bool {
    previous
        .end()
        .and_then(|end| end.checked_add_days(Days::new(1)))
        .is_some_and(|expected| next.start() == expected)
}

impl TimeBounded for LarsLearningDelivery {
    fn start(&self) -> NaiveDate {
        self.effective_from
    }

    fn end(&self) -> Option<NaiveDate> {
        self.effective_to
    }

    fn tie_break_key(&self) -> &str {
        &self.learn_aim_ref
    }
}

/// A start after the last new start date is out of window even when the
/// validity itself has not ended.
impl TimeBounded for LarsValidity {
    fn start(&self) -> NaiveDate {
        self.start_date
    }

    fn end(&self) -> Option<NaiveDate> {
        self.last_new_start_date.or(self.end_date)
    }

    fn tie_break_key(&self) -> &str {
        &self.validity_category
    }
}

impl TimeBounded for LarsLearningDeliveryCategory {
    fn start(&self) -> NaiveDate {
        self.effective_from
    }

    fn end(&self) -> Option<NaiveDate> {
        self.effective_to
    }
}

impl TimeBounded for LarsAnnualValue {
    fn start(&self) -> NaiveDate {
        self.effective_from
    }

    fn end(&self) -> Option<NaiveDate> {
        self.effective_to
    }
}

/// The window closes at the stop-new-starts date; callers compare it with
/// [`EndBound::Exclusive`].
impl TimeBounded for FcsContractAllocation {
    fn start(&self) -> NaiveDate {
        self.start_date
    }

    fn end(&self) -> Option<NaiveDate> {
        self.stop_new_starts_from_date
    }

    fn tie_break_key(&self) -> &str {
        &self.contract_allocation_number
    }
}

impl TimeBounded for OnsPostcode {
    fn start(&self) -> NaiveDate {
        self.effective_from
    }

    fn end(&self) -> Option<NaiveDate> {
        self.effective_to
    }

    fn tie_break_key(&self) -> &str {
        &self.local_authority
    }
}

/// An employment status applies from its application date until superseded,
/// so selecting with an open end yields the latest status on or before a date.
impl TimeBounded for LearnerEmploymentStatus {
    fn start(&self) -> NaiveDate {
        self.date_emp_stat_app
    }

    fn end(&self) -> Option<NaiveDate> {
        None
    }
}
