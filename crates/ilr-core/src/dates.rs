//! Date arithmetic used by rules.

use chrono::{Datelike, Months, NaiveDate};

pub use ilr_model::{DATE_FORMAT, format_date};

/// Whole years between `from` and `to`, counting a year only once its
/// anniversary has been reached. Negative when `to` precedes `from`.
pub fn years_between(from: NaiveDate, to: NaiveDate) -> i32 {
    if to < from {
        return -years_between(to, from);
    }
    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    years
}

/// Age in whole years on `date`.
pub fn age_at(date_of_birth: NaiveDate, date: NaiveDate) -> i32 {
    years_between(date_of_birth, date)
}

/// Add calendar months, clamping to the end of shorter months.
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}
