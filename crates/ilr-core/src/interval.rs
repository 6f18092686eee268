//! Interval and code matchers.
//!
//! A `None` end date is an open-ended window and is treated as the unbounded
//! future. A window whose `from` is after its `to` matches nothing; callers
//! own the validation of their reference data.

use chrono::NaiveDate;

/// How the end date of a window is compared against a query date.
///
/// Rule families differ here, so every call site picks one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndBound {
    /// `date <= to`
    Inclusive,
    /// `date < to`
    Exclusive,
}

impl EndBound {
    pub fn from_inclusive(inclusive_end: bool) -> Self {
        if inclusive_end {
            EndBound::Inclusive
        } else {
            EndBound::Exclusive
        }
    }
}

/// True when `from <= to`, or the window is open-ended.
pub fn is_well_formed(from: NaiveDate, to: Option<NaiveDate>) -> bool {
    to.is_none_or(|to| from <= to)
}

/// Does `date` fall within `[from, to]` (or `[from, to)` for an exclusive end)?
///
/// A query equal to `from` always matches a well-formed window, so a
/// zero-length window matches its single day under either convention.
pub fn interval_contains(
    date: NaiveDate,
    from: NaiveDate,
    to: Option<NaiveDate>,
    bound: EndBound,
) -> bool {
    if !is_well_formed(from, to) || date < from {
        return false;
    }
    if date == from {
        return true;
    }
    match (to, bound) {
        (None, _) => true,
        (Some(to), EndBound::Inclusive) => date <= to,
        (Some(to), EndBound::Exclusive) => date < to,
    }
}

/// Do two inclusive-ended windows share at least one day?
pub fn intervals_overlap(
    a_from: NaiveDate,
    a_to: Option<NaiveDate>,
    b_from: NaiveDate,
    b_to: Option<NaiveDate>,
) -> bool {
    if !is_well_formed(a_from, a_to) || !is_well_formed(b_from, b_to) {
        return false;
    }
    a_to.is_none_or(|a_to| b_from <= a_to) && b_to.is_none_or(|b_to| a_from <= b_to)
}

/// Case-insensitive match of `type + code` against a combined catalog token
/// such as `"LDM034"`. Does not allocate.
pub fn code_matches(code_type: &str, code: &str, target: &str) -> bool {
    let code_type = code_type.trim();
    let code = code.trim();
    if target.len() != code_type.len() + code.len() {
        return false;
    }
    match (target.get(..code_type.len()), target.get(code_type.len()..)) {
        (Some(head), Some(tail)) => {
            head.eq_ignore_ascii_case(code_type) && tail.eq_ignore_ascii_case(code)
        }
        _ => false,
    }
}

/// True when `type + code` matches any of the combined tokens.
pub fn code_matches_any(code_type: &str, code: &str, targets: &[&str]) -> bool {
    targets
        .iter()
        .any(|target| code_matches(code_type, code, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn open_ended_window_contains_everything_from_start() {
        let from = date(2018, 1, 1);
        assert!(interval_contains(date(2018, 1, 1), from, None, EndBound::Inclusive));
        assert!(interval_contains(date(2099, 12, 31), from, None, EndBound::Exclusive));
        assert!(!interval_contains(date(2017, 12, 31), from, None, EndBound::Inclusive));
    }

    #[test]
    fn end_convention_is_respected() {
        let from = date(2018, 1, 1);
        let to = Some(date(2018, 6, 30));
        assert!(interval_contains(date(2018, 6, 30), from, to, EndBound::Inclusive));
        assert!(!interval_contains(date(2018, 6, 30), from, to, EndBound::Exclusive));
        assert!(interval_contains(date(2018, 6, 29), from, to, EndBound::Exclusive));
    }

    #[test]
    fn zero_length_window_matches_its_day() {
        let day = date(2019, 3, 1);
        assert!(interval_contains(day, day, Some(day), EndBound::Inclusive));
        assert!(interval_contains(day, day, Some(day), EndBound::Exclusive));
        assert!(!interval_contains(date(2019, 3, 2), day, Some(day), EndBound::Inclusive));
    }

    #[test]
    fn reversed_window_never_matches() {
        let from = date(2019, 3, 10);
        let to = Some(date(2019, 3, 1));
        assert!(!interval_contains(from, from, to, EndBound::Inclusive));
        assert!(!interval_contains(date(2019, 3, 5), from, to, EndBound::Inclusive));
        assert!(!intervals_overlap(from, to, date(2019, 1, 1), None));
    }

    #[test]
    fn overlap_is_inclusive_at_both_ends() {
        let a_from = date(2018, 1, 1);
        let a_to = Some(date(2018, 6, 30));
        assert!(intervals_overlap(a_from, a_to, date(2018, 6, 30), None));
        assert!(!intervals_overlap(a_from, a_to, date(2018, 7, 1), None));
        assert!(intervals_overlap(a_from, None, date(2030, 1, 1), Some(date(2030, 1, 1))));
        assert!(intervals_overlap(date(2019, 1, 1), None, date(2018, 1, 1), None));
    }

    #[test]
    fn code_match_is_case_insensitive() {
        assert!(code_matches("LDM", "034", "LDM034"));
        assert!(code_matches("ldm", "034", "LDM034"));
        assert!(code_matches("ACT", "1", "act1"));
        assert!(!code_matches("LDM", "034", "LDM0345"));
        assert!(!code_matches("LD", "M034", "LDM035"));
        assert!(!code_matches("SOF", "105", "LDM105"));
    }

    #[test]
    fn code_match_any() {
        assert!(code_matches_any("LDM", "328", &["LDM318", "LDM328"]));
        assert!(!code_matches_any("LDM", "329", &["LDM318", "LDM328"]));
        assert!(!code_matches_any("LDM", "318", &[]));
    }
}
