//! Destination and progression outcome queries.

use chrono::NaiveDate;
use ilr_model::DpOutcome;

use crate::dates::add_months;

/// Does any outcome of one of `out_types` start strictly after `after` and
/// no later than `within_months` months after it?
pub fn has_qualifying_outcome<'a, I>(
    outcomes: I,
    out_types: &[&str],
    after: NaiveDate,
    within_months: u32,
) -> bool
where
    I: IntoIterator<Item = &'a DpOutcome>,
{
    let Some(latest) = add_months(after, within_months) else {
        return false;
    };
    outcomes.into_iter().any(|outcome| {
        out_types
            .iter()
            .any(|out_type| outcome.out_type.trim().eq_ignore_ascii_case(out_type))
            && outcome.out_start_date > after
            && outcome.out_start_date <= latest
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_day_outcome_does_not_qualify() {
        let end = date(2019, 3, 31);
        let outcomes = [DpOutcome::new("EMP", 1, end)];
        assert!(!has_qualifying_outcome(&outcomes, &["EMP"], end, 6));
    }

    #[test]
    fn next_day_through_window_end_qualifies() {
        let end = date(2019, 3, 31);
        let next_day = [DpOutcome::new("EMP", 1, date(2019, 4, 1))];
        assert!(has_qualifying_outcome(&next_day, &["EMP"], end, 6));

        let last_day = [DpOutcome::new("edu", 1, date(2019, 9, 30))];
        assert!(has_qualifying_outcome(&last_day, &["EDU"], end, 6));

        let too_late = [DpOutcome::new("EDU", 1, date(2019, 10, 1))];
        assert!(!has_qualifying_outcome(&too_late, &["EDU"], end, 6));
    }

    #[test]
    fn other_outcome_types_are_ignored() {
        let outcomes = [DpOutcome::new("GAP", 1, date(2019, 4, 1))];
        assert!(!has_qualifying_outcome(&outcomes, &["EMP", "EDU"], date(2019, 3, 31), 6));
    }
}
