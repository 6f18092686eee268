//! Employment status queries.

use chrono::NaiveDate;
use ilr_model::LearnerEmploymentStatus;
use ilr_model::codes::emp_stat;

use crate::interval::EndBound;
use crate::temporal::select_applicable;

/// The status with the latest application date on or before `date`.
pub fn employment_status_for_date(
    statuses: &[LearnerEmploymentStatus],
    date: NaiveDate,
) -> Option<&LearnerEmploymentStatus> {
    select_applicable(statuses, date, EndBound::Inclusive)
}

/// Does the status carry a monitoring record of `esm_type` with one of `codes`?
pub fn has_esm_code(status: &LearnerEmploymentStatus, esm_type: &str, codes: &[i32]) -> bool {
    status.employment_status_monitorings.iter().any(|monitoring| {
        monitoring.esm_type.trim().eq_ignore_ascii_case(esm_type)
            && codes.contains(&monitoring.esm_code)
    })
}

/// Is the status one of the not-employed codes (11 or 12)?
pub fn is_not_employed(status: &LearnerEmploymentStatus) -> bool {
    emp_stat::NOT_EMPLOYED.contains(&status.emp_stat)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn no_status_before_first_application_date() {
        let statuses = vec![LearnerEmploymentStatus::new(10, date(2018, 9, 1))];
        assert!(employment_status_for_date(&statuses, date(2018, 8, 31)).is_none());
        assert!(employment_status_for_date(&[], date(2018, 8, 31)).is_none());
    }

    #[test]
    fn latest_on_or_before_wins_regardless_of_order() {
        let statuses = vec![
            LearnerEmploymentStatus::new(11, date(2018, 6, 1)),
            LearnerEmploymentStatus::new(10, date(2017, 6, 1)),
            LearnerEmploymentStatus::new(12, date(2019, 6, 1)),
        ];
        let status = employment_status_for_date(&statuses, date(2019, 1, 1));
        assert_eq!(status.map(|s| s.emp_stat), Some(11));
    }

    #[test]
    fn monitoring_lookup() {
        let status = LearnerEmploymentStatus::new(11, date(2018, 6, 1)).with_monitoring("bsi", 3);
        assert!(has_esm_code(&status, "BSI", &[3, 4]));
        assert!(!has_esm_code(&status, "BSI", &[1]));
        assert!(!has_esm_code(&status, "EII", &[3]));
        assert!(is_not_employed(&status));
    }
}
