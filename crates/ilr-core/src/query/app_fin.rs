//! Apprenticeship financial record queries.

use ilr_model::AppFinRecord;

pub fn has_app_fin_record(records: &[AppFinRecord], afin_type: &str) -> bool {
    records
        .iter()
        .any(|record| record.afin_type.trim().eq_ignore_ascii_case(afin_type))
}

/// Is there a record of `afin_type` with `afin_code`?
pub fn has_app_fin_code(records: &[AppFinRecord], afin_type: &str, afin_code: i32) -> bool {
    records.iter().any(|record| {
        record.afin_type.trim().eq_ignore_ascii_case(afin_type) && record.afin_code == afin_code
    })
}
