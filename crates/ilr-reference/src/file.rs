use chrono::NaiveDate;
use ilr_model::Header;

use crate::services::FileDataService;

/// File metadata taken from the message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileData {
    ukprn: i64,
    file_preparation_date: NaiveDate,
}

impl FileData {
    pub fn new(ukprn: i64, file_preparation_date: NaiveDate) -> Self {
        Self {
            ukprn,
            file_preparation_date,
        }
    }

    pub fn from_header(header: &Header) -> Self {
        Self::new(header.ukprn, header.file_preparation_date)
    }
}

impl FileDataService for FileData {
    fn ukprn(&self) -> i64 {
        self.ukprn
    }

    fn file_preparation_date(&self) -> NaiveDate {
        self.file_preparation_date
    }
}
