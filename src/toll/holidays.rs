//! Holiday calendar sourcing from CSV exports.
//!
//! The engine only sees the [`HolidayCalendar`] trait; this module is the
//! adapter that hydrates a [`FixedHolidayCalendar`] from a `Date,Name`
//! export so operators can swap calendars without a rebuild.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use super::calendar::FixedHolidayCalendar;

pub struct HolidayCsvImporter;

impl HolidayCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<FixedHolidayCalendar, HolidayImportError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| HolidayImportError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<FixedHolidayCalendar, HolidayImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut calendar = FixedHolidayCalendar::default();
        for record in csv_reader.deserialize::<HolidayRow>() {
            let row = record?;
            let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d").map_err(|_| {
                HolidayImportError::InvalidDate {
                    value: row.date.clone(),
                }
            })?;
            calendar.insert(date);
        }

        Ok(calendar)
    }
}

#[derive(Debug, Deserialize)]
struct HolidayRow {
    #[serde(rename = "Date")]
    date: String,
}

#[derive(Debug, thiserror::Error)]
pub enum HolidayImportError {
    #[error("failed to open holiday calendar at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse holiday calendar: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid holiday date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },
}
