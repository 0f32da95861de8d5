use std::collections::BTreeSet;

use chrono::NaiveDate;

/// Holiday lookup abstraction so the assessment engine can be exercised in
/// isolation from whatever sources the calendar data.
///
/// A failed lookup is an error, never a silent "not a holiday": charging a
/// vehicle on a holiday the calendar could not answer for would be a billing
/// defect, so the caller decides how to degrade.
pub trait HolidayCalendar: Send + Sync {
    fn is_holiday(&self, date: NaiveDate) -> Result<bool, CalendarError>;
}

/// Error enumeration for calendar lookup failures.
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    #[error("holiday calendar unavailable: {0}")]
    Unavailable(String),
}

/// In-memory calendar backed by an explicit set of dates.
#[derive(Debug, Clone, Default)]
pub struct FixedHolidayCalendar {
    dates: BTreeSet<NaiveDate>,
}

impl FixedHolidayCalendar {
    pub fn new<I>(dates: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, date: NaiveDate) {
        self.dates.insert(date);
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Swedish public holidays and holiday eves for 2013, the calendar year
    /// the standard tariff schedule was written for. Used as the fallback
    /// when no calendar export is configured.
    pub fn sweden_2013() -> Self {
        const DATES: [(i32, u32, u32); 16] = [
            (2013, 1, 1),   // New Year's Day
            (2013, 1, 6),   // Epiphany
            (2013, 3, 29),  // Good Friday
            (2013, 3, 31),  // Easter Sunday
            (2013, 4, 1),   // Easter Monday
            (2013, 5, 1),   // May Day
            (2013, 5, 9),   // Ascension Day
            (2013, 5, 19),  // Pentecost
            (2013, 6, 6),   // National Day
            (2013, 6, 21),  // Midsummer Eve
            (2013, 6, 22),  // Midsummer Day
            (2013, 11, 2),  // All Saints' Day
            (2013, 12, 24), // Christmas Eve
            (2013, 12, 25), // Christmas Day
            (2013, 12, 26), // Boxing Day
            (2013, 12, 31), // New Year's Eve
        ];

        Self {
            dates: DATES
                .iter()
                .filter_map(|&(year, month, day)| NaiveDate::from_ymd_opt(year, month, day))
                .collect(),
        }
    }
}

impl HolidayCalendar for FixedHolidayCalendar {
    fn is_holiday(&self, date: NaiveDate) -> Result<bool, CalendarError> {
        Ok(self.dates.contains(&date))
    }
}
