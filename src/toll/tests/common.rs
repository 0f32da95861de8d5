use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use crate::toll::assessment::AssessmentEngine;
use crate::toll::calendar::{CalendarError, FixedHolidayCalendar, HolidayCalendar};
use crate::toll::router::toll_router;
use crate::toll::service::TollAssessmentService;

/// An ordinary chargeable weekday: Friday 2013-02-08.
pub(super) fn weekday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2013, 2, 8).expect("valid date")
}

/// A pass on the chargeable weekday at the given wall-clock time.
pub(super) fn pass_at(hour: u32, minute: u32) -> NaiveDateTime {
    weekday()
        .and_hms_opt(hour, minute, 0)
        .expect("valid timestamp")
}

pub(super) fn engine() -> AssessmentEngine {
    AssessmentEngine::standard()
}

pub(super) fn calendar() -> FixedHolidayCalendar {
    FixedHolidayCalendar::sweden_2013()
}

pub(super) fn build_service() -> TollAssessmentService<FixedHolidayCalendar> {
    TollAssessmentService::standard(Arc::new(calendar()))
}

pub(super) fn build_router() -> axum::Router {
    toll_router(Arc::new(build_service()))
}

/// Calendar double that fails every lookup, for error-path coverage.
pub(super) struct UnavailableCalendar;

impl HolidayCalendar for UnavailableCalendar {
    fn is_holiday(&self, _date: NaiveDate) -> Result<bool, CalendarError> {
        Err(CalendarError::Unavailable("calendar feed offline".to_string()))
    }
}
