//! Daily congestion-toll assessment.
//!
//! The core is deterministic rule evaluation: a fixed time-of-day tariff
//! schedule, exemption rules for vehicle classes and toll-free dates, and a
//! windowed aggregation that charges each 60-minute burst of passes once and
//! caps the day. The holiday calendar is the one external collaborator.

pub mod assessment;
pub mod calendar;
pub mod domain;
pub mod holidays;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use assessment::{
    AssessmentConfig, AssessmentEngine, ChargeDecision, ChargeWindow, DayAssessment,
    ExemptionPolicy, TariffSchedule, TollBand, WaiverReason,
};
pub use calendar::{CalendarError, FixedHolidayCalendar, HolidayCalendar};
pub use domain::VehicleClass;
pub use holidays::{HolidayCsvImporter, HolidayImportError};
pub use router::toll_router;
pub use service::{AssessmentServiceError, TollAssessmentService};
