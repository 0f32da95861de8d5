use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::debug;

use super::assessment::{AssessmentEngine, DayAssessment};
use super::calendar::{CalendarError, HolidayCalendar};
use super::domain::VehicleClass;

/// Facade composing the assessment engine with a holiday calendar source,
/// so adapters (HTTP, CLI) only deal in vehicles and pass timestamps.
pub struct TollAssessmentService<C> {
    engine: Arc<AssessmentEngine>,
    calendar: Arc<C>,
}

impl<C> TollAssessmentService<C>
where
    C: HolidayCalendar + 'static,
{
    pub fn new(engine: Arc<AssessmentEngine>, calendar: Arc<C>) -> Self {
        Self { engine, calendar }
    }

    /// Standard tariff schedule and charging dials with the given calendar.
    pub fn standard(calendar: Arc<C>) -> Self {
        Self::new(Arc::new(AssessmentEngine::standard()), calendar)
    }

    pub fn engine(&self) -> &AssessmentEngine {
        &self.engine
    }

    pub fn assess_day(
        &self,
        vehicle: VehicleClass,
        passes: &[NaiveDateTime],
    ) -> Result<DayAssessment, AssessmentServiceError> {
        let assessment = self
            .engine
            .assess(vehicle, passes, self.calendar.as_ref())?;

        debug!(
            vehicle = vehicle.label(),
            passes = passes.len(),
            total = assessment.total,
            "daily toll assessed"
        );

        Ok(assessment)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
