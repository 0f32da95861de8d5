use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::json;

use super::assessment::{ChargeWindow, DayAssessment};
use super::calendar::HolidayCalendar;
use super::domain::VehicleClass;
use super::service::{AssessmentServiceError, TollAssessmentService};

/// Router builder exposing HTTP endpoints for assessments and the tariff.
pub fn toll_router<C>(service: Arc<TollAssessmentService<C>>) -> Router
where
    C: HolidayCalendar + 'static,
{
    Router::new()
        .route("/api/v1/toll/assessments", post(assess_handler::<C>))
        .route("/api/v1/toll/tariff", get(tariff_handler::<C>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub struct AssessmentRequest {
    pub vehicle: VehicleClass,
    #[serde(deserialize_with = "deserialize_passes")]
    pub passes: Vec<NaiveDateTime>,
}

pub(crate) async fn assess_handler<C>(
    State(service): State<Arc<TollAssessmentService<C>>>,
    axum::Json(request): axum::Json<AssessmentRequest>,
) -> Response
where
    C: HolidayCalendar + 'static,
{
    match service.assess_day(request.vehicle, &request.passes) {
        Ok(assessment) => {
            let view = AssessmentView::from(&assessment);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(AssessmentServiceError::Calendar(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn tariff_handler<C>(
    State(service): State<Arc<TollAssessmentService<C>>>,
) -> Response
where
    C: HolidayCalendar + 'static,
{
    let engine = service.engine();
    let payload = json!({
        "bands": engine.schedule().bands(),
        "daily_cap": engine.config().daily_cap,
        "window_minutes": engine.config().window_minutes,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

/// Wire representation of an assessment.
#[derive(Debug, Serialize)]
pub struct AssessmentView {
    pub vehicle: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub decision: String,
    pub total: u32,
    pub uncapped_total: u32,
    pub windows: Vec<WindowView>,
}

#[derive(Debug, Serialize)]
pub struct WindowView {
    pub opened_at: NaiveDateTime,
    pub passes: u32,
    pub charged: u32,
}

impl From<&DayAssessment> for AssessmentView {
    fn from(assessment: &DayAssessment) -> Self {
        Self {
            vehicle: assessment.vehicle.label(),
            date: assessment.date,
            decision: assessment.decision.summary(),
            total: assessment.total,
            uncapped_total: assessment.uncapped_total,
            windows: assessment.windows.iter().map(WindowView::from).collect(),
        }
    }
}

impl From<&ChargeWindow> for WindowView {
    fn from(window: &ChargeWindow) -> Self {
        Self {
            opened_at: window.opened_at,
            passes: window.passes,
            charged: window.charged,
        }
    }
}

fn deserialize_passes<'de, D>(deserializer: D) -> Result<Vec<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    raw.iter()
        .map(|value| parse_pass(value).map_err(serde::de::Error::custom))
        .collect()
}

/// Accepts RFC 3339 stamps as well as the plain formats registrations use.
pub fn parse_pass(raw: &str) -> Result<NaiveDateTime, String> {
    let trimmed = raw.trim();

    if let Ok(stamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(stamp.naive_local());
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(stamp);
        }
    }

    Err(format!("failed to parse '{raw}' as a pass timestamp"))
}
