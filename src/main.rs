use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tollgate::config::AppConfig;
use tollgate::error::AppError;
use tollgate::telemetry;
use tollgate::toll::router::parse_pass;
use tollgate::toll::{
    toll_router, ChargeDecision, DayAssessment, FixedHolidayCalendar, HolidayCsvImporter,
    TollAssessmentService, VehicleClass,
};
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Congestion Toll Service",
    about = "Compute daily congestion-toll assessments from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Assess one vehicle's passes for a single day
    Assess(AssessArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct AssessArgs {
    /// Vehicle class (car, motorbike, tractor, emergency, diplomat, foreign, military)
    #[arg(long, default_value = "car", value_parser = parse_vehicle)]
    vehicle: VehicleClass,
    /// Pass timestamp (repeatable), e.g. "2013-02-08 06:27"
    #[arg(long = "pass", value_parser = parse_pass_arg)]
    passes: Vec<NaiveDateTime>,
    /// Holiday calendar CSV (Date,Name); defaults to the built-in calendar
    #[arg(long)]
    holidays: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Assess(args) => run_assessment(args),
    }
}

fn parse_vehicle(raw: &str) -> Result<VehicleClass, String> {
    Ok(VehicleClass::from_label(raw))
}

fn parse_pass_arg(raw: &str) -> Result<NaiveDateTime, String> {
    parse_pass(raw)
}

fn load_calendar(csv_path: Option<&PathBuf>) -> Result<FixedHolidayCalendar, AppError> {
    match csv_path {
        Some(path) => Ok(HolidayCsvImporter::from_path(path)?),
        None => Ok(FixedHolidayCalendar::sweden_2013()),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let calendar = load_calendar(config.holidays.csv_path.as_ref())?;
    let service = Arc::new(TollAssessmentService::standard(Arc::new(calendar)));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(toll_router(service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "congestion toll service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_assessment(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        vehicle,
        passes,
        holidays,
    } = args;

    let calendar = load_calendar(holidays.as_ref())?;
    let service = TollAssessmentService::standard(Arc::new(calendar));
    let assessment = service.assess_day(vehicle, &passes)?;

    render_assessment(&assessment, passes.len());
    Ok(())
}

fn render_assessment(assessment: &DayAssessment, pass_count: usize) {
    println!("Daily toll assessment");
    match assessment.date {
        Some(date) => println!(
            "Vehicle {} on {} ({} pass(es) reported)",
            assessment.vehicle.label(),
            date,
            pass_count
        ),
        None => println!(
            "Vehicle {} (no passes reported)",
            assessment.vehicle.label()
        ),
    }

    match &assessment.decision {
        ChargeDecision::Waived(reason) => {
            println!("Waived: {}", reason.summary());
        }
        ChargeDecision::Charged => {
            println!("\nCharge windows");
            for window in &assessment.windows {
                println!(
                    "- opened {} | {} pass(es) | charged {}",
                    window.opened_at.format("%H:%M"),
                    window.passes,
                    window.charged
                );
            }
            if assessment.uncapped_total != assessment.total {
                println!(
                    "\nTotal: {} (daily cap applied, uncapped {})",
                    assessment.total, assessment.uncapped_total
                );
            } else {
                println!("\nTotal: {}", assessment.total);
            }
        }
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
