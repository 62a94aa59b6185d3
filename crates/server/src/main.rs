// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{error, info, warn};
use turnos_api::{
    ApiError, AssistantReport, BalanceResponse, Dataset, ReviewRequestRequest, ReviewResponse,
    SuggestAlternativesRequest, SuggestionsResponse, ValidatePersonalDayRequest,
    ValidateShiftChangeRequest, ValidateVacationRequest, ValidationResponse, compute_balance,
    review_request, run_assistant, suggest_alternatives, validate_personal_day,
    validate_shift_change, validate_vacation,
};

/// Turnos Server - HTTP server for the Turnos leave management engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON dataset of users, requests and balances. If not
    /// provided, the server starts with an empty dataset.
    #[arg(short, long)]
    data: Option<std::path::PathBuf>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,
}

/// Application state shared across handlers.
///
/// The dataset lives in memory only; reviews are lost on restart.
#[derive(Clone)]
struct AppState {
    /// Users, requests and balances.
    dataset: Arc<Mutex<Dataset>>,
}

/// Query parameters for balance lookups.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct BalanceQuery {
    /// The calendar year. Defaults to the current UTC year.
    year: Option<i32>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Always `ok`.
    status: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Handler for GET `/health`.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Handler for GET `/assistant/alerts`.
async fn handle_assistant_alerts(
    AxumState(app_state): AxumState<AppState>,
) -> Json<AssistantReport> {
    let dataset = app_state.dataset.lock().await;
    let report: AssistantReport = run_assistant(&dataset, OffsetDateTime::now_utc().date());
    drop(dataset);

    info!(
        total_alerts = report.total_alerts(),
        "Handled assistant alerts request"
    );
    Json(report)
}

/// Handler for POST `/validate/vacation`.
async fn handle_validate_vacation(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ValidateVacationRequest>,
) -> Result<Json<ValidationResponse>, HttpError> {
    info!(
        user_id = %req.user_id,
        start_date = %req.start_date,
        end_date = %req.end_date,
        "Handling validate_vacation request"
    );

    let dataset = app_state.dataset.lock().await;
    let response: ValidationResponse = validate_vacation(&dataset, &req)?;
    drop(dataset);

    Ok(Json(response))
}

/// Handler for POST `/validate/personal_day`.
async fn handle_validate_personal_day(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ValidatePersonalDayRequest>,
) -> Result<Json<ValidationResponse>, HttpError> {
    info!(
        user_id = %req.user_id,
        date = %req.date,
        "Handling validate_personal_day request"
    );

    let dataset = app_state.dataset.lock().await;
    let response: ValidationResponse = validate_personal_day(&dataset, &req)?;
    drop(dataset);

    Ok(Json(response))
}

/// Handler for POST `/validate/shift_change`.
async fn handle_validate_shift_change(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ValidateShiftChangeRequest>,
) -> Result<Json<ValidationResponse>, HttpError> {
    info!(
        user_id = %req.user_id,
        replacement_user_id = %req.replacement_user_id,
        "Handling validate_shift_change request"
    );

    let dataset = app_state.dataset.lock().await;
    let response: ValidationResponse = validate_shift_change(&dataset, &req)?;
    drop(dataset);

    Ok(Json(response))
}

/// Handler for POST `/suggestions`.
async fn handle_suggestions(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SuggestAlternativesRequest>,
) -> Result<Json<SuggestionsResponse>, HttpError> {
    info!(user_id = %req.user_id, "Handling suggestions request");

    let dataset = app_state.dataset.lock().await;
    let response: SuggestionsResponse =
        suggest_alternatives(&dataset, &req, OffsetDateTime::now_utc().date())?;
    drop(dataset);

    Ok(Json(response))
}

/// Handler for GET `/balances/{user_id}`.
async fn handle_get_balance(
    AxumState(app_state): AxumState<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<BalanceQuery>,
) -> Result<Json<BalanceResponse>, HttpError> {
    let year: i32 = query
        .year
        .unwrap_or_else(|| OffsetDateTime::now_utc().year());
    info!(user_id = %user_id, year, "Handling get_balance request");

    let dataset = app_state.dataset.lock().await;
    let response: BalanceResponse = compute_balance(&dataset, &user_id, year)?;
    drop(dataset);

    Ok(Json(response))
}

/// Handler for POST `/requests/{request_id}/review`.
async fn handle_review_request(
    AxumState(app_state): AxumState<AppState>,
    Path(request_id): Path<String>,
    Json(req): Json<ReviewRequestRequest>,
) -> Result<Json<ReviewResponse>, HttpError> {
    info!(
        request_id = %request_id,
        status = ?req.status,
        "Handling review_request request"
    );

    let mut dataset = app_state.dataset.lock().await;
    let result: Result<ReviewResponse, ApiError> =
        review_request(&mut dataset, &request_id, &req, OffsetDateTime::now_utc());
    drop(dataset);

    match result {
        Ok(response) => Ok(Json(response)),
        Err(err) => {
            warn!(request_id = %request_id, error = %err, "Review refused");
            Err(err.into())
        }
    }
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/assistant/alerts", get(handle_assistant_alerts))
        .route("/validate/vacation", post(handle_validate_vacation))
        .route("/validate/personal_day", post(handle_validate_personal_day))
        .route("/validate/shift_change", post(handle_validate_shift_change))
        .route("/suggestions", post(handle_suggestions))
        .route("/balances/{user_id}", get(handle_get_balance))
        .route("/requests/{request_id}/review", post(handle_review_request))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Turnos Server");

    let dataset: Dataset = if let Some(path) = &args.data {
        info!("Loading dataset from: {}", path.display());
        Dataset::load(path)?
    } else {
        info!("Starting with an empty dataset");
        Dataset::new()
    };

    let app_state: AppState = AppState {
        dataset: Arc::new(Mutex::new(dataset)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
