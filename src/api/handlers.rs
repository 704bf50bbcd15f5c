//! HTTP request handlers for the Contract Payment Audit Engine API.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::audit::audit_contracts;
use crate::models::{ContractRecord, ExceptionRecord, PayrollRecord, PriceRow};

use super::request::AuditRequest;
use super::response::{ApiError, ApiErrorResponse, AuditResponse, AuditedRow};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/audit", post(audit_handler))
        .with_state(state)
}

/// Handler for the POST /audit endpoint.
///
/// Accepts the four input tables and the audit month start date, runs the
/// check cascade, and returns the labeled contract-audit table.
async fn audit_handler(
    State(state): State<AppState>,
    payload: Result<Json<AuditRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing audit request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let config = state.config();

    // Normalize the raw spreadsheet rows into typed records. The contract
    // rows are kept so the response can echo them untouched.
    let contracts: Vec<ContractRecord> = request
        .contract_audit
        .iter()
        .map(|row| row.to_record(config))
        .collect();
    let payroll: Vec<PayrollRecord> = request
        .payroll
        .iter()
        .map(|row| row.to_record(config))
        .collect();
    let exceptions: Vec<ExceptionRecord> = request
        .exceptions
        .iter()
        .map(|row| row.to_record(config))
        .collect();
    let prices: Vec<PriceRow> = request
        .price_table
        .iter()
        .map(|row| row.to_record(config))
        .collect();

    let start_time = Instant::now();
    match audit_contracts(
        &contracts,
        &payroll,
        &exceptions,
        &prices,
        request.month_start_date,
        config,
    ) {
        Ok(run) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                contracts = contracts.len(),
                warnings = run.warnings.len(),
                duration_us = duration.as_micros(),
                "Audit completed successfully"
            );

            let rows: Vec<AuditedRow> = request
                .contract_audit
                .into_iter()
                .zip(run.checks)
                .map(|(record, checks)| AuditedRow::new(record, checks))
                .collect();

            let response = AuditResponse {
                audit_id: correlation_id,
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                month_start_date: request.month_start_date,
                rows,
                warnings: run.warnings,
            };

            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Audit rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}
