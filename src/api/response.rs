//! Response types for the Contract Payment Audit Engine API.
//!
//! The success response echoes every original contract-audit row with the
//! seven result columns appended, cells rendered as the `"Yes"` / `"No"` /
//! `""` literals the downstream workbook expects.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{AuditWarning, CheckOutcome, ContractChecks};

use super::request::ContractRow;

/// One labeled output row: the original contract-audit columns plus the
/// seven appended result columns the downstream workbook expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditedRow {
    /// The original contract-audit row, untouched.
    #[serde(flatten)]
    pub record: ContractRow,
    /// Whether the contract is active and subject to audit.
    #[serde(rename = "To Check")]
    pub to_check: CheckOutcome,
    /// Whether the contract is listed in the exceptions table.
    #[serde(rename = "Exceptional Case")]
    pub exceptional_case: CheckOutcome,
    /// Compliance against the current price (or the exception floor).
    #[serde(rename = "Paying Correctly on Price of Now")]
    pub price_of_now: CheckOutcome,
    /// Compliance against the price in force at contract start.
    #[serde(rename = "Paying Correctly on Price of Contract Start Date")]
    pub contract_start_price: CheckOutcome,
    /// Compliance assuming the nationality-upgrade payment is added.
    #[serde(rename = "Paying Correctly if Upgrading Nationality")]
    pub upgrading_nationality: CheckOutcome,
    /// Compliance against the record's pro-rated threshold.
    #[serde(rename = "Paying Correctly if Pro-Rated Value")]
    pub pro_rated: CheckOutcome,
    /// Tolerance match against any historical price for the key.
    #[serde(rename = "Paying Correctly on Old Price")]
    pub old_price: CheckOutcome,
}

impl AuditedRow {
    /// Attaches computed check outcomes to the original row.
    pub fn new(record: ContractRow, checks: ContractChecks) -> Self {
        Self {
            record,
            to_check: checks.to_check,
            exceptional_case: checks.exceptional_case,
            price_of_now: checks.price_of_now,
            contract_start_price: checks.contract_start_price,
            upgrading_nationality: checks.upgrading_nationality,
            pro_rated: checks.pro_rated,
            old_price: checks.old_price,
        }
    }
}

/// Success response for the `/audit` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditResponse {
    /// Unique identifier for this audit run.
    pub audit_id: Uuid,
    /// When the run completed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the result.
    pub engine_version: String,
    /// The audit month start date the run was evaluated against.
    pub month_start_date: NaiveDate,
    /// The labeled contract-audit rows, in input order.
    pub rows: Vec<AuditedRow>,
    /// Non-fatal diagnostics for the run.
    pub warnings: Vec<AuditWarning>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::NothingToProcess { table } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "NOTHING_TO_PROCESS",
                    format!("Nothing to process: the {} table is empty", table),
                    "All four input tables must contain at least one row",
                ),
            },
            EngineError::InvalidRequest { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(message),
            },
        }
    }
}
