//! HTTP API module for the Contract Payment Audit Engine.
//!
//! This module provides the REST endpoint that accepts the four input
//! tables and returns the labeled contract-audit table.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AuditRequest, ContractRow, ExceptionRow, PayrollRow, PriceTableRow};
pub use response::{ApiError, AuditResponse, AuditedRow};
pub use state::AppState;
