//! Core data models for the Contract Payment Audit Engine.
//!
//! This module contains all the domain records used throughout the engine.

mod contract;
mod exception;
mod payroll;
mod price;
mod report;

pub use contract::ContractRecord;
pub use exception::{ApprovedPayment, ExceptionRecord};
pub use payroll::{ContractStatus, MaidType, PayrollRecord};
pub use price::PriceRow;
pub use report::{AuditWarning, CheckOutcome, ContractChecks, InputTable};
