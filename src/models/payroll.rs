//! Payroll record model and related enums.
//!
//! Payroll rows are consumed only to decide which contracts are active this
//! payroll month. Status and maid-type values arrive as free-form strings
//! from the extract; they are mapped into small closed enums, with anything
//! unrecognized bucketed to `Other`.

use serde::{Deserialize, Serialize};

/// The status of a contract in the payroll extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    /// The maid is currently placed with a client.
    WithClient,
    /// Any other status value.
    Other,
}

impl ContractStatus {
    /// Maps the raw extract value onto the enum. Only the literal
    /// `"WITH_CLIENT"` is recognized.
    pub fn from_raw(raw: &str) -> Self {
        if raw.trim() == "WITH_CLIENT" {
            ContractStatus::WithClient
        } else {
            ContractStatus::Other
        }
    }
}

/// The maid type in the payroll extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaidType {
    /// A client-contract (CC) maid, the population subject to audit.
    Cc,
    /// Any other maid type.
    Other,
}

impl MaidType {
    /// Maps the raw extract value onto the enum. Only the literal `"CC"`
    /// is recognized.
    pub fn from_raw(raw: &str) -> Self {
        if raw.trim() == "CC" { MaidType::Cc } else { MaidType::Other }
    }
}

/// One row of the payroll extract, normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Normalized contract identifier (prefix stripped, trimmed).
    pub contract_id: String,
    /// The contract status.
    pub status: ContractStatus,
    /// The maid type.
    pub maid_type: MaidType,
}

impl PayrollRecord {
    /// Returns true if this row marks its contract as active for audit:
    /// placed with a client and of client-contract type.
    pub fn is_active(&self) -> bool {
        self.status == ContractStatus::WithClient && self.maid_type == MaidType::Cc
    }
}
