//! Price-table row model.
//!
//! The price table holds time-versioned minimum-payment thresholds keyed by
//! nationality category and contract type. Multiple rows may exist per key
//! across time; the "current" threshold is the row with the maximum
//! validity end date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the price table, normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRow {
    /// Nationality category after mapping (a recognized label or `"Other"`).
    pub nationality_category: String,
    /// Contract type, trimmed.
    pub contract_type: String,
    /// Start of the validity window, when parseable.
    pub valid_from: Option<NaiveDate>,
    /// End of the validity window, when parseable.
    pub valid_to: Option<NaiveDate>,
    /// The minimum monthly payment (VAT inclusive), when numeric.
    pub minimum_payment: Option<Decimal>,
}

impl PriceRow {
    /// Returns true if this row's validity window contains the given date.
    ///
    /// The window is closed on both ends. A row missing either boundary
    /// cannot vouch for any date and never matches.
    pub fn covers(&self, date: NaiveDate) -> bool {
        match (self.valid_from, self.valid_to) {
            (Some(from), Some(to)) => from <= date && date <= to,
            _ => false,
        }
    }
}
