//! Exception record model.
//!
//! Exceptional cases carry a manually negotiated payment floor that
//! overrides the standard price-table lookup for their contract.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::coerce_amount;

/// The approved monthly payment stored against an exceptional contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovedPayment {
    /// A sentinel (`"N/A"` or `"-"`) meaning no minimum applies; the
    /// contract is compliant regardless of the amount paid.
    Waived,
    /// A concrete approved floor; compliance is amount paid >= floor.
    Amount(Decimal),
    /// The stored value was neither a sentinel nor a number; the contract
    /// is judged non-compliant.
    Invalid,
}

impl ApprovedPayment {
    /// Interprets a raw exceptions-table cell.
    ///
    /// Sentinel strings are matched exactly after trimming; everything else
    /// goes through numeric coercion, falling through to `Invalid`.
    pub fn from_cell(cell: &Value, sentinels: &[String]) -> Self {
        if let Value::String(s) = cell {
            let trimmed = s.trim();
            if sentinels.iter().any(|sentinel| sentinel == trimmed) {
                return ApprovedPayment::Waived;
            }
        }
        match coerce_amount(cell) {
            Some(amount) => ApprovedPayment::Amount(amount),
            None => ApprovedPayment::Invalid,
        }
    }
}

/// One row of the exceptions table, normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExceptionRecord {
    /// Normalized contract identifier.
    pub contract_id: String,
    /// The approved monthly payment for this contract.
    pub payment: ApprovedPayment,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sentinels() -> Vec<String> {
        vec!["N/A".to_string(), "-".to_string()]
    }

    #[test]
    fn test_sentinels_are_waived() {
        assert_eq!(ApprovedPayment::from_cell(&json!("N/A"), &sentinels()), ApprovedPayment::Waived);
        assert_eq!(ApprovedPayment::from_cell(&json!("-"), &sentinels()), ApprovedPayment::Waived);
        assert_eq!(ApprovedPayment::from_cell(&json!(" N/A "), &sentinels()), ApprovedPayment::Waived);
    }

    #[test]
    fn test_numeric_values_become_amounts() {
        assert_eq!(
            ApprovedPayment::from_cell(&json!(1450), &sentinels()),
            ApprovedPayment::Amount(Decimal::new(1450, 0))
        );
        assert_eq!(
            ApprovedPayment::from_cell(&json!("1450.50"), &sentinels()),
            ApprovedPayment::Amount(Decimal::new(145050, 2))
        );
    }

    #[test]
    fn test_garbage_is_invalid() {
        assert_eq!(ApprovedPayment::from_cell(&json!("TBD"), &sentinels()), ApprovedPayment::Invalid);
        assert_eq!(ApprovedPayment::from_cell(&Value::Null, &sentinels()), ApprovedPayment::Invalid);
    }
}
