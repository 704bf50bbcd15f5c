//! Contract record model.
//!
//! This module defines the normalized form of one row of the contract-audit
//! table, the unit of evaluation for the audit cascade.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One audited contract, normalized for rule evaluation.
///
/// All spreadsheet-sourced values are already cleaned: the id is normalized
/// for cross-table matching, the nationality is mapped into a configured
/// category, and numeric/date fields that failed to parse are `None`. An
/// absent amount is judged non-compliant by whichever check needs it; it is
/// never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractRecord {
    /// Normalized contract identifier (decimal suffix stripped, trimmed).
    pub id: String,
    /// Nationality category after mapping (a recognized label or `"Other"`).
    pub nationality_category: String,
    /// Contract type, trimmed.
    pub contract_type: String,
    /// The amount actually paid this payroll month.
    pub amount_paid: Option<Decimal>,
    /// The contract start date, when parseable.
    pub start_of_contract: Option<NaiveDate>,
    /// Recorded nationality-upgrade payment amount, if any.
    pub upgrade_amount: Option<Decimal>,
    /// The pro-rated minimum threshold stored on the record.
    pub pro_rated: Option<Decimal>,
}

impl ContractRecord {
    /// Returns true if the contract started on or after the given audit
    /// month start, which is what makes it pro-ratable for that month.
    ///
    /// A contract with no parseable start date is never pro-ratable.
    pub fn started_within_month(&self, month_start: NaiveDate) -> bool {
        match self.start_of_contract {
            Some(start) => start >= month_start,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_starting(start: Option<NaiveDate>) -> ContractRecord {
        ContractRecord {
            id: "A100".to_string(),
            nationality_category: "Filipina".to_string(),
            contract_type: "Standard".to_string(),
            amount_paid: Some(Decimal::new(1600, 0)),
            start_of_contract: start,
            upgrade_amount: None,
            pro_rated: None,
        }
    }

    #[test]
    fn test_started_within_month() {
        let month_start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

        let on_boundary = record_starting(NaiveDate::from_ymd_opt(2026, 3, 1));
        assert!(on_boundary.started_within_month(month_start));

        let mid_month = record_starting(NaiveDate::from_ymd_opt(2026, 3, 15));
        assert!(mid_month.started_within_month(month_start));

        let earlier = record_starting(NaiveDate::from_ymd_opt(2026, 2, 28));
        assert!(!earlier.started_within_month(month_start));
    }

    #[test]
    fn test_missing_start_date_is_not_pro_ratable() {
        let month_start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert!(!record_starting(None).started_within_month(month_start));
    }
}
