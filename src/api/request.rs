//! Request types for the `/audit` endpoint.
//!
//! Each input table arrives with its original spreadsheet column headers,
//! and every cell as a raw JSON value (string or number), because the
//! upstream extracts do not guarantee types. The conversion methods here
//! run the normalizer over each row to produce the typed domain records the
//! engine evaluates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::AuditConfig;
use crate::models::{
    ApprovedPayment, ContractRecord, ContractStatus, ExceptionRecord, MaidType, PayrollRecord,
    PriceRow,
};
use crate::normalize::{
    coerce_amount, coerce_date, coerce_string, normalize_contract_id, strip_payroll_prefix,
};

/// Request body for the `/audit` endpoint.
///
/// Carries the four tables plus the audit month start date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRequest {
    /// The first day of the payroll month being audited.
    pub month_start_date: NaiveDate,
    /// The contract-audit table.
    pub contract_audit: Vec<ContractRow>,
    /// The payroll extract.
    pub payroll: Vec<PayrollRow>,
    /// The exceptions table.
    pub exceptions: Vec<ExceptionRow>,
    /// The price table.
    pub price_table: Vec<PriceTableRow>,
}

/// One raw row of the contract-audit table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractRow {
    /// The contract identifier cell.
    #[serde(rename = "Contract", default)]
    pub contract: Value,
    /// The maid's nationality during the payroll month.
    #[serde(rename = "Maid Nationality During Payroll Month", default)]
    pub nationality: Value,
    /// The contract type cell.
    #[serde(rename = "Contract Type", default)]
    pub contract_type: Value,
    /// The amount actually paid.
    #[serde(rename = "Amount Of Payment", default)]
    pub amount_of_payment: Value,
    /// The contract start date cell.
    #[serde(rename = "Start Of Contract", default)]
    pub start_of_contract: Value,
    /// The recorded nationality-upgrade payment, if any.
    #[serde(rename = "Upgrading Nationality Payment Amount", default)]
    pub upgrade_amount: Value,
    /// The stored pro-rated threshold.
    #[serde(rename = "Pro-Rated", default)]
    pub pro_rated: Value,
}

impl ContractRow {
    /// Normalizes this row into a typed [`ContractRecord`].
    pub fn to_record(&self, config: &AuditConfig) -> ContractRecord {
        ContractRecord {
            id: normalize_contract_id(&coerce_string(&self.contract)),
            nationality_category: config.nationality_category(&coerce_string(&self.nationality)),
            contract_type: coerce_string(&self.contract_type),
            amount_paid: coerce_amount(&self.amount_of_payment),
            start_of_contract: coerce_date(&self.start_of_contract),
            upgrade_amount: coerce_amount(&self.upgrade_amount),
            pro_rated: coerce_amount(&self.pro_rated),
        }
    }
}

/// One raw row of the payroll extract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRow {
    /// The prefixed contract name cell.
    #[serde(rename = "Contract Name", default)]
    pub contract_name: Value,
    /// The contract status cell.
    #[serde(rename = "Status", default)]
    pub status: Value,
    /// The maid type cell.
    #[serde(rename = "Type Of maid", default)]
    pub maid_type: Value,
}

impl PayrollRow {
    /// Normalizes this row into a typed [`PayrollRecord`].
    pub fn to_record(&self, config: &AuditConfig) -> PayrollRecord {
        PayrollRecord {
            contract_id: strip_payroll_prefix(
                &coerce_string(&self.contract_name),
                &config.payroll_name_prefix,
            ),
            status: ContractStatus::from_raw(&coerce_string(&self.status)),
            maid_type: MaidType::from_raw(&coerce_string(&self.maid_type)),
        }
    }
}

/// One raw row of the exceptions table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExceptionRow {
    /// The contract identifier cell.
    #[serde(rename = "Cont #", default)]
    pub contract: Value,
    /// The approved monthly payment cell (number or waiver sentinel).
    #[serde(rename = "Monthly Payment", default)]
    pub monthly_payment: Value,
}

impl ExceptionRow {
    /// Normalizes this row into a typed [`ExceptionRecord`].
    pub fn to_record(&self, config: &AuditConfig) -> ExceptionRecord {
        ExceptionRecord {
            contract_id: normalize_contract_id(&coerce_string(&self.contract)),
            payment: ApprovedPayment::from_cell(&self.monthly_payment, &config.waiver_sentinels),
        }
    }
}

/// One raw row of the price table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceTableRow {
    /// The nationality cell.
    #[serde(rename = "Nationality", default)]
    pub nationality: Value,
    /// The contract type cell.
    #[serde(rename = "Contract Type", default)]
    pub contract_type: Value,
    /// Start of the validity window.
    #[serde(rename = "Start Date", default)]
    pub start_date: Value,
    /// End of the validity window.
    #[serde(rename = "End Date", default)]
    pub end_date: Value,
    /// The minimum monthly payment including VAT.
    #[serde(rename = "Minimum monthly payment + VAT", default)]
    pub minimum_payment: Value,
}

impl PriceTableRow {
    /// Normalizes this row into a typed [`PriceRow`].
    pub fn to_record(&self, config: &AuditConfig) -> PriceRow {
        PriceRow {
            nationality_category: config.nationality_category(&coerce_string(&self.nationality)),
            contract_type: coerce_string(&self.contract_type),
            valid_from: coerce_date(&self.start_date),
            valid_to: coerce_date(&self.end_date),
            minimum_payment: coerce_amount(&self.minimum_payment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    #[test]
    fn test_contract_row_normalizes_float_artifact_id() {
        let row: ContractRow = serde_json::from_value(json!({
            "Contract": 12345.0,
            "Maid Nationality During Payroll Month": "Filipina",
            "Contract Type": " Standard ",
            "Amount Of Payment": "1,600",
            "Start Of Contract": "2025-06-15",
            "Upgrading Nationality Payment Amount": null,
            "Pro-Rated": 650
        }))
        .unwrap();

        let record = row.to_record(&AuditConfig::default());
        assert_eq!(record.id, "12345");
        assert_eq!(record.nationality_category, "Filipina");
        assert_eq!(record.contract_type, "Standard");
        assert_eq!(record.amount_paid, Some(Decimal::new(1600, 0)));
        assert_eq!(
            record.start_of_contract,
            NaiveDate::from_ymd_opt(2025, 6, 15)
        );
        assert_eq!(record.upgrade_amount, None);
        assert_eq!(record.pro_rated, Some(Decimal::new(650, 0)));
    }

    #[test]
    fn test_unrecognized_nationality_buckets_to_other() {
        let row: ContractRow = serde_json::from_value(json!({
            "Contract": "A100",
            "Maid Nationality During Payroll Month": "Kenyan"
        }))
        .unwrap();
        let record = row.to_record(&AuditConfig::default());
        assert_eq!(record.nationality_category, "Other");
    }

    #[test]
    fn test_payroll_row_strips_prefix_and_maps_enums() {
        let row: PayrollRow = serde_json::from_value(json!({
            "Contract Name": "Contr-A100",
            "Status": "WITH_CLIENT",
            "Type Of maid": "CC"
        }))
        .unwrap();

        let record = row.to_record(&AuditConfig::default());
        assert_eq!(record.contract_id, "A100");
        assert_eq!(record.status, ContractStatus::WithClient);
        assert_eq!(record.maid_type, MaidType::Cc);
        assert!(record.is_active());
    }

    #[test]
    fn test_exception_row_sentinel_and_amount() {
        let config = AuditConfig::default();

        let waived: ExceptionRow = serde_json::from_value(json!({
            "Cont #": "C300.0",
            "Monthly Payment": "N/A"
        }))
        .unwrap();
        let record = waived.to_record(&config);
        assert_eq!(record.contract_id, "C300");
        assert_eq!(record.payment, ApprovedPayment::Waived);

        let floored: ExceptionRow = serde_json::from_value(json!({
            "Cont #": "C301",
            "Monthly Payment": 1450
        }))
        .unwrap();
        assert_eq!(
            floored.to_record(&config).payment,
            ApprovedPayment::Amount(Decimal::new(1450, 0))
        );
    }

    #[test]
    fn test_price_row_normalization() {
        let row: PriceTableRow = serde_json::from_value(json!({
            "Nationality": "Ethiopian",
            "Contract Type": "Standard",
            "Start Date": "2025-01-01",
            "End Date": "2025-12-31",
            "Minimum monthly payment + VAT": "1200"
        }))
        .unwrap();

        let record = row.to_record(&AuditConfig::default());
        assert_eq!(record.nationality_category, "Ethiopian");
        assert_eq!(record.valid_from, NaiveDate::from_ymd_opt(2025, 1, 1));
        assert_eq!(record.valid_to, NaiveDate::from_ymd_opt(2025, 12, 31));
        assert_eq!(record.minimum_payment, Some(Decimal::new(1200, 0)));
    }

    #[test]
    fn test_missing_cells_default_to_null() {
        let row: ContractRow = serde_json::from_value(json!({ "Contract": "A100" })).unwrap();
        let record = row.to_record(&AuditConfig::default());
        assert_eq!(record.nationality_category, "Other");
        assert_eq!(record.amount_paid, None);
        assert_eq!(record.start_of_contract, None);
    }
}
