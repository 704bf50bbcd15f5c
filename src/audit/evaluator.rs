//! The ordered cascade of compliance checks.
//!
//! For every contract the evaluator runs the fixed sequence: eligibility,
//! exception membership, current-price compliance, contract-start-price
//! compliance, nationality-upgrade compliance, pro-rated compliance, and
//! finally the always-on old-price tolerance check. Each cascade step is
//! evaluated only when every prior applicable step explicitly failed;
//! anything short-circuited stays blank.
//!
//! The evaluator never raises for row-level issues. Unparseable amounts,
//! missing dates, and unpriceable keys all degrade to a defined outcome so
//! a batch always completes with one result per input row, in input order.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::config::AuditConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditWarning, CheckOutcome, ContractChecks, ContractRecord, ExceptionRecord, InputTable,
    PayrollRecord, PriceRow,
};

use super::eligibility::EligibleSet;
use super::exceptions::{ExceptionIndex, exceptional_compliance};
use super::price_lookup::PriceIndex;

/// Warning code raised when no contract in the batch is eligible, which
/// usually means an id-normalization mismatch between the audit table and
/// the payroll extract.
pub const ALL_INELIGIBLE_WARNING: &str = "ALL_CONTRACTS_INELIGIBLE";

/// The outcome of one audit run: one [`ContractChecks`] per input contract,
/// in input order, plus any run-level diagnostics.
#[derive(Debug, Clone)]
pub struct AuditRun {
    /// Check outcomes, aligned 1:1 with the input contract rows.
    pub checks: Vec<ContractChecks>,
    /// Non-fatal diagnostics for the run.
    pub warnings: Vec<AuditWarning>,
}

/// Audits a batch of contracts against the payroll extract, exceptions
/// table, and price table.
///
/// Builds the per-run lookup structures once, then evaluates each contract
/// independently; output order matches input order.
///
/// # Errors
///
/// Returns [`EngineError::NothingToProcess`] when any of the four input
/// tables has zero rows. Row-level anomalies never error.
pub fn audit_contracts(
    contracts: &[ContractRecord],
    payroll: &[PayrollRecord],
    exceptions: &[ExceptionRecord],
    prices: &[PriceRow],
    month_start: NaiveDate,
    config: &AuditConfig,
) -> EngineResult<AuditRun> {
    for (table, is_empty) in [
        (InputTable::ContractAudit, contracts.is_empty()),
        (InputTable::Payroll, payroll.is_empty()),
        (InputTable::Exceptions, exceptions.is_empty()),
        (InputTable::PriceTable, prices.is_empty()),
    ] {
        if is_empty {
            return Err(EngineError::NothingToProcess { table });
        }
    }

    let eligible = EligibleSet::build(payroll);
    let exception_index = ExceptionIndex::build(exceptions);
    let price_index = PriceIndex::build(prices);

    let checks: Vec<ContractChecks> = contracts
        .iter()
        .map(|record| {
            evaluate_contract(
                record,
                &eligible,
                &exception_index,
                &price_index,
                month_start,
                config.old_price_tolerance,
            )
        })
        .collect();

    let mut warnings = Vec::new();
    if checks.iter().all(|c| c.to_check.is_non_compliant()) {
        warn!(
            contracts = contracts.len(),
            eligible_ids = eligible.len(),
            "No contract in the batch is eligible; audit and payroll ids probably do not line up"
        );
        warnings.push(AuditWarning {
            code: ALL_INELIGIBLE_WARNING.to_string(),
            message: format!(
                "None of the {} contracts matched an eligible payroll row; \
                 check id normalization between the audit table and the payroll extract",
                contracts.len()
            ),
            severity: "high".to_string(),
        });
    }

    info!(
        contracts = contracts.len(),
        eligible_ids = eligible.len(),
        warnings = warnings.len(),
        "Audit run complete"
    );

    Ok(AuditRun { checks, warnings })
}

/// Evaluates the full check cascade for one contract.
///
/// The fixed order and short-circuits:
///
/// 1. To Check: eligibility; ineligible contracts get blanks everywhere
///    else.
/// 2. Exceptional Case: exceptions-table membership. Exceptional contracts
///    resolve the current-price check from their approved floor and get
///    blanks for every later column.
/// 3. Price of Now: amount paid vs the current price.
/// 4. Contract Start Price: only when 3 failed; amount paid vs the price in
///    force at the contract start date.
/// 5. Upgrading Nationality: only when 3 and 4 failed; amount paid plus the
///    recorded upgrade payment vs the current price.
/// 6. Pro-Rated: only when 3, 4, and 5 failed; requires the contract to
///    have started within the audit month, then amount paid vs the stored
///    pro-rated threshold.
/// 7. Old Price: independent of the cascade; a tolerance match against any
///    historical price for the key.
pub fn evaluate_contract(
    record: &ContractRecord,
    eligible: &EligibleSet,
    exceptions: &ExceptionIndex,
    prices: &PriceIndex,
    month_start: NaiveDate,
    old_price_tolerance: Decimal,
) -> ContractChecks {
    let mut checks = ContractChecks::default();

    if !eligible.contains(&record.id) {
        // Blank means "not evaluated", so everything past To Check stays
        // NotApplicable for ineligible contracts.
        checks.to_check = CheckOutcome::NonCompliant;
        return checks;
    }
    checks.to_check = CheckOutcome::Compliant;

    let category = record.nationality_category.as_str();
    let contract_type = record.contract_type.as_str();

    if let Some(payment) = exceptions.lookup(&record.id) {
        checks.exceptional_case = CheckOutcome::Compliant;
        checks.price_of_now = exceptional_compliance(payment, record.amount_paid);
        return checks;
    }
    checks.exceptional_case = CheckOutcome::NonCompliant;

    checks.price_of_now = match (record.amount_paid, prices.current_price(category, contract_type))
    {
        (Some(amount), Some(price)) => (amount >= price).into(),
        _ => CheckOutcome::NonCompliant,
    };

    if checks.price_of_now.is_non_compliant() {
        let start_price = record
            .start_of_contract
            .and_then(|start| prices.price_at(category, contract_type, start));
        checks.contract_start_price = match (record.amount_paid, start_price) {
            (Some(amount), Some(price)) => (amount >= price).into(),
            _ => CheckOutcome::NonCompliant,
        };
    }

    if checks.price_of_now.is_non_compliant() && checks.contract_start_price.is_non_compliant() {
        checks.upgrading_nationality = match (
            record.amount_paid,
            record.upgrade_amount,
            prices.current_price(category, contract_type),
        ) {
            (Some(amount), Some(upgrade), Some(price)) => (amount + upgrade >= price).into(),
            _ => CheckOutcome::NonCompliant,
        };
    }

    if checks.price_of_now.is_non_compliant()
        && checks.contract_start_price.is_non_compliant()
        && checks.upgrading_nationality.is_non_compliant()
    {
        checks.pro_rated = if !record.started_within_month(month_start) {
            CheckOutcome::NonCompliant
        } else {
            match (record.amount_paid, record.pro_rated) {
                (Some(amount), Some(threshold)) => (amount >= threshold).into(),
                _ => CheckOutcome::NonCompliant,
            }
        };
    }

    checks.old_price = match record.amount_paid {
        Some(amount) => prices
            .any_within(category, contract_type, amount, old_price_tolerance)
            .into(),
        None => CheckOutcome::NonCompliant,
    };

    checks
}
