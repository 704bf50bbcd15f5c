//! Exception resolution.
//!
//! Contracts listed in the exceptions table carry a manually approved
//! payment floor that replaces the standard price-table lookup for the
//! current-price check and suppresses every later check in the cascade.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{ApprovedPayment, CheckOutcome, ExceptionRecord};

/// Per-run index from normalized contract id to its approved payment.
///
/// When the same id appears more than once, the first row wins.
#[derive(Debug, Clone)]
pub struct ExceptionIndex {
    by_id: HashMap<String, ApprovedPayment>,
}

impl ExceptionIndex {
    /// Builds the index from the exceptions table.
    pub fn build(exceptions: &[ExceptionRecord]) -> Self {
        let mut by_id = HashMap::with_capacity(exceptions.len());
        for record in exceptions {
            by_id
                .entry(record.contract_id.clone())
                .or_insert_with(|| record.payment.clone());
        }
        Self { by_id }
    }

    /// Looks up the approved payment for a normalized contract id.
    pub fn lookup(&self, contract_id: &str) -> Option<&ApprovedPayment> {
        self.by_id.get(contract_id)
    }
}

/// Judges an exceptional contract's current-price compliance from its
/// approved payment.
///
/// A waived floor is automatically compliant regardless of the amount paid.
/// A concrete floor requires `amount_paid >= floor`; a missing or
/// unparseable amount, or an unparseable stored floor, is non-compliant.
pub fn exceptional_compliance(
    payment: &ApprovedPayment,
    amount_paid: Option<Decimal>,
) -> CheckOutcome {
    match payment {
        ApprovedPayment::Waived => CheckOutcome::Compliant,
        ApprovedPayment::Invalid => CheckOutcome::NonCompliant,
        ApprovedPayment::Amount(floor) => match amount_paid {
            Some(amount) => (amount >= *floor).into(),
            None => CheckOutcome::NonCompliant,
        },
    }
}
