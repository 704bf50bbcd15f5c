//! Price-table lookup.
//!
//! Resolves the applicable minimum-payment threshold for a (nationality
//! category, contract type) key, either the current threshold or the one in
//! force at a contract's start date. Rows are indexed by key once per run
//! rather than rescanned per record.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::PriceRow;

/// Per-run index of price rows keyed by (nationality category, contract
/// type).
#[derive(Debug, Clone)]
pub struct PriceIndex {
    by_key: HashMap<(String, String), Vec<PriceRow>>,
}

impl PriceIndex {
    /// Builds the index from the price table.
    pub fn build(prices: &[PriceRow]) -> Self {
        let mut by_key: HashMap<(String, String), Vec<PriceRow>> = HashMap::new();
        for row in prices {
            by_key
                .entry((row.nationality_category.clone(), row.contract_type.clone()))
                .or_default()
                .push(row.clone());
        }
        Self { by_key }
    }

    fn rows(&self, category: &str, contract_type: &str) -> &[PriceRow] {
        self.by_key
            .get(&(category.to_string(), contract_type.to_string()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Resolves the current minimum payment for a key: the row with the
    /// maximum validity end date.
    ///
    /// Rows without a parseable end date cannot qualify. When two rows
    /// share the maximum end date the larger payment wins, so the result
    /// stays deterministic even over malformed overlapping rows. A
    /// non-numeric price on the selected row is a lookup failure. `None`
    /// means the key cannot be priced; the owning check resolves that to
    /// "No".
    pub fn current_price(&self, category: &str, contract_type: &str) -> Option<Decimal> {
        self.rows(category, contract_type)
            .iter()
            .filter(|row| row.valid_to.is_some())
            .max_by_key(|row| (row.valid_to, row.minimum_payment))
            .and_then(|row| row.minimum_payment)
    }

    /// Resolves the minimum payment in force at `date` for a key.
    ///
    /// Among rows whose closed validity window contains the date, the
    /// maximum payment is returned. Windows should not overlap; taking the
    /// maximum is a defensive tie-break so overlapping rows cannot crash
    /// or flip-flop the result.
    pub fn price_at(
        &self,
        category: &str,
        contract_type: &str,
        date: NaiveDate,
    ) -> Option<Decimal> {
        self.rows(category, contract_type)
            .iter()
            .filter(|row| row.covers(date))
            .filter_map(|row| row.minimum_payment)
            .max()
    }

    /// Returns true if any priced row for the key is within `tolerance`
    /// (inclusive, absolute) of `amount` — the historical-price tolerance
    /// check.
    pub fn any_within(
        &self,
        category: &str,
        contract_type: &str,
        amount: Decimal,
        tolerance: Decimal,
    ) -> bool {
        self.rows(category, contract_type)
            .iter()
            .filter_map(|row| row.minimum_payment)
            .any(|price| (amount - price).abs() <= tolerance)
    }
}
