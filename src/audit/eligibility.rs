//! Eligibility filtering.
//!
//! A contract is subject to audit only if its normalized id appears among
//! payroll rows whose status is `WITH_CLIENT` and whose maid type is `CC`.
//! The eligible-id set is built once per run; membership is an exact string
//! match on normalized ids.

use std::collections::HashSet;

use crate::models::PayrollRecord;

/// The set of contract ids active this payroll month.
#[derive(Debug, Clone)]
pub struct EligibleSet {
    ids: HashSet<String>,
}

impl EligibleSet {
    /// Builds the eligible set from the payroll extract.
    pub fn build(payroll: &[PayrollRecord]) -> Self {
        let ids = payroll
            .iter()
            .filter(|row| row.is_active())
            .map(|row| row.contract_id.clone())
            .collect();
        Self { ids }
    }

    /// Returns true if the given normalized contract id is eligible.
    pub fn contains(&self, contract_id: &str) -> bool {
        self.ids.contains(contract_id)
    }

    /// The number of distinct eligible contract ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if no contract is eligible.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContractStatus, MaidType};

    fn row(id: &str, status: ContractStatus, maid_type: MaidType) -> PayrollRecord {
        PayrollRecord {
            contract_id: id.to_string(),
            status,
            maid_type,
        }
    }

    #[test]
    fn test_only_with_client_cc_rows_are_eligible() {
        let payroll = vec![
            row("A100", ContractStatus::WithClient, MaidType::Cc),
            row("B200", ContractStatus::Other, MaidType::Cc),
            row("C300", ContractStatus::WithClient, MaidType::Other),
            row("D400", ContractStatus::Other, MaidType::Other),
        ];

        let eligible = EligibleSet::build(&payroll);
        assert!(eligible.contains("A100"));
        assert!(!eligible.contains("B200"));
        assert!(!eligible.contains("C300"));
        assert!(!eligible.contains("D400"));
        assert_eq!(eligible.len(), 1);
    }

    #[test]
    fn test_membership_is_exact_string_match() {
        let payroll = vec![row("A100", ContractStatus::WithClient, MaidType::Cc)];
        let eligible = EligibleSet::build(&payroll);

        assert!(eligible.contains("A100"));
        assert!(!eligible.contains("a100"));
        assert!(!eligible.contains("A100 "));
    }

    #[test]
    fn test_empty_payroll_yields_empty_set() {
        let eligible = EligibleSet::build(&[]);
        assert!(eligible.is_empty());
        assert!(!eligible.contains("A100"));
    }

    #[test]
    fn test_duplicate_ids_collapse() {
        let payroll = vec![
            row("A100", ContractStatus::WithClient, MaidType::Cc),
            row("A100", ContractStatus::WithClient, MaidType::Cc),
        ];
        let eligible = EligibleSet::build(&payroll);
        assert_eq!(eligible.len(), 1);
    }
}
