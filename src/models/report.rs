//! Check outcomes and run-level diagnostics.
//!
//! Internally every check resolves to a three-valued [`CheckOutcome`]; the
//! literal `"Yes"` / `"No"` / `""` cells the operations team expects are
//! produced only at the serialization boundary.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The outcome of a single compliance check for one contract.
///
/// `NotApplicable` means the check was never evaluated (the contract was
/// ineligible, or an earlier check short-circuited the cascade). It is
/// distinct from `NonCompliant`, which means the check ran and failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckOutcome {
    /// The check ran and the contract passed (`"Yes"`).
    Compliant,
    /// The check ran and the contract failed (`"No"`).
    NonCompliant,
    /// The check was not evaluated for this contract (empty cell).
    #[default]
    NotApplicable,
}

impl CheckOutcome {
    /// Renders the outcome as the output-cell literal.
    pub fn as_cell(self) -> &'static str {
        match self {
            CheckOutcome::Compliant => "Yes",
            CheckOutcome::NonCompliant => "No",
            CheckOutcome::NotApplicable => "",
        }
    }

    /// Returns true if the check ran and passed.
    pub fn is_compliant(self) -> bool {
        self == CheckOutcome::Compliant
    }

    /// Returns true if the check ran and failed.
    pub fn is_non_compliant(self) -> bool {
        self == CheckOutcome::NonCompliant
    }
}

impl From<bool> for CheckOutcome {
    fn from(passed: bool) -> Self {
        if passed { CheckOutcome::Compliant } else { CheckOutcome::NonCompliant }
    }
}

impl Serialize for CheckOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_cell())
    }
}

impl<'de> Deserialize<'de> for CheckOutcome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let cell = String::deserialize(deserializer)?;
        match cell.as_str() {
            "Yes" => Ok(CheckOutcome::Compliant),
            "No" => Ok(CheckOutcome::NonCompliant),
            "" => Ok(CheckOutcome::NotApplicable),
            other => Err(serde::de::Error::custom(format!(
                "expected \"Yes\", \"No\", or \"\", got \"{other}\""
            ))),
        }
    }
}

/// The seven check outcomes computed for one contract, in output column
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContractChecks {
    /// Whether the contract is active and subject to audit.
    pub to_check: CheckOutcome,
    /// Whether the contract is listed in the exceptions table.
    pub exceptional_case: CheckOutcome,
    /// Compliance against the current price (or the exception floor).
    pub price_of_now: CheckOutcome,
    /// Compliance against the price in force at contract start.
    pub contract_start_price: CheckOutcome,
    /// Compliance assuming the nationality-upgrade payment is added.
    pub upgrading_nationality: CheckOutcome,
    /// Compliance against the record's pro-rated threshold.
    pub pro_rated: CheckOutcome,
    /// Tolerance match against any historical price for the key.
    pub old_price: CheckOutcome,
}

/// A non-fatal diagnostic generated during an audit run.
///
/// Warnings indicate conditions that don't prevent evaluation but usually
/// mean the inputs need attention, such as an id-normalization mismatch
/// leaving every contract ineligible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// Identifies one of the four input tables, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputTable {
    /// The contract-audit table.
    ContractAudit,
    /// The payroll extract.
    Payroll,
    /// The exceptions table.
    Exceptions,
    /// The price table.
    PriceTable,
}

impl std::fmt::Display for InputTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputTable::ContractAudit => write!(f, "contract audit"),
            InputTable::Payroll => write!(f, "payroll"),
            InputTable::Exceptions => write!(f, "exceptions"),
            InputTable::PriceTable => write!(f, "price table"),
        }
    }
}
