//! The audit core: eligibility filtering, exception resolution, price
//! lookup, and the ordered cascade of compliance checks.
//!
//! Everything here is pure in-memory batch evaluation over one immutable
//! snapshot of the four input tables. Lookup structures are built once per
//! run so the engine's cost stays linear in total record count.

mod eligibility;
mod evaluator;
mod exceptions;
mod price_lookup;

pub use eligibility::EligibleSet;
pub use evaluator::{AuditRun, audit_contracts, evaluate_contract};
pub use exceptions::{ExceptionIndex, exceptional_compliance};
pub use price_lookup::PriceIndex;
