//! Audit configuration.
//!
//! The engine's small amount of policy — which nationality labels are
//! recognized, the payroll name prefix, the exception waiver sentinels, and
//! the old-price tolerance — lives in an explicit configuration rather than
//! in code, loadable from a YAML file with compiled-in defaults.

mod loader;
mod types;

pub use loader::load_config;
pub use types::{AuditConfig, OTHER_CATEGORY};
