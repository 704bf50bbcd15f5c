//! Application state for the Contract Payment Audit Engine API.

use std::sync::Arc;

use crate::config::AuditConfig;

/// Shared application state.
///
/// Contains resources shared across all request handlers, currently just
/// the audit configuration.
#[derive(Clone)]
pub struct AppState {
    config: Arc<AuditConfig>,
}

impl AppState {
    /// Creates a new application state with the given configuration.
    pub fn new(config: AuditConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the audit configuration.
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Required for axum state
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_state_exposes_config() {
        let state = AppState::new(AuditConfig::default());
        assert_eq!(state.config().payroll_name_prefix, "Contr-");
    }
}
