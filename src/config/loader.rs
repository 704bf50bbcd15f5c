//! Configuration file loading.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::AuditConfig;

/// Loads an [`AuditConfig`] from a YAML file.
///
/// Fields absent from the file keep their compiled-in defaults.
///
/// # Errors
///
/// Returns [`EngineError::ConfigNotFound`] if the file does not exist or
/// cannot be read, and [`EngineError::ConfigParseError`] if it is not valid
/// YAML for the configuration shape.
pub fn load_config(path: impl AsRef<Path>) -> EngineResult<AuditConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path.display().to_string(),
    })?;

    serde_yaml::from_str(&contents).map_err(|err| EngineError::ConfigParseError {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}
