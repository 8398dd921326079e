//! Parameter source port

use super::super::models::ConfigError;

/// Read access to project parameters addressed by dotted keys
pub trait ParameterSource {
    /// Get a string parameter, `None` when the key is unset
    ///
    /// Fails with `InvalidParameter` when the value is not a string.
    fn string(&self, key: &str) -> Result<Option<String>, ConfigError>;

    /// Get a required string parameter
    fn require_string(&self, key: &str) -> Result<String, ConfigError> {
        self.string(key)?.ok_or_else(|| ConfigError::MissingParameter(key.to_string()))
    }
}
