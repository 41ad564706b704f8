//! Controller configuration.

use crate::builder::BuildError;
use serde::{Deserialize, Serialize};

/// Tunables for an [`EntityController`](crate::entity::EntityController).
///
/// Missing fields fall back to [`ControllerConfig::default`], so partial
/// JSON documents are accepted.
///
/// # Example
///
/// ```rust
/// use tickstate::ControllerConfig;
///
/// let config = ControllerConfig::from_json(r#"{ "history_limit": 8 }"#).unwrap();
/// assert_eq!(config.history_limit, Some(8));
/// assert!(!config.trace_ticks);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Number of committed transitions kept for diagnostics; `None` keeps all
    pub history_limit: Option<usize>,

    /// Emit a trace event for every physics and frame tick
    pub trace_ticks: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            history_limit: Some(64),
            trace_ticks: false,
        }
    }
}

impl ControllerConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| BuildError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        if self.history_limit == Some(0) {
            return Err(BuildError::InvalidConfig(
                "history_limit must be at least 1; use null for unbounded".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(ControllerConfig::default().validate().is_ok());
    }

    #[test]
    fn from_json_fills_missing_fields() {
        let config = ControllerConfig::from_json(r#"{ "trace_ticks": true }"#).unwrap();
        assert!(config.trace_ticks);
        assert_eq!(config.history_limit, Some(64));
    }

    #[test]
    fn null_limit_is_unbounded() {
        let config = ControllerConfig::from_json(r#"{ "history_limit": null }"#).unwrap();
        assert_eq!(config.history_limit, None);
    }

    #[test]
    fn zero_limit_is_rejected() {
        let result = ControllerConfig::from_json(r#"{ "history_limit": 0 }"#);
        assert!(matches!(result, Err(BuildError::InvalidConfig(_))));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let result = ControllerConfig::from_json("{ history_limit: ");
        assert!(matches!(result, Err(BuildError::InvalidConfig(_))));
    }
}
