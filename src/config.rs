use serde::{Deserialize, Serialize};

use crate::Result;

/// Configuration shared by the shortest path algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SsspConfig {
    /// Check the preconditions Dijkstra (non-negative weights) and DAG
    /// shortest path (acyclic input) rely on. When disabled, violating
    /// them yields unspecified distances but never a panic.
    pub check_preconditions: bool,

    /// Let Bellman-Ford stop once a full pass relaxes nothing.
    /// The negative cycle pass still runs.
    pub early_exit: bool,
}

impl SsspConfig {
    /// Creates the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from JSON, missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Enable or disable runtime precondition checks
    pub fn with_precondition_checks(mut self, enabled: bool) -> Self {
        self.check_preconditions = enabled;
        self
    }

    /// Enable or disable Bellman-Ford early exit
    pub fn with_early_exit(mut self, enabled: bool) -> Self {
        self.early_exit = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let config = SsspConfig::from_json(r#"{ "early_exit": true }"#).unwrap();
        assert!(config.early_exit);
        assert!(!config.check_preconditions);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = SsspConfig::from_json("{ early_exit: ").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn builder_round_trips_through_json() {
        let config = SsspConfig::new()
            .with_precondition_checks(true)
            .with_early_exit(true);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(SsspConfig::from_json(&json).unwrap(), config);
    }
}
