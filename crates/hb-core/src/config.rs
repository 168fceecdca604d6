//! Engine configuration
//!
//! Rule switches the providers consult. Loaded from JSON; every field has a
//! default so an empty object is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Mounts contribute to the rider; when off a mount is ignored.
    pub riding_enabled: bool,
    /// Mutations grant traits and stat changes.
    pub mutations_enabled: bool,
    /// Fatal-spot attempts teach monsters that resist them.
    pub monster_learning: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            riding_enabled: true,
            mutations_enabled: true,
            monster_learning: true,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        tracing::debug!(?config, "engine configuration loaded");
        Ok(config)
    }
}
