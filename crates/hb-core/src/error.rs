//! Errors raised while loading engine data
//!
//! The status computations themselves are total; only configuration and
//! catalog input can be rejected.

use thiserror::Error;

use crate::object::{ArtifactId, BaseItemId, EgoId};

/// Rejected engine configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Rejected item catalog data
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate base item id {0:?}")]
    DuplicateBaseItem(BaseItemId),

    #[error("Duplicate artifact id {0:?}")]
    DuplicateArtifact(ArtifactId),

    #[error("Duplicate ego id {0:?}")]
    DuplicateEgo(EgoId),

    #[error("Artifact '{artifact}' refers to unknown base item {base:?}")]
    UnknownBaseItem { artifact: String, base: BaseItemId },

    #[error("Base item '{name}' has {dd} dice with zero sides")]
    ZeroSidedDice { name: String, dd: i16 },
}
