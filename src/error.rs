//! Error types for setup-time operations
//!
//! Nothing in the per-frame path returns an error. Missing collaborators degrade
//! to a logged no-op; these types cover configuration loading, validation and
//! scene wiring, plus the effect spawner's best-effort failures.

use std::path::PathBuf;

/// Result alias for setup-time operations
pub type MotionResult<T> = Result<T, MotionError>;

#[derive(Debug, thiserror::Error)]
pub enum MotionError {
    #[error("No {component} binding configured and nothing tagged '{tag}' was found")]
    MissingBinding { component: String, tag: String },

    #[error("Invalid configuration value '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Failed to read config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {source}")]
    ConfigParse {
        #[source]
        source: toml::de::Error,
    },
}

/// Failure reported by an effect spawner. Never propagated past the locomotor.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EffectError {
    #[error("No effect asset assigned")]
    MissingAsset,
}

/// Create an invalid configuration error
pub fn invalid_config(field: &str, reason: impl std::fmt::Display) -> MotionError {
    MotionError::InvalidConfig {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a missing binding error
pub fn missing_binding(component: &str, tag: &str) -> MotionError {
    MotionError::MissingBinding {
        component: component.to_string(),
        tag: tag.to_string(),
    }
}
