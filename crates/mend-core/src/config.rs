//! Construction-time configuration contract for test-suite backends.

use std::any::Any;
use std::fmt;

/// Generic key-value mapping from which backend configs are deserialized.
pub type ConfigDict = serde_json::Map<String, serde_json::Value>;

/// Marker contract for backend configuration values.
///
/// Each backend declares exactly one concrete config type and registers
/// it with the [`TestSuiteRegistry`](crate::TestSuiteRegistry); the
/// relation is injective, so a config value identifies its backend.
/// Configs are plain immutable value structs: they are deserialized
/// once (see [`TestSuiteFactory::config_from_dict`](crate::TestSuiteFactory::config_from_dict)),
/// consumed once to construct a suite, and carry no behavior of their own.
pub trait TestSuiteConfig: Any + fmt::Debug + Send + Sync {
    /// Upcast for exact-type dispatch in the registry.
    fn as_any(&self) -> &dyn Any;
}

/// Errors produced while deserializing a backend config from a generic
/// key-value mapping.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required field is absent from the mapping.
    #[error("missing required field [{0}]")]
    MissingField(&'static str),

    /// A field is present but its value is unusable.
    #[error("invalid value for field [{field}]: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },

    /// The mapping as a whole failed to deserialize.
    #[error("malformed backend config: {0}")]
    Malformed(#[from] serde_json::Error),
}
