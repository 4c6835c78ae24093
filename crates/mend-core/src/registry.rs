//! Startup-time registry mapping backend names and config types to
//! concrete test-suite implementations.
//!
//! The registry is built once, by an explicit and ordered sequence of
//! `register` calls at process startup, and is read-only afterwards.
//! Any registration failure means two backends collided on a name or a
//! config type; that is a programming error and must abort startup.

use crate::bug::Bug;
use crate::config::{ConfigDict, ConfigError, TestSuiteConfig};
use crate::environment::Environment;
use crate::suite::{BuildError, TestSuite};
use std::any::TypeId;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Per-backend companion of a [`TestSuite`] implementation.
///
/// A factory knows the backend's registered name, the exact type of
/// its config struct, how to deserialize that config from a generic
/// mapping, and how to construct the suite itself. Because a factory
/// can only be written for a fully implemented backend, registering
/// one is proof that the backend satisfies the whole contract.
pub trait TestSuiteFactory: Send + Sync {
    /// Name the backend registers under (e.g. `"native"`).
    fn backend_name(&self) -> &'static str;

    /// Exact type of the backend's config struct.
    fn config_type(&self) -> TypeId;

    /// Deserializes the backend config from a generic key-value
    /// mapping. Relative paths in the config are resolved against
    /// `base_dir` when one is given.
    fn config_from_dict(
        &self,
        dict: &ConfigDict,
        base_dir: Option<&Path>,
    ) -> Result<Box<dyn TestSuiteConfig>, ConfigError>;

    /// Constructs the suite against a running environment and target
    /// program.
    fn build(
        &self,
        config: &dyn TestSuiteConfig,
        environment: Arc<Environment>,
        bug: &Bug,
    ) -> Result<Box<dyn TestSuite>, BuildError>;
}

/// Failures raised while registering or resolving backends.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("backend name already in use [{0}]")]
    DuplicateName(String),

    #[error("config type of backend [{new}] already in use by backend [{existing}]")]
    DuplicateConfigType {
        new: &'static str,
        existing: &'static str,
    },

    #[error("no backend registered under name [{0}]")]
    UnknownName(String),

    #[error("no backend registered for config {0}")]
    UnregisteredConfigType(String),
}

/// Failures raised by [`TestSuiteRegistry::from_config`].
#[derive(Debug, thiserror::Error)]
pub enum FromConfigError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Two mutually consistent lookup tables over the registered backends:
/// by name and by config type.
#[derive(Default)]
pub struct TestSuiteRegistry {
    by_name: HashMap<String, Arc<dyn TestSuiteFactory>>,
    by_config: HashMap<TypeId, Arc<dyn TestSuiteFactory>>,
}

impl TestSuiteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a backend under its name and config type.
    ///
    /// Both tables are checked before either is touched, so a failed
    /// registration leaves the registry exactly as it was.
    pub fn register(&mut self, factory: Arc<dyn TestSuiteFactory>) -> Result<(), RegistryError> {
        let name = factory.backend_name();
        if self.by_name.contains_key(name) {
            return Err(RegistryError::DuplicateName(name.to_string()));
        }
        if let Some(existing) = self.by_config.get(&factory.config_type()) {
            return Err(RegistryError::DuplicateConfigType {
                new: name,
                existing: existing.backend_name(),
            });
        }
        tracing::debug!(backend = name, "registered test-suite backend");
        self.by_name.insert(name.to_string(), Arc::clone(&factory));
        self.by_config.insert(factory.config_type(), factory);
        Ok(())
    }

    /// Returns the factory registered under `name`.
    pub fn factory_for_name(
        &self,
        name: &str,
    ) -> Result<&Arc<dyn TestSuiteFactory>, RegistryError> {
        self.by_name
            .get(name)
            .ok_or_else(|| RegistryError::UnknownName(name.to_string()))
    }

    /// Returns the factory registered for the exact type of `config`.
    ///
    /// The lookup is by `TypeId`; there is no fallback to related
    /// config types.
    pub fn resolve_by_config(
        &self,
        config: &dyn TestSuiteConfig,
    ) -> Result<&Arc<dyn TestSuiteFactory>, RegistryError> {
        self.by_config
            .get(&config.as_any().type_id())
            .ok_or_else(|| RegistryError::UnregisteredConfigType(format!("{config:?}")))
    }

    /// Constructs a suite for an arbitrary config by dispatching to the
    /// backend registered for the config's exact type.
    ///
    /// Fails before any container or harness interaction if the config
    /// type is unregistered.
    pub fn from_config(
        &self,
        config: &dyn TestSuiteConfig,
        environment: Arc<Environment>,
        bug: &Bug,
    ) -> Result<Box<dyn TestSuite>, FromConfigError> {
        let factory = self.resolve_by_config(config)?;
        tracing::debug!(
            backend = factory.backend_name(),
            bug = bug.id(),
            "constructing test suite"
        );
        Ok(factory.build(config, environment, bug)?)
    }

    /// Registered backend names, sorted for stable diagnostics output.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
