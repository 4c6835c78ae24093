//! # mend-adapters
//!
//! Test-suite backends for the Mend automated-repair framework.
//!
//! Each backend implements the `TestSuite` contract from `mend-core`:
//! - `native`: wraps the test cases the external harness already knows
//!   about for the target program
//! - `shell`: command-template suites with an explicit test list
//!
//! [`default_registry`] performs the explicit startup registration of
//! every built-in backend.

mod native;
mod shell;

pub use native::{NativeSuiteConfig, NativeTestSuite, NativeTestSuiteFactory};
pub use shell::{ShellSuiteConfig, ShellTestSuite, ShellTestSuiteFactory};

use mend_core::{RegistryError, TestSuiteRegistry};
use std::sync::Arc;

/// Builds the registry of built-in backends.
///
/// Intended to be called once at process startup. A failure here means
/// two backends collided on a name or config type and must abort
/// startup; the registry must not be used after a failed build.
pub fn default_registry() -> Result<TestSuiteRegistry, RegistryError> {
    let mut registry = TestSuiteRegistry::new();
    registry.register(Arc::new(NativeTestSuiteFactory))?;
    registry.register(Arc::new(ShellTestSuiteFactory))?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_registers_builtin_backends() {
        let registry = default_registry().unwrap();
        assert_eq!(registry.names(), vec!["native", "shell"]);
    }
}
