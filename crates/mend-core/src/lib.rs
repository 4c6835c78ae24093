//! # mend-core
//!
//! Test-suite registry and polymorphic execution abstraction for the
//! Mend automated-repair framework.
//!
//! This crate provides:
//! - The `Test` and `TestOutcome` value types
//! - The `TestSuite` and `TestSuiteConfig` contracts implemented by every backend
//! - The startup-time `TestSuiteRegistry` for configuration-driven dispatch
//! - Collaborator contracts: the shared `Environment`, opaque `ProgramContainer`
//!   handles, the `Bug` target-program descriptor, and the external `TestHarness`
//!
//! Concrete backends live in `mend-adapters`.

mod bug;
mod config;
mod container;
mod environment;
mod harness;
mod registry;
mod suite;
pub mod testing;

pub use bug::{Bug, TestCase};
pub use config::{ConfigDict, ConfigError, TestSuiteConfig};
pub use container::ProgramContainer;
pub use environment::Environment;
pub use harness::{HarnessError, HarnessOutcome, TestHarness};
pub use registry::{FromConfigError, RegistryError, TestSuiteFactory, TestSuiteRegistry};
pub use suite::{BuildError, ExecuteError, TestLookupError, TestSuite};
pub use test::{Test, TestOutcome};
