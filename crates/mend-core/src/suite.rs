//! The uniform contract every test-suite backend implements.

use crate::container::ProgramContainer;
use crate::harness::HarnessError;
use crate::test::{Test, TestOutcome};

/// Raised when a test name is absent from a suite.
#[derive(Debug, thiserror::Error)]
pub enum TestLookupError {
    #[error("no test named [{0}] in this suite")]
    NotFound(String),
}

/// Failures surfaced by [`TestSuite::execute`].
#[derive(Debug, thiserror::Error)]
pub enum ExecuteError {
    /// The given test is not a member of this suite.
    #[error("test [{0}] does not belong to this suite")]
    UnknownTest(String),

    /// The external harness failed; propagated unchanged.
    #[error(transparent)]
    Harness(#[from] HarnessError),
}

/// Construction failure reported by a backend factory.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The target program declares two tests with the same name.
    /// Suites index tests by name, so construction is rejected rather
    /// than letting one entry shadow the other.
    #[error("duplicate test name [{0}] in target program")]
    DuplicateTestName(String),

    /// Backend-specific construction failure.
    #[error("{0}")]
    Backend(String),
}

/// A named, immutable collection of tests bound to one target program,
/// with the ability to execute any of them inside a container.
///
/// Implementations hold no mutable state: once constructed, the set of
/// tests never changes, and `execute` is a pure request/response
/// against the external harness. A suite is therefore safe to share
/// across threads for lookups and iteration; concurrent `execute`
/// calls are safe as long as each uses a distinct container.
pub trait TestSuite: Send + Sync {
    /// Number of distinct tests in the suite.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over every test exactly once.
    ///
    /// The order is not significant but is stable across repeated
    /// iterations of the same suite instance.
    fn tests(&self) -> Box<dyn Iterator<Item = &Test> + '_>;

    /// Looks up a test by exact name.
    fn test(&self, name: &str) -> Result<&Test, TestLookupError>;

    /// Executes one test inside the given container, blocking until
    /// the harness reports an outcome.
    ///
    /// The test must be a member of this suite; `execute` fails fast
    /// with [`ExecuteError::UnknownTest`] otherwise. `coverage`
    /// requests a coverage-instrumented run; a backend without such a
    /// mode runs the test normally instead of failing.
    fn execute(
        &self,
        container: &ProgramContainer,
        test: &Test,
        coverage: bool,
    ) -> Result<TestOutcome, ExecuteError>;
}
