//! Contract for the external test-execution engine.

use crate::bug::TestCase;
use std::time::Duration;

/// Verdict reported by the harness for one test run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarnessOutcome {
    pub passed: bool,
    pub duration: Duration,
}

/// Failures surfaced by the external engine.
///
/// These are propagated to the caller unchanged; the core performs no
/// retry of its own.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// The container is gone or was never started.
    #[error("container [{0}] is not reachable")]
    ContainerUnreachable(String),

    /// The test process could not be spawned or crashed outside the
    /// test's own control flow.
    #[error("test process failed: {0}")]
    ProcessFailed(String),

    /// The harness's own time limit elapsed before the test finished.
    #[error("test run exceeded the harness time limit")]
    TimedOut,
}

/// The external engine that runs a single test inside a container.
///
/// `run_test` blocks until the test process completes; any timeout or
/// cancellation policy lives behind this trait, not in the core.
pub trait TestHarness: Send + Sync {
    fn run_test(
        &self,
        container_id: &str,
        test: &TestCase,
    ) -> Result<HarnessOutcome, HarnessError>;
}
