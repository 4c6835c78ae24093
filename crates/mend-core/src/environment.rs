//! Shared backend services available to every test suite.

use crate::harness::TestHarness;
use std::fmt;
use std::sync::Arc;

/// Wires backend services together.
///
/// Shared by every suite constructed in a process and never owned by
/// any of them; read-only from the suites' perspective.
#[derive(Clone)]
pub struct Environment {
    harness: Arc<dyn TestHarness>,
}

impl Environment {
    pub fn new(harness: Arc<dyn TestHarness>) -> Self {
        Self { harness }
    }

    /// Handle to the external test-execution engine.
    pub fn harness(&self) -> &dyn TestHarness {
        self.harness.as_ref()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment").finish_non_exhaustive()
    }
}
