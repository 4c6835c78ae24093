//! Testing utilities: a scripted in-memory harness for deterministic tests.

use crate::bug::TestCase;
use crate::harness::{HarnessError, HarnessOutcome, TestHarness};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Record of one `run_test` invocation against the scripted harness.
#[derive(Debug, Clone)]
pub struct RunRecord {
    pub container_id: String,
    pub test_name: String,
    pub command: Option<String>,
}

/// Harness double that reports scripted outcomes keyed by test name.
///
/// Unknown test names fail the run with a process error; every
/// invocation is recorded for later inspection.
#[derive(Debug, Clone, Default)]
pub struct ScriptedHarness {
    state: Arc<Mutex<ScriptedState>>,
}

#[derive(Debug, Default)]
struct ScriptedState {
    outcomes: HashMap<String, HarnessOutcome>,
    runs: Vec<RunRecord>,
}

impl ScriptedHarness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the outcome reported for `test_name`.
    pub fn script(&self, test_name: impl Into<String>, passed: bool, duration: Duration) {
        self.state
            .lock()
            .unwrap()
            .outcomes
            .insert(test_name.into(), HarnessOutcome { passed, duration });
    }

    /// Returns the number of times the harness was invoked.
    pub fn run_count(&self) -> usize {
        self.state.lock().unwrap().runs.len()
    }

    /// Returns all recorded invocations.
    pub fn runs(&self) -> Vec<RunRecord> {
        self.state.lock().unwrap().runs.clone()
    }
}

impl TestHarness for ScriptedHarness {
    fn run_test(
        &self,
        container_id: &str,
        test: &TestCase,
    ) -> Result<HarnessOutcome, HarnessError> {
        let mut state = self.state.lock().unwrap();
        state.runs.push(RunRecord {
            container_id: container_id.to_string(),
            test_name: test.name.clone(),
            command: test.command.clone(),
        });
        state.outcomes.get(&test.name).copied().ok_or_else(|| {
            HarnessError::ProcessFailed(format!("no scripted outcome for [{}]", test.name))
        })
    }
}
