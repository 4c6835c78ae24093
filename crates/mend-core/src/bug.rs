//! Target-program descriptor consumed during suite construction.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// A test-case descriptor in the external harness's own terms.
///
/// Backends translate [`Test`](crate::Test) values into these before
/// handing them to the harness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Name of the test, unique within the target program.
    pub name: String,

    /// Command executed inside the container, if the harness does not
    /// already know how to run the test by name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Working directory for the test command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workdir: Option<PathBuf>,

    /// Wall-clock limit enforced by the harness.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<Duration>,
}

impl TestCase {
    /// A descriptor the harness can run by name alone.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: None,
            workdir: None,
            time_limit: None,
        }
    }
}

/// Describes the program under repair and enumerates its native tests.
///
/// Supplied by the surrounding tooling; consumed once when a suite is
/// constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bug {
    id: String,
    tests: Vec<TestCase>,
}

impl Bug {
    pub fn new(id: impl Into<String>, tests: Vec<TestCase>) -> Self {
        Self {
            id: id.into(),
            tests,
        }
    }

    /// Identifier of the target program.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The native test cases known for this program.
    pub fn tests(&self) -> &[TestCase] {
        &self.tests
    }
}
