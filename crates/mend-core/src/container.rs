//! Opaque handle to a live, isolated execution environment.

use serde::{Deserialize, Serialize};

/// A running container holding one instance of the target program.
///
/// Container lifecycle belongs to the surrounding tooling; this core
/// only forwards the container's id to the external harness. A single
/// container runs one test at a time, so concurrent `execute` calls
/// against the same container must be serialized by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProgramContainer {
    id: String,
}

impl ProgramContainer {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The harness-facing identifier of this container.
    pub fn id(&self) -> &str {
        &self.id
    }
}
