//! Shell backend: command-template test suites.
//!
//! The target program's tests are named in the config rather than
//! enumerated by the harness. Each execution renders the configured
//! command template, substituting the test name for the `{test}`
//! placeholder, and submits the rendered command to the harness as an
//! ad-hoc test case. Like the native backend, this backend has no
//! coverage mode and degrades a coverage request to a normal run.

use mend_core::{
    Bug, BuildError, ConfigDict, ConfigError, Environment, ExecuteError, ProgramContainer, Test,
    TestCase, TestLookupError, TestOutcome, TestSuite, TestSuiteConfig, TestSuiteFactory,
};
use serde::Deserialize;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Placeholder replaced with the test name when rendering the command.
const TEST_PLACEHOLDER: &str = "{test}";

/// Configuration for the shell backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShellSuiteConfig {
    /// Command template; `{test}` is replaced with the test name.
    pub command: String,

    /// Names of the tests in the suite.
    pub tests: Vec<String>,

    /// Working directory for test commands. Relative paths are
    /// resolved against the config's base directory.
    #[serde(default)]
    pub workdir: Option<PathBuf>,

    /// Per-test wall-clock limit in seconds.
    #[serde(default)]
    pub time_limit_secs: Option<u64>,
}

impl TestSuiteConfig for ShellSuiteConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Factory registered under the `shell` name.
pub struct ShellTestSuiteFactory;

impl TestSuiteFactory for ShellTestSuiteFactory {
    fn backend_name(&self) -> &'static str {
        "shell"
    }

    fn config_type(&self) -> TypeId {
        TypeId::of::<ShellSuiteConfig>()
    }

    fn config_from_dict(
        &self,
        dict: &ConfigDict,
        base_dir: Option<&Path>,
    ) -> Result<Box<dyn TestSuiteConfig>, ConfigError> {
        for field in ["command", "tests"] {
            if !dict.contains_key(field) {
                return Err(ConfigError::MissingField(field));
            }
        }
        let mut config: ShellSuiteConfig =
            serde_json::from_value(serde_json::Value::Object(dict.clone()))?;

        if !config.command.contains(TEST_PLACEHOLDER) {
            return Err(ConfigError::InvalidField {
                field: "command",
                reason: format!("template does not contain the {TEST_PLACEHOLDER} placeholder"),
            });
        }
        if config.tests.is_empty() {
            return Err(ConfigError::InvalidField {
                field: "tests",
                reason: "must name at least one test".to_string(),
            });
        }
        if config.time_limit_secs == Some(0) {
            return Err(ConfigError::InvalidField {
                field: "time_limit_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        if let (Some(workdir), Some(base)) = (&config.workdir, base_dir) {
            if workdir.is_relative() {
                config.workdir = Some(base.join(workdir));
            }
        }
        Ok(Box::new(config))
    }

    fn build(
        &self,
        config: &dyn TestSuiteConfig,
        environment: Arc<Environment>,
        _bug: &Bug,
    ) -> Result<Box<dyn TestSuite>, BuildError> {
        let config = config
            .as_any()
            .downcast_ref::<ShellSuiteConfig>()
            .ok_or_else(|| BuildError::Backend("shell backend received a foreign config".into()))?;
        let suite = ShellTestSuite::from_shell_config(environment, config)?;
        Ok(Box::new(suite))
    }
}

/// Test suite that drives the harness with rendered shell commands.
#[derive(Debug)]
pub struct ShellTestSuite {
    environment: Arc<Environment>,
    tests: Vec<Test>,
    index: HashMap<String, usize>,
    command: String,
    workdir: Option<PathBuf>,
    time_limit: Option<Duration>,
}

impl ShellTestSuite {
    /// Builds one test per configured name, rejecting duplicates.
    pub fn from_shell_config(
        environment: Arc<Environment>,
        config: &ShellSuiteConfig,
    ) -> Result<Self, BuildError> {
        let mut tests = Vec::with_capacity(config.tests.len());
        let mut index = HashMap::with_capacity(config.tests.len());
        for name in &config.tests {
            if index.insert(name.clone(), tests.len()).is_some() {
                return Err(BuildError::DuplicateTestName(name.clone()));
            }
            tests.push(Test::new(name.clone()));
        }
        Ok(Self {
            environment,
            tests,
            index,
            command: config.command.clone(),
            workdir: config.workdir.clone(),
            time_limit: config.time_limit_secs.map(Duration::from_secs),
        })
    }

    fn render(&self, test: &Test) -> TestCase {
        TestCase {
            name: test.name().to_string(),
            command: Some(self.command.replace(TEST_PLACEHOLDER, test.name())),
            workdir: self.workdir.clone(),
            time_limit: self.time_limit,
        }
    }
}

impl TestSuite for ShellTestSuite {
    fn len(&self) -> usize {
        self.tests.len()
    }

    fn tests(&self) -> Box<dyn Iterator<Item = &Test> + '_> {
        Box::new(self.tests.iter())
    }

    fn test(&self, name: &str) -> Result<&Test, TestLookupError> {
        self.index
            .get(name)
            .map(|&i| &self.tests[i])
            .ok_or_else(|| TestLookupError::NotFound(name.to_string()))
    }

    fn execute(
        &self,
        container: &ProgramContainer,
        test: &Test,
        coverage: bool,
    ) -> Result<TestOutcome, ExecuteError> {
        if !self.index.contains_key(test.name()) {
            return Err(ExecuteError::UnknownTest(test.name().to_string()));
        }
        if coverage {
            tracing::debug!(
                test = test.name(),
                "shell commands have no coverage mode, running test normally"
            );
        }
        let case = self.render(test);
        let outcome = self
            .environment
            .harness()
            .run_test(container.id(), &case)?;
        Ok(TestOutcome::new(outcome.passed, outcome.duration))
    }
}
