//! Native backend: runs the harness's own test descriptors.
//!
//! This is the reference adapter. The target program's [`Bug`] already
//! enumerates harness-native [`TestCase`] descriptors, so construction
//! only wraps each one as a [`Test`] and builds the name index. The
//! harness has no coverage-instrumented mode; a coverage request is
//! noted and the test runs normally.

use mend_core::{
    Bug, BuildError, ConfigDict, ConfigError, Environment, ExecuteError, ProgramContainer, Test,
    TestCase, TestLookupError, TestOutcome, TestSuite, TestSuiteConfig, TestSuiteFactory,
};
use serde::Deserialize;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Configuration for the native backend. Recognizes no keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NativeSuiteConfig {}

impl TestSuiteConfig for NativeSuiteConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Factory registered under the `native` name.
pub struct NativeTestSuiteFactory;

impl TestSuiteFactory for NativeTestSuiteFactory {
    fn backend_name(&self) -> &'static str {
        "native"
    }

    fn config_type(&self) -> TypeId {
        TypeId::of::<NativeSuiteConfig>()
    }

    fn config_from_dict(
        &self,
        _dict: &ConfigDict,
        _base_dir: Option<&Path>,
    ) -> Result<Box<dyn TestSuiteConfig>, ConfigError> {
        Ok(Box::new(NativeSuiteConfig::default()))
    }

    fn build(
        &self,
        _config: &dyn TestSuiteConfig,
        environment: Arc<Environment>,
        bug: &Bug,
    ) -> Result<Box<dyn TestSuite>, BuildError> {
        let suite = NativeTestSuite::for_bug(environment, bug)?;
        Ok(Box::new(suite))
    }
}

/// Test suite over the harness's native test descriptors.
#[derive(Debug)]
pub struct NativeTestSuite {
    environment: Arc<Environment>,
    tests: Vec<Test>,
    cases: Vec<TestCase>,
    index: HashMap<String, usize>,
}

impl NativeTestSuite {
    /// Wraps every native test case of `bug`.
    ///
    /// Fails if two cases share a name: the suite indexes tests by
    /// name, and shadowing one case with another would leave `len`
    /// inconsistent with the index.
    pub fn for_bug(environment: Arc<Environment>, bug: &Bug) -> Result<Self, BuildError> {
        let mut tests = Vec::with_capacity(bug.tests().len());
        let mut cases = Vec::with_capacity(bug.tests().len());
        let mut index = HashMap::with_capacity(bug.tests().len());
        for case in bug.tests() {
            if index.insert(case.name.clone(), tests.len()).is_some() {
                return Err(BuildError::DuplicateTestName(case.name.clone()));
            }
            tests.push(Test::new(case.name.clone()));
            cases.push(case.clone());
        }
        Ok(Self {
            environment,
            tests,
            cases,
            index,
        })
    }
}

impl TestSuite for NativeTestSuite {
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
        let case = self
            .index
            .get(test.name())
            .map(|&i| &self.cases[i])
            .ok_or_else(|| ExecuteError::UnknownTest(test.name().to_string()))?;
        if coverage {
            tracing::debug!(
                test = test.name(),
                "harness has no coverage mode, running test normally"
            );
        }
        let outcome = self.environment.harness().run_test(container.id(), case)?;
        Ok(TestOutcome::new(outcome.passed, outcome.duration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mend_core::testing::ScriptedHarness;
    use std::time::Duration;

    fn environment(harness: &ScriptedHarness) -> Arc<Environment> {
        Arc::new(Environment::new(Arc::new(harness.clone())))
    }

    #[test]
    fn test_for_bug_wraps_every_case() {
        let harness = ScriptedHarness::new();
        let bug = Bug::new(
            "bug-1",
            vec![TestCase::named("test_add"), TestCase::named("test_sub")],
        );
        let suite = NativeTestSuite::for_bug(environment(&harness), &bug).unwrap();

        assert_eq!(suite.len(), 2);
        let names: Vec<&str> = suite.tests().map(Test::name).collect();
        assert_eq!(names, vec!["test_add", "test_sub"]);
    }

    #[test]
    fn test_iteration_order_is_stable() {
        let harness = ScriptedHarness::new();
        let bug = Bug::new(
            "bug-1",
            vec![
                TestCase::named("c"),
                TestCase::named("a"),
                TestCase::named("b"),
            ],
        );
        let suite = NativeTestSuite::for_bug(environment(&harness), &bug).unwrap();

        let first: Vec<&str> = suite.tests().map(Test::name).collect();
        let second: Vec<&str> = suite.tests().map(Test::name).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_lookup_returns_identical_test() {
        let harness = ScriptedHarness::new();
        let bug = Bug::new(
            "bug-1",
            vec![TestCase::named("test_add"), TestCase::named("test_sub")],
        );
        let suite = NativeTestSuite::for_bug(environment(&harness), &bug).unwrap();

        for test in suite.tests() {
            assert_eq!(suite.test(test.name()).unwrap(), test);
        }
    }

    #[test]
    fn test_duplicate_names_rejected_at_construction() {
        let harness = ScriptedHarness::new();
        let bug = Bug::new(
            "bug-1",
            vec![TestCase::named("test_add"), TestCase::named("test_add")],
        );
        let err = NativeTestSuite::for_bug(environment(&harness), &bug).unwrap_err();
        assert!(matches!(err, BuildError::DuplicateTestName(name) if name == "test_add"));
    }

    #[test]
    fn test_execute_rejects_foreign_test() {
        let harness = ScriptedHarness::new();
        let bug = Bug::new("bug-1", vec![TestCase::named("test_add")]);
        let suite = NativeTestSuite::for_bug(environment(&harness), &bug).unwrap();

        let container = ProgramContainer::new("c1");
        let foreign = Test::new("not_in_suite");
        let err = suite.execute(&container, &foreign, false).unwrap_err();
        assert!(matches!(err, ExecuteError::UnknownTest(name) if name == "not_in_suite"));
        // fails fast: the harness was never consulted
        assert_eq!(harness.run_count(), 0);
    }

    #[test]
    fn test_execute_maps_harness_outcome() {
        let harness = ScriptedHarness::new();
        harness.script("test_add", true, Duration::from_millis(40));
        let bug = Bug::new("bug-1", vec![TestCase::named("test_add")]);
        let suite = NativeTestSuite::for_bug(environment(&harness), &bug).unwrap();

        let container = ProgramContainer::new("c1");
        let test = suite.test("test_add").unwrap().clone();
        let outcome = suite.execute(&container, &test, false).unwrap();
        assert!(outcome.passed());
        assert_eq!(outcome.duration(), Duration::from_millis(40));
    }
}
