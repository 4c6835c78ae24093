//! End-to-end scenario for the native backend: construct a suite from
//! an empty config mapping, iterate, look up, and execute.

use mend_adapters::default_registry;
use mend_core::testing::ScriptedHarness;
use mend_core::{
    Bug, Environment, ProgramContainer, TestCase, TestLookupError, TestSuite, TestSuiteFactory,
};
use std::sync::Arc;
use std::time::Duration;

fn arithmetic_bug() -> (ScriptedHarness, Arc<Environment>, Bug) {
    let harness = ScriptedHarness::new();
    harness.script("test_add", true, Duration::from_millis(120));
    harness.script("test_sub", false, Duration::from_millis(80));
    let environment = Arc::new(Environment::new(Arc::new(harness.clone())));
    let bug = Bug::new(
        "arith-1",
        vec![TestCase::named("test_add"), TestCase::named("test_sub")],
    );
    (harness, environment, bug)
}

#[test]
fn test_native_scenario_from_empty_dict() {
    let registry = default_registry().unwrap();
    let (harness, environment, bug) = arithmetic_bug();

    let factory = registry.factory_for_name("native").unwrap();
    let config = factory
        .config_from_dict(&serde_json::Map::new(), None)
        .unwrap();
    let suite = registry
        .from_config(config.as_ref(), environment, &bug)
        .unwrap();

    assert_eq!(suite.len(), 2);
    assert_eq!(suite.tests().count(), suite.len());
    assert_eq!(suite.test("test_add").unwrap().name(), "test_add");

    let container = ProgramContainer::new("container-1");
    let test = suite.test("test_add").unwrap().clone();
    let outcome = suite.execute(&container, &test, false).unwrap();
    assert!(outcome.passed());
    assert!(outcome.duration_secs() >= 0.0);
    assert_eq!(harness.run_count(), 1);
}

#[test]
fn test_failing_test_maps_to_failed_outcome() {
    let registry = default_registry().unwrap();
    let (_, environment, bug) = arithmetic_bug();

    let factory = registry.factory_for_name("native").unwrap();
    let config = factory
        .config_from_dict(&serde_json::Map::new(), None)
        .unwrap();
    let suite = registry
        .from_config(config.as_ref(), environment, &bug)
        .unwrap();

    let container = ProgramContainer::new("container-1");
    let test = suite.test("test_sub").unwrap().clone();
    let outcome = suite.execute(&container, &test, false).unwrap();
    assert!(!outcome.passed());
    assert_eq!(outcome.duration(), Duration::from_millis(80));
}

#[test]
fn test_execution_is_deterministic_for_pure_tests() {
    let registry = default_registry().unwrap();
    let (_, environment, bug) = arithmetic_bug();

    let factory = registry.factory_for_name("native").unwrap();
    let config = factory
        .config_from_dict(&serde_json::Map::new(), None)
        .unwrap();
    let suite = registry
        .from_config(config.as_ref(), environment, &bug)
        .unwrap();

    let container = ProgramContainer::new("container-1");
    let test = suite.test("test_add").unwrap().clone();
    let first = suite.execute(&container, &test, false).unwrap();
    let second = suite.execute(&container, &test, false).unwrap();
    assert_eq!(first.passed(), second.passed());
}

#[test]
fn test_coverage_request_degrades_to_normal_run() {
    let registry = default_registry().unwrap();
    let (harness, environment, bug) = arithmetic_bug();

    let factory = registry.factory_for_name("native").unwrap();
    let config = factory
        .config_from_dict(&serde_json::Map::new(), None)
        .unwrap();
    let suite = registry
        .from_config(config.as_ref(), environment, &bug)
        .unwrap();

    let container = ProgramContainer::new("container-1");
    let test = suite.test("test_add").unwrap().clone();
    let outcome = suite.execute(&container, &test, true).unwrap();
    assert!(outcome.passed());
    assert_eq!(harness.run_count(), 1);
}

#[test]
fn test_lookup_missing_name_fails() {
    let registry = default_registry().unwrap();
    let (_, environment, bug) = arithmetic_bug();

    let factory = registry.factory_for_name("native").unwrap();
    let config = factory
        .config_from_dict(&serde_json::Map::new(), None)
        .unwrap();
    let suite = registry
        .from_config(config.as_ref(), environment, &bug)
        .unwrap();

    assert!(matches!(
        suite.test("nonexistent-name"),
        Err(TestLookupError::NotFound(name)) if name == "nonexistent-name"
    ));
}
