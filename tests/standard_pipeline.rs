// tests/standard_pipeline.rs

//! End-to-end runs of the bundled dataset-preparation pipeline, wired the
//! same way the binary wires it.

use std::error::Error;

use serde_json::json;
use taskdag::cache::MemoryCache;
use taskdag::dag::TaskGraph;
use taskdag::engine::Orchestrator;
use taskdag::tasks::standard_registry;
use taskdag_test_utils::builders::GraphBuilder;
use taskdag_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

fn pipeline_graph() -> TaskGraph {
    GraphBuilder::new()
        .task("prepare_dataset", &["load_data"])
        .task("load_data", &["validate_schema", "clean_missing"])
        .task("validate_schema", &[])
        .task("clean_missing", &["compute_features"])
        .task("compute_features", &[])
        .build()
}

#[test]
fn first_run_computes_the_whole_pipeline() -> TestResult {
    init_tracing();

    let graph = pipeline_graph();
    let registry = standard_registry();
    assert!(registry.contains("prepare_dataset"));

    let mut cache = MemoryCache::new();
    let report = Orchestrator::new().run(&graph, &registry, "prepare_dataset", &mut cache)?;

    assert_eq!(
        report.plan,
        vec![
            "prepare_dataset",
            "load_data",
            "validate_schema",
            "clean_missing",
            "compute_features",
        ]
    );
    assert_eq!(
        report.executed_order,
        vec![
            "prepare_dataset",
            "load_data",
            "validate_schema",
            "clean_missing",
            "compute_features",
        ]
    );
    assert!(report.cache_hits.is_empty());

    // Artifacts accumulate down the graph.
    let features = report
        .results
        .get("compute_features")
        .expect("final task has a result");
    assert_eq!(features.get_str("dataset_path"), Some("data.csv"));
    assert_eq!(features.get("rows"), Some(&json!(95)));
    assert_eq!(features.get("missing_values"), Some(&json!(0)));
    assert_eq!(features.get("schema_valid"), None);
    assert_eq!(features.get("features"), Some(&json!(["f1", "f2", "f3"])));

    // The validate branch kept the uncleaned row count.
    let validated = report
        .results
        .get("validate_schema")
        .expect("validate_schema has a result");
    assert_eq!(validated.get("rows"), Some(&json!(100)));
    assert_eq!(validated.get("schema_valid"), Some(&json!(true)));
    Ok(())
}

#[test]
fn second_run_is_served_entirely_from_cache() -> TestResult {
    init_tracing();

    let graph = pipeline_graph();
    let registry = standard_registry();
    let mut cache = MemoryCache::new();
    let orchestrator = Orchestrator::new();

    let first = orchestrator.run(&graph, &registry, "prepare_dataset", &mut cache)?;
    let second = orchestrator.run(&graph, &registry, "prepare_dataset", &mut cache)?;

    assert_eq!(second.results, first.results);
    assert_eq!(second.cache_hits.len(), second.executed_order.len());
    assert!(second.fully_cached());
    Ok(())
}
