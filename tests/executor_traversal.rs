// tests/executor_traversal.rs

use std::error::Error;
use std::sync::atomic::Ordering;

use taskdag::artifact::Artifact;
use taskdag::cache::MemoryCache;
use taskdag::engine::Orchestrator;
use taskdag_test_utils::builders::GraphBuilder;
use taskdag_test_utils::doubles::counting_registry;
use taskdag_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn execution_is_depth_first_and_differs_from_plan() -> TestResult {
    init_tracing();

    let graph = GraphBuilder::new()
        .task("A", &["B", "C"])
        .task("B", &["D"])
        .task("C", &[])
        .task("D", &[])
        .build();
    let (registry, _counters) = counting_registry(&["A", "B", "C", "D"]);
    let mut cache = MemoryCache::new();

    let report = Orchestrator::new().run(&graph, &registry, "A", &mut cache)?;

    // D is fully explored under B before C is visited.
    assert_eq!(report.executed_order, vec!["A", "B", "D", "C"]);
    assert_eq!(report.plan, vec!["A", "B", "C", "D"]);
    assert_ne!(report.executed_order, report.plan);
    Ok(())
}

#[test]
fn diamond_graph_records_shared_child_once_and_completes() -> TestResult {
    init_tracing();

    let graph = GraphBuilder::new()
        .task("A", &["B", "C"])
        .task("B", &["D"])
        .task("C", &["D"])
        .task("D", &[])
        .build();
    let (registry, _counters) = counting_registry(&["A", "B", "C", "D"]);
    let mut cache = MemoryCache::new();

    let report = Orchestrator::new().run(&graph, &registry, "A", &mut cache)?;

    let d_count = report
        .executed_order
        .iter()
        .filter(|n| n.as_str() == "D")
        .count();
    assert_eq!(d_count, 1, "D reached via B and C must be recorded once");

    // Last write wins: results[D] is well-defined.
    let d_result = report.results.get("D").expect("D has a result");
    assert_eq!(d_result.get("ran_D"), Some(&true.into()));
    Ok(())
}

#[test]
fn child_receives_parent_output_artifact() -> TestResult {
    init_tracing();

    let graph = GraphBuilder::new()
        .task("parent", &["child"])
        .task("child", &[])
        .build();
    let (registry, _counters) = counting_registry(&["parent", "child"]);
    let mut cache = MemoryCache::new();

    let report = Orchestrator::new().run(&graph, &registry, "parent", &mut cache)?;

    // The counting doubles overlay their marker on the incoming artifact, so
    // the child's result still carries the parent's marker.
    let child_result = report.results.get("child").expect("child has a result");
    assert_eq!(child_result.get("ran_parent"), Some(&true.into()));
    assert_eq!(child_result.get("ran_child"), Some(&true.into()));
    Ok(())
}

#[test]
fn within_one_run_a_task_executes_at_most_once_per_cache_key() -> TestResult {
    init_tracing();

    // Both branches feed D the same artifact field, so D's two visits share
    // one cache key: the second visit is a hit, not a second invocation.
    let graph = GraphBuilder::new()
        .task("A", &["B", "C"])
        .task("B", &["D"])
        .task("C", &["D"])
        .task("D", &[])
        .build();

    fn seed(_input: Option<&Artifact>) -> taskdag::errors::Result<Artifact> {
        Ok(Artifact::new().with("dataset_path", "shared.csv"))
    }
    // B and C pass their input through unchanged.
    fn passthrough(input: Option<&Artifact>) -> taskdag::errors::Result<Artifact> {
        Ok(input.cloned().unwrap_or_default())
    }

    let mut registry = taskdag::registry::TaskRegistry::new();
    registry.register("A", seed);
    registry.register("B", passthrough);
    registry.register("C", passthrough);

    let d = taskdag_test_utils::doubles::CountingTask::new(Artifact::new().with("d_done", true));
    let d_counter = d.counter();
    registry.register("D", d);

    let mut cache = MemoryCache::new();
    let report = Orchestrator::new().run(&graph, &registry, "A", &mut cache)?;

    assert_eq!(d_counter.load(Ordering::SeqCst), 1);
    // The second visit of D shows up as a cache hit for D's key.
    assert!(report.cache_hits.iter().any(|k| k.starts_with("D:")));
    Ok(())
}
