// tests/cache_reuse.rs

use std::error::Error;
use std::sync::atomic::Ordering;

use taskdag::artifact::Artifact;
use taskdag::cache::{MemoryCache, ResultCache};
use taskdag::engine::Orchestrator;
use taskdag::registry::TaskRegistry;
use taskdag_test_utils::builders::GraphBuilder;
use taskdag_test_utils::doubles::{counting_registry, total_calls};
use taskdag_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn second_run_over_shared_cache_is_idempotent_and_fully_hits() -> TestResult {
    init_tracing();

    let graph = GraphBuilder::new()
        .task("A", &["B", "C"])
        .task("B", &["D"])
        .task("C", &[])
        .task("D", &[])
        .build();
    let (registry, counters) = counting_registry(&["A", "B", "C", "D"]);
    let mut cache = MemoryCache::new();
    let orchestrator = Orchestrator::new();

    let first = orchestrator.run(&graph, &registry, "A", &mut cache)?;
    let calls_after_first = total_calls(&counters);

    let second = orchestrator.run(&graph, &registry, "A", &mut cache)?;

    // No task function ran again on the second pass.
    assert_eq!(total_calls(&counters), calls_after_first);

    // Identical results, and every visited task was a hit.
    assert_eq!(second.results, first.results);
    assert_eq!(second.executed_order, first.executed_order);
    for name in &second.executed_order {
        assert!(
            second
                .cache_hits
                .iter()
                .any(|key| key.starts_with(&format!("{name}:"))),
            "expected a cache hit for task '{name}' on the second run"
        );
    }
    Ok(())
}

#[test]
fn runs_with_different_dataset_paths_share_nothing() -> TestResult {
    init_tracing();

    let graph = GraphBuilder::new()
        .task("A", &["B"])
        .task("B", &[])
        .build();
    let (registry, counters) = counting_registry(&["A", "B"]);
    let mut cache = MemoryCache::new();
    let orchestrator = Orchestrator::new();

    let seed_a = Artifact::new().with("dataset_path", "data_a.csv");
    let seed_b = Artifact::new().with("dataset_path", "data_b.csv");

    let first = orchestrator.run_with_input(&graph, &registry, "A", Some(seed_a), &mut cache)?;
    let calls_after_first = total_calls(&counters);

    let second = orchestrator.run_with_input(&graph, &registry, "A", Some(seed_b), &mut cache)?;

    // Distinct key sets: nothing from the first run was reusable.
    assert!(first.cache_hits.is_empty());
    assert!(second.cache_hits.is_empty());
    assert_eq!(total_calls(&counters), calls_after_first * 2);
    Ok(())
}

#[test]
fn cached_task_runs_without_a_registry_entry() -> TestResult {
    init_tracing();

    let graph = GraphBuilder::new().task("A", &[]).build();
    let registry = TaskRegistry::new();
    let mut cache = MemoryCache::new();

    // Pre-populate the cache under the key the executor will derive for a
    // start node with no input artifact.
    cache.set("A:none", Artifact::new().with("precomputed", true));

    let report = Orchestrator::new().run(&graph, &registry, "A", &mut cache)?;

    assert_eq!(report.cache_hits, vec!["A:none".to_string()]);
    let result = report.results.get("A").expect("A has a result");
    assert_eq!(result.get("precomputed"), Some(&true.into()));
    Ok(())
}

#[test]
fn stored_empty_artifact_is_distinct_from_absent_key() -> TestResult {
    init_tracing();

    let mut cache = MemoryCache::new();

    assert!(!cache.has("T:none"));
    assert_eq!(cache.get("T:none"), None);

    cache.set("T:none", Artifact::new());

    assert!(cache.has("T:none"));
    assert_eq!(cache.get("T:none"), Some(Artifact::new()));
    Ok(())
}

#[test]
fn cache_hit_still_traverses_children_with_reused_artifact() -> TestResult {
    init_tracing();

    let graph = GraphBuilder::new()
        .task("A", &["B"])
        .task("B", &[])
        .build();
    let (registry, counters) = counting_registry(&["A", "B"]);
    let mut cache = MemoryCache::new();

    // Make A a hit up front; B stays a miss and must still be reached.
    cache.set("A:none", Artifact::new().with("from_cache", true));

    let report = Orchestrator::new().run(&graph, &registry, "A", &mut cache)?;

    assert_eq!(report.executed_order, vec!["A", "B"]);
    assert_eq!(counters["A"].load(Ordering::SeqCst), 0);
    assert_eq!(counters["B"].load(Ordering::SeqCst), 1);

    // B saw the reused artifact, not a fresh one.
    let b_result = report.results.get("B").expect("B has a result");
    assert_eq!(b_result.get("from_cache"), Some(&true.into()));
    Ok(())
}
