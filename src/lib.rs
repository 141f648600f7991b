// src/lib.rs

pub mod artifact;
pub mod cache;
pub mod cli;
pub mod config;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod registry;
pub mod tasks;

use tracing::info;

use crate::artifact::Artifact;
use crate::cache::MemoryCache;
use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::ConfigFile;
use crate::dag::{plan, TaskGraph};
use crate::engine::{CacheKeyPolicy, Orchestrator, RunReport};
use crate::errors::{Result, TaskdagError};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the task graph and the bundled pipeline registry
/// - the orchestrator, run `--runs` times over one shared cache
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = load_and_validate(&args.config)?;

    let start = resolve_start(&args, &cfg)?;
    let graph = TaskGraph::from_config(&cfg);

    if args.dry_run {
        print_dry_run(&cfg, &graph, &start);
        return Ok(());
    }

    let registry = tasks::standard_registry();
    let keys = CacheKeyPolicy::new(cfg.config.cache_key_field.clone());

    // Seed artifact for the start task, if requested on the CLI. The field
    // name follows the configured cache key field so the seed actually
    // distinguishes cache keys.
    let initial = args
        .dataset
        .as_ref()
        .map(|path| Artifact::new().with(keys.field(), path.as_str()));

    let orchestrator = Orchestrator::with_key_policy(keys);
    let mut cache = MemoryCache::new();

    for run_idx in 1..=args.runs.max(1) {
        println!("=== Run {run_idx} ===");

        let report =
            orchestrator.run_with_input(&graph, &registry, &start, initial.clone(), &mut cache)?;

        info!(
            run = run_idx,
            cache_entries = cache.len(),
            fully_cached = report.fully_cached(),
            "run finished"
        );

        print_report(&report);
    }

    Ok(())
}

/// Start task: CLI flag wins, then `[run].start` from the config.
fn resolve_start(args: &CliArgs, cfg: &ConfigFile) -> Result<String> {
    args.start
        .clone()
        .or_else(|| cfg.run.start.clone())
        .ok_or_else(|| {
            TaskdagError::ConfigError(
                "no start task: pass --start or set [run].start in the config".to_string(),
            )
        })
}

/// Simple dry-run output: print tasks, children, and the plan.
fn print_dry_run(cfg: &ConfigFile, graph: &TaskGraph, start: &str) {
    println!("taskdag dry-run");
    println!("  config.cache_key_field = {}", cfg.config.cache_key_field);
    println!();

    println!("tasks ({}):", cfg.task.len());
    for (name, task) in cfg.task.iter() {
        println!("  - {name}");
        if !task.children.is_empty() {
            println!("      children: {:?}", task.children);
        }
    }
    println!();

    println!("plan from '{start}' (breadth-first):");
    for step in plan(graph, start) {
        println!("  - {step}");
    }
}

/// Print one run report in the same shape the library returns it.
fn print_report(report: &RunReport) {
    println!("plan:");
    for step in &report.plan {
        println!("  - {step}");
    }

    println!("executed order (depth-first):");
    for step in &report.executed_order {
        println!("  - {step}");
    }

    println!("cache hits ({}):", report.cache_hits.len());
    for key in &report.cache_hits {
        println!("  - {key}");
    }

    // Results keyed by executed order so the output is stable.
    println!("results:");
    for name in &report.executed_order {
        if let Some(artifact) = report.results.get(name) {
            println!("  {name}: {artifact}");
        }
    }
    println!();
}
