// src/tasks.rs

//! Bundled dataset-preparation pipeline.
//!
//! These are the concrete tasks wired up by the `taskdag` binary: a small
//! five-stage pipeline that pretends to load, validate, clean, and
//! featurize a dataset. They are glue for demonstration and test fixtures,
//! not part of the engine contract; the engine only sees them through
//! [`TaskRegistry`].
//!
//! Each task carries its input fields forward and overlays its own, so the
//! artifact accumulates as it flows down the graph.

use anyhow::anyhow;
use serde_json::json;

use crate::artifact::Artifact;
use crate::errors::Result;
use crate::registry::TaskRegistry;

/// Root of the pipeline: names the dataset downstream tasks operate on.
pub fn prepare_dataset(_input: Option<&Artifact>) -> Result<Artifact> {
    Ok(Artifact::new().with("dataset_path", "data.csv"))
}

/// Pretend to load the dataset and report its shape.
pub fn load_data(input: Option<&Artifact>) -> Result<Artifact> {
    let ctx = input.cloned().unwrap_or_default();
    let loaded: Artifact = [
        ("rows", json!(100)),
        ("columns", json!(5)),
        ("missing_values", json!(12)),
    ]
    .into_iter()
    .collect();

    // Input fields win over the defaults, mirroring how a re-load would
    // honour an upstream override.
    Ok(loaded.extended_with(ctx))
}

/// Pretend the schema checks out; attach the validation verdict.
pub fn validate_schema(input: Option<&Artifact>) -> Result<Artifact> {
    let data = input.cloned().unwrap_or_default();
    Ok(data.extended_with(Artifact::new().with("schema_valid", true)))
}

/// Pretend to clean missing values, shrinking the row count slightly.
pub fn clean_missing(input: Option<&Artifact>) -> Result<Artifact> {
    let data = input.cloned().unwrap_or_default();

    let rows = data
        .get("rows")
        .and_then(|v| v.as_i64())
        .ok_or_else(|| anyhow!("clean_missing expects a numeric 'rows' field"))?;

    Ok(data.extended_with(
        Artifact::new()
            .with("rows", rows - 5)
            .with("missing_values", 0),
    ))
}

/// Pretend to compute features over the cleaned data.
pub fn compute_features(input: Option<&Artifact>) -> Result<Artifact> {
    let data = input.cloned().unwrap_or_default();
    Ok(data.extended_with(Artifact::new().with("features", json!(["f1", "f2", "f3"]))))
}

/// Registry with the whole bundled pipeline registered.
pub fn standard_registry() -> TaskRegistry {
    let mut registry = TaskRegistry::new();
    registry.register("prepare_dataset", prepare_dataset);
    registry.register("load_data", load_data);
    registry.register("validate_schema", validate_schema);
    registry.register("clean_missing", clean_missing);
    registry.register("compute_features", compute_features);
    registry
}
