// src/config/mod.rs

//! Graph definition files.
//!
//! - [`model`] holds the raw and validated config types.
//! - [`loader`] reads TOML from disk.
//! - [`validate`] checks graph sanity (self-references, cycles) when
//!   converting raw config into [`model::ConfigFile`].

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{ConfigFile, ConfigSection, RawConfigFile, RunSection, TaskConfig};
