//! Configuration loading and management for the Qualifying Engine.
//!
//! This module loads each hub's metadata and qualifying-score table from
//! YAML files, and reads the service settings from the environment.
//!
//! # Example
//!
//! ```no_run
//! use qualifying_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/hubs").unwrap();
//! println!("Loaded {} hubs", config.len());
//! ```

mod loader;
mod settings;
mod types;

pub use loader::ConfigLoader;
pub use settings::ServiceSettings;
pub use types::{HubConfig, HubMetadata, LevelThresholds, QualifyingScoresConfig, TierThresholds};
