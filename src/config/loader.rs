//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading hub
//! configurations from YAML files.

use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};

use super::types::{HubConfig, HubMetadata, QualifyingScoresConfig};

/// Loads and provides access to every hub's configuration.
///
/// # Directory Structure
///
/// The configuration root holds one directory per hub:
/// ```text
/// config/hubs/
/// ├── riverside/
/// │   ├── hub.yaml                # Hub metadata
/// │   └── qualifying_scores.yaml  # Qualifying table (optional)
/// └── northside/
///     └── hub.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use qualifying_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/hubs").unwrap();
/// let hub = loader.hub("riverside").unwrap();
/// println!("Hub: {}", hub.metadata.name);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    hubs: BTreeMap<String, HubConfig>,
}

impl ConfigLoader {
    /// Loads every hub directory under `path`.
    ///
    /// Returns an error if:
    /// - The root directory is missing or contains no hub directories
    /// - Any `hub.yaml` is missing or contains invalid YAML
    /// - Any `qualifying_scores.yaml` contains invalid YAML or a negative threshold
    /// - Two hubs declare the same id
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let root = path.as_ref();
        let root_str = root.display().to_string();

        if !root.is_dir() {
            return Err(EngineError::ConfigNotFound { path: root_str });
        }

        let entries = fs::read_dir(root).map_err(|_| EngineError::ConfigNotFound {
            path: root_str.clone(),
        })?;

        let mut hubs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: root_str.clone(),
            })?;

            let hub_dir = entry.path();
            if hub_dir.is_dir() {
                hubs.push(Self::load_hub(&hub_dir)?);
            }
        }

        if hubs.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no hub directories found)", root_str),
            });
        }

        let loader = Self::from_hubs(hubs)?;
        info!(
            root = %root_str,
            hubs = loader.hubs.len(),
            "Loaded hub configurations"
        );
        Ok(loader)
    }

    /// Loads a single hub directory.
    pub fn load_hub<P: AsRef<Path>>(path: P) -> EngineResult<HubConfig> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<HubMetadata>(&path.join("hub.yaml"))?;

        let table_path = path.join("qualifying_scores.yaml");
        let qualifying_scores = if table_path.exists() {
            let table = Self::load_yaml::<QualifyingScoresConfig>(&table_path)?;
            Self::validate_thresholds(&metadata.id, &table)?;
            Some(table)
        } else {
            None
        };

        debug!(
            hub_id = %metadata.id,
            has_qualifying_scores = qualifying_scores.is_some(),
            "Loaded hub"
        );

        Ok(HubConfig {
            metadata,
            qualifying_scores,
        })
    }

    /// Builds a loader from already-constructed hub configurations.
    pub fn from_hubs(hubs: impl IntoIterator<Item = HubConfig>) -> EngineResult<Self> {
        let mut by_id = BTreeMap::new();
        for hub in hubs {
            let id = hub.id().to_string();
            if by_id.insert(id.clone(), hub).is_some() {
                return Err(EngineError::ConfigParseError {
                    path: id.clone(),
                    message: format!("duplicate hub id '{}'", id),
                });
            }
        }
        Ok(Self { hubs: by_id })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Rejects negative thresholds.
    fn validate_thresholds(hub_id: &str, table: &QualifyingScoresConfig) -> EngineResult<()> {
        for (gender, level, score_type, thresholds) in table.entries() {
            if let Some((tier, threshold)) = thresholds
                .configured()
                .find(|(_, threshold)| *threshold < Decimal::ZERO)
            {
                return Err(EngineError::InvalidThreshold {
                    hub_id: hub_id.to_string(),
                    gender: gender.to_string(),
                    level: level.to_string(),
                    score_type: score_type.to_string(),
                    message: format!("{} threshold {} must not be negative", tier, threshold),
                });
            }
        }
        Ok(())
    }

    /// Returns a hub by id.
    pub fn hub(&self, hub_id: &str) -> EngineResult<&HubConfig> {
        self.hubs.get(hub_id).ok_or_else(|| EngineError::HubNotFound {
            hub_id: hub_id.to_string(),
        })
    }

    /// Returns a hub's qualifying table.
    ///
    /// An unknown hub and a hub without a table both yield `None`.
    pub fn qualifying_scores(&self, hub_id: &str) -> Option<&QualifyingScoresConfig> {
        self.hubs.get(hub_id)?.qualifying_scores.as_ref()
    }

    /// Returns the ids of all loaded hubs, sorted.
    pub fn hub_ids(&self) -> impl Iterator<Item = &str> {
        self.hubs.keys().map(String::as_str)
    }

    /// Returns the number of loaded hubs.
    pub fn len(&self) -> usize {
        self.hubs.len()
    }

    /// Returns true when no hubs are loaded.
    pub fn is_empty(&self) -> bool {
        self.hubs.is_empty()
    }
}
