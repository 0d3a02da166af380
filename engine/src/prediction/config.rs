//! Model configuration file support.
//!
//! Reads the location of the regression artifact from a TOML configuration
//! file, so deployments can swap artifacts without rebuilding.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ModelError, ModelResult};

/// Model configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub model: ModelSettings,
}

/// Artifact location settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Path to the serialized regression artifact (JSON).
    pub artifact: PathBuf,
}

impl ModelConfig {
    /// Point directly at an artifact path without a config file.
    pub fn with_artifact(artifact: impl Into<PathBuf>) -> Self {
        Self {
            model: ModelSettings {
                artifact: artifact.into(),
            },
        }
    }

    /// Load model configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(ModelConfig)` if successful
    /// * `Err(ModelError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> ModelResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ModelError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: ModelConfig = toml::from_str(&content).map_err(|e| {
            ModelError::new(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load model configuration from the default location.
    ///
    /// Searches for `restwell.toml` in:
    /// 1. Current directory
    /// 2. `engine/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> ModelResult<Self> {
        let search_paths = vec![
            PathBuf::from("restwell.toml"),
            PathBuf::from("engine/restwell.toml"),
            PathBuf::from("../restwell.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ModelError::new(
            "No restwell.toml found in standard locations",
        ))
    }

    /// Path to the regression artifact.
    pub fn artifact_path(&self) -> &Path {
        &self.model.artifact
    }
}
