//! Serialized regression artifact and the model built on top of it.
//!
//! The training pipeline exports the fitted model as a small JSON document
//! holding the bias and one weight per feature. This module deserializes
//! that document, validates it, and wraps it in a [`LinearSleepModel`] that
//! implements [`SleepModel`].

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use super::config::ModelConfig;
use super::{ModelError, ModelResult, SleepFeatures, SleepModel};

/// Fitted coefficients of the sleep-need regression.
///
/// The estimate is `bias + wake_weight*wake_seconds +
/// sleep_weight*sleep_hours + coffee_weight*coffee_cups`, in seconds,
/// clamped to be non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionArtifact {
    pub bias: f64,
    pub wake_weight: f64,
    pub sleep_weight: f64,
    pub coffee_weight: f64,
}

impl RegressionArtifact {
    /// Deserialize an artifact from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read model artifact {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Failed to load model artifact {}", path.display()))
    }

    /// Deserialize an artifact from a JSON string.
    pub fn from_json_str(json_str: &str) -> Result<Self> {
        let artifact: RegressionArtifact =
            serde_json::from_str(json_str).context("Failed to parse model artifact JSON")?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Reject artifacts with non-finite coefficients.
    fn validate(&self) -> Result<()> {
        let coefficients = [
            ("bias", self.bias),
            ("wake_weight", self.wake_weight),
            ("sleep_weight", self.sleep_weight),
            ("coffee_weight", self.coffee_weight),
        ];
        for (name, value) in coefficients {
            if !value.is_finite() {
                anyhow::bail!("Artifact coefficient '{}' is not finite: {}", name, value);
            }
        }
        Ok(())
    }

    /// Evaluate the regression for a feature vector.
    ///
    /// A sleep duration cannot be negative, so the raw linear estimate is
    /// clamped at zero.
    pub fn evaluate(&self, features: &SleepFeatures) -> f64 {
        let estimate = self.bias
            + self.wake_weight * features.wake_seconds as f64
            + self.sleep_weight * features.sleep_hours
            + self.coffee_weight * features.coffee_cups as f64;
        estimate.max(0.0)
    }
}

/// A [`SleepModel`] backed by a [`RegressionArtifact`].
///
/// The coefficients are immutable after loading, so a single instance can be
/// shared freely across callers.
#[derive(Debug, Clone)]
pub struct LinearSleepModel {
    artifact: RegressionArtifact,
}

impl LinearSleepModel {
    /// Wrap an already-loaded artifact.
    pub fn new(artifact: RegressionArtifact) -> Self {
        Self { artifact }
    }

    /// Load the artifact from a JSON file.
    ///
    /// Any read, parse, or validation failure surfaces as a [`ModelError`].
    pub fn load(path: &Path) -> ModelResult<Self> {
        let artifact = RegressionArtifact::from_file(path)?;
        info!("loaded sleep model artifact from {}", path.display());
        Ok(Self::new(artifact))
    }

    /// Load the artifact named by a [`ModelConfig`].
    pub fn from_config(config: &ModelConfig) -> ModelResult<Self> {
        Self::load(config.artifact_path())
    }

    /// The fitted coefficients backing this model.
    pub fn artifact(&self) -> &RegressionArtifact {
        &self.artifact
    }
}

impl SleepModel for LinearSleepModel {
    fn estimate_sleep(&self, features: &SleepFeatures) -> ModelResult<f64> {
        let estimate = self.artifact.evaluate(features);
        if !estimate.is_finite() {
            return Err(ModelError::new(format!(
                "regression produced a non-finite estimate for {:?}",
                features
            )));
        }
        Ok(estimate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTIFACT_JSON: &str = r#"{
        "bias": 1200.0,
        "wake_weight": 0.01,
        "sleep_weight": 3600.0,
        "coffee_weight": 120.0
    }"#;

    fn features(wake_seconds: i64, sleep_hours: f64, coffee_cups: i64) -> SleepFeatures {
        SleepFeatures {
            wake_seconds,
            sleep_hours,
            coffee_cups,
        }
    }

    #[test]
    fn test_parse_artifact_json() {
        let artifact = RegressionArtifact::from_json_str(ARTIFACT_JSON).unwrap();
        assert_eq!(artifact.bias, 1200.0);
        assert_eq!(artifact.wake_weight, 0.01);
        assert_eq!(artifact.sleep_weight, 3600.0);
        assert_eq!(artifact.coffee_weight, 120.0);
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let result = RegressionArtifact::from_json_str("{ not json");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let result = RegressionArtifact::from_json_str(r#"{"bias": 1.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_weight() {
        let artifact = RegressionArtifact {
            bias: 0.0,
            wake_weight: f64::NAN,
            sleep_weight: 3600.0,
            coffee_weight: 0.0,
        };
        let err = artifact.validate().unwrap_err();
        assert!(err.to_string().contains("wake_weight"));
    }

    #[test]
    fn test_evaluate_linear_combination() {
        let artifact = RegressionArtifact::from_json_str(ARTIFACT_JSON).unwrap();
        let estimate = artifact.evaluate(&features(25_200, 8.0, 1));
        // 1200 + 0.01*25200 + 3600*8 + 120*1
        assert!((estimate - 30_372.0).abs() < 1e-9);
    }

    #[test]
    fn test_evaluate_clamps_negative_estimates() {
        let artifact = RegressionArtifact {
            bias: -100.0,
            wake_weight: 0.0,
            sleep_weight: 0.0,
            coffee_weight: 0.0,
        };
        assert_eq!(artifact.evaluate(&features(0, 8.0, 0)), 0.0);
    }

    #[test]
    fn test_load_missing_file_is_model_error() {
        let err = LinearSleepModel::load(Path::new("/nonexistent/sleep.json")).unwrap_err();
        assert!(err.to_string().contains("model error"));
    }

    #[test]
    fn test_estimate_sleep_via_trait() {
        let model = LinearSleepModel::new(RegressionArtifact {
            bias: 0.0,
            wake_weight: 0.0,
            sleep_weight: 3600.0,
            coffee_weight: 0.0,
        });
        let estimate = model.estimate_sleep(&features(25_200, 8.0, 1)).unwrap();
        assert_eq!(estimate, 28_800.0);
    }

    #[test]
    fn test_estimate_sleep_rejects_non_finite_result() {
        let model = LinearSleepModel::new(RegressionArtifact {
            bias: 0.0,
            wake_weight: f64::MAX,
            sleep_weight: f64::MAX,
            coffee_weight: 0.0,
        });
        // Overflows to infinity once the weighted terms are summed
        let result = model.estimate_sleep(&features(i64::MAX, f64::MAX, 0));
        assert!(result.is_err());
    }
}
