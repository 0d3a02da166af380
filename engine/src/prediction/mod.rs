//! The prediction-model seam.
//!
//! The regression model that estimates actual sleep need is an external
//! artifact produced by a separate training pipeline. This module treats it
//! as an injected capability: the [`SleepModel`] trait is the only contract
//! the bedtime calculation depends on, so tests run against deterministic
//! stand-ins while production callers load a serialized artifact through
//! [`artifact::LinearSleepModel`].

pub mod artifact;
pub mod config;
pub mod features;

pub use artifact::{LinearSleepModel, RegressionArtifact};
pub use config::ModelConfig;
pub use features::SleepFeatures;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Error produced when the model cannot be constructed or evaluated.
///
/// There is deliberately a single error kind: a missing artifact file, a
/// corrupt artifact, and an evaluation blow-up are all reported the same
/// way. The message is kept for logging; user-facing code converts this
/// into the generic failure message via
/// [`crate::services::bedtime::BedtimeError`].
#[derive(Debug, thiserror::Error)]
#[error("model error: {message}")]
pub struct ModelError {
    message: String,
}

impl ModelError {
    /// Create a model error with an internal diagnostic message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<anyhow::Error> for ModelError {
    fn from(err: anyhow::Error) -> Self {
        // "{:#}" flattens the context chain into one line for the log
        Self::new(format!("{:#}", err))
    }
}

/// A pre-trained model estimating how long the user will actually sleep.
///
/// Implementations take the encoded [`SleepFeatures`] and return the
/// estimated sleep duration in seconds. Implementations must be stateless
/// and reentrant; one that wraps a non-reentrant artifact must serialize
/// access internally (e.g. with a `Mutex`), since a loaded model may be
/// shared across callers.
pub trait SleepModel: Send + Sync {
    /// Estimate the sleep duration, in seconds, for the given features.
    fn estimate_sleep(&self, features: &SleepFeatures) -> ModelResult<f64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_error_display() {
        let err = ModelError::new("artifact not found");
        assert_eq!(err.to_string(), "model error: artifact not found");
    }

    #[test]
    fn test_model_error_from_anyhow_keeps_context_chain() {
        let err: anyhow::Error = anyhow::anyhow!("no such file")
            .context("Failed to read model artifact");
        let model_err = ModelError::from(err);
        let rendered = model_err.to_string();
        assert!(rendered.contains("Failed to read model artifact"));
        assert!(rendered.contains("no such file"));
    }
}
