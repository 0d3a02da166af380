//! # Restwell Engine
//!
//! Bedtime recommendation engine.
//!
//! This crate computes a recommended bedtime from three inputs: the time the
//! user wants to wake up, the amount of sleep they are aiming for, and their
//! daily coffee intake. The three inputs are encoded as a feature vector and
//! handed to a pre-trained regression model, which estimates the sleep
//! duration the user will actually need; subtracting that duration from the
//! wake-up instant yields the bedtime.
//!
//! The regression model is an external artifact produced by a separate
//! training pipeline. It is abstracted behind the [`prediction::SleepModel`]
//! trait so the calculation can be exercised with deterministic stand-ins,
//! and a ready-made implementation backed by a serialized linear model is
//! provided in [`prediction::artifact`].
//!
//! ## Architecture
//!
//! The crate is organized into three logical modules:
//!
//! - [`models`]: Domain value types (clock times, sleep and coffee amounts)
//! - [`prediction`]: Feature encoding, the model trait, artifact loading,
//!   and model configuration
//! - [`services`]: The bedtime computation invoked by callers

pub mod models;
pub mod prediction;
pub mod services;

pub use models::{ClockTime, CoffeeAmount, SleepAmount};
pub use prediction::{
    LinearSleepModel, ModelConfig, ModelError, RegressionArtifact, SleepFeatures, SleepModel,
};
pub use services::bedtime::{compute_bedtime, Bedtime, BedtimeError, BEDTIME_FAILURE_MESSAGE};
