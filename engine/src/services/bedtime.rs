//! The bedtime computation.
//!
//! Encodes the user's three inputs as model features, asks the sleep model
//! for the predicted sleep duration, and subtracts that duration from the
//! wake-up instant. Pure request/response: each call runs to completion,
//! holds no state, and can be repeated freely.

use std::fmt;

use log::{debug, warn};
use serde::Serialize;

use crate::models::{ClockTime, CoffeeAmount, SleepAmount};
use crate::prediction::{ModelError, SleepFeatures, SleepModel};

/// The user-facing message shown for any failed calculation.
pub const BEDTIME_FAILURE_MESSAGE: &str =
    "Sorry, there was a problem calculating your bedtime.";

/// Error returned when a bedtime cannot be computed.
///
/// Every underlying cause collapses into the one `ModelFailure` variant and
/// displays the same fixed message; the original cause is retained only as
/// `source()` for logging.
#[derive(Debug, thiserror::Error)]
pub enum BedtimeError {
    #[error("{}", BEDTIME_FAILURE_MESSAGE)]
    ModelFailure(#[from] ModelError),
}

/// A recommended bedtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bedtime {
    time: ClockTime,
    predicted_sleep_seconds: f64,
}

impl Bedtime {
    /// The recommended clock time to fall asleep.
    pub fn time(&self) -> ClockTime {
        self.time
    }

    /// The model's predicted sleep duration, in seconds.
    pub fn predicted_sleep_seconds(&self) -> f64 {
        self.predicted_sleep_seconds
    }
}

impl fmt::Display for Bedtime {
    /// Short 12-hour rendering of the recommended time, e.g. `11:00 PM`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.time.fmt(f)
    }
}

/// Compute the recommended bedtime for a wake-up time, desired sleep amount,
/// and daily coffee intake.
///
/// The three inputs are encoded as [`SleepFeatures`], the model estimates
/// the sleep duration in seconds, and that duration is subtracted from the
/// wake-up instant with wraparound across midnight.
///
/// Any model failure is returned as [`BedtimeError::ModelFailure`], which
/// displays the fixed generic message; no partial result is produced and no
/// retry is attempted.
///
/// # Examples
///
/// ```
/// use restwell_engine::models::{ClockTime, CoffeeAmount, SleepAmount};
/// use restwell_engine::prediction::{LinearSleepModel, RegressionArtifact};
/// use restwell_engine::services::bedtime::compute_bedtime;
///
/// let model = LinearSleepModel::new(RegressionArtifact {
///     bias: 0.0,
///     wake_weight: 0.0,
///     sleep_weight: 3600.0,
///     coffee_weight: 0.0,
/// });
///
/// let bedtime = compute_bedtime(
///     ClockTime::from_hm_opt(7, 0).unwrap(),
///     SleepAmount::new(8.0).unwrap(),
///     CoffeeAmount::new(1),
///     &model,
/// )
/// .unwrap();
///
/// assert_eq!(bedtime.to_string(), "11:00 PM");
/// ```
pub fn compute_bedtime(
    wake_up: ClockTime,
    sleep_amount: SleepAmount,
    coffee_amount: CoffeeAmount,
    model: &dyn SleepModel,
) -> Result<Bedtime, BedtimeError> {
    let features = SleepFeatures::encode(wake_up, sleep_amount, coffee_amount);

    let predicted = model.estimate_sleep(&features).map_err(|e| {
        warn!("sleep model failed: {}", e);
        e
    })?;

    if !predicted.is_finite() {
        warn!("sleep model returned a non-finite duration: {}", predicted);
        return Err(ModelError::new("model returned a non-finite sleep duration").into());
    }

    debug!(
        "features wake={}s sleep={}h coffee={} -> predicted sleep {:.1}s",
        features.wake_seconds, features.sleep_hours, features.coffee_cups, predicted
    );

    let time = wake_up.minus_seconds(predicted.round() as i64);

    Ok(Bedtime {
        time,
        predicted_sleep_seconds: predicted,
    })
}
