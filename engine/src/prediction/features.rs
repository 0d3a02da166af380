//! Feature encoding for the sleep model.

use serde::Serialize;

use crate::models::{ClockTime, CoffeeAmount, SleepAmount};

/// The feature vector handed to a [`super::SleepModel`].
///
/// The encoding matches the trained artifact's schema: wake-up time as whole
/// seconds since midnight, desired sleep as fractional hours, and coffee as
/// an integer cup count. The two integer features are widened to `i64`
/// because that is how the training pipeline serializes them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SleepFeatures {
    /// Wake-up time as seconds since midnight.
    pub wake_seconds: i64,
    /// Desired sleep in hours, passed through unmodified.
    pub sleep_hours: f64,
    /// Daily coffee intake in cups, passed through unmodified.
    pub coffee_cups: i64,
}

impl SleepFeatures {
    /// Encode the three user inputs into the model's feature schema.
    ///
    /// # Examples
    ///
    /// ```
    /// use restwell_engine::models::{ClockTime, CoffeeAmount, SleepAmount};
    /// use restwell_engine::prediction::SleepFeatures;
    ///
    /// let features = SleepFeatures::encode(
    ///     ClockTime::from_hm_opt(7, 30).unwrap(),
    ///     SleepAmount::new(8.0).unwrap(),
    ///     CoffeeAmount::new(2),
    /// );
    /// assert_eq!(features.wake_seconds, 27_000);
    /// assert_eq!(features.sleep_hours, 8.0);
    /// assert_eq!(features.coffee_cups, 2);
    /// ```
    pub fn encode(wake_up: ClockTime, sleep: SleepAmount, coffee: CoffeeAmount) -> Self {
        Self {
            wake_seconds: i64::from(wake_up.seconds_since_midnight()),
            sleep_hours: sleep.hours(),
            coffee_cups: i64::from(coffee.cups()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_midnight_wake() {
        let features = SleepFeatures::encode(
            ClockTime::from_hm_opt(0, 0).unwrap(),
            SleepAmount::new(4.0).unwrap(),
            CoffeeAmount::new(0),
        );
        assert_eq!(features.wake_seconds, 0);
        assert_eq!(features.sleep_hours, 4.0);
        assert_eq!(features.coffee_cups, 0);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let wake = ClockTime::from_hm_opt(6, 45).unwrap();
        let sleep = SleepAmount::new(7.25).unwrap();
        let coffee = CoffeeAmount::new(5);

        assert_eq!(
            SleepFeatures::encode(wake, sleep, coffee),
            SleepFeatures::encode(wake, sleep, coffee)
        );
    }
}
