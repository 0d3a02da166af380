//! User-supplied sleep and caffeine inputs.
//!
//! Both types carry the picker bounds the interactive form enforces, but the
//! calculation itself accepts any positive sleep amount and any cup count.
//! The bounds are exposed so callers can build their own input widgets
//! without duplicating the ranges.

use serde::{Deserialize, Serialize};

/// Desired amount of sleep, in hours.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct SleepAmount(f64);

impl SleepAmount {
    /// Smallest value offered by the picker.
    pub const PICKER_MIN: f64 = 4.0;
    /// Largest value offered by the picker.
    pub const PICKER_MAX: f64 = 12.0;
    /// Picker increment.
    pub const PICKER_STEP: f64 = 0.25;

    /// Create a sleep amount from hours.
    ///
    /// Returns `None` for non-finite or non-positive values; anything above
    /// zero is accepted even when it lies outside the picker range.
    pub fn new(hours: f64) -> Option<Self> {
        if hours.is_finite() && hours > 0.0 {
            Some(Self(hours))
        } else {
            None
        }
    }

    /// Hours of desired sleep.
    pub fn hours(&self) -> f64 {
        self.0
    }

    /// Whether the value lies within the range the picker offers.
    pub fn is_within_picker_range(&self) -> bool {
        (Self::PICKER_MIN..=Self::PICKER_MAX).contains(&self.0)
    }
}

impl Default for SleepAmount {
    /// The picker's initial selection: 8 hours.
    fn default() -> Self {
        Self(8.0)
    }
}

/// Daily coffee intake, in cups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CoffeeAmount(u32);

impl CoffeeAmount {
    /// Largest cup count offered by the picker.
    pub const PICKER_MAX: u32 = 20;

    /// Create a coffee amount from a cup count. Any count is accepted.
    pub fn new(cups: u32) -> Self {
        Self(cups)
    }

    /// Cups per day.
    pub fn cups(&self) -> u32 {
        self.0
    }

    /// Whether the value lies within the range the picker offers.
    pub fn is_within_picker_range(&self) -> bool {
        self.0 <= Self::PICKER_MAX
    }
}

impl Default for CoffeeAmount {
    /// The picker's initial selection: 1 cup.
    fn default() -> Self {
        Self(1)
    }
}
