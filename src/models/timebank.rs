use crate::utils::time::minutes_to_time;
use serde::{Deserialize, Serialize};

/// Signed delta between worked and expected minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimebankResult {
    /// Positive = surplus, negative = deficit.
    pub minutes: i64,
    /// `+HH:MM` / `-HH:MM`
    pub formatted: String,
}

impl TimebankResult {
    pub fn from_minutes(minutes: i64) -> Self {
        Self {
            minutes,
            formatted: minutes_to_time(minutes),
        }
    }

    pub fn zero() -> Self {
        Self::from_minutes(0)
    }

    pub fn is_surplus(&self) -> bool {
        self.minutes > 0
    }

    pub fn is_deficit(&self) -> bool {
        self.minutes < 0
    }
}

impl Default for TimebankResult {
    fn default() -> Self {
        Self::zero()
    }
}
