use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_RATE_PER_MINUTE: f64 = 0.05;

/// 每分鐘費率（貨幣單位）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeeRate(f64);

impl FeeRate {
    pub fn per_minute(rate: f64) -> Self {
        Self(rate)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for FeeRate {
    fn default() -> Self {
        Self(DEFAULT_RATE_PER_MINUTE)
    }
}

/// Whole elapsed seconds over 60, clamped at zero.
pub fn elapsed_minutes(occupied_since: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let seconds = (now - occupied_since).num_seconds().max(0);
    seconds as f64 / 60.0
}

pub fn compute_fee(occupied_since: DateTime<Utc>, now: DateTime<Utc>, rate: FeeRate) -> f64 {
    elapsed_minutes(occupied_since, now) * rate.value()
}
