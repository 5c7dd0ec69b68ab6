use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type SpaceId = u32;

/// 單一車位。`occupied_since` 有值即代表已佔用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingSpace {
    id: SpaceId,
    occupied_since: Option<DateTime<Utc>>,
}

impl ParkingSpace {
    pub fn new(id: SpaceId) -> Self {
        Self {
            id,
            occupied_since: None,
        }
    }

    pub fn id(&self) -> SpaceId {
        self.id
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied_since.is_some()
    }

    pub fn occupied_since(&self) -> Option<DateTime<Utc>> {
        self.occupied_since
    }

    /// Restamps an already occupied space.
    pub fn occupy(&mut self, now: DateTime<Utc>) {
        self.occupied_since = Some(now);
    }

    pub fn vacate(&mut self) {
        self.occupied_since = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub occupied: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub space_id: SpaceId,
    pub occupied_since: DateTime<Utc>,
    pub billed_at: DateTime<Utc>,
    pub minutes: f64,
    pub fee: f64,
}
