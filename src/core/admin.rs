use crate::core::registry::Registry;
use crate::core::{Result, SpaceId, Statistics};
use crate::utils::error::ParkingError;
use chrono::{DateTime, Utc};

pub fn statistics(registry: &Registry) -> Statistics {
    Statistics {
        occupied: registry.iter().filter(|space| space.is_occupied()).count(),
        total: registry.len(),
    }
}

/// 管理員強制設定佔用狀態，不檢查目前狀態
pub fn set_occupancy(
    registry: &mut Registry,
    id: SpaceId,
    occupy: bool,
    now: DateTime<Utc>,
) -> Result<()> {
    let space = registry
        .find_by_id_mut(id)
        .ok_or(ParkingError::SpaceNotFound(id.into()))?;

    if occupy {
        space.occupy(now);
    } else {
        space.vacate();
    }

    tracing::debug!(space_id = id, occupy, "occupancy overridden by admin");
    Ok(())
}
