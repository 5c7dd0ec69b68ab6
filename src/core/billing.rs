use crate::core::fee::{compute_fee, elapsed_minutes, FeeRate};
use crate::core::registry::Registry;
use crate::core::{Bill, Result, SpaceId};
use crate::utils::error::ParkingError;
use chrono::{DateTime, Utc};

/// 結算費用並釋放車位；未佔用時不做任何變更
pub fn bill(registry: &mut Registry, id: SpaceId, now: DateTime<Utc>, rate: FeeRate) -> Result<Bill> {
    let space = registry
        .find_by_id_mut(id)
        .ok_or(ParkingError::SpaceNotFound(id.into()))?;

    let occupied_since = space
        .occupied_since()
        .ok_or(ParkingError::SpaceNotOccupied(id))?;

    let bill = Bill {
        space_id: id,
        occupied_since,
        billed_at: now,
        minutes: elapsed_minutes(occupied_since, now),
        fee: compute_fee(occupied_since, now, rate),
    };
    space.vacate();

    tracing::debug!(space_id = id, minutes = bill.minutes, fee = bill.fee, "space billed");
    Ok(bill)
}
