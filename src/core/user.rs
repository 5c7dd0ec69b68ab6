use crate::core::registry::Registry;
use crate::core::{Result, SpaceId};
use crate::utils::error::ParkingError;
use chrono::{DateTime, Utc};

pub fn view_available(registry: &Registry) -> Vec<SpaceId> {
    registry
        .iter()
        .filter(|space| !space.is_occupied())
        .map(|space| space.id())
        .collect()
}

/// 預約空車位；已佔用或不存在時狀態不變
pub fn reserve(registry: &mut Registry, id: SpaceId, now: DateTime<Utc>) -> Result<()> {
    let space = registry
        .find_by_id_mut(id)
        .ok_or(ParkingError::SpaceNotFound(id.into()))?;

    if space.is_occupied() {
        return Err(ParkingError::SpaceAlreadyOccupied(id));
    }

    space.occupy(now);
    tracing::debug!(space_id = id, %now, "space reserved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_available_lists_vacant_in_order() {
        let mut registry = Registry::create(4);
        reserve(&mut registry, 2, Utc::now()).unwrap();
        assert_eq!(view_available(&registry), vec![1, 3, 4]);
    }

    #[test]
    fn test_reserve_vacant_space_stamps_time() {
        let mut registry = Registry::create(3);
        let now = Utc::now();

        reserve(&mut registry, 1, now).unwrap();

        let space = registry.find_by_id(1).unwrap();
        assert!(space.is_occupied());
        assert_eq!(space.occupied_since(), Some(now));
    }

    #[test]
    fn test_reserve_occupied_space_leaves_state_unchanged() {
        let mut registry = Registry::create(3);
        let first = Utc::now();
        reserve(&mut registry, 1, first).unwrap();
        let before = registry.clone();

        let err = reserve(&mut registry, 1, first + chrono::Duration::minutes(5)).unwrap_err();
        assert!(matches!(err, ParkingError::SpaceAlreadyOccupied(1)));
        assert_eq!(registry, before);
    }

    #[test]
    fn test_reserve_unknown_space() {
        let mut registry = Registry::create(3);
        let before = registry.clone();

        let err = reserve(&mut registry, 7, Utc::now()).unwrap_err();
        assert!(matches!(err, ParkingError::SpaceNotFound(7)));
        assert_eq!(registry, before);
    }
}
