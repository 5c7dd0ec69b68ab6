use crate::core::{ParkingSpace, SpaceId};
use parking_lot::Mutex;
use std::sync::Arc;

/// Registry shared between console loops. Hold the guard for a whole
/// check-then-mutate sequence and never across an input prompt.
pub type SharedRegistry = Arc<Mutex<Registry>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    spaces: Vec<ParkingSpace>,
}

impl Registry {
    /// 建立 `1..=n` 的車位，全部空置
    pub fn create(n: u32) -> Self {
        let spaces = (1..=n).map(ParkingSpace::new).collect();
        Self { spaces }
    }

    pub fn shared(n: u32) -> SharedRegistry {
        Arc::new(Mutex::new(Self::create(n)))
    }

    pub fn find_by_id(&self, id: SpaceId) -> Option<&ParkingSpace> {
        self.spaces.iter().find(|space| space.id() == id)
    }

    pub fn find_by_id_mut(&mut self, id: SpaceId) -> Option<&mut ParkingSpace> {
        self.spaces.iter_mut().find(|space| space.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParkingSpace> {
        self.spaces.iter()
    }

    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_create_assigns_sequential_vacant_spaces() {
        for n in [0u32, 1, 3, 10] {
            let registry = Registry::create(n);
            assert_eq!(registry.len(), n as usize);

            let ids: Vec<SpaceId> = registry.iter().map(|s| s.id()).collect();
            assert_eq!(ids, (1..=n).collect::<Vec<_>>());
            assert!(registry.iter().all(|s| !s.is_occupied()));
            assert!(registry.iter().all(|s| s.occupied_since().is_none()));
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::create(0);
        assert!(registry.is_empty());
        assert!(registry.find_by_id(1).is_none());
    }

    #[test]
    fn test_find_by_id() {
        let mut registry = Registry::create(5);
        assert_eq!(registry.find_by_id(3).map(|s| s.id()), Some(3));
        assert!(registry.find_by_id(0).is_none());
        assert!(registry.find_by_id(6).is_none());

        let now = Utc::now();
        registry.find_by_id_mut(4).unwrap().occupy(now);
        assert_eq!(registry.find_by_id(4).unwrap().occupied_since(), Some(now));
    }

    #[test]
    fn test_shared_registry_sees_mutations() {
        let shared = Registry::shared(2);
        let other = Arc::clone(&shared);

        other.lock().find_by_id_mut(2).unwrap().occupy(Utc::now());
        assert!(shared.lock().find_by_id(2).unwrap().is_occupied());
    }
}
