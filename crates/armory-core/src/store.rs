//! # Weapon Store
//!
//! The persistence contract the service consumes, plus an in-memory
//! implementation.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    WeaponStore                                          │
//! │                                                                         │
//! │  list_all()            → Vec<Weapon>        ordered by id              │
//! │  find_by_id(id)        → Option<Weapon>                                 │
//! │  find_matching(text)   → Vec<Weapon>        list_all + criteria filter │
//! │  insert(weapon)        → Weapon             store assigns the id        │
//! │  persist(&weapon)      → ()                 full record, not a diff     │
//! │  remove(&weapon)       → ()                                             │
//! │                                                                         │
//! │  Every failure → StoreError (underlying cause attached as source)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `persist` receives the complete post-merge record built by the service.
//! There is no change tracking: what is passed is what gets written.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::criteria;
use crate::error::StoreError;
use crate::types::{Weapon, WeaponId};

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence for weapons.
///
/// Implementations: [`MemoryWeaponStore`] here, `WeaponRepository` in
/// armory-db (SQLite).
#[async_trait]
pub trait WeaponStore: Send + Sync {
    /// Returns every weapon, ordered by id.
    async fn list_all(&self) -> StoreResult<Vec<Weapon>>;

    /// Returns the weapon with this id, if any.
    async fn find_by_id(&self, id: WeaponId) -> StoreResult<Option<Weapon>>;

    /// Returns the weapons matching a criteria string.
    async fn find_matching(&self, criteria: &str) -> StoreResult<Vec<Weapon>> {
        Ok(criteria::filter(self.list_all().await?, criteria))
    }

    /// Stores a new weapon. The incoming `id` is ignored; the returned
    /// record carries the assigned one.
    async fn insert(&self, weapon: Weapon) -> StoreResult<Weapon>;

    /// Overwrites the stored record that has `weapon.id`.
    async fn persist(&self, weapon: &Weapon) -> StoreResult<()>;

    /// Deletes the stored record that has `weapon.id`.
    async fn remove(&self, weapon: &Weapon) -> StoreResult<()>;
}

// =============================================================================
// In-Memory Store
// =============================================================================

#[derive(Debug, Default)]
struct MemoryState {
    weapons: BTreeMap<WeaponId, Weapon>,
    last_id: WeaponId,
}

/// A `WeaponStore` backed by an ordered map.
///
/// Ids start at 1 and are never reused, matching an autoincrement column.
/// Useful for tests and for embedding the service without a database.
#[derive(Debug, Default)]
pub struct MemoryWeaponStore {
    state: Mutex<MemoryState>,
}

impl MemoryWeaponStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut MemoryState) -> StoreResult<T>) -> StoreResult<T> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| StoreError::new("in-memory weapon store lock poisoned"))?;
        f(&mut state)
    }
}

#[async_trait]
impl WeaponStore for MemoryWeaponStore {
    async fn list_all(&self) -> StoreResult<Vec<Weapon>> {
        self.with_state(|state| Ok(state.weapons.values().cloned().collect()))
    }

    async fn find_by_id(&self, id: WeaponId) -> StoreResult<Option<Weapon>> {
        self.with_state(|state| Ok(state.weapons.get(&id).cloned()))
    }

    async fn insert(&self, mut weapon: Weapon) -> StoreResult<Weapon> {
        self.with_state(|state| {
            state.last_id = state
                .last_id
                .checked_add(1)
                .ok_or_else(|| StoreError::new("weapon id space exhausted"))?;
            weapon.id = state.last_id;
            debug!(id = weapon.id, name = %weapon.name, "Inserted weapon in memory");
            state.weapons.insert(weapon.id, weapon.clone());
            Ok(weapon)
        })
    }

    async fn persist(&self, weapon: &Weapon) -> StoreResult<()> {
        self.with_state(|state| match state.weapons.get_mut(&weapon.id) {
            Some(stored) => {
                *stored = weapon.clone();
                Ok(())
            }
            None => Err(StoreError::new(format!(
                "cannot persist weapon #{}: no such record",
                weapon.id
            ))),
        })
    }

    async fn remove(&self, weapon: &Weapon) -> StoreResult<()> {
        self.with_state(|state| match state.weapons.remove(&weapon.id) {
            Some(_) => Ok(()),
            None => Err(StoreError::new(format!(
                "cannot remove weapon #{}: no such record",
                weapon.id
            ))),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CreateWeaponRequest;
    use crate::weight::Weight;

    fn unsaved(name: &str) -> Weapon {
        Weapon::unsaved(CreateWeaponRequest::new(
            name,
            "Test weapon.",
            "Slash",
            "Stab",
            Weight::from_units(1),
        ))
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let store = MemoryWeaponStore::new();

        let first = store.insert(unsaved("Bronze sword")).await.unwrap();
        let second = store.insert(unsaved("Iron sword")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.find_by_id(2).await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let store = MemoryWeaponStore::new();
        let first = store.insert(unsaved("Bronze sword")).await.unwrap();
        store.remove(&first).await.unwrap();

        let next = store.insert(unsaved("Iron sword")).await.unwrap();
        assert_eq!(next.id, 2);
    }

    #[tokio::test]
    async fn test_persist_overwrites_record() {
        let store = MemoryWeaponStore::new();
        let mut weapon = store.insert(unsaved("Bronze sword")).await.unwrap();

        weapon.attack_stab = 4;
        store.persist(&weapon).await.unwrap();

        assert_eq!(store.find_by_id(weapon.id).await.unwrap().unwrap().attack_stab, 4);
    }

    #[tokio::test]
    async fn test_persist_and_remove_unknown_fail() {
        let store = MemoryWeaponStore::new();
        let mut ghost = unsaved("Ghost blade");
        ghost.id = 99;

        assert!(store.persist(&ghost).await.is_err());
        assert!(store.remove(&ghost).await.is_err());
    }

    #[tokio::test]
    async fn test_find_matching_uses_criteria() {
        let store = MemoryWeaponStore::new();
        store.insert(unsaved("Bronze sword")).await.unwrap();
        store.insert(unsaved("Iron sword")).await.unwrap();
        store.insert(unsaved("Iron mace")).await.unwrap();

        let found = store.find_matching("iron").await.unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|w| w.name.starts_with("Iron")));
    }
}
