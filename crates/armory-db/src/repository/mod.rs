//! # Repository Module
//!
//! Database repository implementations for Armory.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Where the Repository Sits                            │
//! │                                                                         │
//! │  WeaponService (armory-core)                                           │
//! │       │                                                                 │
//! │       │  store.find_by_id(5) / store.persist(&weapon)                  │
//! │       ▼                                                                 │
//! │  WeaponRepository                                                      │
//! │  ├── impl WeaponStore  (StoreResult, used by the service)              │
//! │  └── inherent methods  (DbResult: list, get_by_id, create,             │
//! │                         update, delete, count)                         │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite `weapons` table                                                │
//! │                                                                         │
//! │  The repository stores what it is given. Validation and the            │
//! │  modifiable check already happened in the service.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`WeaponRepository`](weapon::WeaponRepository) - Weapon CRUD

pub mod weapon;
