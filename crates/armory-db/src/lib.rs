//! # armory-db: SQLite Weapon Store
//!
//! This crate persists the Armory weapon catalog in SQLite using sqlx.
//! It implements [`armory_core::WeaponStore`], so the lifecycle rules in
//! `armory-core` run unchanged on top of it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Armory Data Flow                                 │
//! │                                                                         │
//! │  WeaponService::patch(id, request)          (armory-core)              │
//! │       │  find_by_id / persist                                          │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     armory-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repository   │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │  (weapon.rs)  │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ WeaponRepo    │    │ 001_create_  │  │   │
//! │  │   │ DbConfig      │    │ impl          │    │   weapons    │  │   │
//! │  │   │               │    │ WeaponStore   │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              SQLite Database (armory.db by default)             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database and configuration error types
//! - [`repository`] - The weapon repository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use armory_core::WeaponService;
//! use armory_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::from_env()?).await?;
//! let service = WeaponService::new(db.weapons());
//!
//! let outcome = service.list(Some("scimitar")).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ConfigError, DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::weapon::WeaponRepository;
