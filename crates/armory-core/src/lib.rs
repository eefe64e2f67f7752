//! # armory-core: Weapon Lifecycle Rules
//!
//! This crate holds every decision Armory makes about a weapon record:
//! which inputs are valid, which records may change, how a full replace
//! differs from a partial patch, and what a criteria search returns.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Armory Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Boundary layer (HTTP / CLI, not in this repo)        │   │
//! │  │    binds a request, calls exactly ONE service operation         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ armory-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │validation │  │ criteria  │  │  service  │  │   store   │  │   │
//! │  │   │ name,     │  │ substring │  │ guard,    │  │ contract  │  │   │
//! │  │   │ examine,  │  │ matcher   │  │ merge,    │  │ + memory  │  │   │
//! │  │   │ image url │  │           │  │ errors    │  │   impl    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ WeaponStore trait                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    armory-db (Database Layer)                   │   │
//! │  │              SQLite queries, migrations, repository             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Weapon`, create/patch requests, `Patch<T>`
//! - [`weight`] - fixed-point weight with three fractional digits
//! - [`validation`] - field rules
//! - [`criteria`] - criteria search predicate
//! - [`store`] - the `WeaponStore` contract and `MemoryWeaponStore`
//! - [`service`] - `WeaponService`, the lifecycle engine
//! - [`error`] - error taxonomy
//!
//! ## Example Usage
//!
//! ```rust
//! use armory_core::{CreateWeaponRequest, MemoryWeaponStore, Weight, WeaponService};
//!
//! # tokio_test_block(async {
//! let service = WeaponService::new(MemoryWeaponStore::new());
//!
//! let request = CreateWeaponRequest::new(
//!     "Abyssal whip",
//!     "A weapon from the abyss.",
//!     "Slash",
//!     "Slash",
//!     Weight::from_thousandths(453),
//! );
//! let whip = service.create(request).await.unwrap();
//! assert_eq!(service.get(whip.id).await.unwrap(), whip);
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod criteria;
pub mod error;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;
pub mod weight;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ErrorKind, Operation, StoreError, ValidationError, WeaponError, WeaponResult};
pub use service::{ListOutcome, WeaponService};
pub use store::{MemoryWeaponStore, StoreResult, WeaponStore};
pub use types::*;
pub use weight::Weight;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum length of `name` and `examine`.
pub const MIN_TEXT_LEN: usize = 3;

/// Maximum length of a weapon name.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length of the examine text.
pub const MAX_EXAMINE_LEN: usize = 255;

/// Maximum length of both attack type columns.
///
/// The storage column is 10 characters wide, so the request limit is held
/// to the same width instead of truncating on write.
pub const MAX_ATTACK_TYPE_LEN: usize = 10;

/// Storage-side default attack speed (game ticks).
pub const DEFAULT_ATTACK_SPEED: i32 = 4;

/// Storage-side default level requirement.
pub const DEFAULT_REQUIRED_LEVEL: i32 = 1;
