//! # Weapon Service
//!
//! The lifecycle engine: every create, read, search, update, patch and
//! delete goes through [`WeaponService`], which is the only place that
//! decides whether an operation succeeds and what it changed.
//!
//! ## Decision Sequence for Mutations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │               update(id, req) / patch(id, req) / delete(id)             │
//! │                                                                         │
//! │  1. find_by_id(id) ──── None ────────────────► NotFound                │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  2. weapon.modifiable? ── false ─────────────► Unmodifiable            │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  3. validate (update: whole request,                                   │
//! │               patch: each Set field) ─ bad ──► Validation              │
//! │          │                                      (nothing written)       │
//! │          ▼                                                              │
//! │  4. persist / remove ─── store fails ────────► Storage                 │
//! │          │                                                              │
//! │          ▼                                                              │
//! │        Ok(weapon)                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The order is fixed: a missing id is always `NotFound`, never
//! `Unmodifiable`, and validation never runs against a frozen record.
//!
//! ## Concurrency
//! Each call is one read-check-write against the store with no locking of
//! its own. Two concurrent updates or patches of the same id race and the
//! last `persist` wins; a patch computed from a stale read overwrites the
//! other writer's fields. The service holds no state between calls.

use tracing::{debug, info, warn};

use crate::error::{Operation, WeaponError, WeaponResult};
use crate::store::WeaponStore;
use crate::types::{CreateWeaponRequest, PatchWeaponRequest, Weapon, WeaponId};
use crate::validation::{
    validate_attack_type, validate_create_request, validate_examine, validate_image_url,
    validate_name, ValidationResult,
};

// =============================================================================
// List Outcome
// =============================================================================

/// Result of a listing or criteria search.
///
/// An empty search is a successful outcome of its own, not an error and not
/// an empty list: the request was fine, nothing matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOutcome {
    /// At least one weapon, or the full catalog when no criteria was given.
    Weapons(Vec<Weapon>),

    /// Criteria was given and nothing matched.
    NoCriteriaMatch { criteria: String },
}

impl ListOutcome {
    /// Human-readable message for an empty search.
    pub const NO_MATCH_MESSAGE: &'static str =
        "There are no items that matched your search criteria.";

    /// Conventional HTTP status for an empty search (202 Accepted).
    pub const NO_MATCH_STATUS_HINT: u16 = 202;

    /// The weapons found; empty for `NoCriteriaMatch`.
    pub fn weapons(&self) -> &[Weapon] {
        match self {
            ListOutcome::Weapons(weapons) => weapons,
            ListOutcome::NoCriteriaMatch { .. } => &[],
        }
    }

    /// Consumes the outcome, returning the weapons found.
    pub fn into_weapons(self) -> Vec<Weapon> {
        match self {
            ListOutcome::Weapons(weapons) => weapons,
            ListOutcome::NoCriteriaMatch { .. } => Vec::new(),
        }
    }

    /// True for the soft "nothing matched" outcome.
    pub fn is_no_match(&self) -> bool {
        matches!(self, ListOutcome::NoCriteriaMatch { .. })
    }
}

// =============================================================================
// Service
// =============================================================================

/// Orchestrates validation, criteria search and the store.
///
/// ## Usage
/// ```rust,ignore
/// let service = WeaponService::new(db.weapons());
///
/// let whip = service.create(request).await?;
/// service.patch(whip.id, patch).await?;
/// ```
#[derive(Debug, Clone)]
pub struct WeaponService<S> {
    store: S,
}

impl<S: WeaponStore> WeaponService<S> {
    /// Creates a service over the given store.
    pub fn new(store: S) -> Self {
        WeaponService { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Lists the catalog, optionally filtered by criteria.
    ///
    /// ## Behavior
    /// - `None` → every weapon
    /// - Criteria with matches → the matching weapons
    /// - Criteria without matches → [`ListOutcome::NoCriteriaMatch`]
    ///
    /// Any present criteria is matched as given, whitespace included.
    pub async fn list(&self, criteria: Option<&str>) -> WeaponResult<ListOutcome> {
        let Some(criteria) = criteria else {
            return Ok(ListOutcome::Weapons(self.store.list_all().await?));
        };

        debug!(criteria = %criteria, "Searching weapons");

        let found = self.store.find_matching(criteria).await?;

        debug!(count = found.len(), "Search returned weapons");

        if found.is_empty() {
            return Ok(ListOutcome::NoCriteriaMatch {
                criteria: criteria.to_string(),
            });
        }

        Ok(ListOutcome::Weapons(found))
    }

    /// Gets a weapon by id.
    pub async fn get(&self, id: WeaponId) -> WeaponResult<Weapon> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| WeaponError::not_found(id, Operation::Search))
    }

    /// Creates a weapon.
    ///
    /// Validates name, examine and image URL (in that order, then the
    /// attack types), applies defaults and inserts. The returned record
    /// carries the id the store assigned.
    pub async fn create(&self, request: CreateWeaponRequest) -> WeaponResult<Weapon> {
        validate_create_request(&request)?;

        let weapon = self.store.insert(Weapon::unsaved(request)).await?;

        info!(id = weapon.id, name = %weapon.name, "Weapon created");
        Ok(weapon)
    }

    /// Replaces every field of a weapon (full replace).
    ///
    /// ## Errors
    /// - `NotFound` if no weapon has this id
    /// - `Unmodifiable` if the weapon is frozen
    /// - `Validation` if the request breaks a field rule (nothing written)
    pub async fn update(&self, id: WeaponId, request: CreateWeaponRequest) -> WeaponResult<Weapon> {
        let mut weapon = self.find_modifiable(id, Operation::Update).await?;

        validate_create_request(&request)?;

        weapon.replace_with(request);
        self.store.persist(&weapon).await?;

        info!(id, "Weapon updated");
        Ok(weapon)
    }

    /// Overwrites only the fields set in the request (partial merge).
    ///
    /// All-or-nothing: the merge happens on a copy, and the first field
    /// that fails validation aborts the patch before anything is
    /// persisted. Absent fields keep their stored value.
    pub async fn patch(&self, id: WeaponId, request: PatchWeaponRequest) -> WeaponResult<Weapon> {
        let stored = self.find_modifiable(id, Operation::Patch).await?;

        let merged = merge_patch(stored, request)?;
        self.store.persist(&merged).await?;

        info!(id, "Weapon patched");
        Ok(merged)
    }

    /// Deletes a weapon, returning the removed record.
    pub async fn delete(&self, id: WeaponId) -> WeaponResult<Weapon> {
        let weapon = self.find_modifiable(id, Operation::Delete).await?;

        self.store.remove(&weapon).await?;

        info!(id, name = %weapon.name, "Weapon deleted");
        Ok(weapon)
    }

    /// Existence check, then modifiability check. Always in this order.
    async fn find_modifiable(&self, id: WeaponId, operation: Operation) -> WeaponResult<Weapon> {
        let weapon = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| WeaponError::not_found(id, operation))?;

        if !weapon.modifiable {
            warn!(id, ?operation, "Refused to change unmodifiable weapon");
            return Err(WeaponError::unmodifiable(id, operation));
        }

        Ok(weapon)
    }
}

/// Applies a patch to a copy of the stored weapon.
///
/// Fields are validated and applied in declaration order; returning early
/// on a validation error drops the partially merged copy, so the caller
/// never persists a half-applied patch.
fn merge_patch(mut weapon: Weapon, request: PatchWeaponRequest) -> ValidationResult<Weapon> {
    let PatchWeaponRequest {
        name,
        examine,
        exchange_price,
        high_alch_price,
        required_attack_lvl,
        required_strength_lvl,
        primary_attack_type,
        secondary_attack_type,
        attack_speed,
        attack_stab,
        attack_slash,
        attack_crush,
        attack_magic,
        attack_ranged,
        defence_stab,
        defence_slash,
        defence_crush,
        defence_magic,
        defence_ranged,
        melee_strength,
        magic_strength,
        ranged_strength,
        prayer_bonus,
        weight,
        image_url,
        modifiable,
    } = request;

    if let Some(name) = name.into_option() {
        validate_name(&name)?;
        weapon.name = name;
    }
    if let Some(examine) = examine.into_option() {
        validate_examine(&examine)?;
        weapon.examine = Some(examine);
    }
    if let Some(price) = exchange_price.into_option() {
        weapon.exchange_price = Some(price);
    }
    if let Some(price) = high_alch_price.into_option() {
        weapon.high_alch_price = Some(price);
    }
    required_attack_lvl.apply_to(&mut weapon.required_attack_lvl);
    required_strength_lvl.apply_to(&mut weapon.required_strength_lvl);
    if let Some(attack_type) = primary_attack_type.into_option() {
        validate_attack_type("primaryAttackType", &attack_type)?;
        weapon.primary_attack_type = attack_type;
    }
    if let Some(attack_type) = secondary_attack_type.into_option() {
        validate_attack_type("secondaryAttackType", &attack_type)?;
        weapon.secondary_attack_type = attack_type;
    }
    attack_speed.apply_to(&mut weapon.attack_speed);
    attack_stab.apply_to(&mut weapon.attack_stab);
    attack_slash.apply_to(&mut weapon.attack_slash);
    attack_crush.apply_to(&mut weapon.attack_crush);
    attack_magic.apply_to(&mut weapon.attack_magic);
    attack_ranged.apply_to(&mut weapon.attack_ranged);
    defence_stab.apply_to(&mut weapon.defence_stab);
    defence_slash.apply_to(&mut weapon.defence_slash);
    defence_crush.apply_to(&mut weapon.defence_crush);
    defence_magic.apply_to(&mut weapon.defence_magic);
    defence_ranged.apply_to(&mut weapon.defence_ranged);
    melee_strength.apply_to(&mut weapon.melee_strength);
    magic_strength.apply_to(&mut weapon.magic_strength);
    ranged_strength.apply_to(&mut weapon.ranged_strength);
    prayer_bonus.apply_to(&mut weapon.prayer_bonus);
    weight.apply_to(&mut weapon.weight);
    if let Some(url) = image_url.into_option() {
        validate_image_url(Some(&url))?;
        weapon.image_url = Some(url);
    }
    modifiable.apply_to(&mut weapon.modifiable);

    Ok(weapon)
}

// =============================================================================
// Unit Tests
// =============================================================================
