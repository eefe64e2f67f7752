//! # Weapon Repository
//!
//! Database operations for weapons.
//!
//! ## Column Binding
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  INSERT and UPDATE bind the same 26 columns in the same order          │
//! │  (everything except `id`), so a record written by `create` and one     │
//! │  written by `update` are indistinguishable.                            │
//! │                                                                         │
//! │  Weapon ──bind_columns──► name, examine, ..., weight, image_url,       │
//! │                            modifiable                                   │
//! │                                                                         │
//! │  weight:      Weight(i64) thousandths ──► INTEGER                      │
//! │  modifiable:  bool                    ──► INTEGER 0/1                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Criteria search uses the default [`WeaponStore::find_matching`], which
//! filters the full listing with the same matcher as the in-memory store.

use async_trait::async_trait;
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;
use sqlx::{Sqlite, SqlitePool};
use tracing::debug;

use armory_core::{StoreResult, Weapon, WeaponId, WeaponStore};

use crate::error::{DbError, DbResult};

const SELECT_WEAPONS: &str = r#"
    SELECT
        id, name, examine, exchange_price, high_alch_price,
        required_attack_lvl, required_strength_lvl,
        primary_attack_type, secondary_attack_type, attack_speed,
        attack_stab, attack_slash, attack_crush, attack_magic, attack_ranged,
        defence_stab, defence_slash, defence_crush, defence_magic, defence_ranged,
        melee_strength, magic_strength, ranged_strength, prayer_bonus,
        weight, image_url, modifiable
    FROM weapons
"#;

const INSERT_WEAPON: &str = r#"
    INSERT INTO weapons (
        name, examine, exchange_price, high_alch_price,
        required_attack_lvl, required_strength_lvl,
        primary_attack_type, secondary_attack_type, attack_speed,
        attack_stab, attack_slash, attack_crush, attack_magic, attack_ranged,
        defence_stab, defence_slash, defence_crush, defence_magic, defence_ranged,
        melee_strength, magic_strength, ranged_strength, prayer_bonus,
        weight, image_url, modifiable
    ) VALUES (
        ?, ?, ?, ?,
        ?, ?,
        ?, ?, ?,
        ?, ?, ?, ?, ?,
        ?, ?, ?, ?, ?,
        ?, ?, ?, ?,
        ?, ?, ?
    )
"#;

const UPDATE_WEAPON: &str = r#"
    UPDATE weapons SET
        name = ?, examine = ?, exchange_price = ?, high_alch_price = ?,
        required_attack_lvl = ?, required_strength_lvl = ?,
        primary_attack_type = ?, secondary_attack_type = ?, attack_speed = ?,
        attack_stab = ?, attack_slash = ?, attack_crush = ?, attack_magic = ?, attack_ranged = ?,
        defence_stab = ?, defence_slash = ?, defence_crush = ?, defence_magic = ?, defence_ranged = ?,
        melee_strength = ?, magic_strength = ?, ranged_strength = ?, prayer_bonus = ?,
        weight = ?, image_url = ?, modifiable = ?
    WHERE id = ?
"#;

/// Binds every column except `id`, in table order.
fn bind_columns<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    weapon: &'q Weapon,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    query
        .bind(weapon.name.as_str())
        .bind(weapon.examine.as_deref())
        .bind(weapon.exchange_price)
        .bind(weapon.high_alch_price)
        .bind(weapon.required_attack_lvl)
        .bind(weapon.required_strength_lvl)
        .bind(weapon.primary_attack_type.as_str())
        .bind(weapon.secondary_attack_type.as_str())
        .bind(weapon.attack_speed)
        .bind(weapon.attack_stab)
        .bind(weapon.attack_slash)
        .bind(weapon.attack_crush)
        .bind(weapon.attack_magic)
        .bind(weapon.attack_ranged)
        .bind(weapon.defence_stab)
        .bind(weapon.defence_slash)
        .bind(weapon.defence_crush)
        .bind(weapon.defence_magic)
        .bind(weapon.defence_ranged)
        .bind(weapon.melee_strength)
        .bind(weapon.magic_strength)
        .bind(weapon.ranged_strength)
        .bind(weapon.prayer_bonus)
        .bind(weapon.weight)
        .bind(weapon.image_url.as_deref())
        .bind(weapon.modifiable)
}

/// Repository for weapon database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = WeaponRepository::new(pool);
///
/// let weapon = repo.get_by_id(5).await?;
/// let total = repo.count().await?;
///
/// // Or hand it to the service, which goes through WeaponStore
/// let service = WeaponService::new(repo);
/// ```
#[derive(Debug, Clone)]
pub struct WeaponRepository {
    pool: SqlitePool,
}

impl WeaponRepository {
    /// Creates a new WeaponRepository.
    pub fn new(pool: SqlitePool) -> Self {
        WeaponRepository { pool }
    }

    /// Lists every weapon, ordered by id.
    pub async fn list(&self) -> DbResult<Vec<Weapon>> {
        let sql = format!("{SELECT_WEAPONS} ORDER BY id");

        let weapons = sqlx::query_as::<_, Weapon>(&sql)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = weapons.len(), "Listed weapons");
        Ok(weapons)
    }

    /// Gets a weapon by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Weapon))` - Weapon found
    /// * `Ok(None)` - No weapon with that ID
    pub async fn get_by_id(&self, id: WeaponId) -> DbResult<Option<Weapon>> {
        debug!(id = %id, "Getting weapon by ID");

        let sql = format!("{SELECT_WEAPONS} WHERE id = ?");

        let weapon = sqlx::query_as::<_, Weapon>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(weapon)
    }

    /// Inserts a new weapon.
    ///
    /// The incoming `id` is ignored; SQLite assigns the next AUTOINCREMENT
    /// value, which is never reused even after a delete.
    ///
    /// ## Returns
    /// * `Ok(Weapon)` - The weapon with its assigned id
    pub async fn create(&self, weapon: &Weapon) -> DbResult<Weapon> {
        debug!(name = %weapon.name, "Inserting weapon");

        let result = bind_columns(sqlx::query(INSERT_WEAPON), weapon)
            .execute(&self.pool)
            .await?;

        let rowid = result.last_insert_rowid();
        let id = WeaponId::try_from(rowid)
            .map_err(|_| DbError::Internal(format!("weapon rowid {rowid} exceeds id range")))?;

        Ok(Weapon {
            id,
            ..weapon.clone()
        })
    }

    /// Overwrites every column of an existing weapon.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - Weapon doesn't exist
    pub async fn update(&self, weapon: &Weapon) -> DbResult<()> {
        debug!(id = %weapon.id, "Updating weapon");

        let result = bind_columns(sqlx::query(UPDATE_WEAPON), weapon)
            .bind(weapon.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Weapon", weapon.id));
        }

        Ok(())
    }

    /// Deletes a weapon row.
    ///
    /// ## Returns
    /// * `Ok(())` - Row removed
    /// * `Err(DbError::NotFound)` - Weapon doesn't exist
    pub async fn delete(&self, id: WeaponId) -> DbResult<()> {
        debug!(id = %id, "Deleting weapon");

        let result = sqlx::query("DELETE FROM weapons WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Weapon", id));
        }

        Ok(())
    }

    /// Counts stored weapons (for diagnostics and seeding).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM weapons")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// WeaponStore Implementation
// =============================================================================

#[async_trait]
impl WeaponStore for WeaponRepository {
    async fn list_all(&self) -> StoreResult<Vec<Weapon>> {
        Ok(self.list().await?)
    }

    async fn find_by_id(&self, id: WeaponId) -> StoreResult<Option<Weapon>> {
        Ok(self.get_by_id(id).await?)
    }

    async fn insert(&self, weapon: Weapon) -> StoreResult<Weapon> {
        Ok(self.create(&weapon).await?)
    }

    async fn persist(&self, weapon: &Weapon) -> StoreResult<()> {
        Ok(self.update(weapon).await?)
    }

    async fn remove(&self, weapon: &Weapon) -> StoreResult<()> {
        Ok(self.delete(weapon.id).await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
