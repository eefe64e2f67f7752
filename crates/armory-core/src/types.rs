//! # Domain Types
//!
//! The weapon record and the two request shapes that can change it.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐   ┌─────────────────────┐                     │
//! │  │ CreateWeaponRequest │   │ PatchWeaponRequest  │                     │
//! │  │  ─────────────────  │   │  ─────────────────  │                     │
//! │  │  every field given  │   │  every field is a   │                     │
//! │  │  (bonuses default 0)│   │  Patch<T>:          │                     │
//! │  │                     │   │  Absent | Set(T)    │                     │
//! │  └──────────┬──────────┘   └──────────┬──────────┘                     │
//! │     create / update            patch  │                                 │
//! │             │  (full replace)          │  (partial merge)               │
//! │             ▼                          ▼                                │
//! │  ┌─────────────────────────────────────────────────────────────┐       │
//! │  │                          Weapon                              │       │
//! │  │  id (assigned by store)  name  examine  stats…  weight      │       │
//! │  │  image_url  modifiable (false = frozen forever)             │       │
//! │  └─────────────────────────────────────────────────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::weight::Weight;
use crate::{DEFAULT_ATTACK_SPEED, DEFAULT_REQUIRED_LEVEL};

/// Identifier of a stored weapon.
pub type WeaponId = i32;

// =============================================================================
// Weapon
// =============================================================================

/// A weapon in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    /// Assigned by the store on insert, never changed afterwards.
    pub id: WeaponId,

    /// Display name (3-200 characters).
    pub name: String,

    /// Examine text (3-255 characters when given).
    pub examine: Option<String>,

    /// Grand Exchange price.
    pub exchange_price: Option<i32>,

    /// High alchemy value.
    pub high_alch_price: Option<i32>,

    pub required_attack_lvl: i32,
    pub required_strength_lvl: i32,

    /// Primary attack style, e.g. "Slash".
    pub primary_attack_type: String,

    /// Secondary attack style.
    pub secondary_attack_type: String,

    /// Attack interval in game ticks.
    pub attack_speed: i32,

    pub attack_stab: i32,
    pub attack_slash: i32,
    pub attack_crush: i32,
    pub attack_magic: i32,
    pub attack_ranged: i32,

    pub defence_stab: i32,
    pub defence_slash: i32,
    pub defence_crush: i32,
    pub defence_magic: i32,
    pub defence_ranged: i32,

    pub melee_strength: i32,
    pub magic_strength: i32,
    pub ranged_strength: i32,
    pub prayer_bonus: i32,

    pub weight: Weight,

    /// Wiki image; syntactically valid URL or absent.
    pub image_url: Option<String>,

    /// Whether the weapon may be updated, patched or deleted.
    pub modifiable: bool,
}

impl Weapon {
    /// Builds a not-yet-stored weapon from a create request.
    ///
    /// The `id` is a placeholder (0); the store assigns the real one.
    pub fn unsaved(request: CreateWeaponRequest) -> Self {
        let mut weapon = Weapon {
            id: 0,
            name: String::new(),
            examine: None,
            exchange_price: None,
            high_alch_price: None,
            required_attack_lvl: DEFAULT_REQUIRED_LEVEL,
            required_strength_lvl: DEFAULT_REQUIRED_LEVEL,
            primary_attack_type: String::new(),
            secondary_attack_type: String::new(),
            attack_speed: DEFAULT_ATTACK_SPEED,
            attack_stab: 0,
            attack_slash: 0,
            attack_crush: 0,
            attack_magic: 0,
            attack_ranged: 0,
            defence_stab: 0,
            defence_slash: 0,
            defence_crush: 0,
            defence_magic: 0,
            defence_ranged: 0,
            melee_strength: 0,
            magic_strength: 0,
            ranged_strength: 0,
            prayer_bonus: 0,
            weight: Weight::zero(),
            image_url: None,
            modifiable: true,
        };
        weapon.replace_with(request);
        weapon
    }

    /// Overwrites every field except `id` from the request (full replace).
    pub fn replace_with(&mut self, request: CreateWeaponRequest) {
        let CreateWeaponRequest {
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

        self.name = name;
        self.examine = Some(examine);
        self.exchange_price = exchange_price;
        self.high_alch_price = high_alch_price;
        self.required_attack_lvl = required_attack_lvl;
        self.required_strength_lvl = required_strength_lvl;
        self.primary_attack_type = primary_attack_type;
        self.secondary_attack_type = secondary_attack_type;
        self.attack_speed = attack_speed;
        self.attack_stab = attack_stab;
        self.attack_slash = attack_slash;
        self.attack_crush = attack_crush;
        self.attack_magic = attack_magic;
        self.attack_ranged = attack_ranged;
        self.defence_stab = defence_stab;
        self.defence_slash = defence_slash;
        self.defence_crush = defence_crush;
        self.defence_magic = defence_magic;
        self.defence_ranged = defence_ranged;
        self.melee_strength = melee_strength;
        self.magic_strength = magic_strength;
        self.ranged_strength = ranged_strength;
        self.prayer_bonus = prayer_bonus;
        self.weight = weight;
        self.image_url = image_url;
        self.modifiable = modifiable;
    }
}

// =============================================================================
// Create / Update Request
// =============================================================================

fn default_modifiable() -> bool {
    true
}

fn default_price() -> Option<i32> {
    Some(0)
}

/// A complete weapon description, used by both create and update.
///
/// ## Required vs Defaulted
/// - Required: name, examine, levels, attack types, attack speed, weight
/// - Default 0: every attack/defence/strength/prayer bonus, and both
///   prices when the key is omitted (an explicit `null` stores no price)
/// - Optional: image URL
/// - `modifiable` defaults to `true`
///
/// `weight` accepts a decimal string (`"1.814"`) or a JSON number (`1.814`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWeaponRequest {
    pub name: String,
    pub examine: String,
    #[serde(default = "default_price")]
    pub exchange_price: Option<i32>,
    #[serde(default = "default_price")]
    pub high_alch_price: Option<i32>,
    pub required_attack_lvl: i32,
    pub required_strength_lvl: i32,
    pub primary_attack_type: String,
    pub secondary_attack_type: String,
    pub attack_speed: i32,
    #[serde(default)]
    pub attack_stab: i32,
    #[serde(default)]
    pub attack_slash: i32,
    #[serde(default)]
    pub attack_crush: i32,
    #[serde(default)]
    pub attack_magic: i32,
    #[serde(default)]
    pub attack_ranged: i32,
    #[serde(default)]
    pub defence_stab: i32,
    #[serde(default)]
    pub defence_slash: i32,
    #[serde(default)]
    pub defence_crush: i32,
    #[serde(default)]
    pub defence_magic: i32,
    #[serde(default)]
    pub defence_ranged: i32,
    #[serde(default)]
    pub melee_strength: i32,
    #[serde(default)]
    pub magic_strength: i32,
    #[serde(default)]
    pub ranged_strength: i32,
    #[serde(default)]
    pub prayer_bonus: i32,
    pub weight: Weight,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_modifiable")]
    pub modifiable: bool,
}

impl CreateWeaponRequest {
    /// Creates a request with the storage defaults for everything not given:
    /// level requirements 1, attack speed 4, zero bonuses and prices, no
    /// image, modifiable.
    ///
    /// ## Example
    /// ```rust
    /// use armory_core::{CreateWeaponRequest, Weight};
    ///
    /// let mut request = CreateWeaponRequest::new(
    ///     "Dragon scimitar",
    ///     "A vicious, curved sword.",
    ///     "Slash",
    ///     "Stab",
    ///     Weight::from_thousandths(1814),
    /// );
    /// request.required_attack_lvl = 60;
    /// request.attack_slash = 67;
    /// assert!(request.modifiable);
    /// ```
    pub fn new(
        name: impl Into<String>,
        examine: impl Into<String>,
        primary_attack_type: impl Into<String>,
        secondary_attack_type: impl Into<String>,
        weight: Weight,
    ) -> Self {
        CreateWeaponRequest {
            name: name.into(),
            examine: examine.into(),
            exchange_price: Some(0),
            high_alch_price: Some(0),
            required_attack_lvl: DEFAULT_REQUIRED_LEVEL,
            required_strength_lvl: DEFAULT_REQUIRED_LEVEL,
            primary_attack_type: primary_attack_type.into(),
            secondary_attack_type: secondary_attack_type.into(),
            attack_speed: DEFAULT_ATTACK_SPEED,
            attack_stab: 0,
            attack_slash: 0,
            attack_crush: 0,
            attack_magic: 0,
            attack_ranged: 0,
            defence_stab: 0,
            defence_slash: 0,
            defence_crush: 0,
            defence_magic: 0,
            defence_ranged: 0,
            melee_strength: 0,
            magic_strength: 0,
            ranged_strength: 0,
            prayer_bonus: 0,
            weight,
            image_url: None,
            modifiable: true,
        }
    }
}

// =============================================================================
// Patch
// =============================================================================

/// One field of a partial update.
///
/// ## Why Not `Option<T>` Directly?
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  { "attackStab": 0 }        → Set(0)       overwrite with zero          │
/// │  { }                        → Absent       leave unchanged              │
/// │  { "attackStab": null }     → Absent       leave unchanged              │
/// │  { "modifiable": false }    → Set(false)   freeze the weapon            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
/// A dedicated type keeps "leave unchanged" from being confused with a
/// nullable column value such as `examine: None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Patch<T> {
    /// Leave the stored value as it is.
    Absent,
    /// Overwrite the stored value.
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> Patch<T> {
    /// True when the field was not supplied.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    /// Converts into an `Option`, `None` meaning "unchanged".
    pub fn into_option(self) -> Option<T> {
        match self {
            Patch::Set(value) => Some(value),
            Patch::Absent => None,
        }
    }

    /// Writes the new value into `target` when set.
    pub fn apply_to(self, target: &mut T) {
        if let Patch::Set(value) = self {
            *target = value;
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Set(value),
            None => Patch::Absent,
        }
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Patch::Set(value) => serializer.serialize_some(value),
            Patch::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

/// A partial update: only `Set` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PatchWeaponRequest {
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub name: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub examine: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub exchange_price: Patch<i32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub high_alch_price: Patch<i32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub required_attack_lvl: Patch<i32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub required_strength_lvl: Patch<i32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub primary_attack_type: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub secondary_attack_type: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub attack_speed: Patch<i32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub attack_stab: Patch<i32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub attack_slash: Patch<i32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub attack_crush: Patch<i32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub attack_magic: Patch<i32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub attack_ranged: Patch<i32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub defence_stab: Patch<i32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub defence_slash: Patch<i32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub defence_crush: Patch<i32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub defence_magic: Patch<i32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub defence_ranged: Patch<i32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub melee_strength: Patch<i32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub magic_strength: Patch<i32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub ranged_strength: Patch<i32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub prayer_bonus: Patch<i32>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub weight: Patch<Weight>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub image_url: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub modifiable: Patch<bool>,
}

impl PatchWeaponRequest {
    /// True when no field is set; applying it changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == PatchWeaponRequest::default()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
