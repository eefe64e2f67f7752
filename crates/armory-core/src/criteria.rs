//! # Criteria Search
//!
//! Case-insensitive substring matching over a fixed set of weapon fields.
//!
//! ## Searched Fields
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  criteria: "SLASH"  (lowercased → "slash")                              │
//! │                                                                         │
//! │  name                    "Abyssal whip"        no                       │
//! │  examine (if present)    "A weapon from..."    no                       │
//! │  primary_attack_type     "Slash"               ← MATCH                  │
//! │  secondary_attack_type   "Slash"                                        │
//! │  required_attack_lvl     "70"                                           │
//! │  required_strength_lvl   "1"                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Level requirements are matched on their decimal text, so `"7"` finds a
//! weapon that needs attack level 70.

use crate::types::Weapon;

/// Returns true if `criteria` is a case-insensitive substring of any
/// searched field.
///
/// ## Example
/// ```rust
/// use armory_core::{criteria, CreateWeaponRequest, Weapon, Weight};
///
/// let mut request = CreateWeaponRequest::new(
///     "Abyssal whip", "A weapon from the abyss.", "Slash", "Slash",
///     Weight::from_thousandths(453),
/// );
/// request.required_attack_lvl = 70;
/// let whip = Weapon::unsaved(request);
///
/// assert!(criteria::matches(&whip, "WHIP"));
/// assert!(criteria::matches(&whip, "70"));
/// assert!(!criteria::matches(&whip, "crush"));
/// ```
pub fn matches(weapon: &Weapon, criteria: &str) -> bool {
    let needle = criteria.to_lowercase();
    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

    contains(&weapon.name)
        || weapon.examine.as_deref().is_some_and(contains)
        || contains(&weapon.primary_attack_type)
        || contains(&weapon.secondary_attack_type)
        || weapon.required_attack_lvl.to_string().contains(&needle)
        || weapon.required_strength_lvl.to_string().contains(&needle)
}

/// Keeps the weapons that match, preserving input order.
pub fn filter(weapons: Vec<Weapon>, criteria: &str) -> Vec<Weapon> {
    weapons
        .into_iter()
        .filter(|weapon| matches(weapon, criteria))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CreateWeaponRequest;
    use crate::weight::Weight;

    fn weapon(name: &str, examine: Option<&str>, attack_lvl: i32, strength_lvl: i32) -> Weapon {
        let mut request = CreateWeaponRequest::new(name, "placeholder", "Crush", "Stab", Weight::zero());
        request.required_attack_lvl = attack_lvl;
        request.required_strength_lvl = strength_lvl;
        let mut weapon = Weapon::unsaved(request);
        weapon.examine = examine.map(str::to_string);
        weapon
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let maul = weapon("Granite maul", None, 50, 50);
        assert!(matches(&maul, "granite"));
        assert!(matches(&maul, "MAUL"));
        assert!(matches(&maul, "e m"));
        assert!(!matches(&maul, "whip"));
    }

    #[test]
    fn test_matches_examine_only_when_present() {
        let with_text = weapon("Granite maul", Some("Simplicity is the best weapon."), 50, 50);
        let without_text = weapon("Granite maul", None, 50, 50);

        assert!(matches(&with_text, "simplicity"));
        assert!(!matches(&without_text, "simplicity"));
    }

    #[test]
    fn test_matches_attack_types() {
        let maul = weapon("Granite maul", None, 50, 50);
        assert!(matches(&maul, "crush"));
        assert!(matches(&maul, "STAB"));
    }

    #[test]
    fn test_matches_strength_level_independently() {
        // Attack 1, strength 99: "99" must come from the strength requirement
        let hammer = weapon("Tzhaar-ket-om", None, 1, 99);
        assert!(matches(&hammer, "99"));

        let sword = weapon("Bronze sword", None, 75, 1);
        assert!(matches(&sword, "75"));
        assert!(!matches(&sword, "99"));
    }

    #[test]
    fn test_empty_criteria_matches_everything() {
        let maul = weapon("Granite maul", None, 50, 50);
        assert!(matches(&maul, ""));
    }

    #[test]
    fn test_filter_preserves_order() {
        let weapons = vec![
            weapon("Rune sword", None, 40, 1),
            weapon("Granite maul", None, 50, 50),
            weapon("Rune mace", None, 40, 1),
        ];

        let names: Vec<String> = filter(weapons, "rune").into_iter().map(|w| w.name).collect();
        assert_eq!(names, vec!["Rune sword", "Rune mace"]);
    }
}
