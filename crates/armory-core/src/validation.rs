//! # Validation Module
//!
//! Field rules for weapon requests.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Order                                   │
//! │                                                                         │
//! │  create / update (full request)                                        │
//! │      name ──► examine ──► image_url ──► primary ──► secondary          │
//! │      first failure wins, nothing is written                            │
//! │                                                                         │
//! │  patch (only fields that are Set)                                      │
//! │      same rule per field, in declaration order                         │
//! │      first failure aborts the whole patch                              │
//! │                                                                         │
//! │  Always AFTER the existence and modifiability checks,                  │
//! │  always BEFORE the store is touched.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lengths are counted in characters, not bytes.
//!
//! ## Usage
//! ```rust
//! use armory_core::validation::{validate_image_url, validate_name};
//!
//! assert!(validate_name("Abyssal whip").is_ok());
//! assert!(validate_name("ab").is_err());
//!
//! assert!(validate_image_url(None).is_ok());
//! assert!(validate_image_url(Some("https://wiki.example.com/item")).is_ok());
//! assert!(validate_image_url(Some("not-a-url")).is_err());
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;
use crate::types::CreateWeaponRequest;
use crate::{MAX_ATTACK_TYPE_LEN, MAX_EXAMINE_LEN, MAX_NAME_LEN, MIN_TEXT_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Optional scheme, dot-separated labels, alphabetic TLD of 2+, optional path.
static IMAGE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}(/\S*)?$").expect("valid regex")
});

// =============================================================================
// String Validators
// =============================================================================

fn check_length(field: &'static str, value: &str, min: usize, max: usize) -> ValidationResult<()> {
    let len = value.chars().count();

    if len < min {
        return Err(ValidationError::TooShort { field, min });
    }

    if len > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(())
}

/// Validates a weapon name.
///
/// ## Rules
/// - At least 3 characters
/// - At most 200 characters
///
/// ## Example
/// ```rust
/// use armory_core::validation::validate_name;
///
/// let err = validate_name("ab").unwrap_err();
/// assert_eq!(err.to_string(), "name must be at least 3 characters");
/// ```
pub fn validate_name(name: &str) -> ValidationResult<()> {
    check_length("name", name, MIN_TEXT_LEN, MAX_NAME_LEN)
}

/// Validates examine text.
///
/// ## Rules
/// - At least 3 characters
/// - At most 255 characters
pub fn validate_examine(examine: &str) -> ValidationResult<()> {
    check_length("examine", examine, MIN_TEXT_LEN, MAX_EXAMINE_LEN)
}

/// Validates an image URL.
///
/// `None` is always valid. A present value must look like a fully
/// qualified domain name with an optional `http`/`https` scheme and an
/// optional path. The check is purely syntactic; nothing is fetched.
///
/// ## Examples
/// ```text
/// "https://wiki.example.com/item"   ✅
/// "oldschool.runescape.wiki/w/Whip" ✅  (scheme is optional)
/// "not-a-url"                       ❌  (no dot-separated TLD)
/// "ftp://files.example.com"         ❌  (only http/https)
/// ```
pub fn validate_image_url(url: Option<&str>) -> ValidationResult<()> {
    let Some(url) = url else {
        return Ok(());
    };

    if IMAGE_URL.is_match(url) {
        Ok(())
    } else {
        Err(ValidationError::InvalidFormat {
            field: "imageUrl",
            reason: "must be a fully qualified URL".to_string(),
        })
    }
}

/// Validates an attack type (primary or secondary).
///
/// ## Rules
/// - Must not be empty
/// - At most 10 characters (the width of the storage column)
pub fn validate_attack_type(field: &'static str, attack_type: &str) -> ValidationResult<()> {
    if attack_type.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }

    check_length(field, attack_type, 1, MAX_ATTACK_TYPE_LEN)
}

// =============================================================================
// Request Validators
// =============================================================================

/// Validates a full create/update request.
///
/// Checks run in a fixed order and stop at the first failure:
/// name, examine, image URL, primary attack type, secondary attack type.
pub fn validate_create_request(request: &CreateWeaponRequest) -> ValidationResult<()> {
    validate_name(&request.name)?;
    validate_examine(&request.examine)?;
    validate_image_url(request.image_url.as_deref())?;
    validate_attack_type("primaryAttackType", &request.primary_attack_type)?;
    validate_attack_type("secondaryAttackType", &request.secondary_attack_type)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weight::Weight;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Abyssal whip").is_ok());
        assert!(validate_name("Axe").is_ok());
        assert!(validate_name(&"A".repeat(200)).is_ok());

        assert_eq!(
            validate_name("ab"),
            Err(ValidationError::TooShort {
                field: "name",
                min: 3
            })
        );
        assert!(validate_name("").is_err());
        assert_eq!(
            validate_name(&"A".repeat(201)),
            Err(ValidationError::TooLong {
                field: "name",
                max: 200
            })
        );
    }

    #[test]
    fn test_length_counts_characters() {
        // Three characters, six bytes
        assert!(validate_name("äöü").is_ok());
    }

    #[test]
    fn test_validate_examine() {
        assert!(validate_examine("A weapon from the abyss.").is_ok());
        assert!(validate_examine("no").is_err());
        assert!(validate_examine(&"x".repeat(255)).is_ok());
        assert!(validate_examine(&"x".repeat(256)).is_err());
    }

    #[test]
    fn test_validate_image_url() {
        assert!(validate_image_url(None).is_ok());
        assert!(validate_image_url(Some("https://wiki.example.com/item")).is_ok());
        assert!(validate_image_url(Some("http://example.com")).is_ok());
        assert!(validate_image_url(Some("oldschool.runescape.wiki/images/Abyssal_whip.png")).is_ok());

        assert!(validate_image_url(Some("not-a-url")).is_err());
        assert!(validate_image_url(Some("")).is_err());
        assert!(validate_image_url(Some("ftp://files.example.com")).is_err());
        assert!(validate_image_url(Some("https://example.c")).is_err());
        assert!(validate_image_url(Some("https://example.com/has space")).is_err());
    }

    #[test]
    fn test_validate_attack_type() {
        assert!(validate_attack_type("primaryAttackType", "Slash").is_ok());
        assert_eq!(
            validate_attack_type("primaryAttackType", " "),
            Err(ValidationError::Required {
                field: "primaryAttackType"
            })
        );
        assert_eq!(
            validate_attack_type("secondaryAttackType", "Slash/Stab/Crush"),
            Err(ValidationError::TooLong {
                field: "secondaryAttackType",
                max: 10
            })
        );
    }

    #[test]
    fn test_request_validation_order() {
        let mut request = CreateWeaponRequest::new("ab", "no", "Slash", "Slash", Weight::zero());
        request.image_url = Some("not-a-url".to_string());

        // Name is reported first even though examine and image URL are also bad
        assert_eq!(validate_create_request(&request).unwrap_err().field(), "name");

        request.name = "Bronze dagger".to_string();
        assert_eq!(validate_create_request(&request).unwrap_err().field(), "examine");

        request.examine = "Short but deadly.".to_string();
        assert_eq!(validate_create_request(&request).unwrap_err().field(), "imageUrl");

        request.image_url = None;
        assert!(validate_create_request(&request).is_ok());
    }
}
