//! # Validation Module
//!
//! Rules a menu entry must satisfy before it joins a catalog.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog::new(entries)                                                  │
//! │       │                                                                 │
//! │       ├── validate_menu_entry(e) for every entry  ◄── THIS MODULE      │
//! │       │     ├── names present and bounded                               │
//! │       │     └── 0 <= price <= MAX_PRICE                                 │
//! │       │                                                                 │
//! │       └── ids unique                                                    │
//! │                                                                         │
//! │  Cart operations never validate: they are total by contract.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use weidao_core::validation::{validate_menu_name, validate_price};
//! use weidao_core::Money;
//!
//! assert!(validate_menu_name("name_zh", "宫保鸡丁").is_ok());
//! assert!(validate_price(Money::from_units(-1)).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::MenuEntry;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest name accepted, counted in characters (not bytes).
pub const MAX_NAME_CHARS: usize = 100;

/// Longest description accepted, counted in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// Highest menu price accepted, in whole currency units.
pub const MAX_PRICE: Money = Money::from_units(100_000);

/// Highest service fee accepted, in whole currency units.
pub const MAX_SERVICE_FEE: Money = Money::from_units(1_000);

// =============================================================================
// String Validators
// =============================================================================

/// Validates a display or localized name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_NAME_CHARS`] characters
pub fn validate_menu_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_CHARS {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_CHARS,
        });
    }

    Ok(())
}

/// Validates a dish description. Empty is allowed.
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_CHARS,
        });
    }

    Ok(())
}

/// Validates an image reference.
///
/// `None` and the empty string are both fine (the placeholder is used);
/// anything else must not contain whitespace.
pub fn validate_image_ref(image: Option<&str>) -> ValidationResult<()> {
    match image {
        Some(image) if image.chars().any(char::is_whitespace) => {
            Err(ValidationError::InvalidFormat {
                field: "image".to_string(),
                reason: "must not contain whitespace".to_string(),
            })
        }
        _ => Ok(()),
    }
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a menu price. Zero is allowed (free items).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    validate_amount("price", price, MAX_PRICE)
}

/// Validates the service fee added on top of the subtotal.
pub fn validate_service_fee(fee: Money) -> ValidationResult<()> {
    validate_amount("service fee", fee, MAX_SERVICE_FEE)
}

fn validate_amount(field: &str, amount: Money, max: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    if amount > max {
        return Err(ValidationError::TooLarge {
            field: field.to_string(),
            max: max.units(),
        });
    }

    Ok(())
}

// =============================================================================
// Entry Validator
// =============================================================================

/// Validates every field of a menu entry.
pub fn validate_menu_entry(entry: &MenuEntry) -> ValidationResult<()> {
    validate_menu_name("name", &entry.name)?;
    validate_menu_name("name_zh", &entry.name_zh)?;
    validate_price(entry.price)?;
    validate_description(&entry.description)?;
    validate_image_ref(entry.image.as_deref())?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, MenuItemId};

    fn entry(name: &str, price: i64) -> MenuEntry {
        MenuEntry {
            id: MenuItemId::new(1),
            name: name.to_string(),
            name_zh: "测试".to_string(),
            price: Money::from_units(price),
            category: Category::Snack,
            image: None,
            description: String::new(),
        }
    }

    #[test]
    fn test_validate_menu_name() {
        assert!(validate_menu_name("name", "Dumplings").is_ok());
        assert!(validate_menu_name("name_zh", "水饺").is_ok());

        assert!(validate_menu_name("name", "").is_err());
        assert!(validate_menu_name("name", "   ").is_err());
        assert!(validate_menu_name("name", &"A".repeat(101)).is_err());
    }

    #[test]
    fn test_name_length_counts_characters() {
        // 100 CJK characters are 300 bytes but still within the limit
        assert!(validate_menu_name("name_zh", &"饺".repeat(100)).is_ok());
        assert!(validate_menu_name("name_zh", &"饺".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_units(0)).is_ok());
        assert!(validate_price(Money::from_units(68)).is_ok());
        assert!(validate_price(Money::from_units(-1)).is_err());
        assert!(validate_price(MAX_PRICE).is_ok());

        let err = validate_price(Money::from_units(i64::MAX / 2 + 1)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLarge { max: 100_000, .. }));
    }

    #[test]
    fn test_validate_service_fee() {
        assert!(validate_service_fee(Money::from_units(5)).is_ok());
        assert!(validate_service_fee(Money::from_units(-5)).is_err());
        assert!(validate_service_fee(MAX_SERVICE_FEE).is_ok());

        let err = validate_service_fee(Money::from_units(i64::MAX)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLarge { ref field, .. } if field == "service fee"));
    }

    #[test]
    fn test_validate_image_ref() {
        assert!(validate_image_ref(None).is_ok());
        assert!(validate_image_ref(Some("")).is_ok());
        assert!(validate_image_ref(Some("/hot-sour-soup.jpg")).is_ok());
        assert!(validate_image_ref(Some("/hot sour.jpg")).is_err());
    }

    #[test]
    fn test_validate_menu_entry() {
        assert!(validate_menu_entry(&entry("Spring Rolls", 32)).is_ok());

        let err = validate_menu_entry(&entry("", 32)).unwrap_err();
        assert!(matches!(err, ValidationError::Required { ref field } if field == "name"));

        let err = validate_menu_entry(&entry("Spring Rolls", -32)).unwrap_err();
        assert!(matches!(err, ValidationError::MustBeNonNegative { .. }));
    }
}
