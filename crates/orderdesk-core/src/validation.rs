//! # Validation Module
//!
//! Input validation utilities for Orderdesk.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console shell (external)                                     │
//! │  ├── Parses raw text into ids, names, amounts                          │
//! │  └── Immediate user feedback on unparsable input                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Blank-string and sign checks on already-parsed primitives         │
//! │  └── Runs inside entity constructors, before any state changes         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Entity invariants                                            │
//! │  └── e.g. Product price stays positive through discounting             │
//! │                                                                         │
//! │  Defense in depth: Multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use orderdesk_core::validation::{validate_required, validate_quantity};
//!
//! validate_required("name", "Mechanical Keyboard").unwrap();
//! validate_quantity(5).unwrap();
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a required string field is present and non-blank.
///
/// ## Rules
/// - Must not be empty after trimming whitespace
///
/// ## Example
/// ```rust
/// use orderdesk_core::validation::validate_required;
///
/// assert!(validate_required("name", "USB Cable").is_ok());
/// assert!(validate_required("name", "").is_err());
/// assert!(validate_required("name", "   ").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be strictly positive (> 0)
/// - Zero is NOT allowed: a free product would make percentage discounts
///   meaningless and breaks the price invariant
///
/// ## Example
/// ```rust
/// use orderdesk_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1099).is_ok());  // $10.99
/// assert!(validate_price_cents(0).is_err());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert!(validate_required("name", "USB Cable").is_ok());
        assert!(validate_required("name", "").is_err());
        assert!(validate_required("name", "   ").is_err());
        assert!(validate_required("email", "a@example.com").is_ok());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(100).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(1099).is_ok());
        assert!(validate_price_cents(1).is_ok());
        assert!(validate_price_cents(0).is_err());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_error_names_offending_field() {
        let err = validate_required("category", " ").unwrap_err();
        assert_eq!(err.to_string(), "category is required");

        let err = validate_price_cents(-5).unwrap_err();
        assert_eq!(err.to_string(), "price must be positive");
    }
}
