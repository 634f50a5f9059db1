//! # Error Types
//!
//! Domain-specific error types for orderdesk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  orderdesk-core errors (this file)                                     │
//! │  ├── CoreError        - Lookup failures, broken preconditions          │
//! │  └── ValidationError  - Invalid-argument failures                      │
//! │                                                                         │
//! │  Console shell (external)                                              │
//! │  └── catches CoreError, renders a message, continues its loop          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → console message                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, id, amounts)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message
//! 5. Errors are raised synchronously at the point of violation and
//!    propagate to the immediate caller with `?` - no retries

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent lookup failures and broken preconditions.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found.
    ///
    /// ## When This Occurs
    /// - Product id was never added to the product catalog
    /// - Caller passed an id belonging to a different entity type
    #[error("Product not found: {0}")]
    ProductNotFound(u64),

    /// Customer cannot be found.
    #[error("Customer not found: {0}")]
    CustomerNotFound(u64),

    /// Order cannot be found.
    #[error("Order not found: {0}")]
    OrderNotFound(u64),

    /// An order was submitted with no line items.
    ///
    /// ## When This Occurs
    /// - The caller built an order before adding any lines
    ///
    /// ## User Workflow
    /// ```text
    /// Create Order (0 lines)
    ///      │
    ///      ▼
    /// EmptyOrder
    ///      │
    ///      ▼
    /// Console shows: "An order needs at least one line item"
    /// ```
    #[error("Order must contain at least one line item")]
    EmptyOrder,

    /// A discount would reduce a product's price to zero or below.
    ///
    /// The product keeps its current price; nothing is mutated.
    #[error("Discount of {discount} per unit on {name} meets or exceeds its price of {price}")]
    DiscountExceedsPrice {
        name: String,
        discount: Money,
        price: Money,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when an argument doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound(42);
        assert_eq!(err.to_string(), "Product not found: 42");

        let err = CoreError::DiscountExceedsPrice {
            name: "Keyboard".to_string(),
            discount: Money::from_cents(2000),
            price: Money::from_cents(1500),
        };
        assert_eq!(
            err.to_string(),
            "Discount of $20.00 per unit on Keyboard meets or exceeds its price of $15.00"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "email".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
