//! # orderdesk-core: Pure Business Logic for Orderdesk
//!
//! This crate is the **heart** of Orderdesk. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Orderdesk Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Console Shell (external)                       │   │
//! │  │    Menu loop ──► Input parsing ──► Rendering                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ validated primitives                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    orderdesk-service                            │   │
//! │  │    Catalogs, OrderService, report records, log sink             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ orderdesk-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ discount  │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │   rules   │  │   rules   │  │   │
//! │  │   │   Order   │  │  (cents)  │  │ max-wins  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CONSOLE • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain entities (Product, Customer, OrderLine, Order)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`discount`] - Discount rules evaluated independently, best one wins
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system, console access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **Shared Products**: Order lines hold `Rc<RefCell<Product>>` handles;
//!    a discount on one line's product is visible to every other line that
//!    shares it (single-threaded by design)
//!
//! ## Example Usage
//!
//! ```rust
//! use orderdesk_core::discount::{best_discount, default_rules};
//! use orderdesk_core::money::Money;
//!
//! // Electronics line: 3 × $100.00
//! let rules = default_rules();
//! let amount = best_discount(&rules, "Electronics", 3, Money::from_cents(10000));
//!
//! // 10% of the $300.00 subtotal
//! assert_eq!(amount.cents(), 3000);
//!
//! // Per-unit reduction applied to the product: $30.00 / 3 = $10.00
//! assert_eq!(amount.per_unit(3).cents(), 1000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod discount;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use orderdesk_core::Money` instead of
// `use orderdesk_core::money::Money`

pub use discount::{best_discount, default_rules, DiscountRule};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{Customer, Order, OrderLine, Product, ProductHandle};
