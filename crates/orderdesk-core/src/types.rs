//! # Domain Types
//!
//! Core domain types used throughout Orderdesk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Customer     │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u64)       │   │  id (u64)       │   │  id (u64)       │       │
//! │  │  name           │   │  name           │   │  customer (Rc)  │       │
//! │  │  price (Money)  │   │  email          │   │  lines          │       │
//! │  │  category       │   │  tax_id         │   │  created_at     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌───────────────────────────────────────────────────────────┐         │
//! │  │    OrderLine                                              │         │
//! │  │  ───────────────                                          │         │
//! │  │  product: Rc<RefCell<Product>>   ◄── SHARED, LIVE         │         │
//! │  │  quantity (i64)                                           │         │
//! │  │  subtotal() recomputed on every read                      │         │
//! │  └───────────────────────────────────────────────────────────┘         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Shared Product References
//! Order lines hold a LIVE handle to their product, not a snapshot. When a
//! discount permanently reduces a product's price, every line anywhere in
//! the system that references that product sees the new price on its next
//! `subtotal()` read. That visibility is a feature of this domain, which is
//! why the snapshot-at-sale pattern common in receipts is not used here.
//!
//! Ids are plain integers assigned by the caller; the catalogs perform no
//! duplicate-id check.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_price_cents, validate_quantity, validate_required};

/// Shared-ownership handle to a product.
///
/// Single-threaded by design: `Rc<RefCell<_>>` rather than `Arc<Mutex<_>>`.
/// The whole crate assumes one caller on one thread; extending to
/// concurrent access would need per-product mutual exclusion around the
/// discount read-modify-write.
pub type ProductHandle = Rc<RefCell<Product>>;

// =============================================================================
// Product
// =============================================================================

/// A product available for ordering.
///
/// ## Invariants
/// - `name` and `category` are non-blank
/// - `price` is strictly positive, and stays strictly positive: the only
///   mutation path is [`Product::apply_discount`], which rejects any
///   reduction that would drive the price to zero or below
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: u64,
    name: String,
    price: Money,
    category: String,
}

impl Product {
    /// Creates a product, validating every field.
    ///
    /// ## Example
    /// ```rust
    /// use orderdesk_core::{Money, Product};
    ///
    /// let laptop = Product::new(1, "Laptop", Money::from_cents(99900), "Electronics").unwrap();
    /// assert_eq!(laptop.price().cents(), 99900);
    ///
    /// assert!(Product::new(2, "", Money::from_cents(100), "Books").is_err());
    /// assert!(Product::new(3, "Free", Money::zero(), "Books").is_err());
    /// ```
    pub fn new(id: u64, name: &str, price: Money, category: &str) -> Result<Self, ValidationError> {
        validate_required("name", name)?;
        validate_required("category", category)?;
        validate_price_cents(price.cents())?;

        Ok(Product {
            id,
            name: name.trim().to_string(),
            price,
            category: category.trim().to_string(),
        })
    }

    /// Wraps the product in a shared handle for use by order lines.
    pub fn into_handle(self) -> ProductHandle {
        Rc::new(RefCell::new(self))
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Permanently reduces the unit price by `per_unit`.
    ///
    /// This is the ONLY way a product price changes after construction.
    ///
    /// ## Rules
    /// - `per_unit` must be positive
    /// - `per_unit` must be strictly less than the current price; a
    ///   reduction that would leave the price at zero or below is rejected
    ///   and the price is left untouched
    ///
    /// ## User Workflow
    /// ```text
    /// Best rule fires: $30.00 off a 3-unit line
    ///      │
    ///      ▼
    /// per-unit reduction: $30.00 / 3 = $10.00
    ///      │
    ///      ▼
    /// apply_discount($10.00) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Unit price: $100.00 → $90.00 (every holder of the handle sees this)
    /// ```
    pub fn apply_discount(&mut self, per_unit: Money) -> CoreResult<()> {
        if !per_unit.is_positive() {
            return Err(ValidationError::MustBePositive {
                field: "discount".to_string(),
            }
            .into());
        }

        if per_unit >= self.price {
            return Err(CoreError::DiscountExceedsPrice {
                name: self.name.clone(),
                discount: per_unit,
                price: self.price,
            });
        }

        self.price -= per_unit;
        Ok(())
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A registered customer. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: u64,
    name: String,
    email: String,
    /// National tax identifier. Format checking is the console's job;
    /// here it only has to be non-blank.
    tax_id: String,
}

impl Customer {
    /// Creates a customer, validating that every field is non-blank.
    pub fn new(id: u64, name: &str, email: &str, tax_id: &str) -> Result<Self, ValidationError> {
        validate_required("name", name)?;
        validate_required("email", email)?;
        validate_required("tax_id", tax_id)?;

        Ok(Customer {
            id,
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            tax_id: tax_id.trim().to_string(),
        })
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[inline]
    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }
}

// =============================================================================
// Order Line
// =============================================================================

/// One product + quantity entry within an order.
///
/// Holds a live, shared product handle. The subtotal is recomputed from the
/// product's CURRENT price on every read and never cached.
#[derive(Debug, Clone)]
pub struct OrderLine {
    product: ProductHandle,
    quantity: i64,
}

impl OrderLine {
    /// Creates a line for `quantity` units of the given product.
    pub fn new(product: ProductHandle, quantity: i64) -> Result<Self, ValidationError> {
        validate_quantity(quantity)?;

        Ok(OrderLine { product, quantity })
    }

    #[inline]
    pub fn product(&self) -> &ProductHandle {
        &self.product
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Current unit price of the referenced product.
    pub fn unit_price(&self) -> Money {
        self.product.borrow().price()
    }

    /// Line subtotal: current unit price × quantity.
    ///
    /// Recomputed on every call; a discount applied to the shared product
    /// after this line was built shows up here immediately.
    pub fn subtotal(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Order
// =============================================================================

/// A placed order: customer, line items, creation timestamp.
///
/// Immutable after construction. The products referenced by its lines may
/// have been discounted by the order service before the order was built,
/// but nothing mutates an `Order` once it exists.
#[derive(Debug, Clone)]
pub struct Order {
    id: u64,
    customer: Rc<Customer>,
    lines: Vec<OrderLine>,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Assembles an order from already-validated parts.
    ///
    /// The timestamp is supplied by the caller (the service passes
    /// `Utc::now()`) so this crate stays free of ambient clock reads.
    pub fn new(
        id: u64,
        customer: Rc<Customer>,
        lines: Vec<OrderLine>,
        created_at: DateTime<Utc>,
    ) -> CoreResult<Self> {
        if lines.is_empty() {
            return Err(CoreError::EmptyOrder);
        }

        Ok(Order {
            id,
            customer,
            lines,
            created_at,
        })
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn customer(&self) -> &Rc<Customer> {
        &self.customer
    }

    #[inline]
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Order total: sum of the line subtotals at their CURRENT prices.
    ///
    /// Not a frozen snapshot - lines hold live product references, so a
    /// later discount on a shared product changes what this returns.
    pub fn total(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, line| acc + line.subtotal())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> Product {
        Product::new(1, "Laptop", Money::from_cents(10000), "Electronics").unwrap()
    }

    fn customer() -> Rc<Customer> {
        Rc::new(Customer::new(1, "Ada Lovelace", "ada@example.com", "TX-001").unwrap())
    }

    #[test]
    fn test_product_construction_validates_fields() {
        assert!(Product::new(1, "Laptop", Money::from_cents(100), "Electronics").is_ok());
        assert!(Product::new(2, "", Money::from_cents(100), "Electronics").is_err());
        assert!(Product::new(3, "Laptop", Money::from_cents(100), "  ").is_err());
        assert!(Product::new(4, "Laptop", Money::zero(), "Electronics").is_err());
        assert!(Product::new(5, "Laptop", Money::from_cents(-1), "Electronics").is_err());
    }

    #[test]
    fn test_product_trims_fields() {
        let p = Product::new(1, "  Laptop  ", Money::from_cents(100), " Electronics ").unwrap();
        assert_eq!(p.name(), "Laptop");
        assert_eq!(p.category(), "Electronics");
    }

    #[test]
    fn test_apply_discount_reduces_price() {
        let mut p = laptop();
        p.apply_discount(Money::from_cents(1000)).unwrap();
        assert_eq!(p.price().cents(), 9000);
    }

    #[test]
    fn test_discount_at_or_above_price_rejected_price_unchanged() {
        let mut p = laptop();

        // Exactly the price: would drive it to zero
        let err = p.apply_discount(Money::from_cents(10000)).unwrap_err();
        assert!(matches!(err, CoreError::DiscountExceedsPrice { .. }));
        assert_eq!(p.price().cents(), 10000);

        // More than the price
        assert!(p.apply_discount(Money::from_cents(20000)).is_err());
        assert_eq!(p.price().cents(), 10000);
    }

    #[test]
    fn test_non_positive_discount_rejected() {
        let mut p = laptop();
        assert!(p.apply_discount(Money::zero()).is_err());
        assert!(p.apply_discount(Money::from_cents(-100)).is_err());
        assert_eq!(p.price().cents(), 10000);
    }

    #[test]
    fn test_price_stays_positive_through_discount_sequence() {
        let mut p = laptop();
        // $100.00 → repeated $30.00 cuts until one would cross zero
        assert!(p.apply_discount(Money::from_cents(3000)).is_ok()); // $70.00
        assert!(p.apply_discount(Money::from_cents(3000)).is_ok()); // $40.00
        assert!(p.apply_discount(Money::from_cents(3000)).is_ok()); // $10.00
        assert!(p.apply_discount(Money::from_cents(3000)).is_err()); // rejected
        assert_eq!(p.price().cents(), 1000);
        assert!(p.price().is_positive());
    }

    #[test]
    fn test_customer_requires_all_fields() {
        assert!(Customer::new(1, "Ada", "ada@example.com", "TX-1").is_ok());
        assert!(Customer::new(1, "", "ada@example.com", "TX-1").is_err());
        assert!(Customer::new(1, "Ada", "", "TX-1").is_err());
        assert!(Customer::new(1, "Ada", "ada@example.com", "").is_err());
    }

    #[test]
    fn test_order_line_requires_positive_quantity() {
        let handle = laptop().into_handle();
        assert!(OrderLine::new(Rc::clone(&handle), 1).is_ok());
        assert!(OrderLine::new(Rc::clone(&handle), 0).is_err());
        assert!(OrderLine::new(handle, -3).is_err());
    }

    #[test]
    fn test_subtotal_recomputed_from_live_price() {
        let handle = laptop().into_handle();
        let line = OrderLine::new(Rc::clone(&handle), 3).unwrap();
        assert_eq!(line.subtotal().cents(), 30000);

        handle
            .borrow_mut()
            .apply_discount(Money::from_cents(1000))
            .unwrap();

        // Not cached: same line, new subtotal
        assert_eq!(line.subtotal().cents(), 27000);
    }

    #[test]
    fn test_shared_product_mutation_visible_across_lines() {
        let handle = laptop().into_handle();
        let line_a = OrderLine::new(Rc::clone(&handle), 2).unwrap();
        let line_b = OrderLine::new(Rc::clone(&handle), 5).unwrap();

        handle
            .borrow_mut()
            .apply_discount(Money::from_cents(2000))
            .unwrap();

        assert_eq!(line_a.subtotal().cents(), 16000);
        assert_eq!(line_b.subtotal().cents(), 40000);
    }

    #[test]
    fn test_order_requires_lines() {
        let err = Order::new(1, customer(), Vec::new(), Utc::now()).unwrap_err();
        assert!(matches!(err, CoreError::EmptyOrder));
    }

    #[test]
    fn test_order_total_sums_line_subtotals() {
        let laptop = laptop().into_handle();
        let cable = Product::new(2, "Cable", Money::from_cents(500), "Accessories")
            .unwrap()
            .into_handle();

        let lines = vec![
            OrderLine::new(laptop, 2).unwrap(), // $200.00
            OrderLine::new(cable, 4).unwrap(),  // $20.00
        ];
        let order = Order::new(7, customer(), lines, Utc::now()).unwrap();
        assert_eq!(order.total().cents(), 22000);
        assert_eq!(order.lines().len(), 2);
    }

    #[test]
    fn test_entity_serde_round_trip() {
        let p = laptop();
        let json = serde_json::to_string(&p).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
