//! # Order Service
//!
//! Orchestrates the whole order workflow: catalog registration, discount
//! application, order creation, and history reporting.
//!
//! ## Order Creation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    create_order()                                       │
//! │                                                                         │
//! │  1. Reject empty line list            ──► EmptyOrder                   │
//! │  2. Resolve customer                  ──► CustomerNotFound             │
//! │  3. Resolve products, build lines     ──► ProductNotFound /            │
//! │     (validates every quantity)            quantity must be positive    │
//! │          │                                                              │
//! │          │   nothing has been mutated up to this point                  │
//! │          ▼                                                              │
//! │  4. Per line: evaluate every rule, keep the MAXIMUM candidate;         │
//! │     if > 0, apply (max ÷ quantity) as a permanent price cut on the     │
//! │     SHARED product                                                     │
//! │  5. Build the Order (timestamp = now), store it                        │
//! │  6. Emit exactly one log record through the sink                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Step 4 mutates products other orders may reference; that visibility is
//! intended (see `orderdesk_core::types`). Price cuts already applied to
//! earlier lines are NOT rolled back if a later line's application fails.

use std::rc::Rc;

use chrono::Utc;
use tracing::debug;

use orderdesk_core::discount::{best_discount, default_rules, DiscountRule};
use orderdesk_core::{
    CoreError, CoreResult, Customer, Money, Order, OrderLine, Product, ProductHandle,
};

use crate::catalog::{CustomerCatalog, OrderCatalog, ProductCatalog};
use crate::report::{OrderReport, NO_ORDERS_MESSAGE};
use crate::sink::LogSink;

// =============================================================================
// Line Spec
// =============================================================================

/// One requested line of a new order, as primitives from the console layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpec {
    pub product_id: u64,
    pub quantity: i64,
}

impl LineSpec {
    pub fn new(product_id: u64, quantity: i64) -> Self {
        LineSpec {
            product_id,
            quantity,
        }
    }
}

// =============================================================================
// Order Service
// =============================================================================

/// The order-management facade the console shell talks to.
///
/// Owns the three catalogs, the registered discount rules, and the log
/// sink. Single-threaded and synchronous throughout.
///
/// ## Usage
/// ```rust
/// use orderdesk_service::service::{LineSpec, OrderService};
/// use orderdesk_service::sink::TracingSink;
///
/// let mut service = OrderService::new(Box::new(TracingSink));
/// service.add_product(1, "Laptop", 10000, "Electronics").unwrap();
/// service.add_customer(1, "Ada Lovelace", "ada@example.com", "TX-1").unwrap();
///
/// let order = service
///     .create_order(1, 1, &[LineSpec::new(1, 3)])
///     .unwrap();
/// // 10% category discount: unit price dropped from $100.00 to $90.00
/// assert_eq!(order.total().cents(), 27000);
/// ```
pub struct OrderService {
    products: ProductCatalog,
    customers: CustomerCatalog,
    orders: OrderCatalog,
    rules: Vec<Box<dyn DiscountRule>>,
    sink: Box<dyn LogSink>,
}

impl OrderService {
    /// Creates a service with the standard discount rules.
    pub fn new(sink: Box<dyn LogSink>) -> Self {
        OrderService::with_rules(default_rules(), sink)
    }

    /// Creates a service with a caller-supplied rule list.
    ///
    /// The list is the extension point: new rules are appended, existing
    /// ones are never modified.
    pub fn with_rules(rules: Vec<Box<dyn DiscountRule>>, sink: Box<dyn LogSink>) -> Self {
        OrderService {
            products: ProductCatalog::new(),
            customers: CustomerCatalog::new(),
            orders: OrderCatalog::new(),
            rules,
            sink,
        }
    }

    // -------------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------------

    /// Registers a product and returns its shared handle.
    ///
    /// `price_cents` arrives pre-parsed from the console; uniqueness of
    /// `id` is the caller's contract.
    pub fn add_product(
        &mut self,
        id: u64,
        name: &str,
        price_cents: i64,
        category: &str,
    ) -> CoreResult<ProductHandle> {
        let handle = Product::new(id, name, Money::from_cents(price_cents), category)?.into_handle();
        self.products.add(Rc::clone(&handle));
        Ok(handle)
    }

    /// Registers a customer.
    pub fn add_customer(
        &mut self,
        id: u64,
        name: &str,
        email: &str,
        tax_id: &str,
    ) -> CoreResult<Rc<Customer>> {
        let customer = Rc::new(Customer::new(id, name, email, tax_id)?);
        self.customers.add(Rc::clone(&customer));
        Ok(customer)
    }

    // -------------------------------------------------------------------------
    // Lookups
    // -------------------------------------------------------------------------

    /// Shared handle to a product, or `ProductNotFound`.
    pub fn product(&self, id: u64) -> CoreResult<ProductHandle> {
        self.products
            .get(id)
            .map(Rc::clone)
            .ok_or(CoreError::ProductNotFound(id))
    }

    /// A customer reference, or `CustomerNotFound`.
    pub fn customer(&self, id: u64) -> CoreResult<Rc<Customer>> {
        self.customers
            .get(id)
            .map(Rc::clone)
            .ok_or(CoreError::CustomerNotFound(id))
    }

    /// A stored order, or `OrderNotFound`.
    pub fn order(&self, id: u64) -> CoreResult<&Order> {
        self.orders.get(id).ok_or(CoreError::OrderNotFound(id))
    }

    /// All products in registration order.
    pub fn products(&self) -> &[ProductHandle] {
        self.products.list()
    }

    /// All customers in registration order.
    pub fn customers(&self) -> &[Rc<Customer>] {
        self.customers.list()
    }

    /// All orders in creation order.
    pub fn orders(&self) -> &[Order] {
        self.orders.list()
    }

    // -------------------------------------------------------------------------
    // Order Creation
    // -------------------------------------------------------------------------

    /// Creates an order: resolves the parts, applies discounts, stores the
    /// order, logs one summary record.
    ///
    /// Every lookup and argument check happens BEFORE the first product
    /// mutation, so a validation failure leaves the system untouched.
    pub fn create_order(
        &mut self,
        order_id: u64,
        customer_id: u64,
        line_specs: &[LineSpec],
    ) -> CoreResult<Order> {
        debug!(order_id, customer_id, lines = line_specs.len(), "create_order");

        if line_specs.is_empty() {
            return Err(CoreError::EmptyOrder);
        }

        let customer = self.customer(customer_id)?;

        let mut lines = Vec::with_capacity(line_specs.len());
        for spec in line_specs {
            let product = self.product(spec.product_id)?;
            lines.push(OrderLine::new(product, spec.quantity)?);
        }

        // All inputs are good; from here on shared products get mutated.
        for line in &lines {
            self.apply_best_discount(line)?;
        }

        let order = Order::new(order_id, Rc::clone(&customer), lines, Utc::now())?;
        let total = order.total();
        self.orders.add(order.clone());

        self.sink.record(&format!(
            "Order #{} created for {} with total {}",
            order_id,
            customer.name(),
            total
        ));

        Ok(order)
    }

    /// Evaluates every rule against the line and applies the single best
    /// candidate as a per-unit price cut on the shared product.
    ///
    /// The winning amount is divided by the quantity with truncating
    /// integer division; if that leaves less than a whole cent per unit,
    /// there is nothing to apply.
    fn apply_best_discount(&self, line: &OrderLine) -> CoreResult<()> {
        let (category, unit_price) = {
            let product = line.product().borrow();
            (product.category().to_string(), product.price())
        };

        let amount = best_discount(&self.rules, &category, line.quantity(), unit_price);
        if !amount.is_positive() {
            return Ok(());
        }

        let per_unit = amount.per_unit(line.quantity());
        if !per_unit.is_positive() {
            return Ok(());
        }

        line.product().borrow_mut().apply_discount(per_unit)
    }

    // -------------------------------------------------------------------------
    // Reporting
    // -------------------------------------------------------------------------

    /// One structured report record per stored order, in creation order.
    ///
    /// Empty when no orders exist; callers that want the human-readable
    /// placeholder use [`OrderService::report_lines`].
    pub fn order_history(&self) -> Vec<OrderReport> {
        self.orders.list().iter().map(OrderReport::for_order).collect()
    }

    /// Human-readable order history, one string per display line.
    ///
    /// Yields a single "no orders" line instead of an empty report.
    pub fn report_lines(&self) -> Vec<String> {
        if self.orders.is_empty() {
            return vec![NO_ORDERS_MESSAGE.to_string()];
        }

        self.order_history()
            .iter()
            .flat_map(OrderReport::render_lines)
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
