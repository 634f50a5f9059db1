//! # Catalogs
//!
//! In-memory, insertion-ordered stores for the three entity types.
//!
//! ## Store Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Operations                                 │
//! │                                                                         │
//! │  add(entity)  ───► appends; NO duplicate-id check (caller supplies     │
//! │                    unique ids by contract)                              │
//! │                                                                         │
//! │  get(id)      ───► first entry with that id, or None                   │
//! │                                                                         │
//! │  list()       ───► every entry, in insertion order                     │
//! │                                                                         │
//! │  There is no remove. Products and customers live for the whole         │
//! │  process; orders are never cancelled in this scope.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! None, on purpose. The catalogs back a single-user, single-threaded
//! console session; the product store even hands out `Rc<RefCell<_>>`
//! handles, so the whole layer is `!Send` by construction.

use std::rc::Rc;

use orderdesk_core::{Customer, Order, ProductHandle};

// =============================================================================
// Catalog Entry Trait
// =============================================================================

/// Anything a catalog can store: it just has to expose its id.
pub trait CatalogEntry {
    fn entry_id(&self) -> u64;
}

impl CatalogEntry for ProductHandle {
    fn entry_id(&self) -> u64 {
        self.borrow().id()
    }
}

impl CatalogEntry for Rc<Customer> {
    fn entry_id(&self) -> u64 {
        self.id()
    }
}

impl CatalogEntry for Order {
    fn entry_id(&self) -> u64 {
        self.id()
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// An insertion-ordered in-memory store of one entity type.
///
/// ## Usage
/// ```rust
/// use orderdesk_core::{Money, Product};
/// use orderdesk_service::catalog::ProductCatalog;
///
/// let mut catalog = ProductCatalog::new();
/// let laptop = Product::new(1, "Laptop", Money::from_cents(99900), "Electronics").unwrap();
/// catalog.add(laptop.into_handle());
///
/// assert!(catalog.get(1).is_some());
/// assert!(catalog.get(99).is_none());
/// assert_eq!(catalog.list().len(), 1);
/// ```
#[derive(Debug)]
pub struct Catalog<T: CatalogEntry> {
    entries: Vec<T>,
}

impl<T: CatalogEntry> Catalog<T> {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog {
            entries: Vec::new(),
        }
    }

    /// Appends an entry.
    ///
    /// No duplicate-id check: supplying unique ids is the caller's
    /// responsibility. With duplicates, `get` keeps returning the first.
    pub fn add(&mut self, entry: T) {
        self.entries.push(entry);
    }

    /// Returns the first entry with the given id, if any.
    pub fn get(&self, id: u64) -> Option<&T> {
        self.entries.iter().find(|entry| entry.entry_id() == id)
    }

    /// Returns all entries in insertion order.
    pub fn list(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: CatalogEntry> Default for Catalog<T> {
    fn default() -> Self {
        Catalog::new()
    }
}

// =============================================================================
// Concrete Catalogs
// =============================================================================

/// Product store. Hands out shared handles so order lines can observe
/// later price reductions.
pub type ProductCatalog = Catalog<ProductHandle>;

/// Customer store. Customers are immutable, so plain `Rc` sharing suffices.
pub type CustomerCatalog = Catalog<Rc<Customer>>;

/// Order store. Orders are owned outright; nothing mutates them after
/// creation.
pub type OrderCatalog = Catalog<Order>;

// =============================================================================
// Unit Tests
// =============================================================================
