//! # orderdesk-service: Catalogs & Order Orchestration for Orderdesk
//!
//! The stateful layer of Orderdesk: everything lives in memory for the
//! lifetime of the process, nothing is persisted, and a single thread owns
//! it all.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Orderdesk Data Flow                               │
//! │                                                                         │
//! │  Console shell (external: menu loop, parsing, rendering)               │
//! │       │  validated primitives in, records/errors out                    │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 orderdesk-service (THIS CRATE)                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Catalogs    │    │ OrderService  │    │   Reports    │  │   │
//! │  │   │ (catalog.rs)  │    │ (service.rs)  │    │ (report.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ products      │◄───│ discounts     │───►│ OrderReport  │  │   │
//! │  │   │ customers     │    │ creation      │    │ Display/serde│  │   │
//! │  │   │ orders        │    │ history       │    │              │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │                                │                               │   │
//! │  │                        ┌───────▼───────┐                       │   │
//! │  │                        │   LogSink     │  one record per       │   │
//! │  │                        │  (sink.rs)    │  created order        │   │
//! │  │                        └───────────────┘                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  orderdesk-core (pure entities, money, discount rules)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog`] - Insertion-ordered stores for products, customers, orders
//! - [`service`] - The [`service::OrderService`] facade
//! - [`report`] - Structured order-history records
//! - [`sink`] - The injected logging seam
//!
//! ## Usage
//!
//! ```rust
//! use orderdesk_service::{LineSpec, OrderService, TracingSink};
//!
//! let mut service = OrderService::new(Box::new(TracingSink));
//!
//! service.add_product(1, "Laptop", 99900, "Electronics")?;
//! service.add_customer(1, "Ada Lovelace", "ada@example.com", "TX-1")?;
//! service.create_order(1, 1, &[LineSpec::new(1, 1)])?;
//!
//! for line in service.report_lines() {
//!     println!("{line}");
//! }
//! # Ok::<(), orderdesk_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod report;
pub mod service;
pub mod sink;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, CatalogEntry, CustomerCatalog, OrderCatalog, ProductCatalog};
pub use report::{OrderReport, OrderReportLine, NO_ORDERS_MESSAGE};
pub use service::{LineSpec, OrderService};
pub use sink::{LogSink, TracingSink};
