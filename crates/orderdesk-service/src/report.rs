//! # Report Records
//!
//! Structured order-history records. The console layer can render the
//! `Display` form directly or serialize the records and format them itself.
//!
//! ## Record Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  OrderReport                                                            │
//! │  ├── order id, customer name, total, creation timestamp                │
//! │  └── one OrderReportLine per item:                                     │
//! │      product name, quantity, unit price, subtotal                      │
//! │                                                                         │
//! │  Rendered:                                                              │
//! │    Order #1 | Ada Lovelace | total $310.00 | 2026-08-31 10:04:00 UTC   │
//! │      - Laptop x3 @ $90.00 = $270.00                                    │
//! │      - Novel x2 @ $20.00 = $40.00                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Prices in a report are the products' CURRENT prices at the moment the
//! report is generated, not a snapshot from order time - lines hold live
//! product references.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderdesk_core::{Money, Order};

/// The single line emitted instead of an empty report.
pub const NO_ORDERS_MESSAGE: &str = "No orders have been placed yet";

// =============================================================================
// Report Records
// =============================================================================

/// One item row within an order report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReportLine {
    pub product: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
    pub subtotal_cents: i64,
}

impl fmt::Display for OrderReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "  - {} x{} @ {} = {}",
            self.product,
            self.quantity,
            Money::from_cents(self.unit_price_cents),
            Money::from_cents(self.subtotal_cents)
        )
    }
}

/// Summary of one stored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReport {
    pub order_id: u64,
    pub customer: String,
    pub total_cents: i64,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<OrderReportLine>,
}

impl OrderReport {
    /// Builds the report record for one order, reading each product's
    /// current price.
    pub fn for_order(order: &Order) -> Self {
        let lines = order
            .lines()
            .iter()
            .map(|line| OrderReportLine {
                product: line.product().borrow().name().to_string(),
                quantity: line.quantity(),
                unit_price_cents: line.unit_price().cents(),
                subtotal_cents: line.subtotal().cents(),
            })
            .collect();

        OrderReport {
            order_id: order.id(),
            customer: order.customer().name().to_string(),
            total_cents: order.total().cents(),
            created_at: order.created_at(),
            lines,
        }
    }

    /// Flattens the record into display strings: one header line followed
    /// by one line per item.
    pub fn render_lines(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(1 + self.lines.len());
        out.push(format!(
            "Order #{} | {} | total {} | {}",
            self.order_id,
            self.customer,
            Money::from_cents(self.total_cents),
            self.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        out.extend(self.lines.iter().map(|line| line.to_string()));
        out
    }
}

impl fmt::Display for OrderReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.render_lines().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use orderdesk_core::{Customer, OrderLine, Product};

    fn sample_order() -> Order {
        let laptop = Product::new(1, "Laptop", Money::from_cents(9000), "Electronics")
            .unwrap()
            .into_handle();
        let novel = Product::new(2, "Novel", Money::from_cents(2000), "Books")
            .unwrap()
            .into_handle();
        let ada = Rc::new(Customer::new(1, "Ada Lovelace", "ada@example.com", "TX-1").unwrap());

        Order::new(
            1,
            ada,
            vec![
                OrderLine::new(laptop, 3).unwrap(),
                OrderLine::new(novel, 2).unwrap(),
            ],
            "2026-08-31T10:04:00Z".parse().unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_report_captures_order_fields() {
        let report = OrderReport::for_order(&sample_order());

        assert_eq!(report.order_id, 1);
        assert_eq!(report.customer, "Ada Lovelace");
        assert_eq!(report.total_cents, 31000);
        assert_eq!(report.lines.len(), 2);
        assert_eq!(report.lines[0].product, "Laptop");
        assert_eq!(report.lines[0].subtotal_cents, 27000);
        assert_eq!(report.lines[1].unit_price_cents, 2000);
    }

    #[test]
    fn test_render_lines() {
        let report = OrderReport::for_order(&sample_order());
        let lines = report.render_lines();

        assert_eq!(
            lines,
            vec![
                "Order #1 | Ada Lovelace | total $310.00 | 2026-08-31 10:04:00 UTC".to_string(),
                "  - Laptop x3 @ $90.00 = $270.00".to_string(),
                "  - Novel x2 @ $20.00 = $40.00".to_string(),
            ]
        );
    }

    #[test]
    fn test_report_serde_round_trip() {
        let report = OrderReport::for_order(&sample_order());
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"orderId\":1"));
        assert!(json.contains("\"unitPriceCents\":9000"));

        let back: OrderReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
