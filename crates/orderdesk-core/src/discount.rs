//! # Discount Rules
//!
//! Polymorphic discount evaluation for order lines.
//!
//! ## Evaluation Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Discount Selection                                   │
//! │                                                                         │
//! │  Line: category="Electronics", qty=3, unit=$100.00 (subtotal $300.00)  │
//! │       │                                                                 │
//! │       ├──► CategoryDiscount.evaluate() ──► $30.00 (10% of subtotal)    │
//! │       │                                                                 │
//! │       ├──► QuantityDiscount.evaluate() ──► $0.00  (qty < 5)            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  best_discount = MAXIMUM of candidates = $30.00                        │
//! │                                                                         │
//! │  At most ONE policy wins per line. Candidates are never summed.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules are pure: same inputs, same candidate, no mutation. Applying the
//! winning amount to a product is the order service's job, not a rule's.
//!
//! New rules slot into the registered list without touching existing ones.

use crate::money::Money;

// =============================================================================
// Rule Constants
// =============================================================================

/// Category whose lines qualify for the category discount (compared
/// case-insensitively).
pub const DISCOUNTED_CATEGORY: &str = "Electronics";

/// Category discount: 10% of the line subtotal, in basis points.
pub const CATEGORY_DISCOUNT_BPS: u32 = 1000;

/// Minimum quantity for the bulk discount to fire.
pub const BULK_MIN_QUANTITY: i64 = 5;

/// Bulk discount: 15% of the line subtotal, in basis points.
pub const BULK_DISCOUNT_BPS: u32 = 1500;

// =============================================================================
// Rule Trait
// =============================================================================

/// A discount rule scores one order line.
///
/// Given the line's product category, quantity, and current unit price, a
/// rule returns the amount it ALONE would deduct from the line subtotal
/// (`Money::zero()` when it does not apply). Implementations must be pure.
pub trait DiscountRule {
    fn evaluate(&self, category: &str, quantity: i64, unit_price: Money) -> Money;
}

// =============================================================================
// Concrete Rules
// =============================================================================

/// 10% off lines whose product category is "Electronics".
///
/// The comparison ignores case: "electronics" and "ELECTRONICS" both
/// qualify.
#[derive(Debug, Default)]
pub struct CategoryDiscount;

impl DiscountRule for CategoryDiscount {
    fn evaluate(&self, category: &str, quantity: i64, unit_price: Money) -> Money {
        if !category.eq_ignore_ascii_case(DISCOUNTED_CATEGORY) {
            return Money::zero();
        }

        unit_price
            .multiply_quantity(quantity)
            .percentage(CATEGORY_DISCOUNT_BPS)
    }
}

/// 15% off lines of 5 or more units, regardless of category.
#[derive(Debug, Default)]
pub struct QuantityDiscount;

impl DiscountRule for QuantityDiscount {
    fn evaluate(&self, _category: &str, quantity: i64, unit_price: Money) -> Money {
        if quantity < BULK_MIN_QUANTITY {
            return Money::zero();
        }

        unit_price
            .multiply_quantity(quantity)
            .percentage(BULK_DISCOUNT_BPS)
    }
}

// =============================================================================
// Rule Set Helpers
// =============================================================================

/// The standard rule set, in registration order.
///
/// Order does not affect outcomes (selection is by maximum), but the list
/// is the extension point: append new rules here or push onto the returned
/// vec.
pub fn default_rules() -> Vec<Box<dyn DiscountRule>> {
    vec![Box::new(CategoryDiscount), Box::new(QuantityDiscount)]
}

/// Evaluates every rule and returns the single best candidate amount.
///
/// Returns `Money::zero()` when no rule fires. Candidates are reduced by
/// maximum - at most one policy applies per line.
pub fn best_discount(
    rules: &[Box<dyn DiscountRule>],
    category: &str,
    quantity: i64,
    unit_price: Money,
) -> Money {
    rules
        .iter()
        .map(|rule| rule.evaluate(category, quantity, unit_price))
        .max()
        .unwrap_or_else(Money::zero)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_rule_fires_on_electronics() {
        let rule = CategoryDiscount;
        // qty 3 × $100.00 = $300.00 subtotal → $30.00
        let amount = rule.evaluate("Electronics", 3, Money::from_cents(10000));
        assert_eq!(amount.cents(), 3000);
    }

    #[test]
    fn test_category_rule_is_case_insensitive() {
        let rule = CategoryDiscount;
        let unit = Money::from_cents(10000);
        assert_eq!(rule.evaluate("electronics", 1, unit).cents(), 1000);
        assert_eq!(rule.evaluate("ELECTRONICS", 1, unit).cents(), 1000);
        assert_eq!(rule.evaluate("ElEcTrOnIcS", 1, unit).cents(), 1000);
    }

    #[test]
    fn test_category_rule_ignores_other_categories() {
        let rule = CategoryDiscount;
        assert!(rule.evaluate("Books", 3, Money::from_cents(10000)).is_zero());
    }

    #[test]
    fn test_quantity_rule_fires_at_threshold() {
        let rule = QuantityDiscount;
        let unit = Money::from_cents(2000);

        // qty 6 × $20.00 = $120.00 subtotal → $18.00
        assert_eq!(rule.evaluate("Books", 6, unit).cents(), 1800);
        // Threshold is inclusive: qty 5 fires
        assert_eq!(rule.evaluate("Books", 5, unit).cents(), 1500);
        // Below threshold: nothing
        assert!(rule.evaluate("Books", 4, unit).is_zero());
    }

    #[test]
    fn test_rules_do_not_mutate_inputs() {
        let rule = QuantityDiscount;
        let unit = Money::from_cents(2000);
        let first = rule.evaluate("Books", 6, unit);
        let second = rule.evaluate("Books", 6, unit);
        assert_eq!(first, second);
        assert_eq!(unit.cents(), 2000);
    }

    #[test]
    fn test_best_discount_takes_maximum_not_sum() {
        let rules = default_rules();

        // Electronics at qty 6: category gives 10%, bulk gives 15%.
        // $600.00 subtotal → candidates $60.00 and $90.00 → winner $90.00,
        // NOT $150.00.
        let best = best_discount(&rules, "Electronics", 6, Money::from_cents(10000));
        assert_eq!(best.cents(), 9000);
    }

    #[test]
    fn test_best_discount_zero_when_no_rule_fires() {
        let rules = default_rules();
        let best = best_discount(&rules, "Books", 3, Money::from_cents(2000));
        assert!(best.is_zero());
    }

    #[test]
    fn test_best_discount_order_independent() {
        let forward = default_rules();
        let reversed: Vec<Box<dyn DiscountRule>> =
            vec![Box::new(QuantityDiscount), Box::new(CategoryDiscount)];

        let unit = Money::from_cents(10000);
        assert_eq!(
            best_discount(&forward, "Electronics", 6, unit),
            best_discount(&reversed, "Electronics", 6, unit)
        );
    }

    #[test]
    fn test_rule_list_is_open_for_extension() {
        /// Flat $5.00 off any line - a rule the built-ins know nothing about.
        struct FlatFive;

        impl DiscountRule for FlatFive {
            fn evaluate(&self, _category: &str, _quantity: i64, _unit_price: Money) -> Money {
                Money::from_cents(500)
            }
        }

        let mut rules = default_rules();
        rules.push(Box::new(FlatFive));

        // Books qty 3: built-ins give zero, the new rule wins
        let best = best_discount(&rules, "Books", 3, Money::from_cents(2000));
        assert_eq!(best.cents(), 500);
    }
}
