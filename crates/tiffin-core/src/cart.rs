//! # Cart
//!
//! The ordered set of line items on the page.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Page Action              Operation                 Effect              │
//! │  ───────────              ─────────                 ──────              │
//! │                                                                         │
//! │  Click menu "Add" ───────► add(item) ─────────────► push or qty += 1   │
//! │                                                                         │
//! │  Click + / − ────────────► adjust_quantity(id, ±1) ► qty += d, drop ≤0 │
//! │                                                                         │
//! │  Click Remove ───────────► remove(id) ────────────► retain != id       │
//! │                                                                         │
//! │  Click Clear / checkout ─► clear() ───────────────► items.clear()      │
//! │                                                                         │
//! │  Every re-render ────────► totals() ──────────────► (read only)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation is total: an unknown id is simply a no-op. Mutators return
//! `true` when the cart actually changed, which callers may use for logging.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{CartTotals, LineItem, MenuItem};

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `id` (adding an id already present bumps quantity)
/// - Every quantity is ≥ 1 (a line reaching 0 is removed)
/// - Lines keep the order they were first added in
/// - A line's name and unit price never change after it is created
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds one unit of a menu item.
    ///
    /// ## Behavior
    /// - Id already in cart: quantity + 1, the incoming name/price are ignored
    /// - Id not in cart: appended as a new line with quantity 1
    ///
    /// ```rust
    /// use tiffin_core::{Cart, MenuItem, Money};
    ///
    /// let mut cart = Cart::new();
    /// cart.add(MenuItem::new("A", "Dosa", Money::from_major(80)));
    /// cart.add(MenuItem::new("A", "Dosa", Money::from_major(80)));
    ///
    /// assert_eq!(cart.len(), 1);
    /// assert_eq!(cart.get("A").unwrap().quantity, 2);
    /// ```
    pub fn add(&mut self, item: MenuItem) -> bool {
        if let Some(line) = self.line_mut(&item.id) {
            line.quantity = line.quantity.saturating_add(1);
            return true;
        }

        self.items.push(LineItem::from_menu_item(item));
        true
    }

    /// Changes a line's quantity by a signed delta.
    ///
    /// ## Behavior
    /// - Id not in cart: no-op
    /// - `quantity + delta <= 0`: the line is removed
    /// - Otherwise the new quantity is stored (saturating at `u32::MAX`)
    pub fn adjust_quantity(&mut self, id: &str, delta: i64) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        let new_qty = i64::from(self.items[index].quantity).saturating_add(delta);
        if new_qty <= 0 {
            self.items.remove(index);
        } else {
            self.items[index].quantity = u32::try_from(new_qty).unwrap_or(u32::MAX);
        }
        delta != 0
    }

    /// Removes a line by id. Removing an absent id is a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|line| line.id != id);
        self.items.len() != initial_len
    }

    /// Removes every line.
    pub fn clear(&mut self) -> bool {
        let had_items = !self.items.is_empty();
        self.items.clear();
        had_items
    }

    /// Computes the cart totals.
    ///
    /// ## Calculation Flow
    /// ```text
    /// Σ(unit_price × quantity) ──► items_total ──► grand_total
    ///                                               (no fees: identity)
    /// ```
    pub fn totals(&self) -> CartTotals {
        let items_total: Money = self.items.iter().map(LineItem::line_total).sum();

        CartTotals {
            items_total,
            grand_total: items_total,
            line_count: self.items.len(),
            total_quantity: self.total_quantity(),
        }
    }

    /// Lines in the order they were first added.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Looks up a line by id.
    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|line| line.id == id)
    }

    /// Returns the number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, line| acc.saturating_add(line.quantity))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|line| line.id == id)
    }

    fn line_mut(&mut self, id: &str) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|line| line.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, major: i64) -> MenuItem {
        MenuItem::new(id, name, Money::from_major(major))
    }

    #[test]
    fn test_add_new_item_starts_at_one() {
        let mut cart = Cart::new();
        assert!(cart.add(item("A", "Dosa", 80)));

        let line = cart.get("A").unwrap();
        assert_eq!(line.quantity, 1);
        assert_eq!(line.name, "Dosa");
        assert_eq!(line.unit_price, Money::from_major(80));
    }

    #[test]
    fn test_repeated_add_counts_and_keeps_first_record() {
        let mut cart = Cart::new();
        cart.add(item("A", "Dosa", 80));
        cart.add(item("A", "Plain Dosa", 95));
        cart.add(item("A", "Ghee Dosa", 120));

        assert_eq!(cart.len(), 1);
        let line = cart.get("A").unwrap();
        assert_eq!(line.quantity, 3);
        assert_eq!(line.name, "Dosa");
        assert_eq!(line.unit_price, Money::from_major(80));
    }

    #[test]
    fn test_same_id_twice_gives_line_total_160() {
        let mut cart = Cart::new();
        cart.add(item("A", "Dosa", 80));
        cart.add(item("A", "Dosa", 80));

        assert_eq!(cart.len(), 1);
        let line = cart.get("A").unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.line_total(), Money::from_major(160));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add(item("C", "Chai", 20));
        cart.add(item("A", "Dosa", 80));
        cart.add(item("B", "Idli", 50));
        cart.add(item("C", "Chai", 20));

        let ids: Vec<&str> = cart.items().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["C", "A", "B"]);
    }

    #[test]
    fn test_adjust_quantity_up_and_down() {
        let mut cart = Cart::new();
        cart.add(item("A", "Dosa", 80));

        assert!(cart.adjust_quantity("A", 1));
        assert_eq!(cart.get("A").unwrap().quantity, 2);

        assert!(cart.adjust_quantity("A", -1));
        assert_eq!(cart.get("A").unwrap().quantity, 1);
    }

    #[test]
    fn test_adjust_to_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add(item("B", "Idli", 50));

        cart.adjust_quantity("B", -1);

        assert!(cart.is_empty());
        assert_eq!(cart.totals(), CartTotals::default());
    }

    #[test]
    fn test_adjust_by_negative_quantity_always_removes() {
        for qty in 1..=5u32 {
            let mut cart = Cart::new();
            for _ in 0..qty {
                cart.add(item("A", "Dosa", 80));
            }
            cart.add(item("B", "Idli", 50));

            cart.adjust_quantity("A", -i64::from(qty));

            assert!(cart.get("A").is_none());
            assert_eq!(cart.len(), 1);
        }
    }

    #[test]
    fn test_adjust_below_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add(item("A", "Dosa", 80));
        cart.adjust_quantity("A", -10);
        assert!(cart.get("A").is_none());
    }

    #[test]
    fn test_adjust_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(item("A", "Dosa", 80));
        let before = cart.clone();

        assert!(!cart.adjust_quantity("Z", 1));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_adjust_saturates() {
        let mut cart = Cart::new();
        cart.add(item("A", "Dosa", 80));
        cart.adjust_quantity("A", i64::MAX);
        assert_eq!(cart.get("A").unwrap().quantity, u32::MAX);
    }

    #[test]
    fn test_totals_at_max_price_and_saturated_quantity() {
        let mut cart = Cart::new();
        cart.add(MenuItem::new("A", "Thali", crate::MAX_PRICE));
        cart.adjust_quantity("A", i64::MAX);

        let totals = cart.totals();
        let expected = i64::from(u32::MAX) * crate::MAX_PRICE.minor();
        assert_eq!(totals.items_total.minor(), expected);
        assert_eq!(totals.grand_total, totals.items_total);
        assert_eq!(totals.total_quantity, u32::MAX);
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        let mut cart = Cart::new();
        for id in ["A", "B", "C"] {
            cart.add(MenuItem::new(id, "Thali", crate::MAX_PRICE));
            cart.adjust_quantity(id, i64::MAX);
        }

        let totals = cart.totals();
        assert_eq!(totals.items_total, Money::from_minor(i64::MAX));
        assert_eq!(totals.total_quantity, u32::MAX);
        assert_eq!(totals.line_count, 3);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::new();
        cart.add(item("A", "Dosa", 80));
        cart.add(item("B", "Idli", 50));

        assert!(cart.remove("A"));
        let after_first = cart.clone();

        assert!(!cart.remove("A"));
        assert_eq!(cart, after_first);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_totals_sum_lines() {
        let mut cart = Cart::new();
        cart.add(item("A", "Dosa", 80));
        cart.add(item("B", "Vada", 120));

        let totals = cart.totals();
        assert_eq!(totals.items_total, Money::from_major(200));
        assert_eq!(totals.grand_total, Money::from_major(200));
        assert_eq!(totals.line_count, 2);
        assert_eq!(totals.total_quantity, 2);
    }

    #[test]
    fn test_totals_keep_fractional_precision() {
        let mut cart = Cart::new();
        cart.add(MenuItem::new("A", "Chai", Money::from_minor(1250)));
        cart.add(MenuItem::new("A", "Chai", Money::from_minor(1250)));
        cart.add(MenuItem::new("B", "Bun", Money::from_minor(999)));

        let totals = cart.totals();
        let expected: Money = cart.items().iter().map(LineItem::line_total).sum();
        assert_eq!(totals.items_total, expected);
        assert_eq!(totals.items_total.minor(), 3499);
        assert_eq!(totals.grand_total, totals.items_total);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut cart = Cart::new();
        cart.add(item("A", "Dosa", 80));
        cart.add(item("B", "Idli", 50));

        assert!(cart.clear());
        assert!(cart.is_empty());
        assert_eq!(cart.totals().items_total, Money::zero());
        assert_eq!(cart.totals().grand_total, Money::zero());

        // Clearing an empty cart is allowed and reports no change
        assert!(!cart.clear());
    }

    #[test]
    fn test_empty_cart_totals_are_zero() {
        let totals = Cart::new().totals();
        assert!(totals.items_total.is_zero());
        assert!(totals.grand_total.is_zero());
        assert_eq!(totals.line_count, 0);
    }
}
