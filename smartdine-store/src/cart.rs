//! Order cart
//!
//! Transient aggregation of menu items while an order is being
//! composed. Nothing here is persisted; the caller owns the cart and
//! resets it after a successful placement. Lines keep insertion order
//! and snapshot the item's name and price at add time, so later menu
//! edits do not reach into a cart already being filled.

use rust_decimal::Decimal;
use shared::models::{MenuItem, OrderItem};

use crate::money;

#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<OrderItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `item`, inserting a new line at quantity 1 when
    /// the item is not in the cart yet.
    pub fn add(&mut self, item: &MenuItem) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == item.id) {
            line.qty = line.qty.saturating_add(1);
        } else {
            self.lines.push(OrderItem {
                id: item.id.clone(),
                name: item.name.clone(),
                price: item.price,
                qty: 1,
            });
        }
    }

    /// Sets the quantity for an item already in the cart. A quantity of
    /// zero or less removes the line; an unknown id is ignored.
    pub fn set_quantity(&mut self, item_id: &str, qty: i32) {
        if qty <= 0 {
            self.lines.retain(|line| line.id != item_id);
        } else if let Some(line) = self.lines.iter_mut().find(|line| line.id == item_id) {
            line.qty = qty;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[OrderItem] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// The denormalized lines an order embeds, in insertion order.
    pub fn order_items(&self) -> Vec<OrderItem> {
        self.lines.clone()
    }

    /// Current total, recomputed on demand.
    pub fn total(&self) -> f64 {
        let sum = self
            .lines
            .iter()
            .fold(Decimal::ZERO, |acc, line| {
                acc + money::line_total(line.price, line.qty)
            });
        money::to_f64(sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_item(id: &str, name: &str, price: f64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            category: "Main".to_string(),
            price,
        }
    }

    #[test]
    fn test_add_twice_increments_quantity() {
        let pizza = create_test_item("m1", "Margherita Pizza", 9.99);
        let mut cart = Cart::new();
        cart.add(&pizza);
        cart.add(&pizza);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].qty, 2);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let pizza = create_test_item("m1", "Margherita Pizza", 9.99);
        let salad = create_test_item("m2", "Caesar Salad", 6.50);
        let mut cart = Cart::new();
        cart.add(&pizza);
        cart.add(&salad);
        cart.add(&pizza);

        let names: Vec<&str> = cart.lines().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Margherita Pizza", "Caesar Salad"]);
    }

    #[test]
    fn test_set_quantity_updates_line() {
        let pizza = create_test_item("m1", "Margherita Pizza", 9.99);
        let mut cart = Cart::new();
        cart.add(&pizza);
        cart.set_quantity("m1", 5);

        assert_eq!(cart.lines()[0].qty, 5);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let pizza = create_test_item("m1", "Margherita Pizza", 9.99);
        let mut cart = Cart::new();
        cart.add(&pizza);
        cart.set_quantity("m1", 0);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_negative_removes_line() {
        let pizza = create_test_item("m1", "Margherita Pizza", 9.99);
        let mut cart = Cart::new();
        cart.add(&pizza);
        cart.set_quantity("m1", -2);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_unknown_id_is_ignored() {
        let pizza = create_test_item("m1", "Margherita Pizza", 9.99);
        let mut cart = Cart::new();
        cart.add(&pizza);
        cart.set_quantity("missing", 3);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].qty, 1);
    }

    #[test]
    fn test_total_sums_price_times_quantity() {
        let pizza = create_test_item("m1", "Margherita Pizza", 9.99);
        let salad = create_test_item("m2", "Caesar Salad", 6.50);
        let mut cart = Cart::new();
        cart.add(&pizza);
        cart.add(&pizza);
        cart.add(&salad);

        assert_eq!(cart.total(), 26.48);
    }

    #[test]
    fn test_total_of_empty_cart_is_zero() {
        assert_eq!(Cart::new().total(), 0.0);
    }

    #[test]
    fn test_price_is_snapshotted_at_add_time() {
        let mut pizza = create_test_item("m1", "Margherita Pizza", 9.99);
        let mut cart = Cart::new();
        cart.add(&pizza);

        pizza.price = 100.0;
        assert_eq!(cart.total(), 9.99);
    }

    #[test]
    fn test_clear_empties_cart() {
        let pizza = create_test_item("m1", "Margherita Pizza", 9.99);
        let mut cart = Cart::new();
        cart.add(&pizza);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }
}
