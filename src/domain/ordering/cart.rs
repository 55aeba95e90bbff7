//! Cart arithmetic.

use std::collections::BTreeMap;

use serde::Serialize;

use super::menu::{find_item, MenuItem, MenuItemId, DELIVERY_CHARGE};
use super::OrderingError;

/// One cart line: a menu item and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line in rupees.
    pub fn line_total(&self) -> u32 {
        self.item.price * self.quantity
    }
}

/// Item quantities keyed by menu item id.
///
/// A line exists only while its quantity is at least one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    quantities: BTreeMap<MenuItemId, u32>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one of `id` to the cart.
    pub fn add(&mut self, id: MenuItemId) -> Result<u32, OrderingError> {
        find_item(id).ok_or(OrderingError::UnknownMenuItem(id))?;
        let quantity = self.quantities.entry(id).or_insert(0);
        *quantity += 1;
        Ok(*quantity)
    }

    /// Removes one of `id`, dropping the line when it reaches zero.
    ///
    /// Removing an item that is not in the cart does nothing.
    pub fn remove(&mut self, id: MenuItemId) -> Result<u32, OrderingError> {
        find_item(id).ok_or(OrderingError::UnknownMenuItem(id))?;
        match self.quantities.get_mut(&id) {
            Some(quantity) if *quantity > 1 => {
                *quantity -= 1;
                Ok(*quantity)
            }
            Some(_) => {
                self.quantities.remove(&id);
                Ok(0)
            }
            None => Ok(0),
        }
    }

    /// Quantity of `id` currently in the cart.
    pub fn quantity(&self, id: MenuItemId) -> u32 {
        self.quantities.get(&id).copied().unwrap_or(0)
    }

    /// Lines in menu order.
    pub fn lines(&self) -> Vec<CartLine> {
        self.quantities
            .iter()
            .filter_map(|(id, quantity)| {
                find_item(*id).map(|item| CartLine {
                    item: item.clone(),
                    quantity: *quantity,
                })
            })
            .collect()
    }

    /// Sum of line totals, before delivery.
    pub fn subtotal(&self) -> u32 {
        self.lines().iter().map(CartLine::line_total).sum()
    }

    /// Subtotal plus the delivery charge.
    pub fn total(&self) -> u32 {
        self.subtotal() + DELIVERY_CHARGE
    }

    /// Total number of units across all lines.
    pub fn count(&self) -> u32 {
        self.quantities.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    pub fn clear(&mut self) {
        self.quantities.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PARATHA: MenuItemId = MenuItemId(1);
    const NOODLES: MenuItemId = MenuItemId(3);
    const CHIPS: MenuItemId = MenuItemId(6);

    #[test]
    fn empty_cart_totals() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.subtotal(), 0);
        assert_eq!(cart.total(), DELIVERY_CHARGE);
    }

    #[test]
    fn add_increments_quantity() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(PARATHA).unwrap(), 1);
        assert_eq!(cart.add(PARATHA).unwrap(), 2);
        assert_eq!(cart.quantity(PARATHA), 2);
    }

    #[test]
    fn remove_drops_line_at_zero() {
        let mut cart = Cart::new();
        cart.add(CHIPS).unwrap();
        cart.add(CHIPS).unwrap();
        assert_eq!(cart.remove(CHIPS).unwrap(), 1);
        assert_eq!(cart.remove(CHIPS).unwrap(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn remove_absent_item_is_noop() {
        let mut cart = Cart::new();
        cart.add(PARATHA).unwrap();
        assert_eq!(cart.remove(NOODLES).unwrap(), 0);
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn unknown_items_are_rejected() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.add(MenuItemId(42)),
            Err(OrderingError::UnknownMenuItem(MenuItemId(42)))
        );
        assert_eq!(
            cart.remove(MenuItemId(0)),
            Err(OrderingError::UnknownMenuItem(MenuItemId(0)))
        );
    }

    #[test]
    fn totals_for_mixed_cart() {
        let mut cart = Cart::new();
        cart.add(PARATHA).unwrap();
        cart.add(PARATHA).unwrap();
        cart.add(NOODLES).unwrap();
        cart.add(CHIPS).unwrap();

        // 2 x 40 + 70 + 25
        assert_eq!(cart.subtotal(), 175);
        assert_eq!(cart.total(), 195);
        assert_eq!(cart.count(), 4);
    }

    #[test]
    fn lines_follow_menu_order() {
        let mut cart = Cart::new();
        cart.add(CHIPS).unwrap();
        cart.add(PARATHA).unwrap();

        let names: Vec<_> = cart.lines().iter().map(|l| l.item.name).collect();
        assert_eq!(names, vec!["Aloo Paratha", "Chips"]);
        assert_eq!(cart.lines()[1].line_total(), 25);
    }

    fn menu_id() -> impl Strategy<Value = MenuItemId> {
        (1u32..=7).prop_map(MenuItemId)
    }

    proptest! {
        #[test]
        fn subtotal_matches_sum_of_adds(ids in proptest::collection::vec(menu_id(), 0..40)) {
            let mut cart = Cart::new();
            let mut expected = 0;
            for id in &ids {
                cart.add(*id).unwrap();
                expected += find_item(*id).unwrap().price;
            }
            prop_assert_eq!(cart.subtotal(), expected);
            prop_assert_eq!(cart.count() as usize, ids.len());
            prop_assert_eq!(cart.total(), expected + DELIVERY_CHARGE);
        }

        #[test]
        fn adding_then_removing_everything_empties_cart(ids in proptest::collection::vec(menu_id(), 0..40)) {
            let mut cart = Cart::new();
            for id in &ids {
                cart.add(*id).unwrap();
            }
            for id in &ids {
                cart.remove(*id).unwrap();
            }
            prop_assert!(cart.is_empty());
            prop_assert_eq!(cart.subtotal(), 0);
        }
    }
}
