//! Shopping cart types

use serde::{Deserialize, Serialize};

/// Line item in a session cart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    pub quantity: u32,
}

/// A session shopping cart
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the cart
    ///
    /// An existing line gets its quantity bumped by one, otherwise a new
    /// line with quantity 1 is appended.
    pub fn add_item(&mut self, id: &str, name: &str, price: f64, image: &str) {
        if let Some(line) = self.items.iter_mut().find(|i| i.id == id) {
            line.quantity += 1;
        } else {
            self.items.push(CartItem {
                id: id.to_string(),
                name: name.to_string(),
                price,
                image: image.to_string(),
                quantity: 1,
            });
        }
    }

    /// Remove a line from the cart
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
    }

    /// Set the quantity of a line; a quantity of zero removes the line
    pub fn update_quantity(&mut self, id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove_item(id);
            return;
        }
        if let Some(line) = self.items.iter_mut().find(|i| i.id == id) {
            line.quantity = quantity;
        }
    }

    /// Sum of price * quantity over all lines
    pub fn total_price(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.price * f64::from(i.quantity))
            .sum()
    }

    /// Total number of units in the cart
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Check if the cart has no lines
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_item_bumps_quantity() {
        let mut cart = Cart::new();
        cart.add_item("1", "Kolye", 100.0, "kolye.jpg");
        cart.add_item("1", "Kolye", 100.0, "kolye.jpg");

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn test_update_quantity_below_one_removes() {
        let mut cart = Cart::new();
        cart.add_item("1", "Kolye", 100.0, "");
        cart.update_quantity("1", 0);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add_item("1", "Kolye", 100.0, "");
        cart.add_item("2", "Bileklik", 50.0, "");
        cart.update_quantity("2", 3);

        assert_eq!(cart.total_items(), 4);
        assert!((cart.total_price() - 250.0).abs() < f64::EPSILON);
    }
}
