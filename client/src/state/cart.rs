//! Cart contents persisted to browser session storage.
//!
//! The menu pages that fill the cart live outside this app; the state here
//! keeps the navbar badge and checkout handoff consistent with what those
//! pages stored. One restaurant at a time: adding from a second restaurant
//! replaces the cart.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use serde::{Deserialize, Serialize};

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "cart";

/// One menu-item line in the cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Backend menu-item id.
    pub menu_item_id: u64,
    /// Item name shown on the badge popover and checkout.
    pub name: String,
    /// Unit price in rupees.
    pub price: f64,
    /// Units of this item.
    pub quantity: u32,
}

/// Cart state for the signed-in customer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    /// Restaurant the cart belongs to; `None` when empty.
    #[serde(default)]
    pub restaurant_id: Option<u64>,
    #[serde(default)]
    pub lines: Vec<CartLine>,
}

impl CartState {
    /// Add one unit of a menu item. Switching restaurants clears the cart
    /// first.
    pub fn add(&mut self, restaurant_id: u64, menu_item_id: u64, name: &str, price: f64) {
        if self.restaurant_id != Some(restaurant_id) {
            self.restaurant_id = Some(restaurant_id);
            self.lines.clear();
        }
        match self
            .lines
            .iter_mut()
            .find(|line| line.menu_item_id == menu_item_id)
        {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                menu_item_id,
                name: name.to_owned(),
                price,
                quantity: 1,
            }),
        }
    }

    /// Remove one unit; a line at one unit disappears, and an emptied cart
    /// forgets its restaurant.
    pub fn remove_one(&mut self, menu_item_id: u64) {
        if let Some(index) = self
            .lines
            .iter()
            .position(|line| line.menu_item_id == menu_item_id)
        {
            if self.lines[index].quantity > 1 {
                self.lines[index].quantity -= 1;
            } else {
                self.lines.remove(index);
            }
        }
        if self.lines.is_empty() {
            self.restaurant_id = None;
        }
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Cart total in rupees.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.lines
            .iter()
            .map(|line| line.price * f64::from(line.quantity))
            .sum()
    }

    /// Read the persisted cart. Browser only; native callers get an empty
    /// cart.
    #[must_use]
    pub fn load() -> Self {
        #[cfg(feature = "csr")]
        {
            read_stored_cart().unwrap_or_default()
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }

    /// Persist the cart after a mutation. No-op outside the browser.
    pub fn save(&self) {
        #[cfg(feature = "csr")]
        {
            let Ok(raw) = serde_json::to_string(self) else {
                return;
            };
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.session_storage() {
                    let _ = storage.set_item(STORAGE_KEY, &raw);
                }
            }
        }
    }
}

#[cfg(feature = "csr")]
fn read_stored_cart() -> Option<CartState> {
    let storage = web_sys::window()?.session_storage().ok()??;
    let raw = storage.get_item(STORAGE_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}
