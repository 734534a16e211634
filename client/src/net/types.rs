//! Shared wire-protocol DTOs for the REST backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads field for field. The
//! backend serializes camelCase keys and omits nothing, but optional
//! associations (restaurant, menu item) can be `null`, so anything that can
//! legally be absent is an `Option` with a display fallback next to it.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use tracking::status::OrderStatus;

/// Display label used when an order line lost its menu item.
const MISSING_ITEM_LABEL: &str = "Item Not Found";

/// Restaurant reference embedded in an order.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRef {
    /// Backend restaurant id.
    pub id: u64,
    /// Restaurant display name.
    pub name: String,
}

/// Menu-item reference inside an order line.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemRef {
    /// Item display name.
    pub name: String,
}

/// One line of a placed order.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Units ordered.
    pub quantity: u32,
    /// Unit price at order time, if the backend recorded it.
    #[serde(default)]
    pub price: Option<f64>,
    /// The menu item; `null` when it was deleted after ordering.
    #[serde(default)]
    pub menu_item: Option<MenuItemRef>,
}

impl OrderLine {
    /// Item name with a fallback for deleted menu items.
    #[must_use]
    pub fn label(&self) -> &str {
        self.menu_item
            .as_ref()
            .map_or(MISSING_ITEM_LABEL, |item| item.name.as_str())
    }
}

/// One of the customer's orders, as listed on the My Orders page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// Backend order id.
    pub id: u64,
    /// Raw status string, e.g. `"OUT_FOR_DELIVERY"`.
    pub status: String,
    /// Order total in rupees.
    pub total_price: f64,
    /// Placement timestamp as the backend formatted it.
    #[serde(default)]
    pub order_date: Option<String>,
    /// Restaurant the order was placed with.
    #[serde(default)]
    pub restaurant: Option<RestaurantRef>,
    /// Order lines; can be empty on legacy rows.
    #[serde(default)]
    pub order_items: Vec<OrderLine>,
}

impl OrderSummary {
    /// Canonical status; unrecognized backend strings parse to `None`.
    #[must_use]
    pub fn status(&self) -> Option<OrderStatus> {
        OrderStatus::parse(&self.status)
    }

    /// Restaurant name with a fallback for deleted restaurants.
    #[must_use]
    pub fn restaurant_name(&self) -> &str {
        self.restaurant
            .as_ref()
            .map_or("Restaurant", |restaurant| restaurant.name.as_str())
    }
}

/// Sorts orders newest first. Backend timestamps are ISO 8601, so their
/// lexicographic order is the chronological order; undated rows sort last,
/// higher ids first within a tie.
pub fn sort_newest_first(orders: &mut [OrderSummary]) {
    orders.sort_by(|a, b| (b.order_date.as_deref(), b.id).cmp(&(a.order_date.as_deref(), a.id)));
}

/// Delivery-partner profile for the signed-in user.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerProfile {
    /// Backend partner id. Distinct from the user id.
    pub id: u64,
    /// Whether the partner is accepting assignments.
    #[serde(default)]
    pub available: Option<bool>,
}

/// One assignment row on the delivery console.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Backend order id.
    pub order_id: u64,
    /// Raw status string for the order.
    pub order_status: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_address: Option<String>,
    #[serde(default)]
    pub restaurant_name: Option<String>,
    #[serde(default)]
    pub restaurant_address: Option<String>,
}

impl Assignment {
    /// Canonical status; unrecognized backend strings parse to `None`.
    #[must_use]
    pub fn status(&self) -> Option<OrderStatus> {
        OrderStatus::parse(&self.order_status)
    }
}

/// Request body for the partner location report.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationUpdate {
    pub latitude: f64,
    pub longitude: f64,
}
