#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use serde::Deserialize;

use crate::consts::UNASSIGNED_PARTNER;
use crate::geo::Coordinate;
use crate::status::OrderStatus;

/// One fetched representation of an order's status and known locations, as
/// returned by `GET /api/track/{orderId}`.
///
/// Locations arrive as nullable floats with `(0, 0)` doubling as "unset".
/// The accessors apply the absence contract from [`Coordinate::from_parts`]
/// so callers never see the sentinel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingSnapshot {
    /// Numeric order id echoed back by the endpoint.
    pub order_id: u64,
    /// Raw backend status string; interpret with [`TrackingSnapshot::status`].
    pub order_status: String,
    /// Assigned partner's display name, if any.
    #[serde(default)]
    pub partner_name: Option<String>,
    /// Partner latitude; the backend zeroes this until pickup.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Partner longitude; the backend zeroes this until pickup.
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub restaurant_latitude: Option<f64>,
    #[serde(default)]
    pub restaurant_longitude: Option<f64>,
}

impl TrackingSnapshot {
    /// Canonical status, `None` when the backend sent something novel.
    #[must_use]
    pub fn status(&self) -> Option<OrderStatus> {
        OrderStatus::parse(&self.order_status)
    }

    /// Partner location under the absence contract.
    #[must_use]
    pub fn partner_position(&self) -> Option<Coordinate> {
        Coordinate::from_parts(self.latitude, self.longitude)
    }

    /// Restaurant location under the absence contract.
    #[must_use]
    pub fn restaurant_position(&self) -> Option<Coordinate> {
        Coordinate::from_parts(self.restaurant_latitude, self.restaurant_longitude)
    }

    /// Partner display name, defaulting to the unassigned placeholder.
    #[must_use]
    pub fn partner_label(&self) -> &str {
        self.partner_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(UNASSIGNED_PARTNER)
    }
}
