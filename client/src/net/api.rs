//! REST API client for the dishpatch backend.
//!
//! Browser builds issue real HTTP requests via `gloo-net` against the page's
//! own origin. Native builds (unit tests) compile the same signatures with
//! inert bodies so callers typecheck everywhere.
//!
//! ERROR HANDLING
//! ==============
//! The tracking fetch surfaces a typed [`TrackingFetchError`] because the
//! session driver treats a failed first load and a failed poll differently.
//! List fetches collapse failures to `None` so a broken backend empties a
//! page instead of crashing it, and the order/delivery transitions return
//! the server's own rejection text for the toast.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use tracking::error::TrackingFetchError;
use tracking::snapshot::TrackingSnapshot;

use super::types::{Assignment, LocationUpdate, OrderSummary, PartnerProfile};

#[cfg(any(test, feature = "csr"))]
fn track_endpoint(order_id: &str) -> String {
    format!("/api/track/{order_id}")
}

#[cfg(any(test, feature = "csr"))]
fn user_orders_endpoint(user_id: u64) -> String {
    format!("/api/orders/user/{user_id}")
}

#[cfg(any(test, feature = "csr"))]
fn cancel_order_endpoint(order_id: u64) -> String {
    format!("/api/orders/cancel/{order_id}")
}

#[cfg(any(test, feature = "csr"))]
fn partner_profile_endpoint(user_id: u64) -> String {
    format!("/api/delivery/me/{user_id}")
}

#[cfg(any(test, feature = "csr"))]
fn assignments_endpoint(partner_id: u64) -> String {
    format!("/api/delivery/my-orders/{partner_id}")
}

#[cfg(any(test, feature = "csr"))]
fn update_location_endpoint(partner_id: u64) -> String {
    format!("/api/delivery/update-location/{partner_id}")
}

#[cfg(any(test, feature = "csr"))]
fn pickup_endpoint(order_id: u64) -> String {
    format!("/api/delivery/pickup/{order_id}")
}

#[cfg(any(test, feature = "csr"))]
fn delivered_endpoint(order_id: u64) -> String {
    format!("/api/delivery/delivered/{order_id}")
}

/// Fetch the live tracking snapshot for an order.
///
/// # Errors
///
/// A [`TrackingFetchError`] carrying the server's message when the response
/// is non-2xx, or the generic lookup failure when the request never
/// completed or the payload would not decode.
pub async fn fetch_tracking(order_id: &str) -> Result<TrackingSnapshot, TrackingFetchError> {
    #[cfg(feature = "csr")]
    {
        let response = match gloo_net::http::Request::get(&track_endpoint(order_id))
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                log::warn!("tracking request failed: {err}");
                return Err(TrackingFetchError::not_found(order_id));
            }
        };
        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(TrackingFetchError::from_error_body(order_id, &body));
        }
        match response.json::<TrackingSnapshot>().await {
            Ok(snapshot) => Ok(snapshot),
            Err(err) => {
                log::warn!("tracking payload would not decode: {err}");
                Err(TrackingFetchError::not_found(order_id))
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(TrackingFetchError::not_found(order_id))
    }
}

/// Fetch the signed-in customer's orders, newest first. `None` when the
/// request fails.
pub async fn fetch_my_orders(user_id: u64) -> Option<Vec<OrderSummary>> {
    #[cfg(feature = "csr")]
    {
        let response = gloo_net::http::Request::get(&user_orders_endpoint(user_id))
            .send()
            .await
            .ok()?;
        if !response.ok() {
            log::warn!("order list rejected: {}", response.status());
            return None;
        }
        let mut orders = response.json::<Vec<OrderSummary>>().await.ok()?;
        super::types::sort_newest_first(&mut orders);
        Some(orders)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = user_id;
        None
    }
}

/// Cancel an order that has not left the restaurant yet.
///
/// # Errors
///
/// The server's rejection text, or a generic line when the request never
/// completed.
pub async fn cancel_order(order_id: u64) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        put_expecting_ok(&cancel_order_endpoint(order_id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = order_id;
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch the delivery-partner profile backing a user account. `None` when
/// the user has no partner record or the request fails.
pub async fn fetch_partner_profile(user_id: u64) -> Option<PartnerProfile> {
    #[cfg(feature = "csr")]
    {
        let response = gloo_net::http::Request::get(&partner_profile_endpoint(user_id))
            .send()
            .await
            .ok()?;
        if !response.ok() {
            log::warn!("partner profile rejected: {}", response.status());
            return None;
        }
        response.json::<PartnerProfile>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = user_id;
        None
    }
}

/// Fetch the partner's current assignments. `None` when the request fails,
/// so a flaky poll keeps the last good list on screen.
pub async fn fetch_assignments(partner_id: u64) -> Option<Vec<Assignment>> {
    #[cfg(feature = "csr")]
    {
        let response = gloo_net::http::Request::get(&assignments_endpoint(partner_id))
            .send()
            .await
            .ok()?;
        if !response.ok() {
            log::warn!("assignment list rejected: {}", response.status());
            return None;
        }
        response.json::<Vec<Assignment>>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = partner_id;
        None
    }
}

/// Report the partner's current position. Failures are logged and dropped;
/// the next GPS fix retries anyway.
pub async fn push_partner_location(partner_id: u64, update: LocationUpdate) {
    #[cfg(feature = "csr")]
    {
        let request =
            match gloo_net::http::Request::put(&update_location_endpoint(partner_id)).json(&update)
            {
                Ok(request) => request,
                Err(err) => {
                    log::warn!("location update would not encode: {err}");
                    return;
                }
            };
        match request.send().await {
            Ok(response) if !response.ok() => {
                log::warn!("location update rejected: {}", response.status());
            }
            Ok(_) => {}
            Err(err) => log::warn!("location update failed: {err}"),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (partner_id, update);
    }
}

/// Mark an assignment as picked up from the restaurant.
///
/// # Errors
///
/// The server's rejection text when the transition is refused.
pub async fn mark_picked_up(order_id: u64) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        put_expecting_ok(&pickup_endpoint(order_id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = order_id;
        Err("not available outside the browser".to_owned())
    }
}

/// Mark an assignment as delivered to the customer.
///
/// # Errors
///
/// The server's rejection text when the transition is refused.
pub async fn mark_delivered(order_id: u64) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        put_expecting_ok(&delivered_endpoint(order_id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = order_id;
        Err("not available outside the browser".to_owned())
    }
}

/// Issue a bodyless PUT and fold any failure into display text.
#[cfg(feature = "csr")]
async fn put_expecting_ok(url: &str) -> Result<(), String> {
    let response = gloo_net::http::Request::put(url)
        .send()
        .await
        .map_err(|err| err.to_string())?;
    if response.ok() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    if body.trim().is_empty() {
        Err(format!("request failed with status {}", response.status()))
    } else {
        Err(body.trim().to_owned())
    }
}
