//! Shared numeric constants for the tracking crate.

use crate::geo::Coordinate;

// ── View ────────────────────────────────────────────────────────

/// Zoom level used whenever a concrete location anchors the view.
pub const STREET_ZOOM: f64 = 14.0;

/// Wide zoom used when nothing better than the region center is known.
pub const REGION_ZOOM: f64 = 5.0;

/// Fallback map center: geographic center of the service region (India).
pub const REGION_CENTER: Coordinate = Coordinate { lat: 20.5937, lon: 78.9629 };

/// Padding applied on every side when fitting the view to bounds.
pub const FIT_PADDING_PX: u32 = 50;

// ── Polling ─────────────────────────────────────────────────────

/// Interval between order-tracking snapshot fetches.
pub const POLL_INTERVAL_MS: u32 = 10_000;

/// Interval between assignment-list refreshes on the partner console.
pub const ASSIGNMENT_POLL_INTERVAL_MS: u32 = 15_000;

// ── Geolocation ─────────────────────────────────────────────────

/// Upper bound on the one-shot position request.
pub const GEOLOCATION_TIMEOUT_MS: u32 = 10_000;

// ── Labels ──────────────────────────────────────────────────────

/// Partner display name when the backend has not assigned one.
pub const UNASSIGNED_PARTNER: &str = "Not Assigned Yet";
