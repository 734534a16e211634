//! Small display-formatting helpers for order cards and status chips.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use tracking::status::OrderStatus;

/// Price in rupees with two decimals, e.g. `₹280.00`.
#[must_use]
pub fn rupees(amount: f64) -> String {
    format!("\u{20b9}{amount:.2}")
}

/// Compact label for a backend timestamp.
///
/// The backend sends `2026-08-10T12:30:00`; the card shows date and minutes
/// only. Anything shorter than that passes through untouched.
#[must_use]
pub fn date_label(timestamp: &str) -> String {
    timestamp
        .get(..16)
        .unwrap_or(timestamp)
        .replace('T', " ")
}

/// Human status line: the canonical label when the status is recognized,
/// the backend's raw string otherwise.
#[must_use]
pub fn status_label(raw: &str) -> String {
    OrderStatus::parse(raw).map_or_else(|| raw.to_owned(), |status| status.to_string())
}

/// CSS classes for a status chip.
#[must_use]
pub fn status_chip_class(status: Option<OrderStatus>) -> &'static str {
    match status {
        Some(OrderStatus::Delivered) => "chip chip--done",
        Some(OrderStatus::Cancelled) => "chip chip--cancelled",
        Some(_) => "chip chip--active",
        None => "chip",
    }
}
