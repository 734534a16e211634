#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use std::fmt;

/// Canonical order status.
///
/// The backend stores status as a free-form string, and the variants that
/// appear in the wild disagree on casing and separators ("PICKED UP",
/// "Out For Delivery", "out_for_delivery"). [`OrderStatus::parse`] folds
/// case and treats spaces, underscores and hyphens alike so every consumer
/// branches on one enum instead of re-deriving its own comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    /// Order received, not yet accepted by the restaurant.
    Placed,
    /// Restaurant is preparing the order.
    Preparing,
    /// Assigned to a partner who is heading to the restaurant.
    OutForDelivery,
    /// Partner has the order; live partner location applies.
    PickedUp,
    /// Terminal: handed to the customer.
    Delivered,
    /// Terminal: cancelled by the customer or the restaurant.
    Cancelled,
}

impl OrderStatus {
    /// Parse a backend status string; `None` for anything unrecognized.
    ///
    /// Unrecognized statuses are display-only for callers that keep the raw
    /// string around, and behave as "not picked up" for every marker rule.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let folded: String = raw
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .map(|c| c.to_ascii_uppercase())
            .collect();
        match folded.as_str() {
            "PLACED" => Some(Self::Placed),
            "PREPARING" => Some(Self::Preparing),
            "OUTFORDELIVERY" => Some(Self::OutForDelivery),
            "PICKEDUP" => Some(Self::PickedUp),
            "DELIVERED" => Some(Self::Delivered),
            "CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Delivered or cancelled; nothing further will happen to the order.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// The tracking page is worth opening for this order.
    #[must_use]
    pub fn can_track(self) -> bool {
        !self.is_terminal()
    }

    /// The customer may still cancel.
    #[must_use]
    pub fn can_cancel(self) -> bool {
        matches!(self, Self::Placed | Self::Preparing)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Placed => "Placed",
            Self::Preparing => "Preparing",
            Self::OutForDelivery => "Out for Delivery",
            Self::PickedUp => "Picked Up",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}
