#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::consts::{FIT_PADDING_PX, POLL_INTERVAL_MS, REGION_CENTER, REGION_ZOOM, STREET_ZOOM, UNASSIGNED_PARTNER};
use crate::geo::{Bounds, Coordinate};
use crate::snapshot::TrackingSnapshot;
use crate::status::OrderStatus;

/// Commands returned from session operations for the host to replay.
///
/// Order within a batch matters: teardown precedes creation, marker moves
/// precede the fit that should include them. A host replays every command
/// in sequence and never reorders.
#[derive(Debug, Clone, PartialEq)]
pub enum MapCommand {
    /// Cancel the poll timer and destroy the map, when either exists.
    ResetSession,
    CreateMap { center: Coordinate, zoom: f64 },
    AddMarker { kind: MarkerKind, at: Coordinate },
    MoveMarker { kind: MarkerKind, to: Coordinate },
    SetStatusText(String),
    SetPartnerName(String),
    FitBounds { bounds: Bounds, padding_px: u32 },
    /// Raise the zoom to street level if it is currently wider.
    EnsureStreetZoom,
    StartPolling { interval_ms: u32 },
}

/// Marker identity within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    Restaurant,
    Customer,
    Partner,
}

impl MarkerKind {
    /// Popup caption shown when the marker is clicked.
    #[must_use]
    pub fn popup_text(self) -> &'static str {
        match self {
            Self::Restaurant => "Restaurant",
            Self::Customer => "You are here",
            Self::Partner => "Delivery Partner",
        }
    }
}

/// Pure state for one live order-tracking view.
///
/// Separated from the map host so the marker and view rules can be tested
/// without WASM/browser dependencies. The host owns the real map, markers
/// and poll timer; this core owns every decision about them and hands the
/// host a [`MapCommand`] batch per operation.
#[derive(Debug, Clone)]
pub struct SessionCore {
    order_id: String,
    status_text: String,
    partner_name: String,
    restaurant: Option<Coordinate>,
    customer: Option<Coordinate>,
    partner_marker: Option<Coordinate>,
    view_center: Coordinate,
    view_zoom: f64,
}

impl SessionCore {
    #[must_use]
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            status_text: String::new(),
            partner_name: UNASSIGNED_PARTNER.to_owned(),
            restaurant: None,
            customer: None,
            partner_marker: None,
            view_center: REGION_CENTER,
            view_zoom: REGION_ZOOM,
        }
    }

    // --- Accessors ---

    #[must_use]
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    /// Raw backend status string from the latest snapshot.
    #[must_use]
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    #[must_use]
    pub fn partner_name(&self) -> &str {
        &self.partner_name
    }

    /// Where the partner marker currently sits, once placed.
    #[must_use]
    pub fn partner_marker(&self) -> Option<Coordinate> {
        self.partner_marker
    }

    #[must_use]
    pub fn restaurant(&self) -> Option<Coordinate> {
        self.restaurant
    }

    #[must_use]
    pub fn customer(&self) -> Option<Coordinate> {
        self.customer
    }

    #[must_use]
    pub fn view_center(&self) -> Coordinate {
        self.view_center
    }

    #[must_use]
    pub fn view_zoom(&self) -> f64 {
        self.view_zoom
    }

    /// Whether any real location signal is known to the session.
    fn has_anchor(&self) -> bool {
        self.customer.is_some() || self.restaurant.is_some()
    }

    // --- Operations ---

    /// Bring the session up for its first snapshot.
    ///
    /// Emits, in order: teardown of any previous map and timer, map
    /// creation at the best-known center, marker creation (restaurant and
    /// customer when known, partner always), the first snapshot
    /// application, the initial bounds fit, and the poll start.
    pub fn initialize(&mut self, snapshot: &TrackingSnapshot, customer: Option<Coordinate>) -> Vec<MapCommand> {
        let mut commands = vec![MapCommand::ResetSession];

        self.restaurant = snapshot.restaurant_position();
        self.customer = customer;

        let anchor = self.customer.or(self.restaurant);
        (self.view_center, self.view_zoom) = match anchor {
            Some(at) => (at, STREET_ZOOM),
            None => (REGION_CENTER, REGION_ZOOM),
        };
        commands.push(MapCommand::CreateMap {
            center: self.view_center,
            zoom: self.view_zoom,
        });

        if let Some(at) = self.restaurant {
            commands.push(MapCommand::AddMarker { kind: MarkerKind::Restaurant, at });
        }
        if let Some(at) = self.customer {
            commands.push(MapCommand::AddMarker { kind: MarkerKind::Customer, at });
        }
        // The partner marker always exists: at the restaurant when known,
        // else at whatever center the map opened on.
        let partner_at = self.restaurant.unwrap_or(self.view_center);
        self.partner_marker = Some(partner_at);
        commands.push(MapCommand::AddMarker { kind: MarkerKind::Partner, at: partner_at });

        commands.extend(self.apply_snapshot(snapshot));

        let tracked_partner = (snapshot.status() == Some(OrderStatus::PickedUp))
            .then(|| snapshot.partner_position())
            .flatten();
        commands.extend(self.fit_view(&[self.customer, tracked_partner, self.restaurant]));

        commands.push(MapCommand::StartPolling {
            interval_ms: POLL_INTERVAL_MS,
        });
        commands
    }

    /// Apply one fetched snapshot, initial or polled.
    ///
    /// The status text and partner name always refresh. The partner marker
    /// moves to the snapshot's partner position only when that position is
    /// present and the status is picked-up; any other status sends it back
    /// to the restaurant when known, or leaves it untouched. A move to a
    /// tracked position re-fits the view over the customer (when known)
    /// and the new partner position.
    pub fn apply_snapshot(&mut self, snapshot: &TrackingSnapshot) -> Vec<MapCommand> {
        let mut commands = Vec::new();

        self.status_text.clone_from(&snapshot.order_status);
        snapshot.partner_label().clone_into(&mut self.partner_name);
        commands.push(MapCommand::SetStatusText(self.status_text.clone()));
        commands.push(MapCommand::SetPartnerName(self.partner_name.clone()));

        // An absent restaurant never clobbers one learned earlier.
        if let Some(at) = snapshot.restaurant_position() {
            self.restaurant = Some(at);
        }

        let picked_up = snapshot.status() == Some(OrderStatus::PickedUp);
        match snapshot.partner_position() {
            Some(at) if picked_up => {
                self.partner_marker = Some(at);
                commands.push(MapCommand::MoveMarker { kind: MarkerKind::Partner, to: at });
                commands.extend(self.fit_view(&[self.customer, Some(at)]));
            }
            _ => {
                if let Some(home) = self.restaurant {
                    self.partner_marker = Some(home);
                    commands.push(MapCommand::MoveMarker { kind: MarkerKind::Partner, to: home });
                }
            }
        }
        commands
    }

    /// Fit the view over every present coordinate among `candidates`.
    ///
    /// With nothing present, raise the zoom to street level instead, but
    /// only when some real location signal exists and the view is still at
    /// a wider zoom.
    pub fn fit_view(&mut self, candidates: &[Option<Coordinate>]) -> Vec<MapCommand> {
        let present: Vec<Coordinate> = candidates.iter().copied().flatten().collect();
        match Bounds::over(&present) {
            Some(bounds) => {
                self.view_center = bounds.center();
                vec![MapCommand::FitBounds {
                    bounds,
                    padding_px: FIT_PADDING_PX,
                }]
            }
            None if self.has_anchor() && self.view_zoom < STREET_ZOOM => {
                self.view_zoom = STREET_ZOOM;
                vec![MapCommand::EnsureStreetZoom]
            }
            None => Vec::new(),
        }
    }
}
