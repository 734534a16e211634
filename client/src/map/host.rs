//! Replays session command streams onto live Leaflet objects.
//!
//! DESIGN
//! ======
//! [`LeafletHost`] is the browser twin of the fake host the `tracking`
//! tests replay against: same command stream, real side effects. It owns
//! the map and marker handles; the poll timer and the status/partner text
//! belong to the page, so replay reports timer commands back through
//! [`ReplayOutcome`] and skips the text commands entirely.

use std::collections::HashMap;

use wasm_bindgen::JsValue;

use tracking::consts::STREET_ZOOM;
use tracking::geo::{Bounds, Coordinate};
use tracking::session::{MapCommand, MarkerKind};

use super::leaflet::{self, Icon, LeafletMap, Marker};

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

const CUSTOMER_ICON_URL: &str = "https://cdn-icons-png.flaticon.com/512/684/684908.png";
const PARTNER_ICON_URL: &str = "https://cdn-icons-png.flaticon.com/512/3004/3004311.png";
const ICON_SIZE_PX: f64 = 32.0;

/// Timer work a replay asks of its caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayOutcome {
    /// A `ResetSession` ran; any live poll interval must be cancelled.
    pub reset: bool,
    /// A `StartPolling` ran, carrying its interval.
    pub start_polling_ms: Option<u32>,
}

/// Owns the live Leaflet objects for one tracking session.
pub struct LeafletHost {
    container_id: String,
    map: Option<LeafletMap>,
    markers: HashMap<MarkerKind, Marker>,
}

impl LeafletHost {
    #[must_use]
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            map: None,
            markers: HashMap::new(),
        }
    }

    /// Replay a command batch in order.
    pub fn apply(&mut self, commands: &[MapCommand]) -> ReplayOutcome {
        let mut outcome = ReplayOutcome::default();
        for command in commands {
            match command {
                MapCommand::ResetSession => {
                    outcome.reset = true;
                    self.destroy();
                }
                MapCommand::CreateMap { center, zoom } => self.create_map(*center, *zoom),
                MapCommand::AddMarker { kind, at } => self.add_marker(*kind, *at),
                MapCommand::MoveMarker { kind, to } => {
                    if let Some(marker) = self.markers.get(kind) {
                        marker.set_lat_lng(&lat_lng(*to));
                    }
                }
                // Status and partner lines are reactive signals on the
                // page, not DOM the host owns.
                MapCommand::SetStatusText(_) | MapCommand::SetPartnerName(_) => {}
                MapCommand::FitBounds { bounds, padding_px } => {
                    if let Some(map) = &self.map {
                        map.fit_bounds(&bounds_corners(*bounds), &fit_options(*padding_px));
                    }
                }
                MapCommand::EnsureStreetZoom => {
                    // The live map is authoritative here: if the viewer
                    // already zoomed in by hand, leave them alone.
                    if let Some(map) = &self.map {
                        if map.get_zoom() < STREET_ZOOM {
                            map.set_zoom(STREET_ZOOM);
                        }
                    }
                }
                MapCommand::StartPolling { interval_ms } => {
                    outcome.start_polling_ms = Some(*interval_ms);
                }
            }
        }
        outcome
    }

    /// Remove the map and forget every marker. Safe when nothing exists.
    pub fn destroy(&mut self) {
        self.markers.clear();
        if let Some(map) = self.map.take() {
            map.remove();
        }
    }

    fn create_map(&mut self, center: Coordinate, zoom: f64) {
        self.destroy();
        let map = leaflet::new_map(&self.container_id);
        map.set_view(&lat_lng(center), zoom);
        leaflet::new_tile_layer(TILE_URL, &tile_options()).add_to(&map);
        self.map = Some(map);
    }

    fn add_marker(&mut self, kind: MarkerKind, at: Coordinate) {
        let Some(map) = &self.map else {
            return;
        };
        let marker = leaflet::new_marker(&lat_lng(at), &marker_options(kind));
        marker.add_to(map);
        marker.bind_popup(kind.popup_text());
        self.markers.insert(kind, marker);
    }
}

impl Drop for LeafletHost {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn lat_lng(coordinate: Coordinate) -> JsValue {
    js_sys::Array::of2(&coordinate.lat.into(), &coordinate.lon.into()).into()
}

fn bounds_corners(bounds: Bounds) -> JsValue {
    js_sys::Array::of2(&lat_lng(bounds.south_west()), &lat_lng(bounds.north_east())).into()
}

fn fit_options(padding_px: u32) -> JsValue {
    let padding = f64::from(padding_px);
    let pair = js_sys::Array::of2(&padding.into(), &padding.into());
    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&options, &"padding".into(), &pair);
    options.into()
}

fn tile_options() -> JsValue {
    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&options, &"attribution".into(), &TILE_ATTRIBUTION.into());
    options.into()
}

fn marker_options(kind: MarkerKind) -> JsValue {
    let options = js_sys::Object::new();
    if let Some(icon) = marker_icon(kind) {
        let _ = js_sys::Reflect::set(&options, &"icon".into(), icon.as_ref());
    }
    options.into()
}

/// Custom icons for the customer and partner; the restaurant keeps
/// Leaflet's stock pin.
fn marker_icon(kind: MarkerKind) -> Option<Icon> {
    let url = match kind {
        MarkerKind::Restaurant => return None,
        MarkerKind::Customer => CUSTOMER_ICON_URL,
        MarkerKind::Partner => PARTNER_ICON_URL,
    };
    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&options, &"iconUrl".into(), &url.into());
    let size = js_sys::Array::of2(&ICON_SIZE_PX.into(), &ICON_SIZE_PX.into());
    let _ = js_sys::Reflect::set(&options, &"iconSize".into(), &size);
    let anchor = js_sys::Array::of2(&(ICON_SIZE_PX / 2.0).into(), &ICON_SIZE_PX.into());
    let _ = js_sys::Reflect::set(&options, &"iconAnchor".into(), &anchor);
    Some(leaflet::new_icon(&options.into()))
}
