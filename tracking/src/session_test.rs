use std::collections::HashMap;

use super::*;

/// Minimal stand-in for a real map host: replays a command batch and
/// records the world it would produce. Live counts (not booleans) so a
/// leaked map or timer shows up as a count above one.
#[derive(Default)]
struct FakeHost {
    live_maps: u32,
    maps_created: u32,
    live_timers: u32,
    timers_started: u32,
    markers: HashMap<MarkerKind, Coordinate>,
    status_text: String,
    partner_name: String,
    last_fit: Option<(Bounds, u32)>,
    street_zoom_raises: u32,
}

impl FakeHost {
    fn replay(&mut self, commands: &[MapCommand]) {
        for command in commands {
            match command {
                MapCommand::ResetSession => {
                    self.live_timers = 0;
                    self.live_maps = 0;
                    self.markers.clear();
                }
                MapCommand::CreateMap { .. } => {
                    self.live_maps += 1;
                    self.maps_created += 1;
                }
                MapCommand::AddMarker { kind, at } => {
                    self.markers.insert(*kind, *at);
                }
                MapCommand::MoveMarker { kind, to } => {
                    if self.markers.contains_key(kind) {
                        self.markers.insert(*kind, *to);
                    }
                }
                MapCommand::SetStatusText(text) => text.clone_into(&mut self.status_text),
                MapCommand::SetPartnerName(name) => name.clone_into(&mut self.partner_name),
                MapCommand::FitBounds { bounds, padding_px } => {
                    self.last_fit = Some((*bounds, *padding_px));
                }
                MapCommand::EnsureStreetZoom => self.street_zoom_raises += 1,
                MapCommand::StartPolling { .. } => {
                    self.live_timers += 1;
                    self.timers_started += 1;
                }
            }
        }
    }
}

const RESTAURANT: Coordinate = Coordinate { lat: 12.9, lon: 77.6 };
const CUSTOMER: Coordinate = Coordinate { lat: 12.95, lon: 77.65 };
const PARTNER: Coordinate = Coordinate { lat: 12.93, lon: 77.62 };

fn bare_snapshot(status: &str) -> TrackingSnapshot {
    TrackingSnapshot {
        order_id: 42,
        order_status: status.to_owned(),
        partner_name: None,
        latitude: None,
        longitude: None,
        restaurant_latitude: None,
        restaurant_longitude: None,
    }
}

fn snapshot_at_restaurant(status: &str) -> TrackingSnapshot {
    TrackingSnapshot {
        restaurant_latitude: Some(RESTAURANT.lat),
        restaurant_longitude: Some(RESTAURANT.lon),
        ..bare_snapshot(status)
    }
}

fn snapshot_with_partner(status: &str, partner: Coordinate) -> TrackingSnapshot {
    TrackingSnapshot {
        partner_name: Some("Raj".to_owned()),
        latitude: Some(partner.lat),
        longitude: Some(partner.lon),
        ..snapshot_at_restaurant(status)
    }
}

// ===== Initialization =====

#[test]
fn init_emits_teardown_first() {
    let mut core = SessionCore::new("42");
    let commands = core.initialize(&snapshot_at_restaurant("PLACED"), None);
    assert_eq!(commands.first(), Some(&MapCommand::ResetSession));
}

#[test]
fn init_ends_by_starting_the_poll() {
    let mut core = SessionCore::new("42");
    let commands = core.initialize(&snapshot_at_restaurant("PLACED"), None);
    assert_eq!(commands.last(), Some(&MapCommand::StartPolling { interval_ms: 10_000 }));
}

#[test]
fn init_prefers_customer_center_at_street_zoom() {
    let mut core = SessionCore::new("42");
    let commands = core.initialize(&snapshot_at_restaurant("PLACED"), Some(CUSTOMER));
    assert!(commands.contains(&MapCommand::CreateMap { center: CUSTOMER, zoom: STREET_ZOOM }));
}

#[test]
fn init_falls_back_to_restaurant_center() {
    let mut core = SessionCore::new("42");
    let commands = core.initialize(&snapshot_at_restaurant("PLACED"), None);
    assert!(commands.contains(&MapCommand::CreateMap { center: RESTAURANT, zoom: STREET_ZOOM }));
}

#[test]
fn init_without_signals_uses_region_default() {
    let mut core = SessionCore::new("42");
    let commands = core.initialize(&bare_snapshot("PLACED"), None);
    assert!(commands.contains(&MapCommand::CreateMap { center: REGION_CENTER, zoom: REGION_ZOOM }));
}

#[test]
fn init_skips_restaurant_marker_when_unknown() {
    let mut core = SessionCore::new("42");
    let mut host = FakeHost::default();
    host.replay(&core.initialize(&bare_snapshot("PLACED"), None));
    assert!(!host.markers.contains_key(&MarkerKind::Restaurant));
}

#[test]
fn init_skips_customer_marker_without_coordinate() {
    let mut core = SessionCore::new("42");
    let mut host = FakeHost::default();
    host.replay(&core.initialize(&snapshot_at_restaurant("PLACED"), None));
    assert!(!host.markers.contains_key(&MarkerKind::Customer));
}

#[test]
fn init_always_places_the_partner_marker() {
    let mut core = SessionCore::new("42");
    let mut host = FakeHost::default();
    host.replay(&core.initialize(&bare_snapshot("PLACED"), None));
    assert_eq!(host.markers.get(&MarkerKind::Partner), Some(&REGION_CENTER));
}

#[test]
fn partner_marker_starts_at_restaurant_when_known() {
    let mut core = SessionCore::new("42");
    let mut host = FakeHost::default();
    host.replay(&core.initialize(&snapshot_at_restaurant("PLACED"), Some(CUSTOMER)));
    assert_eq!(host.markers.get(&MarkerKind::Partner), Some(&RESTAURANT));
}

#[test]
fn geolocation_failure_still_builds_a_session() {
    // Viewer position denied: the session comes up anyway, anchored on the
    // restaurant.
    let mut core = SessionCore::new("42");
    let mut host = FakeHost::default();
    host.replay(&core.initialize(&snapshot_at_restaurant("PREPARING"), None));
    assert_eq!(host.live_maps, 1);
    assert_eq!(host.live_timers, 1);
}

#[test]
fn double_initialize_keeps_one_map_and_one_timer() {
    let mut core = SessionCore::new("42");
    let mut host = FakeHost::default();
    host.replay(&core.initialize(&snapshot_at_restaurant("PLACED"), Some(CUSTOMER)));
    host.replay(&core.initialize(&snapshot_at_restaurant("PLACED"), Some(CUSTOMER)));
    assert_eq!(host.live_maps, 1);
    assert_eq!(host.live_timers, 1);
    assert_eq!(host.maps_created, 2);
    assert_eq!(host.timers_started, 2);
    assert_eq!(host.markers.len(), 3);
}

#[test]
fn init_with_tracked_partner_fits_over_all_three() {
    let mut core = SessionCore::new("42");
    let mut host = FakeHost::default();
    host.replay(&core.initialize(&snapshot_with_partner("PICKED UP", PARTNER), Some(CUSTOMER)));
    let (bounds, _) = host.last_fit.unwrap();
    assert_eq!(bounds, Bounds::over(&[CUSTOMER, PARTNER, RESTAURANT]).unwrap());
}

// ===== The out-for-delivery zero-sentinel scenario =====

#[test]
fn out_for_delivery_scenario_places_every_marker() {
    let snapshot = TrackingSnapshot {
        order_id: 42,
        order_status: "OUT FOR DELIVERY".to_owned(),
        partner_name: Some("Raj".to_owned()),
        latitude: Some(0.0),
        longitude: Some(0.0),
        restaurant_latitude: Some(12.9),
        restaurant_longitude: Some(77.6),
    };
    let mut core = SessionCore::new("42");
    let mut host = FakeHost::default();
    host.replay(&core.initialize(&snapshot, Some(CUSTOMER)));

    assert_eq!(host.markers.get(&MarkerKind::Restaurant), Some(&RESTAURANT));
    assert_eq!(host.markers.get(&MarkerKind::Customer), Some(&CUSTOMER));
    // Partner location is the zero sentinel and the status is not
    // picked-up, so the partner marker sits at the restaurant.
    assert_eq!(host.markers.get(&MarkerKind::Partner), Some(&RESTAURANT));

    let (bounds, padding) = host.last_fit.unwrap();
    assert_eq!(bounds, Bounds::over(&[CUSTOMER, RESTAURANT]).unwrap());
    assert_eq!(padding, FIT_PADDING_PX);
}

#[test]
fn partner_marker_never_lands_on_the_origin() {
    let mut core = SessionCore::new("42");
    let mut host = FakeHost::default();
    host.replay(&core.initialize(&snapshot_at_restaurant("OUT FOR DELIVERY"), None));
    host.replay(&core.apply_snapshot(&TrackingSnapshot {
        latitude: Some(0.0),
        longitude: Some(0.0),
        ..snapshot_at_restaurant("OUT FOR DELIVERY")
    }));
    let partner = host.markers[&MarkerKind::Partner];
    assert_ne!(partner, Coordinate::new(0.0, 0.0));
    assert_eq!(partner, RESTAURANT);
}

// ===== Snapshot application =====

#[test]
fn apply_refreshes_status_text_and_partner_name() {
    let mut core = SessionCore::new("42");
    let mut host = FakeHost::default();
    host.replay(&core.initialize(&snapshot_at_restaurant("PLACED"), None));
    host.replay(&core.apply_snapshot(&snapshot_with_partner("PREPARING", PARTNER)));
    assert_eq!(host.status_text, "PREPARING");
    assert_eq!(host.partner_name, "Raj");
}

#[test]
fn apply_defaults_partner_name_when_unassigned() {
    let mut core = SessionCore::new("42");
    let mut host = FakeHost::default();
    host.replay(&core.initialize(&snapshot_at_restaurant("PLACED"), None));
    assert_eq!(host.partner_name, "Not Assigned Yet");
}

#[test]
fn picked_up_moves_partner_to_tracked_position() {
    let mut core = SessionCore::new("42");
    let mut host = FakeHost::default();
    host.replay(&core.initialize(&snapshot_at_restaurant("OUT FOR DELIVERY"), Some(CUSTOMER)));
    host.replay(&core.apply_snapshot(&snapshot_with_partner("PICKED UP", PARTNER)));
    assert_eq!(host.markers.get(&MarkerKind::Partner), Some(&PARTNER));
}

#[test]
fn picked_up_move_refits_over_customer_and_partner() {
    let mut core = SessionCore::new("42");
    let mut host = FakeHost::default();
    host.replay(&core.initialize(&snapshot_at_restaurant("OUT FOR DELIVERY"), Some(CUSTOMER)));
    host.replay(&core.apply_snapshot(&snapshot_with_partner("PICKED UP", PARTNER)));
    let (bounds, padding) = host.last_fit.unwrap();
    assert_eq!(bounds, Bounds::over(&[CUSTOMER, PARTNER]).unwrap());
    assert_eq!(padding, FIT_PADDING_PX);
}

#[test]
fn picked_up_without_position_falls_back_to_restaurant() {
    let mut core = SessionCore::new("42");
    let mut host = FakeHost::default();
    host.replay(&core.initialize(&snapshot_at_restaurant("OUT FOR DELIVERY"), None));
    host.replay(&core.apply_snapshot(&snapshot_at_restaurant("PICKED UP")));
    assert_eq!(host.markers.get(&MarkerKind::Partner), Some(&RESTAURANT));
}

#[test]
fn non_picked_up_status_returns_partner_to_restaurant() {
    let mut core = SessionCore::new("42");
    let mut host = FakeHost::default();
    host.replay(&core.initialize(&snapshot_at_restaurant("OUT FOR DELIVERY"), None));
    host.replay(&core.apply_snapshot(&snapshot_with_partner("PICKED UP", PARTNER)));
    // Status regresses while the snapshot still carries a partner position.
    host.replay(&core.apply_snapshot(&snapshot_with_partner("PREPARING", PARTNER)));
    assert_eq!(host.markers.get(&MarkerKind::Partner), Some(&RESTAURANT));
}

#[test]
fn partner_stays_put_when_restaurant_unknown() {
    let mut core = SessionCore::new("42");
    let mut host = FakeHost::default();
    host.replay(&core.initialize(&bare_snapshot("PLACED"), Some(CUSTOMER)));
    let commands = core.apply_snapshot(&TrackingSnapshot {
        latitude: Some(PARTNER.lat),
        longitude: Some(PARTNER.lon),
        ..bare_snapshot("PREPARING")
    });
    assert!(!commands.iter().any(|c| matches!(c, MapCommand::MoveMarker { .. })));
    host.replay(&commands);
    assert_eq!(host.markers.get(&MarkerKind::Partner), Some(&CUSTOMER));
}

#[test]
fn unknown_status_behaves_as_not_picked_up() {
    let mut core = SessionCore::new("42");
    let mut host = FakeHost::default();
    host.replay(&core.initialize(&snapshot_at_restaurant("OUT FOR DELIVERY"), None));
    host.replay(&core.apply_snapshot(&snapshot_with_partner("MISLAID", PARTNER)));
    assert_eq!(host.markers.get(&MarkerKind::Partner), Some(&RESTAURANT));
}

#[test]
fn late_restaurant_updates_the_fallback_target() {
    let mut core = SessionCore::new("42");
    let mut host = FakeHost::default();
    host.replay(&core.initialize(&bare_snapshot("PLACED"), None));
    host.replay(&core.apply_snapshot(&snapshot_at_restaurant("PREPARING")));
    assert_eq!(host.markers.get(&MarkerKind::Partner), Some(&RESTAURANT));
}

#[test]
fn apply_never_creates_markers() {
    let mut core = SessionCore::new("42");
    core.initialize(&snapshot_at_restaurant("PLACED"), None);
    let commands = core.apply_snapshot(&snapshot_with_partner("PICKED UP", PARTNER));
    assert!(!commands.iter().any(|c| matches!(c, MapCommand::AddMarker { .. })));
}

// ===== View fitting =====

#[test]
fn fit_view_skips_absent_candidates() {
    let mut core = SessionCore::new("42");
    core.initialize(&snapshot_at_restaurant("PLACED"), None);
    let commands = core.fit_view(&[None, Some(CUSTOMER), None, Some(RESTAURANT)]);
    assert_eq!(
        commands,
        vec![MapCommand::FitBounds {
            bounds: Bounds::over(&[CUSTOMER, RESTAURANT]).unwrap(),
            padding_px: FIT_PADDING_PX,
        }]
    );
}

#[test]
fn fit_view_moves_the_view_center() {
    let mut core = SessionCore::new("42");
    core.initialize(&snapshot_at_restaurant("PLACED"), None);
    core.fit_view(&[Some(CUSTOMER), Some(RESTAURANT)]);
    let bounds = Bounds::over(&[CUSTOMER, RESTAURANT]).unwrap();
    assert_eq!(core.view_center(), bounds.center());
}

#[test]
fn fit_view_with_nothing_and_no_signals_is_silent() {
    let mut core = SessionCore::new("42");
    core.initialize(&bare_snapshot("PLACED"), None);
    assert!(core.fit_view(&[None, None]).is_empty());
    assert!((core.view_zoom() - REGION_ZOOM).abs() < f64::EPSILON);
}

#[test]
fn fit_view_raises_zoom_once_a_signal_exists() {
    let mut core = SessionCore::new("42");
    core.initialize(&bare_snapshot("PLACED"), None);
    // A later poll reveals the restaurant; the view is still at the wide
    // regional zoom.
    core.apply_snapshot(&snapshot_at_restaurant("PREPARING"));
    let commands = core.fit_view(&[]);
    assert_eq!(commands, vec![MapCommand::EnsureStreetZoom]);
    assert!((core.view_zoom() - STREET_ZOOM).abs() < f64::EPSILON);
}

// ===== Marker captions =====

#[test]
fn popup_texts_are_the_ui_captions() {
    assert_eq!(MarkerKind::Restaurant.popup_text(), "Restaurant");
    assert_eq!(MarkerKind::Customer.popup_text(), "You are here");
    assert_eq!(MarkerKind::Partner.popup_text(), "Delivery Partner");
}
