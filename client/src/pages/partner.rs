//! Delivery console page for partners.
//!
//! DESIGN
//! ======
//! Three live concerns meet here. The assignment list refreshes on a 15
//! second interval, a continuous GPS watch reports the partner's position
//! to the backend on every fix, and the pickup/delivered transitions come
//! back through the card callback as an immediate refresh. The watch and
//! the interval are owned by slots that `on_cleanup` drains, so leaving
//! the page stops both.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::assignment_card::AssignmentCard;
use crate::net::types::{Assignment, PartnerProfile};
use crate::state::session_user::{SessionUser, SessionUserState};

#[cfg(feature = "csr")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use gloo_timers::callback::Interval;

#[cfg(feature = "csr")]
use tracking::consts::ASSIGNMENT_POLL_INTERVAL_MS;
#[cfg(feature = "csr")]
use tracking::error::GeolocationError;
#[cfg(feature = "csr")]
use tracking::geo::Coordinate;

#[cfg(feature = "csr")]
use crate::net::types::LocationUpdate;
#[cfg(feature = "csr")]
use crate::util::geolocate::GeoWatch;
#[cfg(feature = "csr")]
use crate::util::toast::{self, ToastKind};

/// Where live location reporting currently stands.
#[derive(Clone, Debug, PartialEq)]
pub enum GpsStatus {
    /// The watch has been requested but no fix has arrived yet.
    Starting,
    /// Fixes are flowing to the backend.
    Reporting,
    /// The last attempt failed; the message names the failure kind.
    Failed(String),
}

/// Assignment console for the signed-in delivery partner.
///
/// Redirects everyone else to the home route once the session user has
/// resolved.
#[component]
pub fn PartnerConsolePage() -> impl IntoView {
    let session_user = expect_context::<RwSignal<SessionUserState>>();
    let navigate = use_navigate();

    let profile = RwSignal::new(None::<PartnerProfile>);
    let assignments = RwSignal::new(Vec::<Assignment>::new());
    let list_error = RwSignal::new(false);
    let gps_status = RwSignal::new(GpsStatus::Starting);

    // Redirect anyone who is not a delivery partner.
    Effect::new(move || {
        let state = session_user.get();
        if !state.loading
            && !state
                .user
                .as_ref()
                .is_some_and(SessionUser::is_delivery_partner)
        {
            navigate("/", NavigateOptions::default());
        }
    });

    #[cfg(feature = "csr")]
    {
        let watch: Rc<RefCell<Option<GeoWatch>>> = Rc::new(RefCell::new(None));
        let poll: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
        let started = Rc::new(Cell::new(false));

        {
            let watch = Rc::clone(&watch);
            let poll = Rc::clone(&poll);
            let started = Rc::clone(&started);
            Effect::new(move || {
                let Some(user) = session_user.get().user else {
                    return;
                };
                if !user.is_delivery_partner() || started.get() {
                    return;
                }
                started.set(true);

                let watch = Rc::clone(&watch);
                let poll = Rc::clone(&poll);
                leptos::task::spawn_local(async move {
                    let Some(me) = crate::net::api::fetch_partner_profile(user.id).await
                    else {
                        toast::notify(ToastKind::Error, "Couldn't load your delivery profile.");
                        return;
                    };
                    let partner_id = me.id;
                    profile.set(Some(me));

                    refresh_assignments(partner_id, assignments, list_error).await;
                    start_location_watch(partner_id, &watch, gps_status);

                    let tick = Interval::new(ASSIGNMENT_POLL_INTERVAL_MS, move || {
                        leptos::task::spawn_local(refresh_assignments(
                            partner_id,
                            assignments,
                            list_error,
                        ));
                    });
                    *poll.borrow_mut() = Some(tick);
                });
            });
        }

        on_cleanup(move || {
            poll.borrow_mut().take();
            watch.borrow_mut().take();
        });
    }

    let on_changed = Callback::new(move |()| {
        #[cfg(feature = "csr")]
        {
            if let Some(me) = profile.get_untracked() {
                leptos::task::spawn_local(refresh_assignments(me.id, assignments, list_error));
            }
        }
    });

    let welcome = move || {
        session_user
            .get()
            .user
            .map(|user| format!("Welcome, {}!", user.display_name()))
            .unwrap_or_default()
    };
    let banner = move || match gps_status.get() {
        GpsStatus::Starting => ("gps-banner", "Starting location reporting...".to_owned()),
        GpsStatus::Reporting => ("gps-banner", "Live location reporting is on.".to_owned()),
        GpsStatus::Failed(message) => ("gps-banner gps-banner--error", message),
    };
    let off_duty = move || {
        profile
            .get()
            .is_some_and(|me| me.available == Some(false))
    };

    view! {
        <section class="partner-page">
            <h1>"Delivery Console"</h1>
            <p>{welcome}</p>
            <div class=move || banner().0>{move || banner().1}</div>

            <Show when=off_duty>
                <p class="empty-state">
                    "You are marked unavailable; new orders will not be assigned."
                </p>
            </Show>
            <Show when=move || list_error.get()>
                <p class="empty-state">"Couldn't refresh assignments. Retrying shortly."</p>
            </Show>

            <h2>"My Assignments"</h2>
            <Show when=move || assignments.get().is_empty()>
                <p class="empty-state">"No assignments right now."</p>
            </Show>
            {move || {
                assignments
                    .get()
                    .into_iter()
                    .map(|assignment| {
                        view! { <AssignmentCard assignment=assignment on_changed=on_changed/> }
                    })
                    .collect::<Vec<_>>()
            }}
        </section>
    }
}

#[cfg(feature = "csr")]
async fn refresh_assignments(
    partner_id: u64,
    assignments: RwSignal<Vec<Assignment>>,
    list_error: RwSignal<bool>,
) {
    match crate::net::api::fetch_assignments(partner_id).await {
        Some(list) => {
            assignments.set(list);
            list_error.set(false);
        }
        // Keep the last good list on screen; the flag drives the notice.
        None => list_error.set(true),
    }
}

/// Register the continuous GPS watch and hook its callbacks to the status
/// banner and the location endpoint.
#[cfg(feature = "csr")]
fn start_location_watch(
    partner_id: u64,
    watch: &Rc<RefCell<Option<GeoWatch>>>,
    gps_status: RwSignal<GpsStatus>,
) {
    // Repeat failures of the same kind collapse into one notification.
    let last_failure: Rc<Cell<Option<GeolocationError>>> = Rc::new(Cell::new(None));
    let failure_memo = Rc::clone(&last_failure);

    let on_fix = move |fix: Coordinate| {
        last_failure.set(None);
        gps_status.set(GpsStatus::Reporting);
        leptos::task::spawn_local(crate::net::api::push_partner_location(
            partner_id,
            LocationUpdate {
                latitude: fix.lat,
                longitude: fix.lon,
            },
        ));
    };
    let on_failure = move |failure: GeolocationError| {
        gps_status.set(GpsStatus::Failed(failure.to_string()));
        if failure_memo.get() != Some(failure) {
            failure_memo.set(Some(failure));
            toast::notify(ToastKind::Error, &failure.to_string());
        }
    };

    match crate::util::geolocate::watch_position(on_fix, on_failure) {
        Ok(handle) => *watch.borrow_mut() = Some(handle),
        Err(failure) => {
            gps_status.set(GpsStatus::Failed(failure.to_string()));
            toast::notify(ToastKind::Error, &failure.to_string());
        }
    }
}
