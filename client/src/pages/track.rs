//! Live order-tracking page.
//!
//! DESIGN
//! ======
//! The page owns the glue around the session core: it reads the order id
//! from the route, asks for the viewer's position once, fetches the first
//! snapshot and replays the resulting command stream onto the Leaflet
//! host. The poll interval and the session slot both live here, and a
//! generation counter ties every async response to the init pass that
//! started it, so a response landing after a route change or teardown is
//! simply dropped. Only the timer's owner cancels the timer; a failed poll
//! logs and waits for the next tick.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use tracking::consts::UNASSIGNED_PARTNER;

#[cfg(feature = "csr")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use gloo_timers::callback::Interval;

#[cfg(feature = "csr")]
use tracking::error::SessionInitError;
#[cfg(feature = "csr")]
use tracking::session::SessionCore;

#[cfg(feature = "csr")]
use crate::map::host::LeafletHost;
#[cfg(feature = "csr")]
use crate::util::toast::{self, ToastKind};

/// DOM id of the map container div.
const MAP_CONTAINER_ID: &str = "live-map";

/// Status line shown when the first snapshot cannot be fetched.
#[cfg(feature = "csr")]
const LOAD_ERROR_STATUS: &str = "Error loading map";

/// Live tracking screen for one order.
#[component]
pub fn TrackOrderPage() -> impl IntoView {
    let params = use_params_map();
    let order_id = move || params.read().get("id").unwrap_or_default();

    let status_text = RwSignal::new("Loading...".to_owned());
    let partner_name = RwSignal::new(UNASSIGNED_PARTNER.to_owned());
    let load_error = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    {
        let session: Rc<RefCell<Option<LiveSession>>> = Rc::new(RefCell::new(None));
        let poll: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
        let generation = Rc::new(Cell::new(0_u64));

        {
            let session = Rc::clone(&session);
            let poll = Rc::clone(&poll);
            let generation = Rc::clone(&generation);
            Effect::new(move || {
                let order_id = order_id();
                if order_id.is_empty() {
                    return;
                }
                // Tear down synchronously before anything async begins, so
                // a route change never leaves two sessions alive.
                poll.borrow_mut().take();
                session.borrow_mut().take();
                let my_generation = generation.get().wrapping_add(1);
                generation.set(my_generation);
                status_text.set("Loading...".to_owned());
                partner_name.set(UNASSIGNED_PARTNER.to_owned());
                load_error.set(None);

                let start = SessionStart {
                    order_id,
                    my_generation,
                    generation: Rc::clone(&generation),
                    session: Rc::clone(&session),
                    poll: Rc::clone(&poll),
                    status_text,
                    partner_name,
                    load_error,
                };
                leptos::task::spawn_local(start_session(start));
            });
        }

        on_cleanup(move || {
            poll.borrow_mut().take();
            session.borrow_mut().take();
        });
    }

    view! {
        <section class="track-page">
            <h1>"Track Order #" {order_id}</h1>
            <div class="track-status">
                <p class="track-status__line">
                    "Status: " <strong>{move || status_text.get()}</strong>
                </p>
                <p class="track-status__line">
                    "Delivery Partner: " {move || partner_name.get()}
                </p>
            </div>
            <Show when=move || load_error.get().is_some()>
                <div class="track-error">
                    <p>{move || load_error.get().unwrap_or_default()}</p>
                    <p>"Check the order id and try again."</p>
                </div>
            </Show>
            <div id=MAP_CONTAINER_ID class="track-map"></div>
        </section>
    }
}

/// The session core plus the Leaflet objects it drives. One per init pass.
#[cfg(feature = "csr")]
struct LiveSession {
    core: SessionCore,
    host: LeafletHost,
}

/// Everything one session start needs; bundled so the spawned future owns
/// a single argument.
#[cfg(feature = "csr")]
struct SessionStart {
    order_id: String,
    my_generation: u64,
    generation: Rc<Cell<u64>>,
    session: Rc<RefCell<Option<LiveSession>>>,
    poll: Rc<RefCell<Option<Interval>>>,
    status_text: RwSignal<String>,
    partner_name: RwSignal<String>,
    load_error: RwSignal<Option<String>>,
}

#[cfg(feature = "csr")]
async fn start_session(args: SessionStart) {
    // A denied or failed fix is not fatal: the map opens anyway and the
    // viewer marker is simply absent.
    let viewer = match crate::util::geolocate::current_position().await {
        Ok(fix) => Some(fix),
        Err(err) => {
            toast::notify(ToastKind::Error, &err.to_string());
            None
        }
    };
    if args.generation.get() != args.my_generation {
        return;
    }

    let snapshot = match crate::net::api::fetch_tracking(&args.order_id).await {
        Ok(snapshot) => snapshot,
        Err(err) => {
            if args.generation.get() == args.my_generation {
                args.status_text.set(LOAD_ERROR_STATUS.to_owned());
                args.load_error.set(Some(err.message().to_owned()));
                toast::notify(ToastKind::Error, err.message());
            }
            return;
        }
    };
    if args.generation.get() != args.my_generation {
        return;
    }

    if !container_exists() {
        log::warn!("{}", SessionInitError::ContainerMissing);
        return;
    }

    let mut core = SessionCore::new(args.order_id.clone());
    let commands = core.initialize(&snapshot, viewer);
    let mut host = LeafletHost::new(MAP_CONTAINER_ID);
    let outcome = host.apply(&commands);
    if outcome.reset {
        args.poll.borrow_mut().take();
    }
    args.status_text.set(core.status_text().to_owned());
    args.partner_name.set(core.partner_name().to_owned());
    *args.session.borrow_mut() = Some(LiveSession { core, host });

    if let Some(interval_ms) = outcome.start_polling_ms {
        let tick = {
            let order_id = args.order_id.clone();
            let my_generation = args.my_generation;
            let generation = Rc::clone(&args.generation);
            let session = Rc::clone(&args.session);
            let status_text = args.status_text;
            let partner_name = args.partner_name;
            Interval::new(interval_ms, move || {
                leptos::task::spawn_local(poll_once(
                    order_id.clone(),
                    my_generation,
                    Rc::clone(&generation),
                    Rc::clone(&session),
                    status_text,
                    partner_name,
                ));
            })
        };
        *args.poll.borrow_mut() = Some(tick);
    }
}

#[cfg(feature = "csr")]
async fn poll_once(
    order_id: String,
    my_generation: u64,
    generation: Rc<Cell<u64>>,
    session: Rc<RefCell<Option<LiveSession>>>,
    status_text: RwSignal<String>,
    partner_name: RwSignal<String>,
) {
    let snapshot = match crate::net::api::fetch_tracking(&order_id).await {
        Ok(snapshot) => snapshot,
        Err(err) => {
            // Poll failures stay quiet; the next tick retries anyway.
            log::warn!("tracking poll failed: {}", err.message());
            return;
        }
    };
    if generation.get() != my_generation {
        return;
    }

    let lines = {
        let mut guard = session.borrow_mut();
        let Some(live) = guard.as_mut() else {
            return;
        };
        let commands = live.core.apply_snapshot(&snapshot);
        live.host.apply(&commands);
        (
            live.core.status_text().to_owned(),
            live.core.partner_name().to_owned(),
        )
    };
    status_text.set(lines.0);
    partner_name.set(lines.1);
}

#[cfg(feature = "csr")]
fn container_exists() -> bool {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(MAP_CONTAINER_ID))
        .is_some()
}
