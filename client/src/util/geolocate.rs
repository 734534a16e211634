//! Browser geolocation as async calls and watch handles.
//!
//! DESIGN
//! ======
//! The browser API is callback-based. `current_position` bridges one
//! `getCurrentPosition` request into a future via a oneshot channel, so the
//! tracking page can simply `.await` the viewer's coordinate. The partner
//! console instead holds a [`GeoWatch`] whose drop clears the underlying
//! `watchPosition` registration.

use tracking::error::GeolocationError;
use tracking::geo::Coordinate;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;
#[cfg(feature = "csr")]
use wasm_bindgen::closure::Closure;

#[cfg(feature = "csr")]
use tracking::consts::GEOLOCATION_TIMEOUT_MS;

/// Request the viewer's position once: high accuracy, a 10 second cap and
/// no cached fix.
///
/// # Errors
///
/// A [`GeolocationError`] naming the failure kind. Callers treat every kind
/// the same way: proceed without a viewer coordinate.
pub async fn current_position() -> Result<Coordinate, GeolocationError> {
    #[cfg(feature = "csr")]
    {
        let geolocation = geolocation()?;

        let options = web_sys::PositionOptions::new();
        options.set_enable_high_accuracy(true);
        options.set_timeout(GEOLOCATION_TIMEOUT_MS);
        options.set_maximum_age(0);

        let (sender, receiver) = futures::channel::oneshot::channel();
        let sender = Rc::new(RefCell::new(Some(sender)));

        let fix_sender = Rc::clone(&sender);
        let on_fix = Closure::once(move |position: web_sys::GeolocationPosition| {
            let coords = position.coords();
            let fix = Coordinate::new(coords.latitude(), coords.longitude());
            if let Some(sender) = fix_sender.borrow_mut().take() {
                let _ = sender.send(Ok(fix));
            }
        });
        let failure_sender = Rc::clone(&sender);
        let on_failure = Closure::once(move |error: web_sys::GeolocationPositionError| {
            let failure = GeolocationError::from_code(error.code());
            if let Some(sender) = failure_sender.borrow_mut().take() {
                let _ = sender.send(Err(failure));
            }
        });

        geolocation
            .get_current_position_with_error_callback_and_options(
                on_fix.as_ref().unchecked_ref(),
                Some(on_failure.as_ref().unchecked_ref()),
                &options,
            )
            .map_err(|_| GeolocationError::Unsupported)?;

        // The browser resolves exactly one of the two callbacks. A dropped
        // channel can only mean the page is tearing down mid-request.
        match receiver.await {
            Ok(result) => result,
            Err(_) => Err(GeolocationError::Unavailable),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(GeolocationError::Unsupported)
    }
}

/// Live `watchPosition` registration. Dropping the handle clears the watch
/// and releases both callbacks.
#[cfg(feature = "csr")]
pub struct GeoWatch {
    watch_id: i32,
    _on_fix: Closure<dyn FnMut(web_sys::GeolocationPosition)>,
    _on_failure: Closure<dyn FnMut(web_sys::GeolocationPositionError)>,
}

#[cfg(feature = "csr")]
impl Drop for GeoWatch {
    fn drop(&mut self) {
        if let Ok(geolocation) = geolocation() {
            geolocation.clear_watch(self.watch_id);
        }
    }
}

/// Start a continuous high-accuracy position watch.
///
/// `on_fix` runs for every fix and `on_failure` for every failed attempt;
/// the watch itself stays registered across failures.
///
/// # Errors
///
/// [`GeolocationError::Unsupported`] when the environment has no
/// geolocation service.
#[cfg(feature = "csr")]
pub fn watch_position(
    on_fix: impl FnMut(Coordinate) + 'static,
    on_failure: impl FnMut(GeolocationError) + 'static,
) -> Result<GeoWatch, GeolocationError> {
    let geolocation = geolocation()?;

    let options = web_sys::PositionOptions::new();
    options.set_enable_high_accuracy(true);

    let mut on_fix = on_fix;
    let fix_closure = Closure::wrap(Box::new(move |position: web_sys::GeolocationPosition| {
        let coords = position.coords();
        on_fix(Coordinate::new(coords.latitude(), coords.longitude()));
    }) as Box<dyn FnMut(web_sys::GeolocationPosition)>);

    let mut on_failure = on_failure;
    let failure_closure = Closure::wrap(Box::new(
        move |error: web_sys::GeolocationPositionError| {
            on_failure(GeolocationError::from_code(error.code()));
        },
    )
        as Box<dyn FnMut(web_sys::GeolocationPositionError)>);

    let watch_id = geolocation
        .watch_position_with_error_callback_and_options(
            fix_closure.as_ref().unchecked_ref(),
            Some(failure_closure.as_ref().unchecked_ref()),
            &options,
        )
        .map_err(|_| GeolocationError::Unsupported)?;

    Ok(GeoWatch {
        watch_id,
        _on_fix: fix_closure,
        _on_failure: failure_closure,
    })
}

#[cfg(feature = "csr")]
fn geolocation() -> Result<web_sys::Geolocation, GeolocationError> {
    web_sys::window()
        .ok_or(GeolocationError::Unsupported)?
        .navigator()
        .geolocation()
        .map_err(|_| GeolocationError::Unsupported)
}
