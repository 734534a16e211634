#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Why the one-shot viewer position request yielded nothing.
///
/// Every variant is non-fatal: tracking proceeds with no customer
/// coordinate and the message is shown once through the notification sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("Location access was denied. Allow location to see yourself on the map.")]
    Denied,
    #[error("Your location is currently unavailable.")]
    Unavailable,
    #[error("Timed out while looking up your location.")]
    Timeout,
    #[error("This browser does not support location lookup.")]
    Unsupported,
}

impl GeolocationError {
    /// Map a W3C geolocation error code. Codes are 1 (permission denied),
    /// 2 (position unavailable) and 3 (timeout); anything else is treated
    /// as unavailable.
    #[must_use]
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::Denied,
            3 => Self::Timeout,
            _ => Self::Unavailable,
        }
    }
}

/// Failure fetching a tracking snapshot.
///
/// Fatal on the first load (no map is created); logged and swallowed on
/// every later poll tick.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TrackingFetchError {
    message: String,
}

impl TrackingFetchError {
    /// Generic lookup failure when the server offered no usable message.
    #[must_use]
    pub fn not_found(order_id: &str) -> Self {
        Self {
            message: format!("could not find order {order_id}"),
        }
    }

    /// Build from a non-2xx response body, preferring the server's message.
    ///
    /// Bodies are either plain text or a JSON object carrying an `error` or
    /// `message` field; a blank body falls back to [`Self::not_found`].
    #[must_use]
    pub fn from_error_body(order_id: &str, body: &str) -> Self {
        let trimmed = body.trim();
        let from_json = match serde_json::from_str::<serde_json::Value>(trimmed) {
            Ok(value) => value
                .get("error")
                .or_else(|| value.get("message"))
                .and_then(|field| field.as_str().map(str::to_owned)),
            Err(_) => None,
        };
        match from_json {
            Some(message) => Self { message },
            None if trimmed.is_empty() => Self::not_found(order_id),
            None => Self {
                message: trimmed.to_owned(),
            },
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Why a tracking session could not be brought up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionInitError {
    /// The page has no map container to mount into. Logged only; there is
    /// nowhere to render an error state either.
    #[error("map container missing from the page")]
    ContainerMissing,
    #[error(transparent)]
    Fetch(#[from] TrackingFetchError),
}
