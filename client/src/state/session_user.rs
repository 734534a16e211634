//! Signed-in user state mirrored from browser session storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth screens live outside this app; they leave the authenticated user
//! under the `loggedInUser` session-storage key and every page here reads it.
//! Used by route guards and user-aware components to coordinate redirects and
//! identity-dependent rendering.

#[cfg(test)]
#[path = "session_user_test.rs"]
mod session_user_test;

use serde::Deserialize;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "loggedInUser";

/// Role string the backend assigns to delivery partners.
pub const DELIVERY_ROLE: &str = "ROLE_DELIVERY_PARTNER";

/// The authenticated user exactly as the auth flow stored it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// Backend user id.
    pub id: u64,
    /// Login name.
    pub username: String,
    /// Optional display name; may be absent or blank.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Backend role string, e.g. `"ROLE_USER"`.
    pub role: String,
}

impl SessionUser {
    /// Name to greet the user with; falls back to the username.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }

    #[must_use]
    pub fn is_delivery_partner(&self) -> bool {
        self.role == DELIVERY_ROLE
    }
}

/// Session state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionUserState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl Default for SessionUserState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl SessionUserState {
    /// Read the stored user. Browser only; native callers stay signed out.
    #[must_use]
    pub fn load() -> Self {
        Self {
            #[cfg(feature = "csr")]
            user: read_stored_user(),
            #[cfg(not(feature = "csr"))]
            user: None,
            loading: false,
        }
    }

    /// Decode a stored payload; anything malformed reads as signed out.
    #[must_use]
    pub fn parse(raw: &str) -> Option<SessionUser> {
        serde_json::from_str(raw).ok()
    }
}

/// Forget the stored user. No-op outside the browser.
pub fn clear_stored_user() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.session_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}

#[cfg(feature = "csr")]
fn read_stored_user() -> Option<SessionUser> {
    let storage = web_sys::window()?.session_storage().ok()??;
    let raw = storage.get_item(STORAGE_KEY).ok()??;
    SessionUserState::parse(&raw)
}
