//! Top navigation bar with session-aware links.

use leptos::prelude::*;

use crate::state::cart::CartState;
use crate::state::session_user::{self, SessionUser, SessionUserState};

/// Navigation bar shown on every page.
#[component]
pub fn NavBar() -> impl IntoView {
    let session_user = expect_context::<RwSignal<SessionUserState>>();
    let cart = expect_context::<RwSignal<CartState>>();

    let is_partner = move || {
        session_user
            .get()
            .user
            .as_ref()
            .is_some_and(SessionUser::is_delivery_partner)
    };
    let display_name = move || {
        session_user
            .get()
            .user
            .map(|user| user.display_name().to_owned())
    };
    let cart_count = move || cart.get().item_count();

    let on_sign_out = move |_ev: leptos::ev::MouseEvent| {
        session_user::clear_stored_user();
        session_user.set(SessionUserState {
            user: None,
            loading: false,
        });
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"dishpatch"</a>
            <div class="navbar__links">
                <a href="/">"My Orders"</a>
                <Show when=is_partner>
                    <a href="/partner">"Delivery Console"</a>
                </Show>
                <span class="navbar__cart">"Cart (" {cart_count} ")"</span>
                <Show
                    when=move || display_name().is_some()
                    fallback=|| view! { <span class="navbar__user">"Guest"</span> }
                >
                    <span class="navbar__user">{move || display_name().unwrap_or_default()}</span>
                    <button class="btn btn--link" on:click=on_sign_out>"Sign out"</button>
                </Show>
            </div>
        </nav>
    }
}
