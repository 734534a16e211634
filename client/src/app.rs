//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::NavBar;
use crate::pages::{orders::OrdersPage, partner::PartnerConsolePage, track::TrackOrderPage};
use crate::state::{cart::CartState, session_user::SessionUserState};

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let session_user = RwSignal::new(SessionUserState::default());
    let cart = RwSignal::new(CartState::default());

    provide_context(session_user);
    provide_context(cart);

    // Session storage is only readable once we are mounted in a browser.
    Effect::new(move || {
        session_user.set(SessionUserState::load());
        cart.set(CartState::load());
    });

    view! {
        <Title text="dishpatch"/>

        <Router>
            <NavBar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=OrdersPage/>
                    <Route path=(StaticSegment("track"), ParamSegment("id")) view=TrackOrderPage/>
                    <Route path=StaticSegment("partner") view=PartnerConsolePage/>
                </Routes>
            </main>
        </Router>
    }
}
