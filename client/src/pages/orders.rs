//! My Orders page listing the customer's orders with lifecycle actions.

use leptos::prelude::*;

use crate::components::order_card::OrderCard;
use crate::state::session_user::SessionUserState;

/// Order list for the signed-in customer.
///
/// Signed-out visitors get a notice instead of a redirect; the sign-in
/// flow lives outside this app.
#[component]
pub fn OrdersPage() -> impl IntoView {
    let session_user = expect_context::<RwSignal<SessionUserState>>();

    let signed_in = move || session_user.get().user.is_some();
    let signed_out = move || {
        let state = session_user.get();
        !state.loading && state.user.is_none()
    };

    // Refetches whenever the session user resolves or changes.
    let orders = LocalResource::new(move || {
        let user_id = session_user.get().user.map(|user| user.id);
        async move {
            match user_id {
                Some(user_id) => crate::net::api::fetch_my_orders(user_id).await,
                None => None,
            }
        }
    });

    view! {
        <section class="orders-page">
            <h1>"My Orders"</h1>

            <Show when=signed_out>
                <p class="empty-state">"Sign in to see your orders."</p>
            </Show>

            <Show when=signed_in>
                <Suspense fallback=move || view! { <p>"Loading orders..."</p> }>
                    {move || {
                        orders
                            .get()
                            .map(|result| match result {
                                Some(list) if list.is_empty() => {
                                    view! {
                                        <p class="empty-state">
                                            "You haven't placed any orders yet."
                                        </p>
                                    }
                                        .into_any()
                                }
                                Some(list) => {
                                    view! {
                                        <div class="order-list">
                                            {list
                                                .into_iter()
                                                .map(|order| {
                                                    view! { <OrderCard order=order orders=orders/> }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                                None => {
                                    view! {
                                        <p class="empty-state">
                                            "Couldn't load your orders. Please try again."
                                        </p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </Show>
        </section>
    }
}
