//! Card for one order on the My Orders page.
//!
//! DESIGN
//! ======
//! The action row follows the order lifecycle: anything still in flight can
//! be tracked, and orders the restaurant has not started cooking past can
//! still be cancelled. Cancelling asks for confirmation, then refetches the
//! whole list so the card reflects the server's view rather than a local
//! guess.

use leptos::prelude::*;

use tracking::status::OrderStatus;

use crate::net::types::OrderSummary;
use crate::util::format::{date_label, rupees, status_chip_class, status_label};

/// One order with its lines, total and lifecycle actions.
#[component]
pub fn OrderCard(
    order: OrderSummary,
    orders: LocalResource<Option<Vec<OrderSummary>>>,
) -> impl IntoView {
    let status = order.status();
    let can_track = status.is_some_and(OrderStatus::can_track);
    let can_cancel = status.is_some_and(OrderStatus::can_cancel);
    let chip_class = status_chip_class(status);
    let status_line = status_label(&order.status);
    let order_id = order.id;
    let busy = RwSignal::new(false);

    let on_cancel = move |_ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            if busy.get_untracked() {
                return;
            }
            let confirmed = web_sys::window().is_some_and(|window| {
                window
                    .confirm_with_message(
                        "Are you sure you want to cancel this order? \
                         This action cannot be undone.",
                    )
                    .unwrap_or(false)
            });
            if !confirmed {
                return;
            }
            busy.set(true);
            let orders = orders.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::cancel_order(order_id).await {
                    Ok(()) => {
                        crate::util::toast::notify(
                            crate::util::toast::ToastKind::Success,
                            &format!("Order #{order_id} has been cancelled."),
                        );
                        orders.refetch();
                    }
                    Err(message) => {
                        crate::util::toast::notify(
                            crate::util::toast::ToastKind::Error,
                            &message,
                        );
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &orders;
        }
    };

    view! {
        <article class="card order-card">
            <header class="order-card__head">
                <h3>{order.restaurant_name().to_owned()}</h3>
                <span class=chip_class>{status_line}</span>
            </header>
            <p class="order-card__meta">"Order ID: #" {order.id}</p>
            {order
                .order_date
                .as_deref()
                .map(|placed| view! { <p class="order-card__meta">"Placed: " {date_label(placed)}</p> })}
            <ul class="order-card__items">
                {order
                    .order_items
                    .iter()
                    .map(|line| {
                        let detail = line
                            .price
                            .map(|price| format!(" @ {}", rupees(price)))
                            .unwrap_or_default();
                        view! {
                            <li>{format!("{} x {}{detail}", line.quantity, line.label())}</li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <p class="order-card__total">"Total: " {rupees(order.total_price)}</p>
            <footer class="order-card__actions">
                <Show when=move || can_track>
                    <a class="btn" href=format!("/track/{order_id}")>"Track Order"</a>
                </Show>
                <Show when=move || can_cancel>
                    <button
                        class="btn btn--danger"
                        disabled=move || busy.get()
                        on:click=on_cancel
                    >
                        {move || if busy.get() { "Cancelling..." } else { "Cancel Order" }}
                    </button>
                </Show>
            </footer>
        </article>
    }
}
