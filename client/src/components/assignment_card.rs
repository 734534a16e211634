//! Card for one assignment on the delivery console.
//!
//! The action follows the handoff the partner performs next: an order out
//! for delivery can be marked picked up at the restaurant, a picked-up
//! order can be marked delivered at the door. Terminal rows show no action.

use leptos::prelude::*;

use tracking::status::OrderStatus;

use crate::net::types::Assignment;
use crate::util::format::status_label;

/// One assignment with its pickup/drop route and transition button.
#[component]
pub fn AssignmentCard(assignment: Assignment, on_changed: Callback<()>) -> impl IntoView {
    let status = assignment.status();
    let order_id = assignment.order_id;
    let status_line = status_label(&assignment.order_status);
    let busy = RwSignal::new(false);

    let transition = match status {
        Some(OrderStatus::OutForDelivery) => Some("Mark as Picked Up"),
        Some(OrderStatus::PickedUp) => Some("Mark as Delivered"),
        _ => None,
    };

    let on_transition = move |_ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            if busy.get_untracked() {
                return;
            }
            busy.set(true);
            leptos::task::spawn_local(async move {
                let result = match status {
                    Some(OrderStatus::OutForDelivery) => {
                        crate::net::api::mark_picked_up(order_id).await
                    }
                    _ => crate::net::api::mark_delivered(order_id).await,
                };
                match result {
                    Ok(()) => {
                        crate::util::toast::notify(
                            crate::util::toast::ToastKind::Success,
                            &format!("Order #{order_id} updated."),
                        );
                        on_changed.run(());
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
            let _ = on_changed;
        }
    };

    let restaurant = assignment
        .restaurant_name
        .clone()
        .unwrap_or_else(|| "Restaurant".to_owned());
    let restaurant_address = assignment
        .restaurant_address
        .clone()
        .unwrap_or_else(|| "Address not available".to_owned());
    let customer = assignment
        .customer_name
        .clone()
        .unwrap_or_else(|| "Customer".to_owned());
    let customer_address = assignment
        .customer_address
        .clone()
        .unwrap_or_else(|| "Address not available".to_owned());

    view! {
        <article class="card assignment-card">
            <h3>"Order #" {order_id} " (Status: " {status_line} ")"</h3>
            <p class="assignment-card__route">
                <strong>"Pickup From: "</strong> {restaurant}
            </p>
            <p class="assignment-card__route"><small>{restaurant_address}</small></p>
            <p class="assignment-card__route">
                <strong>"Deliver To: "</strong> {customer}
            </p>
            <p class="assignment-card__route"><small>{customer_address}</small></p>
            {transition
                .map(|label| {
                    view! {
                        <div class="order-card__actions">
                            <button
                                class="btn"
                                disabled=move || busy.get()
                                on:click=on_transition
                            >
                                {move || if busy.get() { "Updating..." } else { label }}
                            </button>
                        </div>
                    }
                })}
        </article>
    }
}
