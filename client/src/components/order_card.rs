//! Compact order card used by the queue lanes.

use leptos::prelude::*;

use model::order::{Order, Priority};

use crate::state::view::ViewState;

fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "Baixa",
        Priority::Normal => "Normal",
        Priority::High => "Alta",
        Priority::Urgent => "Urgente",
    }
}

/// One order in a queue lane. Clicking selects it for the detail modal.
#[component]
pub fn OrderCard(order: Order) -> impl IntoView {
    let view = expect_context::<RwSignal<ViewState>>();

    let selected = order.clone();
    let on_click = move |_| view.update(|v| v.select_order(Some(selected.clone())));

    let price = format!("R$ {:.2}", order.price);
    let badge = order.priority.map(|p| {
        let urgent = matches!(p, Priority::High | Priority::Urgent);
        view! {
            <span class="badge" class:badge--critical=urgent>{priority_label(p)}</span>
        }
    });

    view! {
        <button class="order-card" on:click=on_click>
            <div class="order-card__top">
                <span class="order-card__id">{format!("#{}", order.id)}</span>
                {badge}
            </div>
            <span class="order-card__client">{order.client}</span>
            <span class="order-card__product">{order.product}</span>
            <div class="order-card__bottom">
                <span class="order-card__due">{order.due_date}</span>
                <span class="order-card__price">{price}</span>
            </div>
        </button>
    }
}
