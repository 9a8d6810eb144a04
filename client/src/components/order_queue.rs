//! Order queue view with the two urgency lanes.

use leptos::prelude::*;

use model::order::{Order, OrderStatus, mock_orders};

use crate::components::order_card::OrderCard;

fn lane(title: &'static str, orders: Vec<Order>) -> impl IntoView {
    view! {
        <section class="queue__lane">
            <h3 class="queue__lane-title">{title}</h3>
            {if orders.is_empty() {
                view! { <p class="queue__empty">"Nenhum pedido nesta janela."</p> }.into_any()
            } else {
                orders
                    .into_iter()
                    .map(|order| view! { <OrderCard order=order/> })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </section>
    }
}

/// Orders view: tomorrow's urgent lane and the seven-day window.
#[component]
pub fn OrderQueue() -> impl IntoView {
    let orders = mock_orders();

    let tomorrow: Vec<Order> = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Tomorrow)
        .cloned()
        .collect();
    let upcoming: Vec<Order> = orders
        .iter()
        .filter(|o| o.status == OrderStatus::NextSevenDays)
        .cloned()
        .collect();

    view! {
        <div class="queue">
            {lane("Urgência (Amanhã)", tomorrow)}
            {lane("Próximos 7 Dias", upcoming)}
        </div>
    }
}
