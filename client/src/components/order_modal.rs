//! Detail overlay for the selected order.

use leptos::prelude::*;

use model::order::OrderStatus;

use crate::state::view::ViewState;

/// Modal showing the full detail of the selected order.
///
/// Mounted whenever a selection exists; closing only clears the selection,
/// the order book itself is never touched.
#[component]
pub fn OrderModal() -> impl IntoView {
    let view = expect_context::<RwSignal<ViewState>>();

    let close = move |_| view.update(|v| v.select_order(None));

    view! {
        <Show when=move || view.get().selected_order.is_some()>
            {move || {
                view.get().selected_order.map(|order| {
                    let urgent = order.status == OrderStatus::Tomorrow;
                    let price = format!("R$ {:.2}", order.price);
                    view! {
                        <div class="dialog-backdrop" on:click=close>
                            <div class="dialog order-modal" on:click=move |ev| ev.stop_propagation()>
                                <header class="order-modal__header">
                                    <h2>{format!("Pedido #{}", order.id)}</h2>
                                    {urgent.then(|| view! {
                                        <span class="badge badge--critical">"Entrega Amanhã"</span>
                                    })}
                                </header>
                                <dl class="order-modal__fields">
                                    <dt>"Cliente"</dt>
                                    <dd>{order.client}</dd>
                                    <dt>"Produto"</dt>
                                    <dd>{order.product}</dd>
                                    <dt>"Quantidade"</dt>
                                    <dd>{order.quantity}</dd>
                                    <dt>"Entrega"</dt>
                                    <dd>{order.due_date}</dd>
                                    <dt>"Valor"</dt>
                                    <dd>{price}</dd>
                                </dl>
                                <div class="dialog__actions">
                                    <button class="btn" on:click=close>"Fechar"</button>
                                </div>
                            </div>
                        </div>
                    }
                })
            }}
        </Show>
    }
}
