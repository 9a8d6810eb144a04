//! Workspace navigation rail.

use leptos::prelude::*;

use crate::state::view::{AppView, ViewState};

/// Vertical nav rail switching between the three workspace views.
#[component]
pub fn Sidebar() -> impl IntoView {
    let view = expect_context::<RwSignal<ViewState>>();

    let item = move |target: AppView, label: &'static str, glyph: &'static str| {
        let is_active = move || view.get().view == target;
        view! {
            <button
                class="sidebar__item"
                class:sidebar__item--active=is_active
                on:click=move |_| view.update(|v| v.set_view(target))
            >
                <span class="sidebar__glyph" aria-hidden="true">{glyph}</span>
                <span class="sidebar__label">{label}</span>
            </button>
        }
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">
                <span class="sidebar__logo">"NBL"</span>
                <span class="sidebar__tagline">"Gráfica Inteligente"</span>
            </div>
            <div class="sidebar__items">
                {item(AppView::Home, "Insights", "◧")}
                {item(AppView::Orders, "Pedidos", "▤")}
                {item(AppView::FullscreenChat, "Agente IA", "✦")}
            </div>
        </nav>
    }
}
