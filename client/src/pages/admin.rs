//! Admin workspace layout: nav rail, active view and the resizable chat panel.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::dashboard::Dashboard;
use crate::components::order_modal::OrderModal;
use crate::components::order_queue::OrderQueue;
use crate::components::sidebar::Sidebar;
use crate::state::resize::ResizeController;
use crate::state::view::{AppView, ViewState};

#[cfg(feature = "hydrate")]
fn set_body_cursor(cursor: &str) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let _ = body.style().set_property("cursor", cursor);
    }
}

/// The single admin page.
///
/// Owns the drag-to-resize wiring: window-level mouse listeners are
/// registered once on mount and interpreted through [`ResizeController`],
/// so moves outside a gesture are no-ops. The panel promotes to fullscreen
/// when a drag crosses the window-width threshold.
#[component]
pub fn AdminPage() -> impl IntoView {
    let view = expect_context::<RwSignal<ViewState>>();
    let resize = RwSignal::new(ResizeController::new());

    let on_handle_down = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        resize.update(ResizeController::begin);
        #[cfg(feature = "hydrate")]
        set_body_cursor("col-resize");
    };

    #[cfg(feature = "hydrate")]
    {
        use crate::state::resize::ResizeAction;

        let move_handle = window_event_listener(leptos::ev::mousemove, move |ev| {
            let window_width = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|w| w.as_f64())
                .unwrap_or(0.0);

            let mut action = ResizeAction::Ignore;
            resize.update(|r| action = r.track(window_width, f64::from(ev.client_x())));

            match action {
                ResizeAction::Fullscreen => {
                    view.update(|v| v.set_view(AppView::FullscreenChat));
                    set_body_cursor("");
                }
                ResizeAction::SetWidth(width) => view.update(|v| v.chat_width = width),
                ResizeAction::Ignore => {}
            }
        });
        let up_handle = window_event_listener(leptos::ev::mouseup, move |_| {
            resize.update(ResizeController::finish);
            set_body_cursor("");
        });
        on_cleanup(move || {
            move_handle.remove();
            up_handle.remove();
        });
    }

    let fullscreen = move || view.get().view == AppView::FullscreenChat;

    let aside_width = move || {
        if fullscreen() {
            "100%".to_owned()
        } else {
            format!("{}px", view.get().chat_width)
        }
    };

    let header_title = move || match view.get().view {
        AppView::Home => "Insights Operacionais",
        AppView::Orders => "Fila de Pedidos",
        AppView::FullscreenChat => "Agente IA",
    };

    view! {
        <div class="admin-page" class:admin-page--fullscreen=fullscreen>
            <Sidebar/>

            <Show when=move || !fullscreen()>
                <main class="admin-page__main">
                    <header class="admin-page__header">
                        <h1>{header_title}</h1>
                    </header>
                    {move || match view.get().view {
                        AppView::Orders => view! { <OrderQueue/> }.into_any(),
                        _ => view! { <Dashboard/> }.into_any(),
                    }}
                </main>

                <div
                    class="admin-page__handle"
                    on:mousedown=on_handle_down
                    title="Arraste para redimensionar"
                ></div>
            </Show>

            <aside class="admin-page__chat" style:width=aside_width>
                <ChatPanel/>
            </aside>

            <OrderModal/>
        </div>
    }
}
