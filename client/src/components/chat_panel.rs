//! AI agent panel: transcript, typing indicator and the message input.

use leptos::prelude::*;

use model::chat::ChatRole;

use crate::state::chat::ChatState;
use crate::state::view::{AppView, ViewState};

/// Wall-clock label for a transcript entry, `HH:MM`.
fn clock(timestamp: f64) -> String {
    if timestamp <= 0.0 {
        return String::new();
    }
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp));
        format!("{:02}:{:02}", date.get_hours(), date.get_minutes())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Chat panel against the relay agent.
///
/// One in-flight request at a time: the send path is disabled while
/// `loading` is set, and every outcome (reply or failure) clears it.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let view = expect_context::<RwSignal<ViewState>>();

    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the transcript pinned to the newest entry.
    Effect::new(move || {
        let _ = chat.get().messages.len();
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let state = chat.get();
        let text = state.input.trim().to_owned();
        if text.is_empty() || state.loading {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use crate::state::chat::{OFFLINE_REPLY, reply_text};

            let history = state.history();
            chat.update(|c| {
                c.append(ChatRole::User, text.clone(), js_sys::Date::now());
                c.input.clear();
                c.loading = true;
            });

            leptos::task::spawn_local(async move {
                let result = crate::net::chat_api::send_chat(&text, &history).await;
                chat.update(|c| {
                    match result {
                        Ok(reply) => {
                            c.append(ChatRole::Model, reply_text(&reply), js_sys::Date::now());
                        }
                        Err(err) => {
                            log::warn!("chat relay failed: {err}");
                            c.append(ChatRole::Model, OFFLINE_REPLY, js_sys::Date::now());
                        }
                    }
                    c.loading = false;
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (text, &state);
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || {
        let state = chat.get();
        !state.input.trim().is_empty() && !state.loading
    };

    let is_fullscreen = move || view.get().view == AppView::FullscreenChat;

    view! {
        <div class="chat-panel" class:chat-panel--fullscreen=is_fullscreen>
            <header class="chat-panel__header">
                <span class="chat-panel__title">"Agente NBL"</span>
                {move || {
                    is_fullscreen()
                        .then(|| view! { <span class="badge">"Modo Expandido"</span> })
                }}
            </header>

            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    chat.get()
                        .messages
                        .iter()
                        .map(|msg| {
                            let is_model = msg.role == ChatRole::Model;
                            let text = msg.text.clone();
                            let when = clock(msg.timestamp);
                            view! {
                                <div
                                    class="chat-panel__message"
                                    class:chat-panel__message--model=is_model
                                >
                                    <div class="chat-panel__bubble">{text}</div>
                                    <span class="chat-panel__time">{when}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                {move || {
                    chat.get().loading.then(|| view! {
                        <div class="chat-panel__typing">
                            <span class="chat-panel__dot"></span>
                            <span class="chat-panel__dot"></span>
                            <span class="chat-panel__dot"></span>
                        </div>
                    })
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Pergunte sobre pedidos, estoque, produção..."
                    prop:value=move || chat.get().input
                    on:input=move |ev| chat.update(|c| c.input = event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary chat-panel__send"
                    on:click=on_click
                    disabled=move || !can_send()
                >
                    "Enviar"
                </button>
            </div>
        </div>
    }
}
