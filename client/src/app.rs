//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::admin::AdminPage;
use crate::state::chat::ChatState;
use crate::state::view::ViewState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root component providing the shared state contexts.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let view = RwSignal::new(ViewState::default());
    let chat = RwSignal::new(ChatState::default());

    provide_context(view);
    provide_context(chat);

    view! {
        <Stylesheet id="leptos" href="/pkg/nbl-admin.css"/>
        <Title text="NBL Admin"/>

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("") view=AdminPage/>
            </Routes>
        </Router>
    }
}
