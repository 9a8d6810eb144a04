mod config;
mod relay;
mod routes;
mod state;

use std::sync::Arc;

use relay::ChatRelay;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Initialize the chat relay (non-fatal: chat disabled if config missing).
    let relay = match config::RelayConfig::from_env().and_then(relay::RelayDispatch::from_config) {
        Ok(dispatch) => {
            tracing::info!(backend = dispatch.name(), "chat relay initialized");
            Some(Arc::new(dispatch) as Arc<dyn ChatRelay>)
        }
        Err(e) => {
            tracing::warn!(error = %e, "chat relay not configured; chat disabled");
            None
        }
    };

    let state = state::AppState::new(relay);

    let app = routes::leptos_app(state).expect("router build failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "nbl-admin listening");
    axum::serve(listener, app).await.expect("server failed");
}
