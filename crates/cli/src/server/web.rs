use axum::Router;
use helm_broker_api::{create_api_routes, AppState};
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn start_web_server(bind_addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    info!(
        bind_address = %bind_addr,
        catalog_url = format!("http://{}/v2/catalog", bind_addr),
        "Starting broker server"
    );

    let shutdown = state.shutdown.clone();
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Broker server started successfully");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown(shutdown))
        .await?;

    Ok(())
}

fn create_app(state: AppState) -> Router {
    create_api_routes(state).layer(TraceLayer::new_for_http())
}

async fn wait_for_shutdown(shutdown: CancellationToken) {
    shutdown.cancelled().await;
    info!("Shutdown signal received, draining connections");
}
