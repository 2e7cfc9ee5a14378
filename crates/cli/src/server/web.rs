use axum::Router;
use std::net::SocketAddr;
use std::str::FromStr;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn start_web_server(
    bind_addr: String,
    app: Router,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let socket_addr = SocketAddr::from_str(&bind_addr)?;

    info!(bind_address = %socket_addr, "Starting web server");

    let listener = TcpListener::bind(socket_addr).await?;

    info!("Web server ready to accept requests");

    axum::serve(listener, app.layer(TraceLayer::new_for_http()))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("Web server stopped");
    Ok(())
}
