//! Server bootstrap.

use crate::assets::asset_routes;
use crate::config::WebConfig;
use crate::error::{Result, WebError};
use axum::Router;
use std::net::SocketAddr;

/// Bind and serve the application router, with the framework asset routes
/// merged in.
pub async fn serve(config: &WebConfig, app: Router) -> Result<()> {
    let app = app.merge(asset_routes(config.static_dir.as_deref()));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| WebError::Config(format!("invalid listen address: {e}")))?;

    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(WebError::Io)?;

    axum::serve(listener, app).await.map_err(WebError::Io)?;

    Ok(())
}
