//! Framework asset routes.
//!
//! The behavior script and base stylesheet are compiled into the binary;
//! an application may additionally mount its own static directory.

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, get_service};
use axum::Router;
use tower_http::services::ServeDir;

const BEHAVIOR_JS: &str = include_str!("../assets/lattice.js");
const BASE_CSS: &str = include_str!("../assets/lattice.css");

/// Routes for the framework's own assets, plus an optional application
/// static directory served under `/static`.
pub fn asset_routes(static_dir: Option<&str>) -> Router {
    let router = Router::new()
        .route("/assets/lattice.js", get(behavior_script))
        .route("/assets/lattice.css", get(base_stylesheet));
    match static_dir {
        Some(dir) => {
            tracing::info!(dir, "serving application static files under /static");
            router.nest_service(
                "/static",
                get_service(ServeDir::new(dir)),
            )
        }
        None => router,
    }
}

async fn behavior_script() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        BEHAVIOR_JS,
    )
}

async fn base_stylesheet() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        BASE_CSS,
    )
}
