/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod endpoints;
pub mod error;
pub mod requests;

use axum::Router;
use axum::routing::{MethodRouter, get, post};
use http::HeaderValue;
use http::header::{ACCEPT, CONTENT_TYPE};
use litmus_core::types::ServerState;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use endpoints::*;

/// Registers `path` with and without a trailing slash.
fn litmus_route(
    router: Router<Arc<ServerState>>,
    path: &str,
    handler: MethodRouter<Arc<ServerState>>,
) -> Router<Arc<ServerState>> {
    router
        .route(path, handler.clone())
        .route(&format!("{}/", path), handler)
}

fn cors_layer(state: &ServerState) -> CorsLayer {
    let allow_origin = match HeaderValue::from_str(&state.cli.serve_url) {
        Ok(origin) => AllowOrigin::exact(origin),
        Err(e) => {
            tracing::warn!("Invalid serve url {}: {}", state.cli.serve_url, e);
            AllowOrigin::list(Vec::<HeaderValue>::new())
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers(vec![ACCEPT, CONTENT_TYPE])
}

pub fn create_router(state: Arc<ServerState>) -> Router {
    let routes = [
        ("/litmus/post", post(results::post_results)),
        ("/litmus/get", get(results::get_report)),
        ("/litmus/post/comment", post(annotations::post_comment)),
        ("/litmus/get/comment", get(annotations::get_comment)),
        ("/litmus/post/color", post(annotations::post_color)),
        ("/litmus/get/color", get(annotations::get_color)),
        ("/litmus/get/settings", get(settings::get_settings)),
        ("/litmus/get/tags", get(settings::get_tags)),
        ("/litmus/get/graphs", get(graphs::get_graphs)),
    ];

    let router = routes
        .into_iter()
        .fold(Router::new(), |router, (path, handler)| {
            litmus_route(router, path, handler)
        });

    router
        .route("/api/health", get(get_health))
        .fallback(handle_404)
        .layer(cors_layer(&state))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    tracing::info!("Listening on {}", server_url);
    axum::serve(listener, app).await
}
