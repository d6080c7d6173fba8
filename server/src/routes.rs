//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server only hosts the merchant client: it renders the Leptos shell
//! (where every session read is a no-op and every page starts signed out),
//! serves the hydrate bundle under `/pkg`, and answers a health check. All
//! auth traffic goes from the browser straight to the marketplace API.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::ServerError;

/// Routes that do not depend on the Leptos configuration.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full application router and the address to bind.
///
/// # Errors
///
/// Returns [`ServerError::Config`] if the Leptos configuration cannot be
/// loaded (missing or malformed `[[workspace.metadata.leptos]]`).
pub fn app() -> Result<(Router, SocketAddr), ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Config(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(kasuwa_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || kasuwa_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let router = base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(&site_root_path))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());
    Ok((router, addr))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
