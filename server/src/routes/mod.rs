//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the health check and static asset directories, then stitches in
//! Leptos SSR rendering of the `site` app under a single Axum router. Paths
//! the app does not register fall through to `fallback`: a page path with a
//! trailing slash is redirected to its canonical path, anything else goes to
//! `file_and_error_handler`, which serves a matching file from the site root
//! or renders the app's not-found page with a 404 status.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use site::routes::Page;

use crate::config::ServerConfig;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

/// Health check and static directories. Independent of Leptos configuration.
fn base_routes(config: &ServerConfig, site_root: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .nest_service("/images", ServeDir::new(config.images_dir(site_root)))
}

/// Full application: static routes + Leptos SSR pages + fallback.
pub fn app(leptos_options: LeptosOptions, config: &ServerConfig) -> Router {
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let routes = generate_route_list(site::app::App);
    tracing::debug!(count = routes.len(), "registered site routes");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || site::app::shell(opts.clone())
        })
        .fallback(fallback)
        .with_state(leptos_options);

    base_routes(config, &site_root)
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Redirect `/reptile/` style paths to their page, otherwise serve a static
/// file or the not-found page.
async fn fallback(uri: Uri, state: State<LeptosOptions>, req: Request<Body>) -> Response {
    if let Some(location) = canonical_location(&uri) {
        tracing::debug!(from = %uri, to = %location, "redirecting to canonical page path");
        return Redirect::permanent(&location).into_response();
    }
    leptos_axum::file_and_error_handler(site::app::shell)(uri, state, req).await
}

/// Canonical location for a registered page requested under a different
/// spelling of its path. Query strings are kept.
fn canonical_location(uri: &Uri) -> Option<String> {
    let page = Page::from_path(uri.path())?;
    if page.path() == uri.path() {
        return None;
    }
    Some(match uri.query() {
        Some(query) => format!("{}?{query}", page.path()),
        None => page.path().to_owned(),
    })
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
