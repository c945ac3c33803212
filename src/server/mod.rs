//! Axum page server — renders the site's HTML pages and a small `/healthz`
//! probe on top of the backend [`ApiClient`].
//!
//! ## URL layout
//!
//! ```text
//! GET  /            — home page
//! GET  /about       — about page
//! GET  /projects    — project cards fetched from the backend
//! GET  /contact     — contact form
//! POST /contact     — form submission → backend /api/contact
//! GET  /healthz     — proxied backend health probe (JSON)
//! GET  /favicon.ico → 204
//! ```
//!
//! `serve` drives the axum event loop; the caller's [`CancellationToken`] is
//! wired to axum's graceful shutdown.

mod api;
mod pages;

use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    routing::get,
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::client::ApiClient;
use crate::config::SiteConfig;
use crate::error::AppError;

/// Router state injected into every handler via [`axum::extract::State`].
///
/// Cheap to clone — the client is reference-counted internally and the site
/// copy is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Backend API client shared by all request handlers.
    pub client: ApiClient,
    /// Static site copy for page chrome.
    pub site: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(client: ApiClient, site: SiteConfig) -> Self {
        Self { client, site: Arc::new(site) }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/",            get(pages::home))
        .route("/about",       get(pages::about))
        .route("/projects",    get(pages::projects))
        .route("/contact",     get(pages::contact).post(pages::contact_submit))
        .route("/healthz",     get(api::healthz))
        .route("/favicon.ico", get(|| async { StatusCode::NO_CONTENT }))
        .with_state(state)
}

/// Bind `bind_addr` and serve the router until `shutdown` is cancelled.
pub async fn serve(
    bind_addr: &str,
    state: AppState,
    shutdown: CancellationToken,
) -> Result<(), AppError> {
    let router = build_router(state);

    let listener = TcpListener::bind(bind_addr)
        .await
        .map_err(|e| AppError::Server(format!("bind failed on {bind_addr}: {e}")))?;

    info!(%bind_addr, "page server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| AppError::Server(format!("server error: {e}")))?;

    info!("page server shut down");
    Ok(())
}
