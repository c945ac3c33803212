//! Stateless facade over the backend REST API.
//!
//! Exposes [`ApiClient::get_projects`], [`ApiClient::send_contact`] and
//! [`ApiClient::health`]. All wire handling is private to this module —
//! callers only see the typed records from [`crate::models`].
//!
//! Policy: `get_projects` substitutes fixed stub data on any failure when the
//! client was constructed with `fallback_enabled` (development runs); in
//! production the failure propagates unmodified. `send_contact` always
//! propagates. The flag is injected at construction rather than re-derived
//! from ambient environment state, so the client stays independently testable.

mod stub;

pub use stub::stub_projects;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::config::Config;
use crate::models::{ContactForm, HealthStatus, Project};

/// API call failure. Both kinds are handled identically by callers — the
/// distinction exists for diagnostics only.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network/connection-level failure: the request never produced a response.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The backend responded with a non-success status or an unparseable body.
    #[error("response failure: {0}")]
    Response(String),
}

/// Stateless backend API client.
///
/// Holds no mutable state between calls; concurrent callers need no
/// synchronisation. Constructed once at startup, then cheaply cloned because
/// `reqwest::Client` is an `Arc` internally.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    fallback_enabled: bool,
}

impl ApiClient {
    /// Build a client for the backend at `base_url` (no trailing slash).
    ///
    /// `fallback_enabled` turns fetch failures in [`get_projects`] into the
    /// fixed stub records instead of errors.
    ///
    /// No per-request timeout is configured: each call stays outstanding until
    /// the transport resolves it.
    ///
    /// [`get_projects`]: ApiClient::get_projects
    pub fn new(base_url: impl Into<String>, fallback_enabled: bool) -> Result<Self, ApiError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, base_url: base_url.into(), fallback_enabled })
    }

    /// Build from resolved config: base URL from `[api]`, fallback gated on
    /// the development run mode.
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(config.api.base_url.clone(), config.is_dev())
    }

    /// Fetch the project list from `GET {base}/api/projects`.
    ///
    /// On any failure (transport, non-success status, unparseable body) the
    /// error is logged; with the fallback enabled the stub records are
    /// returned instead, otherwise the error propagates.
    pub async fn get_projects(&self) -> Result<Vec<Project>, ApiError> {
        match self.fetch_projects().await {
            Ok(projects) => {
                debug!(count = projects.len(), "fetched projects");
                Ok(projects)
            }
            Err(e) => {
                error!(error = %e, "failed to fetch projects");
                if self.fallback_enabled {
                    debug!("substituting stub project data");
                    Ok(stub::stub_projects())
                } else {
                    Err(e)
                }
            }
        }
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>, ApiError> {
        let url = format!("{}/api/projects", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let response = check_status(response).await?;
        response
            .json::<Vec<Project>>()
            .await
            .map_err(|e| ApiError::Response(format!("failed to parse response body: {e}")))
    }

    /// Submit a contact form to `POST {base}/api/contact`.
    ///
    /// Success is any 2xx status; the response body is ignored. Failures
    /// always propagate — there is no fallback, no retry and no idempotency
    /// key, so a repeated call after a failure may duplicate a submission.
    pub async fn send_contact(&self, form: &ContactForm) -> Result<(), ApiError> {
        let url = format!("{}/api/contact", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(form)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "contact submission failed (transport)");
                ApiError::Transport(e.to_string())
            })?;
        check_status(response).await?;
        debug!("contact form submitted");
        Ok(())
    }

    /// Probe the backend via `GET {base}/api/health`. Always propagates.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        let url = format!("{}/api/health", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let response = check_status(response).await?;
        response
            .json::<HealthStatus>()
            .await
            .map_err(|e| ApiError::Response(format!("failed to parse health body: {e}")))
    }
}

// Error envelope used by the backend (`{"detail": "..."}`).
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    detail: String,
}

/// Consume the response and return it if successful, or a structured error.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<failed to read error body>".to_string());

    let message = if let Ok(env) = serde_json::from_str::<ErrorEnvelope>(&body) {
        format!("HTTP {status}: {}", env.detail)
    } else {
        format!("HTTP {status}: {body}")
    };

    error!(%status, %message, "backend returned HTTP error");
    Err(ApiError::Response(message))
}
