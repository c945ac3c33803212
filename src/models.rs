//! Display and submission records exchanged with the backend API.
//!
//! These mirror the backend's JSON wire shapes. Deserialization is
//! structurally typed via serde; unknown fields are ignored and no further
//! schema validation is performed — a conforming backend is assumed.

use serde::{Deserialize, Serialize};

/// A displayable portfolio entry.
///
/// Immutable once fetched; owned by the page render that fetched it and
/// discarded at the end of that render. `id` is an opaque stable identifier,
/// unique within any single fetched collection (backend contract).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub summary: String,
    /// Ordered — insertion order is the display order.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
}

/// Fixed-key link map for a project. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
}

/// Contact form submission, passed by reference to
/// [`ApiClient::send_contact`](crate::client::ApiClient::send_contact) and
/// discarded after the call returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Backend health probe response (`GET /api/health`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
}
