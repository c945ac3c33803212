//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory when
//! present, then applies `FOLIO_API_BASE_URL`, `FOLIO_ENV`, `FOLIO_LOG_LEVEL`
//! and `FOLIO_BIND` env overrides. A missing config file is not an error —
//! every setting has a fixed default, so the binary runs with no file at all.
//!
//! Resolution happens once at startup; the resulting [`Config`] is read-only
//! for the life of the process.

use std::{env, fs, path::Path};

use serde::Deserialize;

use crate::error::AppError;

/// Run-mode sentinel that enables development behaviour (stub fallback).
pub const DEV_MODE: &str = "development";

/// Default location probed when no `-f/--config` path is given.
const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Static site copy shown on the rendered pages.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Site title used in page `<title>` tags and the header.
    pub title: String,
    /// Owner name shown on the home page hero.
    pub owner: String,
    /// One-line tagline under the hero heading.
    pub tagline: String,
}

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address the page server binds to.
    pub bind: String,
    pub log_level: String,
    /// Declared run mode; compared against [`DEV_MODE`] verbatim.
    pub mode: String,
}

/// Backend API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend, no trailing slash. Taken verbatim — a
    /// malformed value is not detected here and surfaces as a failed fetch.
    pub base_url: String,
}

/// Fully-resolved process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub site: SiteConfig,
    pub server: ServerConfig,
    pub api: ApiConfig,
}

impl Config {
    /// Returns `true` iff the declared run mode equals the development
    /// sentinel. Gates the stub-data fallback in the API client.
    pub fn is_dev(&self) -> bool {
        self.server.mode == DEV_MODE
    }
}

/// Raw TOML shape — `serde` target before resolution.
#[derive(Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    site: RawSite,
    #[serde(default)]
    server: RawServer,
    #[serde(default)]
    api: RawApi,
}

#[derive(Deserialize)]
struct RawSite {
    #[serde(default = "default_site_title")]
    title: String,
    #[serde(default = "default_site_owner")]
    owner: String,
    #[serde(default = "default_site_tagline")]
    tagline: String,
}

#[derive(Deserialize)]
struct RawServer {
    #[serde(default = "default_bind")]
    bind: String,
    #[serde(default = "default_log_level")]
    log_level: String,
    #[serde(default = "default_mode")]
    mode: String,
}

#[derive(Deserialize)]
struct RawApi {
    #[serde(default = "default_api_base_url")]
    base_url: String,
}

impl Default for RawSite {
    fn default() -> Self {
        Self {
            title: default_site_title(),
            owner: default_site_owner(),
            tagline: default_site_tagline(),
        }
    }
}

impl Default for RawServer {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            log_level: default_log_level(),
            mode: default_mode(),
        }
    }
}

impl Default for RawApi {
    fn default() -> Self {
        Self { base_url: default_api_base_url() }
    }
}

fn default_site_title() -> String { "Portfolio".to_string() }
fn default_site_owner() -> String { "Your Name".to_string() }
fn default_site_tagline() -> String {
    "Full-stack developer building scalable, user-friendly applications.".to_string()
}
fn default_bind() -> String { "127.0.0.1:3000".to_string() }
fn default_log_level() -> String { "info".to_string() }
fn default_mode() -> String { "production".to_string() }
fn default_api_base_url() -> String { "http://localhost:8000".to_string() }

/// Env-var overrides applied on top of the TOML values.
///
/// Tests construct this directly instead of mutating process env vars.
#[derive(Debug, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub mode: Option<String>,
    pub log_level: Option<String>,
    pub bind: Option<String>,
}

impl Overrides {
    /// Read the `FOLIO_*` env vars.
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("FOLIO_API_BASE_URL").ok(),
            mode: env::var("FOLIO_ENV").ok(),
            log_level: env::var("FOLIO_LOG_LEVEL").ok(),
            bind: env::var("FOLIO_BIND").ok(),
        }
    }
}

/// Load config from `path` (or `config/default.toml` when `None`), then apply
/// env-var overrides.
pub fn load(path: Option<&Path>) -> Result<Config, AppError> {
    load_from(path, Overrides::from_env())
}

/// Internal loader — accepts an explicit path and explicit overrides.
///
/// An explicit path that cannot be read is an error; the default path is
/// probed and silently skipped when absent.
pub fn load_from(path: Option<&Path>, overrides: Overrides) -> Result<Config, AppError> {
    let raw = match path {
        Some(p) => read_raw(p)?,
        None => {
            let p = Path::new(DEFAULT_CONFIG_PATH);
            if p.exists() { read_raw(p)? } else { RawConfig::default() }
        }
    };

    Ok(Config {
        site: SiteConfig {
            title: raw.site.title,
            owner: raw.site.owner,
            tagline: raw.site.tagline,
        },
        server: ServerConfig {
            bind: overrides.bind.unwrap_or(raw.server.bind),
            log_level: overrides.log_level.unwrap_or(raw.server.log_level),
            mode: overrides.mode.unwrap_or(raw.server.mode),
        },
        api: ApiConfig {
            base_url: overrides.base_url.unwrap_or(raw.api.base_url),
        },
    })
}

fn read_raw(path: &Path) -> Result<RawConfig, AppError> {
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
    toml::from_str(&text)
        .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))
}

// ── test helpers ──────────────────────────────────────────────────────────────

/// Safe `Config` for unit tests — loopback backend, no external calls.
#[cfg(test)]
impl Config {
    pub fn test_default() -> Self {
        Self {
            site: SiteConfig {
                title: "Portfolio".into(),
                owner: "Test Owner".into(),
                tagline: "test tagline".into(),
            },
            server: ServerConfig {
                bind: "127.0.0.1:0".into(),
                log_level: "info".into(),
                mode: default_mode(),
            },
            api: ApiConfig { base_url: "http://127.0.0.1:1".into() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL_TOML: &str = r#"
[site]
title = "Test Portfolio"
owner = "Test Owner"

[server]
bind = "127.0.0.1:4000"
log_level = "debug"
"#;

    fn write_toml(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn parse_basic_config() {
        let f = write_toml(MINIMAL_TOML);
        let cfg = load_from(Some(f.path()), Overrides::default()).unwrap();
        assert_eq!(cfg.site.title, "Test Portfolio");
        assert_eq!(cfg.site.owner, "Test Owner");
        assert_eq!(cfg.server.bind, "127.0.0.1:4000");
        assert_eq!(cfg.server.log_level, "debug");
    }

    #[test]
    fn base_url_defaults_without_override() {
        let f = write_toml(MINIMAL_TOML);
        let cfg = load_from(Some(f.path()), Overrides::default()).unwrap();
        assert_eq!(cfg.api.base_url, "http://localhost:8000");
    }

    #[test]
    fn base_url_override_taken_verbatim() {
        // No trimming, no validation — even a malformed value passes through.
        let f = write_toml(MINIMAL_TOML);
        let overrides = Overrides {
            base_url: Some("  http://api.example.com:9999/ ".into()),
            ..Overrides::default()
        };
        let cfg = load_from(Some(f.path()), overrides).unwrap();
        assert_eq!(cfg.api.base_url, "  http://api.example.com:9999/ ");
    }

    #[test]
    fn mode_defaults_to_production() {
        let f = write_toml(MINIMAL_TOML);
        let cfg = load_from(Some(f.path()), Overrides::default()).unwrap();
        assert!(!cfg.is_dev());
    }

    #[test]
    fn dev_mode_from_override() {
        let f = write_toml(MINIMAL_TOML);
        let overrides = Overrides { mode: Some("development".into()), ..Overrides::default() };
        let cfg = load_from(Some(f.path()), overrides).unwrap();
        assert!(cfg.is_dev());
    }

    #[test]
    fn dev_mode_requires_exact_sentinel() {
        let f = write_toml(MINIMAL_TOML);
        let overrides = Overrides { mode: Some("dev".into()), ..Overrides::default() };
        let cfg = load_from(Some(f.path()), overrides).unwrap();
        assert!(!cfg.is_dev());
    }

    #[test]
    fn mode_from_toml() {
        let toml = r#"
[server]
mode = "development"
"#;
        let f = write_toml(toml);
        let cfg = load_from(Some(f.path()), Overrides::default()).unwrap();
        assert!(cfg.is_dev());
    }

    #[test]
    fn empty_file_yields_all_defaults() {
        let f = write_toml("");
        let cfg = load_from(Some(f.path()), Overrides::default()).unwrap();
        assert_eq!(cfg.api.base_url, "http://localhost:8000");
        assert_eq!(cfg.server.bind, "127.0.0.1:3000");
        assert_eq!(cfg.server.log_level, "info");
        assert!(!cfg.is_dev());
    }

    #[test]
    fn missing_explicit_file_errors() {
        let result = load_from(Some(Path::new("/nonexistent/config.toml")), Overrides::default());
        assert!(result.is_err());
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("config error"));
    }

    #[test]
    fn bind_and_log_level_overrides() {
        let f = write_toml(MINIMAL_TOML);
        let overrides = Overrides {
            bind: Some("0.0.0.0:8080".into()),
            log_level: Some("trace".into()),
            ..Overrides::default()
        };
        let cfg = load_from(Some(f.path()), overrides).unwrap();
        assert_eq!(cfg.server.bind, "0.0.0.0:8080");
        assert_eq!(cfg.server.log_level, "trace");
    }
}
