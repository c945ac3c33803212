//! Portfolio site — server entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Load config
//!   3. Resolve effective log level (CLI `-v` flags > env > config)
//!   4. Init logger once
//!   5. Build the backend API client
//!   6. Spawn Ctrl-C → shutdown signal watcher
//!   7. Serve pages until shutdown

mod client;
mod config;
mod error;
mod logger;
mod models;
mod server;

use std::path::Path;

use tokio_util::sync::CancellationToken;
use tracing::info;

use client::ApiClient;
use error::AppError;
use server::AppState;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let args = parse_cli_args();

    let mut config = config::load(args.config_path.as_deref().map(Path::new))?;
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }

    let effective_log_level = args.log_level.unwrap_or(config.server.log_level.as_str());
    let force_cli_level = args.log_level.is_some();

    logger::init(effective_log_level, force_cli_level)?;

    info!(
        site_title = %config.site.title,
        bind = %config.server.bind,
        api_base_url = %config.api.base_url,
        mode = %config.server.mode,
        dev_fallback = %config.is_dev(),
        "config loaded"
    );

    let client = ApiClient::from_config(&config)
        .map_err(|e| AppError::Config(e.to_string()))?;

    // Shared shutdown token — Ctrl-C cancels it, the server watches it.
    let shutdown = CancellationToken::new();
    let ctrlc_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("ctrl-c received — initiating shutdown");
            ctrlc_token.cancel();
        }
    });

    print_startup_summary(&config);

    let state = AppState::new(client, config.site.clone());
    server::serve(&config.server.bind, state, shutdown).await
}

fn print_startup_summary(config: &config::Config) {
    let fallback = if config.is_dev() { "stub data on fetch failure" } else { "disabled" };
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║ 🗂️  Portfolio Site                                           ║");
    println!("╟──────────────────────────────────────────────────────────────╢");
    println!("║ 🧾 Site: {:<52}║", config.site.title);
    println!("║ 🌐 Bind: {:<52}║", config.server.bind);
    println!("║ 🔌 API:  {:<52}║", config.api.base_url);
    println!("║ 🛰️  Mode: {:<51}║", config.server.mode);
    println!("║ 🧪 Fallback: {:<48}║", fallback);
    println!("╚══════════════════════════════════════════════════════════════╝");
}

struct CliArgs {
    log_level: Option<&'static str>,
    config_path: Option<String>,
    bind: Option<String>,
}

fn parse_cli_args() -> CliArgs {
    let mut verbosity = 0u8;
    let mut config_path = None;
    let mut bind = None;

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--" {
            break;
        }

        match arg.as_str() {
            "-h" | "--help" => {
                println!("Usage: folio-web [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -h, --help                 Print help");
                println!("  -f, --config <PATH>        Path to configuration file (default: config/default.toml)");
                println!("  -b, --bind <ADDR>          Socket address to bind (overrides config)");
                println!("  -v, -vv, -vvv, -vvvv       Increase logging verbosity");
                std::process::exit(0);
            }
            "-f" | "--config" => {
                if let Some(path) = iter.next() {
                    config_path = Some(path);
                } else {
                    eprintln!("error: -f/--config requires a path argument");
                    std::process::exit(1);
                }
            }
            "-b" | "--bind" => {
                if let Some(addr) = iter.next() {
                    bind = Some(addr);
                } else {
                    eprintln!("error: -b/--bind requires an address argument");
                    std::process::exit(1);
                }
            }
            "--verbose" => verbosity = verbosity.saturating_add(1),
            a if a.starts_with('-') && a.len() > 1 && a.chars().skip(1).all(|c| c == 'v') => {
                verbosity = verbosity.saturating_add((a.len() - 1) as u8);
            }
            _ => {}
        }
    }

    // Each -v raises verbosity one tier from the config default:
    //   -v      → warn   (suppress info noise, show warnings+errors only)
    //   -vv     → info   (normal operational output — the typical default)
    //   -vvv    → debug  (flow-level diagnostics: fetch outcomes, fallback)
    //   -vvvv+  → trace  (full payload dumps, very verbose)
    let log_level = match verbosity {
        0 => None,
        1 => Some("warn"),
        2 => Some("info"),
        3 => Some("debug"),
        _ => Some("trace"),
    };

    CliArgs { log_level, config_path, bind }
}
