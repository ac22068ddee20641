//! School Directory server.
//!
//! Entry point: load configuration, start logging, serve.

use std::sync::Arc;

use dotenvy::dotenv;
use mimalloc::MiMalloc;

use school_directory::config::AppConfig;
use school_directory::{server, telemetry};

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    telemetry::init(&config.log);

    server::start_server(Arc::new(config)).await
}
