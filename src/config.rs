use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;

/// Config file picked up from the working directory when none is given.
const CWD_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Backend provider (supabase or memory)
    #[arg(long, env = "BACKEND_PROVIDER")]
    pub backend: Option<String>,

    /// Enable rate limiting
    #[arg(long, env = "RATE_LIMIT_ENABLED")]
    pub rate_limit_enabled: Option<bool>,

    /// Disable timeout middleware
    #[arg(long, env = "TIMEOUT_DISABLED")]
    pub timeout_disabled: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub resilience: ResilienceConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    /// `supabase` or `memory`.
    pub provider: String,
    /// Project URL, e.g. `https://<ref>.supabase.co`.
    pub url: String,
    pub api_key: String,
    /// Public storage bucket holding school images.
    pub bucket: String,
    pub table: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResilienceConfig {
    pub rate_limit_enabled: bool,
    pub timeout_disabled: bool,
    pub request_timeout_secs: u64,
    pub requests_per_second: u32,
    pub burst_size: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// `compact` or `json`.
    pub format: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    /// Priority: CLI flag > CLI env var > `SCHOOLS_` env > config file >
    /// `SUPABASE_*` env > defaults.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.static_dir", "static")?
            .set_default("backend.provider", "supabase")?
            .set_default("backend.url", "")?
            .set_default("backend.api_key", "")?
            .set_default("backend.bucket", "school-images")?
            .set_default("backend.table", "schools")?
            .set_default("backend.timeout_secs", 15)?
            .set_default("resilience.rate_limit_enabled", true)?
            .set_default("resilience.timeout_disabled", false)?
            .set_default("resilience.request_timeout_secs", 30)?
            .set_default("resilience.requests_per_second", 10)?
            .set_default("resilience.burst_size", 20)?
            .set_default("log.format", "compact")?;

        // The conventional Supabase variables act as defaults so that both the
        // config file and SCHOOLS_BACKEND__* can still override them.
        if let Some(url) = non_empty_env("SUPABASE_URL") {
            builder = builder.set_default("backend.url", url)?;
        }
        if let Some(key) = non_empty_env("SUPABASE_ANON_KEY") {
            builder = builder.set_default("backend.api_key", key)?;
        }

        if let Some(path) = &cli.config {
            builder = builder.add_source(File::from(Path::new(path)).required(true));
        } else if Path::new(CWD_CONFIG_FILE).exists() {
            builder = builder.add_source(File::from(Path::new(CWD_CONFIG_FILE)).required(false));
        }

        // E.g. SCHOOLS_SERVER__PORT=8000, SCHOOLS_BACKEND__API_KEY=...
        builder = builder.add_source(
            Environment::with_prefix("SCHOOLS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", port)?;
        }
        if let Some(provider) = cli.backend {
            builder = builder.set_override("backend.provider", provider)?;
        }
        if let Some(rl) = cli.rate_limit_enabled {
            builder = builder.set_override("resilience.rate_limit_enabled", rl)?;
        }
        if let Some(td) = cli.timeout_disabled {
            builder = builder.set_override("resilience.timeout_disabled", td)?;
        }

        builder.build()?.try_deserialize()
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
