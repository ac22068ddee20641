use school_directory::config::AppConfig;
use serial_test::serial;
use std::env;
use std::fs;

const BIN: &str = "school-directory";

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        for key in [
            "SCHOOLS_SERVER__PORT",
            "SCHOOLS_BACKEND__URL",
            "SCHOOLS_BACKEND__PROVIDER",
            "SUPABASE_URL",
            "SUPABASE_ANON_KEY",
            "CONFIG_FILE",
            "PORT",
            "BACKEND_PROVIDER",
            "RATE_LIMIT_ENABLED",
            "TIMEOUT_DISABLED",
        ] {
            env::remove_var(key);
        }
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args([BIN]).expect("defaults should load");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.backend.provider, "supabase");
    assert_eq!(config.backend.bucket, "school-images");
    assert_eq!(config.backend.table, "schools");
    assert!(config.resilience.rate_limit_enabled);
    assert_eq!(config.log.format, "compact");
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("SCHOOLS_SERVER__PORT", "9090");
        env::set_var("SCHOOLS_BACKEND__PROVIDER", "memory");
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.backend.provider, "memory");

    clear_env_vars();
}

#[test]
#[serial]
fn test_supabase_env_fallback() {
    clear_env_vars();
    unsafe {
        env::set_var("SUPABASE_URL", "https://abc.supabase.co");
        env::set_var("SUPABASE_ANON_KEY", "anon");
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.backend.url, "https://abc.supabase.co");
    assert_eq!(config.backend.api_key, "anon");

    // The prefixed variable wins over the conventional one.
    unsafe {
        env::set_var("SCHOOLS_BACKEND__URL", "https://override.supabase.co");
    }
    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.backend.url, "https://override.supabase.co");

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("tempdir");
    let file_path = dir.path().join("directory.yaml");
    fs::write(
        &file_path,
        r#"
server:
  port: 7070
backend:
  table: schools_staging
"#,
    )
    .expect("Failed to write temp config");

    let path = file_path.to_string_lossy().to_string();
    let config =
        AppConfig::load_from_args([BIN, "--config", path.as_str()]).expect("Failed to load config file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.backend.table, "schools_staging");
    assert_eq!(config.backend.bucket, "school-images");
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_env_vars();
    assert!(AppConfig::load_from_args([BIN, "--config", "/nonexistent/directory.yaml"]).is_err());
}

#[test]
#[serial]
fn test_cli_overrides_env() {
    clear_env_vars();
    unsafe {
        env::set_var("SCHOOLS_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args([
        BIN,
        "--port",
        "8181",
        "--backend",
        "memory",
        "--rate-limit-enabled",
        "false",
    ])
    .expect("Failed to load config");
    assert_eq!(config.server.port, 8181);
    assert_eq!(config.backend.provider, "memory");
    assert!(!config.resilience.rate_limit_enabled);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    let cwd_path = "config.yaml";
    fs::write(
        cwd_path,
        r#"
server:
  port: 6060
"#,
    )
    .expect("Failed to write ./config.yaml");

    let config = AppConfig::load_from_args([BIN]);

    fs::remove_file(cwd_path).unwrap();

    assert_eq!(config.expect("Failed to load config").server.port, 6060);
}
