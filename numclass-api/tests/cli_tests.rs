//! Tests for command-line and environment configuration
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Every test here parses arguments, and clap reads NUMCLASS_* variables
//! while doing so, so all of them are marked #[serial].

use clap::Parser;
use numclass_api::cli::Args;
use serial_test::serial;
use std::env;
use std::time::Duration;

const ENV_VARS: [&str; 5] = [
    "NUMCLASS_HOST",
    "NUMCLASS_PORT",
    "NUMCLASS_FACT_URL",
    "NUMCLASS_FACT_TIMEOUT_SECS",
    "NUMCLASS_CONFIG",
];

fn clear_env() {
    for var in ENV_VARS {
        env::remove_var(var);
    }
}

fn empty_config_file() -> tempfile::NamedTempFile {
    tempfile::NamedTempFile::new().expect("Failed to create temp config")
}

#[test]
#[serial]
fn test_command_line_values() {
    clear_env();
    let file = empty_config_file();
    let config_path = file.path().to_str().unwrap();

    let args = Args::try_parse_from([
        "numclass-api",
        "--host",
        "127.0.0.1",
        "--port",
        "9001",
        "--fact-service-url",
        "http://localhost:1234",
        "--fact-timeout-secs",
        "3",
        "--config",
        config_path,
    ])
    .unwrap();
    let config = args.resolve_config().unwrap();

    assert_eq!(config.bind_addr(), "127.0.0.1:9001");
    assert_eq!(config.fact_service_url, "http://localhost:1234");
    assert_eq!(config.fact_timeout, Duration::from_secs(3));
}

#[test]
#[serial]
fn test_environment_values() {
    clear_env();
    let file = empty_config_file();
    env::set_var("NUMCLASS_PORT", "9002");
    env::set_var("NUMCLASS_FACT_TIMEOUT_SECS", "7");
    env::set_var("NUMCLASS_CONFIG", file.path());

    let args = Args::try_parse_from(["numclass-api"]).unwrap();
    let config = args.resolve_config();
    clear_env();

    let config = config.unwrap();
    assert_eq!(config.port, 9002);
    assert_eq!(config.fact_timeout, Duration::from_secs(7));
    assert_eq!(config.host, "0.0.0.0");
}

#[test]
#[serial]
fn test_command_line_beats_environment() {
    clear_env();
    env::set_var("NUMCLASS_PORT", "9002");

    let args = Args::try_parse_from(["numclass-api", "-p", "9003"]).unwrap();
    clear_env();

    assert_eq!(args.overrides().port, Some(9003));
}

#[test]
#[serial]
fn test_invalid_port_is_rejected() {
    clear_env();
    assert!(Args::try_parse_from(["numclass-api", "--port", "70000"]).is_err());
}

#[test]
#[serial]
fn test_config_file_fills_unset_values() {
    clear_env();
    let file = empty_config_file();
    std::fs::write(file.path(), "port = 9004\nfact_timeout_secs = 1\n").unwrap();

    let args = Args::try_parse_from([
        "numclass-api",
        "--fact-timeout-secs",
        "9",
        "--config",
        file.path().to_str().unwrap(),
    ])
    .unwrap();
    let config = args.resolve_config().unwrap();

    assert_eq!(config.port, 9004);
    assert_eq!(config.fact_timeout, Duration::from_secs(9));
}
