use std::collections::HashMap;
use std::env::VarError;
use std::path::Path;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.request_timeout_secs, 10);
    assert_eq!(cfg.user_agent, "scrapify/0.1 (catalog-export)");
    assert_eq!(cfg.throttle_ms, 100);
    assert_eq!(cfg.max_pages, 100);
    assert_eq!(cfg.output_path, Path::new("products.csv"));
}

#[test]
fn request_timeout_secs_override() {
    let mut map = HashMap::new();
    map.insert("SCRAPIFY_REQUEST_TIMEOUT_SECS", "30");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 30);
}

#[test]
fn request_timeout_secs_invalid() {
    let mut map = HashMap::new();
    map.insert("SCRAPIFY_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SCRAPIFY_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(SCRAPIFY_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn request_timeout_secs_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("SCRAPIFY_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SCRAPIFY_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(SCRAPIFY_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn user_agent_override() {
    let mut map = HashMap::new();
    map.insert("SCRAPIFY_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
}

#[test]
fn throttle_ms_override_allows_zero() {
    let mut map = HashMap::new();
    map.insert("SCRAPIFY_THROTTLE_MS", "0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.throttle_ms, 0);
}

#[test]
fn throttle_ms_invalid() {
    let mut map = HashMap::new();
    map.insert("SCRAPIFY_THROTTLE_MS", "-5");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SCRAPIFY_THROTTLE_MS"),
        "expected InvalidEnvVar(SCRAPIFY_THROTTLE_MS), got: {result:?}"
    );
}

#[test]
fn max_pages_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("SCRAPIFY_MAX_PAGES", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SCRAPIFY_MAX_PAGES"),
        "expected InvalidEnvVar(SCRAPIFY_MAX_PAGES), got: {result:?}"
    );
}

#[test]
fn output_path_override() {
    let mut map = HashMap::new();
    map.insert("SCRAPIFY_OUTPUT_PATH", "/tmp/catalog.csv");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.output_path, Path::new("/tmp/catalog.csv"));
}

#[test]
fn log_level_override() {
    let mut map = HashMap::new();
    map.insert("SCRAPIFY_LOG_LEVEL", "debug");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "debug");
}
