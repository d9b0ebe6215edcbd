use std::collections::HashMap;
use std::env::VarError;

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

/// Returns a map with all required env vars populated.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("MEDUSA_PUBLISHABLE_KEY", "pk_test_123");
    m
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "STOREFRONT_ENV"));
}

#[test]
fn build_app_config_fails_without_publishable_key() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "MEDUSA_PUBLISHABLE_KEY"),
        "expected MissingEnvVar(MEDUSA_PUBLISHABLE_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_publishable_key_as_missing() {
    let mut map = HashMap::new();
    map.insert("MEDUSA_PUBLISHABLE_KEY", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "MEDUSA_PUBLISHABLE_KEY"),
        "expected MissingEnvVar(MEDUSA_PUBLISHABLE_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_succeeds_with_defaults() {
    let map = full_env();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.backend_url, "http://localhost:9000");
    assert_eq!(cfg.publishable_key, "pk_test_123");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "storefront/0.1 (catalog)");
    assert_eq!(cfg.page_size, 12);
    assert_eq!(cfg.locale, "en-US");
}

#[test]
fn build_app_config_trims_trailing_slash_from_backend_url() {
    let mut map = full_env();
    map.insert("MEDUSA_BACKEND_URL", "https://api.shop.example/");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.backend_url, "https://api.shop.example");
}

#[test]
fn build_app_config_rejects_relative_backend_url() {
    let mut map = full_env();
    map.insert("MEDUSA_BACKEND_URL", "localhost-without-scheme");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MEDUSA_BACKEND_URL"),
        "expected InvalidEnvVar(MEDUSA_BACKEND_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_request_timeout_override() {
    let mut map = full_env();
    map.insert("STOREFRONT_REQUEST_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 5);
}

#[test]
fn build_app_config_request_timeout_invalid() {
    let mut map = full_env();
    map.insert("STOREFRONT_REQUEST_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREFRONT_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(STOREFRONT_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_page_size_override() {
    let mut map = full_env();
    map.insert("STOREFRONT_PAGE_SIZE", "24");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.page_size, 24);
}

#[test]
fn build_app_config_rejects_zero_page_size() {
    let mut map = full_env();
    map.insert("STOREFRONT_PAGE_SIZE", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREFRONT_PAGE_SIZE"),
        "expected InvalidEnvVar(STOREFRONT_PAGE_SIZE), got: {result:?}"
    );
}

#[test]
fn debug_output_redacts_publishable_key() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("pk_test_123"), "key leaked: {rendered}");
    assert!(rendered.contains("[redacted]"));
}
