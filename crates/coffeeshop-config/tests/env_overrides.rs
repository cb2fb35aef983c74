//! Environment override tests for coffeeshop-config.
// coffeeshop-config/tests/env_overrides.rs
// =============================================================================
// Module: Environment Override Tests
// Description: Validate COFFEESHOP_* override application and parsing.
// Purpose: Ensure injected values replace file values and stay validated.
// =============================================================================

use std::collections::BTreeMap;

use coffeeshop_config::ENV_API_SERVER_URL;
use coffeeshop_config::ENV_AUTH_CALLBACK_URL;
use coffeeshop_config::ENV_AUTH_CLIENT_ID;
use coffeeshop_config::ENV_PRODUCTION;
use coffeeshop_config::EnvironmentConfig;

mod common;

type TestResult = Result<(), String>;

/// Builds a lookup closure over a key/value map.
fn lookup(entries: &BTreeMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<String> {
    let owned: BTreeMap<String, String> =
        entries.iter().map(|(key, value)| ((*key).to_string(), (*value).to_string())).collect();
    move |key: &str| owned.get(key).cloned()
}

#[test]
fn overrides_replace_existing_values() -> TestResult {
    let mut config = EnvironmentConfig::development();
    let entries = BTreeMap::from([
        (ENV_API_SERVER_URL, "https://api.coffeeshop.example.com"),
        (ENV_AUTH_CALLBACK_URL, "https://app.coffeeshop.example.com"),
        (ENV_AUTH_CLIENT_ID, "prodClient0000000000000000000000"),
        (ENV_PRODUCTION, "true"),
    ]);
    config.apply_overrides_from(lookup(&entries)).map_err(|err| err.to_string())?;

    if config.api_server_url != "https://api.coffeeshop.example.com" {
        return Err(format!("api_server_url not overridden: {}", config.api_server_url));
    }
    if !config.production {
        return Err("production flag not overridden".to_string());
    }
    config.validate().map_err(|err| err.to_string())
}

#[test]
fn untouched_fields_survive_overrides() -> TestResult {
    let mut config = EnvironmentConfig::development();
    let entries = BTreeMap::from([(ENV_API_SERVER_URL, "http://10.0.0.2:5000")]);
    config.apply_overrides_from(lookup(&entries)).map_err(|err| err.to_string())?;

    let baseline = EnvironmentConfig::development();
    if config.auth != baseline.auth {
        return Err("auth settings must survive unrelated overrides".to_string());
    }
    if config.production != baseline.production {
        return Err("production flag must survive unrelated overrides".to_string());
    }
    Ok(())
}

#[test]
fn production_flag_accepts_numeric_forms() -> TestResult {
    for (value, expected) in [("1", true), ("0", false), ("true", true), ("false", false)] {
        let mut config = EnvironmentConfig::development();
        let entries = BTreeMap::from([(ENV_PRODUCTION, value)]);
        config.apply_overrides_from(lookup(&entries)).map_err(|err| err.to_string())?;
        if config.production != expected {
            return Err(format!("value {value} should map to {expected}"));
        }
    }
    Ok(())
}

#[test]
fn malformed_production_flag_is_rejected() -> TestResult {
    let mut config = EnvironmentConfig::development();
    let entries = BTreeMap::from([(ENV_PRODUCTION, "yes")]);
    match config.apply_overrides_from(lookup(&entries)) {
        Err(error) => {
            let message = error.to_string();
            if message.contains("COFFEESHOP_PRODUCTION must be true/false/1/0") {
                Ok(())
            } else {
                Err(format!("unexpected error: {message}"))
            }
        }
        Ok(()) => Err("malformed flag must be rejected".to_string()),
    }
}

#[test]
fn overridden_values_remain_subject_to_validation() -> TestResult {
    let mut config = EnvironmentConfig::development();
    let entries = BTreeMap::from([(ENV_API_SERVER_URL, "")]);
    config.apply_overrides_from(lookup(&entries)).map_err(|err| err.to_string())?;
    common::assert_invalid(config.validate(), "api_server_url must be non-empty")
}
