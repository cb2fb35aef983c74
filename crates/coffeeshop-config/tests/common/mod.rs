// coffeeshop-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for coffeeshop-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use coffeeshop_config::ConfigError;
use coffeeshop_config::EnvironmentConfig;

/// Parses a TOML string into an `EnvironmentConfig` for tests.
pub fn config_from_toml(toml_str: &str) -> Result<EnvironmentConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Returns a minimal config with all defaults applied (invalid until filled).
pub fn minimal_config() -> Result<EnvironmentConfig, toml::de::Error> {
    config_from_toml("")
}

/// Returns a valid non-loopback production config for cross-field tests.
pub fn production_config() -> EnvironmentConfig {
    let mut config = EnvironmentConfig::development();
    config.production = true;
    config.api_server_url = "https://api.coffeeshop.example.com".to_string();
    config.auth.callback_url = "https://app.coffeeshop.example.com".to_string();
    config.auth.client_id = "prodClient0000000000000000000000".to_string();
    config
}

/// Asserts that a validation result fails with a message containing `needle`.
pub fn assert_invalid(result: Result<(), ConfigError>, needle: &str) -> Result<(), String> {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(()) => Err("expected invalid config".to_string()),
    }
}
