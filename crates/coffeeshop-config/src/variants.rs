// coffeeshop-config/src/variants.rs
// ============================================================================
// Module: Built-In Config Variants
// Description: Built-in development configuration variant.
// Purpose: Provide the sample development values and variant selection.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The development variant mirrors the sample values the front end ships
//! with. There is no built-in production variant: production values must
//! arrive via config file or `COFFEESHOP_*` environment overrides so that
//! real credentials never live in source.

use crate::config::AuthConfig;
use crate::config::DeployTarget;
use crate::config::EnvironmentConfig;

// ============================================================================
// SECTION: Development Sample Values
// ============================================================================

/// Development API server URL (local Flask backend).
pub const DEV_API_SERVER_URL: &str = "http://127.0.0.1:5000";
/// Development Auth0 tenant domain prefix.
pub const DEV_AUTH_DOMAIN_PREFIX: &str = "dev-k73xuqib8s3gch5c.us";
/// Development Auth0 audience.
pub const DEV_AUTH_AUDIENCE: &str = "coffee";
/// Development Auth0 client id (sample; rejected in production).
pub const DEV_AUTH_CLIENT_ID: &str = "kZfgJuxb4n2bo7yBN1eqUeKdwDweiLz5";
/// Development callback URL (local ionic application).
pub const DEV_AUTH_CALLBACK_URL: &str = "http://localhost:4200";

// ============================================================================
// SECTION: Variant Selection
// ============================================================================

impl EnvironmentConfig {
    /// Returns the built-in development variant.
    #[must_use]
    pub fn development() -> Self {
        Self {
            production: false,
            api_server_url: DEV_API_SERVER_URL.to_string(),
            auth: AuthConfig {
                domain_prefix: DEV_AUTH_DOMAIN_PREFIX.to_string(),
                audience: DEV_AUTH_AUDIENCE.to_string(),
                client_id: DEV_AUTH_CLIENT_ID.to_string(),
                callback_url: DEV_AUTH_CALLBACK_URL.to_string(),
            },
        }
    }
}

/// Returns the built-in variant for a deploy target, if one exists.
#[must_use]
pub fn builtin(target: DeployTarget) -> Option<EnvironmentConfig> {
    match target {
        DeployTarget::Development => Some(EnvironmentConfig::development()),
        DeployTarget::Production => None,
    }
}
