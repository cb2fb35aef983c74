// coffeeshop-config/src/config.rs
// ============================================================================
// Module: Coffeeshop Configuration
// Description: Configuration loading and validation for the coffeeshop app.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: serde, toml, url
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path
//! limits, then overridden from the process environment and validated.
//! Missing or invalid configuration fails closed. The built-in development
//! variant carries sample credentials and is rejected when
//! `production = true`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use url::Host;
use url::Url;

use crate::variants;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "coffeeshop.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "COFFEESHOP_CONFIG";
/// Environment variable overriding the `production` flag.
pub const ENV_PRODUCTION: &str = "COFFEESHOP_PRODUCTION";
/// Environment variable overriding `api_server_url`.
pub const ENV_API_SERVER_URL: &str = "COFFEESHOP_API_SERVER_URL";
/// Environment variable overriding `auth.domain_prefix`.
pub const ENV_AUTH_DOMAIN_PREFIX: &str = "COFFEESHOP_AUTH0_DOMAIN_PREFIX";
/// Environment variable overriding `auth.audience`.
pub const ENV_AUTH_AUDIENCE: &str = "COFFEESHOP_AUTH0_AUDIENCE";
/// Environment variable overriding `auth.client_id`.
pub const ENV_AUTH_CLIENT_ID: &str = "COFFEESHOP_AUTH0_CLIENT_ID";
/// Environment variable overriding `auth.callback_url`.
pub const ENV_AUTH_CALLBACK_URL: &str = "COFFEESHOP_AUTH0_CALLBACK_URL";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 64 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of a plain string field.
pub(crate) const MAX_FIELD_LENGTH: usize = 512;
/// Maximum length of a URL field.
pub(crate) const MAX_URL_LENGTH: usize = 2048;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Deployment target selecting a configuration variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployTarget {
    /// Local development against a loopback API server.
    Development,
    /// Production deployment; requires explicit configuration.
    Production,
}

impl fmt::Display for DeployTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Production => f.write_str("production"),
        }
    }
}

/// Coffeeshop environment configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentConfig {
    /// Build-variant flag distinguishing production deployments.
    #[serde(default)]
    pub production: bool,
    /// Base URL of the backend API server.
    #[serde(default)]
    pub api_server_url: String,
    /// Auth0 tenant settings.
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Auth0 tenant settings consumed by the front-end login flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// Auth0 tenant domain prefix.
    #[serde(default)]
    pub domain_prefix: String,
    /// Audience identifier of the protected API.
    #[serde(default)]
    pub audience: String,
    /// Client identifier of the registered application.
    #[serde(default)]
    pub client_id: String,
    /// Redirect target after the login flow completes.
    #[serde(default)]
    pub callback_url: String,
}

impl EnvironmentConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// The path is resolved from the explicit argument, then the
    /// [`CONFIG_ENV_VAR`] environment variable, then [`DEFAULT_CONFIG_NAME`].
    /// Environment overrides are applied before validation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let mut config = Self::read_file(&resolved)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration for a deploy target, falling back to the built-in
    /// variant when the config file is absent.
    ///
    /// Only the development target has a built-in variant; production with
    /// no config file fails closed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails, or when the
    /// loaded `production` flag contradicts `target`.
    pub fn load_or_builtin(
        target: DeployTarget,
        path: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let mut config = if resolved.is_file() {
            Self::read_file(&resolved)?
        } else {
            variants::builtin(target).ok_or_else(|| {
                ConfigError::Io(format!(
                    "config file not found for target {target}: {}",
                    resolved.display()
                ))
            })?
        };
        config.apply_env_overrides()?;
        if config.production != matches!(target, DeployTarget::Production) {
            return Err(ConfigError::Invalid(format!(
                "production={} contradicts deploy target {target}",
                config.production
            )));
        }
        config.validate()?;
        Ok(config)
    }

    /// Applies `COFFEESHOP_*` overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an override value cannot be parsed.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|key| env::var(key).ok())
    }

    /// Applies overrides from an arbitrary lookup.
    ///
    /// The lookup receives the `COFFEESHOP_*` variable names and returns the
    /// replacement value, if any. Values are validated later by
    /// [`Self::validate`]; only the `production` flag is parsed here.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an override value cannot be parsed.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_PRODUCTION) {
            self.production = parse_bool_override(ENV_PRODUCTION, &value)?;
        }
        if let Some(value) = lookup(ENV_API_SERVER_URL) {
            self.api_server_url = value;
        }
        if let Some(value) = lookup(ENV_AUTH_DOMAIN_PREFIX) {
            self.auth.domain_prefix = value;
        }
        if let Some(value) = lookup(ENV_AUTH_AUDIENCE) {
            self.auth.audience = value;
        }
        if let Some(value) = lookup(ENV_AUTH_CLIENT_ID) {
            self.auth.client_id = value;
        }
        if let Some(value) = lookup(ENV_AUTH_CALLBACK_URL) {
            self.auth.callback_url = value;
        }
        Ok(())
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_http_url("api_server_url", &self.api_server_url)?;
        self.auth.validate()?;
        if self.production {
            self.validate_production()?;
        }
        Ok(())
    }

    /// Enforces the stricter rules for production deployments.
    fn validate_production(&self) -> Result<(), ConfigError> {
        require_https_non_loopback("api_server_url", &self.api_server_url)?;
        require_https_non_loopback("auth.callback_url", &self.auth.callback_url)?;
        if self.auth.client_id == variants::DEV_AUTH_CLIENT_ID {
            return Err(ConfigError::Invalid(
                "auth.client_id must not reuse the development sample when production=true"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Reads and parses a configuration file with size limits.
    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        let bytes = fs::read(path).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))
    }
}

impl AuthConfig {
    /// Validates the Auth0 settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a field is empty, overlong, or
    /// malformed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_domain_prefix(&self.domain_prefix)?;
        require_non_empty("auth.audience", &self.audience)?;
        require_non_empty("auth.client_id", &self.client_id)?;
        validate_http_url("auth.callback_url", &self.callback_url)?;
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from the argument or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        if component.as_os_str().len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(
                "config path component exceeds max length".to_string(),
            ));
        }
    }
    Ok(())
}

/// Parses a boolean override value.
fn parse_bool_override(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(ConfigError::Invalid(format!(
            "{key} must be true/false/1/0, got {other}"
        ))),
    }
}

/// Requires a plain string field to be non-empty and within limits.
fn require_non_empty(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if value.len() > MAX_FIELD_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    Ok(())
}

/// Validates an absolute http(s) URL field.
fn validate_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if value.len() > MAX_URL_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    let url = Url::parse(value)
        .map_err(|err| ConfigError::Invalid(format!("{field} is not a valid URL: {err}")))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Invalid(format!("{field} must use http or https")));
    }
    if url.host().is_none() {
        return Err(ConfigError::Invalid(format!("{field} must include a host")));
    }
    Ok(())
}

/// Validates the Auth0 domain prefix charset.
fn validate_domain_prefix(value: &str) -> Result<(), ConfigError> {
    require_non_empty("auth.domain_prefix", value)?;
    let valid = value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.');
    if !valid {
        return Err(ConfigError::Invalid(
            "auth.domain_prefix must be a bare domain prefix (letters, digits, '-', '.')"
                .to_string(),
        ));
    }
    Ok(())
}

/// Requires an https URL with a non-loopback host.
fn require_https_non_loopback(field: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|err| ConfigError::Invalid(format!("{field} is not a valid URL: {err}")))?;
    if url.scheme() != "https" {
        return Err(ConfigError::Invalid(format!(
            "{field} must use https when production=true"
        )));
    }
    let loopback = match url.host() {
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(ip)) => ip.is_loopback(),
        Some(Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    };
    if loopback {
        return Err(ConfigError::Invalid(format!(
            "{field} must not use a loopback host when production=true"
        )));
    }
    Ok(())
}
