// coffeeshop-config/src/schema.rs
// ============================================================================
// Module: Config Schema
// Description: JSON schema builder for coffeeshop.toml.
// Purpose: Provide canonical validation schema for config artifacts.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! This module defines the JSON Schema for the coffeeshop environment
//! configuration. The schema is generated from the canonical config model
//! and is used by tooling, docs, and validation pipelines.

use serde_json::Value;
use serde_json::json;

use crate::config::MAX_FIELD_LENGTH;
use crate::config::MAX_URL_LENGTH;

/// Returns the JSON schema for `coffeeshop.toml`.
#[must_use]
pub fn config_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "coffeeshop://contract/schemas/config.schema.json",
        "title": "Coffeeshop Environment Configuration",
        "description": "Environment configuration for the coffeeshop front end.",
        "type": "object",
        "properties": {
            "production": {
                "type": "boolean",
                "default": false,
                "description": "Build-variant flag distinguishing production deployments."
            },
            "api_server_url": {
                "type": "string",
                "format": "uri",
                "maxLength": MAX_URL_LENGTH,
                "default": "",
                "description": "Base URL of the backend API server."
            },
            "auth": auth_config_schema()
        },
        "additionalProperties": false
    })
}

// ============================================================================
// SECTION: Auth Configuration
// ============================================================================

/// Schema for the `[auth]` section.
fn auth_config_schema() -> Value {
    json!({
        "type": "object",
        "description": "Auth0 tenant settings consumed by the login flow.",
        "properties": {
            "domain_prefix": {
                "type": "string",
                "pattern": "^[A-Za-z0-9.-]+$",
                "maxLength": MAX_FIELD_LENGTH,
                "default": "",
                "description": "Auth0 tenant domain prefix."
            },
            "audience": {
                "type": "string",
                "maxLength": MAX_FIELD_LENGTH,
                "default": "",
                "description": "Audience identifier of the protected API."
            },
            "client_id": {
                "type": "string",
                "maxLength": MAX_FIELD_LENGTH,
                "default": "",
                "description": "Client identifier of the registered application."
            },
            "callback_url": {
                "type": "string",
                "format": "uri",
                "maxLength": MAX_URL_LENGTH,
                "default": "",
                "description": "Redirect target after the login flow completes."
            }
        },
        "additionalProperties": false
    })
}
