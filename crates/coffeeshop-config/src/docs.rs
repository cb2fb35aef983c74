// coffeeshop-config/src/docs.rs
// ============================================================================
// Module: Config Docs Generator
// Description: Markdown generator for coffeeshop.toml documentation.
// Purpose: Keep config docs in sync with schema and validation.
// Dependencies: serde_json, std
// ============================================================================

//! ## Overview
//! Generates the `coffeeshop.toml` field reference from the canonical
//! configuration schema. The output is deterministic; drift against a
//! committed copy is detected by [`verify_config_docs`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::schema::config_schema;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default output path for generated configuration docs.
const DOCS_PATH: &str = "Docs/configuration/coffeeshop.toml.md";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when generating or verifying config docs.
#[derive(Debug, Error)]
pub enum DocsError {
    /// IO failure while writing docs.
    #[error("docs io error: {0}")]
    Io(String),
    /// Schema traversal or rendering error.
    #[error("docs schema error: {0}")]
    Schema(String),
    /// Generated docs do not match the committed file.
    #[error("docs drift: {0}")]
    Drift(String),
}

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Generates the configuration markdown documentation.
///
/// # Errors
///
/// Returns [`DocsError`] when schema traversal fails.
pub fn config_docs_markdown() -> Result<String, DocsError> {
    let schema = config_schema();
    let mut out = String::new();

    out.push_str("<!--\n");
    out.push_str("Docs/configuration/coffeeshop.toml.md\n");
    out.push_str("============================================================================\n");
    out.push_str("Document: Coffeeshop Environment Configuration\n");
    out.push_str("Description: Reference for coffeeshop.toml configuration fields.\n");
    out.push_str("Purpose: Document the API server URL and Auth0 tenant settings.\n");
    out.push_str("Generated: This file is auto-generated; do not edit manually.\n");
    out.push_str("============================================================================\n");
    out.push_str("-->\n\n");

    out.push_str("# coffeeshop.toml Configuration\n\n");
    out.push_str("## Overview\n\n");
    out.push_str("`coffeeshop.toml` configures the backend API base URL and the Auth0\n");
    out.push_str("tenant settings the front end needs for its login flow. All inputs are\n");
    out.push_str("validated and fail closed on errors. Every field can be overridden via\n");
    out.push_str("`COFFEESHOP_*` environment variables.\n\n");

    out.push_str("## Sections\n\n");

    for section in build_sections() {
        out.push_str("### ");
        out.push_str(section.heading);
        out.push_str("\n\n");
        if !section.description.is_empty() {
            out.push_str(section.description);
            out.push_str("\n\n");
        }
        let table = render_table(&schema, &section).map_err(DocsError::Schema)?;
        out.push_str(&table);
        if let Some(extra) = section.extra {
            out.push('\n');
            out.push_str(extra);
            out.push('\n');
        }
        out.push('\n');
    }

    out.push_str("## Environment Overrides\n\n");
    out.push_str("| Variable | Overrides |\n");
    out.push_str("| --- | --- |\n");
    out.push_str("| `COFFEESHOP_PRODUCTION` | `production` (true/false/1/0) |\n");
    out.push_str("| `COFFEESHOP_API_SERVER_URL` | `api_server_url` |\n");
    out.push_str("| `COFFEESHOP_AUTH0_DOMAIN_PREFIX` | `auth.domain_prefix` |\n");
    out.push_str("| `COFFEESHOP_AUTH0_AUDIENCE` | `auth.audience` |\n");
    out.push_str("| `COFFEESHOP_AUTH0_CLIENT_ID` | `auth.client_id` |\n");
    out.push_str("| `COFFEESHOP_AUTH0_CALLBACK_URL` | `auth.callback_url` |\n");

    Ok(out)
}

/// Writes the generated docs to disk.
///
/// # Errors
///
/// Returns [`DocsError`] when generation or writing fails.
pub fn write_config_docs(path: Option<&Path>) -> Result<(), DocsError> {
    let path = path.unwrap_or_else(|| Path::new(DOCS_PATH));
    let content = config_docs_markdown()?;
    fs::write(path, content.as_bytes()).map_err(|err| DocsError::Io(err.to_string()))
}

/// Verifies the on-disk docs match the generated output.
///
/// # Errors
///
/// Returns [`DocsError`] when the docs drift.
pub fn verify_config_docs(path: Option<&Path>) -> Result<(), DocsError> {
    let path = path.unwrap_or_else(|| Path::new(DOCS_PATH));
    let content = config_docs_markdown()?;
    let existing = fs::read_to_string(path).map_err(|err| DocsError::Io(err.to_string()))?;
    if existing != content {
        return Err(DocsError::Drift(format!("docs mismatch: {}", path.display())));
    }
    Ok(())
}

// ============================================================================
// SECTION: Section Specs
// ============================================================================

/// Specification for one rendered documentation section.
#[derive(Clone)]
struct SectionSpec {
    /// Section heading, including TOML table name.
    heading: &'static str,
    /// Section description displayed beneath the heading.
    description: &'static str,
    /// Schema property path used to resolve the section.
    path: &'static [&'static str],
    /// Ordered field list rendered in the docs table.
    fields: &'static [&'static str],
    /// Optional additional text appended after the table.
    extra: Option<&'static str>,
}

/// Returns the ordered documentation sections.
fn build_sections() -> Vec<SectionSpec> {
    vec![
        SectionSpec {
            heading: "Top-Level",
            description: "Deployment variant flag and backend API base URL.",
            path: &[],
            fields: &["production", "api_server_url"],
            extra: Some(
                "The development variant sets `api_server_url = \
                 \"http://127.0.0.1:5000\"`.",
            ),
        },
        SectionSpec {
            heading: "[auth]",
            description: "Auth0 tenant settings consumed by the login flow.",
            path: &["auth"],
            fields: &["domain_prefix", "audience", "client_id", "callback_url"],
            extra: Some(
                "When `production = true`, `callback_url` must use https on a \
                 non-loopback host and `client_id` must not reuse the development \
                 sample.",
            ),
        },
    ]
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Resolves the schema object at a property path.
fn schema_at<'a>(schema: &'a Value, path: &[&str]) -> Result<&'a Value, String> {
    let mut current = schema;
    for segment in path {
        current = current
            .get("properties")
            .and_then(|props| props.get(segment))
            .ok_or_else(|| format!("schema path missing: {segment}"))?;
    }
    Ok(current)
}

/// Renders the field table for one section.
fn render_table(schema: &Value, section: &SectionSpec) -> Result<String, String> {
    let section_schema = schema_at(schema, section.path)?;
    let props = section_schema
        .get("properties")
        .and_then(|value| value.as_object())
        .ok_or_else(|| "schema properties missing".to_string())?;

    let mut seen = BTreeSet::new();
    for field in section.fields {
        if !props.contains_key(*field) {
            return Err(format!("missing field in schema: {field}"));
        }
        seen.insert(*field);
    }
    for key in props.keys() {
        // Nested objects are documented by their own section.
        let is_object = props
            .get(key)
            .and_then(|value| value.get("type"))
            .and_then(Value::as_str)
            .is_some_and(|ty| ty == "object");
        if !seen.contains(key.as_str()) && !is_object {
            return Err(format!("undocumented schema field: {key}"));
        }
    }

    let mut out = String::new();
    out.push_str("| Field | Type | Default | Notes |\n");
    out.push_str("| --- | --- | --- | --- |\n");
    for field in section.fields {
        let field_schema = props
            .get(*field)
            .ok_or_else(|| format!("missing field in schema: {field}"))?;
        let ty = field_schema
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| format!("missing type for field: {field}"))?;
        let default = field_schema
            .get("default")
            .map_or_else(|| "(none)".to_string(), render_default);
        let notes = field_schema
            .get("description")
            .and_then(Value::as_str)
            .ok_or_else(|| format!("missing description for field: {field}"))?;
        out.push_str(&format!("| `{field}` | {ty} | {default} | {notes} |\n"));
    }
    Ok(out)
}

/// Renders a schema default value for the docs table.
fn render_default(value: &Value) -> String {
    match value {
        Value::String(text) if text.is_empty() => "(required)".to_string(),
        Value::String(text) => format!("`\"{text}\"`"),
        other => format!("`{other}`"),
    }
}
