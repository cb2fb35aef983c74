// coffeeshop-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payloads.
// Purpose: Deterministic examples for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical example for the coffeeshop configuration. The example is the
//! built-in development variant and is kept in sync with schema and docs by
//! tests.

/// Returns a canonical example `coffeeshop.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"production = false
api_server_url = "http://127.0.0.1:5000"

[auth]
domain_prefix = "dev-k73xuqib8s3gch5c.us"
audience = "coffee"
client_id = "kZfgJuxb4n2bo7yBN1eqUeKdwDweiLz5"
callback_url = "http://localhost:4200"
"#,
    )
}
