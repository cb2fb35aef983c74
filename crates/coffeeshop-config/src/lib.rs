// coffeeshop-config/src/lib.rs
// ============================================================================
// Module: Coffeeshop Config Library
// Description: Canonical config model, validation, and artifact generation.
// Purpose: Single source of truth for coffeeshop.toml semantics.
// Dependencies: serde, toml, url
// ============================================================================

//! ## Overview
//! `coffeeshop-config` defines the canonical environment configuration for
//! the coffeeshop application: the backend API base URL and the Auth0 tenant
//! settings the front end needs to run a login flow. It provides strict,
//! fail-closed validation and deterministic generators for the config
//! schema, example, and docs.
//!
//! Security posture: config inputs are untrusted; the built-in development
//! variant is a sample and is rejected for production deployments.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod docs;
pub mod examples;
pub mod schema;
pub mod variants;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use docs::config_docs_markdown;
pub use docs::verify_config_docs;
pub use docs::write_config_docs;
pub use examples::config_toml_example;
pub use schema::config_schema;
pub use variants::builtin;
