// coffeeshop-cli/src/lib.rs
// ============================================================================
// Module: Coffeeshop CLI Library
// Description: Shared helpers for the coffeeshop binary.
// Purpose: Expose the i18n catalog to the binary and its tests.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Library side of the coffeeshop CLI. The binary routes all user-facing
//! strings through the [`t!`](crate::t) macro backed by the [`i18n`]
//! catalog.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod i18n;
