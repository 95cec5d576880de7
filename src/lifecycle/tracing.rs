//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for the store system.
//!
//! ## Overview
//!
//! [`setup_tracing`] initializes structured logging with the `tracing`
//! crate. The compact format hides the crate/module prefix
//! (`with_target(false)`); the store actors tag every line with an
//! `entity_type` field instead.
//!
//! ## What Gets Traced
//!
//! - **Store lifecycle**: startup, seeding, shutdown, and final sizes
//! - **Mutations**: replace-all, upserts, and patches at `info!` with record
//!   ids and collection sizes; patch misses at `warn!`
//! - **Reads and payloads**: gets, snapshots, and view operations at
//!   `debug!` with full payloads where useful
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo test
//!
//! # Show full payloads (filter updates, patches)
//! RUST_LOG=debug cargo test
//!
//! # Filter to the framework only
//! RUST_LOG=exportedge_core::framework=debug cargo test
//! ```
//!
//! With `RUST_LOG=info` a label issuance looks like:
//!
//! ```text
//! INFO Issuing shipping label order_id="ORD334256" doc_id="DOC-ORD334256-LBL"
//! INFO Upserted entity_type="Document" id="DOC-ORD334256-LBL" replaced=false size=91
//! ```
//!
//! and re-issuing the same label shows `replaced=true` with an unchanged
//! collection size, which is the overwrite-not-duplicate contract made
//! visible in the logs.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline
        .init();
}
