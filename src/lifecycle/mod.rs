//! Runtime orchestration and lifecycle management.
//!
//! This module contains the infrastructure for managing the dashboard's
//! runtime environment:
//!
//! - **Store lifecycle management**: starting, seeding, and shutting down
//!   the store actors
//! - **Observability setup**: initializing tracing and logging
//!
//! # Main Components
//!
//! - [`Dashboard`] - The orchestrator that generates the fixture and manages
//!   all store actors
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod dashboard;
pub mod tracing;

pub use dashboard::*;
pub use self::tracing::*;
