//! Generic actor framework for in-memory keyed stores.
//!
//! This module provides the core building blocks for type-safe store actors
//! that own a keyed collection plus an optional piece of view state.
//!
//! # Main Components
//!
//! - [`StoreEntity`] - Trait that record types implement to be stored
//! - [`StoreActor`] - Generic actor that owns a collection and its view state
//! - [`StoreClient`] - Typed client for talking to a store actor
//! - [`StoreError`] - Channel-level error type
//!
//! # Testing
//!
//! See the [`mock`] module for utilities to test clients without spawning
//! full store actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
