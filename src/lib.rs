//! # ExportEdge Core
//!
//! > **The in-memory state model behind an order-tracking dashboard.**
//!
//! This crate holds the client-side data layer of a logistics dashboard: the
//! order, document, and shipment collections, the view state of the order
//! list, and the pure rules that derive display values from them. Everything
//! is memory-resident and single-session; there is no server, no persistence,
//! and no network protocol. Rendering, routing, and styling live elsewhere.
//!
//! ## 🏗️ Design Philosophy
//!
//! Each collection is owned by one store actor running in its own Tokio task.
//! Actors process messages sequentially, so every mutation (a wholesale
//! reseed, a status patch, a filter merge) is observably atomic without any
//! locks. Typed clients wrap the message passing so the rest of the app never
//! sees a channel.
//!
//! Two deliberate choices shape the data model:
//!
//! - **Explicit initialization**: the dataset is generated once by
//!   [`Dashboard::initialize`](lifecycle::Dashboard::initialize) from a
//!   config and an RNG seed, then handed to the stores by ownership. No
//!   module-level fixture state, and a fixed seed reproduces the dataset.
//! - **Live derivation**: a shipment's display status and progress are a
//!   pure function of its parent order's status, recomputed on every read
//!   ([`derive`]), so an order status change shows up in tracking without a
//!   second mutation path.
//!
//! ## 🚀 Core Concepts
//!
//! ### Generics: one loop, three stores
//! You'll see `StoreActor<T: StoreEntity>` everywhere. The message loop is
//! written **once** and reused for orders, documents, and shipments; each
//! store keeps full type safety through associated types (an order patch
//! cannot reach the document store).
//!
//! ### Totality: misses are not errors
//! Store operations never fail. Patching an unknown order id is a silent
//! no-op by contract, and the address-based destination heuristic degrades
//! instead of erroring. The only error surface is a closed actor channel.
//!
//! ### Mocking: testing without pain
//! `MockClient` scripts a store's answers without spawning the real actor.
//! See the [`framework::mock`] module.
//!
//! ## 🗺️ Module Tour
//!
//! - [`framework`] — the engine: generic store actor, client, mock.
//! - [`model`] — the domain records and the order-list view state.
//! - [`derive`] — pure derivation rules (progress mapping, document keys and
//!   URLs, destination heuristic).
//! - [`fixture`] — dataset generation from a config and an injected RNG.
//! - [`order_store`], [`document_store`], [`shipment_store`] — the entity
//!   implementations and store factories.
//! - [`clients`] — `OrderClient`, `DocumentClient`, `ShipmentClient`.
//! - [`lifecycle`] — the [`Dashboard`](lifecycle::Dashboard) orchestrator
//!   and tracing setup.
//! - [`schedule`] — cancellable deferred actions (the label workflow's
//!   delayed navigation, minus the confetti).
//!
//! ## 🚀 Quick Start
//!
//! ```ignore
//! use exportedge_core::fixture::FixtureConfig;
//! use exportedge_core::lifecycle::Dashboard;
//! use exportedge_core::model::OrderStatus;
//!
//! let dashboard = Dashboard::initialize(FixtureConfig::default(), 42).await?;
//! dashboard.orders.update_order_status("ORD334256", OrderStatus::Shipped).await?;
//! let tracking = dashboard.shipments.for_order("ORD334256").await?;
//! dashboard.shutdown().await?;
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod derive;
pub mod document_store;
pub mod fixture;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_store;
pub mod schedule;
pub mod shipment_store;
