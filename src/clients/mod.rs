//! Typed clients over the generic store framework.
//!
//! Raw message passing is never exposed to the rest of the app; each store
//! gets a domain-specific client that provides type safety and hides the
//! channel plumbing.

pub mod document_client;
pub mod order_client;
pub mod shipment_client;
pub mod store_handle;

pub use document_client::DocumentClient;
pub use order_client::OrderClient;
pub use shipment_client::ShipmentClient;
pub use store_handle::StoreHandle;
