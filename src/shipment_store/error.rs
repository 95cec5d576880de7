//! Error types for the shipment store.

use crate::framework::StoreError;
use crate::order_store::OrderStoreError;
use thiserror::Error;

/// Errors that can occur when talking to the shipment store.
///
/// The live-derivation read path also consults the order store, so its
/// communication errors can surface here.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShipmentStoreError {
    /// An error occurred while communicating with the store actor.
    #[error("Shipment store communication error: {0}")]
    StoreCommunication(String),

    /// The parent order could not be fetched for live derivation.
    #[error("Order lookup failed: {0}")]
    OrderLookup(#[from] OrderStoreError),
}

impl From<StoreError> for ShipmentStoreError {
    fn from(e: StoreError) -> Self {
        ShipmentStoreError::StoreCommunication(e.to_string())
    }
}
