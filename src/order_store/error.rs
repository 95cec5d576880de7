//! Error types for the order store.

use crate::framework::StoreError;
use thiserror::Error;

/// Errors that can occur when talking to the order store.
///
/// Store operations themselves are total: a status patch on a missing id is
/// a silent no-op, not an error. The only failure surface is the actor
/// channel.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderStoreError {
    /// An error occurred while communicating with the store actor.
    #[error("Order store communication error: {0}")]
    StoreCommunication(String),
}

impl From<StoreError> for OrderStoreError {
    fn from(e: StoreError) -> Self {
        OrderStoreError::StoreCommunication(e.to_string())
    }
}
