//! Error types for the document store.

use crate::framework::StoreError;
use thiserror::Error;

/// Errors that can occur when talking to the document store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DocumentStoreError {
    /// An error occurred while communicating with the store actor.
    #[error("Document store communication error: {0}")]
    StoreCommunication(String),
}

impl From<StoreError> for DocumentStoreError {
    fn from(e: StoreError) -> Self {
        DocumentStoreError::StoreCommunication(e.to_string())
    }
}
