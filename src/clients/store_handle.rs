use crate::framework::{StoreClient, StoreEntity, StoreError};
use async_trait::async_trait;
use std::collections::HashMap;

/// Trait for store-specific clients to inherit the standard read operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// the reads every store exposes: point `get` and whole-collection
/// `snapshot`.
#[async_trait]
pub trait StoreHandle<T: StoreEntity>: Send + Sync {
    /// The store-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<T>;

    /// Map framework errors to the specific store error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a record by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch the whole keyed collection.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<HashMap<T::Id, T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }
}
