use crate::clients::store_handle::StoreHandle;
use crate::derive;
use crate::document_store::DocumentStoreError;
use crate::framework::{StoreClient, StoreError};
use crate::model::{Document, Order};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{info, instrument};

/// Client for the document store.
///
/// Documents are add-only: the generated Invoice/Shipping/Customs trio is
/// seeded at startup and a shipping label may be appended later. Nothing is
/// ever mutated or deleted.
#[derive(Clone)]
pub struct DocumentClient {
    inner: StoreClient<Document>,
}

impl DocumentClient {
    pub fn new(inner: StoreClient<Document>) -> Self {
        Self { inner }
    }

    /// Seeds the store with the generated document collection.
    #[instrument(skip(self, documents))]
    pub async fn set_documents(
        &self,
        documents: std::collections::HashMap<String, Document>,
    ) -> Result<(), DocumentStoreError> {
        info!(count = documents.len(), "Sending set_documents to store");
        self.inner.replace_all(documents).await.map_err(Into::into)
    }

    /// Issues the shipping label for an order and appends it to the store.
    ///
    /// The label is keyed `DOC-<orderId>-LBL`, so issuing it again for the
    /// same order overwrites the existing label rather than duplicating it.
    /// The terminal celebratory effects and delayed navigation of the label
    /// workflow are view-layer concerns; only the document is recorded here.
    #[instrument(skip(self, order), fields(order_id = %order.order_id))]
    pub async fn add_shipping_label(
        &self,
        order: &Order,
        issued_at: DateTime<Utc>,
    ) -> Result<Document, DocumentStoreError> {
        let label = derive::shipping_label(order, issued_at);
        info!(doc_id = %label.id, "Issuing shipping label");
        self.inner.upsert(label.clone()).await?;
        Ok(label)
    }

    /// All documents attached to one order, sorted by document key for a
    /// stable rendering order.
    #[instrument(skip(self))]
    pub async fn documents_for_order(
        &self,
        order_id: &str,
    ) -> Result<Vec<Document>, DocumentStoreError> {
        let mut docs: Vec<Document> = self
            .inner
            .snapshot()
            .await?
            .into_values()
            .filter(|d| d.order_id == order_id)
            .collect();
        docs.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(docs)
    }
}

#[async_trait]
impl StoreHandle<Document> for DocumentClient {
    type Error = DocumentStoreError;

    fn inner(&self) -> &StoreClient<Document> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        e.into()
    }
}
