use crate::clients::store_handle::StoreHandle;
use crate::framework::{StoreClient, StoreError};
use crate::model::{FilterUpdate, Order, OrderPatch, OrderStatus, OrderViewState};
use crate::order_store::{OrderStoreError, OrderViewOp};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// Client for the order store.
///
/// Covers the full mutation surface of the order list: wholesale seeding,
/// in-place status updates, and the filter/pagination view state. All
/// operations are synchronous from the store's point of view and never fail
/// except on a closed actor channel.
#[derive(Clone)]
pub struct OrderClient {
    inner: StoreClient<Order>,
}

impl OrderClient {
    pub fn new(inner: StoreClient<Order>) -> Self {
        Self { inner }
    }

    /// Replaces the entire order collection. Last writer wins; no validation
    /// beyond the type shape.
    #[instrument(skip(self, orders))]
    pub async fn set_orders(
        &self,
        orders: HashMap<String, Order>,
    ) -> Result<(), OrderStoreError> {
        info!(count = orders.len(), "Sending set_orders to store");
        self.inner.replace_all(orders).await.map_err(Into::into)
    }

    /// Overwrites the status of an existing order in place.
    ///
    /// An unknown `order_id` is a silent no-op, not an error: the store is
    /// left untouched and the call still succeeds. This idempotent-miss
    /// behavior is intentional.
    #[instrument(skip(self))]
    pub async fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<(), OrderStoreError> {
        let applied = self
            .inner
            .patch(order_id.to_string(), OrderPatch { status })
            .await?;
        if !applied {
            debug!(order_id, "Unknown order id, status update skipped");
        }
        Ok(())
    }

    /// Merges the given fields into the current filters and resets the
    /// current page to 1. Returns the view state as produced by this merge.
    #[instrument(skip(self))]
    pub async fn set_filters(
        &self,
        update: FilterUpdate,
    ) -> Result<OrderViewState, OrderStoreError> {
        debug!(?update, "set_filters called");
        self.inner
            .apply_view(OrderViewOp::SetFilters(update))
            .await
            .map_err(Into::into)
    }

    /// Sets the current page unconditionally. The store performs no bounds
    /// check against the result-set size.
    #[instrument(skip(self))]
    pub async fn set_page(&self, page: u32) -> Result<OrderViewState, OrderStoreError> {
        self.inner
            .apply_view(OrderViewOp::SetPage(page))
            .await
            .map_err(Into::into)
    }

    /// Resets filters to the empty default and the current page to 1.
    #[instrument(skip(self))]
    pub async fn clear_filters(&self) -> Result<OrderViewState, OrderStoreError> {
        self.inner
            .apply_view(OrderViewOp::ClearFilters)
            .await
            .map_err(Into::into)
    }

    /// Current filter and pagination state.
    pub async fn view(&self) -> Result<OrderViewState, OrderStoreError> {
        self.inner.view().await.map_err(Into::into)
    }
}

#[async_trait]
impl StoreHandle<Order> for OrderClient {
    type Error = OrderStoreError;

    fn inner(&self) -> &StoreClient<Order> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        e.into()
    }
}
