use crate::clients::store_handle::StoreHandle;
use crate::clients::OrderClient;
use crate::derive;
use crate::framework::{StoreClient, StoreError};
use crate::model::Shipment;
use crate::shipment_store::ShipmentStoreError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the shipment store.
///
/// The stored shipment is a generation-time snapshot. The display status,
/// progress, and final tracking event are re-derived from the parent order
/// on every [`for_order`](ShipmentClient::for_order) read, so a later order
/// status change is reflected without mutating the shipment store.
#[derive(Clone)]
pub struct ShipmentClient {
    inner: StoreClient<Shipment>,
    orders: OrderClient,
}

impl ShipmentClient {
    pub fn new(inner: StoreClient<Shipment>, orders: OrderClient) -> Self {
        Self { inner, orders }
    }

    /// Seeds the store with the generated shipment collection.
    #[instrument(skip(self, shipments))]
    pub async fn set_shipments(
        &self,
        shipments: std::collections::HashMap<String, Shipment>,
    ) -> Result<(), ShipmentStoreError> {
        self.inner.replace_all(shipments).await.map_err(Into::into)
    }

    /// The shipment for an order, with display state derived live from the
    /// order's current status.
    ///
    /// If the parent order cannot be found the stored snapshot is returned
    /// as-is; a missing shipment yields `None`.
    #[instrument(skip(self))]
    pub async fn for_order(
        &self,
        order_id: &str,
    ) -> Result<Option<Shipment>, ShipmentStoreError> {
        let shipment_id = format!("SHP-{order_id}");
        let Some(mut shipment) = self.inner.get(shipment_id).await? else {
            return Ok(None);
        };

        match self.orders.get(order_id.to_string()).await? {
            Some(order) => {
                let progress = derive::delivery_progress(order.status);
                debug!(stage = %progress.stage, percent = progress.percent, "Derived shipment state");
                shipment.status = progress.stage;
                shipment.progress = progress.percent;
                shipment.last_update = progress.note.to_string();
                if let Some(last) = shipment.tracking.last_mut() {
                    last.stage = progress.stage;
                    last.status = progress.stage.to_string();
                    last.description = progress.note.to_string();
                }
                Ok(Some(shipment))
            }
            None => {
                debug!(order_id, "Parent order missing, serving stored snapshot");
                Ok(Some(shipment))
            }
        }
    }
}

#[async_trait]
impl StoreHandle<Shipment> for ShipmentClient {
    type Error = ShipmentStoreError;

    fn inner(&self) -> &StoreClient<Shipment> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        e.into()
    }
}
