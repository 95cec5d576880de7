//! Shipment-specific store logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::{OrderClient, ShipmentClient};
use crate::framework::StoreActor;
use crate::model::Shipment;

/// Creates a new shipment store actor and its client.
///
/// The client needs the order client because shipment display state is
/// derived live from the parent order on read.
pub fn new(order_client: OrderClient) -> (StoreActor<Shipment>, ShipmentClient) {
    let (actor, generic_client) = StoreActor::new(32);
    let client = ShipmentClient::new(generic_client, order_client);
    (actor, client)
}
