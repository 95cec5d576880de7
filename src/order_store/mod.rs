//! Order-specific store logic and entity implementation.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::framework::StoreActor;
use crate::model::Order;

/// Creates a new order store actor and its client.
pub fn new() -> (StoreActor<Order>, OrderClient) {
    let (actor, generic_client) = StoreActor::new(32);
    let client = OrderClient::new(generic_client);
    (actor, client)
}
