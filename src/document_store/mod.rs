//! Document-specific store logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::DocumentClient;
use crate::framework::StoreActor;
use crate::model::Document;

/// Creates a new document store actor and its client.
pub fn new() -> (StoreActor<Document>, DocumentClient) {
    let (actor, generic_client) = StoreActor::new(32);
    let client = DocumentClient::new(generic_client);
    (actor, client)
}
