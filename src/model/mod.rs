//! Pure data structures (DTOs) managed by the [`StoreActor`](crate::framework::StoreActor).

pub mod document;
pub mod order;
pub mod shipment;
pub mod view;

pub use document::*;
pub use order::*;
pub use shipment::*;
pub use view::*;
