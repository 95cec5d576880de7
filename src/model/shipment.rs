//! The Shipment domain type: the logistics projection of an order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Logical delivery progress stage, used both for the shipment status and
/// for tagging individual tracking events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStage {
    OrderReceived,
    OrderPicked,
    OrderInTransit,
    OutForDelivery,
    ReachedDestination,
}

impl fmt::Display for DeliveryStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeliveryStage::OrderReceived => "Order Received",
            DeliveryStage::OrderPicked => "Order Picked",
            DeliveryStage::OrderInTransit => "Order in Transit",
            DeliveryStage::OutForDelivery => "Out For Delivery",
            DeliveryStage::ReachedDestination => "Reached Destination",
        };
        write!(f, "{s}")
    }
}

/// One entry in a shipment's tracking history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingEvent {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub location: String,
    pub status: String,
    pub description: String,
    pub stage: DeliveryStage,
}

/// The tracking projection of an [`Order`](crate::model::Order).
///
/// Exactly one shipment exists per order, keyed `SHP-<orderId>`. The
/// tracking sequence is non-decreasing in progress order and its final
/// event's stage equals the shipment's own status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: String,
    pub tracking_number: String,
    pub order_id: String,
    pub origin: String,
    pub destination: String,
    pub status: DeliveryStage,
    pub carrier: String,
    pub service: String,
    pub eta: DateTime<Utc>,
    pub last_update: String,
    pub progress: u8,
    pub tracking: Vec<TrackingEvent>,
}
