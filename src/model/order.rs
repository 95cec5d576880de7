//! The Order domain type and its lifecycle status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fulfillment status of an [`Order`].
///
/// The intended lifecycle is `Open -> Shipped -> Delivered`. The fixture
/// generator assigns `Delivered` directly to historical orders, so the
/// store does not enforce monotonic transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Open,
    Shipped,
    Delivered,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Open => "OPEN",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
        };
        write!(f, "{s}")
    }
}

/// The single product line carried by an order.
///
/// Dimensions and weight are display strings; the dashboard never
/// computes with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductLine {
    pub name: String,
    pub dimensions: String,
    pub weight: String,
    pub quantity: u32,
}

/// A single customer purchase tracked through fulfillment states.
///
/// `order_id` is globally unique within the store. Orders are created by
/// the fixture generator, mutated only via the status patch, and never
/// deleted during a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub placed_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub product: ProductLine,
    pub customer_address: String,
    pub warehouse_address: String,
    pub seller_address: String,
}

impl Order {
    pub fn new(
        order_id: impl Into<String>,
        placed_at: DateTime<Utc>,
        status: OrderStatus,
        product: ProductLine,
        customer_address: impl Into<String>,
        warehouse_address: impl Into<String>,
        seller_address: impl Into<String>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            placed_at,
            status,
            product,
            customer_address: customer_address.into(),
            warehouse_address: warehouse_address.into(),
            seller_address: seller_address.into(),
        }
    }
}

/// Field-level patch applied to a stored order.
///
/// Only the status is mutable; every other field is fixed at generation
/// time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderPatch {
    pub status: OrderStatus,
}
