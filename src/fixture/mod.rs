//! Fixture generation: synthesizes the order/document/shipment dataset the
//! dashboard runs on.
//!
//! Generation is explicit and pure over its inputs: [`generate`] takes a
//! [`FixtureConfig`] and an injected random source, and a fixed seed
//! reproduces the full dataset. There is no module-level mutable state and
//! generation runs exactly once per process, from
//! [`Dashboard::initialize`](crate::lifecycle::Dashboard::initialize).

use crate::derive::{self, GENERATED_DOC_SIZE};
use crate::model::{
    DeliveryStage, Document, DocumentStatus, DocumentType, Order, OrderStatus, ProductLine,
    Shipment, TrackingEvent,
};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use std::collections::HashMap;
use std::ops::{Range, RangeInclusive};
use uuid::Uuid;

/// Fixed product catalog past orders draw from.
pub const PRODUCTS: [(&str, &str, &str); 4] = [
    ("iPhone 15 Pro Max", "15.9 x 7.67 x 0.83 cm", "221g"),
    ("MacBook Pro M3", "30.41 x 21.24 x 1.55 cm", "1.55kg"),
    ("iPad Pro 12.9\"", "28.06 x 21.49 x 0.64 cm", "682g"),
    ("Apple Watch Series 9", "4.51 x 3.84 x 1.07 cm", "51.5g"),
];

/// Fixed destination address list past orders draw from.
pub const DESTINATIONS: [&str; 3] = [
    "John Smith, 123 Tech Plaza, New York, NY 10001, USA",
    "Emma Watson, 45 Innovation Street, London, SW1A 1AA, UK",
    "James Cook, 78 Digital Avenue, Sydney, NSW 2000, Australia",
];

/// The single fulfillment center every order ships from.
pub const WAREHOUSE_ADDRESS: &str =
    "ExportEdge Fulfillment Center, Sector 5, MIDC, Andheri East, Mumbai, 400093, India";

/// Carrier set shipments draw from.
pub const CARRIERS: [&str; 4] = ["DHL", "FedEx", "UPS", "Bluedart"];

/// Shipping service shown on every shipment.
pub const SHIPMENT_SERVICE: &str = "Express Air Freight";

/// Origin display string for every shipment.
pub const SHIPMENT_ORIGIN: &str = "Mumbai, India";

/// Id of the designated current (OPEN) order.
pub const CURRENT_ORDER_ID: &str = "ORD334256";

/// Historical order ids count up from this number (`ORD334258`, ...).
const PAST_ORDER_BASE: u32 = 334257;

/// Generation parameters. The defaults reproduce the stock dataset: one
/// current OPEN order plus 29 delivered historical orders placed within the
/// last month.
#[derive(Debug, Clone)]
pub struct FixtureConfig {
    /// Clock value generation is anchored to.
    pub now: DateTime<Utc>,
    /// Number of historical (DELIVERED) orders beyond the current one.
    pub historical_orders: usize,
    /// Whole days a historical order was placed in the past.
    pub days_back: RangeInclusive<i64>,
    /// Additional hour offset, drawn independently of the day offset.
    pub hours_back: Range<i64>,
    /// Additional minute offset, drawn independently.
    pub minutes_back: Range<i64>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            now: Utc::now(),
            historical_orders: 29,
            days_back: 1..=30,
            hours_back: 0..24,
            minutes_back: 0..60,
        }
    }
}

/// The three keyed collections the stores are seeded with.
///
/// Consistency holds by construction: every document and shipment references
/// an order in `orders`; there are no orphaned references.
#[derive(Debug, Clone)]
pub struct FixtureSet {
    pub orders: HashMap<String, Order>,
    pub documents: HashMap<String, Document>,
    pub shipments: HashMap<String, Shipment>,
}

/// Generates the full dataset: orders, their document trios, and their
/// shipments.
///
/// Deterministic in shape always, and deterministic in content given a
/// seeded `rng`. Any failure here is a programming defect, not a runtime
/// error to recover from.
pub fn generate(config: &FixtureConfig, rng: &mut impl Rng) -> FixtureSet {
    // Orders are built in a Vec first so the RNG draw order is stable; the
    // keyed maps are filled afterwards.
    let mut ordered: Vec<Order> = Vec::with_capacity(config.historical_orders + 1);

    ordered.push(current_order(config.now));
    for i in 1..=config.historical_orders {
        ordered.push(past_order(config, rng, i));
    }

    let mut orders = HashMap::with_capacity(ordered.len());
    let mut documents = HashMap::with_capacity(ordered.len() * 3);
    let mut shipments = HashMap::with_capacity(ordered.len());

    for order in ordered {
        for doc in generated_documents(&order) {
            documents.insert(doc.id.clone(), doc);
        }
        let shipment = shipment_for(&order, rng);
        shipments.insert(shipment.id.clone(), shipment);
        orders.insert(order.order_id.clone(), order);
    }

    FixtureSet {
        orders,
        documents,
        shipments,
    }
}

/// The designated current order: always OPEN, placed "now".
fn current_order(now: DateTime<Utc>) -> Order {
    let (name, dimensions, weight) = PRODUCTS[0];
    Order::new(
        CURRENT_ORDER_ID,
        now,
        OrderStatus::Open,
        ProductLine {
            name: name.to_string(),
            dimensions: dimensions.to_string(),
            weight: weight.to_string(),
            quantity: 2,
        },
        DESTINATIONS[0],
        WAREHOUSE_ADDRESS,
        WAREHOUSE_ADDRESS,
    )
}

/// One historical order, numbered up from the current order's id.
fn past_order(config: &FixtureConfig, rng: &mut impl Rng, index: usize) -> Order {
    let days = rng.gen_range(config.days_back.clone());
    let hours = rng.gen_range(config.hours_back.clone());
    let minutes = rng.gen_range(config.minutes_back.clone());
    let (name, dimensions, weight) = PRODUCTS[rng.gen_range(0..PRODUCTS.len())];
    let destination = DESTINATIONS[rng.gen_range(0..DESTINATIONS.len())];
    let quantity = rng.gen_range(1..=3);

    let placed_at = config.now
        - Duration::days(days)
        - Duration::hours(hours)
        - Duration::minutes(minutes);

    Order::new(
        format!("ORD{}", PAST_ORDER_BASE + index as u32),
        placed_at,
        OrderStatus::Delivered,
        ProductLine {
            name: name.to_string(),
            dimensions: dimensions.to_string(),
            weight: weight.to_string(),
            quantity,
        },
        destination,
        WAREHOUSE_ADDRESS,
        WAREHOUSE_ADDRESS,
    )
}

/// The Invoice/Shipping/Customs trio generated for every order.
fn generated_documents(order: &Order) -> Vec<Document> {
    [DocumentType::Invoice, DocumentType::Shipping, DocumentType::Customs]
        .into_iter()
        .map(|doc_type| Document {
            id: derive::document_key(&order.order_id, doc_type),
            order_id: order.order_id.clone(),
            name: format!("{doc_type} Document"),
            doc_type,
            date: order.placed_at,
            size: GENERATED_DOC_SIZE.to_string(),
            status: DocumentStatus::Final,
            url: derive::document_url(&order.order_id, doc_type),
        })
        .collect()
}

/// The single shipment projected from an order at generation time.
///
/// Status, progress, and the final tracking event come from the delivery
/// progress rule applied to the order's status as of generation.
fn shipment_for(order: &Order, rng: &mut impl Rng) -> Shipment {
    let progress = derive::delivery_progress(order.status);
    let tracking = vec![
        tracking_event(
            rng,
            order.placed_at,
            DeliveryStage::OrderReceived,
            "Order has been received",
        ),
        tracking_event(
            rng,
            order.placed_at,
            DeliveryStage::OrderPicked,
            "Order has been picked",
        ),
        tracking_event(rng, order.placed_at, progress.stage, progress.note),
    ];

    Shipment {
        id: format!("SHP-{}", order.order_id),
        tracking_number: format!("TRK{}", rng.gen_range(100_000..=999_999)),
        order_id: order.order_id.clone(),
        origin: SHIPMENT_ORIGIN.to_string(),
        destination: derive::destination_display(&order.customer_address),
        status: progress.stage,
        carrier: CARRIERS[rng.gen_range(0..CARRIERS.len())].to_string(),
        service: SHIPMENT_SERVICE.to_string(),
        eta: order.placed_at,
        last_update: progress.note.to_string(),
        progress: progress.percent,
        tracking,
    }
}

fn tracking_event(
    rng: &mut impl Rng,
    timestamp: DateTime<Utc>,
    stage: DeliveryStage,
    description: &str,
) -> TrackingEvent {
    TrackingEvent {
        // Drawn from the injected RNG so a fixed seed reproduces event ids.
        id: Uuid::from_u128(rng.gen()),
        timestamp,
        location: SHIPMENT_ORIGIN.to_string(),
        status: stage.to_string(),
        description: description.to_string(),
        stage,
    }
}
