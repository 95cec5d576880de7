//! Derivation rules: pure functions recomputed on every read, never cached
//! in a store.
//!
//! These cover the shipment display status/progress as a function of the
//! parent order's status, document identity and storage-URL construction,
//! and the destination display heuristic.

use crate::model::{
    Document, DocumentStatus, DocumentType, Order, OrderStatus, DeliveryStage,
};
use chrono::{DateTime, Utc};

/// Base of the external object store holding generated PDFs. Treated as an
/// external contract: a real backend substituted later must serve the same
/// layout.
pub const DOCUMENT_URL_BASE: &str =
    "https://aws-exportedge-dev-order-processing-bucket.s3.us-east-1.amazonaws.com";

/// Display size attached to the generated Invoice/Shipping/Customs trio.
pub const GENERATED_DOC_SIZE: &str = "245 KB";

/// Display size attached to an issued shipping label.
pub const LABEL_DOC_SIZE: &str = "125 KB";

/// Shipment display state derived from an order status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryProgress {
    pub stage: DeliveryStage,
    pub percent: u8,
    pub note: &'static str,
}

/// Maps an order's fulfillment status to its shipment's display state.
///
/// Open and Shipped orders both show as in transit at 65%; Delivered
/// orders show as arrived at 100%.
pub fn delivery_progress(status: OrderStatus) -> DeliveryProgress {
    match status {
        OrderStatus::Open | OrderStatus::Shipped => DeliveryProgress {
            stage: DeliveryStage::OrderInTransit,
            percent: 65,
            note: "Package in transit",
        },
        OrderStatus::Delivered => DeliveryProgress {
            stage: DeliveryStage::ReachedDestination,
            percent: 100,
            note: "Package delivered",
        },
    }
}

/// Stable string key identifying a document: `DOC-<orderId>-<SUFFIX>`.
///
/// The same order id and type always yield the same key, which is what
/// makes label issuance an overwrite rather than a duplicate.
pub fn document_key(order_id: &str, doc_type: DocumentType) -> String {
    format!("DOC-{order_id}-{}", doc_type.key_suffix())
}

/// Storage URL for a document:
/// `<base>/orders_docs/{orderId}/{orderId}_{type}.pdf`.
///
/// Stable and order/type-addressable; two distinct orders can never
/// collide because the order id appears in the path.
pub fn document_url(order_id: &str, doc_type: DocumentType) -> String {
    format!(
        "{DOCUMENT_URL_BASE}/orders_docs/{order_id}/{order_id}_{}.pdf",
        doc_type.file_slug()
    )
}

/// Derives the display destination from a full postal address by taking
/// the second-to-last comma-separated segment.
///
/// This is a heuristic, not an address parser: a short or unusual address
/// degrades to the trimmed input rather than failing.
pub fn destination_display(address: &str) -> String {
    let segments: Vec<&str> = address.split(',').collect();
    match segments.len() {
        0 | 1 => address.trim().to_string(),
        n => segments[n - 2].trim().to_string(),
    }
}

/// Builds the shipping-label document for an order.
///
/// Takes the strongly-typed [`Order`] rather than a loose payload; the
/// issuing timestamp is passed in so the data layer stays clock-free.
pub fn shipping_label(order: &Order, issued_at: DateTime<Utc>) -> Document {
    Document {
        id: document_key(&order.order_id, DocumentType::Label),
        order_id: order.order_id.clone(),
        name: "Shipping Label".to_string(),
        doc_type: DocumentType::Label,
        date: issued_at,
        size: LABEL_DOC_SIZE.to_string(),
        status: DocumentStatus::Final,
        url: document_url(&order.order_id, DocumentType::Label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductLine;
    use chrono::TimeZone;

    #[test]
    fn document_url_is_deterministic_and_addressable() {
        let url = document_url("ORD1", DocumentType::Invoice);
        assert_eq!(
            url,
            format!("{DOCUMENT_URL_BASE}/orders_docs/ORD1/ORD1_invoice.pdf")
        );
        // Same inputs, same output.
        assert_eq!(url, document_url("ORD1", DocumentType::Invoice));
        assert_ne!(url, document_url("ORD2", DocumentType::Invoice));
        assert_ne!(url, document_url("ORD1", DocumentType::Customs));
    }

    #[test]
    fn document_keys_use_type_suffixes() {
        assert_eq!(document_key("ORD7", DocumentType::Invoice), "DOC-ORD7-INVOICE");
        assert_eq!(document_key("ORD7", DocumentType::Label), "DOC-ORD7-LBL");
    }

    #[test]
    fn delivery_progress_mapping() {
        for status in [OrderStatus::Open, OrderStatus::Shipped] {
            let p = delivery_progress(status);
            assert_eq!(p.stage, DeliveryStage::OrderInTransit);
            assert_eq!(p.percent, 65);
        }
        let done = delivery_progress(OrderStatus::Delivered);
        assert_eq!(done.stage, DeliveryStage::ReachedDestination);
        assert_eq!(done.percent, 100);
        assert_eq!(done.note, "Package delivered");
    }

    #[test]
    fn destination_takes_second_to_last_segment() {
        let addr = "John Smith, 123 Tech Plaza, New York, NY 10001, USA";
        assert_eq!(destination_display(addr), "NY 10001");
    }

    #[test]
    fn destination_degrades_on_short_input() {
        // One segment: fall back to the trimmed input, no panic.
        assert_eq!(destination_display("  Mumbai  "), "Mumbai");
        // Two segments: second-to-last is the first.
        assert_eq!(destination_display("Sydney, Australia"), "Sydney");
        assert_eq!(destination_display(""), "");
    }

    #[test]
    fn shipping_label_reissues_same_key() {
        let order = Order::new(
            "ORD42",
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            OrderStatus::Open,
            ProductLine {
                name: "iPhone 15 Pro Max".into(),
                dimensions: "15.9 x 7.67 x 0.83 cm".into(),
                weight: "221g".into(),
                quantity: 2,
            },
            "a",
            "b",
            "c",
        );
        let t1 = Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2024, 3, 2, 10, 0, 0).unwrap();
        let first = shipping_label(&order, t1);
        let second = shipping_label(&order, t2);
        assert_eq!(first.id, "DOC-ORD42-LBL");
        assert_eq!(first.id, second.id);
        assert_eq!(first.url, second.url);
        assert_eq!(first.size, LABEL_DOC_SIZE);
        assert_eq!(first.status, DocumentStatus::Final);
    }
}
