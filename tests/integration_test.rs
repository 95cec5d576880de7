use chrono::{TimeZone, Utc};
use exportedge_core::clients::StoreHandle;
use exportedge_core::fixture::{FixtureConfig, CURRENT_ORDER_ID};
use exportedge_core::lifecycle::Dashboard;
use exportedge_core::model::{DeliveryStage, DocumentType, OrderStatus};

fn fixed_config() -> FixtureConfig {
    FixtureConfig {
        now: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        ..FixtureConfig::default()
    }
}

/// Full end-to-end test over the seeded dashboard: the generated dataset
/// satisfies its structural invariants.
#[tokio::test]
async fn test_seeded_dashboard_invariants() {
    let dashboard = Dashboard::initialize(fixed_config(), 42)
        .await
        .expect("Failed to initialize dashboard");

    // Exactly one OPEN order, the designated current one; rest DELIVERED.
    let orders = dashboard.orders.snapshot().await.expect("Failed to snapshot");
    assert_eq!(orders.len(), 30);
    let open: Vec<_> = orders
        .values()
        .filter(|o| o.status == OrderStatus::Open)
        .collect();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].order_id, CURRENT_ORDER_ID);

    // Every order carries its generated document trio.
    for order in orders.values() {
        let docs = dashboard
            .documents
            .documents_for_order(&order.order_id)
            .await
            .expect("Failed to list documents");
        let mut types: Vec<DocumentType> = docs.iter().map(|d| d.doc_type).collect();
        types.sort_by_key(|t| t.key_suffix());
        assert_eq!(
            types,
            vec![DocumentType::Customs, DocumentType::Invoice, DocumentType::Shipping]
        );
    }

    // Every order has exactly one shipment whose final event matches its
    // status.
    let shipments = dashboard
        .shipments
        .snapshot()
        .await
        .expect("Failed to snapshot shipments");
    assert_eq!(shipments.len(), orders.len());
    for shipment in shipments.values() {
        assert!(orders.contains_key(&shipment.order_id));
        assert_eq!(shipment.tracking.last().unwrap().stage, shipment.status);
    }

    dashboard.shutdown().await.expect("Failed to shutdown");
}

/// `update_order_status` changes only the addressed order's status; an
/// unknown id leaves the store untouched.
#[tokio::test]
async fn test_update_order_status_precision_and_miss() {
    let dashboard = Dashboard::initialize(fixed_config(), 42).await.unwrap();

    let before = dashboard.orders.snapshot().await.unwrap();

    dashboard
        .orders
        .update_order_status(CURRENT_ORDER_ID, OrderStatus::Shipped)
        .await
        .unwrap();

    let after = dashboard.orders.snapshot().await.unwrap();
    let updated = &after[CURRENT_ORDER_ID];
    assert_eq!(updated.status, OrderStatus::Shipped);

    // Every other field and every other order is untouched.
    let original = &before[CURRENT_ORDER_ID];
    assert_eq!(updated.placed_at, original.placed_at);
    assert_eq!(updated.product, original.product);
    assert_eq!(updated.customer_address, original.customer_address);
    for (id, order) in &before {
        if id != CURRENT_ORDER_ID {
            assert_eq!(order, &after[id]);
        }
    }

    // Unknown id: silent no-op, store unchanged.
    dashboard
        .orders
        .update_order_status("ORD000000", OrderStatus::Delivered)
        .await
        .expect("miss must not be an error");
    assert_eq!(dashboard.orders.snapshot().await.unwrap(), after);

    dashboard.shutdown().await.unwrap();
}

/// Filter merges always reset pagination; clearing restores the defaults.
#[tokio::test]
async fn test_filters_reset_pagination() {
    use exportedge_core::model::FilterUpdate;

    let dashboard = Dashboard::initialize(fixed_config(), 42).await.unwrap();

    let view = dashboard.orders.set_page(3).await.unwrap();
    assert_eq!(view.pagination.current_page, 3);

    // A search merge resets the page regardless of the prior value.
    let view = dashboard
        .orders
        .set_filters(FilterUpdate::search("ORD3"))
        .await
        .unwrap();
    assert_eq!(view.filters.search, "ORD3");
    assert_eq!(view.pagination.current_page, 1);

    // Merging the status field keeps the earlier search term.
    let view = dashboard
        .orders
        .set_filters(FilterUpdate::status(Some(OrderStatus::Delivered)))
        .await
        .unwrap();
    assert_eq!(view.filters.search, "ORD3");
    assert_eq!(view.filters.status, Some(OrderStatus::Delivered));

    let view = dashboard.orders.clear_filters().await.unwrap();
    assert_eq!(view.filters.search, "");
    assert_eq!(view.filters.status, None);
    assert_eq!(view.pagination.current_page, 1);
    assert_eq!(view.pagination.items_per_page, 10);

    dashboard.shutdown().await.unwrap();
}

/// Issuing the shipping label twice overwrites the existing label instead of
/// duplicating it.
#[tokio::test]
async fn test_label_issuance_is_an_overwrite() {
    let dashboard = Dashboard::initialize(fixed_config(), 42).await.unwrap();

    let order = dashboard
        .orders
        .get(CURRENT_ORDER_ID.to_string())
        .await
        .unwrap()
        .expect("current order exists");

    let t1 = Utc.with_ymd_and_hms(2024, 6, 2, 9, 0, 0).unwrap();
    let t2 = Utc.with_ymd_and_hms(2024, 6, 2, 10, 0, 0).unwrap();
    let first = dashboard.documents.add_shipping_label(&order, t1).await.unwrap();
    let second = dashboard.documents.add_shipping_label(&order, t2).await.unwrap();
    assert_eq!(first.id, format!("DOC-{CURRENT_ORDER_ID}-LBL"));
    assert_eq!(first.id, second.id);

    let docs = dashboard
        .documents
        .documents_for_order(CURRENT_ORDER_ID)
        .await
        .unwrap();
    let labels: Vec<_> = docs
        .iter()
        .filter(|d| d.doc_type == DocumentType::Label)
        .collect();
    assert_eq!(labels.len(), 1, "second issuance must overwrite, not duplicate");
    // The stored label is the second issuance.
    assert_eq!(labels[0].date, t2);
    // Generated trio plus the label.
    assert_eq!(docs.len(), 4);

    dashboard.shutdown().await.unwrap();
}

/// Shipment display state follows the parent order's status on read, with
/// the final tracking event kept in step.
#[tokio::test]
async fn test_shipment_tracks_order_status_live() {
    let dashboard = Dashboard::initialize(fixed_config(), 42).await.unwrap();

    let shipment = dashboard
        .shipments
        .for_order(CURRENT_ORDER_ID)
        .await
        .unwrap()
        .expect("current order has a shipment");
    assert_eq!(shipment.status, DeliveryStage::OrderInTransit);
    assert_eq!(shipment.progress, 65);

    dashboard
        .orders
        .update_order_status(CURRENT_ORDER_ID, OrderStatus::Delivered)
        .await
        .unwrap();

    let shipment = dashboard
        .shipments
        .for_order(CURRENT_ORDER_ID)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(shipment.status, DeliveryStage::ReachedDestination);
    assert_eq!(shipment.progress, 100);
    assert_eq!(shipment.last_update, "Package delivered");
    let last = shipment.tracking.last().unwrap();
    assert_eq!(last.stage, DeliveryStage::ReachedDestination);
    assert_eq!(last.description, "Package delivered");

    dashboard.shutdown().await.unwrap();
}

/// Two dashboards initialized with the same config and seed start from the
/// same state.
#[tokio::test]
async fn test_initialization_is_reproducible() {
    let a = Dashboard::initialize(fixed_config(), 7).await.unwrap();
    let b = Dashboard::initialize(fixed_config(), 7).await.unwrap();

    assert_eq!(
        a.orders.snapshot().await.unwrap(),
        b.orders.snapshot().await.unwrap()
    );
    assert_eq!(
        a.shipments.snapshot().await.unwrap(),
        b.shipments.snapshot().await.unwrap()
    );

    a.shutdown().await.unwrap();
    b.shutdown().await.unwrap();
}
