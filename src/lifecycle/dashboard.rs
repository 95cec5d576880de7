use crate::clients::{DocumentClient, OrderClient, ShipmentClient};
use crate::fixture::{self, FixtureConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};

/// The main runtime orchestrator for the dashboard's store actors.
///
/// `Dashboard` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all store actors
/// - **Seeding**: Generating the fixture dataset once and handing it to the
///   stores by ownership
/// - **Dependency Wiring**: Connecting stores that depend on each other
///   (the shipment client derives display state from the order store)
///
/// # Architecture
///
/// The system consists of three store actors:
/// - **Order store**: the order map plus the list filter/pagination state
/// - **Document store**: generated paperwork, add-only
/// - **Shipment store**: generation-time shipment snapshots; display state
///   is derived live on read
///
/// # Example
///
/// ```ignore
/// let dashboard = Dashboard::initialize(FixtureConfig::default(), 42).await?;
///
/// dashboard.orders.update_order_status("ORD334256", OrderStatus::Shipped).await?;
/// let shipment = dashboard.shipments.for_order("ORD334256").await?;
///
/// dashboard.shutdown().await?;
/// ```
pub struct Dashboard {
    /// Client for the order store
    pub orders: OrderClient,

    /// Client for the document store
    pub documents: DocumentClient,

    /// Client for the shipment store
    pub shipments: ShipmentClient,

    /// Task handles for all running store actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Dashboard {
    /// Creates the dashboard state: generates the fixture from the given
    /// config and seed, spawns the three store actors, and seeds them.
    ///
    /// This replaces load-time global fixture data with an explicit,
    /// deterministic initialization step: the same config and seed always
    /// produce the same initial state. Runs once per process lifetime.
    pub async fn initialize(config: FixtureConfig, seed: u64) -> Result<Self, String> {
        let mut rng = StdRng::seed_from_u64(seed);
        let fixture = fixture::generate(&config, &mut rng);
        info!(
            orders = fixture.orders.len(),
            documents = fixture.documents.len(),
            shipments = fixture.shipments.len(),
            seed,
            "Fixture generated"
        );

        // 1. Create the store actors and wire dependencies
        let (order_actor, orders) = crate::order_store::new();
        let (document_actor, documents) = crate::document_store::new();
        let (shipment_actor, shipments) = crate::shipment_store::new(orders.clone());

        // 2. Start the actors; each runs its own sequential message loop
        let handles = vec![
            tokio::spawn(order_actor.run()),
            tokio::spawn(document_actor.run()),
            tokio::spawn(shipment_actor.run()),
        ];

        // 3. Seed the stores by ownership transfer
        orders
            .set_orders(fixture.orders)
            .await
            .map_err(|e| e.to_string())?;
        documents
            .set_documents(fixture.documents)
            .await
            .map_err(|e| e.to_string())?;
        shipments
            .set_shipments(fixture.shipments)
            .await
            .map_err(|e| e.to_string())?;

        Ok(Self {
            orders,
            documents,
            shipments,
            handles,
        })
    }

    /// Gracefully shuts down the whole dashboard state.
    ///
    /// Dropping the clients closes their channels; each store actor detects
    /// the closed channel and exits its loop. Returns an error if any actor
    /// task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down dashboard stores...");

        drop(self.orders);
        drop(self.documents);
        drop(self.shipments);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("Dashboard shutdown complete.");
        Ok(())
    }
}
