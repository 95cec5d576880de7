//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`MockClient`] with the fluent `expect_*().return_ok(..)` builders to
//! script a store's answers without spawning a real
//! [`StoreActor`](crate::framework::StoreActor), then call
//! [`MockClient::verify`] to assert every scripted answer was consumed.

use crate::framework::{StoreClient, StoreEntity, StoreRequest};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
///
/// This enum is used internally by `MockClient` to track what requests
/// are expected and what responses should be returned.
#[allow(dead_code)] // Not every store test scripts every variant
enum Expectation<T: StoreEntity> {
    ReplaceAll,
    Upsert {
        response: T::Id,
    },
    Patch {
        id: T::Id,
        response: bool,
    },
    Get {
        id: T::Id,
        response: Option<T>,
    },
    Snapshot {
        response: HashMap<T::Id, T>,
    },
    ViewOp {
        response: T::View,
    },
    GetView {
        response: T::View,
    },
}

/// A mock store client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Order>::new();
/// mock.expect_get("ORD1".to_string()).return_ok(Some(order));
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: StoreEntity> {
    client: StoreClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to answer requests from the script
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::ReplaceAll { respond_to, .. },
                        Some(Expectation::ReplaceAll),
                    ) => {
                        let _ = respond_to.send(());
                    }
                    (
                        StoreRequest::Upsert { respond_to, .. },
                        Some(Expectation::Upsert { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Patch { respond_to, .. },
                        Some(Expectation::Patch { response, .. }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Get { respond_to, .. },
                        Some(Expectation::Get { response, .. }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::ViewOp { respond_to, .. },
                        Some(Expectation::ViewOp { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::GetView { respond_to },
                        Some(Expectation::GetView { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `upsert` operation.
    pub fn expect_upsert(&mut self) -> UpsertExpectationBuilder<T> {
        UpsertExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `patch` operation.
    pub fn expect_patch(&mut self, id: T::Id) -> PatchExpectationBuilder<T> {
        PatchExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `snapshot` operation.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<T> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `replace_all` operation (always answered with unit).
    pub fn expect_replace_all(&mut self) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::ReplaceAll);
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<T: StoreEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: StoreEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> GetExpectationBuilder<T> {
    /// Sets the value the mocked store answers with.
    pub fn return_ok(self, value: Option<T>) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: value,
        });
    }
}

/// Builder for `upsert` expectations.
pub struct UpsertExpectationBuilder<T: StoreEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> UpsertExpectationBuilder<T> {
    /// Sets the id the mocked store answers with.
    pub fn return_ok(self, id: T::Id) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Upsert { response: id });
    }
}

/// Builder for `patch` expectations.
pub struct PatchExpectationBuilder<T: StoreEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> PatchExpectationBuilder<T> {
    /// Sets whether the mocked store reports the patch as applied.
    pub fn return_ok(self, applied: bool) {
        self.expectations.lock().unwrap().push_back(Expectation::Patch {
            id: self.id,
            response: applied,
        });
    }
}

/// Builder for `snapshot` expectations.
pub struct SnapshotExpectationBuilder<T: StoreEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StoreEntity> SnapshotExpectationBuilder<T> {
    /// Sets the collection the mocked store answers with.
    pub fn return_ok(self, entries: HashMap<T::Id, T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Snapshot { response: entries });
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a bare mock client and a receiver for asserting raw requests.
///
/// # Testing Strategy
/// When a test only exercises *client* logic, there is no need to spin up a
/// full `StoreActor`. The returned receiver exposes every request the client
/// sends, so the test can inspect it and answer over the bundled oneshot.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<T: StoreEntity>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Asserts that the next message is a Get request.
pub async fn expect_get_request<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, tokio::sync::oneshot::Sender<Option<T>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Asserts that the next message is a Patch request.
pub async fn expect_patch_request<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, T::Patch, tokio::sync::oneshot::Sender<bool>)> {
    match receiver.recv().await {
        Some(StoreRequest::Patch { id, patch, respond_to }) => Some((id, patch, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Order, OrderPatch, OrderStatus, ProductLine};
    use chrono::Utc;

    fn sample_order(id: &str) -> Order {
        Order::new(
            id,
            Utc::now(),
            OrderStatus::Open,
            ProductLine {
                name: "MacBook Pro M3".into(),
                dimensions: "30.41 x 21.24 x 1.55 cm".into(),
                weight: "1.55kg".into(),
                quantity: 1,
            },
            "customer",
            "warehouse",
            "seller",
        )
    }

    #[tokio::test]
    async fn test_raw_mock_client() {
        let (client, mut receiver) = create_mock_client::<Order>(10);

        let patch_task = tokio::spawn(async move {
            client
                .patch(
                    "ORD1".to_string(),
                    OrderPatch { status: OrderStatus::Shipped },
                )
                .await
        });

        let (id, patch, responder) = expect_patch_request(&mut receiver)
            .await
            .expect("Expected Patch request");
        assert_eq!(id, "ORD1");
        assert_eq!(patch.status, OrderStatus::Shipped);
        responder.send(true).unwrap();

        let result = patch_task.await.unwrap();
        assert_eq!(result, Ok(true));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Order>::new();

        mock.expect_get("ORD1".to_string())
            .return_ok(Some(sample_order("ORD1")));
        mock.expect_patch("ORD1".to_string()).return_ok(true);

        let client = mock.client();

        let fetched = client.get("ORD1".to_string()).await.unwrap();
        assert_eq!(fetched.unwrap().order_id, "ORD1");

        let applied = client
            .patch(
                "ORD1".to_string(),
                OrderPatch { status: OrderStatus::Delivered },
            )
            .await
            .unwrap();
        assert!(applied);

        mock.verify();
    }
}
