//! # Core Store Framework
//!
//! This module defines the generic building blocks for the store-actor system.
//!
//! ## Key Types
//!
//! - [`StoreEntity`]: The trait that all stored record types must implement.
//! - [`StoreActor`]: The generic actor that owns a keyed collection plus view state.
//! - [`StoreClient`]: The generic client for communicating with store actors.
//! - [`StoreError`]: Channel-level errors (e.g., Closed, Dropped).

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait any record type must implement to be managed by a [`StoreActor`].
///
/// # Architecture Note
/// By defining a contract that all stored types (Order, Document, Shipment)
/// must satisfy, we write the store message loop *once* and reuse it for every
/// collection. Associated types keep each store fully typed: an order patch
/// cannot be sent to the document store.
///
/// Unlike a CRUD resource, a store here is a *view-model* collection: it is
/// seeded wholesale, records are upserted by key, field patches are total
/// (a miss is a silent no-op, not an error), and the store may carry a piece
/// of UI-facing view state mutated atomically alongside the records.
pub trait StoreEntity: Clone + Send + Sync + 'static {
    /// The unique key for this record (e.g., `String`).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Field-level mutation applied in place to a stored record.
    /// Use `()` for immutable collections.
    type Patch: Send + Sync + Debug;

    /// Store-level view state kept alongside the records.
    /// Use `()` if the store carries none.
    type View: Default + Clone + Send + Sync + Debug;

    /// Operation applied atomically to the view state.
    type ViewOp: Send + Sync + Debug;

    /// The record's own key, used when upserting.
    fn id(&self) -> Self::Id;

    /// Applies a patch to this record. Must be total: patches never fail.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Applies a view operation to the store's view state. Must be total.
    fn apply_view_op(view: &mut Self::View, op: Self::ViewOp);
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the store framework itself.
///
/// Store operations are total by contract; the only failures are transport
/// failures on the actor channel.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StoreError {
    #[error("Store actor closed")]
    Closed,
    #[error("Store actor dropped response channel")]
    Dropped,
}

/// Type alias for the one-shot response channel used by store actors.
pub type Response<T> = oneshot::Sender<T>;

/// Internal message type sent to a store actor.
///
/// The variants map to the store's operation surface:
///
/// - **ReplaceAll**: wholesale replacement of the collection (seeding; last
///   writer wins).
/// - **Upsert**: insert-or-overwrite by the record's own key.
/// - **Patch**: in-place field mutation; a missing key is a silent no-op and
///   the reply only reports whether the patch applied.
/// - **Get / Snapshot**: point and whole-collection reads.
/// - **ViewOp / GetView**: atomic view-state mutation and read; `ViewOp`
///   replies with the resulting state so the caller observes the merge it
///   caused, never a later one.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    ReplaceAll {
        entries: HashMap<T::Id, T>,
        respond_to: Response<()>,
    },
    Upsert {
        entity: T,
        respond_to: Response<T::Id>,
    },
    Patch {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<bool>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Snapshot {
        respond_to: Response<HashMap<T::Id, T>>,
    },
    ViewOp {
        op: T::ViewOp,
        respond_to: Response<T::View>,
    },
    GetView {
        respond_to: Response<T::View>,
    },
}

// =============================================================================
// 3. THE GENERIC STORE ACTOR
// =============================================================================

/// The generic actor that owns a keyed collection and its view state.
///
/// # Architecture Note
/// This struct is the "Server" half of the store. It owns the state and the
/// receiver end of the channel.
///
/// **Concurrency Model**:
/// Each store actor processes its messages *sequentially* in a loop, so no
/// `Mutex` or `RwLock` is needed for the collection or the view state. Every
/// mutation runs to completion before the next message is seen, which is what
/// makes filter merges observably atomic.
pub struct StoreActor<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    entries: HashMap<T::Id, T>,
    view: T::View,
}

impl<T: StoreEntity> StoreActor<T> {
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            entries: HashMap::new(),
            view: T::View::default(),
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    /// Runs the store's event loop, processing messages until the channel
    /// closes.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Order" instead of the full path)
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::ReplaceAll { entries, respond_to } => {
                    info!(entity_type, size = entries.len(), "Replaced collection");
                    self.entries = entries;
                    let _ = respond_to.send(());
                }
                StoreRequest::Upsert { entity, respond_to } => {
                    let id = entity.id();
                    let replaced = self.entries.insert(id.clone(), entity).is_some();
                    info!(entity_type, %id, replaced, size = self.entries.len(), "Upserted");
                    let _ = respond_to.send(id);
                }
                StoreRequest::Patch { id, patch, respond_to } => {
                    debug!(entity_type, %id, ?patch, "Patch");
                    if let Some(entry) = self.entries.get_mut(&id) {
                        entry.apply_patch(patch);
                        info!(entity_type, %id, "Patched");
                        let _ = respond_to.send(true);
                    } else {
                        // Intentional idempotent-miss: the store is left
                        // untouched and no error is surfaced.
                        warn!(entity_type, %id, "Patch miss, no-op");
                        let _ = respond_to.send(false);
                    }
                }
                StoreRequest::Get { id, respond_to } => {
                    let entry = self.entries.get(&id).cloned();
                    let found = entry.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(entry);
                }
                StoreRequest::Snapshot { respond_to } => {
                    debug!(entity_type, size = self.entries.len(), "Snapshot");
                    let _ = respond_to.send(self.entries.clone());
                }
                StoreRequest::ViewOp { op, respond_to } => {
                    debug!(entity_type, ?op, "ViewOp");
                    T::apply_view_op(&mut self.view, op);
                    let _ = respond_to.send(self.view.clone());
                }
                StoreRequest::GetView { respond_to } => {
                    let _ = respond_to.send(self.view.clone());
                }
            }
        }

        info!(entity_type, size = self.entries.len(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a [`StoreActor`].
#[derive(Clone)]
pub struct StoreClient<T: StoreEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: StoreEntity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn call<R>(
        &self,
        make: impl FnOnce(Response<R>) -> StoreRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)
    }

    pub async fn replace_all(&self, entries: HashMap<T::Id, T>) -> Result<(), StoreError> {
        self.call(|respond_to| StoreRequest::ReplaceAll { entries, respond_to })
            .await
    }

    pub async fn upsert(&self, entity: T) -> Result<T::Id, StoreError> {
        self.call(|respond_to| StoreRequest::Upsert { entity, respond_to })
            .await
    }

    /// Applies a patch; the returned bool reports whether the key existed.
    /// A miss is not an error.
    pub async fn patch(&self, id: T::Id, patch: T::Patch) -> Result<bool, StoreError> {
        self.call(|respond_to| StoreRequest::Patch { id, patch, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.call(|respond_to| StoreRequest::Get { id, respond_to })
            .await
    }

    pub async fn snapshot(&self) -> Result<HashMap<T::Id, T>, StoreError> {
        self.call(|respond_to| StoreRequest::Snapshot { respond_to })
            .await
    }

    /// Applies a view operation and returns the resulting view state.
    pub async fn apply_view(&self, op: T::ViewOp) -> Result<T::View, StoreError> {
        self.call(|respond_to| StoreRequest::ViewOp { op, respond_to })
            .await
    }

    pub async fn view(&self) -> Result<T::View, StoreError> {
        self.call(|respond_to| StoreRequest::GetView { respond_to })
            .await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: String,
        text: String,
        pinned: bool,
    }

    #[derive(Debug)]
    struct NotePatch {
        pinned: bool,
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    struct NoteView {
        highlight: Option<String>,
    }

    #[derive(Debug)]
    enum NoteViewOp {
        Highlight(String),
        Clear,
    }

    impl StoreEntity for Note {
        type Id = String;
        type Patch = NotePatch;
        type View = NoteView;
        type ViewOp = NoteViewOp;

        fn id(&self) -> String {
            self.id.clone()
        }

        fn apply_patch(&mut self, patch: NotePatch) {
            self.pinned = patch.pinned;
        }

        fn apply_view_op(view: &mut NoteView, op: NoteViewOp) {
            match op {
                NoteViewOp::Highlight(id) => view.highlight = Some(id),
                NoteViewOp::Clear => view.highlight = None,
            }
        }
    }

    fn note(id: &str, text: &str) -> Note {
        Note {
            id: id.to_string(),
            text: text.to_string(),
            pinned: false,
        }
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_store_actor_collection_ops() {
        let (actor, client) = StoreActor::<Note>::new(10);
        tokio::spawn(actor.run());

        // 1. Seed wholesale
        let mut seed = HashMap::new();
        seed.insert("n1".to_string(), note("n1", "first"));
        seed.insert("n2".to_string(), note("n2", "second"));
        client.replace_all(seed).await.unwrap();

        // 2. Point read
        let got = client.get("n1".to_string()).await.unwrap().unwrap();
        assert_eq!(got.text, "first");

        // 3. Patch a known key
        let applied = client
            .patch("n1".to_string(), NotePatch { pinned: true })
            .await
            .unwrap();
        assert!(applied);
        assert!(client.get("n1".to_string()).await.unwrap().unwrap().pinned);

        // 4. Patch miss: silent no-op, store unchanged
        let applied = client
            .patch("nope".to_string(), NotePatch { pinned: true })
            .await
            .unwrap();
        assert!(!applied);
        assert_eq!(client.snapshot().await.unwrap().len(), 2);

        // 5. Upsert overwrites on key collision
        client.upsert(note("n2", "rewritten")).await.unwrap();
        let snapshot = client.snapshot().await.unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot["n2"].text, "rewritten");
    }

    #[tokio::test]
    async fn test_store_actor_view_state() {
        let (actor, client) = StoreActor::<Note>::new(10);
        tokio::spawn(actor.run());

        assert_eq!(client.view().await.unwrap(), NoteView::default());

        let view = client
            .apply_view(NoteViewOp::Highlight("n1".to_string()))
            .await
            .unwrap();
        assert_eq!(view.highlight.as_deref(), Some("n1"));

        let view = client.apply_view(NoteViewOp::Clear).await.unwrap();
        assert_eq!(view.highlight, None);
    }
}
