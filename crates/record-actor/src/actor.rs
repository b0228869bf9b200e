//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a collection of
//! records. It implements the "Server" side of the Actor Model, processing messages
//! sequentially and ensuring exclusive access to its [`RecordStore`].

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::ids::IdGenerator;
use crate::message::ResourceRequest;
use crate::store::{MemoryStore, RecordStore};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Upper bound on ids drawn for a single create before giving up.
pub const MAX_ID_DRAWS: usize = 64;

/// The generic actor that manages a collection of records.
///
/// This struct is the "Server" half of the actor. It owns the store and the receiver
/// end of the channel, and processes its messages *sequentially* in a loop: each
/// request runs its hooks and its single store mutation to completion before the next
/// one is read. That is what lets the store go without a `Mutex` or `RwLock`.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust
/// use record_actor::{ActorEntity, ResourceActor, SequentialIds};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Tag { id: String, label: String }
/// #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
///
/// #[async_trait]
/// impl ActorEntity for Tag {
///     type Id = String;
///     type Create = String;
///     type Update = String;
///     type Context = (); // No dependencies in this example
///     type Error = TagError;
///
///     fn id(&self) -> &String { &self.id }
///     fn from_create_params(id: String, label: String) -> Result<Self, TagError> { Ok(Self { id, label }) }
///     async fn on_update(&mut self, label: String, _: &()) -> Result<(), TagError> { self.label = label; Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     // 1. Create
///     let (actor, client) = ResourceActor::<Tag>::new(10, SequentialIds::new("t"));
///
///     // 2. Wire & Run
///     tokio::spawn(actor.run(()));
///
///     // 3. Use
///     let tag = client.create("urgent".to_string()).await.unwrap();
///     assert_eq!(tag.id, "t1");
/// }
/// ```
///
/// ## Operations
///
/// * **List**: returns a snapshot of the store.
/// * **Create**: `validate_create` → fresh id (at most [`MAX_ID_DRAWS`] draws) → `from_create_params` → `on_create` → append.
/// * **Get**: looks up the record; `None` when absent.
/// * **Update**: lookup → `on_update` on a copy → replace.
/// * **Delete**: lookup → `on_delete` → remove.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Box<dyn RecordStore<T>>,
    ids: Box<dyn IdGenerator<T::Id>>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` over an empty [`MemoryStore`] and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `ids` - Source of ids for created records.
    pub fn new(
        buffer_size: usize,
        ids: impl IdGenerator<T::Id> + 'static,
    ) -> (Self, ResourceClient<T>) {
        Self::with_store(buffer_size, MemoryStore::new(), ids)
    }

    /// Same as [`new`](Self::new) but over a caller-supplied store.
    pub fn with_store(
        buffer_size: usize,
        store: impl RecordStore<T> + 'static,
        ids: impl IdGenerator<T::Id> + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Box::new(store),
            ids: Box::new(ids),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Draws ids until one is not already taken (seeded stores may hold any id).
    ///
    /// Returns `None` after [`MAX_ID_DRAWS`] ids that were all in use.
    fn fresh_id(&mut self) -> Option<T::Id> {
        for _ in 0..MAX_ID_DRAWS {
            let id = self.ids.next_id();
            if !self.store.contains(&id) {
                return Some(id);
            }
            debug!(%id, "Generated id already in use, drawing another");
        }
        None
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to access external dependencies (like other clients) that were created *after*
    /// the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Dish" instead of "grubdash::model::dish::Dish")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    let records = self.store.scan();
                    debug!(entity_type, size = records.len(), "List");
                    let _ = respond_to.send(Ok(records));
                }
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    if let Err(e) = T::validate_create(&params) {
                        warn!(entity_type, error = %e, "Create rejected");
                        let _ = respond_to.send(Err(FrameworkError::Entity(e)));
                        continue;
                    }

                    let Some(id) = self.fresh_id() else {
                        warn!(entity_type, draws = MAX_ID_DRAWS, "No unused id");
                        let _ =
                            respond_to.send(Err(FrameworkError::IdsExhausted(MAX_ID_DRAWS)));
                        continue;
                    };
                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(FrameworkError::Entity(e)));
                                continue;
                            }
                            self.store.append(item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::Entity(e)));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.find(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(mut item) = self.store.find(&id).cloned() else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    if let Err(e) = item.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::Entity(e)));
                        continue;
                    }
                    self.store.replace(&id, item.clone());
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.find(&id).cloned() else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::Entity(e)));
                        continue;
                    }
                    self.store.remove(&id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
