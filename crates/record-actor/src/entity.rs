//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every record type (Dish, Order, …)
//! must implement to be managed by the generic `ResourceActor`. It specifies associated
//! types for ids, payloads, context and errors, and provides the lifecycle hooks the
//! actor calls around each mutation.
//!
//! # Hook order
//!
//! - **Create**: [`validate_create`](ActorEntity::validate_create) →
//!   id drawn from the generator → [`from_create_params`](ActorEntity::from_create_params) →
//!   [`on_create`](ActorEntity::on_create) → append to the store.
//! - **Update**: lookup → [`on_update`](ActorEntity::on_update) on a *copy* of the stored
//!   record → replace in the store.
//! - **Delete**: lookup → [`on_delete`](ActorEntity::on_delete) → remove from the store.
//!
//! Every mutation of the store is the last step. A hook that returns `Err` stops the
//! request and the store is left exactly as it was.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks (e.g., calling other actors).
/// It also defines a `Context` type, which is injected into every hook. This allows "Late Binding"
/// of dependencies (passing clients to `run()` instead of `new()`).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g., String, Uuid, u64).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data submitted to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data submitted to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per actor rather than one per operation: clients deal with a
    /// single type and match on its variants.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The stored identifier of this record.
    fn id(&self) -> &Self::Id;

    /// Checks a create payload before an id is assigned.
    fn validate_create(_params: &Self::Create) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately after the entity is constructed, before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    ///
    /// `self` is a copy of the stored record; the actor writes it back only when
    /// this returns `Ok`. Implementations must keep the id unchanged.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
