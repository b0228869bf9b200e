//! # Order Actor
//!
//! Owns the order collection and enforces the order lifecycle.
//!
//! ## Overview
//!
//! Orders move between `pending`, `preparing`, `out-for-delivery` and `delivered` by
//! explicit updates. There is no transition table: any status may be set from any
//! other, except that a `delivered` order can no longer change. Only `pending`
//! orders may be deleted.
//!
//! ## Structure
//!
//! - [`checks`] - the order check chains (fields, status value, id agreement)
//! - [`lifecycle`] - the terminal-state and delete guards on the *stored* order
//! - [`entity`] - [`ActorEntity`](record_actor::ActorEntity) implementation for [`Order`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Hook order
//!
//! | Operation | Chain |
//! |---|---|
//! | create | fields → status value (if given) → default status → store |
//! | update | lookup → not delivered → id agreement → status value → fields → replace |
//! | destroy | lookup → pending → remove |
//!
//! Line items reference dishes by an opaque value that is never checked against the
//! dish collection, so the order actor needs no context (`Context = ()`).

pub mod checks;
pub mod entity;
pub mod lifecycle;

use crate::clients::OrderClient;
use crate::model::Order;
use record_actor::{IdGenerator, RecordStore, ResourceActor};

/// Creates a new Order actor over an empty store and its client.
pub fn new(
    buffer_size: usize,
    ids: impl IdGenerator<String> + 'static,
) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, ids);
    (actor, OrderClient::new(generic_client))
}

/// Creates an Order actor over a pre-populated store.
pub fn with_store(
    buffer_size: usize,
    store: impl RecordStore<Order> + 'static,
    ids: impl IdGenerator<String> + 'static,
) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::with_store(buffer_size, store, ids);
    (actor, OrderClient::new(generic_client))
}
