//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T, E> = oneshot::Sender<Result<T, FrameworkError<E>>>;

/// Response channel carrying `R` or a failure raised for entity `T`.
pub type EntityResponse<T, R> = Response<R, <T as ActorEntity>::Error>;

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// The variants map directly onto the resource operations every collection offers:
///
/// - **List**: Snapshot of the whole collection, in insertion order.
/// - **Create**: Uses [`ActorEntity::Create`] to build and append a new record.
/// - **Get (Read)**: Fetches the current state of the record by ID.
/// - **Update**: Uses [`ActorEntity::Update`] to replace an existing record.
/// - **Delete**: Removes the record.
///
/// This type is generic over `T: ActorEntity`, so a dish payload can never be
/// sent to the order actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: EntityResponse<T, Vec<T>>,
    },
    Create {
        params: T::Create,
        respond_to: EntityResponse<T, T>,
    },
    Get {
        id: T::Id,
        respond_to: EntityResponse<T, Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: EntityResponse<T, T>,
    },
    Delete {
        id: T::Id,
        respond_to: EntityResponse<T, ()>,
    },
}
