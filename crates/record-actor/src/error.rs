//! # Framework Errors
//!
//! This module defines the common error type used between `ResourceClient` and
//! `ResourceActor`. Failures raised by an entity's own hooks travel unchanged inside
//! [`FrameworkError::Entity`], so callers can still match on the entity's error enum.

/// Errors that can occur within the actor framework itself.
///
/// `E` is the entity's error type ([`ActorEntity::Error`](crate::ActorEntity::Error)).
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError<E> {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("No unused id after {0} draws")]
    IdsExhausted(usize),
    #[error("Entity error: {0}")]
    Entity(E),
}

impl<E> FrameworkError<E> {
    /// Returns the entity error, if this failure came from an entity hook.
    pub fn into_entity(self) -> Option<E> {
        match self {
            Self::Entity(e) => Some(e),
            _ => None,
        }
    }
}
