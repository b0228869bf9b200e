//! # Record Actor
//!
//! This crate provides the building blocks for owning collections of records behind
//! actors. It implements a **Resource-Oriented Architecture (ROA)** pattern on top of
//! the **Actor Model**: every collection gets one actor, and every actor offers the
//! same list / create / get / update / delete surface.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your records and the hooks that guard them
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing and store ownership
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! Two seams are injected into every actor:
//!
//! - [`RecordStore`] - where records live ([`MemoryStore`] by default)
//! - [`IdGenerator`] - where new ids come from ([`SequentialIds`], [`RandomIds`] or any closure)
//!
//! Entity hooks usually run a [`validation::Chain`]: an ordered list of checks that
//! stops at the first failure.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks needed!)
//! - A request's hooks and its one store mutation finish before the next request starts
//! - Multiple actors run in **parallel**
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers client requests from queued expectations, so client
//! wrappers can be tested without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod ids;
pub mod message;
pub mod mock;
pub mod store;
pub mod tracing;
pub mod validation;

// Re-export core types for convenience
pub use actor::{ResourceActor, MAX_ID_DRAWS};
pub use client::{ClientResult, ResourceClient};
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use ids::{IdGenerator, RandomIds, SequentialIds};
pub use message::{ResourceRequest, Response};
pub use store::{MemoryStore, RecordStore};
