//! # Resource Clients
//!
//! Typed wrappers around [`ResourceClient`](record_actor::ResourceClient) that expose
//! the operations each resource supports and turn framework failures into
//! [`RecordError`](crate::error::RecordError)s. `list` and `get` come from
//! [`ActorClient`](record_actor::ActorClient).

pub mod dish_client;
pub mod order_client;

pub use dish_client::DishClient;
pub use order_client::OrderClient;
