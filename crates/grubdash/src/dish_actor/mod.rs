//! # Dish Actor
//!
//! Owns the dish collection. Dishes can be listed, created, read and updated; they are
//! never deleted.
//!
//! ## Structure
//!
//! - [`checks`] - the dish check chains (fields, id agreement)
//! - [`entity`] - [`ActorEntity`](record_actor::ActorEntity) implementation for [`Dish`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use grubdash::dish_actor;
//! use grubdash::model::DishPayload;
//! use record_actor::SequentialIds;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = dish_actor::new(32, SequentialIds::new("d"));
//!
//!     // Start the actor (no dependencies, so context is ())
//!     tokio::spawn(actor.run(()));
//!
//!     let dish = client
//!         .create(DishPayload {
//!             name: Some(json!("Taco")),
//!             description: Some(json!("Spicy")),
//!             price: Some(json!(5)),
//!             image_url: Some(json!("x")),
//!             ..Default::default()
//!         })
//!         .await?;
//!     assert_eq!(dish.id, "d1");
//!     Ok(())
//! }
//! ```

pub mod checks;
pub mod entity;

use crate::clients::DishClient;
use crate::model::Dish;
use record_actor::{IdGenerator, RecordStore, ResourceActor};

/// Creates a new Dish actor over an empty store and its client.
pub fn new(
    buffer_size: usize,
    ids: impl IdGenerator<String> + 'static,
) -> (ResourceActor<Dish>, DishClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, ids);
    (actor, DishClient::new(generic_client))
}

/// Creates a Dish actor over a pre-populated store.
pub fn with_store(
    buffer_size: usize,
    store: impl RecordStore<Dish> + 'static,
    ids: impl IdGenerator<String> + 'static,
) -> (ResourceActor<Dish>, DishClient) {
    let (actor, generic_client) = ResourceActor::with_store(buffer_size, store, ids);
    (actor, DishClient::new(generic_client))
}
