//! # Dish Client
//!
//! Provides a high‑level API for interacting with the `Dish` actor.
use crate::error::RecordError;
use crate::model::{Dish, DishPayload};
use async_trait::async_trait;
use record_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Dish actor.
///
/// There is no delete: dishes stay on the menu once created.
#[derive(Clone)]
pub struct DishClient {
    inner: ResourceClient<Dish>,
}

fn not_found(id: &str) -> RecordError {
    RecordError::NotFound(format!("Dish does not exist: {id}"))
}

impl DishClient {
    pub fn new(inner: ResourceClient<Dish>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create(&self, payload: DishPayload) -> Result<Dish, RecordError> {
        debug!("Sending request");
        self.inner.create(payload).await.map_err(Self::map_error)
    }

    /// Like [`get`](ActorClient::get), but a missing dish is an error.
    #[instrument(skip(self))]
    pub async fn read(&self, id: &str) -> Result<Dish, RecordError> {
        self.get(id.to_string())
            .await?
            .ok_or_else(|| not_found(id))
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: &str, payload: DishPayload) -> Result<Dish, RecordError> {
        debug!("Sending request");
        self.inner
            .update(id.to_string(), payload)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Dish> for DishClient {
    type Error = RecordError;

    fn inner(&self) -> &ResourceClient<Dish> {
        &self.inner
    }

    fn map_error(e: FrameworkError<RecordError>) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => not_found(&id),
            FrameworkError::Entity(e) => e,
            other => RecordError::Unavailable(other.to_string()),
        }
    }
}
