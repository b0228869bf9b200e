//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
use crate::error::RecordError;
use crate::model::{Order, OrderPayload};
use async_trait::async_trait;
use record_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Status rules (terminal `delivered`, delete only while `pending`) are enforced by
/// the Order actor's hooks; this client only forwards and maps errors.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

fn not_found(id: &str) -> RecordError {
    RecordError::NotFound(format!("Order not found for id: {id}"))
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create(&self, payload: OrderPayload) -> Result<Order, RecordError> {
        debug!("Sending request");
        self.inner.create(payload).await.map_err(Self::map_error)
    }

    /// Like [`get`](ActorClient::get), but a missing order is an error.
    #[instrument(skip(self))]
    pub async fn read(&self, id: &str) -> Result<Order, RecordError> {
        self.get(id.to_string())
            .await?
            .ok_or_else(|| not_found(id))
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: &str, payload: OrderPayload) -> Result<Order, RecordError> {
        debug!("Sending request");
        self.inner
            .update(id.to_string(), payload)
            .await
            .map_err(Self::map_error)
    }

    /// Removes a pending order.
    #[instrument(skip(self))]
    pub async fn destroy(&self, id: &str) -> Result<(), RecordError> {
        info!("Sending delete to actor");
        self.inner
            .delete(id.to_string())
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = RecordError;

    fn inner(&self) -> &ResourceClient<Order> {
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
