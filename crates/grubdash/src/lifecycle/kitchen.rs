use crate::clients::{DishClient, OrderClient};
use crate::config::{ConfigError, KitchenConfig};
use crate::error::RecordError;
use crate::model::{Dish, Order};
use crate::{dish_actor, order_actor};
use record_actor::MemoryStore;
use tracing::{error, info};

/// The runtime orchestrator for the dish and order actors.
///
/// Both actors run with `Context = ()`: order line items are never checked against
/// the dish collection, so neither actor needs the other's client.
pub struct Kitchen {
    /// Client for interacting with the Dish actor
    pub dishes: DishClient,

    /// Client for interacting with the Order actor
    pub orders: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Kitchen {
    /// Starts both actors with empty collections and the default settings.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let config = KitchenConfig::default();
        Self::spawn(&config, Vec::new(), Vec::new())
    }

    /// Loads the configured seed data and starts both actors over it.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(config: &KitchenConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let dishes = config.load_dishes()?;
        let orders = config.load_orders()?;
        Ok(Self::spawn(config, dishes, orders))
    }

    fn spawn(
        config: &KitchenConfig,
        dishes: Vec<Dish>,
        orders: Vec<Order>,
    ) -> Self {
        let (dish_actor, dish_client) = dish_actor::with_store(
            config.buffer_size,
            MemoryStore::with_records(dishes),
            config.dish_ids(),
        );
        let dish_handle = tokio::spawn(dish_actor.run(()));

        let (order_actor, order_client) = order_actor::with_store(
            config.buffer_size,
            MemoryStore::with_records(orders),
            config.order_ids(),
        );
        let order_handle = tokio::spawn(order_actor.run(()));

        info!(strategy = ?config.ids.strategy, "Kitchen started");
        Self {
            dishes: dish_client,
            orders: order_client,
            handles: vec![dish_handle, order_handle],
        }
    }

    /// Drops both clients and waits for the actors to finish.
    pub async fn shutdown(self) -> Result<(), RecordError> {
        info!("Shutting down kitchen...");

        // Closing the channels ends each actor's run loop.
        drop(self.dishes);
        drop(self.orders);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(RecordError::Unavailable(format!("Actor task failed: {e}")));
            }
        }

        info!("Kitchen shutdown complete.");
        Ok(())
    }
}

impl Default for Kitchen {
    fn default() -> Self {
        Self::new()
    }
}
