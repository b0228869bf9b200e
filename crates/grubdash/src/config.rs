//! # Configuration
//!
//! Runtime settings for a [`Kitchen`](crate::lifecycle::Kitchen), read from TOML.
//! Every field has a default, so an empty file (or no file) is a valid configuration.
//!
//! ```toml
//! log_filter = "info"
//! buffer_size = 32
//!
//! [ids]
//! strategy = "sequential"   # or "random"
//! dish_prefix = "d"
//! order_prefix = "o"
//!
//! [seed]
//! dishes = "data/dishes.json"
//! orders = "data/orders.json"
//! ```
//!
//! Relative seed paths are resolved against the directory of the configuration file.

use crate::dish_actor;
use crate::model::{Dish, DishPayload, Order, OrderPayload};
use crate::order_actor;
use record_actor::{IdGenerator, RandomIds, SequentialIds};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while loading configuration or seed data.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Error that occurs during file I/O operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error that occurs when parsing TOML configuration.
    #[error("Configuration error: {0}")]
    Parse(String),
    /// A setting is present but unusable.
    #[error("Validation error: {0}")]
    Validation(String),
    /// A seed file is malformed or holds a record the checks reject.
    #[error("Seed error: {0}")]
    Seed(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.message().to_string())
    }
}

/// Boxed id source handed to the actors.
pub type IdSource = Box<dyn FnMut() -> String + Send>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// `d1`, `d2`, … with the configured prefix.
    #[default]
    Sequential,
    /// 32-character random hex ids; the prefix is not used.
    Random,
}

impl IdStrategy {
    pub fn source(self, prefix: &str) -> IdSource {
        match self {
            Self::Sequential => {
                let mut ids = SequentialIds::new(prefix);
                Box::new(move || ids.next_id())
            }
            Self::Random => {
                let mut ids = RandomIds;
                Box::new(move || ids.next_id())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdConfig {
    pub strategy: IdStrategy,
    pub dish_prefix: String,
    pub order_prefix: String,
}

impl Default for IdConfig {
    fn default() -> Self {
        Self {
            strategy: IdStrategy::default(),
            dish_prefix: "d".to_string(),
            order_prefix: "o".to_string(),
        }
    }
}

/// Optional JSON files holding the initial contents of each collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedConfig {
    pub dishes: Option<PathBuf>,
    pub orders: Option<PathBuf>,
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KitchenConfig {
    /// Default tracing filter; `RUST_LOG` overrides it.
    pub log_filter: String,
    /// Request channel capacity of each actor.
    pub buffer_size: usize,
    pub ids: IdConfig,
    pub seed: SeedConfig,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            buffer_size: 32,
            ids: IdConfig::default(),
            seed: SeedConfig::default(),
        }
    }
}

impl KitchenConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = contents.parse()?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        config.seed.dishes = config.seed.dishes.map(|p| base_dir.join(p));
        config.seed.orders = config.seed.orders.map(|p| base_dir.join(p));

        info!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Validates the configuration to ensure all settings are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_size == 0 {
            return Err(ConfigError::Validation(
                "buffer_size must be greater than 0".to_string(),
            ));
        }
        if self.ids.strategy == IdStrategy::Sequential
            && (self.ids.dish_prefix.is_empty() || self.ids.order_prefix.is_empty())
        {
            return Err(ConfigError::Validation(
                "sequential ids need a non-empty dish_prefix and order_prefix".to_string(),
            ));
        }
        Ok(())
    }

    pub fn dish_ids(&self) -> IdSource {
        self.ids.strategy.source(&self.ids.dish_prefix)
    }

    pub fn order_ids(&self) -> IdSource {
        self.ids.strategy.source(&self.ids.order_prefix)
    }

    /// Seed dishes, or an empty list when none are configured.
    pub fn load_dishes(&self) -> Result<Vec<Dish>, ConfigError> {
        let Some(path) = &self.seed.dishes else {
            return Ok(Vec::new());
        };
        let dishes: Vec<Dish> = read_seed(path)?;
        check_seed(path, &dishes, |dish| dish.id.as_str(), |dish| {
            dish_actor::checks::create().run(&DishPayload::from(dish))
        })?;
        info!(path = %path.display(), count = dishes.len(), "Dish seed loaded");
        Ok(dishes)
    }

    /// Seed orders, or an empty list when none are configured.
    pub fn load_orders(&self) -> Result<Vec<Order>, ConfigError> {
        let Some(path) = &self.seed.orders else {
            return Ok(Vec::new());
        };
        let orders: Vec<Order> = read_seed(path)?;
        check_seed(path, &orders, |order| order.id.as_str(), |order| {
            order_actor::checks::create().run(&OrderPayload::from(order))
        })?;
        info!(path = %path.display(), count = orders.len(), "Order seed loaded");
        Ok(orders)
    }
}

impl FromStr for KitchenConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: KitchenConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

fn read_seed<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ConfigError> {
    debug!(path = %path.display(), "Reading seed file");
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| ConfigError::Seed(format!("{}: {e}", path.display())))
}

/// Seed records must pass the create checks and carry distinct, non-empty ids.
fn check_seed<T, E: std::fmt::Display>(
    path: &Path,
    records: &[T],
    id: impl Fn(&T) -> &str,
    check: impl Fn(&T) -> Result<(), E>,
) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for (index, record) in records.iter().enumerate() {
        let record_id = id(record);
        let fail = |message: String| {
            ConfigError::Seed(format!("{} (record {index}): {message}", path.display()))
        };

        if record_id.is_empty() {
            return Err(fail("missing id".to_string()));
        }
        if !seen.insert(record_id) {
            return Err(fail(format!("duplicate id {record_id}")));
        }
        check(record).map_err(|e| fail(e.to_string()))?;
    }
    Ok(())
}
