//! # System Lifecycle & Orchestration
//!
//! Starts the dish and order actors, hands out their clients, and shuts them down.
//!
//! ## The Kitchen Pattern
//!
//! ```rust,ignore
//! let kitchen = Kitchen::start(&config)?;
//!
//! let dish = kitchen.dishes.create(payload).await?;
//! let orders = kitchen.orders.list().await?;
//!
//! kitchen.shutdown().await?;
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Actors log their final size and exit**
//! 4. **Await completion** - Wait for all actor tasks to finish
//!
//! Clones of `kitchen.dishes` / `kitchen.orders` held elsewhere keep their actor
//! alive, so drop them before calling [`Kitchen::shutdown`].

pub mod kitchen;

pub use kitchen::*;
