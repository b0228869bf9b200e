//! # Observability & Tracing
//!
//! Initializes structured logging for a system of resource actors.
//!
//! The compact format hides the crate/module prefix (`with_target(false)`); every
//! actor event already carries an `entity_type` field, which keeps lines short while
//! staying filterable.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown and final store size
//! - **Requests**: List, Create, Get, Update, Delete at `debug` with their payloads
//! - **Mutations**: `info` with the record id and store size
//! - **Rejections**: `warn` with the error; the failing check is logged at `debug`
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads and failing checks
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` wins over `default_filter`.
///
/// Calling it twice is harmless: the second install is ignored.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .try_init();
}
