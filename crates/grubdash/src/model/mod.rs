//! Records and the payloads submitted to create or update them.

pub mod dish;
pub mod order;
pub mod status;

pub use dish::*;
pub use order::*;
pub use status::*;
