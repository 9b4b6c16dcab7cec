//! Application layer containing the rental business logic.
//!
//! [`engine::RentalManager`] is the synchronous state machine;
//! [`shared::SharedRentalManager`] puts it behind a `tokio` mutex for callers
//! running on the async runtime.

pub mod engine;
pub mod receipt;
pub mod shared;
