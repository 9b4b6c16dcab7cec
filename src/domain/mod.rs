//! Domain model of the rental fleet: vehicles, the fleet registry, the rental
//! ledger, and the ports the engine depends on.

pub mod command;
pub mod damage;
pub mod fleet;
pub mod money;
pub mod ports;
pub mod rental;
pub mod vehicle;
