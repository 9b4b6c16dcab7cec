//! Vehicle rental fleet engine.
//!
//! A [`RentalManager`](application::engine::RentalManager) owns a fleet of
//! cars, trucks and electric vehicles and runs the rent / return / charge
//! lifecycle over it: admission checks, vehicle-specific pricing, late and
//! damage penalties at settlement.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
