use crate::domain::money::Money;
use crate::domain::vehicle::{Vehicle, VehicleId};
use rust_decimal_macros::dec;
use serde::Serialize;

/// Read-only view of a vehicle for fleet listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleListing {
    pub id: VehicleId,
    pub kind: &'static str,
    pub name: String,
    pub daily_rate: Money,
    pub rented: bool,
    pub description: String,
}

impl From<&Vehicle> for VehicleListing {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id(),
            kind: vehicle.kind().label(),
            name: vehicle.name().to_string(),
            daily_rate: vehicle.daily_rate(),
            rented: vehicle.is_rented(),
            description: vehicle.describe(),
        }
    }
}

/// Ordered collection of the vehicles the rental engine manages.
///
/// Vehicles are owned by value and kept in insertion order. Identifiers are
/// expected to be unique; lookups return the first match.
#[derive(Debug, Default, Clone)]
pub struct FleetRegistry {
    vehicles: Vec<Vehicle>,
}

impl FleetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, vehicle: Vehicle) {
        self.vehicles.push(vehicle);
    }

    pub fn find(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id() == id)
    }

    pub fn find_mut(&mut self, id: VehicleId) -> Option<&mut Vehicle> {
        self.vehicles.iter_mut().find(|v| v.id() == id)
    }

    pub fn list(&self) -> Vec<VehicleListing> {
        self.vehicles.iter().map(VehicleListing::from).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

impl FromIterator<Vehicle> for FleetRegistry {
    fn from_iter<I: IntoIterator<Item = Vehicle>>(iter: I) -> Self {
        Self {
            vehicles: iter.into_iter().collect(),
        }
    }
}

/// The three-vehicle fleet used when no fleet file is supplied.
pub fn reference_fleet() -> Vec<Vehicle> {
    vec![
        Vehicle::car(1, "Toyota Avanza", dec!(200), 7),
        Vehicle::truck(2, "Hino Dutro", dec!(400), dec!(1000)),
        Vehicle::electric(3, "Tesla Model 3", dec!(350), dec!(75), dec!(5)),
    ]
}
