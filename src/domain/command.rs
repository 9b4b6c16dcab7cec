use crate::domain::vehicle::VehicleId;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    Rent,
    Return,
    Charge,
}

/// One rental operation as it appears in a command stream.
///
/// Which optional fields are required depends on `op`: `rent` needs a renter
/// and days, `return` needs a renter and days, `charge` needs kWh.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Command {
    pub op: CommandType,
    pub renter: Option<String>,
    pub vehicle: VehicleId,
    pub days: Option<u32>,
    pub load_kg: Option<Decimal>,
    pub damaged: Option<bool>,
    pub kwh: Option<Decimal>,
}

impl Command {
    pub fn rent(renter: &str, vehicle: VehicleId, days: u32, load_kg: Option<Decimal>) -> Self {
        Self {
            op: CommandType::Rent,
            renter: Some(renter.to_string()),
            vehicle,
            days: Some(days),
            load_kg,
            damaged: None,
            kwh: None,
        }
    }

    pub fn return_vehicle(renter: &str, vehicle: VehicleId, days: u32, damaged: bool) -> Self {
        Self {
            op: CommandType::Return,
            renter: Some(renter.to_string()),
            vehicle,
            days: Some(days),
            load_kg: None,
            damaged: Some(damaged),
            kwh: None,
        }
    }

    pub fn charge(renter: Option<&str>, vehicle: VehicleId, kwh: Decimal) -> Self {
        Self {
            op: CommandType::Charge,
            renter: renter.map(str::to_string),
            vehicle,
            days: None,
            load_kg: None,
            damaged: None,
            kwh: Some(kwh),
        }
    }
}
