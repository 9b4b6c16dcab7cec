use crate::domain::vehicle::{Vehicle, VehicleId};
use crate::error::{RentalError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum KindColumn {
    Car,
    Truck,
    Electric,
}

/// One fleet CSV row. Only the columns of the row's kind are required.
#[derive(Debug, Deserialize)]
struct FleetRow {
    kind: KindColumn,
    id: VehicleId,
    name: String,
    daily_rate: Decimal,
    passengers: Option<u32>,
    max_load_kg: Option<Decimal>,
    battery_kwh: Option<Decimal>,
    charge_kwh: Option<Decimal>,
}

fn missing(id: VehicleId, column: &str) -> RentalError {
    RentalError::InvalidRecord(format!("vehicle id={id} is missing {column}"))
}

impl FleetRow {
    fn into_vehicle(self) -> Result<Vehicle> {
        let id = self.id;
        match self.kind {
            KindColumn::Car => {
                let passengers = self.passengers.ok_or_else(|| missing(id, "passengers"))?;
                Ok(Vehicle::car(id, self.name, self.daily_rate, passengers))
            }
            KindColumn::Truck => {
                let max_load_kg = self.max_load_kg.ok_or_else(|| missing(id, "max_load_kg"))?;
                Ok(Vehicle::truck(id, self.name, self.daily_rate, max_load_kg))
            }
            KindColumn::Electric => {
                let capacity = self.battery_kwh.ok_or_else(|| missing(id, "battery_kwh"))?;
                let charge = self.charge_kwh.unwrap_or(Decimal::ZERO);
                Ok(Vehicle::electric(id, self.name, self.daily_rate, capacity, charge))
            }
        }
    }
}

/// Reads fleet seed data from a CSV source.
///
/// Header: `kind,id,name,daily_rate,passengers,max_load_kg,battery_kwh,charge_kwh`.
/// An electric row without `charge_kwh` starts empty.
pub struct FleetReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> FleetReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn vehicles(self) -> impl Iterator<Item = Result<Vehicle>> {
        self.reader.into_deserialize::<FleetRow>().map(|result| {
            let row = result.map_err(RentalError::from)?;
            row.into_vehicle()
        })
    }
}
