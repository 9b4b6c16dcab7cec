use crate::domain::vehicle::VehicleId;
use miette::Diagnostic;
use rust_decimal::Decimal;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum RentalError {
    #[error("Vehicle not found id={0}")]
    #[diagnostic(code(rental::not_found))]
    NotFound(VehicleId),

    #[error("Vehicle not available (already rented) id={0}")]
    #[diagnostic(code(rental::already_rented))]
    AlreadyRented(VehicleId),

    #[error("Requested load {requested} kg > max {max} kg for vehicle id={id}")]
    #[diagnostic(code(rental::overload))]
    Overload {
        id: VehicleId,
        requested: Decimal,
        max: Decimal,
    },

    #[error("Battery too low to start vehicle id={id} ({charge_kwh} kWh, need {required_kwh} kWh)")]
    #[diagnostic(code(rental::battery_low), help("charge the vehicle before renting it"))]
    BatteryLow {
        id: VehicleId,
        charge_kwh: Decimal,
        required_kwh: Decimal,
    },

    #[error("Vehicle not rented id={0}")]
    #[diagnostic(code(rental::not_rented))]
    NotRented(VehicleId),

    #[error("Renter mismatch for vehicle id={id}: rented by {expected}, returned by {actual}")]
    #[diagnostic(code(rental::renter_mismatch))]
    RenterMismatch {
        id: VehicleId,
        expected: String,
        actual: String,
    },

    #[error("Severe damage reported on return for vehicle id={0}")]
    #[diagnostic(code(rental::severe_damage))]
    SevereDamage(VehicleId),

    #[error("Vehicle id={0} is not an EV")]
    #[diagnostic(code(rental::not_electric))]
    NotElectric(VehicleId),

    #[error("Rental period of {days} days is out of range for vehicle id={id}")]
    #[diagnostic(code(rental::period_out_of_range))]
    PeriodOutOfRange { id: VehicleId, days: u32 },

    #[error("Rental amount out of range for vehicle id={0}")]
    #[diagnostic(code(rental::amount_out_of_range))]
    AmountOutOfRange(VehicleId),

    #[error("Cannot open log file {path}: {source}")]
    #[diagnostic(code(rental::log_sink_unavailable))]
    LogSinkUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid command: {0}")]
    #[diagnostic(code(rental::invalid_command))]
    InvalidCommand(String),

    #[error("Invalid fleet record: {0}")]
    #[diagnostic(code(rental::invalid_record))]
    InvalidRecord(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RentalError>;
