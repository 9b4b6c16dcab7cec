use crate::domain::money::Money;
use crate::domain::vehicle::VehicleId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Outcome of a successful rental admission. The cost is informational only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentalReceipt {
    pub vehicle_id: VehicleId,
    pub renter: String,
    pub days: u32,
    pub cost: Money,
    pub due_at: DateTime<Utc>,
}

impl fmt::Display for RentalReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rented vehicle id={} to member={} for {} days; cost={}",
            self.vehicle_id, self.renter, self.days, self.cost
        )
    }
}

/// Settlement of a completed return.
///
/// `penalty` is the sum of `late_penalty` and `damage_fee`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnReceipt {
    pub vehicle_id: VehicleId,
    pub renter: String,
    pub actual_days: u32,
    pub base_cost: Money,
    pub late_days: u32,
    pub late_penalty: Money,
    pub damage_fee: Money,
    pub penalty: Money,
    pub total: Money,
}

impl fmt::Display for ReturnReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vehicle id={} returned by {}. Base={} Penalty={} Total={}",
            self.vehicle_id, self.renter, self.base_cost, self.penalty, self.total
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChargeReceipt {
    pub vehicle_id: VehicleId,
    pub added_kwh: Decimal,
    pub charge_kwh: Decimal,
    pub requested_by: Option<String>,
}

impl fmt::Display for ChargeReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Charged EV id={} + {}kWh (now {} kWh)",
            self.vehicle_id,
            self.added_kwh.normalize(),
            self.charge_kwh.normalize()
        )?;
        if let Some(renter) = &self.requested_by {
            write!(f, " requested by {renter}")?;
        }
        Ok(())
    }
}

/// Result of executing a [`Command`](crate::domain::command::Command).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Receipt {
    Rented(RentalReceipt),
    Returned(ReturnReceipt),
    Charged(ChargeReceipt),
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Receipt::Rented(r) => r.fmt(f),
            Receipt::Returned(r) => r.fmt(f),
            Receipt::Charged(r) => r.fmt(f),
        }
    }
}
