use crate::domain::money::Money;
use crate::domain::vehicle::VehicleId;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::HashMap;

pub const HOURS_PER_RENTAL_DAY: i64 = 24;
pub const LATE_FEE_PER_DAY: Money = Money(dec!(20));

/// An active rental: who has the vehicle, until when, and with what cargo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentalRecord {
    pub renter: String,
    pub started_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
    /// Committed cargo in kg; zero for anything but trucks.
    pub load_kg: Decimal,
}

impl RentalRecord {
    /// Opens a record due `days` whole days after `started_at`.
    ///
    /// Returns `None` when the due date falls outside chrono's calendar range.
    pub fn new(
        renter: impl Into<String>,
        started_at: DateTime<Utc>,
        days: u32,
        load_kg: Decimal,
    ) -> Option<Self> {
        let due_at = Duration::try_hours(HOURS_PER_RENTAL_DAY * i64::from(days))
            .and_then(|period| started_at.checked_add_signed(period))?;
        Some(Self {
            renter: renter.into(),
            started_at,
            due_at,
            load_kg,
        })
    }

    /// Whole days overdue at `now`, counting any started day. Zero if not overdue.
    pub fn late_days(&self, now: DateTime<Utc>) -> u32 {
        if now <= self.due_at {
            return 0;
        }
        let hours_late = (now - self.due_at).num_hours();
        u32::try_from(hours_late / HOURS_PER_RENTAL_DAY + 1).unwrap_or(u32::MAX)
    }
}

/// Active rentals keyed by vehicle; at most one record per vehicle.
#[derive(Debug, Default, Clone)]
pub struct RentalLedger {
    records: HashMap<VehicleId, RentalRecord>,
}

impl RentalLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, vehicle_id: VehicleId, record: RentalRecord) {
        self.records.insert(vehicle_id, record);
    }

    pub fn get(&self, vehicle_id: VehicleId) -> Option<&RentalRecord> {
        self.records.get(&vehicle_id)
    }

    pub fn close(&mut self, vehicle_id: VehicleId) -> Option<RentalRecord> {
        self.records.remove(&vehicle_id)
    }

    pub fn contains(&self, vehicle_id: VehicleId) -> bool {
        self.records.contains_key(&vehicle_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VehicleId, &RentalRecord)> {
        self.records.iter()
    }
}
