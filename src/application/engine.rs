use crate::application::receipt::{ChargeReceipt, Receipt, RentalReceipt, ReturnReceipt};
use crate::domain::command::{Command, CommandType};
use crate::domain::damage::{DamagePolicy, DamageSeverity, MINOR_DAMAGE_FEE, parity_inspection};
use crate::domain::fleet::{FleetRegistry, VehicleListing};
use crate::domain::money::Money;
use crate::domain::ports::{ClockBox, LogSink, LogSinkBox};
use crate::domain::rental::{LATE_FEE_PER_DAY, RentalLedger, RentalRecord};
use crate::domain::vehicle::{Vehicle, VehicleId};
use crate::error::{RentalError, Result};
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// The rental state machine.
///
/// `RentalManager` owns the fleet and the ledger of active rentals and is the
/// only writer of a vehicle's rented flag. Every operation runs to completion
/// on `&mut self`; wrap it in a
/// [`SharedRentalManager`](crate::application::shared::SharedRentalManager)
/// to serve concurrent callers.
pub struct RentalManager {
    fleet: FleetRegistry,
    ledger: RentalLedger,
    log: LogSinkBox,
    clock: ClockBox,
    damage_policy: DamagePolicy,
}

impl RentalManager {
    /// Creates a manager with an empty fleet.
    ///
    /// # Arguments
    ///
    /// * `log` - Sink for the rental audit log.
    /// * `clock` - Time source for due dates and late penalties.
    pub fn new(log: LogSinkBox, clock: ClockBox) -> Self {
        Self {
            fleet: FleetRegistry::new(),
            ledger: RentalLedger::new(),
            log,
            clock,
            damage_policy: parity_inspection,
        }
    }

    /// Replaces the policy used to grade damage reported on return.
    pub fn with_damage_policy(mut self, policy: DamagePolicy) -> Self {
        self.damage_policy = policy;
        self
    }

    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        self.fleet.add(vehicle);
    }

    pub fn fleet(&self) -> &FleetRegistry {
        &self.fleet
    }

    pub fn ledger(&self) -> &RentalLedger {
        &self.ledger
    }

    pub fn list_fleet(&self) -> Vec<VehicleListing> {
        self.fleet.list()
    }

    /// True when every vehicle is flagged rented exactly when the ledger holds
    /// a record for it, and every record belongs to a known vehicle.
    pub fn is_consistent(&self) -> bool {
        self.fleet
            .iter()
            .all(|v| v.is_rented() == self.ledger.contains(v.id()))
            && self.ledger.iter().all(|(id, _)| self.fleet.find(*id).is_some())
    }

    /// Admits a rental.
    ///
    /// Trucks are priced with `load_kg` and reject loads above their limit;
    /// other vehicles ignore the load. Admission is all-or-nothing: on any
    /// error the vehicle stays available and no record is opened.
    pub fn rent(
        &mut self,
        renter: &str,
        vehicle_id: VehicleId,
        days: u32,
        load_kg: Decimal,
    ) -> Result<RentalReceipt> {
        let Self {
            fleet,
            ledger,
            log,
            clock,
            ..
        } = self;
        let log: &dyn LogSink = &**log;

        let Some(vehicle) = fleet.find_mut(vehicle_id) else {
            return Err(reject(log, "Rent failed: ", RentalError::NotFound(vehicle_id)));
        };
        if vehicle.is_rented() {
            return Err(reject(log, "Rent failed: ", RentalError::AlreadyRented(vehicle_id)));
        }

        let priced = match vehicle.max_load_kg() {
            Some(max) if load_kg > max => {
                let err = RentalError::Overload {
                    id: vehicle_id,
                    requested: load_kg,
                    max,
                };
                return Err(reject(log, "Overload attempt: ", err));
            }
            Some(_) => vehicle.rent_cost_with_load(days, load_kg).map(|cost| (cost, load_kg)),
            None => vehicle.rent_cost(days).map(|cost| (cost, Decimal::ZERO)),
        };
        let (cost, committed_load) = match priced {
            Ok(priced) => priced,
            Err(e) => return Err(reject(log, "Rent failed: ", e)),
        };

        if let Err(e) = vehicle.prepare_for_use() {
            return Err(reject(log, "Start failed: ", e));
        }

        let Some(record) = RentalRecord::new(renter, clock.now(), days, committed_load) else {
            let err = RentalError::PeriodOutOfRange { id: vehicle_id, days };
            return Err(reject(log, "Rent failed: ", err));
        };
        let receipt = RentalReceipt {
            vehicle_id,
            renter: renter.to_string(),
            days,
            cost,
            due_at: record.due_at,
        };

        vehicle.set_rented(true);
        ledger.open(vehicle_id, record);

        debug!(vehicle_id, renter, %cost, "rental admitted");
        log.log(&receipt.to_string());
        Ok(receipt)
    }

    /// Settles a return.
    ///
    /// The base cost is recomputed for `actual_days` (trucks use the load
    /// recorded at rental time). Overdue returns pay [`LATE_FEE_PER_DAY`] per
    /// started day late. Reported damage is graded by the damage policy:
    /// minor damage adds [`MINOR_DAMAGE_FEE`], severe damage ends the rental
    /// and fails with [`RentalError::SevereDamage`] after freeing the vehicle.
    pub fn return_vehicle(
        &mut self,
        renter: &str,
        vehicle_id: VehicleId,
        actual_days: u32,
        damaged: bool,
    ) -> Result<ReturnReceipt> {
        let damage_policy = self.damage_policy;
        let Self {
            fleet,
            ledger,
            log,
            clock,
            ..
        } = self;
        let log: &dyn LogSink = &**log;

        let Some(vehicle) = fleet.find_mut(vehicle_id) else {
            return Err(reject(log, "Return failed: ", RentalError::NotFound(vehicle_id)));
        };
        let Some(record) = ledger.get(vehicle_id) else {
            return Err(reject(log, "Return failed: ", RentalError::NotRented(vehicle_id)));
        };
        if record.renter != renter {
            let err = RentalError::RenterMismatch {
                id: vehicle_id,
                expected: record.renter.clone(),
                actual: renter.to_string(),
            };
            return Err(reject(log, "Return failed: ", err));
        }

        let priced = match vehicle.max_load_kg() {
            Some(_) => vehicle.rent_cost_with_load(actual_days, record.load_kg),
            None => vehicle.rent_cost(actual_days),
        };
        let base_cost = match priced {
            Ok(cost) => cost,
            Err(e) => return Err(reject(log, "Return failed: ", e)),
        };

        let late_days = record.late_days(clock.now());
        let late_penalty = LATE_FEE_PER_DAY * late_days;

        let mut damage_fee = Money::ZERO;
        if damaged {
            match damage_policy(vehicle_id) {
                DamageSeverity::Severe => {
                    vehicle.set_rented(false);
                    ledger.close(vehicle_id);
                    return Err(reject(log, "", RentalError::SevereDamage(vehicle_id)));
                }
                DamageSeverity::Minor => {
                    damage_fee = MINOR_DAMAGE_FEE;
                    log.log(&format!("Minor damage fee applied for vehicle id={vehicle_id}"));
                }
            }
        }

        let penalty = late_penalty + damage_fee;
        let Some(total) = base_cost.checked_add(penalty) else {
            let err = RentalError::AmountOutOfRange(vehicle_id);
            return Err(reject(log, "Return failed: ", err));
        };
        let receipt = ReturnReceipt {
            vehicle_id,
            renter: renter.to_string(),
            actual_days,
            base_cost,
            late_days,
            late_penalty,
            damage_fee,
            penalty,
            total,
        };

        vehicle.set_rented(false);
        ledger.close(vehicle_id);

        debug!(vehicle_id, renter, total = %receipt.total, late_days, "rental settled");
        log.log(&receipt.to_string());
        Ok(receipt)
    }

    /// Adds `kwh` to an electric vehicle's battery, saturating at capacity.
    pub fn charge_battery(&mut self, vehicle_id: VehicleId, kwh: Decimal) -> Result<ChargeReceipt> {
        let log: &dyn LogSink = &*self.log;

        let Some(vehicle) = self.fleet.find_mut(vehicle_id) else {
            return Err(reject(log, "Charge failed: ", RentalError::NotFound(vehicle_id)));
        };
        let charge_kwh = match vehicle.charge(kwh) {
            Ok(level) => level,
            Err(e) => return Err(reject(log, "Charge failed: ", e)),
        };

        let receipt = ChargeReceipt {
            vehicle_id,
            added_kwh: kwh,
            charge_kwh,
            requested_by: None,
        };
        log.log(&receipt.to_string());
        Ok(receipt)
    }

    /// Charges on behalf of a renter.
    ///
    /// The renter is only recorded in the log; it is not checked against the
    /// vehicle's active rental.
    pub fn charge_battery_for(
        &mut self,
        renter: &str,
        vehicle_id: VehicleId,
        kwh: Decimal,
    ) -> Result<ChargeReceipt> {
        let mut receipt = self.charge_battery(vehicle_id, kwh)?;
        self.log.log(&format!(
            "Charge requested by member {renter} for vehicle {vehicle_id}"
        ));
        receipt.requested_by = Some(renter.to_string());
        Ok(receipt)
    }

    /// Dispatches a command to the matching operation.
    pub fn execute(&mut self, command: Command) -> Result<Receipt> {
        let vehicle = command.vehicle;
        match command.op {
            CommandType::Rent => {
                let renter = self.require(command.renter, "rent", "renter")?;
                let days = self.require(command.days, "rent", "days")?;
                let load_kg = command.load_kg.unwrap_or(Decimal::ZERO);
                self.rent(&renter, vehicle, days, load_kg)
                    .map(Receipt::Rented)
            }
            CommandType::Return => {
                let renter = self.require(command.renter, "return", "renter")?;
                let days = self.require(command.days, "return", "days")?;
                let damaged = command.damaged.unwrap_or(false);
                self.return_vehicle(&renter, vehicle, days, damaged)
                    .map(Receipt::Returned)
            }
            CommandType::Charge => {
                let kwh = self.require(command.kwh, "charge", "kwh")?;
                let charged = match command.renter {
                    Some(renter) => self.charge_battery_for(&renter, vehicle, kwh),
                    None => self.charge_battery(vehicle, kwh),
                };
                charged.map(Receipt::Charged)
            }
        }
    }

    fn require<T>(&self, value: Option<T>, op: &str, field: &str) -> Result<T> {
        value.ok_or_else(|| {
            let err = RentalError::InvalidCommand(format!("{op} requires {field}"));
            reject(&*self.log, "", err)
        })
    }
}

/// Logs a failed operation and hands the error back for returning.
fn reject(log: &dyn LogSink, context: &str, err: RentalError) -> RentalError {
    warn!(error = %err, "{context}operation rejected");
    log.log(&format!("{context}{err}"));
    err
}
