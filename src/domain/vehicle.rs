use crate::domain::money::Money;
use crate::error::{RentalError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub type VehicleId = u32;

/// Truck load fee, charged per kg per rental day.
pub const LOAD_FEE_PER_KG_DAY: Decimal = dec!(0.10);
/// Share of battery capacity an EV needs before it can be handed out.
pub const MIN_START_CHARGE_RATIO: Decimal = dec!(0.1);
/// Below this share of capacity an EV rental carries [`LOW_BATTERY_SURCHARGE`].
pub const SURCHARGE_CHARGE_RATIO: Decimal = dec!(0.2);
pub const LOW_BATTERY_SURCHARGE: Money = Money(dec!(50));

/// Battery state of an electric vehicle, in kWh.
#[derive(Debug, Clone, PartialEq)]
pub struct Battery {
    capacity_kwh: Decimal,
    charge_kwh: Decimal,
}

impl Battery {
    pub fn new(capacity_kwh: Decimal, charge_kwh: Decimal) -> Self {
        Self {
            capacity_kwh,
            charge_kwh,
        }
    }

    pub fn capacity_kwh(&self) -> Decimal {
        self.capacity_kwh
    }

    pub fn charge_kwh(&self) -> Decimal {
        self.charge_kwh
    }

    /// Adds energy, saturating at capacity.
    pub fn charge(&mut self, kwh: Decimal) {
        self.charge_kwh = self.charge_kwh.saturating_add(kwh).min(self.capacity_kwh);
    }

    pub fn start_threshold_kwh(&self) -> Decimal {
        self.capacity_kwh * MIN_START_CHARGE_RATIO
    }

    pub fn surcharge_threshold_kwh(&self) -> Decimal {
        self.capacity_kwh * SURCHARGE_CHARGE_RATIO
    }

    pub fn can_start(&self) -> bool {
        self.charge_kwh >= self.start_threshold_kwh()
    }

    pub fn needs_surcharge(&self) -> bool {
        self.charge_kwh < self.surcharge_threshold_kwh()
    }
}

/// The closed set of vehicle variants the fleet supports.
#[derive(Debug, Clone, PartialEq)]
pub enum VehicleKind {
    Car { passenger_capacity: u32 },
    Truck { max_load_kg: Decimal },
    Electric(Battery),
}

impl VehicleKind {
    pub fn label(&self) -> &'static str {
        match self {
            VehicleKind::Car { .. } => "car",
            VehicleKind::Truck { .. } => "truck",
            VehicleKind::Electric(_) => "electric",
        }
    }
}

/// A rentable unit of the fleet.
///
/// The `rented` flag is only flipped by the rental engine, which keeps it in
/// step with the rental ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    id: VehicleId,
    name: String,
    daily_rate: Money,
    rented: bool,
    kind: VehicleKind,
}

impl Vehicle {
    pub fn new(id: VehicleId, name: impl Into<String>, daily_rate: Decimal, kind: VehicleKind) -> Self {
        Self {
            id,
            name: name.into(),
            daily_rate: Money::new(daily_rate),
            rented: false,
            kind,
        }
    }

    pub fn car(id: VehicleId, name: impl Into<String>, daily_rate: Decimal, passenger_capacity: u32) -> Self {
        Self::new(id, name, daily_rate, VehicleKind::Car { passenger_capacity })
    }

    pub fn truck(id: VehicleId, name: impl Into<String>, daily_rate: Decimal, max_load_kg: Decimal) -> Self {
        Self::new(id, name, daily_rate, VehicleKind::Truck { max_load_kg })
    }

    pub fn electric(
        id: VehicleId,
        name: impl Into<String>,
        daily_rate: Decimal,
        capacity_kwh: Decimal,
        charge_kwh: Decimal,
    ) -> Self {
        Self::new(
            id,
            name,
            daily_rate,
            VehicleKind::Electric(Battery::new(capacity_kwh, charge_kwh)),
        )
    }

    pub fn id(&self) -> VehicleId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn daily_rate(&self) -> Money {
        self.daily_rate
    }

    pub fn kind(&self) -> &VehicleKind {
        &self.kind
    }

    pub fn is_rented(&self) -> bool {
        self.rented
    }

    pub(crate) fn set_rented(&mut self, rented: bool) {
        self.rented = rented;
    }

    /// Load limit for trucks; `None` for every other kind.
    pub fn max_load_kg(&self) -> Option<Decimal> {
        match self.kind {
            VehicleKind::Truck { max_load_kg } => Some(max_load_kg),
            _ => None,
        }
    }

    pub fn battery(&self) -> Option<&Battery> {
        match &self.kind {
            VehicleKind::Electric(battery) => Some(battery),
            _ => None,
        }
    }

    fn base_cost(&self, days: u32) -> Result<Money> {
        self.daily_rate
            .checked_mul(days)
            .ok_or(RentalError::AmountOutOfRange(self.id))
    }

    /// Rental cost for `days`, ignoring any cargo.
    pub fn rent_cost(&self, days: u32) -> Result<Money> {
        let base = self.base_cost(days)?;
        match &self.kind {
            VehicleKind::Electric(battery) if battery.needs_surcharge() => base
                .checked_add(LOW_BATTERY_SURCHARGE)
                .ok_or(RentalError::AmountOutOfRange(self.id)),
            VehicleKind::Car { .. } | VehicleKind::Truck { .. } | VehicleKind::Electric(_) => Ok(base),
        }
    }

    /// Truck pricing: the base rate plus a per-kg per-day load fee.
    pub fn rent_cost_with_load(&self, days: u32, load_kg: Decimal) -> Result<Money> {
        let base = self.base_cost(days)?;
        load_kg
            .checked_mul(LOAD_FEE_PER_KG_DAY)
            .and_then(|fee| fee.checked_mul(Decimal::from(days)))
            .and_then(|fee| base.checked_add(Money::new(fee)))
            .ok_or(RentalError::AmountOutOfRange(self.id))
    }

    /// Readiness check run before a vehicle is handed out.
    pub fn prepare_for_use(&self) -> Result<()> {
        match &self.kind {
            VehicleKind::Electric(battery) if !battery.can_start() => Err(RentalError::BatteryLow {
                id: self.id,
                charge_kwh: battery.charge_kwh(),
                required_kwh: battery.start_threshold_kwh(),
            }),
            _ => Ok(()),
        }
    }

    /// Charges an electric vehicle and returns its new charge level.
    pub fn charge(&mut self, kwh: Decimal) -> Result<Decimal> {
        match &mut self.kind {
            VehicleKind::Electric(battery) => {
                battery.charge(kwh);
                Ok(battery.charge_kwh())
            }
            _ => Err(RentalError::NotElectric(self.id)),
        }
    }

    pub fn describe(&self) -> String {
        let detail = match &self.kind {
            VehicleKind::Car { passenger_capacity } => format!("Car seats={passenger_capacity}"),
            VehicleKind::Truck { max_load_kg } => {
                format!("Truck max_load={}kg", max_load_kg.normalize())
            }
            VehicleKind::Electric(battery) => format!(
                "Electric battery={}/{}kWh",
                battery.charge_kwh().normalize(),
                battery.capacity_kwh().normalize()
            ),
        };
        format!("[{}] {} (rate {}) {}", self.id, self.name, self.daily_rate, detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tesla() -> Vehicle {
        Vehicle::electric(3, "Tesla Model 3", dec!(350), dec!(75), dec!(5))
    }

    #[test]
    fn test_car_cost_is_rate_times_days() {
        let car = Vehicle::car(1, "Toyota Avanza", dec!(200), 7);
        assert_eq!(car.rent_cost(3).unwrap(), Money::new(dec!(600)));
        assert!(car.prepare_for_use().is_ok());
    }

    #[test]
    fn test_truck_load_pricing() {
        let truck = Vehicle::truck(2, "Hino Dutro", dec!(400), dec!(1000));
        assert_eq!(truck.max_load_kg(), Some(dec!(1000)));
        // 400*2 + 500*0.10*2
        assert_eq!(truck.rent_cost_with_load(2, dec!(500)).unwrap(), Money::new(dec!(900)));
        assert_eq!(truck.rent_cost(2).unwrap(), Money::new(dec!(800)));
    }

    #[test]
    fn test_electric_readiness_threshold() {
        let mut ev = tesla();
        assert!(matches!(
            ev.prepare_for_use(),
            Err(RentalError::BatteryLow { id: 3, .. })
        ));

        // exactly 10% of capacity is enough to start
        ev.charge(dec!(2.5)).unwrap();
        assert_eq!(ev.battery().unwrap().charge_kwh(), dec!(7.5));
        assert!(ev.prepare_for_use().is_ok());
    }

    #[test]
    fn test_electric_surcharge_below_twenty_percent() {
        let mut ev = tesla();
        ev.charge(dec!(5)).unwrap();
        assert_eq!(ev.rent_cost(2).unwrap(), Money::new(dec!(750)));

        ev.charge(dec!(5)).unwrap();
        // 15 kWh is exactly 20%, no surcharge
        assert_eq!(ev.rent_cost(2).unwrap(), Money::new(dec!(700)));
    }

    #[test]
    fn test_charge_saturates_at_capacity() {
        let mut ev = tesla();
        assert_eq!(ev.charge(dec!(500)).unwrap(), dec!(75));
        assert_eq!(ev.charge(Decimal::MAX).unwrap(), dec!(75));
    }

    #[test]
    fn test_charge_non_electric_fails() {
        let mut car = Vehicle::car(1, "Toyota Avanza", dec!(200), 7);
        assert!(matches!(car.charge(dec!(10)), Err(RentalError::NotElectric(1))));
    }

    #[test]
    fn test_cost_out_of_decimal_range() {
        let limo = Vehicle::car(9, "Stretch Limo", Decimal::MAX, 4);
        assert_eq!(limo.rent_cost(1).unwrap(), Money::new(Decimal::MAX));
        assert!(matches!(limo.rent_cost(2), Err(RentalError::AmountOutOfRange(9))));

        let truck = Vehicle::truck(8, "Road Train", dec!(400), Decimal::MAX);
        assert!(matches!(
            truck.rent_cost_with_load(20, Decimal::MAX),
            Err(RentalError::AmountOutOfRange(8))
        ));
    }

    #[test]
    fn test_describe() {
        let truck = Vehicle::truck(2, "Hino Dutro", dec!(400.0), dec!(1000));
        assert_eq!(truck.describe(), "[2] Hino Dutro (rate 400) Truck max_load=1000kg");
        assert_eq!(tesla().describe(), "[3] Tesla Model 3 (rate 350) Electric battery=5/75kWh");
    }
}
