use crate::application::engine::RentalManager;
use crate::application::receipt::{ChargeReceipt, Receipt, RentalReceipt, ReturnReceipt};
use crate::domain::command::Command;
use crate::domain::fleet::VehicleListing;
use crate::domain::vehicle::VehicleId;
use crate::error::Result;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A cloneable handle that serializes access to one [`RentalManager`].
///
/// The fleet and the ledger sit behind a single lock, so each operation sees
/// and leaves them consistent no matter how many tasks share the handle.
#[derive(Clone)]
pub struct SharedRentalManager {
    inner: Arc<Mutex<RentalManager>>,
}

impl SharedRentalManager {
    pub fn new(manager: RentalManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    pub async fn rent(
        &self,
        renter: &str,
        vehicle_id: VehicleId,
        days: u32,
        load_kg: Decimal,
    ) -> Result<RentalReceipt> {
        self.inner.lock().await.rent(renter, vehicle_id, days, load_kg)
    }

    pub async fn return_vehicle(
        &self,
        renter: &str,
        vehicle_id: VehicleId,
        actual_days: u32,
        damaged: bool,
    ) -> Result<ReturnReceipt> {
        self.inner
            .lock()
            .await
            .return_vehicle(renter, vehicle_id, actual_days, damaged)
    }

    pub async fn charge_battery(&self, vehicle_id: VehicleId, kwh: Decimal) -> Result<ChargeReceipt> {
        self.inner.lock().await.charge_battery(vehicle_id, kwh)
    }

    pub async fn charge_battery_for(
        &self,
        renter: &str,
        vehicle_id: VehicleId,
        kwh: Decimal,
    ) -> Result<ChargeReceipt> {
        self.inner
            .lock()
            .await
            .charge_battery_for(renter, vehicle_id, kwh)
    }

    pub async fn execute(&self, command: Command) -> Result<Receipt> {
        self.inner.lock().await.execute(command)
    }

    pub async fn list_fleet(&self) -> Vec<VehicleListing> {
        self.inner.lock().await.list_fleet()
    }

    pub async fn is_consistent(&self) -> bool {
        self.inner.lock().await.is_consistent()
    }

    /// Returns the manager if this is the last handle to it.
    pub fn into_inner(self) -> Option<RentalManager> {
        Arc::try_unwrap(self.inner).ok().map(Mutex::into_inner)
    }
}
