use crate::domain::money::Money;
use crate::domain::vehicle::VehicleId;
use rust_decimal_macros::dec;

pub const MINOR_DAMAGE_FEE: Money = Money(dec!(100));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageSeverity {
    Minor,
    Severe,
}

/// Decides how bad reported damage is for a returned vehicle.
pub type DamagePolicy = fn(VehicleId) -> DamageSeverity;

/// Placeholder inspection: even identifiers are treated as severely damaged.
pub fn parity_inspection(vehicle_id: VehicleId) -> DamageSeverity {
    if vehicle_id % 2 == 0 {
        DamageSeverity::Severe
    } else {
        DamageSeverity::Minor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_inspection() {
        assert_eq!(parity_inspection(2), DamageSeverity::Severe);
        assert_eq!(parity_inspection(0), DamageSeverity::Severe);
        assert_eq!(parity_inspection(1), DamageSeverity::Minor);
        assert_eq!(parity_inspection(3), DamageSeverity::Minor);
    }
}
