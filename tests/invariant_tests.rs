use chrono::{Duration, TimeZone, Utc};
use fleet_rental::application::engine::RentalManager;
use fleet_rental::domain::money::Money;
use fleet_rental::domain::vehicle::Vehicle;
use fleet_rental::error::RentalError;
use fleet_rental::infrastructure::in_memory::{ManualClock, MemoryLogSink};
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const RENTERS: [&str; 3] = ["memberA", "memberB", "memberC"];

fn fleet_manager(clock: &ManualClock) -> RentalManager {
    let mut manager = RentalManager::new(Box::new(MemoryLogSink::new()), Box::new(clock.clone()));
    manager.add_vehicle(Vehicle::car(1, "Toyota Avanza", dec!(200), 7));
    manager.add_vehicle(Vehicle::truck(2, "Hino Dutro", dec!(400), dec!(1000)));
    manager.add_vehicle(Vehicle::electric(3, "Tesla Model 3", dec!(350), dec!(75), dec!(5)));
    manager.add_vehicle(Vehicle::car(4, "Daihatsu Xenia", dec!(180), 7));
    manager.add_vehicle(Vehicle::truck(5, "Mitsubishi Canter", dec!(420), dec!(1500)));
    manager
}

#[test]
fn test_rented_flag_matches_ledger_under_random_operations() {
    let mut rng = rand::thread_rng();
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    let mut manager = fleet_manager(&clock);

    for _ in 0..2_000 {
        let vehicle_id = rng.gen_range(0..=6);
        let renter = RENTERS[rng.gen_range(0..RENTERS.len())];
        let days = rng.gen_range(1..=5);

        match rng.gen_range(0..4) {
            0 => {
                let load = Decimal::from(rng.gen_range(0..2_000));
                let before = manager.ledger().len();
                match manager.rent(renter, vehicle_id, days, load) {
                    Ok(receipt) => {
                        let record = manager.ledger().get(vehicle_id).unwrap();
                        assert_eq!(record.due_at, receipt.due_at);
                        assert_eq!(record.due_at - record.started_at, Duration::hours(24 * i64::from(days)));
                        assert_eq!(manager.ledger().len(), before + 1);
                    }
                    Err(_) => assert_eq!(manager.ledger().len(), before),
                }
            }
            1 => {
                let damaged = rng.gen_bool(0.3);
                match manager.return_vehicle(renter, vehicle_id, days, damaged) {
                    Ok(receipt) => {
                        assert!(!manager.ledger().contains(vehicle_id));
                        assert_eq!(receipt.total, receipt.base_cost + receipt.penalty);
                        assert_eq!(receipt.penalty, receipt.late_penalty + receipt.damage_fee);
                        if damaged {
                            assert_eq!(vehicle_id % 2, 1);
                            assert_eq!(receipt.damage_fee, Money::new(dec!(100)));
                        }
                    }
                    Err(RentalError::SevereDamage(id)) => {
                        assert_eq!(id % 2, 0);
                        assert!(!manager.ledger().contains(id));
                    }
                    Err(_) => {}
                }
            }
            2 => {
                let _ = manager.charge_battery(vehicle_id, Decimal::from(rng.gen_range(0..20)));
            }
            _ => clock.advance(Duration::hours(rng.gen_range(0..40))),
        }

        assert!(manager.is_consistent());
    }
}

#[test]
fn test_late_penalty_is_twenty_per_started_day() {
    let mut rng = rand::thread_rng();

    for _ in 0..200 {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let mut manager = fleet_manager(&clock);
        let days = rng.gen_range(1..=7);
        let receipt = manager.rent("memberA", 1, days, Decimal::ZERO).unwrap();

        let minutes_late: i64 = rng.gen_range(1..10_000);
        clock.set(receipt.due_at + Duration::minutes(minutes_late));
        let settled = manager.return_vehicle("memberA", 1, days, false).unwrap();

        let expected_days = u32::try_from(minutes_late / 60 / 24 + 1).unwrap();
        assert_eq!(settled.late_days, expected_days);
        assert_eq!(settled.late_penalty, Money::new(dec!(20)) * expected_days);
    }
}
