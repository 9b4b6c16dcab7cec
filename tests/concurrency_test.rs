use fleet_rental::application::engine::RentalManager;
use fleet_rental::application::shared::SharedRentalManager;
use fleet_rental::domain::command::Command;
use fleet_rental::domain::vehicle::Vehicle;
use fleet_rental::infrastructure::in_memory::MemoryLogSink;
use fleet_rental::infrastructure::system::SystemClock;
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_shared_engine_across_tasks() {
    let log = MemoryLogSink::new();
    let mut manager = RentalManager::new(Box::new(log.clone()), Box::new(SystemClock));
    for id in 1..=20 {
        manager.add_vehicle(Vehicle::car(id, format!("Car {id}"), dec!(100), 4));
    }
    let engine = SharedRentalManager::new(manager);

    // Each task rents and returns its own car, while a second renter races for it
    let handles: Vec<_> = (1..=20u32)
        .map(|id| {
            let engine = engine.clone();
            tokio::spawn(async move {
                let renter = format!("member{id}");
                engine.execute(Command::rent(&renter, id, 2, None)).await?;
                let _ = engine.execute(Command::rent("intruder", id, 1, None)).await;
                engine
                    .execute(Command::return_vehicle(&renter, id, 2, false))
                    .await
            })
        })
        .collect();

    for handle in handles {
        let receipt = handle.await.unwrap().unwrap();
        assert!(receipt.to_string().ends_with("Base=200 Penalty=0 Total=200"));
    }

    assert!(engine.is_consistent().await);
    assert!(engine.list_fleet().await.iter().all(|l| !l.rented));
    assert_eq!(
        log.entries()
            .iter()
            .filter(|e| e.contains("already rented"))
            .count(),
        20
    );
}
