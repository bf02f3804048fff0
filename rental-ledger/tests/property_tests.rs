//! Property-based tests for rental invariants
//!
//! These tests use proptest to verify:
//! - Cost: whole days (truncated) times the daily rate
//! - Availability: tracks an independent model through rent/return sequences
//! - Ids: sequential in creation order
//! - Rejections: unknown ids never mutate state

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use rental_ledger::{
    days_between, Config, Customer, CustomerId, Rental, RentalId, RentalSystem, Vehicle, VehicleId,
};
use rust_decimal::Decimal;

const DAY: i64 = 24 * 60 * 60;

/// Strategy for daily rates (non-negative, two decimal places)
fn rate_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Create a system with `n` vehicles `V1..Vn` and one customer `C1`
fn create_test_system(n: usize, rate: Decimal) -> RentalSystem {
    let mut system = RentalSystem::new(Config::default()).unwrap();
    for i in 1..=n {
        system.add_vehicle(Vehicle::new(format!("V{}", i), "Car", rate));
    }
    system.add_customer(Customer::new("C1", "John Doe", "john@email.com"));
    system
}

#[derive(Debug, Clone)]
enum Op {
    Rent(usize),
    Return(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..3).prop_map(Op::Rent),
        (0usize..6).prop_map(Op::Return),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: cost is truncated whole days times the rate
    #[test]
    fn prop_cost_formula(elapsed_secs in 0i64..(90 * DAY), rate in rate_strategy()) {
        let vehicle = Vehicle::new("V1", "Car", rate);
        let customer = Customer::new("C1", "John Doe", "john@email.com");
        let start = epoch();
        let end = start + Duration::seconds(elapsed_secs);

        let rental =
            Rental::new(RentalId::new("R1"), &vehicle, &customer, start, end).unwrap();

        prop_assert_eq!(days_between(start, end), elapsed_secs / DAY);
        prop_assert_eq!(rental.total_cost(), Decimal::from(elapsed_secs / DAY) * rate);
    }

    /// Property: windows shorter than a day cost nothing
    #[test]
    fn prop_sub_day_is_free(elapsed_secs in 0i64..DAY, rate in rate_strategy()) {
        let mut system = create_test_system(1, rate);
        let start = epoch();

        let rental = system
            .rent_vehicle(
                &VehicleId::new("V1"),
                &CustomerId::new("C1"),
                start,
                start + Duration::seconds(elapsed_secs),
            )
            .unwrap();

        prop_assert_eq!(rental.total_cost(), Decimal::ZERO);
    }

    /// Property: successive rentals are numbered R1, R2, ...
    #[test]
    fn prop_sequential_ids(n in 1usize..20) {
        let mut system = create_test_system(n, Decimal::from(10));
        let start = epoch();

        for i in 1..=n {
            let rental = system
                .rent_vehicle(
                    &VehicleId::new(format!("V{}", i)),
                    &CustomerId::new("C1"),
                    start,
                    start + Duration::days(1),
                )
                .unwrap();
            prop_assert_eq!(rental.id().as_str(), format!("R{}", i));
        }

        prop_assert_eq!(system.available_vehicles().count(), 0);
    }

    /// Property: unknown ids are rejected and nothing changes
    #[test]
    fn prop_unknown_ids_do_not_mutate(vehicle in "[A-Z][0-9]{2,4}", customer in "[A-Z][0-9]{2,4}") {
        let mut system = create_test_system(2, Decimal::from(25));
        let start = epoch();

        let result = system.rent_vehicle(
            &VehicleId::new(vehicle),
            &CustomerId::new(customer),
            start,
            start + Duration::days(2),
        );

        prop_assert!(result.unwrap_err().is_not_found());
        prop_assert!(system.rentals().is_empty());
        prop_assert!(system.events().is_empty());
        prop_assert_eq!(system.available_vehicles().count(), 2);
    }

    /// Property: availability matches a simple model over any op sequence
    #[test]
    fn prop_availability_model(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let mut system = create_test_system(3, Decimal::from(40));
        let start = epoch();

        let mut available = [true; 3];
        // vehicle index of each created rental, in creation order
        let mut rented: Vec<usize> = Vec::new();

        for op in ops {
            match op {
                Op::Rent(v) => {
                    let result = system.rent_vehicle(
                        &VehicleId::new(format!("V{}", v + 1)),
                        &CustomerId::new("C1"),
                        start,
                        start + Duration::days(2),
                    );
                    if available[v] {
                        let rental = result.unwrap();
                        prop_assert_eq!(rental.total_cost(), Decimal::from(80));
                        available[v] = false;
                        rented.push(v);
                    } else {
                        prop_assert!(result.unwrap_err().is_unavailable());
                    }
                }
                Op::Return(r) => {
                    let cost = system.return_vehicle(&RentalId::new(format!("R{}", r + 1)));
                    match rented.get(r) {
                        Some(&v) => {
                            prop_assert_eq!(cost, Some(Decimal::from(80)));
                            available[v] = true;
                        }
                        None => prop_assert_eq!(cost, None),
                    }
                }
            }

            for (i, expected) in available.iter().enumerate() {
                let vehicle = system.vehicle(&VehicleId::new(format!("V{}", i + 1))).unwrap();
                prop_assert_eq!(vehicle.is_available(), *expected);
            }
        }

        prop_assert_eq!(system.rentals().len(), rented.len());
    }
}
