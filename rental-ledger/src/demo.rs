//! Demo sequence
//!
//! Registers the configured fleet and customers, rents one vehicle for the
//! configured number of days from `start` and returns rental `R1`.
//! Status lines go to the given writer.

use crate::{Config, CustomerId, Error, RentalId, RentalSystem, Result, VehicleId};
use chrono::{DateTime, Duration, Utc};
use std::io::Write;

/// Run the demo and hand back the resulting system
///
/// A failed rent is reported on `out` and the return step still runs, as a
/// no-op when nothing was rented. Only setup and IO problems are errors.
pub fn run_demo<W: Write>(
    config: Config,
    start: DateTime<Utc>,
    out: &mut W,
) -> Result<RentalSystem> {
    let demo = config.demo.clone();
    let end = Duration::try_days(demo.rental_days)
        .and_then(|window| start.checked_add_signed(window))
        .ok_or_else(|| {
            Error::Config(format!(
                "rental window of {} days from {} is out of range",
                demo.rental_days, start
            ))
        })?;

    let mut system = RentalSystem::new(config)?;
    for seed in &demo.vehicles {
        system.add_vehicle(seed.to_vehicle());
    }
    for seed in &demo.customers {
        system.add_customer(seed.to_customer());
    }

    let vehicle_id = VehicleId::new(demo.vehicle_id.as_str());
    let customer_id = CustomerId::new(demo.customer_id.as_str());

    let rental_id = match system.rent_vehicle(&vehicle_id, &customer_id, start, end) {
        Ok(rental) => {
            writeln!(out, "Vehicle rented successfully")?;
            writeln!(out, "Total cost: {}", system.format_cost(rental.total_cost()))?;
            rental.id().clone()
        }
        Err(err) => {
            writeln!(out, "Rental failed: {}", err)?;
            RentalId::sequential(&system.config().rental_id_prefix, 1)
        }
    };

    if let Some(total_cost) = system.return_vehicle(&rental_id) {
        writeln!(out, "Total cost: {}", system.format_cost(total_cost))?;
    }

    Ok(system)
}
