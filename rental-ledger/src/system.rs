//! Rental system orchestration layer
//!
//! [`RentalSystem`] owns the registry and drives the rental lifecycle:
//! a vehicle is rented (availability flips to `false`, cost is fixed) and
//! later returned (availability flips back, the stored cost is reported).
//!
//! # Example
//!
//! ```
//! use chrono::{Duration, Utc};
//! use rental_ledger::{Config, Customer, CustomerId, RentalSystem, Vehicle, VehicleId};
//! use rust_decimal::Decimal;
//!
//! # fn main() -> rental_ledger::Result<()> {
//! let mut system = RentalSystem::new(Config::default())?;
//! system.add_vehicle(Vehicle::new("V1", "Car", Decimal::from(50)));
//! system.add_customer(Customer::new("C1", "John Doe", "john@email.com"));
//!
//! let start = Utc::now();
//! let rental = system.rent_vehicle(
//!     &VehicleId::new("V1"),
//!     &CustomerId::new("C1"),
//!     start,
//!     start + Duration::days(3),
//! )?;
//! assert_eq!(rental.total_cost(), Decimal::from(150));
//!
//! assert_eq!(system.return_vehicle(rental.id()), Some(Decimal::from(150)));
//! # Ok(())
//! # }
//! ```

use crate::{
    metrics::Metrics,
    registry::Registry,
    types::{Customer, CustomerId, Rental, RentalEvent, RentalId, Vehicle, VehicleId},
    Config, Error, Result,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

/// Rental registry and lifecycle orchestrator
#[derive(Debug)]
pub struct RentalSystem {
    /// Vehicles, customers and rentals
    registry: Registry,

    /// Rent/return history
    events: Vec<RentalEvent>,

    /// Prometheus metrics
    metrics: Metrics,

    /// Configuration
    config: Config,
}

impl RentalSystem {
    /// Create an empty rental system
    pub fn new(config: Config) -> Result<Self> {
        let metrics = Metrics::new()?;

        Ok(Self {
            registry: Registry::new(),
            events: Vec::new(),
            metrics,
            config,
        })
    }

    /// Register a vehicle. Ids are not checked for uniqueness.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        debug!(
            vehicle_id = %vehicle.id(),
            vehicle_type = vehicle.vehicle_type(),
            "Vehicle registered"
        );
        self.registry.push_vehicle(vehicle);
        self.refresh_available_gauge();
    }

    /// Register a customer. Ids are not checked for uniqueness.
    pub fn add_customer(&mut self, customer: Customer) {
        debug!(customer_id = %customer.id(), "Customer registered");
        self.registry.push_customer(customer);
    }

    /// Rent a vehicle to a customer for `[start, end]`
    ///
    /// Fails with [`Error::VehicleNotFound`] or [`Error::CustomerNotFound`]
    /// when an id is unknown, and with [`Error::VehicleUnavailable`] when the
    /// vehicle is already rented. Failures leave the registry untouched.
    pub fn rent_vehicle(
        &mut self,
        vehicle_id: &VehicleId,
        customer_id: &CustomerId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Rental> {
        let result = self.create_rental(vehicle_id, customer_id, start, end);

        if let Err(ref err) = result {
            if let Some(reason) = err.rejection_reason() {
                self.metrics.record_rejection(reason);
            }
        }

        result
    }

    fn create_rental(
        &mut self,
        vehicle_id: &VehicleId,
        customer_id: &CustomerId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Rental> {
        let vehicle = self.registry.find_vehicle(vehicle_id).ok_or_else(|| {
            debug!(vehicle_id = %vehicle_id, "Rent rejected: unknown vehicle");
            Error::VehicleNotFound(vehicle_id.clone())
        })?;

        let customer = self.registry.find_customer(customer_id).ok_or_else(|| {
            debug!(customer_id = %customer_id, "Rent rejected: unknown customer");
            Error::CustomerNotFound(customer_id.clone())
        })?;

        if !vehicle.is_available() {
            warn!(vehicle_id = %vehicle_id, "Vehicle is not available");
            return Err(Error::VehicleUnavailable(vehicle_id.clone()));
        }

        let rental_id = RentalId::sequential(
            &self.config.rental_id_prefix,
            self.registry.rental_count() + 1,
        );
        let rental = Rental::new(rental_id, vehicle, customer, start, end)?;

        if let Some(vehicle) = self.registry.find_vehicle_mut(vehicle_id) {
            vehicle.set_available(false);
        }
        self.registry.push_rental(rental.clone());

        self.events.push(RentalEvent::Rented {
            rental_id: rental.id().clone(),
            vehicle_id: rental.vehicle_id().clone(),
            customer_id: rental.customer_id().clone(),
            total_cost: rental.total_cost(),
            at: Utc::now(),
        });
        self.metrics.record_rental(rental.total_cost());
        self.refresh_available_gauge();

        info!(
            rental_id = %rental.id(),
            vehicle_id = %rental.vehicle_id(),
            customer_id = %rental.customer_id(),
            days = rental.days(),
            total_cost = %self.format_cost(rental.total_cost()),
            "Vehicle rented"
        );

        Ok(rental)
    }

    /// Return the vehicle of a rental and report its stored cost
    ///
    /// Unknown rental ids are ignored and yield `None`. Returning the same
    /// rental again makes the vehicle available again and reports the same
    /// cost.
    pub fn return_vehicle(&mut self, rental_id: &RentalId) -> Option<Decimal> {
        let Some(rental) = self.registry.find_rental(rental_id) else {
            debug!(rental_id = %rental_id, "Return ignored: unknown rental");
            return None;
        };
        let vehicle_id = rental.vehicle_id().clone();
        let total_cost = rental.total_cost();

        if let Some(vehicle) = self.registry.find_vehicle_mut(&vehicle_id) {
            vehicle.set_available(true);
        }

        self.events.push(RentalEvent::Returned {
            rental_id: rental_id.clone(),
            vehicle_id: vehicle_id.clone(),
            total_cost,
            at: Utc::now(),
        });
        self.metrics.record_return();
        self.refresh_available_gauge();

        info!(
            rental_id = %rental_id,
            vehicle_id = %vehicle_id,
            total_cost = %self.format_cost(total_cost),
            "Vehicle returned"
        );

        Some(total_cost)
    }

    /// Vehicle by id
    pub fn vehicle(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.registry.find_vehicle(id)
    }

    /// Customer by id
    pub fn customer(&self, id: &CustomerId) -> Option<&Customer> {
        self.registry.find_customer(id)
    }

    /// Rental by id
    pub fn rental(&self, id: &RentalId) -> Option<&Rental> {
        self.registry.find_rental(id)
    }

    /// All vehicles in registration order
    pub fn vehicles(&self) -> &[Vehicle] {
        self.registry.vehicles()
    }

    /// All customers in registration order
    pub fn customers(&self) -> &[Customer] {
        self.registry.customers()
    }

    /// All rentals in creation order
    pub fn rentals(&self) -> &[Rental] {
        self.registry.rentals()
    }

    /// Vehicles that can currently be rented
    pub fn available_vehicles(&self) -> impl Iterator<Item = &Vehicle> + '_ {
        self.registry.vehicles().iter().filter(|v| v.is_available())
    }

    /// Rent/return history
    pub fn events(&self) -> &[RentalEvent] {
        &self.events
    }

    /// Metrics collector
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Format an amount in the configured currency
    pub fn format_cost(&self, amount: Decimal) -> String {
        self.config.currency.format(amount)
    }

    fn refresh_available_gauge(&self) {
        self.metrics.set_vehicles_available(self.registry.available_count());
    }
}
