//! In-memory registry of vehicles, customers and rentals
//!
//! All collections are append-only and keep insertion order. Lookups are
//! linear scans returning the first entry with a matching id, so duplicate
//! registrations are shadowed by the earliest one.

use crate::types::{Customer, CustomerId, Rental, RentalId, Vehicle, VehicleId};

/// Append-only entity store
#[derive(Debug, Default)]
pub struct Registry {
    vehicles: Vec<Vehicle>,
    customers: Vec<Customer>,
    rentals: Vec<Rental>,
}

impl Registry {
    /// Create empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vehicle
    pub fn push_vehicle(&mut self, vehicle: Vehicle) {
        self.vehicles.push(vehicle);
    }

    /// Append a customer
    pub fn push_customer(&mut self, customer: Customer) {
        self.customers.push(customer);
    }

    /// Append a rental
    pub fn push_rental(&mut self, rental: Rental) {
        self.rentals.push(rental);
    }

    /// First vehicle with this id
    pub fn find_vehicle(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id() == id)
    }

    /// First vehicle with this id, mutably
    pub fn find_vehicle_mut(&mut self, id: &VehicleId) -> Option<&mut Vehicle> {
        self.vehicles.iter_mut().find(|v| v.id() == id)
    }

    /// First customer with this id
    pub fn find_customer(&self, id: &CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id() == id)
    }

    /// First rental with this id
    pub fn find_rental(&self, id: &RentalId) -> Option<&Rental> {
        self.rentals.iter().find(|r| r.id() == id)
    }

    /// Number of rentals ever created
    pub fn rental_count(&self) -> usize {
        self.rentals.len()
    }

    /// Number of vehicles currently available
    pub fn available_count(&self) -> usize {
        self.vehicles.iter().filter(|v| v.is_available()).count()
    }

    /// All vehicles in registration order
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// All customers in registration order
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// All rentals in creation order
    pub fn rentals(&self) -> &[Rental] {
        &self.rentals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_lookup_returns_first_match() {
        let mut registry = Registry::new();
        registry.push_vehicle(Vehicle::new("V1", "Car", Decimal::from(50)));
        registry.push_vehicle(Vehicle::new("V1", "Truck", Decimal::from(90)));

        let found = registry.find_vehicle(&VehicleId::new("V1")).unwrap();
        assert_eq!(found.vehicle_type(), "Car");
        assert_eq!(registry.vehicles().len(), 2);
    }

    #[test]
    fn test_unknown_ids() {
        let registry = Registry::new();
        assert!(registry.find_vehicle(&VehicleId::new("V1")).is_none());
        assert!(registry.find_customer(&CustomerId::new("C1")).is_none());
        assert!(registry.find_rental(&RentalId::new("R1")).is_none());
        assert_eq!(registry.rental_count(), 0);
    }

    #[test]
    fn test_available_count() {
        let mut registry = Registry::new();
        registry.push_vehicle(Vehicle::new("V1", "Car", Decimal::from(50)));
        registry.push_vehicle(Vehicle::new("V2", "Motorcycle", Decimal::from(30)));
        assert_eq!(registry.available_count(), 2);

        registry
            .find_vehicle_mut(&VehicleId::new("V2"))
            .unwrap()
            .set_available(false);
        assert_eq!(registry.available_count(), 1);
    }
}
