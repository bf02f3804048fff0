//! Error types for the rental ledger

use crate::types::{CustomerId, VehicleId};
use thiserror::Error;

/// Result type for rental ledger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Rental ledger errors
#[derive(Error, Debug)]
pub enum Error {
    /// No vehicle registered under this id
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(VehicleId),

    /// No customer registered under this id
    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),

    /// Vehicle is currently rented out
    #[error("Vehicle is not available: {0}")]
    VehicleUnavailable(VehicleId),

    /// Rental cost does not fit in a decimal
    #[error("Rental cost overflow for vehicle {vehicle_id} over {days} days")]
    CostOverflow {
        /// Vehicle being rented
        vehicle_id: VehicleId,
        /// Billed whole days
        days: i64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Metrics registration error
    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Either the vehicle or the customer id was unknown
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::VehicleNotFound(_) | Error::CustomerNotFound(_))
    }

    /// The vehicle exists but is already rented
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Error::VehicleUnavailable(_))
    }

    /// Label used for the rejection metric
    pub(crate) fn rejection_reason(&self) -> Option<&'static str> {
        match self {
            Error::VehicleNotFound(_) | Error::CustomerNotFound(_) => Some("not_found"),
            Error::VehicleUnavailable(_) => Some("unavailable"),
            _ => None,
        }
    }
}
