//! Rental Ledger
//!
//! In-memory vehicle rental ledger: vehicles, customers and the rentals
//! binding them.
//!
//! # Architecture
//!
//! - **Registry**: Append-only collections with linear-scan lookups
//! - **Rental System**: Single owner of all state, drives rent and return
//! - **Snapshot Pricing**: Cost fixed at rental creation
//! - **Event Log**: Every rent and return is recorded
//!
//! # Invariants
//!
//! - A vehicle is unavailable from a successful rent until its return
//! - `total_cost == whole_days(end - start) * daily_rate`, fixed at creation
//! - Rental ids are `R1`, `R2`, ... in creation order
//! - Nothing is ever removed from the registry

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod config;
pub mod demo;
pub mod error;
pub mod metrics;
pub mod registry;
pub mod system;
pub mod types;

// Re-exports
pub use config::Config;
pub use error::{Error, Result};
pub use metrics::Metrics;
pub use registry::Registry;
pub use system::RentalSystem;
pub use types::{
    days_between, Currency, Customer, CustomerId, Rental, RentalEvent, RentalId, Vehicle,
    VehicleId,
};
