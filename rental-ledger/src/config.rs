//! Configuration for the rental ledger

use crate::types::{Currency, Customer, Vehicle};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Longest demo rental accepted from configuration
pub const MAX_RENTAL_DAYS: i64 = 36_500;

/// Rental ledger configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Service name
    pub service_name: String,

    /// Service version
    pub service_version: String,

    /// Currency used when reporting costs
    pub currency: Currency,

    /// Prefix for generated rental ids
    pub rental_id_prefix: String,

    /// Demo run configuration
    pub demo: DemoConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "rental-ledger".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            currency: Currency::USD,
            rental_id_prefix: "R".to_string(),
            demo: DemoConfig::default(),
        }
    }
}

/// Demo run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Length of the demo rental in days
    pub rental_days: i64,

    /// Vehicle rented by the demo
    pub vehicle_id: String,

    /// Customer renting in the demo
    pub customer_id: String,

    /// Fleet registered at startup
    pub vehicles: Vec<VehicleSeed>,

    /// Customers registered at startup
    pub customers: Vec<CustomerSeed>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            rental_days: 3,
            vehicle_id: "V1".to_string(),
            customer_id: "C1".to_string(),
            vehicles: vec![
                VehicleSeed::new("V1", "Car", Decimal::new(500, 1)),
                VehicleSeed::new("V2", "Motorcycle", Decimal::new(300, 1)),
            ],
            customers: vec![
                CustomerSeed::new("C1", "John Doe", "john@email.com"),
                CustomerSeed::new("C2", "Jane Smith", "jane@email.com"),
            ],
        }
    }
}

/// Vehicle registered from configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleSeed {
    /// Vehicle id
    pub id: String,
    /// Vehicle category
    pub vehicle_type: String,
    /// Price per day
    pub daily_rate: Decimal,
}

impl VehicleSeed {
    fn new(id: &str, vehicle_type: &str, daily_rate: Decimal) -> Self {
        Self {
            id: id.to_string(),
            vehicle_type: vehicle_type.to_string(),
            daily_rate,
        }
    }

    /// Build the vehicle
    pub fn to_vehicle(&self) -> Vehicle {
        Vehicle::new(self.id.as_str(), self.vehicle_type.as_str(), self.daily_rate)
    }
}

/// Customer registered from configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerSeed {
    /// Customer id
    pub id: String,
    /// Display name
    pub name: String,
    /// Contact details
    pub contact_info: String,
}

impl CustomerSeed {
    fn new(id: &str, name: &str, contact_info: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            contact_info: contact_info.to_string(),
        }
    }

    /// Build the customer
    pub fn to_customer(&self) -> Customer {
        Customer::new(self.id.as_str(), self.name.as_str(), self.contact_info.as_str())
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config::default();
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `RENTAL_*` overrides from a variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> crate::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("RENTAL_SERVICE_NAME") {
            self.service_name = name;
        }

        if let Some(code) = lookup("RENTAL_CURRENCY") {
            self.currency = Currency::from_code(&code)
                .ok_or_else(|| crate::Error::Config(format!("Unknown currency: {}", code)))?;
        }

        if let Some(prefix) = lookup("RENTAL_ID_PREFIX") {
            self.rental_id_prefix = prefix;
        }

        if let Some(days) = lookup("RENTAL_DEMO_DAYS") {
            self.demo.rental_days = days
                .parse()
                .map_err(|e| crate::Error::Config(format!("Invalid RENTAL_DEMO_DAYS: {}", e)))?;
        }

        self.validate()
    }

    /// Check value ranges
    pub fn validate(&self) -> crate::Result<()> {
        if !(0..=MAX_RENTAL_DAYS).contains(&self.demo.rental_days) {
            return Err(crate::Error::Config(format!(
                "rental_days must be between 0 and {}, got {}",
                MAX_RENTAL_DAYS, self.demo.rental_days
            )));
        }

        Ok(())
    }
}
