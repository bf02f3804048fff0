//! Core types for the rental ledger
//!
//! Money is held as [`Decimal`] so that cost arithmetic is exact.
//! Timestamps are UTC.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of one rental day in seconds
pub const SECS_PER_DAY: i64 = 24 * 60 * 60;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create new identifier
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get as string
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Vehicle identifier (fleet number, plate, etc.)
    VehicleId
);

string_id!(
    /// Customer identifier
    CustomerId
);

string_id!(
    /// Rental identifier, assigned by the rental system
    RentalId
);

impl RentalId {
    /// Sequential id: `prefix` followed by the 1-based rental number
    pub fn sequential(prefix: &str, number: usize) -> Self {
        Self(format!("{}{}", prefix, number))
    }
}

/// ISO 4217 currency code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Currency {
    /// US Dollar
    #[default]
    USD,
    /// Euro
    EUR,
    /// British Pound
    GBP,
    /// UAE Dirham
    AED,
    /// Indian Rupee
    INR,
}

impl Currency {
    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::AED => "AED",
            Currency::INR => "INR",
        }
    }

    /// Symbol printed in front of amounts
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::AED => "AED ",
            Currency::INR => "₹",
        }
    }

    /// Parse from ISO code
    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "AED" => Some(Currency::AED),
            "INR" => Some(Currency::INR),
            _ => None,
        }
    }

    /// Format an amount with two decimal places
    pub fn format(&self, amount: Decimal) -> String {
        format!("{}{:.2}", self.symbol(), amount)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A rentable vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    id: VehicleId,
    vehicle_type: String,
    available: bool,
    daily_rate: Decimal,
}

impl Vehicle {
    /// Create a vehicle; new vehicles are available
    pub fn new(
        id: impl Into<VehicleId>,
        vehicle_type: impl Into<String>,
        daily_rate: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            vehicle_type: vehicle_type.into(),
            available: true,
            daily_rate,
        }
    }

    /// Vehicle id
    pub fn id(&self) -> &VehicleId {
        &self.id
    }

    /// Free-text category ("Car", "Motorcycle", ...)
    pub fn vehicle_type(&self) -> &str {
        &self.vehicle_type
    }

    /// Whether a new rental may be created against this vehicle
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Price per whole rental day
    pub fn daily_rate(&self) -> Decimal {
        self.daily_rate
    }

    /// Set availability flag
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}

/// A registered customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    contact_info: String,
}

impl Customer {
    /// Create a customer
    pub fn new(
        id: impl Into<CustomerId>,
        name: impl Into<String>,
        contact_info: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contact_info: contact_info.into(),
        }
    }

    /// Customer id
    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact details (email, phone)
    pub fn contact_info(&self) -> &str {
        &self.contact_info
    }
}

/// Whole days elapsed between `start` and `end`.
///
/// The duration is divided by one day and truncated toward zero, so any
/// window shorter than 24 hours counts as zero days.
pub fn days_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (end - start).num_seconds() / SECS_PER_DAY
}

/// A vehicle rented to a customer over a date range
///
/// The total cost is computed once at creation from the vehicle's daily rate
/// at that moment and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    id: RentalId,
    vehicle_id: VehicleId,
    customer_id: CustomerId,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    total_cost: Decimal,
}

impl Rental {
    /// Create a rental and compute its cost
    ///
    /// Fails with [`Error::CostOverflow`](crate::Error::CostOverflow) when
    /// days times rate does not fit in a [`Decimal`].
    pub fn new(
        id: RentalId,
        vehicle: &Vehicle,
        customer: &Customer,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> crate::Result<Self> {
        let days = days_between(start, end);
        let total_cost = Decimal::from(days)
            .checked_mul(vehicle.daily_rate())
            .ok_or_else(|| crate::Error::CostOverflow {
                vehicle_id: vehicle.id().clone(),
                days,
            })?;

        Ok(Self {
            id,
            vehicle_id: vehicle.id().clone(),
            customer_id: customer.id().clone(),
            start,
            end,
            total_cost,
        })
    }

    /// Rental id
    pub fn id(&self) -> &RentalId {
        &self.id
    }

    /// Rented vehicle
    pub fn vehicle_id(&self) -> &VehicleId {
        &self.vehicle_id
    }

    /// Renting customer
    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    /// Start of the rental window
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// End of the rental window
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Billed whole days
    pub fn days(&self) -> i64 {
        days_between(self.start, self.end)
    }

    /// Cost fixed at creation
    pub fn total_cost(&self) -> Decimal {
        self.total_cost
    }
}

/// Entry in the rental system's event log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RentalEvent {
    /// A rental was created and its vehicle taken off the market
    Rented {
        /// Rental created
        rental_id: RentalId,
        /// Vehicle rented
        vehicle_id: VehicleId,
        /// Customer renting
        customer_id: CustomerId,
        /// Cost fixed at creation
        total_cost: Decimal,
        /// When the rent call happened
        at: DateTime<Utc>,
    },
    /// A vehicle was handed back; repeats are logged as well
    Returned {
        /// Rental returned
        rental_id: RentalId,
        /// Vehicle made available again
        vehicle_id: VehicleId,
        /// Reported cost
        total_cost: Decimal,
        /// When the return call happened
        at: DateTime<Utc>,
    },
}

impl RentalEvent {
    /// Rental the event belongs to
    pub fn rental_id(&self) -> &RentalId {
        match self {
            RentalEvent::Rented { rental_id, .. } | RentalEvent::Returned { rental_id, .. } => {
                rental_id
            }
        }
    }
}
