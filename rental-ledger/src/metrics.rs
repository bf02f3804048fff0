//! Metrics collection for observability
//!
//! Prometheus metrics for the rental lifecycle. Each [`Metrics`] owns its own
//! registry so several rental systems can live in one process.
//!
//! # Metrics
//!
//! - `rental_rentals_total` - Rentals created
//! - `rental_returns_total` - Return calls on known rentals
//! - `rental_rejections_total{reason}` - Rejected rent requests
//! - `rental_vehicles_available` - Vehicles currently available
//! - `rental_revenue_total` - Sum of rental costs at creation

use prometheus::{
    Counter, Encoder, IntCounter, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::sync::Arc;

/// Metrics collector
#[derive(Clone)]
pub struct Metrics {
    /// Rentals created
    pub rentals_total: IntCounter,

    /// Returns processed
    pub returns_total: IntCounter,

    /// Rejected rent requests by reason
    pub rejections_total: IntCounterVec,

    /// Vehicles currently available
    pub vehicles_available: IntGauge,

    /// Revenue booked at rental creation
    pub revenue_total: Counter,

    /// Prometheus registry
    registry: Arc<Registry>,
}

impl Metrics {
    /// Create new metrics collector
    pub fn new() -> prometheus::Result<Self> {
        let registry = Arc::new(Registry::new());

        let rentals_total =
            IntCounter::new("rental_rentals_total", "Total number of rentals created")?;
        registry.register(Box::new(rentals_total.clone()))?;

        let returns_total =
            IntCounter::new("rental_returns_total", "Total number of vehicle returns")?;
        registry.register(Box::new(returns_total.clone()))?;

        let rejections_total = IntCounterVec::new(
            Opts::new("rental_rejections_total", "Rent requests rejected"),
            &["reason"],
        )?;
        registry.register(Box::new(rejections_total.clone()))?;

        let vehicles_available = IntGauge::new(
            "rental_vehicles_available",
            "Vehicles currently available for rent",
        )?;
        registry.register(Box::new(vehicles_available.clone()))?;

        let revenue_total =
            Counter::new("rental_revenue_total", "Sum of rental costs at creation")?;
        registry.register(Box::new(revenue_total.clone()))?;

        Ok(Self {
            rentals_total,
            returns_total,
            rejections_total,
            vehicles_available,
            revenue_total,
            registry,
        })
    }

    /// Record a created rental
    pub fn record_rental(&self, total_cost: Decimal) {
        self.rentals_total.inc();
        // Counters cannot go down; negative costs are not booked.
        if let Some(cost) = total_cost.to_f64().filter(|c| *c > 0.0) {
            self.revenue_total.inc_by(cost);
        }
    }

    /// Record a return
    pub fn record_return(&self) {
        self.returns_total.inc();
    }

    /// Record a rejected rent request
    pub fn record_rejection(&self, reason: &str) {
        self.rejections_total.with_label_values(&[reason]).inc();
    }

    /// Update available vehicle gauge
    pub fn set_vehicles_available(&self, count: usize) {
        self.vehicles_available.set(count as i64);
    }

    /// Rejections recorded for `reason`
    pub fn rejections(&self, reason: &str) -> u64 {
        self.rejections_total.with_label_values(&[reason]).get()
    }

    /// Get metrics registry
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Render the text exposition format
    pub fn gather_text(&self) -> prometheus::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry().gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

impl fmt::Debug for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Metrics")
            .field("rentals_total", &self.rentals_total.get())
            .field("returns_total", &self.returns_total.get())
            .field("vehicles_available", &self.vehicles_available.get())
            .finish_non_exhaustive()
    }
}
