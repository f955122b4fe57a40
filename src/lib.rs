//! Landed-cost comparison across shipment origins.
//!
//! Duty is `order value × rate(material, origin)`; the total adds the order
//! value and the flat HMF and MPF fees. Origins are ranked by total, with ties
//! kept in enumeration order, and the cheapest one is reported as the best
//! option together with its savings over the runner-up.

pub mod config;
pub mod cost;
pub mod error;
pub mod output;
pub mod tariff;

pub use cost::{calculate, CostReport, CostRequest, CostRow, Headline};
pub use error::{ConfigurationError, CostError, InputField, ValidationError};
pub use tariff::{FeeEntry, FeeRegistry, Material, Origin, RateTable};
