//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., temperature, pressure, power).
//! This module provides extensions that are useful for cold plate modeling
//! but aren't included in [`uom`].
//!
//! ## Thermal resistance
//!
//! [`uom`] has `ThermalConductance` (W/K) but no quantity for its inverse.
//! [`ThermalResistance`] fills that gap, and [`kelvin_per_watt`] builds one:
//!
//! ```
//! use coldplate_models::support::units::kelvin_per_watt;
//! use uom::si::{f64::Power, power::watt, temperature_interval::kelvin};
//!
//! let r_jc = kelvin_per_watt(0.04);
//! let rise = Power::new::<watt>(700.0) * r_jc;
//! assert!((rise.get::<kelvin>() - 28.0).abs() < 1e-12);
//! ```
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval.

mod quantities;
mod temperature_difference;

pub use quantities::{ThermalResistance, kelvin_per_watt};
pub use temperature_difference::TemperatureDifference;
