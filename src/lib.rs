//! # Cold Plate Models
//!
//! Steady-state thermal and hydraulic models for liquid-cooled cold plates,
//! built on [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific models and their [`twine_core::Model`] adapters.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Quick start
//!
//! ```
//! use coldplate_models::models::thermal::coldplate::{
//!     AnalysisInput, FixedResistances, InletConditions, analyze,
//! };
//! use coldplate_models::support::{constraint::PositiveFinite, coolant::Coolant};
//! use uom::si::{
//!     f64::{Power, VolumeRate},
//!     power::watt,
//!     thermodynamic_temperature::degree_celsius,
//!     volume_rate::liter_per_minute,
//! };
//!
//! let input = AnalysisInput {
//!     heat_load: PositiveFinite::new(Power::new::<watt>(700.0)).unwrap(),
//!     flow_rate: PositiveFinite::new(VolumeRate::new::<liter_per_minute>(8.0)).unwrap(),
//!     conditions: InletConditions::default(),
//!     coolant: Coolant::Water,
//!     resistances: FixedResistances::default(),
//!     geometry: Default::default(),
//! };
//!
//! let output = analyze(&input);
//! assert!(output.junction_temperature.get::<degree_celsius>() < 85.0);
//! ```
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
