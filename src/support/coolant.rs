//! Constant thermophysical properties of the supported coolants.
//!
//! Properties are evaluated once at a nominal 25 °C reference and do not
//! vary with temperature. The table is a plain `match`, so it is immutable
//! and shared by every caller without synchronization.

use std::{fmt, str::FromStr};

use thiserror::Error;
use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, MassDensity, SpecificHeatCapacity, ThermalConductivity},
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

/// A coolant with an entry in the property table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Coolant {
    /// Pure water.
    #[default]
    Water,

    /// Ethylene glycol, 50 % by volume in water.
    Glycol50,
}

impl Coolant {
    /// Every coolant in the table, in table order.
    pub const ALL: [Coolant; 2] = [Coolant::Water, Coolant::Glycol50];

    /// Returns the external identifier of this coolant.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Coolant::Water => "water",
            Coolant::Glycol50 => "glycol50",
        }
    }

    /// Returns the constant properties of this coolant.
    #[must_use]
    pub fn properties(self) -> CoolantProperties {
        match self {
            Coolant::Water => CoolantProperties::new(997.0, 4180.0, 0.60, 0.000_89),
            // Propylene glycol at the same concentration is 60-80 % more viscous.
            Coolant::Glycol50 => CoolantProperties::new(1060.0, 3400.0, 0.40, 0.004_80),
        }
    }
}

impl fmt::Display for Coolant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when a coolant identifier is not in the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown coolant {0:?} (expected one of: water, glycol50)")]
pub struct UnknownCoolant(pub String);

impl FromStr for Coolant {
    type Err = UnknownCoolant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coolant::ALL
            .into_iter()
            .find(|coolant| coolant.id() == s)
            .ok_or_else(|| UnknownCoolant(s.to_owned()))
    }
}

/// Thermophysical properties of a coolant at the reference condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolantProperties {
    pub density: MassDensity,
    pub specific_heat: SpecificHeatCapacity,
    pub thermal_conductivity: ThermalConductivity,
    pub viscosity: DynamicViscosity,
}

impl CoolantProperties {
    fn new(density: f64, specific_heat: f64, thermal_conductivity: f64, viscosity: f64) -> Self {
        Self {
            density: MassDensity::new::<kilogram_per_cubic_meter>(density),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(specific_heat),
            thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(
                thermal_conductivity,
            ),
            viscosity: DynamicViscosity::new::<pascal_second>(viscosity),
        }
    }

    /// Returns the Prandtl number, `cp·μ / k`.
    #[must_use]
    pub fn prandtl(&self) -> f64 {
        self.specific_heat.get::<joule_per_kilogram_kelvin>() * self.viscosity.get::<pascal_second>()
            / self.thermal_conductivity.get::<watt_per_meter_kelvin>()
    }
}
