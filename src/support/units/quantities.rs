use std::marker::PhantomData;

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P1, P3, Z0},
};

/// Thermal resistance, K/W in SI.
///
/// The SI base value of this quantity is already expressed in K/W, so
/// `resistance.value` reads it directly.
pub type ThermalResistance = Quantity<ISQ<N2, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`ThermalResistance`] from a value in K/W.
#[must_use]
pub fn kelvin_per_watt(value: f64) -> ThermalResistance {
    ThermalResistance {
        dimension: PhantomData,
        units: PhantomData,
        value,
    }
}
