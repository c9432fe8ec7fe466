use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// Subtracting two [`ThermodynamicTemperature`] values in [`uom`] does not
/// produce a [`TemperatureInterval`], so margins such as "junction
/// temperature above target" go through [`minus`](Self::minus) instead.
///
/// For background:
/// [#380](https://github.com/iliekturtles/uom/issues/380),
/// [#289](https://github.com/iliekturtles/uom/issues/289),
/// [#403](https://github.com/iliekturtles/uom/issues/403).
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::degree_celsius as delta_celsius,
        thermodynamic_temperature::degree_celsius,
    };

    #[test]
    fn margin_above_target() {
        let junction = ThermodynamicTemperature::new::<degree_celsius>(90.5);
        let target = ThermodynamicTemperature::new::<degree_celsius>(85.0);

        assert_relative_eq!(
            junction.minus(target).get::<delta_celsius>(),
            5.5,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            target.minus(junction).get::<delta_celsius>(),
            -5.5,
            epsilon = 1e-12
        );
    }
}
