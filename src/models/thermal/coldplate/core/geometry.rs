use uom::si::{
    area::square_centimeter,
    f64::{Area, Length, ThermalConductivity},
    length::{meter, millimeter},
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::constraint::{Constraint, StrictlyPositive};

use super::GeometryError;

/// Largest relative mismatch allowed between channel width and hydraulic diameter.
const SQUARE_CHANNEL_TOLERANCE: f64 = 0.01;

/// Unvalidated cold plate geometry and base material.
///
/// The defaults describe a typical copper cold plate: 40 parallel 1 mm square
/// channels, 80 mm long, on a 2 mm base with 100 cm² of chip contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryParameters {
    /// Number of parallel coolant channels.
    pub channel_count: u32,

    /// Channel hydraulic diameter.
    pub hydraulic_diameter: Length,

    /// Channel width, equal to the hydraulic diameter for a square channel.
    pub channel_width: Length,

    /// Channel flow-path length.
    pub channel_length: Length,

    /// Base (spreader) thickness between the chip and the channels.
    pub base_thickness: Length,

    /// Chip-to-plate contact area.
    pub contact_area: Area,

    /// Thermal conductivity of the base material.
    pub base_conductivity: ThermalConductivity,
}

impl Default for GeometryParameters {
    fn default() -> Self {
        Self {
            channel_count: 40,
            hydraulic_diameter: Length::new::<millimeter>(1.0),
            channel_width: Length::new::<millimeter>(1.0),
            channel_length: Length::new::<millimeter>(80.0),
            base_thickness: Length::new::<millimeter>(2.0),
            contact_area: Area::new::<square_centimeter>(100.0),
            base_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(385.0),
        }
    }
}

/// Validated square-channel cold plate geometry.
///
/// Construction guarantees at least one channel, strictly positive
/// dimensions, and a channel width within 1 % of the hydraulic diameter.
/// Values are never modified after construction, so one geometry can be
/// shared across any number of analyses.
///
/// The default is the validated [`GeometryParameters::default`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Geometry {
    params: GeometryParameters,
}

impl Geometry {
    /// Validates geometry parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if there are no channels, if any dimension
    /// is not strictly positive, or if the channel is not square.
    pub fn new(params: GeometryParameters) -> Result<Self, GeometryError> {
        if params.channel_count == 0 {
            return Err(GeometryError::NoChannels);
        }

        let dimensions = [
            ("hydraulic_diameter_m", params.hydraulic_diameter.value),
            ("channel_width_m", params.channel_width.value),
            ("channel_length_m", params.channel_length.value),
            ("base_thickness_m", params.base_thickness.value),
            ("contact_area_m2", params.contact_area.value),
            (
                "base_thermal_conductivity_w_mk",
                params.base_conductivity.value,
            ),
        ];
        for (field, value) in dimensions {
            StrictlyPositive::check(&value)
                .map_err(|source| GeometryError::Dimension { field, source })?;
        }

        let width_m = params.channel_width.get::<meter>();
        let hydraulic_diameter_m = params.hydraulic_diameter.get::<meter>();
        let mismatch = (width_m - hydraulic_diameter_m).abs();
        if mismatch > SQUARE_CHANNEL_TOLERANCE * hydraulic_diameter_m {
            return Err(GeometryError::NonSquareChannel {
                width_m,
                hydraulic_diameter_m,
            });
        }

        Ok(Self { params })
    }

    /// Returns the parameters this geometry was built from.
    #[must_use]
    pub fn parameters(&self) -> &GeometryParameters {
        &self.params
    }

    #[must_use]
    pub fn channel_count(&self) -> u32 {
        self.params.channel_count
    }

    #[must_use]
    pub fn hydraulic_diameter(&self) -> Length {
        self.params.hydraulic_diameter
    }

    #[must_use]
    pub fn channel_width(&self) -> Length {
        self.params.channel_width
    }

    #[must_use]
    pub fn channel_length(&self) -> Length {
        self.params.channel_length
    }

    #[must_use]
    pub fn base_thickness(&self) -> Length {
        self.params.base_thickness
    }

    #[must_use]
    pub fn contact_area(&self) -> Area {
        self.params.contact_area
    }

    #[must_use]
    pub fn base_conductivity(&self) -> ThermalConductivity {
        self.params.base_conductivity
    }

    /// Total cross-sectional flow area, `n · w · Dh`.
    #[must_use]
    pub fn flow_area(&self) -> Area {
        self.params.channel_width
            * self.params.hydraulic_diameter
            * f64::from(self.params.channel_count)
    }

    /// Total wetted channel surface, `n · 4w · L`.
    #[must_use]
    pub fn wetted_area(&self) -> Area {
        self.params.channel_width
            * self.params.channel_length
            * (4.0 * f64::from(self.params.channel_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::area::square_meter;

    use crate::support::constraint::ConstraintError;

    #[test]
    fn default_parameters_are_valid() {
        let geometry = Geometry::new(GeometryParameters::default()).unwrap();
        assert_eq!(geometry, Geometry::default());
    }

    #[test]
    fn default_areas() {
        let geometry = Geometry::default();
        assert_relative_eq!(
            geometry.flow_area().get::<square_meter>(),
            4.0e-5,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            geometry.wetted_area().get::<square_meter>(),
            0.0128,
            max_relative = 1e-12
        );
    }

    #[test]
    fn rejects_zero_channels() {
        let params = GeometryParameters {
            channel_count: 0,
            ..GeometryParameters::default()
        };
        assert_eq!(Geometry::new(params), Err(GeometryError::NoChannels));
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let params = GeometryParameters {
            base_thickness: Length::new::<meter>(0.0),
            ..GeometryParameters::default()
        };
        assert_eq!(
            Geometry::new(params),
            Err(GeometryError::Dimension {
                field: "base_thickness_m",
                source: ConstraintError::Zero,
            })
        );

        let params = GeometryParameters {
            contact_area: Area::new::<square_meter>(-0.01),
            ..GeometryParameters::default()
        };
        assert!(matches!(
            Geometry::new(params),
            Err(GeometryError::Dimension {
                field: "contact_area_m2",
                ..
            })
        ));
    }

    #[test]
    fn accepts_width_within_one_percent() {
        let params = GeometryParameters {
            channel_width: Length::new::<millimeter>(1.009),
            ..GeometryParameters::default()
        };
        assert!(Geometry::new(params).is_ok());
    }

    #[test]
    fn rejects_rectangular_channels() {
        let params = GeometryParameters {
            channel_width: Length::new::<millimeter>(1.5),
            ..GeometryParameters::default()
        };
        assert!(matches!(
            Geometry::new(params),
            Err(GeometryError::NonSquareChannel { .. })
        ));

        let params = GeometryParameters {
            channel_width: Length::new::<millimeter>(0.98),
            ..GeometryParameters::default()
        };
        assert!(Geometry::new(params).is_err());
    }
}
