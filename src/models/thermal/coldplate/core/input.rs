//! Validated input records for cold plate analysis and flow optimization.
//!
//! Every invariant is checked when a record is built, so the analysis
//! formulas never see a zero flow area, a negative heat load or an
//! out-of-band temperature.

use uom::si::{
    f64::{Power, ThermodynamicTemperature, VolumeRate},
    thermodynamic_temperature::degree_celsius,
    volume_rate::liter_per_minute,
};

use crate::support::{
    constraint::{Constrained, NonNegative, PositiveFinite},
    coolant::Coolant,
    units::{ThermalResistance, kelvin_per_watt},
};

use super::{Geometry, ValidationError};

const INLET_RANGE_C: (f64, f64) = (-20.0, 80.0);
const AMBIENT_RANGE_C: (f64, f64) = (-40.0, 80.0);

/// Largest amount by which ambient may exceed the coolant inlet temperature.
const AMBIENT_ABOVE_INLET_MAX_C: f64 = 20.0;

/// Exclusive bounds on a junction temperature target.
const JUNCTION_TARGET_RANGE_C: (f64, f64) = (0.0, 200.0);

/// Coolant inlet temperature and the facility ambient temperature.
///
/// The ambient temperature does not enter the cold plate analysis. It is
/// carried for facility-level models and only checked for consistency with
/// the inlet: it may not exceed the inlet by more than 20 °C.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InletConditions {
    inlet: ThermodynamicTemperature,
    ambient: Option<ThermodynamicTemperature>,
}

impl InletConditions {
    /// Validates inlet and ambient temperatures.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the inlet is outside [-20, 80] °C,
    /// the ambient is outside [-40, 80] °C, or the ambient is more than
    /// 20 °C above the inlet.
    pub fn new(
        inlet: ThermodynamicTemperature,
        ambient: Option<ThermodynamicTemperature>,
    ) -> Result<Self, ValidationError> {
        let inlet_c = inlet.get::<degree_celsius>();
        let (min_c, max_c) = INLET_RANGE_C;
        if !(min_c..=max_c).contains(&inlet_c) {
            return Err(ValidationError::InletTemperature {
                value_c: inlet_c,
                min_c,
                max_c,
            });
        }

        if let Some(ambient) = ambient {
            let ambient_c = ambient.get::<degree_celsius>();
            let (min_c, max_c) = AMBIENT_RANGE_C;
            if !(min_c..=max_c).contains(&ambient_c) {
                return Err(ValidationError::AmbientTemperature {
                    value_c: ambient_c,
                    min_c,
                    max_c,
                });
            }
            if ambient_c > inlet_c + AMBIENT_ABOVE_INLET_MAX_C {
                return Err(ValidationError::AmbientAboveInlet { ambient_c, inlet_c });
            }
        }

        Ok(Self { inlet, ambient })
    }

    /// Returns the coolant inlet temperature.
    #[must_use]
    pub fn inlet(&self) -> ThermodynamicTemperature {
        self.inlet
    }

    /// Returns the ambient temperature, if one was provided.
    #[must_use]
    pub fn ambient(&self) -> Option<ThermodynamicTemperature> {
        self.ambient
    }
}

/// Inlet and ambient both at 25 °C.
impl Default for InletConditions {
    fn default() -> Self {
        let t = ThermodynamicTemperature::new::<degree_celsius>(25.0);
        Self {
            inlet: t,
            ambient: Some(t),
        }
    }
}

/// Thermal resistances fixed by the chip package and interface material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedResistances {
    /// Junction-to-case resistance of the package.
    pub junction_to_case: Constrained<ThermalResistance, NonNegative>,

    /// Thermal interface material resistance between case and cold plate.
    pub tim: Constrained<ThermalResistance, NonNegative>,
}

impl FixedResistances {
    /// Validates fixed resistances.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Resistance`] if either value is negative or `NaN`.
    pub fn new(
        junction_to_case: ThermalResistance,
        tim: ThermalResistance,
    ) -> Result<Self, ValidationError> {
        let constrain = |field: &'static str, value: ThermalResistance| {
            NonNegative::new(value).map_err(|source| ValidationError::Resistance { field, source })
        };
        Ok(Self {
            junction_to_case: constrain("r_jc_k_per_w", junction_to_case)?,
            tim: constrain("r_tim_k_per_w", tim)?,
        })
    }
}

/// `R_jc` of 0.04 K/W and `R_tim` of 0.02 K/W.
impl Default for FixedResistances {
    fn default() -> Self {
        Self {
            junction_to_case: Constrained::new_unchecked(kelvin_per_watt(0.04)),
            tim: Constrained::new_unchecked(kelvin_per_watt(0.02)),
        }
    }
}

/// Inputs for a single-point cold plate analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisInput {
    /// Heat dissipated by the chip.
    pub heat_load: Constrained<Power, PositiveFinite>,

    /// Total coolant volumetric flow rate through the plate.
    pub flow_rate: Constrained<VolumeRate, PositiveFinite>,

    pub conditions: InletConditions,
    pub coolant: Coolant,
    pub resistances: FixedResistances,
    pub geometry: Geometry,
}

impl AnalysisInput {
    /// Creates an input with water, default inlet conditions, resistances and geometry.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the heat load or flow rate is not
    /// strictly positive and finite.
    pub fn new(heat_load: Power, flow_rate: VolumeRate) -> Result<Self, ValidationError> {
        Ok(Self {
            heat_load: PositiveFinite::new(heat_load).map_err(ValidationError::HeatLoad)?,
            flow_rate: PositiveFinite::new(flow_rate).map_err(ValidationError::FlowRate)?,
            conditions: InletConditions::default(),
            coolant: Coolant::default(),
            resistances: FixedResistances::default(),
            geometry: Geometry::default(),
        })
    }

    /// Returns a copy of this input at a different flow rate.
    #[must_use]
    pub fn with_flow_rate(self, flow_rate: Constrained<VolumeRate, PositiveFinite>) -> Self {
        Self { flow_rate, ..self }
    }

    /// Returns a copy of this input with a different coolant.
    #[must_use]
    pub fn with_coolant(self, coolant: Coolant) -> Self {
        Self { coolant, ..self }
    }
}

/// Upper limit on junction temperature for flow optimization.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JunctionTarget(ThermodynamicTemperature);

impl JunctionTarget {
    /// Validates a junction temperature target.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::JunctionTarget`] unless the target lies in (0, 200) °C.
    pub fn new(temperature: ThermodynamicTemperature) -> Result<Self, ValidationError> {
        let value_c = temperature.get::<degree_celsius>();
        let (min_c, max_c) = JUNCTION_TARGET_RANGE_C;
        if value_c > min_c && value_c < max_c {
            Ok(Self(temperature))
        } else {
            Err(ValidationError::JunctionTarget { value_c })
        }
    }

    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.0
    }
}

/// An 85 °C target.
impl Default for JunctionTarget {
    fn default() -> Self {
        Self(ThermodynamicTemperature::new::<degree_celsius>(85.0))
    }
}

/// Closed flow-rate interval searched by the optimizer.
///
/// Both ends are strictly positive and finite, and `max > min`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowBracket {
    min: VolumeRate,
    max: VolumeRate,
}

impl FlowBracket {
    /// Validates a flow search bracket.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::FlowRate`] if either end is not strictly
    /// positive and finite, or [`ValidationError::FlowBracket`] if `max <= min`.
    pub fn new(min: VolumeRate, max: VolumeRate) -> Result<Self, ValidationError> {
        let min = PositiveFinite::new(min)
            .map_err(ValidationError::FlowRate)?
            .into_inner();
        let max = PositiveFinite::new(max)
            .map_err(ValidationError::FlowRate)?
            .into_inner();
        if max <= min {
            return Err(ValidationError::FlowBracket {
                min_lpm: min.get::<liter_per_minute>(),
                max_lpm: max.get::<liter_per_minute>(),
            });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> VolumeRate {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> VolumeRate {
        self.max
    }
}

/// A 1 to 40 L/min search.
impl Default for FlowBracket {
    fn default() -> Self {
        Self {
            min: VolumeRate::new::<liter_per_minute>(1.0),
            max: VolumeRate::new::<liter_per_minute>(40.0),
        }
    }
}

/// Inputs for finding the minimum flow that meets a junction temperature target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowOptimizationInput {
    pub heat_load: Constrained<Power, PositiveFinite>,
    pub max_junction_temperature: JunctionTarget,
    pub conditions: InletConditions,
    pub coolant: Coolant,
    pub resistances: FixedResistances,
    pub geometry: Geometry,
    pub bracket: FlowBracket,
}

impl FlowOptimizationInput {
    /// Creates an input with water and default conditions, resistances,
    /// geometry, target and bracket.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::HeatLoad`] if the heat load is not strictly
    /// positive and finite.
    pub fn new(heat_load: Power) -> Result<Self, ValidationError> {
        Ok(Self {
            heat_load: PositiveFinite::new(heat_load).map_err(ValidationError::HeatLoad)?,
            max_junction_temperature: JunctionTarget::default(),
            conditions: InletConditions::default(),
            coolant: Coolant::default(),
            resistances: FixedResistances::default(),
            geometry: Geometry::default(),
            bracket: FlowBracket::default(),
        })
    }

    /// Returns the single-point analysis input at the given flow rate.
    #[must_use]
    pub fn at_flow_rate(
        &self,
        flow_rate: Constrained<VolumeRate, PositiveFinite>,
    ) -> AnalysisInput {
        AnalysisInput {
            heat_load: self.heat_load,
            flow_rate,
            conditions: self.conditions,
            coolant: self.coolant,
            resistances: self.resistances,
            geometry: self.geometry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::power::watt;

    use crate::support::constraint::ConstraintError;

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    fn lpm(value: f64) -> VolumeRate {
        VolumeRate::new::<liter_per_minute>(value)
    }

    #[test]
    fn rejects_non_positive_heat_load_and_flow() {
        assert_eq!(
            AnalysisInput::new(Power::new::<watt>(-1.0), lpm(8.0)),
            Err(ValidationError::HeatLoad(ConstraintError::Negative))
        );
        assert_eq!(
            AnalysisInput::new(Power::new::<watt>(0.0), lpm(8.0)),
            Err(ValidationError::HeatLoad(ConstraintError::Zero))
        );
        assert_eq!(
            AnalysisInput::new(Power::new::<watt>(700.0), lpm(-1.0)),
            Err(ValidationError::FlowRate(ConstraintError::Negative))
        );
    }

    #[test]
    fn rejects_infinite_heat_load_and_flow() {
        assert_eq!(
            AnalysisInput::new(Power::new::<watt>(f64::INFINITY), lpm(8.0)),
            Err(ValidationError::HeatLoad(ConstraintError::Infinite))
        );
        assert_eq!(
            AnalysisInput::new(Power::new::<watt>(700.0), lpm(f64::INFINITY)),
            Err(ValidationError::FlowRate(ConstraintError::Infinite))
        );
        assert_eq!(
            FlowOptimizationInput::new(Power::new::<watt>(f64::INFINITY)),
            Err(ValidationError::HeatLoad(ConstraintError::Infinite))
        );
        assert_eq!(
            FlowBracket::new(lpm(1.0), lpm(f64::INFINITY)),
            Err(ValidationError::FlowRate(ConstraintError::Infinite))
        );
    }

    #[test]
    fn inlet_band_is_inclusive() {
        assert!(InletConditions::new(celsius(-20.0), None).is_ok());
        assert!(InletConditions::new(celsius(80.0), None).is_ok());
        assert!(matches!(
            InletConditions::new(celsius(500.0), None),
            Err(ValidationError::InletTemperature { .. })
        ));
        assert!(matches!(
            InletConditions::new(celsius(-21.0), None),
            Err(ValidationError::InletTemperature { .. })
        ));
    }

    #[test]
    fn ambient_is_checked_against_its_band_and_the_inlet() {
        assert!(InletConditions::new(celsius(25.0), Some(celsius(45.0))).is_ok());
        assert!(matches!(
            InletConditions::new(celsius(25.0), Some(celsius(45.5))),
            Err(ValidationError::AmbientAboveInlet { .. })
        ));
        assert!(matches!(
            InletConditions::new(celsius(25.0), Some(celsius(-41.0))),
            Err(ValidationError::AmbientTemperature { .. })
        ));
    }

    #[test]
    fn resistances_may_be_zero_but_not_negative() {
        assert!(FixedResistances::new(kelvin_per_watt(0.0), kelvin_per_watt(0.0)).is_ok());
        assert_eq!(
            FixedResistances::new(kelvin_per_watt(0.04), kelvin_per_watt(-0.01)),
            Err(ValidationError::Resistance {
                field: "r_tim_k_per_w",
                source: ConstraintError::Negative,
            })
        );
    }

    #[test]
    fn junction_target_is_an_open_interval() {
        assert!(JunctionTarget::new(celsius(85.0)).is_ok());
        assert!(JunctionTarget::new(celsius(0.0)).is_err());
        assert!(JunctionTarget::new(celsius(200.0)).is_err());
    }

    #[test]
    fn flow_bracket_must_be_increasing() {
        assert!(FlowBracket::new(lpm(1.0), lpm(40.0)).is_ok());
        assert!(matches!(
            FlowBracket::new(lpm(10.0), lpm(10.0)),
            Err(ValidationError::FlowBracket { .. })
        ));
        assert!(matches!(
            FlowBracket::new(lpm(20.0), lpm(5.0)),
            Err(ValidationError::FlowBracket { .. })
        ));
        assert!(matches!(
            FlowBracket::new(lpm(0.0), lpm(5.0)),
            Err(ValidationError::FlowRate(ConstraintError::Zero))
        ));
    }

    #[test]
    fn optimization_input_projects_to_analysis_input() {
        let input = FlowOptimizationInput::new(Power::new::<watt>(700.0)).unwrap();
        let flow = PositiveFinite::new(lpm(12.0)).unwrap();
        let point = input.at_flow_rate(flow);

        assert_eq!(point.flow_rate, flow);
        assert_eq!(point.heat_load, input.heat_load);
        assert_eq!(point.geometry, input.geometry);
    }
}
