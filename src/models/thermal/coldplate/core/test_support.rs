use uom::si::{
    f64::{Power, ThermodynamicTemperature, VolumeRate},
    power::watt,
    thermodynamic_temperature::degree_celsius,
    volume_rate::liter_per_minute,
};

use crate::support::{
    constraint::{Constrained, PositiveFinite},
    units::kelvin_per_watt,
};

use super::{AnalysisInput, FixedResistances, FlowOptimizationInput};

/// Heat load used by every reference scenario.
pub(super) const HEAT_LOAD_W: f64 = 700.0;

pub(super) fn lpm(value: f64) -> VolumeRate {
    VolumeRate::new::<liter_per_minute>(value)
}

pub(super) fn flow(value_lpm: f64) -> Constrained<VolumeRate, PositiveFinite> {
    PositiveFinite::new(lpm(value_lpm)).unwrap()
}

pub(super) fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

/// 700 W on water with the default resistances, geometry and 25 °C inlet.
pub(super) fn default_input(flow_lpm: f64) -> AnalysisInput {
    AnalysisInput::new(Power::new::<watt>(HEAT_LOAD_W), lpm(flow_lpm)).unwrap()
}

/// `R_jc` of 0.1 K/W and `R_tim` of 0.05 K/W, a poorly attached package.
pub(super) fn high_resistances() -> FixedResistances {
    FixedResistances::new(kelvin_per_watt(0.1), kelvin_per_watt(0.05)).unwrap()
}

/// Like [`default_input`] with [`high_resistances`].
pub(super) fn high_resistance_input(flow_lpm: f64) -> AnalysisInput {
    AnalysisInput {
        resistances: high_resistances(),
        ..default_input(flow_lpm)
    }
}

/// 700 W on water with the default target (85 °C) and bracket (1 to 40 L/min).
pub(super) fn default_optimization() -> FlowOptimizationInput {
    FlowOptimizationInput::new(Power::new::<watt>(HEAT_LOAD_W)).unwrap()
}
