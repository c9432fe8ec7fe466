//! Results types for single-point cold plate analysis.

use std::fmt;

use uom::si::f64::{
    HeatTransfer, Power, Pressure, TemperatureInterval, ThermodynamicTemperature, VolumeRate,
};

use crate::support::{coolant::Coolant, units::ThermalResistance};

use super::FlowRegime;

/// Thermal and hydraulic performance of a cold plate at one operating point.
///
/// Every field is derived from the [`AnalysisInput`](super::AnalysisInput);
/// identical inputs always produce identical outputs.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutput {
    pub coolant: Coolant,
    pub regime: FlowRegime,
    pub reynolds: f64,
    pub nusselt: f64,

    /// Convective heat transfer coefficient on the channel walls.
    pub heat_transfer_coefficient: HeatTransfer,

    /// Channel pressure drop, with no allowance for manifold or fitting losses.
    pub pressure_drop: Pressure,

    /// Hydraulic pump power at a fixed 50 % pump efficiency.
    pub pump_power: Power,

    /// Coolant temperature rise from inlet to outlet.
    pub coolant_rise: TemperatureInterval,

    pub junction_temperature: ThermodynamicTemperature,
    pub resistances: ResistanceBreakdown,

    /// Advisory warnings, in the order they were raised.
    pub warnings: Vec<AnalysisWarning>,
}

/// Series thermal resistances from junction to coolant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistanceBreakdown {
    pub junction_to_case: ThermalResistance,
    pub tim: ThermalResistance,
    pub base_conduction: ThermalResistance,
    pub convection: ThermalResistance,

    /// Sum of the four series resistances.
    pub total: ThermalResistance,
}

/// Advisory conditions flagged by an analysis.
///
/// Warnings never change the computed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisWarning {
    /// Junction temperature is above 85 °C.
    JunctionOverTemperature,

    /// Reynolds number is below 500, so flow may not distribute evenly
    /// across the channels.
    LowReynolds,
}

impl fmt::Display for AnalysisWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AnalysisWarning::JunctionOverTemperature => "junction temperature exceeds 85C",
            AnalysisWarning::LowReynolds => {
                "very low Reynolds number; risk of poor flow distribution"
            }
        })
    }
}

/// Outcome of a minimum-flow search.
///
/// `analysis` is `None` when no flow rate in the bracket meets the target.
/// In that case `flow_rate` is the upper end of the bracket and must not be
/// read as a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowSolution {
    pub flow_rate: VolumeRate,
    pub analysis: Option<AnalysisOutput>,
}

impl FlowSolution {
    /// Returns `true` if a flow rate meeting the target was found.
    #[must_use]
    pub fn met_target(&self) -> bool {
        self.analysis.is_some()
    }
}
