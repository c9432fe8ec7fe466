//! Problem formulation for the minimum-flow search.

use std::convert::Infallible;

use twine_core::EquationProblem;
use uom::si::{
    f64::{ThermodynamicTemperature, VolumeRate},
    temperature_interval::kelvin as delta_kelvin,
    volume_rate::cubic_meter_per_second,
};

use crate::support::{constraint::Constrained, units::TemperatureDifference};

use crate::models::thermal::coldplate::core::{
    AnalysisInput, AnalysisOutput, FlowOptimizationInput,
};

/// Equation problem for matching a junction temperature target.
///
/// The solver variable is the total flow rate in m³/s. The residual is
/// `T_j - target` in kelvin, so a non-positive residual meets the target.
pub(super) struct FlowRateProblem<'a> {
    input: &'a FlowOptimizationInput,
    target: ThermodynamicTemperature,
}

impl<'a> FlowRateProblem<'a> {
    pub(super) fn new(input: &'a FlowOptimizationInput) -> Self {
        Self {
            input,
            target: input.max_junction_temperature.temperature(),
        }
    }
}

impl EquationProblem<1> for FlowRateProblem<'_> {
    type Input = AnalysisInput;
    type Output = AnalysisOutput;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        // Midpoints of a validated bracket are strictly positive and finite.
        let flow_rate =
            Constrained::new_unchecked(VolumeRate::new::<cubic_meter_per_second>(x[0]));
        Ok(self.input.at_flow_rate(flow_rate))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let margin = output.junction_temperature.minus(self.target);
        Ok([margin.get::<delta_kelvin>()])
    }
}
