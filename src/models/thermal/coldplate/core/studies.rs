//! Multi-point studies built on [`analyze`].

use uom::si::f64::VolumeRate;

use crate::support::{
    constraint::{Constrained, PositiveFinite},
    coolant::Coolant,
};

use super::{AnalysisInput, AnalysisOutput, analyze};

/// Analyzes the same operating point once per coolant in the table.
///
/// The coolant in `input` is ignored. Results are in [`Coolant::ALL`] order.
#[must_use]
pub fn compare_coolants(input: &AnalysisInput) -> [AnalysisOutput; 2] {
    Coolant::ALL.map(|coolant| analyze(&input.with_coolant(coolant)))
}

/// Analyzes one configuration at each of the given flow rates, in order.
///
/// The flow rate in `input` is ignored.
pub fn sweep_flow_rates<I>(input: &AnalysisInput, flow_rates: I) -> Vec<AnalysisOutput>
where
    I: IntoIterator<Item = Constrained<VolumeRate, PositiveFinite>>,
{
    flow_rates
        .into_iter()
        .map(|flow_rate| analyze(&input.with_flow_rate(flow_rate)))
        .collect()
}
