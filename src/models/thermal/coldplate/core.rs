//! Steady-state single cold plate modeling.
//!
//! The plate is a bank of parallel square channels on a conducting base.
//! Heat leaves the junction through a 1-D series resistance network, and
//! coolant properties are constant at a 25 °C reference.

mod analysis;
mod correlations;
mod error;
mod geometry;
mod input;
mod model;
mod optimize;
mod results;
mod studies;

#[cfg(test)]
mod test_support;

pub use analysis::{PUMP_EFFICIENCY, analyze};
pub use correlations::FlowRegime;
pub use error::{GeometryError, ValidationError};
pub use geometry::{Geometry, GeometryParameters};
pub use input::{
    AnalysisInput, FixedResistances, FlowBracket, FlowOptimizationInput, InletConditions,
    JunctionTarget,
};
pub use model::ColdPlate;
pub use optimize::{OptimizeConfig, optimize_flow, optimize_flow_with};
pub use results::{AnalysisOutput, AnalysisWarning, FlowSolution, ResistanceBreakdown};
pub use studies::{compare_coolants, sweep_flow_rates};
