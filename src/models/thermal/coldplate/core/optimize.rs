//! Minimum coolant flow rate for a junction temperature target.
//!
//! Junction temperature never increases with flow rate: more flow raises the
//! Reynolds number and the convective coefficient, and shrinks the coolant
//! rise. The search relies on that monotonicity and bisects the flow bracket
//! to a fixed depth, evaluating each midpoint through [`twine_solvers`].

mod config;
mod problem;

pub use config::OptimizeConfig;

use twine_solvers::equation::{EvalError, Evaluation, evaluate};
use uom::si::f64::VolumeRate;

use super::{AnalysisInput, AnalysisOutput, ColdPlate, FlowOptimizationInput, FlowSolution};

use problem::FlowRateProblem;

/// Finds the smallest flow rate in the bracket that keeps the junction at
/// or below the target, using [`OptimizeConfig::default`].
///
/// See [`optimize_flow_with`].
///
/// # Example
///
/// ```
/// use coldplate_models::models::thermal::coldplate::{FlowOptimizationInput, optimize_flow};
/// use uom::si::{f64::Power, power::watt, thermodynamic_temperature::degree_celsius};
///
/// let input = FlowOptimizationInput::new(Power::new::<watt>(700.0)).unwrap();
/// let solution = optimize_flow(&input);
///
/// let analysis = solution.analysis.expect("85 °C is reachable within 1 to 40 L/min");
/// assert!(analysis.junction_temperature.get::<degree_celsius>() <= 85.0);
/// ```
#[must_use]
pub fn optimize_flow(input: &FlowOptimizationInput) -> FlowSolution {
    optimize_flow_with(input, OptimizeConfig::default())
}

/// Finds the smallest flow rate in the bracket that keeps the junction at
/// or below the target.
///
/// Each step analyzes the midpoint of `[lo, hi]`. A midpoint that meets the
/// target becomes the new `hi` and its analysis is kept, otherwise it becomes
/// the new `lo`. So `hi` is always the smallest tested flow that meets the
/// target, or the bracket maximum if none has.
///
/// If no midpoint meets the target, the returned
/// [`analysis`](FlowSolution::analysis) is `None` and the flow rate is the
/// bracket maximum. This is the "unreachable within the bracket" outcome and
/// callers must check for it.
#[must_use]
pub fn optimize_flow_with(input: &FlowOptimizationInput, config: OptimizeConfig) -> FlowSolution {
    let problem = FlowRateProblem::new(input);

    let mut lo = input.bracket.min();
    let mut hi = input.bracket.max();
    let mut best = None;

    for _ in 0..config.max_iters {
        let mid = (lo + hi) * 0.5;
        let evaluation = evaluate_at(&problem, mid);
        if evaluation.residuals[0] <= 0.0 {
            hi = mid;
            best = Some(evaluation.snapshot.output);
        } else {
            lo = mid;
        }
    }

    FlowSolution {
        flow_rate: hi,
        analysis: best,
    }
}

fn evaluate_at(
    problem: &FlowRateProblem<'_>,
    flow_rate: VolumeRate,
) -> Evaluation<AnalysisInput, AnalysisOutput, 1> {
    match evaluate(&ColdPlate, problem, [flow_rate.value]) {
        Ok(evaluation) => evaluation,
        Err(EvalError::Model(never) | EvalError::Problem(never)) => match never {},
    }
}
