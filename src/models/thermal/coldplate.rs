//! Liquid-cooled cold plate model.
//!
//! A cold plate is a bank of parallel square channels on a conducting base,
//! mounted against a heat-generating chip. Given a heat load and coolant
//! flow, [`analyze`] returns the junction temperature, pressure drop, pump
//! power and thermal resistance breakdown. [`optimize_flow`] inverts that
//! mapping to find the smallest flow that meets a junction temperature target.
//!
//! [`ColdPlate`] exposes [`analyze`] as a [`twine_core::Model`], and the
//! [`wire`] module provides request and report records for external consumers.
//!
//! The model is steady-state, with constant coolant properties and a single
//! 1-D series resistance path from junction to coolant.

mod core;
pub mod wire;

pub use self::core::{
    AnalysisInput, AnalysisOutput, AnalysisWarning, ColdPlate, FixedResistances, FlowBracket,
    FlowOptimizationInput, FlowRegime, FlowSolution, Geometry, GeometryError, GeometryParameters,
    InletConditions, JunctionTarget, OptimizeConfig, PUMP_EFFICIENCY, ResistanceBreakdown,
    ValidationError, analyze, compare_coolants, optimize_flow, optimize_flow_with,
    sweep_flow_rates,
};
