//! External request and report records.
//!
//! These records carry plain numbers in fixed units (W, L/min, °C, K/W, Pa,
//! W/(m²·K)) under stable field names, for consumers that exchange cold
//! plate analyses as JSON or similar formats. Requests fill omitted fields
//! with defaults and are validated into the typed inputs with [`TryFrom`].
//!
//! ```
//! use coldplate_models::models::thermal::coldplate::wire::{AnalyzeRequest, analyze_coldplate};
//!
//! let request = AnalyzeRequest {
//!     flow_rate_lpm: 10.0,
//!     ..AnalyzeRequest::default()
//! };
//! let report = analyze_coldplate(&request).unwrap();
//! assert_eq!(report.regime, "turbulent");
//! ```

use serde::{Deserialize, Serialize};
use uom::si::{
    area::square_meter,
    f64::{Area, Length, Power, ThermalConductivity, ThermodynamicTemperature, VolumeRate},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    power::watt,
    pressure::pascal,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
    volume_rate::liter_per_minute,
};

use crate::support::{
    constraint::PositiveFinite,
    coolant::Coolant,
    units::{ThermalResistance, kelvin_per_watt},
};

use super::core::{
    AnalysisInput, AnalysisOutput, FixedResistances, FlowBracket, FlowOptimizationInput,
    FlowSolution, Geometry, GeometryError, GeometryParameters, InletConditions, JunctionTarget,
    ResistanceBreakdown, ValidationError, analyze, compare_coolants as compare, optimize_flow,
};

/// Cold plate geometry in SI units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeometryRequest {
    pub channel_count: u32,
    pub hydraulic_diameter_m: f64,
    pub channel_width_m: f64,
    pub channel_length_m: f64,
    pub base_thickness_m: f64,
    pub contact_area_m2: f64,
    pub base_thermal_conductivity_w_mk: f64,
}

impl Default for GeometryRequest {
    fn default() -> Self {
        let params = GeometryParameters::default();
        Self {
            channel_count: params.channel_count,
            hydraulic_diameter_m: params.hydraulic_diameter.get::<meter>(),
            channel_width_m: params.channel_width.get::<meter>(),
            channel_length_m: params.channel_length.get::<meter>(),
            base_thickness_m: params.base_thickness.get::<meter>(),
            contact_area_m2: params.contact_area.get::<square_meter>(),
            base_thermal_conductivity_w_mk: params
                .base_conductivity
                .get::<watt_per_meter_kelvin>(),
        }
    }
}

impl TryFrom<&GeometryRequest> for Geometry {
    type Error = GeometryError;

    fn try_from(request: &GeometryRequest) -> Result<Self, Self::Error> {
        Geometry::new(GeometryParameters {
            channel_count: request.channel_count,
            hydraulic_diameter: Length::new::<meter>(request.hydraulic_diameter_m),
            channel_width: Length::new::<meter>(request.channel_width_m),
            channel_length: Length::new::<meter>(request.channel_length_m),
            base_thickness: Length::new::<meter>(request.base_thickness_m),
            contact_area: Area::new::<square_meter>(request.contact_area_m2),
            base_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(
                request.base_thermal_conductivity_w_mk,
            ),
        })
    }
}

/// Request for a single-point analysis.
///
/// `ambient_temp_c` does not affect the analysis. A `null` ambient skips
/// its checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzeRequest {
    pub heat_load_w: f64,
    pub flow_rate_lpm: f64,
    pub inlet_temp_c: f64,
    pub ambient_temp_c: Option<f64>,
    pub coolant: String,
    pub r_jc_k_per_w: f64,
    pub r_tim_k_per_w: f64,
    pub geometry: GeometryRequest,
}

impl Default for AnalyzeRequest {
    fn default() -> Self {
        Self {
            heat_load_w: 700.0,
            flow_rate_lpm: 8.0,
            inlet_temp_c: 25.0,
            ambient_temp_c: Some(25.0),
            coolant: Coolant::default().id().to_owned(),
            r_jc_k_per_w: 0.04,
            r_tim_k_per_w: 0.02,
            geometry: GeometryRequest::default(),
        }
    }
}

impl TryFrom<&AnalyzeRequest> for AnalysisInput {
    type Error = ValidationError;

    fn try_from(request: &AnalyzeRequest) -> Result<Self, Self::Error> {
        let common = CommonFields {
            inlet_temp_c: request.inlet_temp_c,
            ambient_temp_c: request.ambient_temp_c,
            r_jc_k_per_w: request.r_jc_k_per_w,
            r_tim_k_per_w: request.r_tim_k_per_w,
            geometry: &request.geometry,
        };
        Ok(AnalysisInput {
            coolant: request.coolant.parse()?,
            ..common.analysis_input(request.heat_load_w, request.flow_rate_lpm)?
        })
    }
}

/// Request for comparing every coolant at one operating point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompareCoolantsRequest {
    pub heat_load_w: f64,
    pub flow_rate_lpm: f64,
    pub inlet_temp_c: f64,
    pub ambient_temp_c: Option<f64>,
    pub r_jc_k_per_w: f64,
    pub r_tim_k_per_w: f64,
    pub geometry: GeometryRequest,
}

impl Default for CompareCoolantsRequest {
    fn default() -> Self {
        let AnalyzeRequest {
            heat_load_w,
            flow_rate_lpm,
            inlet_temp_c,
            ambient_temp_c,
            r_jc_k_per_w,
            r_tim_k_per_w,
            geometry,
            ..
        } = AnalyzeRequest::default();
        Self {
            heat_load_w,
            flow_rate_lpm,
            inlet_temp_c,
            ambient_temp_c,
            r_jc_k_per_w,
            r_tim_k_per_w,
            geometry,
        }
    }
}

impl TryFrom<&CompareCoolantsRequest> for AnalysisInput {
    type Error = ValidationError;

    fn try_from(request: &CompareCoolantsRequest) -> Result<Self, Self::Error> {
        CommonFields {
            inlet_temp_c: request.inlet_temp_c,
            ambient_temp_c: request.ambient_temp_c,
            r_jc_k_per_w: request.r_jc_k_per_w,
            r_tim_k_per_w: request.r_tim_k_per_w,
            geometry: &request.geometry,
        }
        .analysis_input(request.heat_load_w, request.flow_rate_lpm)
    }
}

/// Request for the minimum flow rate meeting a junction temperature target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptimizeFlowRateRequest {
    pub heat_load_w: f64,
    pub max_junction_temp_c: f64,
    pub inlet_temp_c: f64,
    pub ambient_temp_c: Option<f64>,
    pub coolant: String,
    pub flow_min_lpm: f64,
    pub flow_max_lpm: f64,
    pub r_jc_k_per_w: f64,
    pub r_tim_k_per_w: f64,
    pub geometry: GeometryRequest,
}

impl Default for OptimizeFlowRateRequest {
    fn default() -> Self {
        let base = AnalyzeRequest::default();
        Self {
            heat_load_w: base.heat_load_w,
            max_junction_temp_c: 85.0,
            inlet_temp_c: base.inlet_temp_c,
            ambient_temp_c: base.ambient_temp_c,
            coolant: base.coolant,
            flow_min_lpm: 1.0,
            flow_max_lpm: 40.0,
            r_jc_k_per_w: base.r_jc_k_per_w,
            r_tim_k_per_w: base.r_tim_k_per_w,
            geometry: base.geometry,
        }
    }
}

impl TryFrom<&OptimizeFlowRateRequest> for FlowOptimizationInput {
    type Error = ValidationError;

    fn try_from(request: &OptimizeFlowRateRequest) -> Result<Self, Self::Error> {
        let common = CommonFields {
            inlet_temp_c: request.inlet_temp_c,
            ambient_temp_c: request.ambient_temp_c,
            r_jc_k_per_w: request.r_jc_k_per_w,
            r_tim_k_per_w: request.r_tim_k_per_w,
            geometry: &request.geometry,
        };
        Ok(FlowOptimizationInput {
            heat_load: PositiveFinite::new(Power::new::<watt>(request.heat_load_w))
                .map_err(ValidationError::HeatLoad)?,
            max_junction_temperature: JunctionTarget::new(celsius(request.max_junction_temp_c))?,
            conditions: common.conditions()?,
            coolant: request.coolant.parse()?,
            resistances: common.resistances()?,
            geometry: Geometry::try_from(common.geometry)?,
            bracket: FlowBracket::new(lpm(request.flow_min_lpm), lpm(request.flow_max_lpm))?,
        })
    }
}

/// Fields shared by every request.
struct CommonFields<'a> {
    inlet_temp_c: f64,
    ambient_temp_c: Option<f64>,
    r_jc_k_per_w: f64,
    r_tim_k_per_w: f64,
    geometry: &'a GeometryRequest,
}

impl CommonFields<'_> {
    fn conditions(&self) -> Result<InletConditions, ValidationError> {
        InletConditions::new(
            celsius(self.inlet_temp_c),
            self.ambient_temp_c.map(celsius),
        )
    }

    fn resistances(&self) -> Result<FixedResistances, ValidationError> {
        FixedResistances::new(
            kelvin_per_watt(self.r_jc_k_per_w),
            kelvin_per_watt(self.r_tim_k_per_w),
        )
    }

    /// Builds a water analysis input.
    fn analysis_input(
        &self,
        heat_load_w: f64,
        flow_rate_lpm: f64,
    ) -> Result<AnalysisInput, ValidationError> {
        Ok(AnalysisInput {
            conditions: self.conditions()?,
            resistances: self.resistances()?,
            geometry: Geometry::try_from(self.geometry)?,
            ..AnalysisInput::new(Power::new::<watt>(heat_load_w), lpm(flow_rate_lpm))?
        })
    }
}

fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

fn lpm(value: f64) -> VolumeRate {
    VolumeRate::new::<liter_per_minute>(value)
}

/// Single-point analysis results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub coolant: String,
    pub regime: String,
    pub reynolds: f64,
    pub nusselt: f64,
    pub heat_transfer_coeff_w_m2k: f64,
    pub pressure_drop_pa: f64,
    pub pump_power_w: f64,
    pub coolant_rise_c: f64,
    pub junction_temp_c: f64,
    pub resistances_k_per_w: ResistanceReport,
    pub warnings: Vec<String>,
}

impl From<&AnalysisOutput> for AnalysisReport {
    fn from(output: &AnalysisOutput) -> Self {
        Self {
            coolant: output.coolant.id().to_owned(),
            regime: output.regime.as_str().to_owned(),
            reynolds: output.reynolds,
            nusselt: output.nusselt,
            heat_transfer_coeff_w_m2k: output
                .heat_transfer_coefficient
                .get::<watt_per_square_meter_kelvin>(),
            pressure_drop_pa: output.pressure_drop.get::<pascal>(),
            pump_power_w: output.pump_power.get::<watt>(),
            coolant_rise_c: output.coolant_rise.get::<delta_kelvin>(),
            junction_temp_c: output.junction_temperature.get::<degree_celsius>(),
            resistances_k_per_w: ResistanceReport::from(&output.resistances),
            warnings: output.warnings.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Series resistances in K/W.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResistanceReport {
    pub junction_to_case: f64,
    pub tim: f64,
    pub base_conduction: f64,
    pub convection: f64,
    pub total: f64,
}

impl From<&ResistanceBreakdown> for ResistanceReport {
    fn from(r: &ResistanceBreakdown) -> Self {
        let k_per_w = |value: ThermalResistance| value.value;
        Self {
            junction_to_case: k_per_w(r.junction_to_case),
            tim: k_per_w(r.tim),
            base_conduction: k_per_w(r.base_conduction),
            convection: k_per_w(r.convection),
            total: k_per_w(r.total),
        }
    }
}

/// Per-coolant comparison results, keyed by coolant id in table order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoolantResults {
    pub water: AnalysisReport,
    pub glycol50: AnalysisReport,
}

/// Coolant comparison results with the request that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoolantComparisonReport {
    pub inputs: CompareCoolantsRequest,
    pub results: CoolantResults,
}

/// Minimum-flow search results.
///
/// When `met_target` is `false`, `minimum_flow_rate_lpm` is the bracket
/// maximum and `analysis_at_minimum_flow` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowOptimizationReport {
    pub target_max_junction_temp_c: f64,
    pub minimum_flow_rate_lpm: f64,
    pub met_target: bool,
    pub analysis_at_minimum_flow: Option<AnalysisReport>,
}

impl FlowOptimizationReport {
    fn new(target: JunctionTarget, solution: &FlowSolution) -> Self {
        Self {
            target_max_junction_temp_c: target.temperature().get::<degree_celsius>(),
            minimum_flow_rate_lpm: solution.flow_rate.get::<liter_per_minute>(),
            met_target: solution.met_target(),
            analysis_at_minimum_flow: solution.analysis.as_ref().map(AnalysisReport::from),
        }
    }
}

/// Validates and runs a single-point analysis.
///
/// # Errors
///
/// Returns a [`ValidationError`] if any request field is invalid.
pub fn analyze_coldplate(request: &AnalyzeRequest) -> Result<AnalysisReport, ValidationError> {
    let input = AnalysisInput::try_from(request)?;
    Ok(AnalysisReport::from(&analyze(&input)))
}

/// Validates and runs a coolant comparison.
///
/// # Errors
///
/// Returns a [`ValidationError`] if any request field is invalid.
pub fn compare_coolants(
    request: &CompareCoolantsRequest,
) -> Result<CoolantComparisonReport, ValidationError> {
    let input = AnalysisInput::try_from(request)?;
    let [water, glycol50] = compare(&input);
    Ok(CoolantComparisonReport {
        inputs: request.clone(),
        results: CoolantResults {
            water: AnalysisReport::from(&water),
            glycol50: AnalysisReport::from(&glycol50),
        },
    })
}

/// Validates and runs a minimum-flow search.
///
/// # Errors
///
/// Returns a [`ValidationError`] if any request field is invalid.
/// An unreachable target is not an error.
pub fn optimize_flow_rate(
    request: &OptimizeFlowRateRequest,
) -> Result<FlowOptimizationReport, ValidationError> {
    let input = FlowOptimizationInput::try_from(request)?;
    let solution = optimize_flow(&input);
    Ok(FlowOptimizationReport::new(
        input.max_junction_temperature,
        &solution,
    ))
}
