//! Single-point steady-state cold plate analysis.
//!
//! Heat flows from the junction to the coolant through a single 1-D series
//! path: junction → case → TIM → base → coolant. The coolant side uses the
//! arithmetic mean of inlet and outlet as its bulk temperature, a
//! first-order approximation whose error grows with the coolant rise.

use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{
        HeatTransfer, MassRate, Power, Pressure, TemperatureInterval, ThermalConductance,
        ThermodynamicTemperature, Velocity, VolumeRate,
    },
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    thermal_conductance::watt_per_kelvin,
    thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
};

use crate::support::units::{ThermalResistance, kelvin_per_watt};

use super::{
    AnalysisInput, AnalysisOutput, AnalysisWarning, ResistanceBreakdown,
    correlations::{friction_factor, nusselt},
};

/// Pump efficiency used to convert hydraulic power to pump power.
///
/// A centrifugal pump at partial load.
pub const PUMP_EFFICIENCY: f64 = 0.5;

/// Junction temperature above which [`AnalysisWarning::JunctionOverTemperature`] is raised.
const JUNCTION_WARNING_C: f64 = 85.0;

/// Reynolds number below which [`AnalysisWarning::LowReynolds`] is raised.
const LOW_REYNOLDS: f64 = 500.0;

/// Computes the steady-state thermal and hydraulic performance of a cold plate.
///
/// This function is pure: it reads only its input and the constant coolant
/// table, so it can be called concurrently from any number of threads.
///
/// # Example
///
/// ```
/// use coldplate_models::models::thermal::coldplate::{AnalysisInput, FlowRegime, analyze};
/// use uom::si::{
///     f64::{Power, VolumeRate},
///     power::watt,
///     volume_rate::liter_per_minute,
/// };
///
/// let input = AnalysisInput::new(
///     Power::new::<watt>(700.0),
///     VolumeRate::new::<liter_per_minute>(8.0),
/// )
/// .unwrap();
///
/// let output = analyze(&input);
/// assert_eq!(output.regime, FlowRegime::Transitional);
/// assert!(output.warnings.is_empty());
/// ```
#[must_use]
pub fn analyze(input: &AnalysisInput) -> AnalysisOutput {
    let props = input.coolant.properties();
    let geometry = &input.geometry;
    let heat_load: Power = *input.heat_load.as_ref();
    let flow_rate: VolumeRate = *input.flow_rate.as_ref();

    let velocity: Velocity = flow_rate / geometry.flow_area();
    let dh = geometry.hydraulic_diameter().get::<meter>();
    let reynolds = props.density.get::<kilogram_per_cubic_meter>()
        * velocity.get::<meter_per_second>()
        * dh
        / props.viscosity.get::<pascal_second>();

    let (nu, regime) = nusselt(reynolds, props.prandtl());
    let h: HeatTransfer = props.thermal_conductivity * nu / geometry.hydraulic_diameter();

    let convective_conductance: ThermalConductance = h * geometry.wetted_area();
    let convection = kelvin_per_watt(1.0 / convective_conductance.get::<watt_per_kelvin>());
    let base_conduction: ThermalResistance = geometry.base_thickness()
        / (geometry.base_conductivity() * geometry.contact_area());
    let junction_to_case = *input.resistances.junction_to_case.as_ref();
    let tim = *input.resistances.tim.as_ref();
    let total = junction_to_case + tim + base_conduction + convection;

    let m_dot: MassRate = flow_rate * props.density;
    let coolant_rise: TemperatureInterval = heat_load / (m_dot * props.specific_heat);
    let bulk = input.conditions.inlet() + coolant_rise * 0.5;
    let junction_rise: TemperatureInterval = heat_load * total;
    let junction_temperature: ThermodynamicTemperature = bulk + junction_rise;

    let f = friction_factor(reynolds);
    let dynamic_pressure: Pressure = props.density * velocity * velocity * 0.5;
    let pressure_drop = dynamic_pressure * (f * geometry.channel_length().get::<meter>() / dh);
    let pump_power: Power = pressure_drop * flow_rate / PUMP_EFFICIENCY;

    let mut warnings = Vec::new();
    if junction_temperature.get::<degree_celsius>() > JUNCTION_WARNING_C {
        warnings.push(AnalysisWarning::JunctionOverTemperature);
    }
    if reynolds < LOW_REYNOLDS {
        warnings.push(AnalysisWarning::LowReynolds);
    }

    AnalysisOutput {
        coolant: input.coolant,
        regime,
        reynolds,
        nusselt: nu,
        heat_transfer_coefficient: h,
        pressure_drop,
        pump_power,
        coolant_rise,
        junction_temperature,
        resistances: ResistanceBreakdown {
            junction_to_case,
            tim,
            base_conduction,
            convection,
            total,
        },
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        heat_transfer::watt_per_square_meter_kelvin, power::watt, pressure::pascal,
        temperature_interval::kelvin as delta_kelvin,
    };

    use crate::models::thermal::coldplate::core::{
        FlowRegime, InletConditions,
        test_support::{default_input, flow, high_resistance_input},
    };
    use crate::support::coolant::Coolant;

    fn junction_c(output: &AnalysisOutput) -> f64 {
        output.junction_temperature.get::<degree_celsius>()
    }

    #[test]
    fn turbulent_reference_case() {
        let output = analyze(&high_resistance_input(10.0));

        assert_eq!(output.regime, FlowRegime::Turbulent);
        assert_relative_eq!(output.reynolds, 4667.6, max_relative = 1e-4);
        assert_relative_eq!(output.resistances.total.value, 0.1537, epsilon = 1e-4);
        assert_relative_eq!(
            output.coolant_rise.get::<delta_kelvin>(),
            1.01,
            epsilon = 0.01
        );
        assert_relative_eq!(junction_c(&output), 133.1, epsilon = 1.0);
        assert_eq!(output.warnings, [AnalysisWarning::JunctionOverTemperature]);
    }

    #[test]
    fn transitional_reference_case() {
        let output = analyze(&default_input(8.0));

        assert_eq!(output.regime, FlowRegime::Transitional);
        assert_relative_eq!(junction_c(&output), 70.9, epsilon = 1.0);
        assert_relative_eq!(output.nusselt, 31.33, epsilon = 0.01);
        assert_relative_eq!(
            output.heat_transfer_coefficient.get::<watt_per_square_meter_kelvin>(),
            18_800.7,
            max_relative = 1e-4
        );
        assert!(output.warnings.is_empty());
    }

    #[test]
    fn resistance_breakdown_is_a_series_sum() {
        let r = analyze(&default_input(8.0)).resistances;

        assert_relative_eq!(r.junction_to_case.value, 0.04);
        assert_relative_eq!(r.tim.value, 0.02);
        assert_relative_eq!(
            r.base_conduction.value,
            0.002 / (385.0 * 0.01),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            r.total.value,
            r.junction_to_case.value + r.tim.value + r.base_conduction.value + r.convection.value,
            max_relative = 1e-12
        );
    }

    #[test]
    fn energy_balance_sets_coolant_rise() {
        let output = analyze(&default_input(12.0));
        let m_dot = 12.0 / 60_000.0 * 997.0;
        assert_relative_eq!(
            output.coolant_rise.get::<delta_kelvin>(),
            700.0 / (m_dot * 4180.0),
            max_relative = 1e-9
        );
    }

    #[test]
    fn pump_power_is_hydraulic_power_over_efficiency() {
        let output = analyze(&default_input(10.0));
        let hydraulic = output.pressure_drop.get::<pascal>() * 10.0 / 60_000.0;
        assert_relative_eq!(
            output.pump_power.get::<watt>(),
            hydraulic / PUMP_EFFICIENCY,
            max_relative = 1e-9
        );
    }

    #[test]
    fn identical_inputs_give_identical_outputs() {
        let input = high_resistance_input(10.0);
        assert_eq!(analyze(&input), analyze(&input));
    }

    #[test]
    fn junction_temperature_never_rises_with_flow() {
        let mut previous = f64::INFINITY;
        for step in 0..=380 {
            let flow_lpm = 2.0 + 0.1 * f64::from(step);
            let t_j = junction_c(&analyze(&default_input(flow_lpm)));
            assert!(
                t_j <= previous,
                "junction temperature rose at {flow_lpm} L/min: {t_j} > {previous}"
            );
            previous = t_j;
        }
    }

    #[test]
    fn pressure_drop_grows_faster_than_flow() {
        let mut previous = 0.0;
        for step in 0..=38 {
            let dp = analyze(&default_input(2.0 + f64::from(step)))
                .pressure_drop
                .get::<pascal>();
            assert!(dp > previous);
            previous = dp;
        }

        let single = analyze(&default_input(10.0)).pressure_drop;
        let double = analyze(&default_input(20.0)).pressure_drop;
        let ratio = double.value / single.value;
        assert!((3.0..=5.0).contains(&ratio), "doubling flow scaled dp by {ratio}");
    }

    #[test]
    fn higher_flow_raises_heat_transfer_coefficient() {
        let laminar = analyze(&default_input(0.8));
        let turbulent = analyze(&default_input(12.0));

        assert_eq!(laminar.regime, FlowRegime::Laminar);
        assert_eq!(turbulent.regime, FlowRegime::Turbulent);
        assert!(turbulent.heat_transfer_coefficient > laminar.heat_transfer_coefficient);
    }

    #[test]
    fn low_flow_raises_both_warnings_in_order() {
        let output = analyze(&default_input(1.0));
        assert_eq!(
            output.warnings,
            [
                AnalysisWarning::JunctionOverTemperature,
                AnalysisWarning::LowReynolds
            ]
        );
    }

    #[test]
    fn water_outperforms_glycol() {
        for flow_lpm in [2.0, 8.0, 15.0, 30.0] {
            let water = analyze(&default_input(flow_lpm));
            let glycol = analyze(&default_input(flow_lpm).with_coolant(Coolant::Glycol50));
            assert!(water.junction_temperature <= glycol.junction_temperature);
        }
    }

    #[test]
    fn ambient_does_not_affect_results() {
        let input = default_input(8.0);
        let without_ambient = AnalysisInput {
            conditions: InletConditions::new(input.conditions.inlet(), None).unwrap(),
            ..input
        };
        assert_eq!(analyze(&input), analyze(&without_ambient));
    }

    #[test]
    fn with_flow_rate_changes_only_flow() {
        let base = default_input(8.0);
        let faster = base.with_flow_rate(flow(16.0));
        assert_eq!(analyze(&faster), analyze(&default_input(16.0)));
    }
}
