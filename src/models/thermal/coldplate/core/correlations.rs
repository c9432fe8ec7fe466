//! Regime-blended heat transfer and friction correlations.
//!
//! Both correlations share one transition window, `2300 ≤ Re ≤ 4000`.
//! Inside it the value is a linear blend in `Re` between the laminar value at
//! the lower edge and the turbulent correlation at the upper edge, so both
//! outputs are continuous in flow rate.

use std::fmt;

/// Reynolds number below which flow is laminar.
const RE_LAMINAR_MAX: f64 = 2300.0;

/// Reynolds number above which flow is turbulent.
const RE_TURBULENT_MIN: f64 = 4000.0;

/// Fully developed laminar Nusselt number for a circular duct with uniform heat flux.
const NU_LAMINAR: f64 = 4.36;

/// Flow regime implied by the Reynolds number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowRegime {
    /// `Re < 2300`.
    Laminar,
    /// `2300 ≤ Re ≤ 4000`.
    Transitional,
    /// `Re > 4000`.
    Turbulent,
}

impl FlowRegime {
    /// Classifies a Reynolds number.
    #[must_use]
    pub fn from_reynolds(re: f64) -> Self {
        if re < RE_LAMINAR_MAX {
            FlowRegime::Laminar
        } else if re > RE_TURBULENT_MIN {
            FlowRegime::Turbulent
        } else {
            FlowRegime::Transitional
        }
    }

    /// Returns the external tag for this regime.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FlowRegime::Laminar => "laminar",
            FlowRegime::Transitional => "transitional",
            FlowRegime::Turbulent => "turbulent",
        }
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fraction of the way from the laminar edge to the turbulent edge.
fn blend_fraction(re: f64) -> f64 {
    (re - RE_LAMINAR_MAX) / (RE_TURBULENT_MIN - RE_LAMINAR_MAX)
}

/// Dittus-Boelter correlation (heating), `Nu = 0.023·Re^0.8·Pr^0.4`.
fn dittus_boelter(re: f64, pr: f64) -> f64 {
    0.023 * re.powf(0.8) * pr.powf(0.4)
}

/// Laminar Darcy friction factor, `f = 64 / Re`.
fn laminar_friction(re: f64) -> f64 {
    64.0 / re
}

/// Blasius smooth-pipe Darcy friction factor, `f = 0.3164·Re^-0.25`.
fn blasius_friction(re: f64) -> f64 {
    0.3164 * re.powf(-0.25)
}

/// Returns the Nusselt number and regime for the given Reynolds and Prandtl numbers.
pub(crate) fn nusselt(re: f64, pr: f64) -> (f64, FlowRegime) {
    let regime = FlowRegime::from_reynolds(re);
    let nu = match regime {
        FlowRegime::Laminar => NU_LAMINAR,
        FlowRegime::Turbulent => dittus_boelter(re, pr),
        FlowRegime::Transitional => {
            let blend = blend_fraction(re);
            NU_LAMINAR * (1.0 - blend) + dittus_boelter(RE_TURBULENT_MIN, pr) * blend
        }
    };
    (nu, regime)
}

/// Returns the Darcy friction factor for the given Reynolds number.
pub(crate) fn friction_factor(re: f64) -> f64 {
    match FlowRegime::from_reynolds(re) {
        FlowRegime::Laminar => laminar_friction(re),
        FlowRegime::Turbulent => blasius_friction(re),
        FlowRegime::Transitional => {
            let blend = blend_fraction(re);
            laminar_friction(RE_LAMINAR_MAX) * (1.0 - blend)
                + blasius_friction(RE_TURBULENT_MIN) * blend
        }
    }
}
