use thiserror::Error;

use crate::support::{constraint::ConstraintError, coolant::UnknownCoolant};

/// Errors that can occur while constructing a [`Geometry`](super::Geometry).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum GeometryError {
    /// The plate has no channels.
    #[error("channel count must be at least 1")]
    NoChannels,

    /// A length, area or conductivity is not strictly positive.
    #[error("invalid {field}: {source}")]
    Dimension {
        /// External name of the offending field.
        field: &'static str,

        #[source]
        source: ConstraintError,
    },

    /// Channel width and hydraulic diameter differ by more than 1 %.
    ///
    /// Flow area and wetted perimeter assume square channels, where the two
    /// are the same length.
    #[error(
        "channel_width_m ({width_m}) must equal hydraulic_diameter_m ({hydraulic_diameter_m}) \
         within 1% for square channels"
    )]
    NonSquareChannel {
        width_m: f64,
        hydraulic_diameter_m: f64,
    },
}

/// Errors raised when an input record is physically inconsistent.
///
/// These are the only errors a caller is expected to recover from, by
/// correcting the input. They are raised before any analysis runs.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("invalid heat_load_w: {0}")]
    HeatLoad(#[source] ConstraintError),

    #[error("invalid flow_rate_lpm: {0}")]
    FlowRate(#[source] ConstraintError),

    #[error("inlet_temp_c {value_c} is outside [{min_c}, {max_c}]")]
    InletTemperature { value_c: f64, min_c: f64, max_c: f64 },

    #[error("ambient_temp_c {value_c} is outside [{min_c}, {max_c}]")]
    AmbientTemperature { value_c: f64, min_c: f64, max_c: f64 },

    /// The ambient temperature is more than 20 °C above the coolant inlet.
    #[error("ambient_temp_c {ambient_c} is unrealistically high relative to inlet_temp_c {inlet_c}")]
    AmbientAboveInlet { ambient_c: f64, inlet_c: f64 },

    #[error("max_junction_temp_c {value_c} must be in (0, 200)")]
    JunctionTarget { value_c: f64 },

    #[error("invalid {field}: {source}")]
    Resistance {
        field: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// The flow search bracket is empty or inverted.
    #[error("flow_max_lpm ({max_lpm}) must be greater than flow_min_lpm ({min_lpm})")]
    FlowBracket { min_lpm: f64, max_lpm: f64 },

    #[error(transparent)]
    Coolant(#[from] UnknownCoolant),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
