use uom::si::{Dimension, Quantity, SI};

use super::{Constrained, Constraint, ConstraintError, StrictlyPositive};

/// Marker type enforcing that a quantity is strictly positive and finite.
///
/// Heat loads and flow rates use this constraint. An infinite value passes
/// [`StrictlyPositive`] but turns every downstream output into `inf` or `NaN`.
///
/// # Examples
///
/// ```
/// use coldplate_models::support::constraint::{ConstraintError, PositiveFinite};
/// use uom::si::{f64::Power, power::watt};
///
/// assert!(PositiveFinite::new(Power::new::<watt>(700.0)).is_ok());
/// assert_eq!(
///     PositiveFinite::new(Power::new::<watt>(f64::INFINITY)),
///     Err(ConstraintError::Infinite)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PositiveFinite;

impl PositiveFinite {
    /// Constructs a [`Constrained<Quantity, PositiveFinite>`] if the quantity
    /// is strictly positive and finite.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, infinite or `NaN`.
    pub fn new<D>(
        value: Quantity<D, SI<f64>, f64>,
    ) -> Result<Constrained<Quantity<D, SI<f64>, f64>, PositiveFinite>, ConstraintError>
    where
        D: Dimension + ?Sized,
    {
        Constrained::new(value)
    }
}

impl<D> Constraint<Quantity<D, SI<f64>, f64>> for PositiveFinite
where
    D: Dimension + ?Sized,
{
    fn check(value: &Quantity<D, SI<f64>, f64>) -> Result<(), ConstraintError> {
        if value.value.is_infinite() {
            return Err(ConstraintError::Infinite);
        }
        StrictlyPositive::check(&value.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Power, VolumeRate},
        power::watt,
        volume_rate::liter_per_minute,
    };

    #[test]
    fn heat_loads() {
        assert!(PositiveFinite::new(Power::new::<watt>(700.0)).is_ok());
        assert_eq!(
            PositiveFinite::new(Power::new::<watt>(0.0)),
            Err(ConstraintError::Zero)
        );
        assert_eq!(
            PositiveFinite::new(Power::new::<watt>(-1.0)),
            Err(ConstraintError::Negative)
        );
        assert_eq!(
            PositiveFinite::new(Power::new::<watt>(f64::INFINITY)),
            Err(ConstraintError::Infinite)
        );
    }

    #[test]
    fn flow_rates() {
        assert!(PositiveFinite::new(VolumeRate::new::<liter_per_minute>(8.0)).is_ok());
        assert_eq!(
            PositiveFinite::new(VolumeRate::new::<liter_per_minute>(f64::NAN)),
            Err(ConstraintError::NotANumber)
        );
        assert_eq!(
            PositiveFinite::new(VolumeRate::new::<liter_per_minute>(f64::NEG_INFINITY)),
            Err(ConstraintError::Infinite)
        );
    }
}
