use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Every geometric dimension of a cold plate uses this constraint: a zero
/// value would divide by zero somewhere downstream. Heat loads and flow rates
/// use [`PositiveFinite`](super::PositiveFinite), which also rejects infinity.
///
/// # Examples
///
/// ```
/// use coldplate_models::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::VolumeRate, volume_rate::liter_per_minute};
///
/// let flow = StrictlyPositive::new(VolumeRate::new::<liter_per_minute>(8.0)).unwrap();
/// assert_eq!(flow.into_inner().get::<liter_per_minute>(), 8.0);
///
/// assert!(Constrained::<f64, StrictlyPositive>::new(0.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
