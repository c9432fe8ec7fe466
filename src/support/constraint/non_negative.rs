use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Fixed thermal resistances use this constraint: a perfect interface
/// (zero resistance) is a valid idealization, a negative one is not.
///
/// # Examples
///
/// ```
/// use coldplate_models::support::constraint::NonNegative;
///
/// assert_eq!(NonNegative::new(0.0).unwrap().into_inner(), 0.0);
/// assert!(NonNegative::new(-0.01).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::units::kelvin_per_watt;

    #[test]
    fn floats() {
        assert!(NonNegative::new(0.02).is_ok());
        assert!(NonNegative::new(0.0).is_ok());
        assert_eq!(NonNegative::new(-2.0), Err(ConstraintError::Negative));
    }

    #[test]
    fn thermal_resistances() {
        assert!(NonNegative::new(kelvin_per_watt(0.04)).is_ok());
        assert_eq!(
            NonNegative::new(kelvin_per_watt(-0.04)),
            Err(ConstraintError::Negative)
        );
        assert_eq!(
            NonNegative::new(kelvin_per_watt(0.0)).unwrap().into_inner().value,
            0.0
        );
    }
}
