use std::convert::Infallible;

use twine_core::Model;

use super::{AnalysisInput, AnalysisOutput, analyze};

/// Steady-state cold plate model.
///
/// A [`Model`] adapter over [`analyze`]. Validation happens when the
/// [`AnalysisInput`] is built, so a call never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColdPlate;

impl Model for ColdPlate {
    type Input = AnalysisInput;
    type Output = AnalysisOutput;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(analyze(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::thermal::coldplate::core::test_support::default_input;

    #[test]
    fn call_matches_analyze() {
        let input = default_input(8.0);
        let Ok(output) = ColdPlate.call(&input);
        assert_eq!(output, analyze(&input));
    }
}
