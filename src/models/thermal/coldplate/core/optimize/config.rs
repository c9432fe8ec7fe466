/// Search configuration for the minimum-flow optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimizeConfig {
    /// Number of bisection steps.
    ///
    /// The search always runs this many steps. There is no tolerance check,
    /// so the final bracket width is the initial width divided by
    /// `2^max_iters`. With zero steps no flow rate is tested and the result
    /// is never a solution.
    pub max_iters: usize,
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self { max_iters: 40 }
    }
}
