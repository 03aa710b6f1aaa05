/// Configuration for the RK4 solver.
///
/// The default configuration performs no validation of derivative results,
/// so a NaN or infinite slope propagates into every later sample. Use
/// [`Config::reject_non_finite`] to fail fast instead.
///
/// # Example
///
/// ```
/// use stepwise_solvers::transient::rk4::Config;
///
/// let config = Config::default().reject_non_finite();
/// assert!(config.rejects_non_finite());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    reject_non_finite: bool,
}

impl Config {
    /// Fails the run at the first step producing a NaN or infinite slope or value.
    #[must_use]
    pub fn reject_non_finite(mut self) -> Self {
        self.reject_non_finite = true;
        self
    }

    /// Returns whether non-finite slopes and values are rejected.
    #[must_use]
    pub fn rejects_non_finite(&self) -> bool {
        self.reject_non_finite
    }
}
