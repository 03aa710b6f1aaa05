use serde::{Deserialize, Serialize};

use stepwise_core::{Derivative, Sample};

use crate::{Decline, Effectiveness};

/// Exponential decay driven by two independent coefficients.
///
/// The rate quantity falls in proportion to its current value:
///
/// ```text
/// dy/dt = -(effectiveness + decline) * y
/// ```
///
/// The model is itself a [`Derivative`], so it can be handed straight to a
/// solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayModel {
    /// Reduction attributable to the intervention.
    pub effectiveness: Effectiveness,
    /// Reduction that happens regardless of the intervention.
    pub decline: Decline,
}

impl DecayModel {
    /// Creates a model from its two coefficients.
    #[must_use]
    pub fn new(effectiveness: Effectiveness, decline: Decline) -> Self {
        Self {
            effectiveness,
            decline,
        }
    }

    /// Returns the combined decay rate `effectiveness + decline`.
    #[must_use]
    pub fn combined_rate(&self) -> f64 {
        self.effectiveness.into_inner() + self.decline.into_inner()
    }

    /// Returns the analytic solution at `time` for a run starting at `initial`.
    #[must_use]
    pub fn exact(&self, initial: Sample, time: f64) -> f64 {
        initial.value * (-self.combined_rate() * (time - initial.time)).exp()
    }
}

impl Derivative for DecayModel {
    fn rate(&self, _time: f64, value: f64) -> f64 {
        -(self.effectiveness.into_inner() + self.decline.into_inner()) * value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn model(effectiveness: f64, decline: f64) -> DecayModel {
        DecayModel::new(
            Effectiveness::new(effectiveness).unwrap(),
            Decline::new(decline).unwrap(),
        )
    }

    #[test]
    fn rate_is_proportional_to_value() {
        let model = model(0.15, 0.05);

        assert_relative_eq!(model.combined_rate(), 0.2);
        assert_relative_eq!(model.rate(0.0, 50.0), -10.0);
        assert_relative_eq!(model.rate(7.0, 50.0), -10.0);
        assert_relative_eq!(model.rate(0.0, 0.0), 0.0);
    }

    #[test]
    fn zero_coefficients_hold_value() {
        let model = model(0.0, 0.0);

        assert_relative_eq!(model.rate(1.0, 50.0), 0.0);
        assert_relative_eq!(model.exact(Sample::new(0.0, 50.0), 10.0), 50.0);
    }

    #[test]
    fn exact_solution_accounts_for_start_time() {
        let model = model(0.5, 0.2);
        let initial = Sample::new(2.0, 10.0);

        assert_relative_eq!(model.exact(initial, 2.0), 10.0);
        assert_relative_eq!(model.exact(initial, 4.0), 10.0 * (-1.4_f64).exp());
    }

    #[test]
    fn default_uses_default_coefficients() {
        assert_eq!(DecayModel::default(), model(0.15, 0.05));
    }

    #[test]
    fn deserializes_with_defaults_and_validation() {
        let parsed: DecayModel = serde_json::from_str(r#"{ "effectiveness": 0.3 }"#).unwrap();
        assert_eq!(parsed, model(0.3, 0.05));

        assert!(serde_json::from_str::<DecayModel>(r#"{ "decline": -0.1 }"#).is_err());
    }
}
