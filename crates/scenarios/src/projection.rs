use serde::{Deserialize, Serialize};

use stepwise_core::{Derivative, Sample, Trajectory};
use stepwise_solvers::transient::rk4;

use crate::ScenarioError;

/// Largest number of steps a projection may take.
pub const MAX_STEPS: i64 = 100_000;

/// The initial condition and step schedule shared by every scenario.
///
/// The default projects 10 yearly steps from a value of 50 at time 0.
///
/// # Example
///
/// ```
/// use stepwise_scenarios::{DecayModel, Projection};
///
/// let trajectory = Projection::default().run(&DecayModel::default())?;
/// assert_eq!(trajectory.len(), 11);
/// # Ok::<(), stepwise_scenarios::ScenarioError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Projection {
    /// Value of the rate quantity at `start`.
    pub initial_value: f64,
    /// Time of the initial value.
    pub start: f64,
    /// Fixed step size.
    pub step: f64,
    /// Number of steps to take, at most [`MAX_STEPS`].
    pub steps: i64,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            initial_value: 50.0,
            start: 0.0,
            step: 1.0,
            steps: 10,
        }
    }
}

impl Projection {
    /// Returns the initial sample of every projected trajectory.
    #[must_use]
    pub fn initial(&self) -> Sample {
        Sample::new(self.start, self.initial_value)
    }

    /// Projects `derivative` over this schedule.
    ///
    /// # Errors
    ///
    /// - [`ScenarioError::TooManySteps`] if `steps` exceeds [`MAX_STEPS`].
    /// - [`ScenarioError::Integration`] if `steps` is negative.
    pub fn run<D>(&self, derivative: &D) -> Result<Trajectory, ScenarioError>
    where
        D: Derivative + ?Sized,
    {
        if self.steps > MAX_STEPS {
            return Err(ScenarioError::TooManySteps { max: MAX_STEPS });
        }

        let trajectory = rk4::integrate(
            derivative,
            self.start,
            self.initial_value,
            self.step,
            self.steps,
        )?;
        Ok(trajectory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::DecayModel;

    #[test]
    fn default_schedule() {
        let projection = Projection::default();

        assert_eq!(projection.initial(), Sample::new(0.0, 50.0));
        assert_relative_eq!(projection.step, 1.0);
        assert_eq!(projection.steps, 10);
    }

    #[test]
    fn runs_over_schedule() {
        let projection = Projection {
            initial_value: 20.0,
            start: 5.0,
            step: 0.5,
            steps: 4,
        };

        let trajectory = projection.run(&DecayModel::default()).unwrap();

        assert_eq!(trajectory.times(), &[5.0, 5.5, 6.0, 6.5, 7.0]);
        assert_relative_eq!(trajectory.initial().value, 20.0);
    }

    #[test]
    fn negative_steps_surface_integrator_error() {
        let projection = Projection {
            steps: -3,
            ..Projection::default()
        };

        let result = projection.run(&DecayModel::default());

        assert_eq!(
            result,
            Err(ScenarioError::Integration(rk4::Error::InvalidArgument {
                steps: -3
            }))
        );
    }

    #[test]
    fn step_count_is_bounded() {
        let at_limit = Projection {
            step: 0.001,
            steps: MAX_STEPS,
            ..Projection::default()
        };
        assert_eq!(at_limit.run(&DecayModel::default()).unwrap().len(), 100_001);

        for steps in [MAX_STEPS + 1, i64::MAX] {
            let projection = Projection {
                steps,
                ..Projection::default()
            };
            let result = projection.run(&DecayModel::default());
            assert_eq!(result, Err(ScenarioError::TooManySteps { max: MAX_STEPS }));
        }
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let projection: Projection = serde_json::from_str(r#"{ "steps": 20 }"#).unwrap();

        assert_eq!(
            projection,
            Projection {
                steps: 20,
                ..Projection::default()
            }
        );
    }
}
