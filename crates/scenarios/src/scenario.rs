use std::fmt;

use serde::{Deserialize, Serialize};

use stepwise_core::Trajectory;

use crate::{Color, DecayModel, Decline, Effectiveness, Projection, ScenarioError};

/// Identifies a scenario within a [`ScenarioSet`](crate::ScenarioSet).
///
/// Ids are assigned in increasing order and never reused within a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ScenarioId(pub(crate) u64);

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The editable coefficients of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Effectiveness,
    Decline,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Effectiveness => f.write_str("effectiveness"),
            Parameter::Decline => f.write_str("decline"),
        }
    }
}

/// A decay model, its display colour, and the trajectory projected from it.
///
/// The trajectory always reflects the current coefficients: every edit
/// re-projects it from scratch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    id: ScenarioId,
    model: DecayModel,
    color: Color,
    trajectory: Trajectory,
}

impl Scenario {
    pub(crate) fn new(
        id: ScenarioId,
        model: DecayModel,
        color: Color,
        projection: &Projection,
    ) -> Result<Self, ScenarioError> {
        let trajectory = projection.run(&model)?;
        Ok(Self {
            id,
            model,
            color,
            trajectory,
        })
    }

    /// Returns the scenario's id.
    #[must_use]
    pub fn id(&self) -> ScenarioId {
        self.id
    }

    /// Returns the decay model.
    #[must_use]
    pub fn model(&self) -> &DecayModel {
        &self.model
    }

    /// Returns the display colour.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the projected trajectory.
    #[must_use]
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Sets one coefficient and re-projects.
    ///
    /// The scenario is left unchanged if the value is out of range.
    pub(crate) fn set(
        &mut self,
        parameter: Parameter,
        value: f64,
        projection: &Projection,
    ) -> Result<(), ScenarioError> {
        let invalid = |source| ScenarioError::InvalidCoefficient { parameter, source };

        let mut model = self.model;
        match parameter {
            Parameter::Effectiveness => {
                model.effectiveness = Effectiveness::new(value).map_err(invalid)?;
            }
            Parameter::Decline => model.decline = Decline::new(value).map_err(invalid)?,
        }

        self.trajectory = projection.run(&model)?;
        self.model = model;
        Ok(())
    }

    /// Re-projects the current model over a new schedule.
    pub(crate) fn reproject(&self, projection: &Projection) -> Result<Trajectory, ScenarioError> {
        Ok(projection.run(&self.model)?)
    }

    pub(crate) fn replace_trajectory(&mut self, trajectory: Trajectory) {
        self.trajectory = trajectory;
    }
}
