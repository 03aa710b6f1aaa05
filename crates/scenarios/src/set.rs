use serde::{Deserialize, Serialize};

use crate::{Color, DecayModel, Parameter, Projection, Scenario, ScenarioError, ScenarioId};

/// Maximum number of scenarios a set can hold.
pub const MAX_SCENARIOS: usize = 5;

/// Serializable description of a scenario set.
///
/// Missing fields fall back to the default projection and a single scenario
/// with default coefficients.
///
/// # Example
///
/// ```
/// use stepwise_scenarios::{ScenarioConfig, ScenarioSet};
///
/// let config: ScenarioConfig = serde_json::from_str(
///     r#"{
///         "projection": { "steps": 5 },
///         "scenarios": [{ "effectiveness": 0.1 }, { "decline": 0.2 }]
///     }"#,
/// )?;
///
/// let set = ScenarioSet::from_config(config)?;
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.scenarios()[0].trajectory().len(), 6);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub projection: Projection,
    pub scenarios: Vec<DecayModel>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            projection: Projection::default(),
            scenarios: vec![DecayModel::default()],
        }
    }
}

/// One labelled, coloured line of a comparative chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub color: Color,
    pub times: Vec<f64>,
    pub values: Vec<f64>,
}

/// An ordered collection of scenarios projected over a shared schedule.
///
/// A set always holds between one and [`MAX_SCENARIOS`] scenarios. Scenarios
/// are labelled by position ("Scenario 1", "Scenario 2", ...) and keep the
/// palette colour they were given when added.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSet {
    projection: Projection,
    scenarios: Vec<Scenario>,
    next_id: u64,
}

impl Default for ScenarioSet {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(Projection::default()).unwrap()
    }
}

impl ScenarioSet {
    /// Creates a set with one default scenario projected over `projection`.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::TooManySteps`] or [`ScenarioError::Integration`]
    /// if the projection is invalid.
    pub fn new(projection: Projection) -> Result<Self, ScenarioError> {
        Self::from_config(ScenarioConfig {
            projection,
            ..ScenarioConfig::default()
        })
    }

    /// Builds and projects every scenario described by `config`.
    ///
    /// # Errors
    ///
    /// - [`ScenarioError::NoScenarios`] if `config` lists no scenarios.
    /// - [`ScenarioError::TooManyScenarios`] if it lists more than [`MAX_SCENARIOS`].
    /// - [`ScenarioError::TooManySteps`] or [`ScenarioError::Integration`] if
    ///   the projection is invalid.
    pub fn from_config(config: ScenarioConfig) -> Result<Self, ScenarioError> {
        let ScenarioConfig {
            projection,
            scenarios,
        } = config;

        if scenarios.is_empty() {
            return Err(ScenarioError::NoScenarios);
        }
        if scenarios.len() > MAX_SCENARIOS {
            return Err(ScenarioError::TooManyScenarios { max: MAX_SCENARIOS });
        }

        let mut set = Self {
            projection,
            scenarios: Vec::with_capacity(MAX_SCENARIOS),
            next_id: 1,
        };
        for model in scenarios {
            set.add_model(model)?;
        }
        Ok(set)
    }

    /// Returns a config that rebuilds this set's projection and coefficients.
    #[must_use]
    pub fn config(&self) -> ScenarioConfig {
        ScenarioConfig {
            projection: self.projection,
            scenarios: self.scenarios.iter().map(|s| *s.model()).collect(),
        }
    }

    /// Returns the shared projection schedule.
    #[must_use]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Returns the scenarios in display order.
    #[must_use]
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Returns the number of scenarios.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Always `false`: a set holds at least one scenario.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Returns the scenario with the given id.
    #[must_use]
    pub fn get(&self, id: ScenarioId) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id() == id)
    }

    /// Appends a scenario with default coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::TooManyScenarios`] if the set is full.
    pub fn add(&mut self) -> Result<ScenarioId, ScenarioError> {
        self.add_model(DecayModel::default())
    }

    /// Appends a scenario with the given coefficients.
    ///
    /// The new scenario takes the palette colour at its position.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::TooManyScenarios`] if the set is full, or
    /// [`ScenarioError::TooManySteps`] or [`ScenarioError::Integration`] if the
    /// projection is invalid.
    pub fn add_model(&mut self, model: DecayModel) -> Result<ScenarioId, ScenarioError> {
        if self.scenarios.len() >= MAX_SCENARIOS {
            return Err(ScenarioError::TooManyScenarios { max: MAX_SCENARIOS });
        }

        let id = ScenarioId(self.next_id);
        let color = Color::from_palette(self.scenarios.len());
        let scenario = Scenario::new(id, model, color, &self.projection)?;

        self.next_id += 1;
        self.scenarios.push(scenario);
        Ok(id)
    }

    /// Removes a scenario and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::UnknownScenario`] if no scenario has this id,
    /// or [`ScenarioError::LastScenario`] if it is the only one left.
    pub fn remove(&mut self, id: ScenarioId) -> Result<Scenario, ScenarioError> {
        let index = self.index_of(id)?;
        if self.scenarios.len() == 1 {
            return Err(ScenarioError::LastScenario);
        }
        Ok(self.scenarios.remove(index))
    }

    /// Sets one coefficient of a scenario and re-projects it.
    ///
    /// Other scenarios are untouched. On error the scenario keeps its previous
    /// coefficients and trajectory.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::UnknownScenario`] if no scenario has this id,
    /// or [`ScenarioError::InvalidCoefficient`] if `value` is out of range.
    pub fn update(
        &mut self,
        id: ScenarioId,
        parameter: Parameter,
        value: f64,
    ) -> Result<&Scenario, ScenarioError> {
        let index = self.index_of(id)?;
        let scenario = &mut self.scenarios[index];
        scenario.set(parameter, value, &self.projection)?;
        Ok(&*scenario)
    }

    /// Replaces the shared schedule and re-projects every scenario.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::TooManySteps`] or [`ScenarioError::Integration`]
    /// if the new projection is invalid, in which case the set is left unchanged.
    pub fn set_projection(&mut self, projection: Projection) -> Result<(), ScenarioError> {
        let trajectories = self
            .scenarios
            .iter()
            .map(|s| s.reproject(&projection))
            .collect::<Result<Vec<_>, _>>()?;

        for (scenario, trajectory) in self.scenarios.iter_mut().zip(trajectories) {
            scenario.replace_trajectory(trajectory);
        }
        self.projection = projection;
        Ok(())
    }

    /// Returns the display label for the scenario at `index`.
    #[must_use]
    pub fn label(index: usize) -> String {
        format!("Scenario {}", index + 1)
    }

    /// Returns one axis label per projected time, e.g. `"Year 3"`.
    #[must_use]
    pub fn year_labels(&self) -> Vec<String> {
        self.scenarios
            .first()
            .map(|s| {
                s.trajectory()
                    .times()
                    .iter()
                    .map(|t| format!("Year {t}"))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the comparative series, one per scenario in display order.
    #[must_use]
    pub fn series(&self) -> Vec<Series> {
        self.scenarios
            .iter()
            .enumerate()
            .map(|(index, scenario)| Series {
                label: Self::label(index),
                color: scenario.color(),
                times: scenario.trajectory().times().to_vec(),
                values: scenario.trajectory().values().to_vec(),
            })
            .collect()
    }

    fn index_of(&self, id: ScenarioId) -> Result<usize, ScenarioError> {
        self.scenarios
            .iter()
            .position(|s| s.id() == id)
            .ok_or(ScenarioError::UnknownScenario(id))
    }
}
