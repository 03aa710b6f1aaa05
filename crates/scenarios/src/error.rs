use stepwise_solvers::transient::rk4;

use crate::{CoefficientError, Parameter, ScenarioId};

/// Errors that can occur while building or editing a scenario set.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScenarioError {
    #[error("at most {max} scenarios are supported")]
    TooManyScenarios { max: usize },

    #[error("at least one scenario is required")]
    NoScenarios,

    #[error("at most {max} projection steps are supported")]
    TooManySteps { max: i64 },

    #[error("cannot remove the last remaining scenario")]
    LastScenario,

    #[error("unknown scenario {0}")]
    UnknownScenario(ScenarioId),

    #[error("invalid {parameter}: {source}")]
    InvalidCoefficient {
        parameter: Parameter,
        source: CoefficientError,
    },

    #[error("projection failed: {0}")]
    Integration(#[from] rk4::Error),
}
