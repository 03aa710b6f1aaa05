//! Comparative decay-rate projections.
//!
//! A [`Scenario`] pairs two bounded decay coefficients with a colour and the
//! trajectory projected from them. The rate quantity follows
//!
//! ```text
//! dy/dt = -(effectiveness + decline) * y
//! ```
//!
//! and is integrated with the fixed-step RK4 solver over the schedule held in
//! a [`Projection`] (by default 10 yearly steps from an initial value of 50).
//!
//! A [`ScenarioSet`] keeps an ordered, bounded collection of scenarios and
//! re-projects a scenario from scratch whenever one of its coefficients
//! changes. Its [`series`](ScenarioSet::series) are plain data ready for a
//! chart or report.
//!
//! # Example
//!
//! ```
//! use stepwise_scenarios::{Parameter, ScenarioSet};
//!
//! let mut set = ScenarioSet::default();
//! let second = set.add()?;
//! set.update(second, Parameter::Effectiveness, 0.3)?;
//!
//! let series = set.series();
//! assert_eq!(series.len(), 2);
//! assert!(series[1].values[10] < series[0].values[10]);
//! # Ok::<(), stepwise_scenarios::ScenarioError>(())
//! ```

mod coefficient;
mod color;
mod decay;
mod error;
mod projection;
mod scenario;
mod set;

pub use coefficient::{
    Bounds, Coefficient, CoefficientError, Decline, DeclineRange, Effectiveness,
    EffectivenessRange,
};
pub use color::{Color, PALETTE};
pub use decay::DecayModel;
pub use error::ScenarioError;
pub use projection::{MAX_STEPS, Projection};
pub use scenario::{Parameter, Scenario, ScenarioId};
pub use set::{MAX_SCENARIOS, ScenarioConfig, ScenarioSet, Series};
