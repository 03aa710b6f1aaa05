//! Core traits and types for stepwise trajectory integration.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! scenario models build on:
//!
//! - [`Derivative`] — the right-hand side `f(t, y)` of a scalar ODE
//! - [`Trajectory`] — the index-aligned time and value samples of one run
//! - [`Observer`] — receives solver events and optionally returns control actions
//!
//! # Features
//!
//! - `serde` — derives `Serialize`/`Deserialize` for [`Sample`] and
//!   `Serialize` for [`Trajectory`].

mod derivative;
mod observer;
mod trajectory;

pub use derivative::Derivative;
pub use observer::Observer;
pub use trajectory::{Sample, Samples, Trajectory, TrajectoryBuilder};
