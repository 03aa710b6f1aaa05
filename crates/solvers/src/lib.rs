//! Fixed-step numerical integrators for stepwise trajectories.
//!
//! # Modules
//!
//! - [`transient`] — time-stepping solvers for scalar ODEs

pub mod transient;
