//! Solvers for transient problems, stepping a scalar ODE `dy/dt = f(t, y)`
//! forward (or backward) from an initial condition.
//!
//! # Solvers
//!
//! - [`rk4`] — classical fixed-step fourth-order Runge-Kutta

pub mod rk4;
