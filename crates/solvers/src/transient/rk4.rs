//! Classical fixed-step fourth-order Runge-Kutta solver for scalar ODEs.
//!
//! Each step evaluates the derivative four times and advances with their
//! weighted average:
//!
//! ```text
//! k1 = f(t, y)
//! k2 = f(t + h/2, y + (h/2)*k1)
//! k3 = f(t + h/2, y + (h/2)*k2)
//! k4 = f(t + h,   y + h*k3)
//!
//! t_{n+1} = t_n + h
//! y_{n+1} = y_n + (h/6) * (k1 + 2*k2 + 2*k3 + k4)
//! ```
//!
//! The step size is fixed; there is no error estimation or adaptivity.
//!
//! # Example
//!
//! ```
//! use stepwise_solvers::transient::rk4;
//!
//! let k = 0.2;
//! let trajectory = rk4::integrate(&|_t: f64, y: f64| -k * y, 0.0, 50.0, 1.0, 10)?;
//!
//! assert_eq!(trajectory.len(), 11);
//! assert!((trajectory.last().value - 50.0 * (-2.0_f64).exp()).abs() < 1e-3);
//! # Ok::<(), rk4::Error>(())
//! ```

mod action;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use config::Config;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use stepwise_core::{Derivative, Observer, Sample, Trajectory, TrajectoryBuilder};

/// Upper bound on the samples reserved before integrating.
///
/// Longer runs still complete; their trajectory grows as samples are pushed.
const MAX_RESERVED_SAMPLES: usize = 1 << 16;

/// Integrates `dy/dt = f(t, y)` from `(t0, y0)` over `steps` steps of size `h`.
///
/// Returns a trajectory of `steps + 1` samples starting with `(t0, y0)`.
/// A zero step size yields a constant trajectory, and a negative step size
/// integrates backwards in time.
///
/// Derivative results are not validated: a NaN or infinite slope propagates
/// into every later sample. Use [`solve_unobserved`] with
/// [`Config::reject_non_finite`] to fail instead.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `steps` is negative.
pub fn integrate<F>(f: &F, t0: f64, y0: f64, h: f64, steps: i64) -> Result<Trajectory, Error>
where
    F: Derivative + ?Sized,
{
    solve_unobserved(f, t0, y0, h, steps, &Config::default()).map(|solution| solution.trajectory)
}

/// Integrates `dy/dt = f(t, y)` using RK4, reporting each sample to an observer.
///
/// # Algorithm
///
/// 1. Record the initial sample `(t0, y0)` and emit it as step 0.
/// 2. For each step:
///    - Evaluate the four slopes at the current sample.
///    - Advance time by `h` and the value by the weighted slope average.
///    - If the config rejects non-finite results, check the slopes and value.
///    - Record the sample and emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the solution with the full trajectory.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial sample and after each
/// integration step, and may return [`Action::StopEarly`] to end the run.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `steps` is negative, or
/// [`Error::NonFinite`] if the config rejects non-finite results and a step
/// produces one.
pub fn solve<F, Obs>(
    f: &F,
    t0: f64,
    y0: f64,
    h: f64,
    steps: i64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Derivative + ?Sized,
    Obs: Observer<Event, Action>,
{
    let steps = step_count(steps)?;

    let initial = Sample::new(t0, y0);
    let mut builder = TrajectoryBuilder::with_capacity(
        initial,
        steps.saturating_add(1).min(MAX_RESERVED_SAMPLES),
    );

    let event = Event {
        step: 0,
        sample: initial,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(finish(builder, Status::StoppedByObserver, 0));
    }

    let mut current = initial;

    for step in 1..=steps {
        let slopes = Slopes::evaluate(f, current, h);
        let next = Sample::new(current.time + h, slopes.advance(current.value, h));

        if config.rejects_non_finite() && !(slopes.is_finite() && next.value.is_finite()) {
            return Err(Error::NonFinite {
                step,
                time: next.time,
            });
        }

        builder.push(next);

        let event = Event { step, sample: next };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(builder, Status::StoppedByObserver, step));
        }

        current = next;
    }

    Ok(finish(builder, Status::Complete, steps))
}

/// Integrates using RK4 without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F>(
    f: &F,
    t0: f64,
    y0: f64,
    h: f64,
    steps: i64,
    config: &Config,
) -> Result<Solution, Error>
where
    F: Derivative + ?Sized,
{
    solve(f, t0, y0, h, steps, config, ())
}

/// Advances a single RK4 step of size `h` from `(time, value)`.
///
/// Returns the value at `time + h`.
pub fn step<F>(f: &F, time: f64, value: f64, h: f64) -> f64
where
    F: Derivative + ?Sized,
{
    Slopes::evaluate(f, Sample::new(time, value), h).advance(value, h)
}

fn step_count(steps: i64) -> Result<usize, Error> {
    usize::try_from(steps).map_err(|_| Error::InvalidArgument { steps })
}

fn finish(builder: TrajectoryBuilder, status: Status, steps: usize) -> Solution {
    Solution {
        status,
        trajectory: builder.finish(),
        steps,
        evaluations: 4 * steps,
    }
}

/// The four slope estimates of one RK4 step.
#[derive(Debug, Clone, Copy)]
struct Slopes {
    k1: f64,
    k2: f64,
    k3: f64,
    k4: f64,
}

impl Slopes {
    fn evaluate<F: Derivative + ?Sized>(f: &F, at: Sample, h: f64) -> Self {
        let Sample { time, value } = at;
        let half = h / 2.0;

        let k1 = f.rate(time, value);
        let k2 = f.rate(time + half, value + half * k1);
        let k3 = f.rate(time + half, value + half * k2);
        let k4 = f.rate(time + h, value + h * k3);

        Self { k1, k2, k3, k4 }
    }

    fn advance(&self, value: f64, h: f64) -> f64 {
        let Self { k1, k2, k3, k4 } = *self;
        value + (h / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4)
    }

    fn is_finite(&self) -> bool {
        [self.k1, self.k2, self.k3, self.k4].iter().all(|k| k.is_finite())
    }
}
