use std::iter::FusedIterator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single `(time, value)` point on a trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sample {
    /// The independent variable (usually time).
    pub time: f64,
    /// The approximate solution at `time`.
    pub value: f64,
}

impl Sample {
    /// Creates a new sample.
    #[must_use]
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}

/// The discrete samples produced by one integration run.
///
/// A trajectory holds two index-aligned sequences: `values()[i]` is the
/// approximate solution at `times()[i]`. Samples are in the order they were
/// produced and a trajectory always contains at least its initial sample.
///
/// Trajectories are immutable. They are assembled with a
/// [`TrajectoryBuilder`] and only exposed through read-only accessors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Trajectory {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl Trajectory {
    /// Returns the sample times in order.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the sample values, aligned with [`Trajectory::times`].
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always `false`: a trajectory contains at least its initial sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Returns the sample at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Sample> {
        let time = *self.times.get(index)?;
        let value = *self.values.get(index)?;
        Some(Sample { time, value })
    }

    /// Returns the initial sample.
    #[must_use]
    pub fn initial(&self) -> Sample {
        Sample {
            time: self.times[0],
            value: self.values[0],
        }
    }

    /// Returns the final sample.
    #[must_use]
    pub fn last(&self) -> Sample {
        let last = self.times.len() - 1;
        Sample {
            time: self.times[last],
            value: self.values[last],
        }
    }

    /// Returns an iterator over the samples in order.
    pub fn iter(&self) -> Samples<'_> {
        Samples {
            times: self.times.iter(),
            values: self.values.iter(),
        }
    }

    /// Consumes the trajectory and returns its `(times, values)` sequences.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.times, self.values)
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = Sample;
    type IntoIter = Samples<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the samples of a [`Trajectory`].
#[derive(Debug, Clone)]
pub struct Samples<'a> {
    times: std::slice::Iter<'a, f64>,
    values: std::slice::Iter<'a, f64>,
}

impl Iterator for Samples<'_> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        let time = *self.times.next()?;
        let value = *self.values.next()?;
        Some(Sample { time, value })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.times.size_hint()
    }
}

impl ExactSizeIterator for Samples<'_> {}

impl FusedIterator for Samples<'_> {}

/// Assembles a [`Trajectory`] one sample at a time.
///
/// The builder starts from the initial sample, so the finished trajectory is
/// never empty and its two sequences always have equal length.
///
/// # Example
///
/// ```
/// use stepwise_core::{Sample, TrajectoryBuilder};
///
/// let mut builder = TrajectoryBuilder::with_capacity(Sample::new(0.0, 50.0), 3);
/// builder.push(Sample::new(1.0, 40.0));
/// builder.push(Sample::new(2.0, 32.0));
///
/// let trajectory = builder.finish();
/// assert_eq!(trajectory.times(), &[0.0, 1.0, 2.0]);
/// assert_eq!(trajectory.values(), &[50.0, 40.0, 32.0]);
/// ```
#[derive(Debug, Clone)]
pub struct TrajectoryBuilder {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl TrajectoryBuilder {
    /// Starts a trajectory at `initial`.
    #[must_use]
    pub fn new(initial: Sample) -> Self {
        Self::with_capacity(initial, 1)
    }

    /// Starts a trajectory at `initial`, reserving room for `capacity` samples.
    #[must_use]
    pub fn with_capacity(initial: Sample, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut times = Vec::with_capacity(capacity);
        let mut values = Vec::with_capacity(capacity);
        times.push(initial.time);
        values.push(initial.value);
        Self { times, values }
    }

    /// Appends a sample.
    pub fn push(&mut self, sample: Sample) {
        self.times.push(sample.time);
        self.values.push(sample.value);
    }

    /// Returns the most recently pushed sample.
    #[must_use]
    pub fn last(&self) -> Sample {
        let last = self.times.len() - 1;
        Sample {
            time: self.times[last],
            value: self.values[last],
        }
    }

    /// Returns the number of samples so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always `false`: a builder starts with its initial sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Finishes the trajectory.
    #[must_use]
    pub fn finish(self) -> Trajectory {
        Trajectory {
            times: self.times,
            values: self.values,
        }
    }
}
