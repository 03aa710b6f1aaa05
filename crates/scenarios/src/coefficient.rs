//! Decay coefficients constrained to a closed range at construction time.
//!
//! A [`Coefficient<B>`] can only be built from a value inside the range
//! described by its [`Bounds`] marker, so models holding coefficients never
//! need to re-check them.
//!
//! # Provided ranges
//!
//! - [`EffectivenessRange`]: `[0, 0.5]`, default `0.15`
//! - [`DeclineRange`]: `[0, 0.2]`, default `0.05`

use std::{cmp::Ordering, fmt, marker::PhantomData};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Describes the closed range `[MIN, MAX]` of a coefficient.
///
/// Implement this on a zero-sized marker type to define a new coefficient kind.
pub trait Bounds {
    /// Smallest allowed value.
    const MIN: f64;
    /// Largest allowed value.
    const MAX: f64;
    /// Value used when none is given.
    const DEFAULT: f64;
}

/// An error returned when a value falls outside a coefficient's range.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoefficientError {
    #[error("value {value} is below the minimum of {min}")]
    BelowMinimum { value: f64, min: f64 },
    #[error("value {value} is above the maximum of {max}")]
    AboveMaximum { value: f64, max: f64 },
    #[error("value is not a number")]
    NotANumber,
}

/// Removal-effectiveness range, `[0, 0.5]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectivenessRange;

impl Bounds for EffectivenessRange {
    const MIN: f64 = 0.0;
    const MAX: f64 = 0.5;
    const DEFAULT: f64 = 0.15;
}

/// Natural-decline range, `[0, 0.2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclineRange;

impl Bounds for DeclineRange {
    const MIN: f64 = 0.0;
    const MAX: f64 = 0.2;
    const DEFAULT: f64 = 0.05;
}

/// Removal-effectiveness coefficient.
pub type Effectiveness = Coefficient<EffectivenessRange>;

/// Natural-decline coefficient.
pub type Decline = Coefficient<DeclineRange>;

/// A real coefficient guaranteed to lie within `[B::MIN, B::MAX]`.
///
/// # Example
///
/// ```
/// use stepwise_scenarios::{CoefficientError, Decline, Effectiveness};
///
/// let e = Effectiveness::new(0.25).unwrap();
/// assert_eq!(e.into_inner(), 0.25);
///
/// assert_eq!(Decline::default().into_inner(), 0.05);
/// assert!(matches!(
///     Decline::new(0.3),
///     Err(CoefficientError::AboveMaximum { .. })
/// ));
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Coefficient<B: Bounds> {
    value: f64,
    _marker: PhantomData<B>,
}

impl<B: Bounds> Coefficient<B> {
    /// Constructs a coefficient if `B::MIN <= value <= B::MAX`.
    ///
    /// # Errors
    ///
    /// - [`CoefficientError::BelowMinimum`] if less than `B::MIN`.
    /// - [`CoefficientError::AboveMaximum`] if greater than `B::MAX`.
    /// - [`CoefficientError::NotANumber`] if the value is NaN.
    pub fn new(value: f64) -> Result<Self, CoefficientError> {
        match (value.partial_cmp(&B::MIN), value.partial_cmp(&B::MAX)) {
            (None, _) | (_, None) => Err(CoefficientError::NotANumber),
            (Some(Ordering::Less), _) => Err(CoefficientError::BelowMinimum {
                value,
                min: B::MIN,
            }),
            (_, Some(Ordering::Greater)) => Err(CoefficientError::AboveMaximum {
                value,
                max: B::MAX,
            }),
            _ => Ok(Self {
                value,
                _marker: PhantomData,
            }),
        }
    }

    /// Returns the smallest allowed value.
    #[must_use]
    pub fn min() -> f64 {
        B::MIN
    }

    /// Returns the largest allowed value.
    #[must_use]
    pub fn max() -> f64 {
        B::MAX
    }

    /// Consumes the wrapper and returns the inner value.
    #[must_use]
    pub fn into_inner(self) -> f64 {
        self.value
    }
}

impl<B: Bounds> Default for Coefficient<B> {
    fn default() -> Self {
        Self {
            value: B::DEFAULT,
            _marker: PhantomData,
        }
    }
}

impl<B: Bounds> AsRef<f64> for Coefficient<B> {
    fn as_ref(&self) -> &f64 {
        &self.value
    }
}

impl<B: Bounds> TryFrom<f64> for Coefficient<B> {
    type Error = CoefficientError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<B: Bounds> From<Coefficient<B>> for f64 {
    fn from(coefficient: Coefficient<B>) -> Self {
        coefficient.value
    }
}

impl<B: Bounds> fmt::Debug for Coefficient<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Coefficient").field(&self.value).finish()
    }
}

/// Displays the coefficient as a percentage with one decimal place.
impl<B: Bounds> fmt::Display for Coefficient<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.value * 100.0)
    }
}

impl<B: Bounds> Serialize for Coefficient<B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value)
    }
}

impl<'de, B: Bounds> Deserialize<'de> for Coefficient<B> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn values_in_range() {
        assert_eq!(Effectiveness::new(0.0).unwrap().into_inner(), 0.0);
        assert_eq!(Effectiveness::new(0.5).unwrap().into_inner(), 0.5);
        assert_eq!(Decline::new(0.2).unwrap().into_inner(), 0.2);
        assert_eq!(*Decline::new(0.1).unwrap().as_ref(), 0.1);
    }

    #[test]
    fn values_out_of_range() {
        assert!(matches!(
            Effectiveness::new(-0.01),
            Err(CoefficientError::BelowMinimum { min, .. }) if min == 0.0
        ));
        assert!(matches!(
            Effectiveness::new(0.51),
            Err(CoefficientError::AboveMaximum { max, .. }) if max == 0.5
        ));
        assert!(matches!(
            Decline::new(0.25),
            Err(CoefficientError::AboveMaximum { .. })
        ));
        assert!(matches!(
            Decline::new(f64::INFINITY),
            Err(CoefficientError::AboveMaximum { .. })
        ));
        assert!(matches!(
            Decline::new(f64::NAN),
            Err(CoefficientError::NotANumber)
        ));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn defaults_and_range_accessors() {
        assert_eq!(Effectiveness::default().into_inner(), 0.15);
        assert_eq!(Decline::default().into_inner(), 0.05);
        assert_eq!(Effectiveness::min(), 0.0);
        assert_eq!(Effectiveness::max(), 0.5);
        assert_eq!(Decline::max(), 0.2);
    }

    #[test]
    fn displays_as_percentage() {
        assert_eq!(Effectiveness::default().to_string(), "15.0%");
        assert_eq!(Decline::new(0.125).unwrap().to_string(), "12.5%");
    }

    #[test]
    fn conversions() {
        let e = Effectiveness::try_from(0.3).unwrap();
        assert_eq!(f64::from(e), 0.3);
        assert!(Decline::try_from(-1.0).is_err());
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let e: Effectiveness = serde_json::from_str("0.4").unwrap();
        assert_eq!(e.into_inner(), 0.4);
        assert_eq!(serde_json::to_string(&e).unwrap(), "0.4");

        let err = serde_json::from_str::<Decline>("0.9").unwrap_err();
        assert!(err.to_string().contains("above the maximum"));
    }
}
