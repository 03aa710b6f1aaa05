/// The right-hand side `f(t, y)` of a scalar ODE `dy/dt = f(t, y)`.
///
/// Implementations must be pure: the rate may depend only on the arguments
/// and on parameters fixed at construction, so the same `(time, value)` pair
/// always yields the same rate no matter how often or in which order it is
/// evaluated.
///
/// Any `Fn(f64, f64) -> f64` closure is a `Derivative`, which lets callers
/// capture parameters lexically:
///
/// ```
/// use stepwise_core::Derivative;
///
/// let k = 0.2;
/// let decay = move |_t: f64, y: f64| -k * y;
///
/// assert_eq!(decay.rate(0.0, 50.0), -10.0);
/// ```
pub trait Derivative {
    /// Returns the rate of change of `value` at `time`.
    fn rate(&self, time: f64, value: f64) -> f64;
}

/// Blanket implementation for derivative closures.
impl<F> Derivative for F
where
    F: Fn(f64, f64) -> f64,
{
    fn rate(&self, time: f64, value: f64) -> f64 {
        self(time, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// Linear growth with a fixed slope, held in a struct.
    struct Slope(f64);

    impl Derivative for Slope {
        fn rate(&self, _time: f64, _value: f64) -> f64 {
            self.0
        }
    }

    fn rate_of<D: Derivative + ?Sized>(derivative: &D, time: f64, value: f64) -> f64 {
        derivative.rate(time, value)
    }

    #[test]
    fn closure_captures_parameters() {
        let c1 = 0.15;
        let c2 = 0.05;
        let f = move |_t: f64, y: f64| -(c1 + c2) * y;

        assert_relative_eq!(f.rate(3.0, 50.0), -10.0);
        assert_relative_eq!(f.rate(0.0, 0.0), 0.0);
    }

    #[test]
    fn closure_can_depend_on_time() {
        let f = |t: f64, _y: f64| 2.0 * t;

        assert_relative_eq!(f.rate(1.5, 100.0), 3.0);
    }

    #[test]
    fn struct_implementation() {
        let slope = Slope(4.0);

        assert_relative_eq!(rate_of(&slope, 0.0, 0.0), 4.0);
        assert_relative_eq!(rate_of(&slope, 9.0, -1.0), 4.0);
    }

    #[test]
    fn trait_objects_are_supported() {
        let derivatives: [&dyn Derivative; 2] = [&Slope(1.0), &|_t: f64, y: f64| -y];

        let rates: Vec<f64> = derivatives.iter().map(|d| rate_of(*d, 0.0, 2.0)).collect();

        assert_eq!(rates, vec![1.0, -2.0]);
    }
}
