use num_traits::Zero;

/// A wrapper type representing values that are guaranteed to be greater than zero.
///
/// `StrictlyPositive<T>` is a lightweight newtype that wraps a value of type `T`
/// and enforces the invariant that the value is strictly greater than zero.
/// The invariant is checked once, at construction time.
///
/// Values that are not comparable to zero, such as `f64::NAN`, are rejected.
///
/// # Type Constraints
///
/// `T` must implement both [`PartialOrd`] and [`Zero`].
///
/// # Examples
///
/// ```
/// use carnot_thermo::StrictlyPositive;
///
/// let x = StrictlyPositive::new(3.0).unwrap();
/// assert_eq!(x.into_inner(), 3.0);
///
/// assert!(StrictlyPositive::new(0.0).is_none());
/// assert!(StrictlyPositive::new(f64::NAN).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct StrictlyPositive<T>(T);

impl<T> StrictlyPositive<T>
where
    T: PartialOrd + Zero,
{
    /// Constructs a new `StrictlyPositive<T>` if the input value is greater than zero.
    ///
    /// Returns `Some(Self)` if `value > 0`, or `None` otherwise.
    pub fn new(value: T) -> Option<Self> {
        if value > T::zero() {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> AsRef<T> for StrictlyPositive<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_values() {
        assert_eq!(StrictlyPositive::new(1).map(StrictlyPositive::into_inner), Some(1));
        assert_eq!(StrictlyPositive::new(1e-300).map(|x| *x.as_ref()), Some(1e-300));
        assert!(StrictlyPositive::new(f64::INFINITY).is_some());
    }

    #[test]
    fn rejects_zero_negative_and_nan() {
        assert!(StrictlyPositive::new(0).is_none());
        assert!(StrictlyPositive::new(-0.0).is_none());
        assert!(StrictlyPositive::new(-2.5).is_none());
        assert!(StrictlyPositive::new(f64::NEG_INFINITY).is_none());
        assert!(StrictlyPositive::new(f64::NAN).is_none());
    }
}
