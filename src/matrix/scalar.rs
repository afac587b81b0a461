use num_traits::Float;

/// Element type of an augmented matrix.
pub trait Scalar:
    Float
    + std::iter::Sum<Self>
    + std::fmt::Display
    + std::fmt::Debug
    + Send
    + Sync
    + 'static
{
    fn of_f64(value: f64) -> Self;
    fn as_f64(self) -> f64;
}

impl Scalar for f64 {
    #[inline(always)]
    fn of_f64(value: f64) -> Self {
        value
    }

    #[inline(always)]
    fn as_f64(self) -> f64 {
        self
    }
}

impl Scalar for f32 {
    #[inline(always)]
    fn of_f64(value: f64) -> Self {
        value as f32
    }

    #[inline(always)]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

/// `true` when `value` is indistinguishable from zero at tolerance `eps`.
#[inline(always)]
pub fn is_negligible<T: Scalar>(value: T, eps: f64) -> bool {
    value.abs() < T::of_f64(eps)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_negligible() {
        assert!(is_negligible(0.0f64, 0.001));
        assert!(is_negligible(-0.0009f64, 0.001));
        assert!(!is_negligible(0.001f64, 0.001));
        assert!(!is_negligible(-2.5f32, 0.001));
        assert!(is_negligible(0.0001f32, 0.001));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(<f32 as Scalar>::of_f64(0.5), 0.5f32);
        assert_eq!(<f64 as Scalar>::as_f64(3.25), 3.25);
        assert_eq!(Scalar::as_f64(1.5f32), 1.5f64);
    }
}
