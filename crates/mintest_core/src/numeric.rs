//! Numeric widening policy for ordered comparisons.
//!
//! Ordered checks (`greater_than`, `less_than`) compare operands by value, not by type: both sides are widened to
//! `f64` first, so `3_i32` and `2.5_f64` compare the way a reader expects.
//!
//! ## Notes
//!
//! - Widening `i64`/`u64`/`i128`/`u128` values beyond 2^53 loses precision. This matches the behaviour of a
//!   double-precision comparison and is accepted.

use std::fmt::Debug;

/// Represent a primitive number that can be widened to `f64` for comparison.
///
/// ## Examples
/// ```rust
/// use mintest_core::Numeric;
///
/// assert!(3_u8.widen() > 2.5_f32.widen());
/// assert_eq!(7_i64.widen(), 7.0);
/// ```
pub trait Numeric: Copy + Debug {
    /// Return the value as an `f64`.
    fn widen(self) -> f64;
}

macro_rules! impl_numeric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Numeric for $ty {
                #[inline]
                fn widen(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Check `actual > expected` after widening both operands.
pub fn exceeds<A: Numeric, E: Numeric>(actual: A, expected: E) -> bool {
    actual.widen() > expected.widen()
}

/// Check `actual < expected` after widening both operands.
pub fn falls_below<A: Numeric, E: Numeric>(actual: A, expected: E) -> bool {
    actual.widen() < expected.widen()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_int_float_compare_by_value() {
        assert!(exceeds(3_i32, 2.5_f64));
        assert!(!exceeds(2_i32, 2.0_f32));
        assert!(falls_below(2_u64, 2.01_f64));
        assert!(!falls_below(2.0_f64, 2_i8));
    }

    #[test]
    fn test_nan_never_compares() {
        assert!(!exceeds(f64::NAN, 0));
        assert!(!falls_below(f64::NAN, 0));
    }

    #[test]
    fn test_negative_values() {
        assert!(falls_below(-1_i64, 0_u8));
        assert!(exceeds(-0.5_f32, -1_i16));
    }
}
