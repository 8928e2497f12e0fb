//! Fixed-width integer abstraction used by the parsers
//!
//! Every primitive integer width implements [`Integer`] through one macro, so
//! the accumulation loops are written once and still get exact per-type
//! cutoff constants.

use std::fmt::{Debug, Display};
use std::str::FromStr;

mod sealed {
    pub trait Sealed {}
}

/// A primitive integer type that decimal input can be parsed into.
///
/// The cutoff constants are what the checked accumulation loops compare the
/// in-progress result against before folding in the next digit.
pub trait Integer:
    sealed::Sealed + Copy + Eq + Ord + Default + Debug + Display + FromStr + Send + Sync + 'static
{
    const MIN: Self;
    const MAX: Self;
    const ZERO: Self;
    const SIGNED: bool;

    /// `MAX / 10`: largest partial result that may still take another digit.
    const POSITIVE_CUTOFF: Self;
    /// `MAX % 10`: largest digit allowed when the result equals the cutoff.
    const POSITIVE_LIMIT: u8;
    /// `MIN / 10`. Zero for unsigned types.
    const NEGATIVE_CUTOFF: Self;
    /// `-(MIN % 10)`. Zero for unsigned types.
    const NEGATIVE_LIMIT: u8;

    /// `self * 10 + digit`. Callers must have checked the positive cutoff.
    fn push_digit(self, digit: u8) -> Self;

    /// `self * 10 - digit`. Callers must have checked the negative cutoff.
    fn push_digit_negative(self, digit: u8) -> Self;

    /// `self * 10 + digit` with wrapping arithmetic
    fn wrapping_push_digit(self, digit: u8) -> Self;

    fn checked_push_digit(self, digit: u8) -> Option<Self>;

    fn checked_push_digit_negative(self, digit: u8) -> Option<Self>;
}

macro_rules! impl_integer {
    ($signed:expr => $($t:ty),+) => {
        $(
            impl sealed::Sealed for $t {}

            impl Integer for $t {
                const MIN: $t = <$t>::MIN;
                const MAX: $t = <$t>::MAX;
                const ZERO: $t = 0;
                const SIGNED: bool = $signed;

                const POSITIVE_CUTOFF: $t = <$t>::MAX / 10;
                const POSITIVE_LIMIT: u8 = (<$t>::MAX % 10) as u8;
                const NEGATIVE_CUTOFF: $t = <$t>::MIN / 10;
                // MIN % 10 lies in -9..=0 for two's complement, so negating
                // it cannot overflow and always fits a u8.
                const NEGATIVE_LIMIT: u8 = (<$t>::MIN % 10).wrapping_neg() as u8;

                #[inline(always)]
                fn push_digit(self, digit: u8) -> Self {
                    self * 10 + digit as $t
                }

                #[inline(always)]
                fn push_digit_negative(self, digit: u8) -> Self {
                    self * 10 - digit as $t
                }

                #[inline(always)]
                fn wrapping_push_digit(self, digit: u8) -> Self {
                    self.wrapping_mul(10).wrapping_add(digit as $t)
                }

                #[inline]
                fn checked_push_digit(self, digit: u8) -> Option<Self> {
                    self.checked_mul(10)?.checked_add(digit as $t)
                }

                #[inline]
                fn checked_push_digit_negative(self, digit: u8) -> Option<Self> {
                    self.checked_mul(10)?.checked_sub(digit as $t)
                }
            }
        )+
    };
}

impl_integer!(false => u8, u16, u32, u64, u128, usize);
impl_integer!(true => i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    fn last_digit<T: Integer>(value: T) -> u8 {
        let rendered = value.to_string();
        rendered.as_bytes()[rendered.len() - 1] - b'0'
    }

    fn check_limits<T: Integer>() {
        assert_eq!(T::POSITIVE_LIMIT, last_digit(T::MAX), "MAX of {}", T::MAX);
        if T::SIGNED {
            assert_eq!(T::NEGATIVE_LIMIT, last_digit(T::MIN), "MIN of {}", T::MIN);
        } else {
            assert_eq!(T::NEGATIVE_LIMIT, 0);
            assert_eq!(T::NEGATIVE_CUTOFF, T::ZERO);
        }
    }

    #[test]
    fn test_limits_match_decimal_rendering() {
        check_limits::<u8>();
        check_limits::<u16>();
        check_limits::<u32>();
        check_limits::<u64>();
        check_limits::<u128>();
        check_limits::<usize>();
        check_limits::<i8>();
        check_limits::<i16>();
        check_limits::<i32>();
        check_limits::<i64>();
        check_limits::<i128>();
        check_limits::<isize>();
    }

    #[test]
    fn test_cutoffs() {
        assert_eq!(<u8 as Integer>::POSITIVE_CUTOFF, 25);
        assert_eq!(<u8 as Integer>::POSITIVE_LIMIT, 5);
        assert_eq!(<i8 as Integer>::POSITIVE_CUTOFF, 12);
        assert_eq!(<i8 as Integer>::POSITIVE_LIMIT, 7);
        assert_eq!(<i8 as Integer>::NEGATIVE_CUTOFF, -12);
        assert_eq!(<i8 as Integer>::NEGATIVE_LIMIT, 8);
        assert_eq!(<i64 as Integer>::NEGATIVE_CUTOFF, -922337203685477580);
        assert_eq!(<i64 as Integer>::NEGATIVE_LIMIT, 8);
    }

    #[test]
    fn test_folding_at_boundaries() {
        // 12 * 10 + 7 and -12 * 10 - 8 are the extreme in-range folds for i8
        assert_eq!(12i8.push_digit(7), i8::MAX);
        assert_eq!((-12i8).push_digit_negative(8), i8::MIN);
        assert_eq!(25u8.checked_push_digit(5), Some(u8::MAX));
        assert_eq!(25u8.checked_push_digit(6), None);
        assert_eq!((-12i8).checked_push_digit_negative(9), None);
        assert_eq!(26u8.wrapping_push_digit(0), 4);
    }
}
