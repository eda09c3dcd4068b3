use core::fmt;

/// A number that keeps integers and floats apart.
///
/// Non-negative integers are always stored as `u64` and negative ones as
/// `i64`, so equal integers compare equal whatever type produced them.
/// Floats are kept bit-for-bit.
///
/// # Example
///
/// ```
/// use pb_reflect::value::Number;
///
/// assert_eq!(Number::from(5_i32), Number::from(5_u8));
/// assert_eq!(Number::from(-3_i64).as_u64(), None);
/// assert_eq!(Number::from(3.14159265_f64).as_f64(), 3.14159265);
/// assert_eq!(Number::from(2.0_f64).as_i64(), None);
/// assert_eq!(Number::from(9_007_199_254_740_993_u64).to_f64_exact(), None);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Number(N);

// 2^64, the first float above `u64::MAX`.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

#[derive(Clone, Copy, PartialEq)]
enum N {
    PosInt(u64),
    NegInt(i64),
    Float(f64),
}

impl Number {
    #[inline]
    pub fn from_u64(value: u64) -> Self {
        Number(N::PosInt(value))
    }

    #[inline]
    pub fn from_i64(value: i64) -> Self {
        match u64::try_from(value) {
            Ok(value) => Number(N::PosInt(value)),
            Err(_) => Number(N::NegInt(value)),
        }
    }

    #[inline]
    pub fn from_f64(value: f64) -> Self {
        Number(N::Float(value))
    }

    /// Returns `true` if the number is stored as a float.
    #[inline]
    pub fn is_f64(&self) -> bool {
        matches!(self.0, N::Float(_))
    }

    /// Returns the number as `i64` if it is an integer in range.
    pub fn as_i64(&self) -> Option<i64> {
        match self.0 {
            N::PosInt(v) => i64::try_from(v).ok(),
            N::NegInt(v) => Some(v),
            N::Float(_) => None,
        }
    }

    /// Returns the number as `u64` if it is a non-negative integer.
    pub fn as_u64(&self) -> Option<u64> {
        match self.0 {
            N::PosInt(v) => Some(v),
            N::NegInt(_) | N::Float(_) => None,
        }
    }

    /// Returns the number as `f64` if the conversion is exact.
    ///
    /// Integers beyond 2^53 that `f64` cannot represent give `None`.
    pub fn to_f64_exact(&self) -> Option<f64> {
        match self.0 {
            N::PosInt(v) => {
                let f = v as f64;
                (f < U64_LIMIT && f as u64 == v).then_some(f)
            }
            N::NegInt(v) => {
                let f = v as f64;
                (f as i64 == v).then_some(f)
            }
            N::Float(v) => Some(v),
        }
    }

    /// Returns the number as `f64`; integers beyond 2^53 lose precision.
    pub fn as_f64(&self) -> f64 {
        match self.0 {
            N::PosInt(v) => v as f64,
            N::NegInt(v) => v as f64,
            N::Float(v) => v,
        }
    }
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Number {
            #[inline]
            fn from(value: $ty) -> Self {
                Number::from_u64(value as u64)
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Number {
            #[inline]
            fn from(value: $ty) -> Self {
                Number::from_i64(value as i64)
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i8, i16, i32, i64, isize);

impl From<f32> for Number {
    #[inline]
    fn from(value: f32) -> Self {
        Number::from_f64(f64::from(value))
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(value: f64) -> Self {
        Number::from_f64(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            N::PosInt(v) => fmt::Display::fmt(&v, f),
            N::NegInt(v) => fmt::Display::fmt(&v, f),
            N::Float(v) => fmt::Debug::fmt(&v, f),
        }
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::Number;

    #[test]
    fn exact_float_conversion() {
        assert_eq!(Number::from(1_u64 << 53).to_f64_exact(), Some(9_007_199_254_740_992.0));
        assert_eq!(Number::from((1_u64 << 53) + 1).to_f64_exact(), None);
        assert_eq!(Number::from(u64::MAX).to_f64_exact(), None);
        assert_eq!(Number::from(i64::MIN).to_f64_exact(), Some(-9_223_372_036_854_775_808.0));
        assert_eq!(Number::from(i64::MIN + 1).to_f64_exact(), None);
        assert_eq!(Number::from(-7_i8).to_f64_exact(), Some(-7.0));
        assert_eq!(Number::from(1e300).to_f64_exact(), Some(1e300));
    }
}
