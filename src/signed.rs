use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::algorithms;
use crate::error::{IntErrorKind, ParseIntError};
use crate::numeric::{CastFrom, Numeric};
use crate::unsigned::U128;

/// Signed 128-bit integer built from two 64-bit limbs.
///
/// The limbs are in little endian order and hold the two's complement
/// representation; the sign is the most significant bit of the high limb.
/// The type covers `[-2^127, 2^127 - 1]`.
///
/// Multiplication cross terms and division are delegated to [`U128`] after
/// sign normalization; everything sign-specific (overflow detection,
/// parsing, formatting, float conversion) is layered on top here.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct I128(pub(crate) [u64; 2]);

impl I128 {
    pub const BITS: u32 = 128;
    pub const MAX: Self = Self([u64::MAX, i64::MAX as u64]);
    pub const MIN: Self = Self([0, 1 << 63]);
    pub const ZERO: Self = Self([0; 2]);
    pub const ONE: Self = Self([1, 0]);
    pub const TWO: Self = Self([2, 0]);

    const NEG_ONE: Self = Self([u64::MAX; 2]);

    #[inline]
    pub const fn low(self) -> u64 {
        self.0[0]
    }

    #[inline]
    pub const fn high(self) -> u64 {
        self.0[1]
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        (self.0[1] >> 63) != 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        !self.is_negative() && (self.0[0] != 0 || self.0[1] != 0)
    }

    /// Reinterprets the limbs as an unsigned value.
    ///
    /// This is a bit cast, not a numeric conversion: negative values come
    /// out as their two's complement bit pattern.
    #[inline]
    pub const fn into_unsigned(self) -> U128 {
        U128(self.0)
    }

    /// The magnitude as an unsigned value; in-range for every input
    /// including `MIN`.
    pub fn unsigned_abs(self) -> U128 {
        if self.is_negative() {
            self.into_unsigned().wrapping_neg()
        } else {
            self.into_unsigned()
        }
    }

    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let mut limbs = self.0;
        algorithms::add_assign_limbs(&mut limbs, rhs.0);
        let result = Self(limbs);
        // Overflow iff both operands share a sign the result does not
        let overflowed = self.is_negative() == rhs.is_negative()
            && result.is_negative() != self.is_negative();
        (result, overflowed)
    }

    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let mut limbs = self.0;
        algorithms::sub_assign_limbs(&mut limbs, rhs.0);
        let result = Self(limbs);
        // Overflow iff the operand signs differ and the result left the
        // minuend's sign
        let overflowed = self.is_negative() != rhs.is_negative()
            && result.is_negative() != self.is_negative();
        (result, overflowed)
    }

    /// Truncated product plus an overflow flag; the product fits iff the
    /// upper half of the full product is the sign extension of the lower
    /// half.
    pub fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
        let (low, high) = self.widening_mul(rhs);
        let result = low.into_signed();
        let sign_extension = Self(algorithms::arithmetic_shr_limbs(result.0, 127));
        (result, high != sign_extension)
    }

    pub fn overflowing_neg(self) -> (Self, bool) {
        (self.wrapping_neg(), self == Self::MIN)
    }

    #[must_use]
    pub fn wrapping_add(self, rhs: Self) -> Self {
        self.overflowing_add(rhs).0
    }

    #[must_use]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        self.overflowing_sub(rhs).0
    }

    #[must_use]
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        Self(algorithms::wrapping_mul_limbs(self.0, rhs.0))
    }

    #[must_use]
    pub fn wrapping_neg(self) -> Self {
        Self(algorithms::neg_limbs(self.0))
    }

    #[must_use]
    pub fn wrapping_abs(self) -> Self {
        if self.is_negative() {
            self.wrapping_neg()
        } else {
            self
        }
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        let (result, overflowed) = self.overflowing_add(rhs);
        if overflowed {
            None
        } else {
            Some(result)
        }
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        let (result, overflowed) = self.overflowing_sub(rhs);
        if overflowed {
            None
        } else {
            Some(result)
        }
    }

    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        let (result, overflowed) = self.overflowing_mul(rhs);
        if overflowed {
            None
        } else {
            Some(result)
        }
    }

    pub fn checked_neg(self) -> Option<Self> {
        let (result, overflowed) = self.overflowing_neg();
        if overflowed {
            None
        } else {
            Some(result)
        }
    }

    /// Full signed 256-bit product, split as (low, high).
    ///
    /// The unsigned product of the bit patterns already has the right lower
    /// half; the upper half is fixed up by subtracting each operand masked
    /// by the other's sign.
    pub fn widening_mul(self, rhs: Self) -> (U128, Self) {
        let (low, mut high) = algorithms::widening_mul_limbs(self.0, rhs.0);

        let self_sign = algorithms::arithmetic_shr_limbs(self.0, 127);
        let rhs_sign = algorithms::arithmetic_shr_limbs(rhs.0, 127);
        algorithms::sub_assign_limbs(&mut high, [self_sign[0] & rhs.0[0], self_sign[1] & rhs.0[1]]);
        algorithms::sub_assign_limbs(&mut high, [rhs_sign[0] & self.0[0], rhs_sign[1] & self.0[1]]);

        (U128(low), Self(high))
    }

    /// Truncating division: the quotient rounds towards zero and the
    /// remainder keeps the dividend's sign.
    ///
    /// Returns `None` when `rhs` is zero or for `MIN / -1`, the one quotient
    /// the type cannot represent.
    pub fn checked_div_rem(self, rhs: Self) -> Option<(Self, Self)> {
        if rhs == Self::ZERO {
            return None;
        }
        if self == Self::MIN && rhs == Self::NEG_ONE {
            return None;
        }

        let (quotient, remainder) = self.unsigned_abs().div_rem(rhs.unsigned_abs());

        let quotient = if self.is_negative() != rhs.is_negative() {
            quotient.wrapping_neg().into_signed()
        } else {
            quotient.into_signed()
        };
        let remainder = if self.is_negative() {
            remainder.wrapping_neg().into_signed()
        } else {
            remainder.into_signed()
        };

        Some((quotient, remainder))
    }

    /// Quotient and remainder in one division.
    ///
    /// # Panics
    ///
    /// Panics when `rhs` is zero and for `MIN / -1`.
    pub fn div_rem(self, rhs: Self) -> (Self, Self) {
        match self.checked_div_rem(rhs) {
            Some(result) => result,
            None if rhs == Self::ZERO => panic!("attempt to divide by zero"),
            None => panic!("attempt to divide with overflow"),
        }
    }

    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        self.checked_div_rem(rhs).map(|(quotient, _)| quotient)
    }

    pub fn checked_rem(self, rhs: Self) -> Option<Self> {
        self.checked_div_rem(rhs).map(|(_, remainder)| remainder)
    }

    /// # Panics
    ///
    /// Panics when `rhs` is zero.
    pub fn overflowing_div(self, rhs: Self) -> (Self, bool) {
        if self == Self::MIN && rhs == Self::NEG_ONE {
            (Self::MIN, true)
        } else {
            (self.div_rem(rhs).0, false)
        }
    }

    /// # Panics
    ///
    /// Panics when `rhs` is zero.
    pub fn overflowing_rem(self, rhs: Self) -> (Self, bool) {
        if self == Self::MIN && rhs == Self::NEG_ONE {
            (Self::ZERO, true)
        } else {
            (self.div_rem(rhs).1, false)
        }
    }

    /// Parses an integer from a string slice with digits in the given radix.
    ///
    /// Accepts an optional leading `-` or `+`. The negative range admits one
    /// more magnitude than the positive one, so the overflow cutoff is
    /// measured against 2^127 for negative inputs and 2^127 - 1 otherwise.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is not in the range 2..=36.
    pub fn from_str_radix(src: &str, radix: u32) -> Result<Self, ParseIntError> {
        assert!(
            (2..=36).contains(&radix),
            "from_str_radix: radix must lie in the range `[2, 36]` - found {radix}"
        );

        let bytes = src.as_bytes();
        let (negative, digits) = match bytes.split_first() {
            Some((&b'-', rest)) => (true, rest),
            Some((&b'+', rest)) => (false, rest),
            _ => (false, bytes),
        };

        let (limit, overflow_kind) = if negative {
            (Self::MIN.unsigned_abs(), IntErrorKind::NegOverflow)
        } else {
            (Self::MAX.into_unsigned(), IntErrorKind::PosOverflow)
        };

        let magnitude = algorithms::parse_limbs(digits, radix, limit.0, overflow_kind)
            .map_err(ParseIntError::new)?;

        let value = U128(magnitude).into_signed();
        Ok(if negative { value.wrapping_neg() } else { value })
    }

    /// Formats the value with digits in the given radix, lowercase, with a
    /// leading `-` for negative values.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is not in the range 2..=36.
    pub fn to_string_radix(self, radix: u32) -> String {
        assert!(
            (2..=36).contains(&radix),
            "to_string_radix: radix must lie in the range `[2, 36]` - found {radix}"
        );
        let magnitude = algorithms::format_limbs(self.unsigned_abs().0, radix, false);
        if self.is_negative() {
            format!("-{magnitude}")
        } else {
            magnitude
        }
    }

    /// Converts to the nearest `f64` by converting the magnitude and
    /// restoring the sign.
    pub fn to_f64(self) -> f64 {
        let magnitude = self.unsigned_abs().to_f64();
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Converts to the nearest `f32` through the `f64` conversion.
    pub fn to_f32(self) -> f32 {
        self.to_f64() as f32
    }

    /// Truncates a float towards zero.
    ///
    /// Magnitudes below one truncate to zero. Otherwise the significand and
    /// its implicit bit are left-aligned at bit 127 and shifted down by the
    /// bit count the exponent calls for, then the sign is restored.
    ///
    /// # Panics
    ///
    /// Panics unless `value` is finite and within `[-2^127, 2^127)`.
    pub fn from_f64(value: f64) -> Self {
        const TWO_POW_127: f64 = 170141183460469231731687303715884105728.0;

        assert!(
            value.is_finite() && value >= -TWO_POW_127 && value < TWO_POW_127,
            "out-of-range conversion of {value} to a signed 128-bit value"
        );

        let negative = value.is_sign_negative();
        let magnitude = value.abs();
        if magnitude < 1.0 {
            return Self::ZERO;
        }

        let bits = magnitude.to_bits();
        let aligned = U128::from((0u64, ((bits << 12) >> 1) | (1 << 63)));
        let result = (aligned >> (1150 - (bits >> 52) as u32)).into_signed();

        if negative {
            result.wrapping_neg()
        } else {
            result
        }
    }

    /// Truncates a float towards zero, widening through `f64` (exact).
    ///
    /// # Panics
    ///
    /// Panics unless `value` is finite and within `[-2^127, 2^127)`.
    pub fn from_f32(value: f32) -> Self {
        Self::from_f64(f64::from(value))
    }
}

#[cfg(test)]
impl rand::distributions::Distribution<I128> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> I128 {
        let mut s = I128::ZERO;
        rng.fill(s.0.as_mut_slice());
        s
    }
}

// Two's complement order: the high limb compares signed, the low limb
// unsigned
impl std::cmp::Ord for I128 {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0[1] as i64).cmp(&(other.0[1] as i64)) {
            Ordering::Equal => self.0[0].cmp(&other.0[0]),
            ordering => ordering,
        }
    }
}

impl std::cmp::PartialOrd for I128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::ops::Add<Self> for I128 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.wrapping_add(rhs)
    }
}

impl std::ops::AddAssign<Self> for I128 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::ops::Sub<Self> for I128 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.wrapping_sub(rhs)
    }
}

impl std::ops::SubAssign<Self> for I128 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl std::ops::Mul<Self> for I128 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.wrapping_mul(rhs)
    }
}

impl std::ops::MulAssign<Self> for I128 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl std::ops::Div<Self> for I128 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.div_rem(rhs).0
    }
}

impl std::ops::DivAssign<Self> for I128 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl std::ops::Rem<Self> for I128 {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        self.div_rem(rhs).1
    }
}

impl std::ops::RemAssign<Self> for I128 {
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl std::ops::Neg for I128 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.wrapping_neg()
    }
}

impl std::ops::Not for I128 {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self([!self.0[0], !self.0[1]])
    }
}

impl std::ops::BitAnd<Self> for I128 {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self([self.0[0] & rhs.0[0], self.0[1] & rhs.0[1]])
    }
}

impl std::ops::BitAndAssign<Self> for I128 {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl std::ops::BitOr<Self> for I128 {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self([self.0[0] | rhs.0[0], self.0[1] | rhs.0[1]])
    }
}

impl std::ops::BitOrAssign<Self> for I128 {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl std::ops::BitXor<Self> for I128 {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Self([self.0[0] ^ rhs.0[0], self.0[1] ^ rhs.0[1]])
    }
}

impl std::ops::BitXorAssign<Self> for I128 {
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}

impl std::ops::ShlAssign<u32> for I128 {
    fn shl_assign(&mut self, shift: u32) {
        self.0 = algorithms::shl_limbs(self.0, shift);
    }
}

impl std::ops::Shl<u32> for I128 {
    type Output = Self;

    fn shl(mut self, rhs: u32) -> Self::Output {
        self <<= rhs;
        self
    }
}

// Right shift on the signed type is arithmetic, like the native integers
impl std::ops::ShrAssign<u32> for I128 {
    fn shr_assign(&mut self, shift: u32) {
        *self = self.into_unsigned().arithmetic_shr(shift).into_signed();
    }
}

impl std::ops::Shr<u32> for I128 {
    type Output = Self;

    fn shr(mut self, rhs: u32) -> Self::Output {
        self >>= rhs;
        self
    }
}

impl std::ops::ShlAssign<usize> for I128 {
    fn shl_assign(&mut self, shift: usize) {
        self.0 = algorithms::shl_limbs(self.0, shift as u32);
    }
}

impl std::ops::Shl<usize> for I128 {
    type Output = Self;

    fn shl(mut self, rhs: usize) -> Self::Output {
        self <<= rhs;
        self
    }
}

impl std::ops::ShrAssign<usize> for I128 {
    fn shr_assign(&mut self, shift: usize) {
        *self = self.into_unsigned().arithmetic_shr(shift as u32).into_signed();
    }
}

impl std::ops::Shr<usize> for I128 {
    type Output = Self;

    fn shr(mut self, rhs: usize) -> Self::Output {
        self >>= rhs;
        self
    }
}

impl From<(u64, u64)> for I128 {
    fn from(v: (u64, u64)) -> Self {
        Self([v.0, v.1])
    }
}

impl From<bool> for I128 {
    fn from(input: bool) -> Self {
        Self::from(input as u64)
    }
}

impl From<u8> for I128 {
    fn from(value: u8) -> Self {
        Self::from(value as u64)
    }
}

impl From<u16> for I128 {
    fn from(value: u16) -> Self {
        Self::from(value as u64)
    }
}

impl From<u32> for I128 {
    fn from(value: u32) -> Self {
        Self::from(value as u64)
    }
}

impl From<u64> for I128 {
    fn from(value: u64) -> Self {
        Self([value, 0])
    }
}

impl From<i8> for I128 {
    fn from(value: i8) -> Self {
        Self::from(value as i64)
    }
}

impl From<i16> for I128 {
    fn from(value: i16) -> Self {
        Self::from(value as i64)
    }
}

impl From<i32> for I128 {
    fn from(value: i32) -> Self {
        Self::from(value as i64)
    }
}

impl From<i64> for I128 {
    fn from(value: i64) -> Self {
        Self([value as u64, (value >> 63) as u64])
    }
}

impl From<i128> for I128 {
    fn from(value: i128) -> Self {
        Self([value as u64, (value >> 64) as u64])
    }
}

impl CastFrom<u128> for I128 {
    fn cast_from(input: u128) -> Self {
        Self([input as u64, (input >> 64) as u64])
    }
}

impl CastFrom<U128> for I128 {
    fn cast_from(input: U128) -> Self {
        input.into_signed()
    }
}

impl CastFrom<I128> for i8 {
    fn cast_from(input: I128) -> Self {
        input.0[0] as i8
    }
}

impl CastFrom<I128> for i16 {
    fn cast_from(input: I128) -> Self {
        input.0[0] as i16
    }
}

impl CastFrom<I128> for i32 {
    fn cast_from(input: I128) -> Self {
        input.0[0] as i32
    }
}

impl CastFrom<I128> for i64 {
    fn cast_from(input: I128) -> Self {
        input.0[0] as i64
    }
}

impl CastFrom<I128> for u64 {
    fn cast_from(input: I128) -> Self {
        input.0[0]
    }
}

impl CastFrom<I128> for i128 {
    fn cast_from(input: I128) -> Self {
        (input.0[0] as u128 | ((input.0[1] as u128) << 64)) as i128
    }
}

impl CastFrom<I128> for u128 {
    fn cast_from(input: I128) -> Self {
        input.0[0] as u128 | ((input.0[1] as u128) << 64)
    }
}

impl CastFrom<f64> for I128 {
    fn cast_from(input: f64) -> Self {
        Self::from_f64(input)
    }
}

impl CastFrom<I128> for f64 {
    fn cast_from(input: I128) -> Self {
        input.to_f64()
    }
}

impl FromStr for I128 {
    type Err = ParseIntError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(src, 10)
    }
}

impl fmt::Display for I128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = algorithms::format_limbs(self.unsigned_abs().0, 10, false);
        f.pad_integral(!self.is_negative(), "", &magnitude)
    }
}

// The bit-oriented formats print the two's complement pattern, like the
// native signed integers
impl fmt::Binary for I128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.into_unsigned(), f)
    }
}

impl fmt::Octal for I128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Octal::fmt(&self.into_unsigned(), f)
    }
}

impl fmt::LowerHex for I128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.into_unsigned(), f)
    }
}

impl fmt::UpperHex for I128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.into_unsigned(), f)
    }
}

impl Numeric for I128 {
    const BITS: usize = Self::BITS as usize;
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;
    const TWO: Self = Self::TWO;
    const MAX: Self = Self::MAX;
}

// SAFETY
//
// I128 is allowed to be all zeros
#[cfg(feature = "bytemuck")]
unsafe impl bytemuck::Zeroable for I128 {}

// SAFETY
//
// u64 impl bytemuck::Pod,
// [T; N] impl bytemuck::Pod if T: bytemuck::Pod
//
// Thus I128 can safely be considered Pod
#[cfg(feature = "bytemuck")]
unsafe impl bytemuck::Pod for I128 {}
