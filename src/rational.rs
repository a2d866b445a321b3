//! A Rational data type with a fixed-width numerator and denominator, always stored in lowest terms
//! with a positive denominator. Because the representation is canonical, two values are equal
//! exactly when their fields are.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::{
    CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Float, FromPrimitive, Num, One, Pow, Signed,
    ToPrimitive, Zero,
};
use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
    str::FromStr,
};
use thiserror::Error;

use crate::gcd::gcd_unsigned;

/// The integer type of numerators and denominators. Overflow when values grow is not checked by
/// the operators; use the `Checked*` traits where that matters.
pub type BaseInt = i64;

/// An exact fraction `numerator / denominator`.
///
/// Invariants: `denominator > 0`, `gcd(numerator, denominator) == 1` and zero is stored as `0/1`.
/// The only way to build one from outside this module is through [`Rational::new`] or a
/// conversion from an integer, so every value seen by a caller satisfies them.
#[derive(Clone, Copy, Hash, Eq, PartialEq)]
pub struct Rational {
    numerator: BaseInt,
    denominator: BaseInt,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RationalError {
    #[error("Cannot construct {numerator}/0: the denominator is zero")]
    ZeroDenominator { numerator: BaseInt },
    #[error("Cannot take the reciprocal of zero")]
    ZeroReciprocal,
    #[error("Could not convert {0} to a rational: not finite or out of range")]
    FloatConversion(f64),
    #[error("Could not parse {0:?} as a rational")]
    StringParse(String),
}

impl RationalError {
    /// Whether this error came from an operand that would produce a zero denominator.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::ZeroDenominator { .. } | Self::ZeroReciprocal)
    }
}

impl Rational {
    pub const ZERO: Rational = Rational::raw(0, 1);

    pub const ONE: Rational = Rational::raw(1, 1);

    pub const NEG_ONE: Rational = Rational::raw(-1, 1);

    /// The midpoint between two consecutive integers, where [`Rational::round`] breaks ties.
    pub const ONE_HALF: Rational = Rational::raw(1, 2);

    /// Builds a value without normalizing. Callers must already satisfy the invariants.
    const fn raw(numerator: BaseInt, denominator: BaseInt) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Reduces `numerator / denominator` to canonical form. The denominator must be nonzero.
    pub(crate) fn reduced(numerator: BaseInt, denominator: BaseInt) -> Self {
        debug_assert!(denominator != 0);
        let d = gcd_unsigned(numerator, denominator);
        // 2^63 only divides both when each is 0 or BaseInt::MIN
        let Ok(d) = BaseInt::try_from(d) else {
            return if numerator == 0 { Self::ZERO } else { Self::ONE };
        };
        let (numerator, denominator) = (numerator / d, denominator / d);
        if denominator < 0 {
            Self::raw(-numerator, -denominator)
        } else {
            Self::raw(numerator, denominator)
        }
    }

    /// Creates the rational `numerator / denominator` in lowest terms.
    ///
    /// Fails with [`RationalError::ZeroDenominator`] if `denominator` is zero. Any other pair is
    /// valid: signs are moved onto the numerator and common factors divided out.
    pub fn new(numerator: BaseInt, denominator: BaseInt) -> Result<Self, RationalError> {
        if denominator == 0 {
            return Err(RationalError::ZeroDenominator { numerator });
        }
        Ok(Self::reduced(numerator, denominator))
    }

    /// The rational `n / 1`.
    pub const fn from_integer(n: BaseInt) -> Self {
        Self::raw(n, 1)
    }

    pub const fn numerator(&self) -> BaseInt {
        self.numerator
    }

    /// Always positive.
    pub const fn denominator(&self) -> BaseInt {
        self.denominator
    }

    /// Whether this value is a whole number.
    pub const fn is_integral(&self) -> bool {
        self.denominator == 1 || self.numerator == 0
    }

    /// `1 / self`. Zero has no reciprocal, which is reported as [`RationalError::ZeroReciprocal`].
    pub fn recip(self) -> Result<Self, RationalError> {
        if self.numerator == 0 {
            return Err(RationalError::ZeroReciprocal);
        }
        Ok(Self::reduced(self.denominator, self.numerator))
    }

    /// `self / rhs`, failing instead of panicking when `rhs` is zero.
    pub fn try_div(self, rhs: Self) -> Result<Self, RationalError> {
        Ok(self * rhs.recip()?)
    }

    /// `self` raised to an integer power. Negative powers go through the reciprocal, so zero to a
    /// negative power fails.
    pub fn try_pow(self, exp: i32) -> Result<Self, RationalError> {
        let base = if exp < 0 { self.recip()? } else { self };
        let e = exp.unsigned_abs();
        // powers of coprime integers are coprime, and the denominator stays positive
        Ok(Self::raw(base.numerator.pow(e), base.denominator.pow(e)))
    }

    /// Converts a float exactly. Every finite float is a dyadic fraction; this fails with
    /// [`RationalError::FloatConversion`] if the float is infinite, NaN, or its numerator or
    /// denominator would not fit in [`BaseInt`].
    pub fn try_from_float<T: Float>(x: T) -> Result<Self, RationalError> {
        let err = || RationalError::FloatConversion(x.to_f64().unwrap_or(f64::NAN));
        if !x.is_finite() {
            return Err(err());
        }

        let (mantissa, exponent, sign) = x.integer_decode();
        if mantissa == 0 {
            return Ok(Self::ZERO);
        }

        let mut mantissa = mantissa;
        let mut exponent = i32::from(exponent);
        while exponent < 0 && mantissa % 2 == 0 {
            mantissa /= 2;
            exponent += 1;
        }

        let numerator = BaseInt::try_from(mantissa).map_err(|_| err())? * BaseInt::from(sign);
        let scale = (2 as BaseInt)
            .checked_pow(exponent.unsigned_abs())
            .ok_or_else(err)?;
        if exponent >= 0 {
            numerator
                .checked_mul(scale)
                .map(Self::from_integer)
                .ok_or_else(err)
        } else {
            Ok(Self::reduced(numerator, scale))
        }
    }

    fn cross(&self, other: &Self) -> (i128, i128) {
        (
            i128::from(self.numerator) * i128::from(other.denominator),
            i128::from(other.numerator) * i128::from(self.denominator),
        )
    }
}

/// Convenience for writing `3.over(4)` instead of `Rational::new(3, 4)`.
pub trait Over {
    fn over(self, denominator: BaseInt) -> Result<Rational, RationalError>;
}

impl Over for BaseInt {
    fn over(self, denominator: BaseInt) -> Result<Rational, RationalError> {
        Rational::new(self, denominator)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.is_integral() && other.is_integral() {
            return self.numerator.cmp(&other.numerator);
        }
        // both denominators are positive, so cross-multiplying preserves the order
        let (lhs, rhs) = self.cross(other);
        lhs.cmp(&rhs)
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        if self.denominator == rhs.denominator {
            Self::reduced(self.numerator + rhs.numerator, self.denominator)
        } else {
            Self::reduced(
                self.numerator * rhs.denominator + rhs.numerator * self.denominator,
                self.denominator * rhs.denominator,
            )
        }
    }
}

impl AddAssign for Rational {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl SubAssign for Rational {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::reduced(
            self.numerator * rhs.numerator,
            self.denominator * rhs.denominator,
        )
    }
}

impl MulAssign for Rational {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for Rational {
    type Output = Self;

    /// Note: this panics when dividing by zero. Use [`Rational::try_div`] to get an error instead.
    fn div(self, rhs: Self) -> Self::Output {
        match self.try_div(rhs) {
            Ok(quotient) => quotient,
            Err(e) => panic!("{} / {}: {}", self, rhs, e),
        }
    }
}

impl DivAssign for Rational {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::raw(-self.numerator, self.denominator)
    }
}

impl Rem for Rational {
    type Output = Self;

    /// The remainder of truncated division, taking the sign of `self` like integer `%`. Panics if
    /// `rhs` is zero.
    fn rem(self, rhs: Self) -> Self::Output {
        if rhs.is_zero() {
            panic!("{} % {}: {}", self, rhs, RationalError::ZeroReciprocal);
        }
        Self::reduced(
            (self.numerator * rhs.denominator) % (rhs.numerator * self.denominator),
            self.denominator * rhs.denominator,
        )
    }
}

impl RemAssign for Rational {
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

// Integers mix with rationals as n/1.
macro_rules! impl_integer_op {
    ($op:ident, $method:ident) => {
        impl $op<BaseInt> for Rational {
            type Output = Rational;

            fn $method(self, rhs: BaseInt) -> Self::Output {
                $op::$method(self, Rational::from_integer(rhs))
            }
        }

        impl $op<Rational> for BaseInt {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Self::Output {
                $op::$method(Rational::from_integer(self), rhs)
            }
        }
    };
}

impl_integer_op!(Add, add);
impl_integer_op!(Sub, sub);
impl_integer_op!(Mul, mul);
impl_integer_op!(Div, div);

/// Scaling by a float can't stay exact, so the result is a float.
impl Mul<f64> for Rational {
    type Output = f64;

    fn mul(self, rhs: f64) -> Self::Output {
        self.numerator as f64 * rhs / self.denominator as f64
    }
}

impl Mul<Rational> for f64 {
    type Output = f64;

    fn mul(self, rhs: Rational) -> Self::Output {
        rhs * self
    }
}

impl From<BaseInt> for Rational {
    fn from(n: BaseInt) -> Self {
        Self::from_integer(n)
    }
}

macro_rules! from_small_int {
    ($t:ident) => {
        impl From<$t> for Rational {
            fn from(n: $t) -> Self {
                Self::from_integer(BaseInt::from(n))
            }
        }
    };
}

from_small_int!(i8);
from_small_int!(u8);
from_small_int!(i16);
from_small_int!(u16);
from_small_int!(i32);
from_small_int!(u32);

impl From<Rational> for f64 {
    fn from(value: Rational) -> Self {
        value.numerator as f64 / value.denominator as f64
    }
}

impl From<Rational> for f32 {
    fn from(value: Rational) -> Self {
        value.numerator as f32 / value.denominator as f32
    }
}

/// Integer conversions take the floor; they are `None` only when the floor is out of range.
impl ToPrimitive for Rational {
    fn to_i64(&self) -> Option<i64> {
        Some(self.round_down())
    }

    fn to_u64(&self) -> Option<u64> {
        self.round_down().to_u64()
    }

    fn to_i128(&self) -> Option<i128> {
        Some(i128::from(self.round_down()))
    }

    fn to_u128(&self) -> Option<u128> {
        self.round_down().to_u128()
    }

    fn to_f32(&self) -> Option<f32> {
        Some((*self).into())
    }

    fn to_f64(&self) -> Option<f64> {
        Some((*self).into())
    }
}

impl FromPrimitive for Rational {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::from_integer(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        BaseInt::try_from(n).ok().map(Self::from_integer)
    }

    fn from_f32(n: f32) -> Option<Self> {
        Self::try_from_float(n).ok()
    }

    fn from_f64(n: f64) -> Option<Self> {
        Self::try_from_float(n).ok()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        *self == Self::ONE
    }
}

impl Num for Rational {
    type FromStrRadixErr = RationalError;

    /// Parses `n` or `n/d`, with both parts written in `radix`.
    fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        let parse_err = |_| RationalError::StringParse(str.to_owned());
        match str.split_once('/') {
            Some((n, d)) => Self::new(
                BaseInt::from_str_radix(n, radix).map_err(parse_err)?,
                BaseInt::from_str_radix(d, radix).map_err(parse_err)?,
            ),
            None => BaseInt::from_str_radix(str, radix)
                .map(Self::from_integer)
                .map_err(parse_err),
        }
    }
}

impl Signed for Rational {
    fn abs(&self) -> Self {
        Self::raw(self.numerator.abs(), self.denominator)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            Self::ZERO
        } else {
            *self - *other
        }
    }

    fn signum(&self) -> Self {
        Self::from_integer(self.numerator.signum())
    }

    fn is_positive(&self) -> bool {
        self.numerator > 0
    }

    fn is_negative(&self) -> bool {
        self.numerator < 0
    }
}

impl Pow<i32> for Rational {
    type Output = Self;

    /// Panics on zero to a negative power. See [`Rational::try_pow`].
    fn pow(self, exp: i32) -> Self::Output {
        match self.try_pow(exp) {
            Ok(power) => power,
            Err(e) => panic!("{}^{}: {}", self, exp, e),
        }
    }
}

impl CheckedAdd for Rational {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        if self.denominator == v.denominator {
            let numerator = self.numerator.checked_add(v.numerator)?;
            return Some(Self::reduced(numerator, self.denominator));
        }
        let numerator = self
            .numerator
            .checked_mul(v.denominator)?
            .checked_add(v.numerator.checked_mul(self.denominator)?)?;
        let denominator = self.denominator.checked_mul(v.denominator)?;
        Some(Self::reduced(numerator, denominator))
    }
}

impl CheckedSub for Rational {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        let negated = Self::raw(v.numerator.checked_neg()?, v.denominator);
        self.checked_add(&negated)
    }
}

impl CheckedMul for Rational {
    fn checked_mul(&self, v: &Self) -> Option<Self> {
        Some(Self::reduced(
            self.numerator.checked_mul(v.numerator)?,
            self.denominator.checked_mul(v.denominator)?,
        ))
    }
}

impl CheckedDiv for Rational {
    fn checked_div(&self, v: &Self) -> Option<Self> {
        self.checked_mul(&v.recip().ok()?)
    }
}

impl AbsDiffEq for Rational {
    type Epsilon = Self;

    fn default_epsilon() -> Self::Epsilon {
        Self::ZERO
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        (*self - *other).abs() <= epsilon
    }
}

impl RelativeEq for Rational {
    fn default_max_relative() -> Self::Epsilon {
        Self::ZERO
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        if self.abs_diff_eq(other, epsilon) {
            return true;
        }
        let largest = Ord::max(self.abs(), other.abs());
        (*self - *other).abs() <= largest * max_relative
    }
}

impl UlpsEq for Rational {
    fn default_max_ulps() -> u32 {
        0
    }

    /// Rationals have no units in the last place: this is [`AbsDiffEq::abs_diff_eq`].
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, _max_ulps: u32) -> bool {
        self.abs_diff_eq(other, epsilon)
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parsing::parse_rational(s)
    }
}

impl Debug for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rational!({} / {})", self.numerator, self.denominator)
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_integral() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// Builds a [`Rational`]: `rational!(3 / 4)` or `rational!(2)`. The numerator of the fraction
/// form must be a literal.
///
/// Panics if the denominator is zero.
#[macro_export]
macro_rules! rational {
    ($num:literal / $denom:expr) => {{
        match $crate::rational::Rational::new($num, $denom) {
            Ok(r) => r,
            Err(e) => panic!("Invalid rational: {}", e),
        }
    }};
    ($num:expr) => {
        $crate::rational::Rational::from_integer($num)
    };
}
