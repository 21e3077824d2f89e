//! The transreal number type: construction, comparison, total arithmetic.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Pow, Signed, Zero};

use crate::TransrealError;

/// A transreal number: an exact rational, or one of the three non-finite
/// values that make the arithmetic total.
///
/// A `Finite` value always holds its rational in lowest terms with a
/// positive denominator (the canonical form maintained by [`BigRational`]),
/// so finite equality is structural. `Nullity` is absorbing: it propagates
/// through every operation and compares unequal and unordered to everything,
/// itself included. Use [`Transreal::is_nullity`] where an identity check is
/// needed despite that.
///
/// Values are immutable; every operation constructs a new value.
#[derive(Debug, Clone)]
pub enum Transreal {
    Finite(BigRational),
    PositiveInfinity,
    NegativeInfinity,
    Nullity,
}

use self::Transreal::{Finite, NegativeInfinity, Nullity, PositiveInfinity};

impl Transreal {
    /// Build a finite value from a numerator/denominator pair, reduced to
    /// lowest terms with the sign carried by the numerator.
    ///
    /// A zero denominator is a contract violation, not a transreal value:
    /// infinities and nullity arise from operations, never from this path.
    pub fn new<N, D>(numerator: N, denominator: D) -> Result<Self, TransrealError>
    where
        N: Into<BigInt>,
        D: Into<BigInt>,
    {
        let numerator = numerator.into();
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(TransrealError::ZeroDenominator { numerator });
        }
        Ok(Finite(BigRational::new(numerator, denominator)))
    }

    /// The finite value 0.
    pub fn zero() -> Self {
        Finite(BigRational::zero())
    }

    /// The finite value 1.
    pub fn one() -> Self {
        Finite(BigRational::one())
    }

    /// An approximate rational pi, accurate to 24 decimal places.
    pub fn pi() -> Self {
        let numerator = BigInt::from(3_141_592_653_589_793_238_462_643u128);
        let denominator = Pow::pow(BigInt::from(10u8), 24u32);
        Finite(BigRational::new(numerator, denominator))
    }

    /// Convert a float to the transreal with the exact fractional value of
    /// its IEEE-754 bit pattern. No decimal rounding is involved: the
    /// nearest double to one third becomes exactly
    /// 6004799503160661/18014398509481984, not 1/3.
    ///
    /// Float infinities map to the transreal infinities and NaN maps to
    /// nullity, keeping the conversion total.
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Nullity;
        }
        if value.is_infinite() {
            return if value > 0.0 {
                PositiveInfinity
            } else {
                NegativeInfinity
            };
        }
        match BigRational::from_float(value) {
            Some(ratio) => Finite(ratio),
            None => Nullity,
        }
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Finite(_))
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, PositiveInfinity | NegativeInfinity)
    }

    /// Identity check for nullity. This is the one reflexive view of
    /// nullity: `==` on two nullity values is always false.
    pub fn is_nullity(&self) -> bool {
        matches!(self, Nullity)
    }

    /// The backing rational of a finite value.
    pub fn as_ratio(&self) -> Option<&BigRational> {
        match self {
            Finite(ratio) => Some(ratio),
            _ => None,
        }
    }

    /// Total addition. Opposite infinities are indeterminate and resolve to
    /// nullity; a single infinite operand dominates any finite one.
    pub fn add(&self, rhs: &Self) -> Self {
        match (self, rhs) {
            (Nullity, _) | (_, Nullity) => Nullity,
            (PositiveInfinity, NegativeInfinity) | (NegativeInfinity, PositiveInfinity) => Nullity,
            (PositiveInfinity, _) | (_, PositiveInfinity) => PositiveInfinity,
            (NegativeInfinity, _) | (_, NegativeInfinity) => NegativeInfinity,
            (Finite(a), Finite(b)) => Finite(a + b),
        }
    }

    /// Total subtraction. inf - inf (same sign) is nullity.
    pub fn sub(&self, rhs: &Self) -> Self {
        match (self, rhs) {
            (Nullity, _) | (_, Nullity) => Nullity,
            (PositiveInfinity, PositiveInfinity) | (NegativeInfinity, NegativeInfinity) => Nullity,
            (PositiveInfinity, _) | (_, NegativeInfinity) => PositiveInfinity,
            (NegativeInfinity, _) | (_, PositiveInfinity) => NegativeInfinity,
            (Finite(a), Finite(b)) => Finite(a - b),
        }
    }

    /// Total multiplication. Zero times an infinity is indeterminate and
    /// resolves to nullity; otherwise infinities follow the usual sign rules.
    pub fn mul(&self, rhs: &Self) -> Self {
        match (self, rhs) {
            (Nullity, _) | (_, Nullity) => Nullity,
            (PositiveInfinity | NegativeInfinity, Finite(b))
            | (Finite(b), PositiveInfinity | NegativeInfinity)
                if b.is_zero() =>
            {
                Nullity
            }
            (PositiveInfinity, PositiveInfinity) | (NegativeInfinity, NegativeInfinity) => {
                PositiveInfinity
            }
            (PositiveInfinity, NegativeInfinity) | (NegativeInfinity, PositiveInfinity) => {
                NegativeInfinity
            }
            (PositiveInfinity, Finite(b)) | (Finite(b), PositiveInfinity) => {
                if b.is_positive() {
                    PositiveInfinity
                } else {
                    NegativeInfinity
                }
            }
            (NegativeInfinity, Finite(b)) | (Finite(b), NegativeInfinity) => {
                if b.is_positive() {
                    NegativeInfinity
                } else {
                    PositiveInfinity
                }
            }
            (Finite(a), Finite(b)) => Finite(a * b),
        }
    }

    /// Total division. A finite value over zero is the signed infinity of
    /// its numerator, 0/0 is nullity, inf/inf is nullity, and a finite value
    /// over an infinity is exactly zero.
    pub fn div(&self, rhs: &Self) -> Self {
        match (self, rhs) {
            (Nullity, _) | (_, Nullity) => Nullity,
            (
                PositiveInfinity | NegativeInfinity,
                PositiveInfinity | NegativeInfinity,
            ) => Nullity,
            (PositiveInfinity, Finite(b)) => {
                if b.is_negative() {
                    NegativeInfinity
                } else {
                    PositiveInfinity
                }
            }
            (NegativeInfinity, Finite(b)) => {
                if b.is_negative() {
                    PositiveInfinity
                } else {
                    NegativeInfinity
                }
            }
            (Finite(_), PositiveInfinity | NegativeInfinity) => Self::zero(),
            (Finite(a), Finite(b)) => {
                if b.is_zero() {
                    match a.numer().sign() {
                        num_bigint::Sign::Plus => PositiveInfinity,
                        num_bigint::Sign::Minus => NegativeInfinity,
                        num_bigint::Sign::NoSign => Nullity,
                    }
                } else {
                    Finite(a / b)
                }
            }
        }
    }

    /// Absolute value. Both infinities map to +infinity; nullity stays put.
    pub fn abs(&self) -> Self {
        match self {
            Nullity => Nullity,
            PositiveInfinity | NegativeInfinity => PositiveInfinity,
            Finite(a) => Finite(a.abs()),
        }
    }

    /// Sign as a transreal: -1, 0 or 1 for the ordered values, nullity for
    /// nullity.
    pub fn signum(&self) -> Self {
        match self {
            Nullity => Nullity,
            PositiveInfinity => Self::one(),
            NegativeInfinity => Finite(-BigRational::one()),
            Finite(a) => Finite(BigRational::from_integer(BigInt::from(match a.numer().sign() {
                num_bigint::Sign::Plus => 1,
                num_bigint::Sign::Minus => -1,
                num_bigint::Sign::NoSign => 0,
            }))),
        }
    }

    /// Reciprocal through the total division rules: 1/0 is +infinity and the
    /// reciprocal of either infinity is exactly zero.
    pub fn recip(&self) -> Self {
        match self {
            Nullity => Nullity,
            PositiveInfinity | NegativeInfinity => Self::zero(),
            Finite(a) => {
                if a.is_zero() {
                    PositiveInfinity
                } else {
                    Finite(a.recip())
                }
            }
        }
    }

    /// Largest integer less than or equal to self. Non-finite values are
    /// their own floor.
    pub fn floor(&self) -> Self {
        match self {
            Finite(a) => Finite(a.floor()),
            other => other.clone(),
        }
    }
}

impl PartialEq for Transreal {
    /// Structural equality on the canonical representation, except that
    /// nullity is equal to nothing, itself included.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Finite(a), Finite(b)) => a == b,
            (PositiveInfinity, PositiveInfinity) => true,
            (NegativeInfinity, NegativeInfinity) => true,
            _ => false,
        }
    }
}

impl PartialOrd for Transreal {
    /// Total order -infinity < finite < +infinity on the non-nullity
    /// values; any comparison involving nullity is `None`, so nullity fails
    /// all of <, = and >.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Nullity, _) | (_, Nullity) => None,
            (Finite(a), Finite(b)) => Some(a.cmp(b)),
            (PositiveInfinity, PositiveInfinity) => Some(Ordering::Equal),
            (NegativeInfinity, NegativeInfinity) => Some(Ordering::Equal),
            (PositiveInfinity, _) | (_, NegativeInfinity) => Some(Ordering::Greater),
            (NegativeInfinity, _) | (_, PositiveInfinity) => Some(Ordering::Less),
        }
    }
}

impl Add for Transreal {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::add(&self, &rhs)
    }
}

impl Sub for Transreal {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::sub(&self, &rhs)
    }
}

impl Mul for Transreal {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Self::mul(&self, &rhs)
    }
}

impl Div for Transreal {
    type Output = Self;
    fn div(self, rhs: Self) -> Self::Output {
        Self::div(&self, &rhs)
    }
}

impl Neg for Transreal {
    type Output = Self;
    fn neg(self) -> Self::Output {
        match self {
            Nullity => Nullity,
            PositiveInfinity => NegativeInfinity,
            NegativeInfinity => PositiveInfinity,
            Finite(a) => Finite(-a),
        }
    }
}

impl Rem for Transreal {
    type Output = Self;
    /// `a - b * floor(a / b)`, flowing through the total arithmetic, so any
    /// degenerate operand combination resolves to nullity.
    fn rem(self, rhs: Self) -> Self::Output {
        let quotient = Self::div(&self, &rhs).floor();
        Self::sub(&self, &Self::mul(&rhs, &quotient))
    }
}

impl From<BigInt> for Transreal {
    fn from(value: BigInt) -> Self {
        Finite(BigRational::from_integer(value))
    }
}

impl From<i64> for Transreal {
    fn from(value: i64) -> Self {
        BigInt::from(value).into()
    }
}

impl From<i32> for Transreal {
    fn from(value: i32) -> Self {
        BigInt::from(value).into()
    }
}

impl From<u32> for Transreal {
    fn from(value: u32) -> Self {
        BigInt::from(value).into()
    }
}

impl From<BigRational> for Transreal {
    fn from(value: BigRational) -> Self {
        Finite(value)
    }
}

impl From<f64> for Transreal {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl fmt::Display for Transreal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finite(a) if a.is_integer() => write!(f, "{}", a.numer()),
            Finite(a) => write!(f, "{}/{}", a.numer(), a.denom()),
            PositiveInfinity => write!(f, "infinity"),
            NegativeInfinity => write!(f, "-infinity"),
            Nullity => write!(f, "nullity"),
        }
    }
}
