//! Root extraction and transreal exponentiation.
//!
//! Roots are exact whenever the numerator and denominator both have exact
//! integer n-th roots, checked with integer root algorithms rather than
//! float approximation. Otherwise the result is a float approximation
//! carried back into the exact binary rational representation; nothing in
//! the type records which path produced a finite value.

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Pow, Signed, ToPrimitive, Zero};

use crate::real::Transreal;
use crate::real::Transreal::{Finite, NegativeInfinity, Nullity, PositiveInfinity};
use crate::TransrealError;

impl Transreal {
    /// The n-th root, for n >= 1. A degree of zero is a contract violation.
    ///
    /// Nullity and +infinity are fixed points for every degree. An even
    /// root of a negative value (including -infinity) is nullity: the
    /// correct result would be transcomplex, and transcomplex arithmetic is
    /// an acknowledged gap upstream, so the nullity answer is kept as a
    /// documented limitation rather than guessed at.
    pub fn root(&self, degree: u32) -> Result<Self, TransrealError> {
        if degree == 0 {
            return Err(TransrealError::ZeroRootDegree);
        }
        Ok(self.root_nonzero(degree))
    }

    /// Square root shorthand: `root(2)` without the degree check.
    pub fn sqrt(&self) -> Self {
        self.root_nonzero(2)
    }

    pub(crate) fn root_nonzero(&self, degree: u32) -> Self {
        debug_assert!(degree >= 1);
        match self {
            Nullity => Nullity,
            PositiveInfinity => PositiveInfinity,
            NegativeInfinity => {
                if degree % 2 == 1 {
                    NegativeInfinity
                } else {
                    Nullity
                }
            }
            Finite(a) => {
                let negative = a.is_negative();
                if negative && degree % 2 == 0 {
                    // Known limitation: should be transcomplex.
                    return Nullity;
                }
                let magnitude = a.abs();
                let root_numer = magnitude.numer().nth_root(degree);
                let root_denom = magnitude.denom().nth_root(degree);
                if Pow::pow(root_numer.clone(), degree) == *magnitude.numer()
                    && Pow::pow(root_denom.clone(), degree) == *magnitude.denom()
                {
                    let exact = BigRational::new(root_numer, root_denom);
                    return Finite(if negative { -exact } else { exact });
                }
                tracing::debug!(degree, "no exact rational root, approximating through f64");
                let approx = magnitude
                    .to_f64()
                    .unwrap_or(f64::INFINITY)
                    .powf(1.0 / f64::from(degree));
                let rooted = Self::from_f64(approx);
                if negative {
                    -rooted
                } else {
                    rooted
                }
            }
        }
    }

    /// Transreal exponentiation.
    ///
    /// The exponent ladder mirrors the arithmetic rules: a nullity base or
    /// exponent absorbs; a negative exponent inverts the base; an exponent
    /// of zero gives 1 except for 0^0, which is nullity; an infinite
    /// exponent collapses to 0, nullity or +infinity as |base| is below, at
    /// or above 1. Whole exponents are exact integer powers; fractional
    /// exponents go through [`Transreal::root`] and inherit its
    /// exact-or-approximate behavior.
    pub fn pow(&self, exponent: &Self) -> Self {
        if self.is_nullity() {
            return Nullity;
        }
        match exponent {
            Nullity => Nullity,
            NegativeInfinity => self.recip().pow(&PositiveInfinity),
            PositiveInfinity => {
                let magnitude = self.abs();
                let one = Self::one();
                if magnitude < one {
                    Self::zero()
                } else if magnitude == one {
                    Nullity
                } else {
                    PositiveInfinity
                }
            }
            Finite(e) => {
                if e.is_negative() {
                    return self.recip().pow(&Finite(-e));
                }
                if e.is_zero() {
                    return if *self == Self::zero() {
                        Nullity
                    } else {
                        Self::one()
                    };
                }
                if e.is_integer() {
                    return self.pow_whole(e.numer());
                }
                if *e < BigRational::one() {
                    // 0 < e < 1: an exact power under a root.
                    return match e.denom().to_u32() {
                        Some(degree) => self.pow_whole(e.numer()).root_nonzero(degree),
                        None => self.pow_approx(e),
                    };
                }
                // Non-integral exponent above 1: whole times fractional part.
                let whole = e.trunc();
                let fraction = e - &whole;
                self.pow_whole(whole.numer())
                    .mul(&self.pow(&Finite(fraction)))
            }
        }
    }

    /// Exact power by a positive integer exponent.
    fn pow_whole(&self, exponent: &BigInt) -> Self {
        debug_assert!(exponent.is_positive());
        match self {
            Nullity => Nullity,
            PositiveInfinity => PositiveInfinity,
            NegativeInfinity => {
                if exponent.is_odd() {
                    NegativeInfinity
                } else {
                    PositiveInfinity
                }
            }
            Finite(a) => match exponent.to_u64() {
                Some(k) => Finite(BigRational::new(
                    Pow::pow(a.numer().clone(), k),
                    Pow::pow(a.denom().clone(), k),
                )),
                // An exponent beyond u64 is out of exact range; the float
                // path collapses it to 0, +/-1 or an infinity anyway.
                None => self.pow_approx(&BigRational::from_integer(exponent.clone())),
            },
        }
    }

    /// Float fallback for exponents with no practical exact form.
    fn pow_approx(&self, exponent: &BigRational) -> Self {
        tracing::debug!("exponent out of exact range, approximating through f64");
        let base = self.to_f64();
        let exp = exponent.to_f64().unwrap_or(f64::NAN);
        Self::from_f64(base.powf(exp))
    }

    /// The nearest double: finite values round, the infinities map to the
    /// float infinities and nullity maps to NaN.
    pub fn to_f64(&self) -> f64 {
        match self {
            Finite(a) => a.to_f64().unwrap_or(f64::NAN),
            PositiveInfinity => f64::INFINITY,
            NegativeInfinity => f64::NEG_INFINITY,
            Nullity => f64::NAN,
        }
    }
}
