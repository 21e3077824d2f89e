#![forbid(unsafe_code)]

//! transreal: exact rationals extended with +infinity, -infinity and nullity.
//!
//! Every arithmetic operation is total. Division by zero yields a signed
//! infinity (or nullity for 0/0), and every classically indeterminate form
//! (inf - inf, inf/inf, 0 * inf, ...) resolves to [`Transreal::Nullity`]
//! instead of panicking or returning an error. Finite values are backed by
//! arbitrary-precision rationals in lowest terms, so equality is structural
//! and arithmetic never rounds unless a root has no exact rational result.

use num_bigint::BigInt;

pub mod real;
pub mod root;

pub use real::Transreal;

/// Errors for caller contract violations. Mathematically degenerate input is
/// never an error; it resolves to nullity by the arithmetic rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransrealError {
    /// A finite value was requested through the raw pair path with a zero
    /// denominator. Infinities and nullity are only reached as operation
    /// results or through their named variants.
    #[error("finite transreal with zero denominator: {numerator}/0")]
    ZeroDenominator { numerator: BigInt },
    /// `root` requires a degree of at least 1.
    #[error("root degree must be at least 1")]
    ZeroRootDegree,
}
