#![forbid(unsafe_code)]

//! transcomplex: a polar magnitude/angle pair over transreal components.
//!
//! Construction and canonicalization only. Transcomplex arithmetic
//! (addition, multiplication, roots) is not implemented; the transreal core
//! returns nullity where a transcomplex result would be needed, and this
//! crate exists to give that gap a concrete landing type once the arithmetic
//! is written.

use std::fmt;

use transreal::Transreal;

/// Caller contract violations for transcomplex construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TranscomplexError {
    /// Cartesian construction is defined for finite components only.
    #[error("cartesian components must be finite: ({real}, {imag})")]
    NonFiniteCartesian { real: Transreal, imag: Transreal },
}

/// A transcomplex number: a point given by polar magnitude and angle.
///
/// After construction the magnitude is non-negative finite, +infinity or
/// nullity, and the angle is finite (radians). The point at nullity is
/// canonically `(nullity, 0)`. Values are immutable; there is no
/// transcomplex arithmetic yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcomplex {
    magnitude: Transreal,
    angle: Transreal,
}

impl Transcomplex {
    /// The canonical point at nullity, `(nullity, 0)`.
    pub fn point_at_nullity() -> Self {
        Self {
            magnitude: Transreal::Nullity,
            angle: Transreal::zero(),
        }
    }

    /// Build from polar components. Total: every input canonicalizes.
    ///
    /// In order: a nullity magnitude or angle gives the point at nullity,
    /// whatever angle was supplied; an infinite angle also gives the point
    /// at nullity; a zero magnitude forces the angle to 0; a negative
    /// magnitude (finite or -infinity) is normalized to its absolute value
    /// with the angle rotated by pi. The rotation uses the approximate
    /// rational pi, so the stored angle is an ordinary finite
    /// approximation. Rejecting negative magnitudes was the alternative
    /// policy; normalization was chosen to keep construction total.
    pub fn from_polar(magnitude: Transreal, angle: Transreal) -> Self {
        if magnitude.is_nullity() || angle.is_nullity() || angle.is_infinite() {
            return Self::point_at_nullity();
        }
        let (magnitude, angle) = if magnitude < Transreal::zero() {
            (magnitude.abs(), angle.add(&Transreal::pi()))
        } else {
            (magnitude, angle)
        };
        let angle = if magnitude == Transreal::zero() {
            Transreal::zero()
        } else {
            angle
        };
        Self { magnitude, angle }
    }

    /// Build from finite Cartesian components: magnitude is the square root
    /// of the sum of squares, angle is the atan2 of the pair as a finite
    /// approximation.
    pub fn from_cartesian(real: Transreal, imag: Transreal) -> Result<Self, TranscomplexError> {
        if !real.is_finite() || !imag.is_finite() {
            return Err(TranscomplexError::NonFiniteCartesian { real, imag });
        }
        let magnitude = real.mul(&real).add(&imag.mul(&imag)).sqrt();
        let angle = Transreal::from_f64(imag.to_f64().atan2(real.to_f64()));
        Ok(Self::from_polar(magnitude, angle))
    }

    pub fn magnitude(&self) -> &Transreal {
        &self.magnitude
    }

    pub fn angle(&self) -> &Transreal {
        &self.angle
    }

    /// The polar pair, consuming self.
    pub fn into_polar(self) -> (Transreal, Transreal) {
        (self.magnitude, self.angle)
    }
}

impl fmt::Display for Transcomplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.magnitude, self.angle)
    }
}
