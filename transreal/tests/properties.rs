//! Algebraic laws of the transreal arithmetic, checked with quickcheck.
//! Field laws are stated on the finite subset; totality and nullity
//! absorption are stated over the whole type.

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use transreal::Transreal;

/// A finite transreal with modestly sized components.
#[derive(Clone, Debug)]
struct Fin(Transreal);

impl Arbitrary for Fin {
    fn arbitrary(g: &mut Gen) -> Self {
        let numerator = i64::from(i16::arbitrary(g));
        let mut denominator = i64::from(i16::arbitrary(g));
        if denominator == 0 {
            denominator = 1;
        }
        Fin(Transreal::new(numerator, denominator).unwrap())
    }
}

/// Any transreal: finite values mixed with the three specials.
#[derive(Clone, Debug)]
struct AnyTr(Transreal);

impl Arbitrary for AnyTr {
    fn arbitrary(g: &mut Gen) -> Self {
        AnyTr(match u8::arbitrary(g) % 8 {
            5 => Transreal::PositiveInfinity,
            6 => Transreal::NegativeInfinity,
            7 => Transreal::Nullity,
            _ => Fin::arbitrary(g).0,
        })
    }
}

#[quickcheck]
fn prop_add_commutative(a: Fin, b: Fin) -> bool {
    a.0.add(&b.0) == b.0.add(&a.0)
}

#[quickcheck]
fn prop_add_associative(a: Fin, b: Fin, c: Fin) -> bool {
    a.0.add(&b.0).add(&c.0) == a.0.add(&b.0.add(&c.0))
}

#[quickcheck]
fn prop_mul_commutative(a: Fin, b: Fin) -> bool {
    a.0.mul(&b.0) == b.0.mul(&a.0)
}

#[quickcheck]
fn prop_mul_associative(a: Fin, b: Fin, c: Fin) -> bool {
    a.0.mul(&b.0).mul(&c.0) == a.0.mul(&b.0.mul(&c.0))
}

#[quickcheck]
fn prop_distributive(a: Fin, b: Fin, c: Fin) -> bool {
    a.0.mul(&b.0.add(&c.0)) == a.0.mul(&b.0).add(&a.0.mul(&c.0))
}

#[quickcheck]
fn prop_additive_identity(a: Fin) -> bool {
    a.0.add(&Transreal::zero()) == a.0
}

#[quickcheck]
fn prop_multiplicative_identity(a: Fin) -> bool {
    a.0.mul(&Transreal::one()) == a.0
}

#[quickcheck]
fn prop_additive_inverse(a: Fin) -> bool {
    a.0.add(&-a.0.clone()) == Transreal::zero()
}

#[quickcheck]
fn prop_double_negation(a: Fin) -> bool {
    -(-a.0.clone()) == a.0
}

#[quickcheck]
fn prop_multiplicative_inverse(a: Fin) -> bool {
    if a.0 == Transreal::zero() {
        // 0 * recip(0) is 0 * infinity, which is nullity by design.
        a.0.mul(&a.0.recip()).is_nullity()
    } else {
        a.0.mul(&a.0.recip()) == Transreal::one()
    }
}

#[quickcheck]
fn prop_exact_division_round_trips(a: Fin, b: Fin) -> bool {
    if b.0 == Transreal::zero() {
        return true;
    }
    a.0.div(&b.0).mul(&b.0) == a.0
}

#[quickcheck]
fn prop_sub_is_add_of_negation(a: Fin, b: Fin) -> bool {
    a.0.sub(&b.0) == a.0.add(&-b.0.clone())
}

#[quickcheck]
fn prop_nullity_absorbs(x: AnyTr) -> bool {
    let n = Transreal::Nullity;
    n.add(&x.0).is_nullity()
        && x.0.add(&n).is_nullity()
        && n.sub(&x.0).is_nullity()
        && x.0.sub(&n).is_nullity()
        && n.mul(&x.0).is_nullity()
        && x.0.mul(&n).is_nullity()
        && n.div(&x.0).is_nullity()
        && x.0.div(&n).is_nullity()
}

#[quickcheck]
fn prop_arithmetic_is_total(a: AnyTr, b: AnyTr) -> bool {
    // Every combination produces a value; no operand panics.
    let _ = a.0.add(&b.0);
    let _ = a.0.sub(&b.0);
    let _ = a.0.mul(&b.0);
    let _ = a.0.div(&b.0);
    true
}

#[quickcheck]
fn prop_finite_trichotomy(a: Fin, b: Fin) -> bool {
    let lt = a.0 < b.0;
    let eq = a.0 == b.0;
    let gt = a.0 > b.0;
    u8::from(lt) + u8::from(eq) + u8::from(gt) == 1
}

#[quickcheck]
fn prop_eq_symmetric(a: Fin, b: Fin) -> bool {
    (a.0 == b.0) == (b.0 == a.0)
}

#[quickcheck]
fn prop_root_then_power_stays_close(a: Fin) -> bool {
    // root(2) of a non-negative finite squares back to within 1e-9.
    let value = a.0.abs();
    let root = value.sqrt();
    let error = root.mul(&root).sub(&value).abs();
    error < Transreal::new(1, 1_000_000_000i64).unwrap()
}
