//! Greatest common divisor and least common multiple on signed integers. Every reduction of a
//! [`Rational`](crate::rational::Rational) goes through [`gcd`].

use crate::rational::BaseInt;

/// The greatest common divisor of `|a|` and `|b|`, computed on magnitudes so that `BaseInt::MIN`
/// is a valid input.
pub const fn gcd_unsigned(a: BaseInt, b: BaseInt) -> u64 {
    let mut p = a.unsigned_abs();
    let mut q = b.unsigned_abs();
    while q != 0 {
        let r = p % q;
        p = q;
        q = r;
    }

    p
}

/// The greatest common divisor of `a` and `b`, always non-negative.
///
/// The signs of the inputs don't matter. `gcd(a, 0) == |a|`, and `gcd(0, 0) == 0` so that zero acts
/// as an identity element. The only results that don't fit in [`BaseInt`] are
/// `gcd(MIN, 0)` and `gcd(MIN, MIN)`, which are `2^63`; use [`gcd_unsigned`] for those.
pub const fn gcd(a: BaseInt, b: BaseInt) -> BaseInt {
    gcd_unsigned(a, b) as BaseInt
}

/// The greatest common divisor by repeated subtraction of the smaller operand from the larger.
///
/// Computes the same value as [`gcd`], but takes time linear in the ratio of the operands.
pub const fn gcd_subtractive(a: BaseInt, b: BaseInt) -> BaseInt {
    let mut p = a.unsigned_abs();
    let mut q = b.unsigned_abs();
    if p == 0 {
        return q as BaseInt;
    }
    if q == 0 {
        return p as BaseInt;
    }
    while p != q {
        if p > q {
            p -= q;
        } else {
            q -= p;
        }
    }

    p as BaseInt
}

/// The least common multiple of `a` and `b`, always non-negative. Zero if either input is zero.
pub const fn lcm(a: BaseInt, b: BaseInt) -> BaseInt {
    if a == 0 || b == 0 {
        return 0;
    }
    (a.unsigned_abs() / gcd_unsigned(a, b) * b.unsigned_abs()) as BaseInt
}
