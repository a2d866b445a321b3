//! Exact rational arithmetic over a fixed-width integer type.
//!
//! [`Rational`] values are always stored in lowest terms with a positive denominator. The only
//! error is asking for a zero denominator, either directly or through a reciprocal of zero.

pub mod aggregate;
pub mod gcd;
pub mod parsing;
pub mod percent;
pub mod predicates;
pub mod rational;
pub mod rounding;

pub use aggregate::{product_by, sum_by};
pub use gcd::{gcd, lcm};
pub use percent::{percentage, Percent};
pub use rational::{BaseInt, Over, Rational, RationalError};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational;

    use pretty_assertions::assert_eq;
    use std::cmp::Ordering;

    #[test]
    fn test_scenarios() {
        assert_eq!(Rational::new(4, 8).unwrap(), rational!(1 / 2));
        assert_eq!(Rational::new(-2, -4).unwrap(), rational!(1 / 2));
        assert_eq!(Rational::new(3, -6).unwrap(), rational!(-1 / 2));
        assert_eq!(Rational::new(1, 2).unwrap().round(), 0);
        assert_eq!(Rational::new(3, 2).unwrap().round(), 1);
        assert_eq!(Rational::new(-1, 2).unwrap().round(), -1);
        assert_eq!(Vec::<Rational>::new().into_iter().sum::<Rational>(), rational!(0 / 1));
        assert_eq!(Vec::<Rational>::new().into_iter().product::<Rational>(), rational!(1 / 1));
        assert_eq!(percentage(50), rational!(1 / 2));
        assert_eq!(percentage(50).percent().to_string(), "50%");
        assert_eq!(
            Rational::new(1, 3).unwrap().cmp(&Rational::new(1, 2).unwrap()),
            Ordering::Less
        );
    }

    #[test]
    fn test_gcd_scenarios() {
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(0, 5), 0);
    }
}
