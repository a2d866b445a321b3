//! Sums and products over sequences of rationals.
//!
//! Elements are combined left to right. The order doesn't change the result, only how large the
//! intermediate numerators and denominators get.

use std::iter::{Product, Sum};

use crate::rational::Rational;

impl Sum for Rational {
    /// The empty sum is `0`.
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Rational::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Product for Rational {
    /// The empty product is `1`.
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Rational::ONE, |acc, x| acc * x)
    }
}

impl<'a> Product<&'a Rational> for Rational {
    fn product<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.copied().product()
    }
}

/// Sums `f(item)` over `items`.
pub fn sum_by<T, I, F>(items: I, f: F) -> Rational
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Rational,
{
    items.into_iter().map(f).sum()
}

/// Multiplies `f(item)` over `items`.
pub fn product_by<T, I, F>(items: I, f: F) -> Rational
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Rational,
{
    items.into_iter().map(f).product()
}
