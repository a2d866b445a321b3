//! Rounding a [`Rational`] to a whole number.

use crate::rational::{BaseInt, Rational};

impl Rational {
    /// The largest integer `<= self`.
    pub const fn round_down(&self) -> BaseInt {
        // the denominator is positive, so Euclidean division is floor division
        self.numerator().div_euclid(self.denominator())
    }

    /// The smallest integer `>= self`.
    pub const fn round_up(&self) -> BaseInt {
        if self.is_integral() {
            self.round_down()
        } else {
            self.round_down() + 1
        }
    }

    /// The nearest integer. Ties go down, toward negative infinity: `1/2` rounds to `0`, `3/2` to
    /// `1` and `-1/2` to `-1`.
    pub fn round(&self) -> BaseInt {
        if self.fract() > Rational::ONE_HALF {
            self.round_up()
        } else {
            self.round_down()
        }
    }

    /// `self - self.round_down()`, which is always in `[0, 1)`.
    pub fn fract(&self) -> Rational {
        *self - Rational::from_integer(self.round_down())
    }
}
