//! Percentages: building a [`Rational`] from a whole percentage and rendering one back.

use std::fmt::Display;

use crate::rational::{BaseInt, Rational};

/// `p` percent as a fraction, i.e. `p / 100` in lowest terms.
pub fn percentage(p: BaseInt) -> Rational {
    Rational::reduced(p, 100)
}

/// A rational displayed as a whole percentage, e.g. `50%` or `+50%`. The percentage is truncated
/// toward zero. Create with [`Rational::percent`] or [`Rational::signed_percent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Percent {
    value: Rational,
    /// Whether non-negative values get a leading `+`.
    explicit_sign: bool,
}

impl Percent {
    /// The whole percentage, truncated toward zero. Widened so that any numerator fits.
    pub fn whole(&self) -> i128 {
        i128::from(self.value.numerator()) * 100 / i128::from(self.value.denominator())
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = if self.explicit_sign && self.value.numerator() >= 0 {
            "+"
        } else {
            ""
        };
        write!(f, "{}{}%", prefix, self.whole())
    }
}

impl Rational {
    /// Formats as a percentage: `rational!(1 / 2).percent().to_string() == "50%"`.
    pub fn percent(self) -> Percent {
        Percent {
            value: self,
            explicit_sign: false,
        }
    }

    /// Like [`Rational::percent`], but non-negative values start with `+`.
    pub fn signed_percent(self) -> Percent {
        Percent {
            value: self,
            explicit_sign: true,
        }
    }
}
