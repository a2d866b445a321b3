//! Utilities for parsing rationals from the usual ASCII notation, `n` or `n/d`.

use nom::character::complete::{char, multispace0};
use nom::combinator::{all_consuming, opt};
use nom::error::ParseError;
use nom::sequence::{delimited, preceded, tuple};
use nom::{IResult, Parser};

use crate::rational::{BaseInt, Rational, RationalError};

/// Parses a signed integer.
fn integer(input: &str) -> IResult<&str, BaseInt> {
    nom::character::complete::i64(input)
}

/// A combinator that takes a parser `inner` and produces a parser that also consumes both leading
/// and trailing whitespace, returning the output of `inner`.
fn ws<'a, F, O, E: ParseError<&'a str>>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O, E>
where
    F: Parser<&'a str, O, E>,
{
    delimited(multispace0, inner, multispace0)
}

/// Parses `n` or `n/d` into its parts. The denominator is not checked.
pub fn fraction(input: &str) -> IResult<&str, (BaseInt, Option<BaseInt>)> {
    tuple((ws(integer), opt(preceded(char('/'), ws(integer)))))(input)
}

/// Parses a complete string as a [`Rational`]. Whitespace is allowed around either number.
pub fn parse_rational(s: &str) -> Result<Rational, RationalError> {
    let (_, (numerator, denominator)) =
        all_consuming(fraction)(s).map_err(|_| RationalError::StringParse(s.to_owned()))?;
    match denominator {
        Some(denominator) => Rational::new(numerator, denominator),
        None => Ok(Rational::from_integer(numerator)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_fraction() {
        assert_eq!(fraction("3/4"), Ok(("", (3, Some(4)))));
        assert_eq!(fraction("-3 / 4 "), Ok(("", (-3, Some(4)))));
        assert_eq!(fraction("12"), Ok(("", (12, None))));
        assert_eq!(fraction("1/2/3"), Ok(("/3", (1, Some(2)))));
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse_rational("3/4").unwrap(), rational!(3 / 4));
        assert_eq!(parse_rational(" 6/-8 ").unwrap(), rational!(-3 / 4));
        assert_eq!(parse_rational("-10/-4").unwrap(), rational!(5 / 2));
        assert_eq!(parse_rational("7").unwrap(), rational!(7));
        assert_eq!(parse_rational("0/9").unwrap(), Rational::ZERO);
    }

    #[test]
    fn test_from_str() {
        let r: Rational = "22/7".parse().unwrap();
        assert_eq!(r, rational!(22 / 7));
        assert_eq!(r.to_string().parse::<Rational>().unwrap(), r);
    }

    #[test]
    fn test_parse_extremes() {
        let min = parse_rational("-9223372036854775808").unwrap();
        assert_eq!(min.numerator(), BaseInt::MIN);
        assert_eq!(min.denominator(), 1);
        assert_eq!(
            parse_rational("-9223372036854775808/2").unwrap(),
            Rational::from_integer(BaseInt::MIN / 2)
        );
        assert_eq!(
            parse_rational("9223372036854775807/-1").unwrap(),
            Rational::from_integer(-BaseInt::MAX)
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_rational("1/0"),
            Err(RationalError::ZeroDenominator { numerator: 1 })
        );
        for bad in ["", "abc", "1/", "/2", "1/2/3", "1.5", "1 2", "99999999999999999999"] {
            assert_eq!(
                parse_rational(bad),
                Err(RationalError::StringParse(bad.to_owned())),
                "{:?}",
                bad
            );
        }
    }
}
