//! Reads rationals from the command line and prints how each one rounds, then their sum and
//! product.

use std::process::ExitCode;

use ratl::{Rational, RationalError};

fn parse_all<I: IntoIterator<Item = String>>(args: I) -> Result<Vec<Rational>, RationalError> {
    args.into_iter().map(|arg| arg.parse()).collect()
}

fn main() -> ExitCode {
    let values = match parse_all(std::env::args().skip(1)) {
        Ok(values) => values,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    for r in &values {
        println!(
            "{:>12}  floor {:>6}  ceil {:>6}  round {:>6}  {:>8}",
            r,
            r.round_down(),
            r.round_up(),
            r.round(),
            r.percent().to_string()
        );
    }

    println!("sum: {}", values.iter().sum::<Rational>());
    match values.iter().try_fold(Rational::ONE, |acc, x| {
        num_traits::CheckedMul::checked_mul(&acc, x)
    }) {
        Some(product) => println!("product: {}", product),
        None => println!("product: overflow"),
    }

    ExitCode::SUCCESS
}
