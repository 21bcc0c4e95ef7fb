//! Character level helpers built from the primitives.

use crate::{choice, literal, never, pure, sequence, Choice, Literal, Parser};

/// Matches an exact string.
pub fn word(s: &str) -> impl Parser<Output = String> {
    sequence(s.chars().map(literal).collect())
        .map(|chars: Vec<char>| chars.into_iter().collect::<String>())
}

/// Matches any one of the characters in `chars`.
pub fn any_of(chars: &str) -> Choice<Literal> {
    choice(chars.chars().map(literal).collect())
}

pub fn non_zero_digit() -> Choice<Literal> {
    any_of("123456789")
}

pub fn digit() -> impl Parser<Output = char> {
    literal('0').or(non_zero_digit())
}

/// A decimal literal: a non-zero digit followed by any number of digits.
///
/// A lone "0" is not a number. Literals that do not fit in an `i64` fail.
pub fn number() -> impl Parser<Output = i64> {
    non_zero_digit()
        .bind(|first| {
            digit().many().map(move |rest| {
                let mut digits = Vec::with_capacity(rest.len() + 1);
                digits.push(first);
                digits.extend(rest);
                digits
            })
        })
        .bind(|digits| match accumulate(&digits) {
            Some(n) => pure(n).boxed(),
            None => never().boxed(),
        })
}

fn accumulate(digits: &[char]) -> Option<i64> {
    digits.iter().try_fold(0i64, |acc, c| {
        let d = c.to_digit(10)?;
        acc.checked_mul(10)?.checked_add(i64::from(d))
    })
}
