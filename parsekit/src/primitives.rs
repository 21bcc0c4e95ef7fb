use std::fmt;
use std::marker::PhantomData;

use crate::{ParseResult, Parser};

/// Succeeds without consuming anything.
#[derive(Debug, Clone, Copy)]
pub struct Empty;

impl Parser for Empty {
    type Output = ();

    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, ()> {
        ParseResult::Success((), input)
    }
}

pub fn empty() -> Empty {
    Empty
}

/// Succeeds with a fixed value without consuming anything. Useful for seeding
/// accumulators.
#[derive(Debug, Clone)]
pub struct Pure<T>(T);

impl<T: Clone> Parser for Pure<T> {
    type Output = T;

    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, T> {
        ParseResult::Success(self.0.clone(), input)
    }
}

pub fn pure<T: Clone>(value: T) -> Pure<T> {
    Pure(value)
}

/// Always fails. The identity for [`alt`](crate::alt).
pub struct Never<T>(PhantomData<fn() -> T>);

impl<T> Parser for Never<T> {
    type Output = T;

    fn parse<'a>(&self, _input: &'a str) -> ParseResult<'a, T> {
        ParseResult::Failure
    }
}

impl<T> Clone for Never<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Never<T> {}

impl<T> fmt::Debug for Never<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Never")
    }
}

pub fn never<T>() -> Never<T> {
    Never(PhantomData)
}

/// Matches exactly one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal(pub char);

impl Parser for Literal {
    type Output = char;

    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, char> {
        let mut chars = input.chars();
        match chars.next() {
            Some(c) if c == self.0 => ParseResult::Success(c, chars.as_str()),
            _ => ParseResult::Failure,
        }
    }
}

pub fn literal(c: char) -> Literal {
    Literal(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_consumes_nothing() {
        assert_eq!(empty().parse("abc"), ParseResult::Success((), "abc"));
        assert_eq!(empty().parse(""), ParseResult::Success((), ""));
    }

    #[test]
    fn pure_yields_value() {
        let p = pure(vec![1, 2]);
        assert_eq!(p.parse("xyz"), ParseResult::Success(vec![1, 2], "xyz"));
        // Repeated runs hand out fresh copies.
        assert_eq!(p.parse(""), ParseResult::Success(vec![1, 2], ""));
    }

    #[test]
    fn never_fails() {
        for input in &["", "a", "anything"] {
            assert_eq!(never::<()>().parse(input), ParseResult::Failure);
        }
    }

    #[test]
    fn literal_cases() {
        let tests = vec![
            ('a', "abc", ParseResult::Success('a', "bc")),
            ('a', "a", ParseResult::Success('a', "")),
            ('a', "bac", ParseResult::Failure),
            ('a', "", ParseResult::Failure),
            ('(', "(1)", ParseResult::Success('(', "1)")),
            ('é', "éa", ParseResult::Success('é', "a")),
        ];
        for test in tests {
            let got = literal(test.0).parse(test.1);
            assert_eq!(got, test.2, "test case: {:?}", test);
        }
    }
}
