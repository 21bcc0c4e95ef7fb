//! A small parser combinator toolkit.
//!
//! Every parser implements [`Parser`]: given some input it either succeeds
//! with a value and the unconsumed remainder, or fails without any further
//! information. Bigger parsers are built by composing smaller ones.

use anyhow::{anyhow, Result};

mod boxed;
mod combinators;
mod primitives;
mod result;
mod rule;
mod text;

pub use boxed::BoxedParser;
pub use combinators::{
    alt, bind, bracketed, choice, lazy, many, map, sep_by1, sequence, Alt, Bind, Bracketed,
    Choice, Lazy, Many, Map, SepBy1, Sequence,
};
pub use primitives::{empty, literal, never, pure, Empty, Literal, Never, Pure};
pub use result::ParseResult;
pub use rule::{Rule, RuleRef};
pub use text::{any_of, digit, non_zero_digit, number, word};

pub trait Parser {
    type Output;

    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Output>;

    /// Try `self`, falling back to `other` on the original input.
    fn or<P>(self, other: P) -> Alt<Self, P>
    where
        Self: Sized,
        P: Parser<Output = Self::Output>,
    {
        alt(self, other)
    }

    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        map(self, f)
    }

    /// Run `self`, then build the next parser from its value and run that on
    /// the remainder.
    fn bind<Q, F>(self, f: F) -> Bind<Self, F>
    where
        Self: Sized,
        Q: Parser,
        F: Fn(Self::Output) -> Q,
    {
        bind(self, f)
    }

    fn many(self) -> Many<Self>
    where
        Self: Sized,
    {
        many(self)
    }

    fn boxed(self) -> BoxedParser<Self::Output>
    where
        Self: Sized + 'static,
    {
        BoxedParser::new(self)
    }
}

/// Run a parser over some input.
///
/// A success may leave a non-empty remainder, meaning only a prefix of the
/// input was recognized. Use [`parse_complete`] when the whole input must be
/// consumed.
pub fn parse<'a, P: Parser>(parser: &P, input: &'a str) -> ParseResult<'a, P::Output> {
    parser.parse(input)
}

/// Run a parser, requiring that it consumes all input.
pub fn parse_complete<P: Parser>(parser: &P, input: &str) -> Result<P::Output> {
    match parser.parse(input) {
        ParseResult::Success(value, "") => Ok(value),
        ParseResult::Success(_, rest) => Err(anyhow!("unconsumed input: '{}'", rest)),
        ParseResult::Failure => Err(anyhow!("parsing failed")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_complete_requires_full_consumption() {
        let p = word("ab");
        assert_eq!(parse_complete(&p, "ab").unwrap(), "ab");

        let err = parse_complete(&p, "abc").unwrap_err();
        assert_eq!(err.to_string(), "unconsumed input: 'c'");

        let err = parse_complete(&p, "b").unwrap_err();
        assert_eq!(err.to_string(), "parsing failed");
    }

    #[test]
    fn parse_allows_prefix() {
        let p = word("ab");
        assert_eq!(parse(&p, "abc"), ParseResult::Success("ab".to_owned(), "c"));
    }
}
