use crate::{ParseResult, Parser};

/// Ordered choice. The right parser only runs if the left one fails, and
/// always on the original input.
#[derive(Debug, Clone)]
pub struct Alt<P, Q> {
    left: P,
    right: Q,
}

impl<P, Q> Parser for Alt<P, Q>
where
    P: Parser,
    Q: Parser<Output = P::Output>,
{
    type Output = P::Output;

    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Output> {
        match self.left.parse(input) {
            ParseResult::Failure => self.right.parse(input),
            success => success,
        }
    }
}

pub fn alt<P, Q>(left: P, right: Q) -> Alt<P, Q>
where
    P: Parser,
    Q: Parser<Output = P::Output>,
{
    Alt { left, right }
}

/// Monadic sequencing: the value produced by `first` picks the parser that
/// runs on the remainder.
#[derive(Debug, Clone)]
pub struct Bind<P, F> {
    first: P,
    next: F,
}

impl<P, F, Q> Parser for Bind<P, F>
where
    P: Parser,
    Q: Parser,
    F: Fn(P::Output) -> Q,
{
    type Output = Q::Output;

    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Output> {
        match self.first.parse(input) {
            ParseResult::Success(value, rest) => (self.next)(value).parse(rest),
            ParseResult::Failure => ParseResult::Failure,
        }
    }
}

pub fn bind<P, F, Q>(first: P, next: F) -> Bind<P, F>
where
    P: Parser,
    Q: Parser,
    F: Fn(P::Output) -> Q,
{
    Bind { first, next }
}

#[derive(Debug, Clone)]
pub struct Map<P, F> {
    parser: P,
    f: F,
}

impl<P, F, U> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, U> {
        self.parser.parse(input).map(&self.f)
    }
}

pub fn map<P, F, U>(parser: P, f: F) -> Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    Map { parser, f }
}

/// Zero or more repetitions, collected in parse order.
///
/// Runs as a loop rather than recursing per element. A success that consumes
/// nothing ends the repetition and is not collected, otherwise it would
/// repeat forever.
#[derive(Debug, Clone)]
pub struct Many<P>(P);

impl<P: Parser> Parser for Many<P> {
    type Output = Vec<P::Output>;

    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Output> {
        let mut values = Vec::new();
        let mut rest = input;
        loop {
            match self.0.parse(rest) {
                ParseResult::Success(value, next) if next.len() < rest.len() => {
                    values.push(value);
                    rest = next;
                }
                _ => return ParseResult::Success(values, rest),
            }
        }
    }
}

pub fn many<P: Parser>(parser: P) -> Many<P> {
    Many(parser)
}

/// Runs each parser in order, threading the remainder through. Fails as soon
/// as any of them fails.
#[derive(Debug, Clone)]
pub struct Sequence<P>(Vec<P>);

impl<P: Parser> Parser for Sequence<P> {
    type Output = Vec<P::Output>;

    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Output> {
        let mut values = Vec::with_capacity(self.0.len());
        let mut rest = input;
        for parser in &self.0 {
            match parser.parse(rest) {
                ParseResult::Success(value, next) => {
                    values.push(value);
                    rest = next;
                }
                ParseResult::Failure => return ParseResult::Failure,
            }
        }
        ParseResult::Success(values, rest)
    }
}

pub fn sequence<P: Parser>(parsers: Vec<P>) -> Sequence<P> {
    Sequence(parsers)
}

/// Tries each parser left to right, returning the first success.
///
/// Behaves like folding the parsers together with [`alt`] starting from
/// [`never`](crate::never), so an empty choice always fails.
#[derive(Debug, Clone)]
pub struct Choice<P>(Vec<P>);

impl<P: Parser> Parser for Choice<P> {
    type Output = P::Output;

    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Output> {
        self.0
            .iter()
            .map(|parser| parser.parse(input))
            .find(ParseResult::is_success)
            .unwrap_or(ParseResult::Failure)
    }
}

pub fn choice<P: Parser>(parsers: Vec<P>) -> Choice<P> {
    Choice(parsers)
}

/// One or more elements separated by `sep`. Separators are discarded.
///
/// A trailing separator without an element after it is left unconsumed.
#[derive(Debug, Clone)]
pub struct SepBy1<S, P> {
    sep: S,
    elem: P,
}

impl<S: Parser, P: Parser> Parser for SepBy1<S, P> {
    type Output = Vec<P::Output>;

    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Output> {
        let (first, mut rest) = match self.elem.parse(input) {
            ParseResult::Success(value, rest) => (value, rest),
            ParseResult::Failure => return ParseResult::Failure,
        };

        let mut values = vec![first];
        loop {
            let after_sep = match self.sep.parse(rest) {
                ParseResult::Success(_, next) => next,
                ParseResult::Failure => break,
            };
            match self.elem.parse(after_sep) {
                ParseResult::Success(value, next) if next.len() < rest.len() => {
                    values.push(value);
                    rest = next;
                }
                _ => break,
            }
        }
        ParseResult::Success(values, rest)
    }
}

pub fn sep_by1<S: Parser, P: Parser>(sep: S, elem: P) -> SepBy1<S, P> {
    SepBy1 { sep, elem }
}

/// `open`, then `inner`, then `close`, keeping only the value of `inner`.
#[derive(Debug, Clone)]
pub struct Bracketed<O, C, P> {
    open: O,
    close: C,
    inner: P,
}

impl<O: Parser, C: Parser, P: Parser> Parser for Bracketed<O, C, P> {
    type Output = P::Output;

    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, P::Output> {
        let rest = match self.open.parse(input) {
            ParseResult::Success(_, rest) => rest,
            ParseResult::Failure => return ParseResult::Failure,
        };
        let (value, rest) = match self.inner.parse(rest) {
            ParseResult::Success(value, rest) => (value, rest),
            ParseResult::Failure => return ParseResult::Failure,
        };
        match self.close.parse(rest) {
            ParseResult::Success(_, rest) => ParseResult::Success(value, rest),
            ParseResult::Failure => ParseResult::Failure,
        }
    }
}

pub fn bracketed<O, C, P>(open: O, close: C, inner: P) -> Bracketed<O, C, P>
where
    O: Parser,
    C: Parser,
    P: Parser,
{
    Bracketed { open, close, inner }
}

/// Builds its parser from a thunk every time it runs. Lets a parser refer to
/// one that is defined later, including itself.
#[derive(Debug, Clone)]
pub struct Lazy<F>(F);

impl<F, P> Parser for Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    type Output = P::Output;

    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, P::Output> {
        (self.0)().parse(input)
    }
}

pub fn lazy<F, P>(thunk: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    Lazy(thunk)
}
