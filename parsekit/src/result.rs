/// The outcome of running a parser over some input.
///
/// On success the remainder is always a suffix of the input handed to the
/// parser that produced it. Failure carries nothing: no position, no cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult<'a, T> {
    Success(T, &'a str),
    Failure,
}

impl<'a, T> ParseResult<'a, T> {
    /// Apply `f` to a successful value, leaving the remainder untouched.
    /// Failures pass through as is.
    pub fn map<U, F>(self, f: F) -> ParseResult<'a, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ParseResult::Success(value, rest) => ParseResult::Success(f(value), rest),
            ParseResult::Failure => ParseResult::Failure,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success(..))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            ParseResult::Success(value, _) => Some(value),
            ParseResult::Failure => None,
        }
    }

    /// The unconsumed input after a success.
    pub fn remainder(&self) -> Option<&'a str> {
        match *self {
            ParseResult::Success(_, rest) => Some(rest),
            ParseResult::Failure => None,
        }
    }

    pub fn into_option(self) -> Option<(T, &'a str)> {
        match self {
            ParseResult::Success(value, rest) => Some((value, rest)),
            ParseResult::Failure => None,
        }
    }
}
