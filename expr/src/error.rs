use std::error;
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    ParseError,
    /// A valid expression was followed by input that isn't part of it.
    TrailingInput(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::ParseError => write!(f, "failed to parse expression"),
            Error::TrailingInput(ref s) => write!(f, "unconsumed input: '{}'", s),
        }
    }
}

impl error::Error for Error {}
