//! Arithmetic expressions over sums and products.

use std::fmt::{self, Display};
use std::str::FromStr;

use parsekit::{ParseResult, Parser};

mod error;
pub use error::Error;
mod grammar;
pub use grammar::{additive, multiplicative, primary, Arithmetic, Expr};
mod numeric;
pub use numeric::Numeric;

/// An expression tree. Each node owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ast<T> {
    Addition(Vec<Ast<T>>),
    Multiplication(Vec<Ast<T>>),
    Number(T),
}

impl<T> Ast<T> {
    /// Evaluate the tree. An empty sum is zero and an empty product is one.
    ///
    /// Integer overflow wraps. Use
    /// [`checked_evaluate`](Ast::checked_evaluate) to detect it for `i64`.
    pub fn evaluate(&self) -> T
    where
        T: Numeric,
    {
        match self {
            Ast::Number(n) => n.clone(),
            Ast::Addition(addends) => addends
                .iter()
                .fold(T::zero(), |acc, x| acc.add(&x.evaluate())),
            Ast::Multiplication(factors) => factors
                .iter()
                .fold(T::one(), |acc, x| acc.mul(&x.evaluate())),
        }
    }
}

impl Ast<i64> {
    /// Evaluate the tree, returning `None` if any intermediate result
    /// overflows.
    pub fn checked_evaluate(&self) -> Option<i64> {
        match self {
            Ast::Number(n) => Some(*n),
            Ast::Addition(addends) => addends
                .iter()
                .try_fold(0i64, |acc, x| acc.checked_add(x.checked_evaluate()?)),
            Ast::Multiplication(factors) => factors
                .iter()
                .try_fold(1i64, |acc, x| acc.checked_mul(x.checked_evaluate()?)),
        }
    }
}

fn write_joined<T: Display>(f: &mut fmt::Formatter, nodes: &[Ast<T>], sep: &str) -> fmt::Result {
    write!(f, "(")?;
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", sep)?;
        }
        write!(f, "{}", node)?;
    }
    write!(f, ")")
}

/// Pretty prints the tree fully parenthesized. Every sum and product is
/// wrapped, even with a single operand.
impl<T: Display> Display for Ast<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Ast::Number(n) => write!(f, "{}", n),
            Ast::Addition(addends) => write_joined(f, addends, "+"),
            Ast::Multiplication(factors) => write_joined(f, factors, "*"),
        }
    }
}

/// Parses a complete expression. Input left over after the expression is an
/// error.
impl FromStr for Ast<i64> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Arithmetic::new().parse(s) {
            ParseResult::Success(ast, "") => Ok(ast),
            ParseResult::Success(_, rest) => Err(Error::TrailingInput(rest.to_owned())),
            ParseResult::Failure => Err(Error::ParseError),
        }
    }
}
