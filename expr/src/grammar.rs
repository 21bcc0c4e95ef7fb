//! The expression grammar, lowest precedence first:
//!
//! ```text
//! additive       = multiplicative , { "+" , multiplicative } ;
//! multiplicative = primary , { "*" , primary } ;
//! primary        = "(" , additive , ")" | number ;
//! ```
//!
//! Single operand sums and products still produce `Addition` and
//! `Multiplication` nodes.

use parsekit::{bracketed, literal, number, sep_by1, ParseResult, Parser, Rule, RuleRef};

use crate::Ast;

pub type Expr = Ast<i64>;

/// A parenthesized expression or a number literal.
pub fn primary<P>(expr: P) -> impl Parser<Output = Expr>
where
    P: Parser<Output = Expr>,
{
    bracketed(literal('('), literal(')'), expr).or(number().map(Ast::Number))
}

pub fn multiplicative<P>(primary: P) -> impl Parser<Output = Expr>
where
    P: Parser<Output = Expr>,
{
    sep_by1(literal('*'), primary).map(Ast::Multiplication)
}

pub fn additive<P>(multiplicative: P) -> impl Parser<Output = Expr>
where
    P: Parser<Output = Expr>,
{
    sep_by1(literal('+'), multiplicative).map(Ast::Addition)
}

/// Entry point for parsing arithmetic expressions.
///
/// Parsing stops at the first character that can't continue the expression,
/// so a success may leave a remainder.
///
/// Sums and products of any length are parsed in a loop, but each level of
/// parentheses recurses. Nesting depth is therefore bounded by the stack of
/// the calling thread: on an 8 MiB main thread a couple of thousand nested
/// parentheses parse, while around 5000 overflow the stack and abort the
/// process. Run deeply nested input on a thread with a larger stack.
pub struct Arithmetic {
    expr: Rule<Expr>,
}

impl Arithmetic {
    pub fn new() -> Self {
        let expr = Rule::recursive(|expr: RuleRef<Expr>| additive(multiplicative(primary(expr))));
        Arithmetic { expr }
    }
}

impl Default for Arithmetic {
    fn default() -> Self {
        Arithmetic::new()
    }
}

impl Parser for Arithmetic {
    type Output = Expr;

    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, Expr> {
        self.expr.parse(input)
    }
}
