//! Parses arithmetic expressions given on the command line and prints them
//! fully parenthesized along with their value.

use anyhow::{anyhow, bail, Context, Result};
use clap::ValueEnum;
use expr::{Arithmetic, Ast};
use parsekit::{ParseResult, Parser};

/// Used when no expressions are given.
const DEMO_EXPRESSIONS: &[&str] = &["123+45*6+78", "(123+45)*6+78"];

#[derive(Debug, clap::Parser)]
#[command(name = "arith", about = "Parse and evaluate arithmetic expressions")]
struct Cli {
    /// Expressions using non-negative integers, '+', '*' and parentheses.
    /// Nesting is limited to a few thousand levels of parentheses.
    exprs: Vec<String>,

    /// What to print for each expression.
    #[arg(long, value_enum, default_value_t = Show::Both)]
    show: Show,

    /// Accept a valid prefix and report the rest instead of failing.
    #[arg(long)]
    allow_trailing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Show {
    Both,
    Tree,
    Value,
}

fn main() -> Result<()> {
    let cli = <Cli as clap::Parser>::parse();

    let inputs: Vec<&str> = if cli.exprs.is_empty() {
        DEMO_EXPRESSIONS.to_vec()
    } else {
        cli.exprs.iter().map(String::as_str).collect()
    };

    let grammar = Arithmetic::new();
    for (idx, input) in inputs.into_iter().enumerate() {
        let (ast, rest) = if cli.allow_trailing {
            match grammar.parse(input) {
                ParseResult::Success(ast, rest) => (ast, rest),
                ParseResult::Failure => {
                    bail!("failed to parse expression {} '{}'", idx + 1, input)
                }
            }
        } else {
            let ast: Ast<i64> = input
                .parse()
                .with_context(|| format!("failed to parse expression {} '{}'", idx + 1, input))?;
            (ast, "")
        };

        println!("{}", render(&ast, cli.show)?);
        if !rest.is_empty() {
            println!("  unconsumed: '{}'", rest);
        }
    }

    Ok(())
}

fn render(ast: &Ast<i64>, show: Show) -> Result<String> {
    let value = || {
        ast.checked_evaluate()
            .ok_or_else(|| anyhow!("evaluating {} overflows i64", ast))
    };
    Ok(match show {
        Show::Tree => ast.to_string(),
        Show::Value => value()?.to_string(),
        Show::Both => format!("{} = {}", ast, value()?),
    })
}
