//! Cross checks the combinator grammar against the same grammar written with
//! nom.

use expr::{Arithmetic, Ast};
use nom::{
    branch::alt,
    character::complete::{char, one_of},
    combinator::{map, map_opt, recognize},
    multi::{many0, separated_list1},
    sequence::{delimited, pair},
    IResult,
};
use parsekit::Parser;

fn number(input: &str) -> IResult<&str, Ast<i64>> {
    map_opt(
        recognize(pair(one_of("123456789"), many0(one_of("0123456789")))),
        |s: &str| s.parse().ok().map(Ast::Number),
    )(input)
}

fn primary(input: &str) -> IResult<&str, Ast<i64>> {
    alt((delimited(char('('), additive, char(')')), number))(input)
}

fn multiplicative(input: &str) -> IResult<&str, Ast<i64>> {
    map(separated_list1(char('*'), primary), Ast::Multiplication)(input)
}

fn additive(input: &str) -> IResult<&str, Ast<i64>> {
    map(separated_list1(char('+'), multiplicative), Ast::Addition)(input)
}

const INPUTS: &[&str] = &[
    "1",
    "0",
    "10",
    "007",
    "1+2",
    "1+2*3",
    "(1+2)*3",
    "2*(3+4)*5",
    "((7))",
    "((1+2)*(3+4))+5",
    "1+",
    "1*",
    "1++2",
    "1**2",
    "(1+2",
    "1+2)",
    "()",
    "",
    "abc",
    "12ab",
    "3*0",
    "3+0",
    "(0)",
    "9223372036854775807",
    "9223372036854775808",
    "1+9223372036854775808",
    "1 + 2",
    "123+45*6+78",
    "(123+45)*6+78",
];

#[test]
fn matches_reference_grammar() {
    let grammar = Arithmetic::new();
    for input in INPUTS {
        let got = grammar.parse(input).into_option();
        let expected = additive(input).ok().map(|(rest, ast)| (ast, rest));
        assert_eq!(got, expected, "input: {:?}", input);
    }
}

#[test]
fn reference_agrees_on_values() {
    let grammar = Arithmetic::new();
    for input in INPUTS {
        if let Some((ast, _)) = grammar.parse(input).into_option() {
            let (_, reference) = additive(input).unwrap();
            assert_eq!(ast.checked_evaluate(), reference.checked_evaluate(), "input: {:?}", input);
        }
    }
}
