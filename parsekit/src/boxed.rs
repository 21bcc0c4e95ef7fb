use std::rc::Rc;

use crate::{ParseResult, Parser};

/// A type erased parser. Clones share the underlying parser.
pub struct BoxedParser<T> {
    inner: Rc<dyn Parser<Output = T>>,
}

impl<T> BoxedParser<T> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<Output = T> + 'static,
    {
        BoxedParser {
            inner: Rc::new(parser),
        }
    }
}

impl<T> Clone for BoxedParser<T> {
    fn clone(&self) -> Self {
        BoxedParser {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Parser for BoxedParser<T> {
    type Output = T;

    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, T> {
        self.inner.parse(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{literal, word};

    #[test]
    fn mixes_parser_shapes() {
        let parsers: Vec<BoxedParser<String>> = vec![
            word("let").boxed(),
            literal('x').map(|c| c.to_string()).boxed(),
        ];
        let p = crate::choice(parsers);
        assert_eq!(p.parse("let"), ParseResult::Success("let".to_owned(), ""));
        assert_eq!(p.parse("x1"), ParseResult::Success("x".to_owned(), "1"));
        assert_eq!(p.parse("y"), ParseResult::Failure);
    }

    #[test]
    fn clones_share_parser() {
        let p = literal('a').boxed();
        let q = p.clone();
        assert_eq!(p.parse("ab"), q.parse("ab"));
    }
}
