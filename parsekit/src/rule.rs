use std::rc::{Rc, Weak};

use anyhow::{anyhow, Result};
use once_cell::unsync::OnceCell;

use crate::{BoxedParser, ParseResult, Parser};

type Slot<T> = OnceCell<BoxedParser<T>>;

/// A parser that is declared before it is defined.
///
/// Hand out [`RuleRef`]s to parsers that need to refer to the rule, then
/// [`define`](Rule::define) it once those parsers exist. References are weak,
/// so a rule that refers to itself does not keep itself alive.
///
/// Running an undefined rule fails.
pub struct Rule<T> {
    slot: Rc<Slot<T>>,
}

/// A non-owning handle to a [`Rule`]. Fails if the rule has been dropped or
/// not yet defined.
pub struct RuleRef<T> {
    slot: Weak<Slot<T>>,
}

impl<T: 'static> Rule<T> {
    pub fn new() -> Self {
        Rule {
            slot: Rc::new(OnceCell::new()),
        }
    }

    /// Build a self referential rule from a function of a reference to it.
    pub fn recursive<P, F>(f: F) -> Self
    where
        P: Parser<Output = T> + 'static,
        F: FnOnce(RuleRef<T>) -> P,
    {
        let rule = Rule::new();
        let parser = f(rule.reference());
        rule.slot.get_or_init(|| parser.boxed());
        rule
    }

    pub fn reference(&self) -> RuleRef<T> {
        RuleRef {
            slot: Rc::downgrade(&self.slot),
        }
    }

    /// Set the parser for this rule. A rule can only be defined once.
    pub fn define<P>(&self, parser: P) -> Result<()>
    where
        P: Parser<Output = T> + 'static,
    {
        self.slot
            .set(parser.boxed())
            .map_err(|_| anyhow!("rule already defined"))
    }

    pub fn is_defined(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl<T: 'static> Default for Rule<T> {
    fn default() -> Self {
        Rule::new()
    }
}

impl<T> Parser for Rule<T> {
    type Output = T;

    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, T> {
        match self.slot.get() {
            Some(parser) => parser.parse(input),
            None => ParseResult::Failure,
        }
    }
}

impl<T> Clone for RuleRef<T> {
    fn clone(&self) -> Self {
        RuleRef {
            slot: Weak::clone(&self.slot),
        }
    }
}

impl<T> Parser for RuleRef<T> {
    type Output = T;

    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, T> {
        let slot = match self.slot.upgrade() {
            Some(slot) => slot,
            None => return ParseResult::Failure,
        };
        match slot.get() {
            Some(parser) => parser.parse(input),
            None => ParseResult::Failure,
        }
    }
}
