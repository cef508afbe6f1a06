use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Runs two parsers in sequence and keeps the second value
pub struct Then<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Then { parser1, parser2 }
    }
}

impl<P1, P2> Parser for Then<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    type Output = P2::Output;

    fn parse<'src>(&self, state: State<'src>) -> ParseResult<'src, Self::Output> {
        let (_, state) = self.parser1.parse(state)?;
        self.parser2.parse(state)
    }
}

/// Runs two parsers in sequence and keeps the first value
pub struct Skip<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Skip<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Skip { parser1, parser2 }
    }
}

impl<P1, P2> Parser for Skip<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    type Output = P1::Output;

    fn parse<'src>(&self, state: State<'src>) -> ParseResult<'src, Self::Output> {
        let (value, state) = self.parser1.parse(state)?;
        let (_, state) = self.parser2.parse(state)?;
        Ok((value, state))
    }
}

/// Extension trait to add .then() and .skip() method support for parsers
pub trait ThenExt: Parser + Sized {
    /// Parse `self` then `other`, keeping the value of `other`
    fn then<P>(self, other: P) -> Then<Self, P>
    where
        P: Parser,
    {
        Then::new(self, other)
    }

    /// Parse `self` then `other`, keeping the value of `self`
    fn skip<P>(self, other: P) -> Skip<Self, P>
    where
        P: Parser,
    {
        Skip::new(self, other)
    }
}

/// Implement ThenExt for all parsers
impl<P> ThenExt for P where P: Parser {}
