use crate::error::{CodeLoc, ParseError};
use crate::many::repeat;
use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Parser combinator that matches one or more occurrences of the given parser
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<P> Parser for Many1<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'src>(&self, state: State<'src>) -> ParseResult<'src, Self::Output> {
        let (results, next) = repeat(&self.parser, state);

        if results.is_empty() {
            let (data, position) = state.inner();
            return Err(ParseError::ExpectedAtLeastOne(CodeLoc::new(data, position)));
        }

        Ok((results, next))
    }
}

/// Convenience function to create a Many1 parser
pub fn many1<P>(parser: P) -> Many1<P>
where
    P: Parser,
{
    Many1::new(parser)
}

/// Extension trait to add .many1() method support for parsers
pub trait Many1Ext: Parser + Sized {
    fn many1(self) -> Many1<Self> {
        Many1::new(self)
    }
}

/// Implement Many1Ext for all parsers
impl<P> Many1Ext for P where P: Parser {}
