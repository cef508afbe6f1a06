use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Parser combinator that inspects a match without consuming it
///
/// On success the value is returned with the original state. Failures are
/// returned unchanged, including their offset.
pub struct LookAhead<P> {
    parser: P,
}

impl<P> LookAhead<P> {
    pub fn new(parser: P) -> Self {
        LookAhead { parser }
    }
}

impl<P> Parser for LookAhead<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn parse<'src>(&self, state: State<'src>) -> ParseResult<'src, Self::Output> {
        let (value, _) = self.parser.parse(state)?;
        Ok((value, state))
    }
}

/// Convenience function to create a LookAhead parser
pub fn look_ahead<P>(parser: P) -> LookAhead<P>
where
    P: Parser,
{
    LookAhead::new(parser)
}

/// Extension trait to add .look_ahead() method support for parsers
pub trait LookAheadExt: Parser + Sized {
    fn look_ahead(self) -> LookAhead<Self> {
        LookAhead::new(self)
    }
}

/// Implement LookAheadExt for all parsers
impl<P> LookAheadExt for P where P: Parser {}
