use crate::error::{CodeLoc, ParseError};
use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser fails at the current position.
/// Fails if the given parser succeeds.
/// Never consumes any input regardless of outcome.
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<P> Parser for Not<P>
where
    P: Parser,
{
    type Output = ();

    fn parse<'src>(&self, state: State<'src>) -> ParseResult<'src, Self::Output> {
        match self.parser.parse(state) {
            Ok(_) => {
                let (data, position) = state.inner();
                Err(ParseError::UnexpectedMatch(CodeLoc::new(data, position)))
            }
            Err(_) => Ok(((), state)),
        }
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn not<P>(parser: P) -> Not<P>
where
    P: Parser,
{
    Not::new(parser)
}

/// Extension trait to add .not() method support for parsers
pub trait NotExt: Parser + Sized {
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

/// Implement NotExt for all parsers
impl<P> NotExt for P where P: Parser {}
