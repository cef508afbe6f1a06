use crate::error::{CodeLoc, ParseError};
use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Ordered choice over any number of parsers of the same type
///
/// Alternatives are tried left to right from the same state; the first
/// success wins. When every alternative fails, the failure of the last one is
/// returned. An empty list always fails with `NoAlternatives`.
///
/// Use [`BoxedParser`](crate::BoxedParser) to mix parsers of different types.
pub struct Choice<P> {
    parsers: Vec<P>,
}

impl<P> Choice<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Choice { parsers }
    }
}

impl<P> Parser for Choice<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn parse<'src>(&self, state: State<'src>) -> ParseResult<'src, Self::Output> {
        let mut last_error = None;

        for parser in &self.parsers {
            match parser.parse(state) {
                Ok(result) => return Ok(result),
                Err(e) => last_error = Some(e),
            }
        }

        Err(last_error.unwrap_or_else(|| {
            let (data, position) = state.inner();
            ParseError::NoAlternatives(CodeLoc::new(data, position))
        }))
    }
}

/// Convenience function to create a Choice parser
pub fn choice<P>(parsers: Vec<P>) -> Choice<P>
where
    P: Parser,
{
    Choice::new(parsers)
}
