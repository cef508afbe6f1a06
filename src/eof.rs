use crate::error::{CodeLoc, ParseError};
use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Parser that succeeds only at the end of the input
pub struct EndOfInput;

impl Parser for EndOfInput {
    type Output = ();

    fn parse<'src>(&self, state: State<'src>) -> ParseResult<'src, Self::Output> {
        if state.eos() {
            Ok(((), state))
        } else {
            let (data, position) = state.inner();
            Err(ParseError::ExpectedEndOfInput(CodeLoc::new(data, position)))
        }
    }
}

/// Convenience function to create an EndOfInput parser
pub fn end_of_input() -> EndOfInput {
    EndOfInput
}
