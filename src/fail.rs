use crate::error::{CodeLoc, ParseError};
use crate::parser::{ParseResult, Parser};
use crate::state::State;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that always fails with a fixed message without consuming input
///
/// It never produces a value; the output type only exists so the parser can
/// sit next to others in `or` and `choice`.
pub struct Fail<T> {
    message: Cow<'static, str>,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Fail<T> {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Fail {
            message: message.into(),
            _phantom: PhantomData,
        }
    }
}

impl<T> Parser for Fail<T> {
    type Output = T;

    fn parse<'src>(&self, state: State<'src>) -> ParseResult<'src, Self::Output> {
        let (data, position) = state.inner();
        Err(ParseError::message_at(
            self.message.clone(),
            CodeLoc::new(data, position),
        ))
    }
}

/// Convenience function to create a Fail parser
pub fn fail<T>(message: impl Into<Cow<'static, str>>) -> Fail<T> {
    Fail::new(message)
}
