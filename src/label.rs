use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use crate::state::State;
use std::borrow::Cow;

/// Parser combinator that replaces the failure message of a parser
///
/// The failure offset is kept; successes pass through untouched.
pub struct Label<P> {
    parser: P,
    message: Cow<'static, str>,
}

impl<P> Label<P> {
    pub fn new(parser: P, message: impl Into<Cow<'static, str>>) -> Self {
        Label {
            parser,
            message: message.into(),
        }
    }
}

impl<P> Parser for Label<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn parse<'src>(&self, state: State<'src>) -> ParseResult<'src, Self::Output> {
        self.parser
            .parse(state)
            .map_err(|e| ParseError::message_at(self.message.clone(), e.loc()))
    }
}

/// Extension trait to add .label() method support for parsers
pub trait LabelExt: Parser + Sized {
    fn label(self, message: impl Into<Cow<'static, str>>) -> Label<Self> {
        Label::new(self, message)
    }
}

/// Implement LabelExt for all parsers
impl<P> LabelExt for P where P: Parser {}
