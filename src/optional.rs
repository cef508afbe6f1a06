use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Parser combinator that turns a failure into `None` at the original state
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<P> Parser for Optional<P>
where
    P: Parser,
{
    type Output = Option<P::Output>;

    fn parse<'src>(&self, state: State<'src>) -> ParseResult<'src, Self::Output> {
        match self.parser.parse(state) {
            Ok((value, state)) => Ok((Some(value), state)),
            Err(_) => Ok((None, state)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<P>(parser: P) -> Optional<P>
where
    P: Parser,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt: Parser + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

/// Implement OptionalExt for all parsers
impl<P> OptionalExt for P where P: Parser {}
