use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Never fails. An occurrence that succeeds without consuming input is kept
/// and ends the repetition, so parsers that can match the empty string do
/// not loop forever.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

/// Collect successive matches of `parser` starting at `state`
pub(crate) fn repeat<'src, P>(
    parser: &P,
    mut state: State<'src>,
) -> (Vec<P::Output>, State<'src>)
where
    P: Parser + ?Sized,
{
    let mut results = Vec::new();

    while let Ok((value, next)) = parser.parse(state) {
        results.push(value);
        if next.position() == state.position() {
            log::trace!(
                "zero-width match at offset {} ends repetition",
                state.position()
            );
            break;
        }
        state = next;
    }

    (results, state)
}

impl<P> Parser for Many<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'src>(&self, state: State<'src>) -> ParseResult<'src, Self::Output> {
        Ok(repeat(&self.parser, state))
    }
}

/// Convenience function to create a Many parser
pub fn many<P>(parser: P) -> Many<P>
where
    P: Parser,
{
    Many::new(parser)
}

/// Extension trait to add .many() method support for parsers
pub trait ManyExt: Parser + Sized {
    fn many(self) -> Many<Self> {
        Many::new(self)
    }
}

/// Implement ManyExt for all parsers
impl<P> ManyExt for P where P: Parser {}
