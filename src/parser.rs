use crate::error::ParseError;
use crate::state::State;

/// Outcome of a parse: the value and the state to resume from, or a failure
pub type ParseResult<'src, T> = Result<(T, State<'src>), ParseError<'src>>;

/// Core parser trait for parser combinators
///
/// A parser is an immutable description of how to recognise something at a
/// given state. It keeps nothing between invocations, so one parser can be
/// run any number of times, on any number of inputs.
pub trait Parser {
    type Output;

    /// Attempt to parse from the given state
    ///
    /// Returns Ok with the parsed value and the advanced state on success, or
    /// Err with the offset and reason on failure.
    fn parse<'src>(&self, state: State<'src>) -> ParseResult<'src, Self::Output>;

    /// Parse `input` from its start
    fn run<'src>(&self, input: &'src str) -> ParseResult<'src, Self::Output> {
        self.run_at(input, 0)
    }

    /// Parse `input` starting at byte offset `index`
    ///
    /// Offsets count bytes of UTF-8, not characters; the two agree only on
    /// ASCII text. An offset inside a multi-byte character starts parsing at
    /// the next character boundary, and an offset past the end starts at the
    /// end.
    fn run_at<'src>(&self, input: &'src str, index: usize) -> ParseResult<'src, Self::Output> {
        let state = State::at(input, index);
        let result = self.parse(state);
        match &result {
            Ok((_, end)) => log::trace!(
                "parse succeeded: offset {} -> {}",
                state.position(),
                end.position()
            ),
            Err(e) => log::trace!(
                "parse failed at offset {} (started at {}): {}",
                e.position(),
                state.position(),
                e
            ),
        }
        result
    }
}

impl<P> Parser for &P
where
    P: Parser + ?Sized,
{
    type Output = P::Output;

    fn parse<'src>(&self, state: State<'src>) -> ParseResult<'src, Self::Output> {
        (**self).parse(state)
    }
}
