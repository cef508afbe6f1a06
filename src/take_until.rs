use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Parser that scans forward until a stop parser matches
///
/// The stop parser is tried at the current offset and then one character
/// further each time. The text before the first offset where it succeeds is
/// returned, and the resulting state sits at that offset: the stop match
/// itself is not consumed. If it never matches, the rest of the input is
/// returned with the state at the end. Never fails.
pub struct TakeUntil<P> {
    stop: P,
}

impl<P> TakeUntil<P> {
    pub fn new(stop: P) -> Self {
        Self { stop }
    }
}

impl<P> Parser for TakeUntil<P>
where
    P: Parser,
{
    type Output = String;

    fn parse<'src>(&self, state: State<'src>) -> ParseResult<'src, Self::Output> {
        let mut current = state;

        while !current.eos() {
            if self.stop.parse(current).is_ok() {
                break;
            }
            current = current.next();
        }

        Ok((state.slice_to(current).to_owned(), current))
    }
}

/// Convenience function to create a TakeUntil parser
pub fn take_until<P>(stop: P) -> TakeUntil<P>
where
    P: Parser,
{
    TakeUntil::new(stop)
}
