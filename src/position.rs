use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Byte range of input consumed by a parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The spanned text of `source`, the input the span was taken from
    pub fn slice<'src>(&self, source: &'src str) -> &'src str {
        &source[self.start..self.end]
    }
}

/// A parser combinator that captures the position span of a successful parse
pub struct Position<P> {
    parser: P,
}

impl<P> Position<P> {
    pub fn new(parser: P) -> Self {
        Position { parser }
    }
}

impl<P> Parser for Position<P>
where
    P: Parser,
{
    type Output = (P::Output, Span);

    fn parse<'src>(&self, state: State<'src>) -> ParseResult<'src, Self::Output> {
        let start = state.position();
        let (output, next) = self.parser.parse(state)?;

        Ok(((output, Span::new(start, next.position())), next))
    }
}

/// Extension trait to add position tracking to any parser
pub trait PositionExt: Parser + Sized {
    /// Wrap this parser to capture its position span
    fn with_position(self) -> Position<Self> {
        Position::new(self)
    }
}

impl<P> PositionExt for P where P: Parser {}

/// Convenience function to create a Position combinator
pub fn position<P>(parser: P) -> Position<P>
where
    P: Parser,
{
    Position::new(parser)
}
