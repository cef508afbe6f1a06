use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Parser combinator that tries the first parser, and if it fails, tries the
/// second parser from the original state
///
/// This is ordered choice: the first alternative that succeeds wins, even if
/// the second would have consumed more input.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<P1, P2, O> Parser for Or<P1, P2>
where
    P1: Parser<Output = O>,
    P2: Parser<Output = O>,
{
    type Output = O;

    fn parse<'src>(&self, state: State<'src>) -> ParseResult<'src, Self::Output> {
        match self.parser1.parse(state) {
            Ok(result) => Ok(result),
            Err(_) => self.parser2.parse(state),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt: Parser + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<P> OrExt for P where P: Parser {}

/// Convenience function to create an Or parser
pub fn or<P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<Output = O>,
    P2: Parser<Output = O>,
{
    Or::new(parser1, parser2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::then::ThenExt;

    #[test]
    fn test_or_first_succeeds() {
        let parser = or(literal("a"), literal("b"));

        let (value, state) = parser.run("abc").unwrap();
        assert_eq!(value, "a");
        assert_eq!(state.peek(), Some('b'));
    }

    #[test]
    fn test_or_second_succeeds() {
        let parser = or(literal("a"), literal("b"));

        let (value, state) = parser.run("bcd").unwrap();
        assert_eq!(value, "b");
        assert_eq!(state.peek(), Some('c'));
    }

    #[test]
    fn test_or_both_fail_reports_second() {
        let parser = or(literal("a"), literal("b"));

        let error = parser.run("xyz").unwrap_err();
        assert_eq!(error.message(), "Expected \"b\"");
    }

    #[test]
    fn test_or_backtracks_fully() {
        // The first alternative gets past "ab" before failing on 'd'
        let parser = literal("ab").then(literal("c")).or(literal("abd"));

        let (value, state) = parser.run("abd").unwrap();
        assert_eq!(value, "abd");
        assert_eq!(state.position(), 3);
    }

    #[test]
    fn test_or_is_ordered_not_longest() {
        let parser = literal("a").or(literal("ab"));

        let (value, state) = parser.run("ab").unwrap();
        assert_eq!(value, "a");
        assert_eq!(state.position(), 1);
    }

    #[test]
    fn test_or_method_chain() {
        let parser = literal("a")
            .or(literal("b"))
            .or(literal("c"))
            .or(literal("d"));

        let (value, state) = parser.run("d").unwrap();
        assert_eq!(value, "d");
        assert!(state.eos());
    }
}
