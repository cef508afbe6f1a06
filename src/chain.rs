use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Parser combinator whose continuation depends on the value just parsed
///
/// The first parser runs; its value is handed to `next` to build a second
/// parser, which runs from where the first one stopped.
pub struct Chain<P, F> {
    parser: P,
    next: F,
}

impl<P, F> Chain<P, F> {
    pub fn new(parser: P, next: F) -> Self {
        Chain { parser, next }
    }
}

impl<P, F, Q> Parser for Chain<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Q,
    Q: Parser,
{
    type Output = Q::Output;

    fn parse<'src>(&self, state: State<'src>) -> ParseResult<'src, Self::Output> {
        let (value, state) = self.parser.parse(state)?;
        (self.next)(value).parse(state)
    }
}

/// Convenience function to create a Chain parser
pub fn chain<P, F, Q>(parser: P, next: F) -> Chain<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Q,
    Q: Parser,
{
    Chain::new(parser, next)
}

/// Extension trait to add .chain() method support for parsers
pub trait ChainExt: Parser + Sized {
    fn chain<F, Q>(self, next: F) -> Chain<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser,
    {
        Chain::new(self, next)
    }
}

/// Implement ChainExt for all parsers
impl<P> ChainExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::digits;
    use crate::literal::literal;
    use crate::pattern::pattern;
    use std::cell::Cell;

    #[test]
    fn test_chain_uses_first_value() {
        // A length prefix followed by exactly that many letters
        let parser = digits().chain(|n| {
            let count: usize = n.parse().unwrap();
            pattern(&format!("[a-z]{{{}}}", count)).unwrap()
        });

        let (value, state) = parser.run("3abcde").unwrap();
        assert_eq!(value, "abc");
        assert_eq!(state.position(), 4);

        assert!(parser.run("5abc").is_err());
    }

    #[test]
    fn test_chain_continues_from_first_offset() {
        let parser = literal("ab").chain(|_| literal("cd"));

        let (value, state) = parser.run("abcd").unwrap();
        assert_eq!(value, "cd");
        assert_eq!(state.position(), 4);
    }

    #[test]
    fn test_chain_first_failure_propagates() {
        let calls = Cell::new(0);
        let parser = literal("a").chain(|_| {
            calls.set(calls.get() + 1);
            literal("b")
        });

        let error = parser.run("xb").unwrap_err();
        assert_eq!(error.message(), "Expected \"a\"");
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_chain_second_failure_propagates() {
        let parser = chain(literal("a"), |_| literal("b"));

        let error = parser.run("ax").unwrap_err();
        assert_eq!(error.message(), "Expected \"b\"");
        assert_eq!(error.position(), 1);
    }
}
