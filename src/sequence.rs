use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Runs every parser in order and collects their values
///
/// Each parser starts where the previous one stopped. The first failure is
/// returned and the values collected so far are dropped.
pub struct Sequence<P> {
    parsers: Vec<P>,
}

impl<P> Sequence<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Sequence { parsers }
    }
}

impl<P> Parser for Sequence<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'src>(&self, mut state: State<'src>) -> ParseResult<'src, Self::Output> {
        let mut results = Vec::with_capacity(self.parsers.len());

        for parser in &self.parsers {
            let (value, next) = parser.parse(state)?;
            results.push(value);
            state = next;
        }

        Ok((results, state))
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence<P>(parsers: Vec<P>) -> Sequence<P>
where
    P: Parser,
{
    Sequence::new(parsers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxed::BoxedExt;
    use crate::common::{digits, identifier};
    use crate::literal::literal;
    use crate::map::MapExt;

    #[test]
    fn test_sequence_collects_in_order() {
        let parser = sequence(vec![literal("a"), literal("b"), literal("c")]);

        let (values, state) = parser.run("abcd").unwrap();
        assert_eq!(values, vec!["a", "b", "c"]);
        assert_eq!(state.position(), 3);
    }

    #[test]
    fn test_sequence_mixed_boxed() {
        let parser = sequence(vec![
            identifier().boxed(),
            literal("=").map(|s| s.into_owned()).boxed(),
            digits().boxed(),
        ]);

        let (values, state) = parser.run("x=10").unwrap();
        assert_eq!(values, vec!["x", "=", "10"]);
        assert!(state.eos());
    }

    #[test]
    fn test_sequence_failure_propagates() {
        let parser = sequence(vec![literal("a"), literal("b"), literal("c")]);

        let error = parser.run("abx").unwrap_err();
        assert_eq!(error.message(), "Expected \"c\"");
        assert_eq!(error.position(), 2);
    }

    #[test]
    fn test_empty_sequence() {
        let parser = sequence(Vec::<crate::literal::LiteralParser>::new());

        let (values, state) = parser.run("abc").unwrap();
        assert!(values.is_empty());
        assert_eq!(state.position(), 0);
    }
}
