use crate::common::whitespace;
use crate::parser::{ParseResult, Parser};
use crate::pattern::PatternParser;
use crate::state::State;

/// Parser combinator that skips whitespace before and after the given parser
pub struct Trim<P> {
    parser: P,
    whitespace: PatternParser,
}

impl<P> Trim<P> {
    pub fn new(parser: P) -> Self {
        Trim {
            parser,
            whitespace: whitespace(),
        }
    }

    fn skip_whitespace<'src>(&self, state: State<'src>) -> State<'src> {
        // `\s*` matches the empty string, so this cannot fail
        match self.whitespace.parse(state) {
            Ok((_, state)) => state,
            Err(_) => state,
        }
    }
}

impl<P> Parser for Trim<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn parse<'src>(&self, state: State<'src>) -> ParseResult<'src, Self::Output> {
        let state = self.skip_whitespace(state);
        let (value, state) = self.parser.parse(state)?;
        Ok((value, self.skip_whitespace(state)))
    }
}

/// Convenience function to create a Trim parser
pub fn trim<P>(parser: P) -> Trim<P>
where
    P: Parser,
{
    Trim::new(parser)
}

/// Extension trait to add .trim() method support for parsers
pub trait TrimExt: Parser + Sized {
    fn trim(self) -> Trim<Self> {
        Trim::new(self)
    }
}

/// Implement TrimExt for all parsers
impl<P> TrimExt for P where P: Parser {}
