use crate::error::{CodeLoc, ParseError};
use crate::parser::{ParseResult, Parser};
use crate::state::State;
use regex::Regex;
use regex_automata::{Anchored, Input, meta};
use std::sync::Arc;

/// Error returned for pattern source text that does not compile
pub type PatternError = meta::BuildError;

/// Parser that matches a regular expression anchored at the current offset
///
/// The search runs over the whole input with its start pinned to the current
/// offset, so the pattern only matches text beginning exactly there. Text
/// before the offset stays visible to assertions: `\b` and `^` see the
/// characters that precede the offset.
#[derive(Debug, Clone)]
pub struct PatternParser {
    regex: meta::Regex,
    /// Pattern text as written by the caller, used in failure messages
    source: Arc<str>,
}

impl PatternParser {
    /// Compile a parser from pattern source text
    pub fn new(source: &str) -> Result<Self, PatternError> {
        let regex = meta::Regex::new(source)?;
        Ok(PatternParser {
            regex,
            source: Arc::from(source),
        })
    }

    /// Build a parser from the source text of an already compiled expression
    ///
    /// Options set through `RegexBuilder` are not carried over; use inline
    /// flags such as `(?i)` instead.
    pub fn from_regex(regex: &Regex) -> Result<Self, PatternError> {
        Self::new(regex.as_str())
    }

    /// The pattern text as given by the caller
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Parser for PatternParser {
    type Output = String;

    fn parse<'src>(&self, state: State<'src>) -> ParseResult<'src, Self::Output> {
        let (data, position) = state.inner();
        let input = Input::new(data).range(position..).anchored(Anchored::Yes);

        match self.regex.search(&input) {
            Some(m) => Ok((data[m.range()].to_owned(), state.advance(m.len()))),
            None => Err(ParseError::ExpectedPattern {
                pattern: self.source.clone(),
                loc: CodeLoc::new(data, position),
            }),
        }
    }
}

/// Convenience function to create a PatternParser from pattern source text
pub fn pattern(source: &str) -> Result<PatternParser, PatternError> {
    PatternParser::new(source)
}
