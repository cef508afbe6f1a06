use crate::error::{CodeLoc, ParseError};
use crate::parser::{ParseResult, Parser};
use crate::state::State;
use std::borrow::Cow;

/// Parser that matches an exact string
pub struct LiteralParser {
    expected: Cow<'static, str>,
}

impl LiteralParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl Parser for LiteralParser {
    type Output = Cow<'static, str>;

    fn parse<'src>(&self, state: State<'src>) -> ParseResult<'src, Self::Output> {
        if state.rest().starts_with(&*self.expected) {
            // Clone is cheap here - just copies the reference for &'static str
            Ok((self.expected.clone(), state.advance(self.expected.len())))
        } else {
            let (data, position) = state.inner();
            Err(ParseError::ExpectedLiteral {
                literal: self.expected.clone(),
                loc: CodeLoc::new(data, position),
            })
        }
    }
}

/// Convenience function to create a LiteralParser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> LiteralParser {
    LiteralParser::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let (result, state) = literal("hello").run("hello").unwrap();
        assert_eq!(result.as_ref(), "hello");
        assert!(state.eos());
    }

    #[test]
    fn test_partial_match_with_remaining() {
        let (result, state) = literal("hello").run("hello world").unwrap();
        assert_eq!(result.as_ref(), "hello");
        assert_eq!(state.position(), 5);
        assert_eq!(state.peek(), Some(' '));
    }

    #[test]
    fn test_unicode_string() {
        let (result, state) = literal("こんにちは").run("こんにちは世界").unwrap();
        assert_eq!(result.as_ref(), "こんにちは");
        assert_eq!(state.peek(), Some('世'));
    }

    #[test]
    fn test_empty_literal() {
        let (result, state) = literal("").run("hello").unwrap();
        assert_eq!(result.as_ref(), "");
        assert_eq!(state.position(), 0);
    }

    #[test]
    fn test_mismatch() {
        let error = literal("hello").run("help").unwrap_err();
        assert_eq!(error.to_string(), "Expected \"hello\"");
        // Reported where matching was attempted, not at the mismatch
        assert_eq!(error.position(), 0);
    }

    #[test]
    fn test_mismatch_at_offset() {
        let error = literal("b").run_at("aaa", 2).unwrap_err();
        assert_eq!(error.position(), 2);
    }

    #[test]
    fn test_insufficient_input() {
        assert!(literal("hello").run("hel").is_err());
        assert!(literal("hello").run("").is_err());
    }

    #[test]
    fn test_case_sensitive() {
        let error = literal("hello").run("Hello").unwrap_err();
        assert_eq!(error.message(), "Expected \"hello\"");
    }

    #[test]
    fn test_owned_literal() {
        let keyword = String::from("let");
        let (result, _) = literal(keyword).run("let x").unwrap();
        assert_eq!(result, "let");
    }

    #[test]
    fn test_operators_and_symbols() {
        let test_cases = ["<-", "->", "==", "!=", "<=", ">=", "::", "&&", "||"];

        for symbol in test_cases {
            let (result, state) = literal(symbol).run(symbol).unwrap();
            assert_eq!(result.as_ref(), symbol, "Failed for symbol: {}", symbol);
            assert!(state.eos());
        }
    }
}
