use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open`, then `content`, then `close`, and returns just the content
/// value. A failure in any of the three is returned unchanged.
///
/// Whitespace around the delimiters is not skipped; wrap them in `trim()` for
/// that.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
pub struct Between<P1, P2, P3> {
    open: P1,
    close: P2,
    content: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, close: P2, content: P3) -> Self {
        Between {
            open,
            close,
            content,
        }
    }
}

impl<P1, P2, P3> Parser for Between<P1, P2, P3>
where
    P1: Parser,
    P2: Parser,
    P3: Parser,
{
    type Output = P3::Output;

    fn parse<'src>(&self, state: State<'src>) -> ParseResult<'src, Self::Output> {
        let (_, state) = self.open.parse(state)?;
        let (value, state) = self.content.parse(state)?;
        let (_, state) = self.close.parse(state)?;

        Ok((value, state))
    }
}

/// Creates a parser that matches `content` between `open` and `close`
pub fn between<P1, P2, P3>(open: P1, close: P2, content: P3) -> Between<P1, P2, P3>
where
    P1: Parser,
    P2: Parser,
    P3: Parser,
{
    Between::new(open, close, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::digits;
    use crate::literal::literal;
    use crate::sep_by::sep_by;
    use crate::trim::TrimExt;

    #[test]
    fn test_brackets_list() {
        let parser = between(literal("["), literal("]"), sep_by(digits(), literal(",")));

        let (value, state) = parser.run("[1,2,3]").unwrap();
        assert_eq!(value, vec!["1", "2", "3"]);
        assert_eq!(state.position(), 7);
    }

    #[test]
    fn test_empty_brackets() {
        let parser = between(literal("["), literal("]"), sep_by(digits(), literal(",")));

        let (value, state) = parser.run("[]").unwrap();
        assert!(value.is_empty());
        assert!(state.eos());
    }

    #[test]
    fn test_parentheses_string() {
        let parser = between(literal("("), literal(")"), literal("hello"));

        let (value, _) = parser.run("(hello)").unwrap();
        assert_eq!(value.as_ref(), "hello");
    }

    #[test]
    fn test_missing_open_delimiter_fails() {
        let parser = between(literal("["), literal("]"), digits());

        let error = parser.run("42]").unwrap_err();
        assert_eq!(error.message(), "Expected \"[\"");
        assert_eq!(error.position(), 0);
    }

    #[test]
    fn test_missing_close_delimiter_fails() {
        let parser = between(literal("["), literal("]"), sep_by(digits(), literal(",")));

        let error = parser.run("[1,2").unwrap_err();
        assert_eq!(error.message(), "Expected \"]\"");
        assert_eq!(error.position(), 4);
    }

    #[test]
    fn test_content_failure() {
        let parser = between(literal("["), literal("]"), digits());

        let error = parser.run("[x]").unwrap_err();
        assert_eq!(error.position(), 1);
    }

    #[test]
    fn test_with_remaining_content() {
        let parser = between(literal("["), literal("]"), digits());

        let (value, state) = parser.run("[42] extra").unwrap();
        assert_eq!(value, "42");
        assert_eq!(state.peek(), Some(' '));
    }

    #[test]
    fn test_trimmed_delimiters() {
        let parser = between(literal("{").trim(), literal("}").trim(), digits());

        let (value, state) = parser.run(" {  7 } ").unwrap();
        assert_eq!(value, "7");
        assert!(state.eos());
    }
}
