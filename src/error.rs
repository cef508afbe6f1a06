use std::borrow::Cow;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    pub byte_offset: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CodeLoc<'src> {
    code: &'src str,
    /// The byte offset in `code` where the failure is reported
    loc: usize,
}

impl<'src> CodeLoc<'src> {
    pub fn new(code: &'src str, loc: usize) -> Self {
        Self { code, loc }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    pub fn code(&self) -> &'src str {
        self.code
    }

    /// Line number (1-based) and byte offset within that line
    ///
    /// Byte offset is reported instead of a column because a column depends
    /// on tab width and how the terminal renders wide characters.
    pub fn readable_position(&self) -> ReadablePosition {
        let before = &self.code[..self.loc.min(self.code.len())];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);

        ReadablePosition {
            line,
            byte_offset: self.loc - line_start,
        }
    }

    /// Up to 2 lines of context before and after the failure line, with a
    /// pointer under the failure position
    pub fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let first = pos.line.saturating_sub(2);
        let last = pos.line + 2;
        let mut lines = Vec::new();

        // split('\n') keeps a trailing empty line, so a failure just past a
        // final newline still gets a line to point at
        for (i, content) in self.code.split('\n').enumerate() {
            let current_line = i + 1;
            if current_line < first || current_line > last {
                continue;
            }

            let prefix = if current_line == pos.line {
                format!("  > {} | ", current_line)
            } else {
                format!("    {} | ", current_line)
            };
            lines.push(format!("{}{}", prefix, content));

            if current_line == pos.line {
                let pointer_offset = prefix.len() + pos.byte_offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

/// Why a parser failed, and where
///
/// `Display` renders only the diagnostic message. Use [`ParseError::report`]
/// for a rendering with line numbers and source context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError<'src> {
    #[error("Expected \"{literal}\"")]
    ExpectedLiteral {
        literal: Cow<'static, str>,
        loc: CodeLoc<'src>,
    },
    #[error("Expected pattern {pattern}")]
    ExpectedPattern {
        /// Source text of the pattern as given by the caller
        pattern: Arc<str>,
        loc: CodeLoc<'src>,
    },
    #[error("Expected end of input")]
    ExpectedEndOfInput(CodeLoc<'src>),
    #[error("Expected at least one match")]
    ExpectedAtLeastOne(CodeLoc<'src>),
    #[error("Unexpected match")]
    UnexpectedMatch(CodeLoc<'src>),
    #[error("No alternatives to choose from")]
    NoAlternatives(CodeLoc<'src>),
    #[error("{message}")]
    Message {
        message: Cow<'static, str>,
        loc: CodeLoc<'src>,
    },
}

impl<'src> ParseError<'src> {
    /// A failure carrying a free-form message
    pub fn message_at(message: impl Into<Cow<'static, str>>, loc: CodeLoc<'src>) -> Self {
        ParseError::Message {
            message: message.into(),
            loc,
        }
    }

    pub fn loc(&self) -> CodeLoc<'src> {
        match self {
            ParseError::ExpectedLiteral { loc, .. } => *loc,
            ParseError::ExpectedPattern { loc, .. } => *loc,
            ParseError::ExpectedEndOfInput(loc) => *loc,
            ParseError::ExpectedAtLeastOne(loc) => *loc,
            ParseError::UnexpectedMatch(loc) => *loc,
            ParseError::NoAlternatives(loc) => *loc,
            ParseError::Message { loc, .. } => *loc,
        }
    }

    /// Returns the offset where this failure is reported
    pub fn position(&self) -> usize {
        self.loc().position()
    }

    /// The plain diagnostic message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Multi-line rendering with line number and surrounding source
    pub fn report(&self) -> String {
        let loc = self.loc();
        let pos = loc.readable_position();
        let mut out = format!(
            "Syntax error at line {}, byte offset {}: {}\n\n",
            pos.line, pos.byte_offset, self
        );
        for line in loc.context_lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}
