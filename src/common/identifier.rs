use super::compile;
use crate::pattern::PatternParser;
use once_cell::sync::Lazy;

static IDENTIFIER: Lazy<PatternParser> = Lazy::new(|| compile("[a-zA-Z_][a-zA-Z0-9_]*"));

/// Parser that matches an identifier: a letter or underscore followed by
/// letters, digits and underscores
pub fn identifier() -> PatternParser {
    (*IDENTIFIER).clone()
}
