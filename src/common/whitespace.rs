use super::compile;
use crate::pattern::PatternParser;
use once_cell::sync::Lazy;

static WHITESPACE: Lazy<PatternParser> = Lazy::new(|| compile(r"\s*"));

/// Parser that matches a run of Unicode whitespace, possibly empty
pub fn whitespace() -> PatternParser {
    (*WHITESPACE).clone()
}
