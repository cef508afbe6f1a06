use super::compile;
use crate::pattern::PatternParser;
use once_cell::sync::Lazy;

static LETTERS: Lazy<PatternParser> = Lazy::new(|| compile("[a-zA-Z]+"));

/// Parser that matches one or more ASCII letters
pub fn letters() -> PatternParser {
    (*LETTERS).clone()
}
