use super::compile;
use crate::pattern::PatternParser;
use once_cell::sync::Lazy;

static DIGITS: Lazy<PatternParser> = Lazy::new(|| compile("[0-9]+"));

/// Parser that matches one or more ASCII digits
pub fn digits() -> PatternParser {
    (*DIGITS).clone()
}
