use super::compile;
use crate::pattern::PatternParser;
use once_cell::sync::Lazy;

static ALPHANUMERIC: Lazy<PatternParser> = Lazy::new(|| compile("[a-zA-Z0-9]+"));

/// Parser that matches one or more ASCII letters or digits
pub fn alphanumeric() -> PatternParser {
    (*ALPHANUMERIC).clone()
}
