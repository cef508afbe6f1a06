//! Ready-made leaf parsers built on [`PatternParser`]
//!
//! Each expression is compiled once per process and shared; calling one of
//! these functions clones a handle to the compiled expression.

pub mod alphanumeric;
pub mod digits;
pub mod identifier;
pub mod letters;
pub mod whitespace;

pub use alphanumeric::alphanumeric;
pub use digits::digits;
pub use identifier::identifier;
pub use letters::letters;
pub use whitespace::whitespace;

use crate::pattern::PatternParser;

pub(crate) fn compile(source: &str) -> PatternParser {
    PatternParser::new(source).expect("built-in pattern init failed")
}
