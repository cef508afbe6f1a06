//! # parsitext - Parser Combinator Library
//!
//! Composable parsers over a text buffer, for building recursive-descent
//! parsers by plain function composition.
//!
//! Every parser implements [`Parser`]: given a [`State`] (the whole input and
//! a byte offset into it) it either returns a value together with the state to
//! resume from, or a [`ParseError`] saying where and why it failed. Larger
//! parsers are built from smaller ones with combinators, available both as
//! free functions and as methods through the `*Ext` traits.
//!
//! - **No panics while parsing**: failures are values, and `or`, `optional`,
//!   `many`, `sep_by`, `not` and `take_until` decide locally what a child
//!   failure means
//! - **Reusable graphs**: parsers hold no state between runs and can be shared
//!   across threads when built from `Send + Sync` parts
//! - **Terminating repetition**: `many`, `many1` and `sep_by` stop on an
//!   iteration that consumes nothing
//!
//! ```
//! use parsitext::{between, common::digits, literal, sep_by, MapExt, Parser, TrimExt};
//!
//! let numbers = between(
//!     literal("[").trim(),
//!     literal("]").trim(),
//!     sep_by(digits().map(|d| d.parse::<u32>().unwrap()), literal(",").trim()),
//! );
//!
//! let (values, state) = numbers.run("[1, 2, 3]").unwrap();
//! assert_eq!(values, vec![1, 2, 3]);
//! assert!(state.eos());
//! ```

pub mod between;
pub mod boxed;
pub mod chain;
pub mod choice;
pub mod common;
pub mod eof;
pub mod error;
pub mod fail;
pub mod filter;
pub mod label;
pub mod lazy;
pub mod literal;
pub mod look_ahead;
pub mod many;
pub mod many1;
pub mod map;
pub mod not;
pub mod optional;
pub mod or;
pub mod parser;
pub mod pattern;
pub mod position;
pub mod sep_by;
pub mod sequence;
pub mod state;
pub mod succeed;
pub mod take_until;
pub mod then;
pub mod trim;

pub use between::between;
pub use boxed::{BoxedExt, BoxedParser};
pub use chain::{ChainExt, chain};
pub use choice::choice;
pub use eof::end_of_input;
pub use error::{CodeLoc, ParseError};
pub use fail::fail;
pub use filter::{FilterExt, filter};
pub use label::LabelExt;
pub use lazy::lazy;
pub use literal::literal;
pub use look_ahead::{LookAheadExt, look_ahead};
pub use many::{ManyExt, many};
pub use many1::{Many1Ext, many1};
pub use map::{MapExt, map};
pub use not::{NotExt, not};
pub use optional::{OptionalExt, optional};
pub use or::{OrExt, or};
pub use parser::{ParseResult, Parser};
pub use pattern::{PatternError, PatternParser, pattern};
pub use position::{Position, PositionExt, Span, position};
pub use sep_by::sep_by;
pub use sequence::sequence;
pub use state::State;
pub use succeed::succeed;
pub use take_until::take_until;
pub use then::ThenExt;
pub use trim::{TrimExt, trim};
