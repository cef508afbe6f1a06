use crate::parser::{ParseResult, Parser};
use crate::state::State;
use std::fmt;
use std::sync::Arc;

/// A type-erased parser behind shared ownership
///
/// Cloning is a reference count increment, so one sub-parser can be reused in
/// several places of a grammar. Boxing also gives parsers of different
/// concrete types a common type, as needed by [`choice`](crate::choice) and
/// [`sequence`](crate::sequence) and by recursive grammars.
pub struct BoxedParser<T> {
    parser: Arc<dyn Parser<Output = T> + Send + Sync>,
}

impl<T> BoxedParser<T> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<Output = T> + Send + Sync + 'static,
    {
        BoxedParser {
            parser: Arc::new(parser),
        }
    }
}

impl<T> Clone for BoxedParser<T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Arc::clone(&self.parser),
        }
    }
}

impl<T> fmt::Debug for BoxedParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedParser")
            .field("parser", &"<parser>")
            .finish()
    }
}

impl<T> Parser for BoxedParser<T> {
    type Output = T;

    fn parse<'src>(&self, state: State<'src>) -> ParseResult<'src, Self::Output> {
        self.parser.parse(state)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt: Parser + Sized {
    fn boxed(self) -> BoxedParser<Self::Output>
    where
        Self: Send + Sync + 'static,
    {
        BoxedParser::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<P> BoxedExt for P where P: Parser {}
