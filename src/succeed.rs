use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Parser that always succeeds without consuming input and returns a clone of
/// its value
pub struct Succeed<T> {
    value: T,
}

impl<T> Succeed<T> {
    pub fn new(value: T) -> Self {
        Succeed { value }
    }
}

impl<T> Parser for Succeed<T>
where
    T: Clone,
{
    type Output = T;

    fn parse<'src>(&self, state: State<'src>) -> ParseResult<'src, Self::Output> {
        Ok((self.value.clone(), state))
    }
}

/// Convenience function to create a Succeed parser
pub fn succeed<T: Clone>(value: T) -> Succeed<T> {
    Succeed::new(value)
}
