use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Parser combinator that matches a list of items separated by a parser
///
/// Parses zero or more items with a separator between each pair and no
/// trailing separator. Never fails: a missing first item yields an empty list
/// at the original offset. A separator is consumed only when the item after
/// it also parses.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!["a", "b", "c"]`
/// - `"1,2,"` with separator `,` → `vec!["1", "2"]`, stopping before the last `,`
pub struct SepBy<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SepBy<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SepBy { parser, separator }
    }
}

impl<P, PS> Parser for SepBy<P, PS>
where
    P: Parser,
    PS: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'src>(&self, state: State<'src>) -> ParseResult<'src, Self::Output> {
        let mut results = Vec::new();

        let mut state = match self.parser.parse(state) {
            Ok((value, next)) => {
                results.push(value);
                next
            }
            Err(_) => return Ok((results, state)),
        };

        loop {
            let Ok((_, after_separator)) = self.separator.parse(state) else {
                break;
            };
            let Ok((value, next)) = self.parser.parse(after_separator) else {
                break;
            };

            results.push(value);
            if next.position() == state.position() {
                log::trace!(
                    "zero-width separator and item at offset {} end list",
                    state.position()
                );
                break;
            }
            state = next;
        }

        Ok((results, state))
    }
}

/// Creates a parser that matches a list of items separated by the given parser
pub fn sep_by<P, PS>(parser: P, separator: PS) -> SepBy<P, PS>
where
    P: Parser,
    PS: Parser,
{
    SepBy::new(parser, separator)
}
