/// A position in an immutable text input
///
/// A `State` pairs the whole input with a byte offset into it. Parsers never
/// mutate the input; advancing produces a new `State` value. The offset always
/// lies on a UTF-8 character boundary and never exceeds `input.len()`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct State<'src> {
    input: &'src str,
    index: usize,
}

impl<'src> State<'src> {
    /// State at the start of `input`
    pub fn new(input: &'src str) -> Self {
        State { input, index: 0 }
    }

    /// State at `index` in `input`
    ///
    /// `index` is a byte offset. Offsets past the end are clamped to the input
    /// length, and offsets inside a multi-byte character are moved forward to
    /// the next character boundary.
    pub fn at(input: &'src str, index: usize) -> Self {
        let mut index = index.min(input.len());
        while !input.is_char_boundary(index) {
            index += 1;
        }
        State { input, index }
    }

    /// Current byte offset
    pub fn position(&self) -> usize {
        self.index
    }

    /// The whole input, independent of the offset
    pub fn source(&self) -> &'src str {
        self.input
    }

    /// The input from the current offset to the end
    pub fn rest(&self) -> &'src str {
        &self.input[self.index..]
    }

    /// The character at the current offset, if any
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Check if the offset is at the end of the input
    pub fn eos(&self) -> bool {
        self.index == self.input.len()
    }

    /// Consume the state and return the input and the offset
    pub fn inner(self) -> (&'src str, usize) {
        (self.input, self.index)
    }

    /// Advance by `len` bytes
    ///
    /// Callers pass the length of text they matched at this offset, so the
    /// result stays on a character boundary. The offset saturates at the end.
    pub fn advance(self, len: usize) -> Self {
        State {
            input: self.input,
            index: (self.index + len).min(self.input.len()),
        }
    }

    /// Advance by one character; a state at the end stays at the end
    pub fn next(self) -> Self {
        match self.peek() {
            Some(c) => self.advance(c.len_utf8()),
            None => self,
        }
    }

    /// The input between this state and a later state `end`
    pub fn slice_to(&self, end: State<'src>) -> &'src str {
        &self.input[self.index..end.index.max(self.index)]
    }
}
