//! A forward-only cursor over the parser input. The cursor borrows the input for the duration
//! of a single parse and keeps track of the [Coords] of the next unread byte, so that errors
//! can be reported against a line and column.
use crate::coords::Coords;

/// Read position within a borrowed input buffer
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    /// The complete input
    input: &'a [u8],
    /// Offset of the next unread byte
    position: usize,
    /// Coordinates of the next unread byte
    coords: Coords,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor positioned at the start of the input
    pub fn new(input: &'a str) -> Self {
        Cursor {
            input: input.as_bytes(),
            position: 0,
            coords: Coords::default(),
        }
    }

    /// Look at the next byte without consuming it. `None` signals the end of input.
    #[inline]
    pub fn lookahead(&self) -> Option<u8> {
        self.input.get(self.position).copied()
    }

    /// Everything that hasn't been consumed yet
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.input[self.position..]
    }

    /// Has the cursor consumed all of the input?
    #[inline]
    pub fn is_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// The coordinates of the next unread byte
    pub fn coords(&self) -> Coords {
        self.coords
    }

    /// Consume a single byte, if there is one
    pub fn advance(&mut self) {
        if let Some(b) = self.lookahead() {
            self.coords.advance(b);
            self.position += 1;
        }
    }

    /// Consume up to `count` bytes
    pub fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    /// Skip over any run of space, tab, newline and carriage return characters
    pub fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.lookahead() {
            self.advance();
        }
    }
}
