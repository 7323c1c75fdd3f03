//! Byte cursor over an EBNF source.

use crate::{Position, ScanOptions};

/// Mutable cursor over an immutable byte sequence.
///
/// Line tracking changes only through [`Scanner::add_line`] (and
/// [`Scanner::advance`], which calls it), never as a side effect of
/// [`Scanner::step`].
#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    source: &'src [u8],
    options: ScanOptions,
    offset: usize,
    line: usize,
    line_start: usize,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src [u8]) -> Self {
        Self::with_options(source, ScanOptions::default())
    }

    pub fn with_options(source: &'src [u8], options: ScanOptions) -> Self {
        Self {
            source,
            options,
            offset: 0,
            line: 0,
            line_start: 0,
        }
    }

    pub fn source(&self) -> &'src [u8] {
        self.source
    }

    pub fn options(&self) -> ScanOptions {
        self.options
    }

    /// Byte under the cursor, `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.source.get(self.offset).copied()
    }

    /// Byte after the cursor, `None` past end of input.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.source.get(self.offset + 1).copied()
    }

    /// Moves one byte forward. Chainable: `scanner.step().current()`.
    #[inline]
    pub fn step(&mut self) -> &mut Self {
        if self.offset < self.source.len() {
            self.offset += 1;
        }
        self
    }

    /// Moves one byte forward over a line terminator and starts a new line.
    pub fn add_line(&mut self) {
        self.step();
        self.line += 1;
        self.line_start = self.offset;
    }

    /// Consumes one byte, keeping line bookkeeping in sync.
    ///
    /// CR LF is consumed as a pair and counts as one boundary; a lone CR or LF
    /// counts as one each. VT and FF count only when
    /// [`ScanOptions::vertical_tab_as_line_break`] is set.
    pub fn advance(&mut self) {
        match self.current() {
            Some(b'\r') => {
                if self.peek() == Some(b'\n') {
                    self.step();
                }
                self.add_line();
            }
            Some(b'\n') => self.add_line(),
            Some(0x0b | 0x0c) if self.options.vertical_tab_as_line_break => self.add_line(),
            Some(_) => {
                self.step();
            }
            None => {}
        }
    }

    pub fn complete(&self) -> bool {
        self.offset >= self.source.len()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn position(&self) -> Position {
        Position {
            offset: self.offset,
            line: self.line,
            character: self.offset - self.line_start,
        }
    }

    /// Restores offset, line and line start from an earlier snapshot.
    pub fn return_to(&mut self, position: Position) {
        self.offset = position.offset;
        self.line = position.line;
        self.line_start = position.line_start();
    }

    /// Read-only view of `[start, stop)`; empty when out of range.
    pub fn slice(&self, start: usize, stop: usize) -> &'src [u8] {
        self.source.get(start..stop).unwrap_or(&[])
    }
}
