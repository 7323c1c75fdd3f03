//! Parser state and low-level operations.

use isoebnf_core::{Comment, Grammar, Position, Scanner};

use crate::Error;
use crate::diagnostics::{SyntaxError, SyntaxErrorKind};
use crate::trace::{Production, Tracer};

/// Grammar parser over a single document.
///
/// Owns the scanner; comments are accumulated here as trivia is skipped.
pub struct Parser<'src, 't, T: Tracer> {
    pub(super) scanner: Scanner<'src>,
    pub(super) comments: Vec<Comment>,
    pub(super) depth: u32,
    pub(super) tracer: &'t mut T,
    recursion_limit: Option<u32>,
}

impl<'src, 't, T: Tracer> Parser<'src, 't, T> {
    pub fn new(scanner: Scanner<'src>, tracer: &'t mut T) -> Self {
        Self {
            scanner,
            comments: Vec::new(),
            depth: 0,
            tracer,
            recursion_limit: None,
        }
    }

    pub fn with_recursion_limit(mut self, limit: Option<u32>) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn parse(mut self) -> Result<Grammar, Error> {
        match self.parse_syntax() {
            Ok(syntax) => Ok(Grammar::new(syntax, self.comments)),
            Err(err) => {
                self.tracer.trace_error(&err);
                Err(err)
            }
        }
    }

    /// Runs `production`, reporting entry and exit to the tracer.
    ///
    /// An error still reports an unmatched exit, so enters and exits pair up.
    pub(super) fn traced<R>(
        &mut self,
        production: Production,
        f: impl FnOnce(&mut Self) -> Result<Option<R>, Error>,
    ) -> Result<Option<R>, Error> {
        self.traced_by(production, Option::is_some, f)
    }

    /// Like [`traced`](Self::traced), with `matched` deciding the exit mark.
    pub(super) fn traced_by<R>(
        &mut self,
        production: Production,
        matched: impl FnOnce(&R) -> bool,
        f: impl FnOnce(&mut Self) -> Result<R, Error>,
    ) -> Result<R, Error> {
        self.tracer.trace_enter(production, self.scanner.position());
        let result = f(self);
        let hit = result.as_ref().is_ok_and(matched);
        self.tracer.trace_exit(production, hit, self.scanner.position());
        result
    }

    /// Restores the scanner to `position`.
    pub(super) fn backtrack(&mut self, production: Production, position: Position) {
        let from = self.scanner.position();
        if from != position {
            self.tracer.trace_backtrack(production, from, position);
            self.scanner.return_to(position);
        }
    }

    /// True if the next bytes spell `token`.
    pub(super) fn at(&self, token: &[u8]) -> bool {
        let offset = self.scanner.offset();
        self.scanner.slice(offset, offset + token.len()) == token
    }

    /// Steps over `count` bytes known not to contain line terminators.
    pub(super) fn bump(&mut self, count: usize) {
        for _ in 0..count {
            self.scanner.step();
        }
    }

    /// Bytes consumed since `start`.
    pub(super) fn consumed_since(&self, start: Position) -> usize {
        self.scanner.offset() - start.offset
    }

    /// Called once the opener starting at `start` has been consumed.
    pub(super) fn enter_recursion(&mut self, start: Position) -> Result<(), Error> {
        if let Some(limit) = self.recursion_limit
            && self.depth >= limit
        {
            let end = self.scanner.position();
            return Err(Error::RecursionLimitExceeded { start, end });
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Error spanning from `start` to the current position.
    pub(super) fn error(&self, kind: SyntaxErrorKind, start: Position) -> Error {
        SyntaxError::new(kind, start, self.scanner.position()).into()
    }

    pub(super) fn error_with_detail(
        &self,
        kind: SyntaxErrorKind,
        detail: &str,
        start: Position,
    ) -> Error {
        SyntaxError::with_detail(kind, detail, start, self.scanner.position()).into()
    }
}
