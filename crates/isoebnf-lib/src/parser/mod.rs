//! Recursive-descent parser for ISO/IEC 14977 EBNF.
//!
//! # Architecture
//!
//! One method per production, each driving a byte [`Scanner`] directly;
//! there is no separate token stream.
//!
//! - Non-matches are `Ok(None)` and leave the scanner where it was, so the
//!   caller can try the next alternative or treat the construct as empty
//! - Malformed input is `Err` and ends the parse immediately; there is no
//!   recovery and no partial result
//! - Backtracking restores a [`Position`](isoebnf_core::Position) snapshot,
//!   which carries line bookkeeping along with the offset
//! - Whitespace and bracketed comments are skipped between tokens; comments
//!   are collected into the document, never into the tree
//!
//! Bracket nesting is bounded by [`ParseOptions::recursion_limit`].

mod core;
mod grammar;
mod invariants;


pub use core::Parser;

use isoebnf_core::{Grammar, ScanOptions, Scanner};

use crate::Result;
use crate::trace::{NoopTracer, Tracer};

/// Default bound on nested bracketed sequences.
///
/// Each level costs several frames of the recursive descent; 64 levels fit
/// a 2 MiB thread stack in unoptimized builds.
pub const DEFAULT_RECURSION_LIMIT: u32 = 64;

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub scan: ScanOptions,
    /// `None` disables the bound.
    pub recursion_limit: Option<u32>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            scan: ScanOptions::default(),
            recursion_limit: Some(DEFAULT_RECURSION_LIMIT),
        }
    }
}

/// Builder for configuring and running a parse.
pub struct GrammarBuilder<'src> {
    source: &'src [u8],
    options: ParseOptions,
}

impl<'src> GrammarBuilder<'src> {
    pub fn new<S: AsRef<[u8]> + ?Sized>(source: &'src S) -> Self {
        Self {
            source: source.as_ref(),
            options: ParseOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_recursion_limit(mut self, limit: Option<u32>) -> Self {
        self.options.recursion_limit = limit;
        self
    }

    pub fn with_vertical_tab_as_line_break(mut self, value: bool) -> Self {
        self.options.scan = self.options.scan.with_vertical_tab_as_line_break(value);
        self
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    pub fn parse(self) -> Result<Grammar> {
        self.parse_traced(&mut NoopTracer)
    }

    /// Parse while reporting every production to `tracer`.
    pub fn parse_traced<T: Tracer>(self, tracer: &mut T) -> Result<Grammar> {
        let scanner = Scanner::with_options(self.source, self.options.scan);
        Parser::new(scanner, tracer)
            .with_recursion_limit(self.options.recursion_limit)
            .parse()
    }
}

/// Parse an EBNF document with default options.
pub fn parse<S: AsRef<[u8]> + ?Sized>(source: &S) -> Result<Grammar> {
    GrammarBuilder::new(source).parse()
}

pub fn parse_with_options<S: AsRef<[u8]> + ?Sized>(
    source: &S,
    options: ParseOptions,
) -> Result<Grammar> {
    GrammarBuilder::new(source).with_options(options).parse()
}
