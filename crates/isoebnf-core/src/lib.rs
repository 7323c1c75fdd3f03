#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for ISO/IEC 14977 EBNF documents.
//!
//! Two layers:
//! - **Scanning layer**: [`Scanner`], a byte cursor with line/column bookkeeping
//!   and [`Position`] snapshots for backtracking
//! - **Syntax layer**: the [`grammar`] module, the tree a parse produces
//!   (rules, nodes, comments) with JSON interchange

use serde::{Deserialize, Serialize};

pub mod grammar;
mod scanner;


pub use grammar::{Comment, Grammar, Node, NodeKind, NodeValue, SyntaxRule};
pub use scanner::Scanner;

// ============================================================================
// Positions
// ============================================================================

/// Snapshot of a scan position.
///
/// `character` is the 0-based column, always `offset` minus the offset at which
/// `line` began. Doubles as node metadata and as a backtracking target for
/// [`Scanner::return_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub const fn new(offset: usize, line: usize, character: usize) -> Self {
        Self {
            offset,
            line,
            character,
        }
    }

    /// Offset of the first byte of `self.line`.
    pub fn line_start(&self) -> usize {
        self.offset.saturating_sub(self.character)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.character)
    }
}

// ============================================================================
// Scan Options
// ============================================================================

/// Scanner configuration, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanOptions {
    /// Count vertical tab (0x0B) and form feed (0x0C) as line boundaries.
    ///
    /// Only affects line/column bookkeeping, never what is recognized.
    pub vertical_tab_as_line_break: bool,
}

impl ScanOptions {
    pub fn with_vertical_tab_as_line_break(mut self, value: bool) -> Self {
        self.vertical_tab_as_line_break = value;
        self
    }
}
