//! Tracing infrastructure for debugging parses.
//!
//! # Design: Zero-Cost Abstraction
//!
//! The parser is generic over [`Tracer`]. With [`NoopTracer`] every hook is an
//! `#[inline(always)]` empty function and the calls compile away, so the
//! parser keeps no tracing state of its own.
//!
//! [`PrintTracer`] records an indented log of productions entered and left,
//! backtracks, comments and the terminating error.

use isoebnf_core::{Comment, Position};

use crate::Error;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Rules and bracketed sequences only.
    #[default]
    Default,
    /// Every production.
    Verbose,
}

/// Grammar productions, as reported to a [`Tracer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Production {
    SyntaxRule,
    DefinitionsList,
    SingleDefinition,
    SyntacticTerm,
    SyntacticFactor,
    SyntacticPrimary,
    OptionalSequence,
    RepeatedSequence,
    GroupedSequence,
    MetaIdentifier,
    TerminalString,
    SpecialSequence,
}

impl Production {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SyntaxRule => "syntax_rule",
            Self::DefinitionsList => "definitions_list",
            Self::SingleDefinition => "single_definition",
            Self::SyntacticTerm => "syntactic_term",
            Self::SyntacticFactor => "syntactic_factor",
            Self::SyntacticPrimary => "syntactic_primary",
            Self::OptionalSequence => "optional_sequence",
            Self::RepeatedSequence => "repeated_sequence",
            Self::GroupedSequence => "grouped_sequence",
            Self::MetaIdentifier => "meta_identifier",
            Self::TerminalString => "terminal_string",
            Self::SpecialSequence => "special_sequence",
        }
    }

    /// Rules and bracketed sequences: the productions that shape the tree.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::SyntaxRule
                | Self::OptionalSequence
                | Self::RepeatedSequence
                | Self::GroupedSequence
        )
    }
}

impl std::fmt::Display for Production {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracer trait for parser instrumentation.
///
/// - `trace_enter` - before a production starts scanning
/// - `trace_exit` - after it returns, `matched` telling whether it produced anything
/// - `trace_backtrack` - when the scanner is restored to an earlier position
/// - `trace_comment` - when a bracketed comment is collected
/// - `trace_error` - once, with the error that ends the parse
pub trait Tracer {
    fn trace_enter(&mut self, production: Production, position: Position);

    fn trace_exit(&mut self, production: Production, matched: bool, position: Position);

    fn trace_backtrack(&mut self, production: Production, from: Position, to: Position);

    fn trace_comment(&mut self, comment: &Comment);

    fn trace_error(&mut self, error: &Error);
}

/// No-op tracer that gets optimized away.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_enter(&mut self, _production: Production, _position: Position) {}

    #[inline(always)]
    fn trace_exit(&mut self, _production: Production, _matched: bool, _position: Position) {}

    #[inline(always)]
    fn trace_backtrack(&mut self, _production: Production, _from: Position, _to: Position) {}

    #[inline(always)]
    fn trace_comment(&mut self, _comment: &Comment) {}

    #[inline(always)]
    fn trace_error(&mut self, _error: &Error) {}
}

/// Symbols used in trace lines.
mod symbol {
    pub const MATCHED: &str = "●";
    pub const UNMATCHED: &str = "○";
    pub const BACKTRACK: &str = "↩";
    pub const COMMENT: &str = "#";
    pub const ERROR: &str = "✗";
}

/// Tracer that collects an indented execution log.
#[derive(Debug, Default)]
pub struct PrintTracer {
    verbosity: Verbosity,
    depth: usize,
    lines: Vec<String>,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            depth: 0,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The collected log, one line per event.
    pub fn finish(self) -> String {
        let mut out = self.lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }

    /// Print the log to stderr.
    pub fn print(&self) {
        for line in &self.lines {
            eprintln!("{line}");
        }
    }

    fn shows(&self, production: Production) -> bool {
        self.verbosity == Verbosity::Verbose || production.is_structural()
    }

    fn push(&mut self, content: String) {
        let line = format!("{:indent$}{content}", "", indent = self.depth * 2);
        self.lines.push(line);
    }
}

impl Tracer for PrintTracer {
    fn trace_enter(&mut self, production: Production, position: Position) {
        if !self.shows(production) {
            return;
        }
        self.push(format!("{production} @{position}"));
        self.depth += 1;
    }

    fn trace_exit(&mut self, production: Production, matched: bool, position: Position) {
        if !self.shows(production) {
            return;
        }
        self.depth = self.depth.saturating_sub(1);
        let mark = if matched {
            symbol::MATCHED
        } else {
            symbol::UNMATCHED
        };
        self.push(format!("{mark} {production} @{position}"));
    }

    fn trace_backtrack(&mut self, production: Production, from: Position, to: Position) {
        if self.verbosity == Verbosity::Default {
            return;
        }
        self.push(format!("{} {production} @{from} -> @{to}", symbol::BACKTRACK));
    }

    fn trace_comment(&mut self, comment: &Comment) {
        self.push(format!(
            "{} @{} {:?}",
            symbol::COMMENT,
            comment.position,
            comment.value
        ));
    }

    fn trace_error(&mut self, error: &Error) {
        self.push(format!("{} {error}", symbol::ERROR));
    }
}
