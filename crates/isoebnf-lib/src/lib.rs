//! isoebnf: parser for ISO/IEC 14977 Extended Backus-Naur Form.
//!
//! # Example
//!
//! ```
//! use isoebnf_lib::{dump, parse};
//!
//! let source = r#"
//!     (* digits *)
//!     digit = "0" | "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9";
//!     number = digit, {digit};
//! "#;
//!
//! let grammar = parse(source).expect("valid grammar");
//! assert_eq!(grammar.syntax().len(), 2);
//! eprintln!("{}", dump(&grammar));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod dump;
pub mod parser;
pub mod trace;


pub use diagnostics::{ErrorPrinter, RelatedInfo, SyntaxError, SyntaxErrorKind};
pub use dump::dump;
pub use isoebnf_core::{
    Comment, Grammar, Node, NodeKind, NodeValue, Position, ScanOptions, SyntaxRule,
};
pub use parser::{
    DEFAULT_RECURSION_LIMIT, GrammarBuilder, ParseOptions, parse, parse_with_options,
};
pub use trace::{NoopTracer, PrintTracer, Production, Tracer, Verbosity};

/// Errors that halt a parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Malformed input; the first one in scan order.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// Bracketed constructs nested deeper than the configured limit.
    ///
    /// The span covers the opening bracket that crossed the limit.
    #[error("recursion limit exceeded at {start}, {end}")]
    RecursionLimitExceeded { start: Position, end: Position },
}

impl Error {
    /// Structural error details, if this is a syntax error.
    pub fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::RecursionLimitExceeded { .. } => None,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Self::Syntax(e) => e.start,
            Self::RecursionLimitExceeded { start, .. } => *start,
        }
    }
}

/// Result type for parse operations.
pub type Result<T> = std::result::Result<T, Error>;
