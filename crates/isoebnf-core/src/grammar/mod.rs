//! Syntax tree of an EBNF document.
//!
//! This module provides the rule/node/comment types a parse produces,
//! with JSON interchange.

mod json;
mod types;


pub use types::{Comment, Grammar, Node, NodeKind, NodeValue, SyntaxRule};
