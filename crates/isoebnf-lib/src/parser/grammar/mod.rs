//! Grammar productions for ISO/IEC 14977 EBNF.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`,
//! one per production of the standard's syntax of syntax.

mod atoms;
mod expressions;
mod rules;
mod sequences;
mod trivia;
