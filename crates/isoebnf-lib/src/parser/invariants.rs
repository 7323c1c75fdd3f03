//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use isoebnf_core::{Node, NodeValue};

use super::core::Parser;
use crate::trace::Tracer;

impl<T: Tracer> Parser<'_, '_, T> {
    #[inline]
    pub(super) fn assert_progress(&self, before: usize) {
        assert!(
            self.scanner.offset() > before,
            "parser is stuck: syntax rule at offset {before} consumed no input"
        );
    }
}

/// Name carried by a node `parse_meta_identifier` produced.
pub(super) fn into_name(node: Node) -> String {
    match node.value {
        NodeValue::MetaIdentifier(name) => name,
        other => panic!(
            "broken parser invariant: expected a meta identifier but found {:?}",
            other
        ),
    }
}
