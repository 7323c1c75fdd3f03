//! Indented text rendering of a parsed grammar, for tests and debugging.

use std::fmt::Write;

use isoebnf_core::{Grammar, Node, NodeValue};

/// Renders rules (with their bodies) and then comments, one item per line.
pub fn dump(grammar: &Grammar) -> String {
    let mut out = String::new();
    for rule in grammar.syntax() {
        let _ = writeln!(out, "Rule {} @{}", rule.name, rule.position);
        for node in &rule.value {
            dump_node(&mut out, node, 1);
        }
    }
    for comment in grammar.comments() {
        let _ = writeln!(out, "Comment {:?} @{}", comment.value, comment.position);
    }
    out
}

fn dump_node(out: &mut String, node: &Node, depth: usize) {
    let indent = "  ".repeat(depth);
    let kind = node_label(node);
    match &node.value {
        NodeValue::TerminalString(value) | NodeValue::SpecialSequence(value) => {
            let _ = writeln!(out, "{indent}{kind} {value:?}");
        }
        NodeValue::MetaIdentifier(name) => {
            let _ = writeln!(out, "{indent}{kind} {name}");
        }
        NodeValue::SingleDefinition(nodes)
        | NodeValue::OptionalSequence(nodes)
        | NodeValue::RepeatedSequence(nodes)
        | NodeValue::GroupedSequence(nodes) => {
            let _ = writeln!(out, "{indent}{kind}");
            for child in nodes {
                dump_node(out, child, depth + 1);
            }
        }
        NodeValue::SyntacticTerm { value, except } => {
            let _ = writeln!(out, "{indent}{kind}");
            dump_node(out, value, depth + 1);
            match except {
                Some(except) => {
                    let _ = writeln!(out, "{indent}  Except");
                    dump_node(out, except, depth + 2);
                }
                None => {
                    let _ = writeln!(out, "{indent}  Except (empty)");
                }
            }
        }
        NodeValue::SyntacticFactor { count, value } => {
            let _ = writeln!(out, "{indent}{kind} {count}*");
            dump_node(out, value, depth + 1);
        }
    }
}

fn node_label(node: &Node) -> &'static str {
    match node.value {
        NodeValue::TerminalString(_) => "TerminalString",
        NodeValue::MetaIdentifier(_) => "MetaIdentifier",
        NodeValue::SpecialSequence(_) => "SpecialSequence",
        NodeValue::SingleDefinition(_) => "SingleDefinition",
        NodeValue::SyntacticTerm { .. } => "SyntacticTerm",
        NodeValue::SyntacticFactor { .. } => "SyntacticFactor",
        NodeValue::OptionalSequence(_) => "OptionalSequence",
        NodeValue::RepeatedSequence(_) => "RepeatedSequence",
        NodeValue::GroupedSequence(_) => "GroupedSequence",
    }
}
