//! Syntax tree type definitions.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::Position;

/// Node kinds, named as in ISO/IEC 14977.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    TerminalString,
    MetaIdentifier,
    SpecialSequence,
    SyntaxRule,
    SingleDefinition,
    SyntacticTerm,
    SyntacticFactor,
    OptionalSequence,
    RepeatedSequence,
    GroupedSequence,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TerminalString => "terminal_string",
            Self::MetaIdentifier => "meta_identifier",
            Self::SpecialSequence => "special_sequence",
            Self::SyntaxRule => "syntax_rule",
            Self::SingleDefinition => "single_definition",
            Self::SyntacticTerm => "syntactic_term",
            Self::SyntacticFactor => "syntactic_factor",
            Self::OptionalSequence => "optional_sequence",
            Self::RepeatedSequence => "repeated_sequence",
            Self::GroupedSequence => "grouped_sequence",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in a rule body.
///
/// `position` is where the construct starts, `length` the number of bytes
/// consumed for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub position: Position,
    pub length: usize,
    pub value: NodeValue,
}

/// Kind-specific payload of a [`Node`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeValue {
    /// Quoted literal, without the quotes.
    TerminalString(String),
    /// Rule reference; word fragments joined without the trivia between them.
    MetaIdentifier(String),
    /// `?...?` body, trimmed.
    SpecialSequence(String),
    /// Two or more comma-separated terms.
    SingleDefinition(Vec<Node>),
    /// `value - except`. `except` is `None` when the exception is empty.
    SyntacticTerm {
        value: Box<Node>,
        except: Option<Box<Node>>,
    },
    /// `count * value`.
    SyntacticFactor { count: u64, value: Box<Node> },
    OptionalSequence(Vec<Node>),
    RepeatedSequence(Vec<Node>),
    GroupedSequence(Vec<Node>),
}

impl Node {
    pub fn new(position: Position, length: usize, value: NodeValue) -> Self {
        Self {
            position,
            length,
            value,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match &self.value {
            NodeValue::TerminalString(_) => NodeKind::TerminalString,
            NodeValue::MetaIdentifier(_) => NodeKind::MetaIdentifier,
            NodeValue::SpecialSequence(_) => NodeKind::SpecialSequence,
            NodeValue::SingleDefinition(_) => NodeKind::SingleDefinition,
            NodeValue::SyntacticTerm { .. } => NodeKind::SyntacticTerm,
            NodeValue::SyntacticFactor { .. } => NodeKind::SyntacticFactor,
            NodeValue::OptionalSequence(_) => NodeKind::OptionalSequence,
            NodeValue::RepeatedSequence(_) => NodeKind::RepeatedSequence,
            NodeValue::GroupedSequence(_) => NodeKind::GroupedSequence,
        }
    }

    /// Offset one past the last consumed byte.
    pub fn end(&self) -> usize {
        self.position.offset + self.length
    }

    /// Text of terminal, identifier and special-sequence nodes.
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            NodeValue::TerminalString(s)
            | NodeValue::MetaIdentifier(s)
            | NodeValue::SpecialSequence(s) => Some(s),
            _ => None,
        }
    }

    /// Direct children in source order; a term's exception follows its value.
    pub fn children(&self) -> Vec<&Node> {
        match &self.value {
            NodeValue::TerminalString(_)
            | NodeValue::MetaIdentifier(_)
            | NodeValue::SpecialSequence(_) => Vec::new(),
            NodeValue::SingleDefinition(nodes)
            | NodeValue::OptionalSequence(nodes)
            | NodeValue::RepeatedSequence(nodes)
            | NodeValue::GroupedSequence(nodes) => nodes.iter().collect(),
            NodeValue::SyntacticTerm { value, except } => {
                std::iter::once(&**value).chain(except.as_deref()).collect()
            }
            NodeValue::SyntacticFactor { value, .. } => vec![&**value],
        }
    }

    /// Pre-order traversal of this node and everything below it.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}

/// `name = definitions ;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxRule {
    pub name: String,
    /// One node per alternative; empty for the empty sequence.
    pub value: Vec<Node>,
    pub position: Position,
    pub length: usize,
}

impl SyntaxRule {
    pub fn kind(&self) -> NodeKind {
        NodeKind::SyntaxRule
    }

    pub fn end(&self) -> usize {
        self.position.offset + self.length
    }

    /// Pre-order traversal of every node in the rule body.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        for node in &self.value {
            node.walk(visit);
        }
    }
}

/// Bracketed comment, trimmed. `position` is the opening `(`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub value: String,
    pub position: Position,
}

/// A parsed EBNF document: rules and comments, both in source order.
///
/// Rules sharing a name are kept side by side, never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grammar {
    syntax: Vec<SyntaxRule>,
    comments: Vec<Comment>,
}

impl Grammar {
    pub fn new(syntax: Vec<SyntaxRule>, comments: Vec<Comment>) -> Self {
        Self { syntax, comments }
    }

    pub fn syntax(&self) -> &[SyntaxRule] {
        &self.syntax
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn into_parts(self) -> (Vec<SyntaxRule>, Vec<Comment>) {
        (self.syntax, self.comments)
    }

    /// First rule defined under `name`.
    pub fn rule(&self, name: &str) -> Option<&SyntaxRule> {
        self.syntax.iter().find(|r| r.name == name)
    }

    /// Every rule defined under `name`, in source order.
    pub fn rules_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a SyntaxRule> {
        self.syntax.iter().filter(move |r| r.name == name)
    }

    /// Distinct rule names in order of first definition.
    pub fn rule_names(&self) -> IndexSet<&str> {
        self.syntax.iter().map(|r| r.name.as_str()).collect()
    }

    /// Rules grouped by name, groups in order of first definition.
    pub fn rules_by_name(&self) -> IndexMap<&str, Vec<&SyntaxRule>> {
        let mut map: IndexMap<&str, Vec<&SyntaxRule>> = IndexMap::new();
        for rule in &self.syntax {
            map.entry(rule.name.as_str()).or_default().push(rule);
        }
        map
    }
}
