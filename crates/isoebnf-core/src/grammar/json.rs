//! JSON interchange for parsed grammars.
//!
//! Nodes are internally tagged objects with a snake_case `kind` field, the
//! shape downstream grammar tooling consumes: `{ kind, position, length, value }`
//! plus `except` on terms, `count` on factors and `name` on rules.

use serde::{Deserialize, Serialize};

use super::types::{Comment, Grammar, Node, NodeValue, SyntaxRule};
use crate::Position;

impl Grammar {
    /// Parse a grammar from its JSON form.
    ///
    /// Unknown node kinds and missing fields are rejected.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<RawGrammar>(json).map(Grammar::from)
    }

    /// Render the grammar in its JSON form.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&RawGrammar::from(self))
            .expect("grammar JSON has only string keys")
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct RawGrammar {
    syntax: Vec<RawRule>,
    #[serde(default)]
    comments: Vec<Comment>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum RawRuleKind {
    SyntaxRule,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawRule {
    kind: RawRuleKind,
    name: String,
    value: Vec<RawNode>,
    length: usize,
    position: Position,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum RawNode {
    TerminalString {
        value: String,
        length: usize,
        position: Position,
    },
    MetaIdentifier {
        value: String,
        length: usize,
        position: Position,
    },
    SpecialSequence {
        value: String,
        length: usize,
        position: Position,
    },
    SingleDefinition {
        value: Vec<RawNode>,
        length: usize,
        position: Position,
    },
    SyntacticTerm {
        value: Box<RawNode>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        except: Option<Box<RawNode>>,
        length: usize,
        position: Position,
    },
    SyntacticFactor {
        count: u64,
        value: Box<RawNode>,
        length: usize,
        position: Position,
    },
    OptionalSequence {
        value: Vec<RawNode>,
        length: usize,
        position: Position,
    },
    RepeatedSequence {
        value: Vec<RawNode>,
        length: usize,
        position: Position,
    },
    GroupedSequence {
        value: Vec<RawNode>,
        length: usize,
        position: Position,
    },
}

fn raw_list(nodes: &[Node]) -> Vec<RawNode> {
    nodes.iter().map(RawNode::from).collect()
}

fn node_list(nodes: Vec<RawNode>) -> Vec<Node> {
    nodes.into_iter().map(Node::from).collect()
}

impl From<&Grammar> for RawGrammar {
    fn from(grammar: &Grammar) -> Self {
        Self {
            syntax: grammar
                .syntax()
                .iter()
                .map(|rule| RawRule {
                    kind: RawRuleKind::SyntaxRule,
                    name: rule.name.clone(),
                    value: raw_list(&rule.value),
                    length: rule.length,
                    position: rule.position,
                })
                .collect(),
            comments: grammar.comments().to_vec(),
        }
    }
}

impl From<RawGrammar> for Grammar {
    fn from(raw: RawGrammar) -> Self {
        let syntax = raw
            .syntax
            .into_iter()
            .map(|rule| SyntaxRule {
                name: rule.name,
                value: node_list(rule.value),
                position: rule.position,
                length: rule.length,
            })
            .collect();
        Grammar::new(syntax, raw.comments)
    }
}

impl From<&Node> for RawNode {
    fn from(node: &Node) -> Self {
        let position = node.position;
        let length = node.length;
        match &node.value {
            NodeValue::TerminalString(value) => Self::TerminalString {
                value: value.clone(),
                length,
                position,
            },
            NodeValue::MetaIdentifier(value) => Self::MetaIdentifier {
                value: value.clone(),
                length,
                position,
            },
            NodeValue::SpecialSequence(value) => Self::SpecialSequence {
                value: value.clone(),
                length,
                position,
            },
            NodeValue::SingleDefinition(nodes) => Self::SingleDefinition {
                value: raw_list(nodes),
                length,
                position,
            },
            NodeValue::SyntacticTerm { value, except } => Self::SyntacticTerm {
                value: Box::new(RawNode::from(&**value)),
                except: except.as_deref().map(|e| Box::new(RawNode::from(e))),
                length,
                position,
            },
            NodeValue::SyntacticFactor { count, value } => Self::SyntacticFactor {
                count: *count,
                value: Box::new(RawNode::from(&**value)),
                length,
                position,
            },
            NodeValue::OptionalSequence(nodes) => Self::OptionalSequence {
                value: raw_list(nodes),
                length,
                position,
            },
            NodeValue::RepeatedSequence(nodes) => Self::RepeatedSequence {
                value: raw_list(nodes),
                length,
                position,
            },
            NodeValue::GroupedSequence(nodes) => Self::GroupedSequence {
                value: raw_list(nodes),
                length,
                position,
            },
        }
    }
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        match raw {
            RawNode::TerminalString {
                value,
                length,
                position,
            } => Node::new(position, length, NodeValue::TerminalString(value)),
            RawNode::MetaIdentifier {
                value,
                length,
                position,
            } => Node::new(position, length, NodeValue::MetaIdentifier(value)),
            RawNode::SpecialSequence {
                value,
                length,
                position,
            } => Node::new(position, length, NodeValue::SpecialSequence(value)),
            RawNode::SingleDefinition {
                value,
                length,
                position,
            } => Node::new(
                position,
                length,
                NodeValue::SingleDefinition(node_list(value)),
            ),
            RawNode::SyntacticTerm {
                value,
                except,
                length,
                position,
            } => Node::new(
                position,
                length,
                NodeValue::SyntacticTerm {
                    value: Box::new(Node::from(*value)),
                    except: except.map(|e| Box::new(Node::from(*e))),
                },
            ),
            RawNode::SyntacticFactor {
                count,
                value,
                length,
                position,
            } => Node::new(
                position,
                length,
                NodeValue::SyntacticFactor {
                    count,
                    value: Box::new(Node::from(*value)),
                },
            ),
            RawNode::OptionalSequence {
                value,
                length,
                position,
            } => Node::new(
                position,
                length,
                NodeValue::OptionalSequence(node_list(value)),
            ),
            RawNode::RepeatedSequence {
                value,
                length,
                position,
            } => Node::new(
                position,
                length,
                NodeValue::RepeatedSequence(node_list(value)),
            ),
            RawNode::GroupedSequence {
                value,
                length,
                position,
            } => Node::new(
                position,
                length,
                NodeValue::GroupedSequence(node_list(value)),
            ),
        }
    }
}
