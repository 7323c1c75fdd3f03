use isoebnf_core::{Node, NodeValue};

use crate::Error;
use crate::diagnostics::{RelatedInfo, SyntaxError, SyntaxErrorKind};
use crate::parser::Parser;
use crate::trace::{Production, Tracer};

/// Spellings of one bracketed construct.
struct Brackets {
    production: Production,
    open: &'static [&'static [u8]],
    close: &'static [&'static [u8]],
    expected: &'static str,
    wrap: fn(Vec<Node>) -> NodeValue,
}

const OPTIONAL: Brackets = Brackets {
    production: Production::OptionalSequence,
    open: &[b"[", b"(/"],
    close: &[b"]", b"/)"],
    expected: "`]` or `/)`",
    wrap: NodeValue::OptionalSequence,
};

const REPEATED: Brackets = Brackets {
    production: Production::RepeatedSequence,
    open: &[b"{", b"(:"],
    close: &[b"}", b":)"],
    expected: "`}` or `:)`",
    wrap: NodeValue::RepeatedSequence,
};

const GROUPED: Brackets = Brackets {
    production: Production::GroupedSequence,
    open: &[b"("],
    close: &[b")"],
    expected: "`)`",
    wrap: NodeValue::GroupedSequence,
};

impl<T: Tracer> Parser<'_, '_, T> {
    /// `[ ... ]` | `(/ ... /)`
    pub(crate) fn parse_optional_sequence(&mut self) -> Result<Option<Node>, Error> {
        self.parse_bracketed(&OPTIONAL)
    }

    /// `{ ... }` | `(: ... :)`
    pub(crate) fn parse_repeated_sequence(&mut self) -> Result<Option<Node>, Error> {
        self.parse_bracketed(&REPEATED)
    }

    /// `( ... )`
    ///
    /// Must be tried after the digraph forms, which share the `(`.
    pub(crate) fn parse_grouped_sequence(&mut self) -> Result<Option<Node>, Error> {
        self.parse_bracketed(&GROUPED)
    }

    fn matching<'b>(&self, spellings: &[&'b [u8]]) -> Option<&'b [u8]> {
        spellings.iter().copied().find(|token| self.at(token))
    }

    /// Either opening spelling may pair with either closing one.
    fn parse_bracketed(&mut self, brackets: &Brackets) -> Result<Option<Node>, Error> {
        let Some(open) = self.matching(brackets.open) else {
            return Ok(None);
        };
        self.traced(brackets.production, |p| {
            let position = p.scanner.position();
            p.bump(open.len());
            p.enter_recursion(position)?;
            let opened = p.scanner.position();

            let definitions = p.parse_definitions_list()?;

            let Some(close) = p.matching(brackets.close) else {
                let kind = SyntaxErrorKind::UnclosedBracket;
                let end = p.scanner.position();
                let error = SyntaxError::with_detail(kind, brackets.expected, opened, end)
                    .related_to(RelatedInfo::new(position, opened, "opened here"));
                return Err(error.into());
            };
            p.bump(close.len());
            p.exit_recursion();

            let length = p.consumed_since(position);
            Ok(Some(Node::new(position, length, (brackets.wrap)(definitions))))
        })
    }
}
