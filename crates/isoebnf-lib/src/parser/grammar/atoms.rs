use isoebnf_core::{Node, NodeValue};

use super::trivia::trim;
use crate::Error;
use crate::diagnostics::SyntaxErrorKind;
use crate::parser::Parser;
use crate::trace::{Production, Tracer};

fn is_printable(byte: u8) -> bool {
    (0x20..=0x7e).contains(&byte)
}

impl<T: Tracer> Parser<'_, '_, T> {
    /// `letter {letter | digit}`, fragments separated by trivia joined into one name.
    ///
    /// `a b c` reads as `abc`.
    pub(crate) fn parse_meta_identifier(&mut self) -> Result<Option<Node>, Error> {
        self.skip_trivia()?;
        self.traced(Production::MetaIdentifier, |p| {
            let position = p.scanner.position();
            if !p.scanner.current().is_some_and(|c| c.is_ascii_alphabetic()) {
                return Ok(None);
            }

            let mut name = String::new();
            while p.scanner.current().is_some_and(|c| c.is_ascii_alphanumeric()) {
                let start = p.scanner.offset();
                while p.scanner.step().current().is_some_and(|c| c.is_ascii_alphanumeric()) {}
                let fragment = p.scanner.slice(start, p.scanner.offset());
                name.extend(fragment.iter().map(|&b| char::from(b)));
                p.skip_trivia()?;
            }

            if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
                p.backtrack(Production::MetaIdentifier, position);
                return Ok(None);
            }

            let length = p.consumed_since(position);
            Ok(Some(Node::new(position, length, NodeValue::MetaIdentifier(name))))
        })
    }

    /// `'...'` or `"..."`; the interior is printable ASCII without the opening quote.
    pub(crate) fn parse_terminal_string(&mut self) -> Result<Option<Node>, Error> {
        let quote = match self.scanner.current() {
            Some(quote @ (b'\'' | b'"')) => quote,
            _ => return Ok(None),
        };
        self.traced(Production::TerminalString, |p| {
            let position = p.scanner.position();
            if p.scanner.peek() == Some(quote) {
                p.scanner.step().step();
                return Err(p.error(SyntaxErrorKind::EmptyTerminalString, position));
            }

            loop {
                match p.scanner.step().current() {
                    None => {
                        return Err(p.error(SyntaxErrorKind::UnterminatedTerminalString, position));
                    }
                    Some(c) if c == quote => break,
                    Some(c) if !is_printable(c) => {
                        let at = p.scanner.position();
                        p.scanner.advance();
                        return Err(p.error_with_detail(
                            SyntaxErrorKind::InvalidTerminalCharacter,
                            &format!("{c:#04x}"),
                            at,
                        ));
                    }
                    Some(_) => {}
                }
            }

            let interior = p.scanner.slice(position.offset + 1, p.scanner.offset());
            let value = String::from_utf8_lossy(interior).into_owned();
            p.scanner.step();

            let length = p.consumed_since(position);
            Ok(Some(Node::new(position, length, NodeValue::TerminalString(value))))
        })
    }

    /// `? ... ?`; the interior is kept trimmed and otherwise uninterpreted.
    pub(crate) fn parse_special_sequence(&mut self) -> Result<Option<Node>, Error> {
        if self.scanner.current() != Some(b'?') {
            return Ok(None);
        }
        self.traced(Production::SpecialSequence, |p| {
            let position = p.scanner.position();
            p.scanner.step();
            while p.scanner.current() != Some(b'?') {
                if p.scanner.complete() {
                    return Err(p.error(SyntaxErrorKind::UnterminatedSpecialSequence, position));
                }
                p.scanner.advance();
            }

            let interior = trim(p.scanner.slice(position.offset + 1, p.scanner.offset()));
            let value = String::from_utf8_lossy(interior).into_owned();
            p.scanner.step();

            let length = p.consumed_since(position);
            Ok(Some(Node::new(position, length, NodeValue::SpecialSequence(value))))
        })
    }
}
