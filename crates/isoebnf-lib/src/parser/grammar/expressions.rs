use isoebnf_core::{Node, NodeValue};

use crate::Error;
use crate::diagnostics::SyntaxErrorKind;
use crate::parser::Parser;
use crate::trace::{Production, Tracer};

impl<T: Tracer> Parser<'_, '_, T> {
    /// `single_definition {('|' | '/' | '!') single_definition}`
    ///
    /// Stops at the first alternative that yields nothing, so `a = ;` has an
    /// empty body. A `/` directly followed by `)` closes an optional sequence
    /// and is not a separator.
    pub(crate) fn parse_definitions_list(&mut self) -> Result<Vec<Node>, Error> {
        let not_empty = |definitions: &Vec<Node>| !definitions.is_empty();
        self.traced_by(Production::DefinitionsList, not_empty, |p| {
            p.skip_trivia()?;

            let mut definitions = Vec::new();
            while !p.scanner.complete() {
                let Some(definition) = p.parse_single_definition()? else {
                    break;
                };
                definitions.push(definition);
                p.skip_trivia()?;
                if !p.at_definition_separator() {
                    break;
                }
                p.scanner.step();
                p.skip_trivia()?;
            }
            Ok(definitions)
        })
    }

    fn at_definition_separator(&self) -> bool {
        match self.scanner.current() {
            Some(b'|' | b'!') => true,
            Some(b'/') => self.scanner.peek() != Some(b')'),
            _ => false,
        }
    }

    /// `term {',' term}`; a lone term is returned unwrapped.
    pub(crate) fn parse_single_definition(&mut self) -> Result<Option<Node>, Error> {
        self.traced(Production::SingleDefinition, |p| {
            let position = p.scanner.position();
            let mut terms = Vec::new();
            while let Some(term) = p.parse_term()? {
                terms.push(term);
                p.skip_trivia()?;
                if p.scanner.current() != Some(b',') {
                    break;
                }
                p.scanner.step();
                p.skip_trivia()?;
            }

            if terms.len() > 1 {
                let length = p.consumed_since(position);
                return Ok(Some(Node::new(
                    position,
                    length,
                    NodeValue::SingleDefinition(terms),
                )));
            }
            Ok(terms.pop())
        })
    }

    /// `factor ['-' exception]`; the exception may be empty.
    pub(crate) fn parse_term(&mut self) -> Result<Option<Node>, Error> {
        self.traced(Production::SyntacticTerm, |p| {
            let position = p.scanner.position();
            let Some(factor) = p.parse_factor()? else {
                return Ok(None);
            };
            p.skip_trivia()?;
            if p.scanner.current() != Some(b'-') {
                return Ok(Some(factor));
            }
            p.scanner.step();
            p.skip_trivia()?;

            let except = p.parse_factor()?;
            let length = p.consumed_since(position);
            Ok(Some(Node::new(
                position,
                length,
                NodeValue::SyntacticTerm {
                    value: Box::new(factor),
                    except: except.map(Box::new),
                },
            )))
        })
    }

    /// `[integer '*'] primary`
    ///
    /// Without a count the primary is returned unwrapped. A count over an
    /// empty primary is the empty sequence.
    pub(crate) fn parse_factor(&mut self) -> Result<Option<Node>, Error> {
        self.traced(Production::SyntacticFactor, |p| {
            let position = p.scanner.position();
            let count = p.parse_repetition_count()?;
            if count.is_some() {
                p.skip_trivia()?;
                if p.scanner.current() != Some(b'*') {
                    return Err(p.error(SyntaxErrorKind::MissingRepetitionSymbol, position));
                }
                p.scanner.step();
                p.skip_trivia()?;
            }

            let primary = p.parse_primary()?;
            match (count, primary) {
                (Some(count), Some(primary)) => {
                    let length = p.consumed_since(position);
                    Ok(Some(Node::new(
                        position,
                        length,
                        NodeValue::SyntacticFactor {
                            count,
                            value: Box::new(primary),
                        },
                    )))
                }
                (_, primary) => Ok(primary),
            }
        })
    }

    /// Leading decimal digits, if any.
    fn parse_repetition_count(&mut self) -> Result<Option<u64>, Error> {
        let position = self.scanner.position();
        let mut count: Option<u64> = None;
        while let Some(digit @ b'0'..=b'9') = self.scanner.current() {
            let next = count
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|n| n.checked_add(u64::from(digit - b'0')));
            self.scanner.step();
            match next {
                Some(n) => count = Some(n),
                None => {
                    return Err(self.error(SyntaxErrorKind::RepetitionCountOverflow, position));
                }
            }
        }
        Ok(count)
    }

    /// optional | repeated | grouped | meta-identifier | terminal | special | empty
    pub(crate) fn parse_primary(&mut self) -> Result<Option<Node>, Error> {
        self.traced(Production::SyntacticPrimary, |p| {
            if let Some(node) = p.parse_optional_sequence()? {
                return Ok(Some(node));
            }
            if let Some(node) = p.parse_repeated_sequence()? {
                return Ok(Some(node));
            }
            if let Some(node) = p.parse_grouped_sequence()? {
                return Ok(Some(node));
            }
            if let Some(node) = p.parse_meta_identifier()? {
                return Ok(Some(node));
            }
            if let Some(node) = p.parse_terminal_string()? {
                return Ok(Some(node));
            }
            p.parse_special_sequence()
        })
    }
}
