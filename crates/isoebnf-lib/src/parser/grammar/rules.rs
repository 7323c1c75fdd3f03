use isoebnf_core::{Position, SyntaxRule};

use crate::Error;
use crate::diagnostics::SyntaxErrorKind;
use crate::parser::Parser;
use crate::parser::invariants::into_name;
use crate::trace::{Production, Tracer};

impl<T: Tracer> Parser<'_, '_, T> {
    /// `{syntax_rule}` until the input is exhausted.
    pub(crate) fn parse_syntax(&mut self) -> Result<Vec<SyntaxRule>, Error> {
        let mut syntax = Vec::new();
        while !self.scanner.complete() {
            self.skip_trivia()?;
            if self.scanner.complete() {
                break;
            }
            let before = self.scanner.offset();
            let rule = self.parse_syntax_rule()?;
            self.assert_progress(before);
            syntax.push(rule);
        }
        Ok(syntax)
    }

    /// `meta_identifier '=' definitions_list ';'`
    pub(crate) fn parse_syntax_rule(&mut self) -> Result<SyntaxRule, Error> {
        self.skip_trivia()?;
        let position = self.scanner.position();
        self.traced_by(Production::SyntaxRule, |_| true, |p| p.parse_rule_body(position))
    }

    fn parse_rule_body(&mut self, position: Position) -> Result<SyntaxRule, Error> {
        let Some(identifier) = self.parse_meta_identifier()? else {
            // An unclosed `?` here is the earlier fault in scan order.
            if self.parse_special_sequence()?.is_some() {
                self.backtrack(Production::SpecialSequence, position);
            }
            return Err(self.error(SyntaxErrorKind::MissingMetaIdentifier, position));
        };
        let name = into_name(identifier);

        if self.scanner.current() != Some(b'=') {
            return Err(self.error_with_detail(
                SyntaxErrorKind::MissingDefinitionOperator,
                &name,
                position,
            ));
        }
        self.scanner.step();

        let value = self.parse_definitions_list()?;

        if self.scanner.current() != Some(b';') {
            let kind = SyntaxErrorKind::MissingTerminator;
            return Err(self.error_with_detail(kind, &name, position));
        }
        self.scanner.step();

        Ok(SyntaxRule {
            name,
            value,
            length: self.consumed_since(position),
            position,
        })
    }
}
