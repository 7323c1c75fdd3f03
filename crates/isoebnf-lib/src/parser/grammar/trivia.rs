use isoebnf_core::Comment;

use crate::Error;
use crate::diagnostics::SyntaxErrorKind;
use crate::parser::Parser;
use crate::trace::Tracer;

/// Space, HT, LF, VT, FF, CR.
pub(crate) fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | 0x09..=0x0d)
}

pub(crate) fn trim(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| !is_whitespace(b));
    let end = bytes.iter().rposition(|&b| !is_whitespace(b));
    match (start, end) {
        (Some(start), Some(end)) => &bytes[start..=end],
        _ => &[],
    }
}

impl<T: Tracer> Parser<'_, '_, T> {
    /// Skips whitespace and bracketed comments until neither is next.
    ///
    /// Returns whether anything was consumed.
    pub(crate) fn skip_trivia(&mut self) -> Result<bool, Error> {
        let start = self.scanner.offset();
        loop {
            while self.scanner.current().is_some_and(is_whitespace) {
                self.scanner.advance();
            }
            if !self.parse_comment()? {
                break;
            }
        }
        Ok(self.scanner.offset() != start)
    }

    /// `(* ... *)`, nesting allowed.
    ///
    /// `(*)` is rejected at every depth: the `*` cannot both open and close.
    fn parse_comment(&mut self) -> Result<bool, Error> {
        if !self.at(b"(*") {
            return Ok(false);
        }
        let position = self.scanner.position();
        if self.at(b"(*)") {
            self.bump(3);
            return Err(self.error(SyntaxErrorKind::InvalidEmptyComment, position));
        }
        self.bump(2);

        let content_start = self.scanner.offset();
        let mut content_end = content_start;
        let mut depth = 1usize;
        while depth > 0 {
            if self.scanner.complete() {
                return Err(self.error(SyntaxErrorKind::UnterminatedComment, position));
            }
            if self.at(b"*)") {
                content_end = self.scanner.offset();
                self.bump(2);
                depth -= 1;
            } else if self.at(b"(*)") {
                let nested = self.scanner.position();
                self.bump(3);
                return Err(self.error(SyntaxErrorKind::InvalidEmptyComment, nested));
            } else if self.at(b"(*") {
                self.bump(2);
                depth += 1;
            } else {
                self.scanner.advance();
            }
        }

        let text = trim(self.scanner.slice(content_start, content_end));
        let comment = Comment {
            value: String::from_utf8_lossy(text).into_owned(),
            position,
        };
        self.tracer.trace_comment(&comment);
        self.comments.push(comment);
        Ok(true)
    }
}
