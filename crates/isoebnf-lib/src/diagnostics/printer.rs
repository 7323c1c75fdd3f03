//! Builder-pattern printer for rendering syntax errors.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use super::message::SyntaxError;
use crate::Error;

/// Builder for rendering a syntax error against its source.
pub struct ErrorPrinter<'e, 's> {
    error: &'e SyntaxError,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> ErrorPrinter<'e, 's> {
    pub fn new(error: &'e SyntaxError) -> Self {
        Self {
            error,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(source) = self.source else {
            return write!(w, "{}", self.error);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let error = self.error;
        let mut snippet = Snippet::source(source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(adjust_range(error.start.offset, error.end.offset, source))
                .label(&error.message),
        );

        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        for related in &error.related {
            snippet = snippet.annotation(
                AnnotationKind::Context
                    .span(adjust_range(related.start.offset, related.end.offset, source))
                    .label(&related.message),
            );
        }

        let report: Vec<Group> =
            vec![Level::ERROR.primary_title(&error.message).element(snippet)];
        write!(w, "{}", renderer.render(&report))
    }
}

/// Clamps a byte span to `source` on char boundaries; empty spans widen to one char.
fn adjust_range(start: usize, end: usize, source: &str) -> std::ops::Range<usize> {
    let limit = source.len();

    let mut start = start.min(limit);
    while !source.is_char_boundary(start) {
        start -= 1;
    }

    let mut end = end.clamp(start, limit);
    if start == end {
        end = (start + 1).min(limit);
    }
    while !source.is_char_boundary(end) {
        end += 1;
    }

    start..end
}

impl SyntaxError {
    pub fn printer<'s>(&self, source: &'s str) -> ErrorPrinter<'_, 's> {
        ErrorPrinter::new(self).source(source)
    }
}

impl Error {
    /// Renders the error against `source`; non-syntax errors print their message.
    pub fn render(&self, source: &str) -> String {
        match self {
            Self::Syntax(e) => e.printer(source).render(),
            Self::RecursionLimitExceeded { .. } => self.to_string(),
        }
    }
}
