use serde::Serialize;

use isoebnf_core::Position;

/// Fatal conditions the parser can raise.
///
/// Each kind is raised on its own; the parser stops at the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyntaxErrorKind {
    // Trivia
    InvalidEmptyComment,
    UnterminatedComment,

    // Lexical productions
    UnterminatedSpecialSequence,
    UnterminatedTerminalString,
    InvalidTerminalCharacter,
    EmptyTerminalString,

    // Rule structure
    MissingMetaIdentifier,
    MissingDefinitionOperator,
    MissingTerminator,

    // Bodies
    UnclosedBracket,
    MissingRepetitionSymbol,
    RepetitionCountOverflow,
}

impl SyntaxErrorKind {
    /// Base message, used when no detail is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::InvalidEmptyComment => "`(*)` is not a valid comment",
            Self::UnterminatedComment => "unterminated comment",

            Self::UnterminatedSpecialSequence => "unterminated special sequence",
            Self::UnterminatedTerminalString => "unterminated terminal string",
            Self::InvalidTerminalCharacter => "invalid character in terminal string",
            Self::EmptyTerminalString => "empty terminal string",

            Self::MissingMetaIdentifier => "expected a rule name",
            Self::MissingDefinitionOperator => "expected `=`",
            Self::MissingTerminator => "expected `;`",

            Self::UnclosedBracket => "unclosed bracket",
            Self::MissingRepetitionSymbol => "expected `*` after repetition count",
            Self::RepetitionCountOverflow => "repetition count is too large",
        }
    }

    /// Template for detailed messages. Contains a `{}` placeholder for the detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::MissingDefinitionOperator => "expected `=` after rule `{}`".to_string(),
            Self::MissingTerminator => "expected `;` to end rule `{}`".to_string(),
            Self::UnclosedBracket => "missing closing {}".to_string(),
            Self::InvalidTerminalCharacter => {
                "invalid character {} in terminal string".to_string()
            }
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

/// A secondary location, e.g. where an unclosed bracket was opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedInfo {
    pub start: Position,
    pub end: Position,
    pub message: String,
}

impl RelatedInfo {
    pub fn new(start: Position, end: Position, message: impl Into<String>) -> Self {
        Self {
            start,
            end,
            message: message.into(),
        }
    }
}

/// A fatal structural error with the span it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub message: String,
    pub start: Position,
    pub end: Position,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<RelatedInfo>,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, start: Position, end: Position) -> Self {
        Self {
            kind,
            message: kind.fallback_message().to_string(),
            start,
            end,
            related: Vec::new(),
        }
    }

    pub fn with_detail(
        kind: SyntaxErrorKind,
        detail: &str,
        start: Position,
        end: Position,
    ) -> Self {
        Self {
            message: kind.message(Some(detail)),
            ..Self::new(kind, start, end)
        }
    }

    pub fn related_to(mut self, related: RelatedInfo) -> Self {
        self.related.push(related);
        self
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}, {}", self.message, self.start, self.end)
    }
}

impl std::error::Error for SyntaxError {}
