//! Structural errors raised by the parser and their rendering.

mod message;
mod printer;


pub use message::{RelatedInfo, SyntaxError, SyntaxErrorKind};
pub use printer::ErrorPrinter;
