//! The parser capability and its options.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::token::ParseResult;

/// Options controlling what the parser accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Accept user macros (`{$NAME}`, `{$NAME:context}`) as operands.
    pub macros: bool,
    /// Treat a backslash inside quoted strings as a literal character,
    /// except in front of a double quote.
    pub no_backslash_escaping: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            macros: true,
            no_backslash_escaping: true,
        }
    }
}

/// Tokenizes an expression string.
///
/// Implementations must be pure functions of `(text, options)`: the same
/// input always produces the same result and no state is observable
/// between calls.
pub trait ExpressionParser {
    fn parse(&self, text: &str, options: ParseOptions) -> Result<ParseResult, ParseError>;
}

impl<P: ExpressionParser + ?Sized> ExpressionParser for &P {
    fn parse(&self, text: &str, options: ParseOptions) -> Result<ParseResult, ParseError> {
        (**self).parse(text, options)
    }
}

impl<P: ExpressionParser + ?Sized> ExpressionParser for Box<P> {
    fn parse(&self, text: &str, options: ParseOptions) -> Result<ParseResult, ParseError> {
        (**self).parse(text, options)
    }
}
