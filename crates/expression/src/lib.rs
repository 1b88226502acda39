//! zbx-expression: trigger expression tokenizer.
//!
//! Provides the [`ExpressionParser`] capability consumed by the import
//! converters, and [`HistFunctionScanner`], a scanner for the trigger
//! expression language that reports historical function calls together
//! with the byte offsets of their parameters.
//!
//! # Public API
//!
//! - [`ExpressionParser`] -- parse an expression under [`ParseOptions`]
//! - [`ParseResult`] -- token tree, queried with [`ParseResult::tokens_of_kind`]
//! - [`Token`], [`Parameter`] and their kinds
//! - [`ParseError`] -- byte offset and reason of a failed parse

pub mod error;
pub mod parser;
pub mod scanner;
pub mod token;

pub use error::ParseError;
pub use parser::{ExpressionParser, ParseOptions};
pub use scanner::HistFunctionScanner;
pub use token::{Parameter, ParameterKind, ParseResult, Token, TokenKind};
