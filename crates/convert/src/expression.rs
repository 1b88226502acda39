//! Expression rewriting.
//!
//! Quoted parameters of historical functions stopped treating a lone
//! backslash as a literal character. To keep their meaning, every
//! backslash in such a parameter is doubled, except where it already
//! escapes a double quote.

use zbx_expression::{ExpressionParser, ParameterKind, ParseOptions, TokenKind};

/// One substring to replace: `[pos, pos + length)` holding `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub pos: usize,
    pub length: usize,
    pub text: String,
}

/// Rewrites expressions through an injected parser.
pub struct ExpressionRewriter<'p, P: ?Sized> {
    parser: &'p P,
    options: ParseOptions,
}

impl<'p, P: ExpressionParser + ?Sized> ExpressionRewriter<'p, P> {
    pub fn new(parser: &'p P, options: ParseOptions) -> Self {
        ExpressionRewriter { parser, options }
    }

    /// Converts one expression.
    ///
    /// Expressions the parser rejects, and expressions without a quoted
    /// historical function parameter containing a backslash, are returned
    /// unchanged.
    pub fn convert(&self, expression: &str) -> String {
        let result = match self.parser.parse(expression, self.options) {
            Ok(result) => result,
            Err(err) => {
                tracing::trace!(%err, expression, "expression left as is");
                return expression.to_string();
            }
        };

        let replacements: Vec<Replacement> = result
            .tokens_of_kind(&[TokenKind::HistFunction])
            .into_iter()
            .flat_map(|token| token.parameters.iter())
            .filter(|param| param.kind == ParameterKind::Quoted && param.text.contains('\\'))
            .map(|param| Replacement {
                pos: param.pos,
                length: param.length,
                text: escape_backslashes(&param.text),
            })
            .collect();

        if replacements.is_empty() {
            return expression.to_string();
        }

        let converted = apply_replacements(expression, replacements);
        tracing::debug!(expression, converted = %converted, "expression rewritten");
        converted
    }
}

/// Doubles every backslash that does not escape a double quote.
///
/// Scans left to right, so `\"` is kept whole and `\\"` becomes `\\\"`.
pub fn escape_backslashes(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 4);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            escaped.push(c);
        } else if chars.peek() == Some(&'"') {
            chars.next();
            escaped.push_str("\\\"");
        } else {
            escaped.push_str("\\\\");
        }
    }
    escaped
}

/// Splices replacements into `expression`.
///
/// Offsets refer to the unmodified input. Replacements are applied in
/// descending start offset, so each splice only shifts text after every
/// offset still pending. Spans that fall outside the string or off a
/// character boundary are skipped.
pub fn apply_replacements(expression: &str, mut replacements: Vec<Replacement>) -> String {
    replacements.sort_by(|a, b| b.pos.cmp(&a.pos));

    let mut converted = expression.to_string();
    for replacement in replacements {
        let span = replacement
            .pos
            .checked_add(replacement.length)
            .map(|end| replacement.pos..end)
            .filter(|span| converted.get(span.clone()).is_some());
        let Some(span) = span else {
            tracing::warn!(
                pos = replacement.pos,
                length = replacement.length,
                "replacement span outside expression, skipped"
            );
            continue;
        };
        converted.replace_range(span, &replacement.text);
    }
    converted
}
