//! Scanner for the trigger expression language.
//!
//! Recognizes operands (numbers, quoted strings, user macros, function
//! calls, parenthesised groups) joined by binary operators. A call whose
//! first argument is an item query is a historical function; its remaining
//! arguments are reported as quoted or unquoted parameters with byte
//! offsets. Arguments of other calls are scanned as nested expressions.

use crate::error::ParseError;
use crate::parser::{ExpressionParser, ParseOptions};
use crate::token::{Parameter, ParameterKind, ParseResult, Token, TokenKind};

/// Parentheses and math function calls nest at most this deep.
const MAX_DEPTH: usize = 64;

/// Built-in [`ExpressionParser`] for trigger and calculated item expressions.
#[derive(Debug, Clone, Copy, Default)]
pub struct HistFunctionScanner;

impl ExpressionParser for HistFunctionScanner {
    fn parse(&self, text: &str, options: ParseOptions) -> Result<ParseResult, ParseError> {
        let mut scanner = Scanner {
            src: text,
            bytes: text.as_bytes(),
            pos: 0,
            depth: 0,
            options,
        };
        let mut tokens = Vec::new();
        scanner.expression(&mut tokens)?;
        scanner.skip_whitespace();
        if scanner.pos < scanner.bytes.len() {
            return Err(scanner.error("unexpected character"));
        }
        Ok(ParseResult { tokens })
    }
}

struct Scanner<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
    options: ParseOptions,
}

impl<'a> Scanner<'a> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(self.pos, message)
    }

    fn skip_while(&mut self, accept: impl Fn(u8) -> bool) {
        while self.peek().is_some_and(&accept) {
            self.pos += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\r' | b'\n')) {
            self.pos += 1;
        }
    }

    fn parameter(&self, kind: ParameterKind, start: usize, end: usize) -> Parameter {
        Parameter {
            kind,
            text: self.src[start..end].to_string(),
            pos: start,
            length: end - start,
        }
    }

    /// Trims trailing whitespace off `[start, end)`, returning the new end.
    fn trim_end(&self, start: usize, mut end: usize) -> usize {
        while end > start && self.bytes[end - 1].is_ascii_whitespace() {
            end -= 1;
        }
        end
    }

    /// Consumes `word` when it is not followed by an identifier character.
    fn keyword(&mut self, word: &str) -> bool {
        let end = self.pos + word.len();
        if !self.bytes[self.pos..].starts_with(word.as_bytes()) {
            return false;
        }
        if matches!(self.bytes.get(end), Some(c) if c.is_ascii_alphanumeric() || *c == b'_') {
            return false;
        }
        self.pos = end;
        true
    }

    // ── Expressions ─────────────────────────────────────────────────

    fn expression(&mut self, tokens: &mut Vec<Token>) -> Result<(), ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error("expression is nested too deeply"));
        }
        self.depth += 1;
        loop {
            self.unary_operators(tokens);
            self.operand(tokens)?;
            self.skip_whitespace();
            if !self.binary_operator(tokens) {
                break;
            }
        }
        self.depth -= 1;
        Ok(())
    }

    fn unary_operators(&mut self, tokens: &mut Vec<Token>) {
        loop {
            self.skip_whitespace();
            let start = self.pos;
            if self.peek() == Some(b'-') {
                self.pos += 1;
            } else if !self.keyword("not") {
                return;
            }
            tokens.push(Token::simple(TokenKind::Operator, self.src, start, self.pos));
        }
    }

    fn binary_operator(&mut self, tokens: &mut Vec<Token>) -> bool {
        let start = self.pos;
        let len = match (self.peek(), self.peek_at(1)) {
            (Some(b'<'), Some(b'>' | b'=')) | (Some(b'>'), Some(b'=')) => 2,
            (Some(b'<' | b'>' | b'=' | b'+' | b'-' | b'*' | b'/'), _) => 1,
            _ => 0,
        };
        if len > 0 {
            self.pos += len;
        } else if !self.keyword("and") && !self.keyword("or") {
            return false;
        }
        tokens.push(Token::simple(TokenKind::Operator, self.src, start, self.pos));
        true
    }

    fn operand(&mut self, tokens: &mut Vec<Token>) -> Result<(), ParseError> {
        let start = self.pos;
        match self.peek() {
            None => Err(self.error("operand expected")),
            Some(b'"') => {
                self.quoted(!self.options.no_backslash_escaping)?;
                tokens.push(Token::simple(TokenKind::String, self.src, start, self.pos));
                Ok(())
            }
            Some(b'{') => self.user_macro(tokens),
            Some(b'(') => {
                self.pos += 1;
                tokens.push(Token::simple(TokenKind::OpenBrace, self.src, start, self.pos));
                self.expression(tokens)?;
                self.skip_whitespace();
                if self.peek() != Some(b')') {
                    return Err(self.error("closing parenthesis expected"));
                }
                tokens.push(Token::simple(
                    TokenKind::CloseBrace,
                    self.src,
                    self.pos,
                    self.pos + 1,
                ));
                self.pos += 1;
                Ok(())
            }
            Some(c) if c.is_ascii_digit() => {
                self.number();
                tokens.push(Token::simple(TokenKind::Number, self.src, start, self.pos));
                Ok(())
            }
            Some(b'.') if matches!(self.peek_at(1), Some(c) if c.is_ascii_digit()) => {
                self.number();
                tokens.push(Token::simple(TokenKind::Number, self.src, start, self.pos));
                Ok(())
            }
            Some(c) if c.is_ascii_lowercase() => self.function(tokens),
            Some(_) => Err(self.error("unexpected character")),
        }
    }

    // ── Literals ────────────────────────────────────────────────────

    fn digits(&mut self) {
        self.skip_while(|c| c.is_ascii_digit());
    }

    fn number(&mut self) {
        self.digits();
        if self.peek() == Some(b'.') {
            self.pos += 1;
            self.digits();
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            let mantissa_end = self.pos;
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.digits();
            } else {
                self.pos = mantissa_end;
            }
        }
        if matches!(
            self.peek(),
            Some(b's' | b'm' | b'h' | b'd' | b'w' | b'K' | b'M' | b'G' | b'T')
        ) {
            self.pos += 1;
        }
    }

    /// Scans a double-quoted string starting at the current `"`.
    ///
    /// `\"` always escapes a quote. With `backslash_escapes`, `\\` is an
    /// escape too and any other backslash is an error; without it, every
    /// other backslash is a literal character.
    fn quoted(&mut self, backslash_escapes: bool) -> Result<(), ParseError> {
        let start = self.pos;
        self.pos += 1;
        loop {
            match self.peek() {
                None => return Err(ParseError::new(start, "unterminated quoted string")),
                Some(b'"') => {
                    self.pos += 1;
                    return Ok(());
                }
                Some(b'\\') => match self.peek_at(1) {
                    Some(b'"') => self.pos += 2,
                    Some(b'\\') if backslash_escapes => self.pos += 2,
                    _ if backslash_escapes => {
                        return Err(self.error("invalid escape sequence"));
                    }
                    _ => self.pos += 1,
                },
                Some(_) => self.pos += 1,
            }
        }
    }

    fn user_macro(&mut self, tokens: &mut Vec<Token>) -> Result<(), ParseError> {
        if !self.options.macros || self.peek_at(1) != Some(b'$') {
            return Err(self.error("unexpected macro"));
        }
        let start = self.pos;
        self.pos += 2;
        let name_start = self.pos;
        self.skip_while(|c| {
            c.is_ascii_uppercase() || c.is_ascii_digit() || matches!(c, b'_' | b'.')
        });
        if self.pos == name_start {
            return Err(self.error("macro name expected"));
        }
        if self.peek() == Some(b':') {
            self.pos += 1;
            if self.peek() == Some(b'"') {
                self.quoted(false)?;
            } else {
                while !matches!(self.peek(), None | Some(b'}')) {
                    self.pos += 1;
                }
            }
        }
        if self.peek() != Some(b'}') {
            return Err(self.error("closing brace expected"));
        }
        self.pos += 1;
        tokens.push(Token::simple(TokenKind::UserMacro, self.src, start, self.pos));
        Ok(())
    }

    // ── Functions ───────────────────────────────────────────────────

    fn function(&mut self, tokens: &mut Vec<Token>) -> Result<(), ParseError> {
        let src = self.src;
        let start = self.pos;
        self.skip_while(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == b'_');
        let name = &src[start..self.pos];
        if self.peek() != Some(b'(') {
            return Err(self.error("opening parenthesis expected"));
        }
        self.pos += 1;
        self.skip_whitespace();

        let token = if self.peek() == Some(b'/') {
            self.hist_function(start, name)?
        } else {
            self.math_function(start, name)?
        };
        tokens.push(token);
        Ok(())
    }

    fn hist_function(&mut self, start: usize, name: &str) -> Result<Token, ParseError> {
        let query_start = self.pos;
        self.query()?;
        let mut parameters = vec![self.parameter(ParameterKind::Query, query_start, self.pos)];

        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b')') => break,
                Some(b',') => self.pos += 1,
                _ => return Err(self.error("comma or closing parenthesis expected")),
            }
            self.skip_whitespace();
            let param_start = self.pos;
            if self.peek() == Some(b'"') {
                self.quoted(!self.options.no_backslash_escaping)?;
                parameters.push(self.parameter(ParameterKind::Quoted, param_start, self.pos));
            } else {
                while !matches!(self.peek(), None | Some(b',' | b')' | b'"')) {
                    self.pos += 1;
                }
                let end = self.trim_end(param_start, self.pos);
                parameters.push(self.parameter(ParameterKind::Unquoted, param_start, end));
            }
        }
        self.pos += 1;

        Ok(Token {
            kind: TokenKind::HistFunction,
            text: self.src[start..self.pos].to_string(),
            pos: start,
            length: self.pos - start,
            name: Some(name.to_string()),
            parameters,
            children: Vec::new(),
        })
    }

    fn math_function(&mut self, start: usize, name: &str) -> Result<Token, ParseError> {
        let mut parameters = Vec::new();
        let mut children = Vec::new();

        if self.peek() == Some(b')') {
            self.pos += 1;
        } else {
            loop {
                self.skip_whitespace();
                let arg_start = self.pos;
                self.expression(&mut children)?;
                let end = self.trim_end(arg_start, self.pos);
                parameters.push(self.parameter(ParameterKind::Expression, arg_start, end));
                match self.peek() {
                    Some(b',') => self.pos += 1,
                    Some(b')') => {
                        self.pos += 1;
                        break;
                    }
                    _ => return Err(self.error("comma or closing parenthesis expected")),
                }
            }
        }

        Ok(Token {
            kind: TokenKind::MathFunction,
            text: self.src[start..self.pos].to_string(),
            pos: start,
            length: self.pos - start,
            name: Some(name.to_string()),
            parameters,
            children,
        })
    }

    /// Scans `/host/key[params]` with an optional `?[filter]`.
    fn query(&mut self) -> Result<(), ParseError> {
        self.pos += 1;
        let host_start = self.pos;
        while !matches!(self.peek(), None | Some(b'/' | b',' | b')')) {
            self.pos += 1;
        }
        if self.pos == host_start {
            return Err(self.error("host name expected"));
        }
        if self.peek() != Some(b'/') {
            return Err(self.error("item key expected"));
        }
        self.pos += 1;

        let key_start = self.pos;
        self.skip_while(|c| c.is_ascii_alphanumeric() || matches!(c, b'_' | b'.' | b'-'));
        if self.pos == key_start {
            return Err(self.error("item key expected"));
        }
        if self.peek() == Some(b'[') {
            self.bracketed()?;
        }
        if self.peek() == Some(b'?') && self.peek_at(1) == Some(b'[') {
            self.pos += 1;
            self.bracketed()?;
        }
        Ok(())
    }

    /// Scans a balanced `[...]` block; quoted strings inside may hold brackets.
    fn bracketed(&mut self) -> Result<(), ParseError> {
        let start = self.pos;
        let mut depth = 0usize;
        loop {
            match self.peek() {
                None => return Err(ParseError::new(start, "unterminated bracket")),
                Some(b'[') => {
                    depth += 1;
                    self.pos += 1;
                }
                Some(b']') => {
                    depth -= 1;
                    self.pos += 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                Some(b'"') => self.quoted(false)?,
                Some(_) => self.pos += 1,
            }
        }
    }
}
