//! Tokens produced by a successful parse.
//!
//! All offsets and lengths are byte offsets into the parsed string.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Numeric literal, optionally with a time or size suffix (`5m`, `1K`).
    Number,
    /// Quoted string operand.
    String,
    /// User macro operand (`{$NAME}`).
    UserMacro,
    /// Unary or binary operator, including `and`, `or`, `not`.
    Operator,
    OpenBrace,
    CloseBrace,
    /// Function call whose first argument is an item query (`last(/host/key)`).
    HistFunction,
    /// Any other function call; its arguments are nested expressions.
    MathFunction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    /// Item query, `/host/key[params]` with an optional `?[filter]`.
    Query,
    /// Double-quoted string; the raw text includes both quotes.
    Quoted,
    /// Unquoted literal such as a period (`#5`, `1h:now/h`); may be empty.
    Unquoted,
    /// Argument of a math function, an expression of its own.
    Expression,
}

/// One function parameter with its location in the source string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub kind: ParameterKind,
    /// Raw source text of the parameter.
    pub text: String,
    pub pos: usize,
    pub length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw source text of the whole token.
    pub text: String,
    pub pos: usize,
    pub length: usize,
    /// Function name for function tokens.
    pub name: Option<String>,
    /// Parameters of function tokens, in source order.
    pub parameters: Vec<Parameter>,
    /// Tokens of the arguments of a math function, in source order.
    pub children: Vec<Token>,
}

impl Token {
    pub(crate) fn simple(kind: TokenKind, src: &str, pos: usize, end: usize) -> Self {
        Token {
            kind,
            text: src[pos..end].to_string(),
            pos,
            length: end - pos,
            name: None,
            parameters: Vec::new(),
            children: Vec::new(),
        }
    }
}

/// The token tree of a successfully parsed expression.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseResult {
    pub tokens: Vec<Token>,
}

impl ParseResult {
    /// All tokens of the given kinds, in document order.
    ///
    /// Tokens nested inside math function arguments are included, each
    /// after its enclosing function.
    pub fn tokens_of_kind(&self, kinds: &[TokenKind]) -> Vec<&Token> {
        let mut found = Vec::new();
        collect(&self.tokens, kinds, &mut found);
        found
    }
}

fn collect<'a>(tokens: &'a [Token], kinds: &[TokenKind], found: &mut Vec<&'a Token>) {
    for token in tokens {
        if kinds.contains(&token.kind) {
            found.push(token);
        }
        collect(&token.children, kinds, found);
    }
}
