/// A failed parse: the byte offset where scanning stopped and why.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("incorrect expression starting at offset {offset}: {message}")]
pub struct ParseError {
    pub offset: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(offset: usize, message: impl Into<String>) -> Self {
        ParseError {
            offset,
            message: message.into(),
        }
    }
}
