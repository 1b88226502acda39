use zbx_interchange::{EntityKind, ExportError};

/// Errors that abort a document conversion.
///
/// Unparseable expressions are not errors; they pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The document tree does not have the shape of an export.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// A field every entity of this kind carries is absent.
    #[error("{kind} has no '{field}' field")]
    MissingField {
        kind: EntityKind,
        field: &'static str,
    },
}
