use crate::kind::EntityKind;

/// Structural errors when walking an export document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    /// The document has no `zabbix_export` map at its root.
    #[error("document has no '{key}' root map")]
    MissingRoot { key: &'static str },

    /// A collection of entities is not a sequence.
    #[error("{kind} collection '{key}' is not a sequence")]
    NotACollection { kind: EntityKind, key: &'static str },

    /// An element of an entity collection is not a map.
    #[error("{kind} at index {index} is not a map")]
    NotAnEntity { kind: EntityKind, index: usize },
}
