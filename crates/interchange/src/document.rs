//! Accessors over the generic document tree.
//!
//! Converters trust the shape of the export; these helpers only turn a
//! shape mismatch into an [`ExportError`] instead of a panic.

use serde_json::{Map, Value};

use crate::constants::EXPORT_KEY;
use crate::error::ExportError;
use crate::kind::EntityKind;

/// The root map of an export document.
pub fn export_root_mut(document: &mut Value) -> Result<&mut Map<String, Value>, ExportError> {
    document
        .get_mut(EXPORT_KEY)
        .and_then(Value::as_object_mut)
        .ok_or(ExportError::MissingRoot { key: EXPORT_KEY })
}

/// The entities of a collection held under `key`, in document order.
///
/// The collection must be a sequence of maps.
pub fn entities_mut<'a>(
    collection: &'a mut Value,
    kind: EntityKind,
    key: &'static str,
) -> Result<Vec<&'a mut Map<String, Value>>, ExportError> {
    let elements = collection
        .as_array_mut()
        .ok_or(ExportError::NotACollection { kind, key })?;

    elements
        .iter_mut()
        .enumerate()
        .map(|(index, element)| {
            element
                .as_object_mut()
                .ok_or(ExportError::NotAnEntity { kind, index })
        })
        .collect()
}

/// A string-valued field of an entity; `None` when absent or not a string.
pub fn string_field<'a>(entity: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    entity.get(key).and_then(Value::as_str)
}
