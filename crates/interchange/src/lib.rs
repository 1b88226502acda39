//! zbx-interchange: export document boundary.
//!
//! A decoded configuration export is a generic `serde_json::Value` tree
//! whose root map lives under [`EXPORT_KEY`]. This crate names the entity
//! kinds found in that tree, the literal tags the converters compare
//! against, and the accessors used to reach entity collections without
//! panicking on unexpected shapes.

pub mod constants;
pub mod document;
pub mod error;
pub mod kind;

pub use constants::*;
pub use document::{entities_mut, export_root_mut, string_field};
pub use error::ExportError;
pub use kind::EntityKind;
