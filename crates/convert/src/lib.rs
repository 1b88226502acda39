//! zbx-convert: version converters for configuration exports.
//!
//! [`Converter64To70`] migrates a decoded 6.4 export document to 7.0 in a
//! single depth-first pass:
//!
//! - items and discovery rules get an explicit `type`, and lose `timeout`
//!   unless they are HTTP agent or script checks
//! - not-supported preprocessing checks match any error
//! - quoted historical function parameters in trigger and calculated item
//!   expressions have their backslashes escaped
//! - graph widgets get a per-dashboard broadcast reference, and indexed
//!   widget field names move the index in front of the property
//!
//! Expressions are tokenized through an injected
//! [`zbx_expression::ExpressionParser`]; expressions it rejects are kept
//! verbatim.

pub mod converter;
pub mod entity;
pub mod error;
pub mod expression;
pub mod field_name;
pub mod natural;
pub mod options;
pub mod reference;

pub use converter::{Converter64To70, ImportConverter};
pub use error::ConvertError;
pub use expression::ExpressionRewriter;
pub use options::{ConverterOptions, SOURCE_VERSION, TARGET_VERSION};
pub use reference::ReferenceGenerator;
