//! Document-level converters.

use serde_json::Value;
use zbx_expression::{ExpressionParser, HistFunctionScanner};
use zbx_interchange::{export_root_mut, EntityKind, VERSION_KEY};

use crate::entity::convert_children;
use crate::error::ConvertError;
use crate::expression::ExpressionRewriter;
use crate::options::{ConverterOptions, SOURCE_VERSION};

/// One step of an import version chain.
pub trait ImportConverter {
    /// Export version this converter reads.
    fn source_version(&self) -> &str;

    /// Export version this converter produces.
    fn target_version(&self) -> &str;

    /// Converts a whole document, returning it with the version tag set
    /// to [`ImportConverter::target_version`].
    fn convert(&self, document: Value) -> Result<Value, ConvertError>;
}

/// Top-level collections of an export, in conversion order.
const TOP_LEVEL_KINDS: [EntityKind; 4] = [
    EntityKind::Template,
    EntityKind::Host,
    EntityKind::Trigger,
    EntityKind::Map,
];

/// Converts 6.4 exports to 7.0.
///
/// Expressions are tokenized by the injected parser `P`; one parser serves
/// a whole document and holds no state between expressions.
#[derive(Debug, Clone)]
pub struct Converter64To70<P = HistFunctionScanner> {
    parser: P,
    options: ConverterOptions,
}

impl<P: ExpressionParser> Converter64To70<P> {
    pub fn new(parser: P) -> Self {
        Self::with_options(parser, ConverterOptions::default())
    }

    pub fn with_options(parser: P, options: ConverterOptions) -> Self {
        Converter64To70 { parser, options }
    }

    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    /// Converts `document` in place.
    ///
    /// The version tag is written before any collection is visited. On
    /// error the document may be partially converted.
    pub fn convert_in_place(&self, document: &mut Value) -> Result<(), ConvertError> {
        let root = export_root_mut(document)?;

        tracing::info!(
            from = SOURCE_VERSION,
            to = %self.options.target_version,
            "converting export"
        );
        root.insert(
            VERSION_KEY.to_string(),
            Value::String(self.options.target_version.clone()),
        );

        let rewriter = ExpressionRewriter::new(&self.parser, self.options.parse);
        convert_children(root, &TOP_LEVEL_KINDS, &rewriter)
    }
}

impl Default for Converter64To70<HistFunctionScanner> {
    fn default() -> Self {
        Self::new(HistFunctionScanner)
    }
}

impl<P: ExpressionParser> ImportConverter for Converter64To70<P> {
    fn source_version(&self) -> &str {
        SOURCE_VERSION
    }

    fn target_version(&self) -> &str {
        &self.options.target_version
    }

    fn convert(&self, mut document: Value) -> Result<Value, ConvertError> {
        self.convert_in_place(&mut document)?;
        Ok(document)
    }
}
