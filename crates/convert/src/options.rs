use serde::{Deserialize, Serialize};
use zbx_expression::ParseOptions;

/// Version written into converted documents.
pub const TARGET_VERSION: &str = "7.0";
/// Version the converter expects its input to be exported from.
pub const SOURCE_VERSION: &str = "6.4";

/// Converter configuration. Every field has a default, so an empty map
/// deserializes to the stock 6.4 to 7.0 behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterOptions {
    /// Value written to `zabbix_export.version`.
    pub target_version: String,
    /// Options passed to the expression parser for every expression.
    pub parse: ParseOptions,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        ConverterOptions {
            target_version: TARGET_VERSION.to_string(),
            parse: ParseOptions {
                macros: true,
                no_backslash_escaping: true,
            },
        }
    }
}
