//! Items, item prototypes, discovery rules and preprocessing steps.

use serde_json::{json, Map, Value};
use zbx_expression::ExpressionParser;
use zbx_interchange::{
    string_field, EntityKind, ITEM_TYPE_CALCULATED, ITEM_TYPE_HTTP_AGENT, ITEM_TYPE_SCRIPT,
    ITEM_TYPE_ZABBIX_PASSIVE, PREPROC_CHECK_NOT_SUPPORTED, PREPROC_MATCH_ERROR_ANY,
};

use super::{convert_children, rewrite_expression_field};
use crate::error::ConvertError;
use crate::expression::ExpressionRewriter;

/// Converts an item or item prototype; `trigger_kind` selects whether its
/// `triggers` or `trigger_prototypes` are converted.
pub(super) fn convert_item<P: ExpressionParser + ?Sized>(
    item: &mut Map<String, Value>,
    trigger_kind: EntityKind,
    rewriter: &ExpressionRewriter<'_, P>,
) -> Result<(), ConvertError> {
    default_type(item);

    if string_field(item, "type") == Some(ITEM_TYPE_CALCULATED) {
        rewrite_expression_field(item, "params", rewriter);
    }

    drop_unused_timeout(item);

    convert_children(
        item,
        &[EntityKind::PreprocessingStep, trigger_kind],
        rewriter,
    )
}

pub(super) fn convert_discovery_rule<P: ExpressionParser + ?Sized>(
    discovery_rule: &mut Map<String, Value>,
    rewriter: &ExpressionRewriter<'_, P>,
) -> Result<(), ConvertError> {
    default_type(discovery_rule);
    drop_unused_timeout(discovery_rule);

    convert_children(discovery_rule, &[EntityKind::ItemPrototype], rewriter)
}

/// Not-supported checks now take a match mode; legacy steps match any error.
pub(super) fn convert_preprocessing_step(step: &mut Map<String, Value>) {
    if string_field(step, "type") == Some(PREPROC_CHECK_NOT_SUPPORTED) {
        step.insert("parameters".to_string(), json!([PREPROC_MATCH_ERROR_ANY]));
    }
}

/// Exports omit `type` when it has the default value.
fn default_type(entity: &mut Map<String, Value>) {
    entity
        .entry("type")
        .or_insert_with(|| Value::String(ITEM_TYPE_ZABBIX_PASSIVE.to_string()));
}

/// Only HTTP agent and script checks keep a per-entity timeout.
fn drop_unused_timeout(entity: &mut Map<String, Value>) {
    if !matches!(
        string_field(entity, "type"),
        Some(ITEM_TYPE_HTTP_AGENT | ITEM_TYPE_SCRIPT)
    ) {
        entity.remove("timeout");
    }
}
