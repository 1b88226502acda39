//! Triggers and trigger prototypes.

use serde_json::{Map, Value};
use zbx_expression::ExpressionParser;
use zbx_interchange::EntityKind;

use super::rewrite_expression_field;
use crate::error::ConvertError;
use crate::expression::ExpressionRewriter;

/// Optional trigger fields that may embed expressions.
const EXPRESSION_FIELDS: [&str; 3] = ["description", "recovery_expression", "event_name"];

pub(super) fn convert_trigger<P: ExpressionParser + ?Sized>(
    kind: EntityKind,
    trigger: &mut Map<String, Value>,
    rewriter: &ExpressionRewriter<'_, P>,
) -> Result<(), ConvertError> {
    if !trigger.contains_key("expression") {
        return Err(ConvertError::MissingField {
            kind,
            field: "expression",
        });
    }
    rewrite_expression_field(trigger, "expression", rewriter);

    for field in EXPRESSION_FIELDS {
        rewrite_expression_field(trigger, field, rewriter);
    }
    Ok(())
}
