//! Network maps and their elements.

use serde_json::{Map, Value};
use zbx_expression::ExpressionParser;
use zbx_interchange::{is_trigger_element, EntityKind};

use super::{convert_children, convert_collection};
use crate::error::ConvertError;
use crate::expression::ExpressionRewriter;

pub(super) fn convert_map<P: ExpressionParser + ?Sized>(
    map: &mut Map<String, Value>,
    rewriter: &ExpressionRewriter<'_, P>,
) -> Result<(), ConvertError> {
    convert_children(map, &[EntityKind::Selement], rewriter)
}

/// Trigger elements reference triggers by expression.
pub(super) fn convert_selement<P: ExpressionParser + ?Sized>(
    selement: &mut Map<String, Value>,
    rewriter: &ExpressionRewriter<'_, P>,
) -> Result<(), ConvertError> {
    if !selement.get("elementtype").is_some_and(is_trigger_element) {
        return Ok(());
    }
    if let Some(elements) = selement.get_mut("elements") {
        convert_collection(EntityKind::Trigger, elements, "elements", rewriter)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use zbx_expression::{HistFunctionScanner, ParseOptions};

    fn convert(value: Value) -> Value {
        let mut map = match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        };
        let scanner = HistFunctionScanner;
        let rewriter = ExpressionRewriter::new(&scanner, ParseOptions::default());
        convert_map(&mut map, &rewriter).unwrap();
        Value::Object(map)
    }

    #[test]
    fn test_only_trigger_elements_converted() {
        let map = convert(json!({
            "name": "Network",
            "selements": [
                {
                    "elementtype": "2",
                    "elements": [
                        {"expression": r#"last(/h/k,"a\b")=1"#, "description": "Trigger"}
                    ]
                },
                {
                    "elementtype": 0,
                    "elements": [{"expression": r#"last(/h/k,"a\b")=1"#}]
                },
                {"elementtype": 2}
            ]
        }));

        assert_eq!(
            map["selements"][0]["elements"][0]["expression"],
            r#"last(/h/k,"a\\b")=1"#
        );
        assert_eq!(
            map["selements"][1]["elements"][0]["expression"],
            r#"last(/h/k,"a\b")=1"#
        );
        assert!(map["selements"][2].get("elements").is_none());
    }

    #[test]
    fn test_map_without_selements() {
        let map = convert(json!({"name": "Empty"}));
        assert_eq!(map, json!({"name": "Empty"}));
    }
}
