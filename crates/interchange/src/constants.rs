//! Literal tags used in exported documents.

use serde_json::Value;

/// Key of the root map of an export document.
pub const EXPORT_KEY: &str = "zabbix_export";
/// Key of the version tag inside the root map.
pub const VERSION_KEY: &str = "version";

// ── Item and discovery rule types ───────────────────────────────────

pub const ITEM_TYPE_ZABBIX_PASSIVE: &str = "ZABBIX_PASSIVE";
pub const ITEM_TYPE_CALCULATED: &str = "CALCULATED";
pub const ITEM_TYPE_HTTP_AGENT: &str = "HTTP_AGENT";
pub const ITEM_TYPE_SCRIPT: &str = "SCRIPT";

// ── Preprocessing ───────────────────────────────────────────────────

pub const PREPROC_CHECK_NOT_SUPPORTED: &str = "CHECK_NOT_SUPPORTED";
/// "Match any error" parameter of a not-supported check step.
pub const PREPROC_MATCH_ERROR_ANY: &str = "-1";

// ── Maps ────────────────────────────────────────────────────────────

pub const SYSMAP_ELEMENT_TYPE_TRIGGER: i64 = 2;

/// Whether a map element `elementtype` denotes a trigger element.
///
/// Exports carry the type either as a number or as a numeric string;
/// both compare by numeric value, so `"2"`, `" 2"`, `"2.0"` and `"2e0"`
/// all match. Booleans and null never do.
pub fn is_trigger_element(elementtype: &Value) -> bool {
    let value = match elementtype {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    value == Some(SYSMAP_ELEMENT_TYPE_TRIGGER as f64)
}

// ── Dashboards ──────────────────────────────────────────────────────

pub const WIDGET_TYPE_GRAPH: &str = "graph";
pub const WIDGET_TYPE_SVG_GRAPH: &str = "svggraph";
pub const WIDGET_TYPE_GRAPH_PROTOTYPE: &str = "graphprototype";

/// Widget types that take part in data broadcasting and need a reference.
pub const REFERENCED_WIDGET_TYPES: [&str; 3] = [
    WIDGET_TYPE_GRAPH,
    WIDGET_TYPE_SVG_GRAPH,
    WIDGET_TYPE_GRAPH_PROTOTYPE,
];

pub const WIDGET_FIELD_TYPE_STRING: &str = "STRING";
pub const WIDGET_FIELD_REFERENCE: &str = "reference";

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trigger_element_accepts_number_and_string() {
        assert!(is_trigger_element(&json!(2)));
        assert!(is_trigger_element(&json!("2")));
        assert!(!is_trigger_element(&json!("0")));
        assert!(!is_trigger_element(&json!(4)));
        assert!(!is_trigger_element(&json!("TRIGGER")));
        assert!(!is_trigger_element(&Value::Null));
    }

    #[test]
    fn test_trigger_element_compares_numerically() {
        let matching = [
            json!("2.0"),
            json!("2e0"),
            json!(" 2 "),
            json!("+2"),
            json!(2.0),
        ];
        for elementtype in matching {
            assert!(is_trigger_element(&elementtype), "{elementtype}");
        }

        let other = [json!("2.5"), json!("2x"), json!(""), json!(true), json!(-2)];
        for elementtype in other {
            assert!(!is_trigger_element(&elementtype), "{elementtype}");
        }
    }
}
