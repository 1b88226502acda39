//! Template dashboards and their widgets.

use serde_json::{json, Map, Value};
use zbx_interchange::{
    entities_mut, string_field, EntityKind, ExportError, REFERENCED_WIDGET_TYPES,
    WIDGET_FIELD_REFERENCE, WIDGET_FIELD_TYPE_STRING,
};

use crate::error::ConvertError;
use crate::field_name::rewrite_field_name;
use crate::natural::natural_case_cmp;
use crate::reference::ReferenceGenerator;

/// Converts the widgets of every page of a dashboard.
///
/// One reference counter spans all pages, starting over for each
/// dashboard.
pub fn convert_dashboard(dashboard: &mut Map<String, Value>) -> Result<(), ConvertError> {
    let Some(pages) = dashboard.get_mut(EntityKind::DashboardPage.collection_key()) else {
        return Ok(());
    };

    let mut references = ReferenceGenerator::new();
    for page in entities_mut(pages, EntityKind::DashboardPage, "pages")? {
        let Some(widgets) = page.get_mut(EntityKind::Widget.collection_key()) else {
            continue;
        };
        for widget in entities_mut(widgets, EntityKind::Widget, "widgets")? {
            convert_widget(widget, &mut references)?;
        }
    }
    Ok(())
}

/// Gives graph widgets a broadcast reference and renames indexed fields.
pub fn convert_widget(
    widget: &mut Map<String, Value>,
    references: &mut ReferenceGenerator,
) -> Result<(), ConvertError> {
    let referenced =
        string_field(widget, "type").is_some_and(|t| REFERENCED_WIDGET_TYPES.contains(&t));

    if referenced {
        let reference = references.allocate();
        tracing::debug!(reference = %reference, "widget reference allocated");

        let fields = widget
            .entry("fields")
            .or_insert_with(|| Value::Array(Vec::new()))
            .as_array_mut()
            .ok_or(ExportError::NotACollection {
                kind: EntityKind::WidgetField,
                key: "fields",
            })?;
        fields.push(json!({
            "type": WIDGET_FIELD_TYPE_STRING,
            "name": WIDGET_FIELD_REFERENCE,
            "value": reference
        }));
        fields.sort_by(|a, b| natural_case_cmp(field_name(a), field_name(b)));
    }

    if let Some(fields) = widget.get_mut(EntityKind::WidgetField.collection_key()) {
        for field in entities_mut(fields, EntityKind::WidgetField, "fields")? {
            if let Some(Value::String(name)) = field.get_mut("name") {
                *name = rewrite_field_name(name);
            }
        }
    }
    Ok(())
}

fn field_name(field: &Value) -> &str {
    field.get("name").and_then(Value::as_str).unwrap_or("")
}
