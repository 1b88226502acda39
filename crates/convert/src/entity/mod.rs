//! Per-entity converters.
//!
//! Each entity kind has one function editing its map in place. The
//! dispatcher recurses only into child collections that are present;
//! absent collections are never created.

mod dashboard;
mod host;
mod item;
mod map;
mod trigger;

pub use dashboard::{convert_dashboard, convert_widget};

use serde_json::{Map, Value};
use zbx_expression::ExpressionParser;
use zbx_interchange::{entities_mut, EntityKind};

use crate::error::ConvertError;
use crate::expression::ExpressionRewriter;

/// Converts every entity of a collection held under `key`.
pub fn convert_collection<P: ExpressionParser + ?Sized>(
    kind: EntityKind,
    collection: &mut Value,
    key: &'static str,
    rewriter: &ExpressionRewriter<'_, P>,
) -> Result<(), ConvertError> {
    for entity in entities_mut(collection, kind, key)? {
        convert_entity(kind, entity, rewriter)?;
    }
    Ok(())
}

/// Converts the collections of the given kinds that `entity` holds.
pub fn convert_children<P: ExpressionParser + ?Sized>(
    entity: &mut Map<String, Value>,
    kinds: &[EntityKind],
    rewriter: &ExpressionRewriter<'_, P>,
) -> Result<(), ConvertError> {
    for &kind in kinds {
        let key = kind.collection_key();
        if let Some(collection) = entity.get_mut(key) {
            convert_collection(kind, collection, key, rewriter)?;
        }
    }
    Ok(())
}

fn convert_entity<P: ExpressionParser + ?Sized>(
    kind: EntityKind,
    entity: &mut Map<String, Value>,
    rewriter: &ExpressionRewriter<'_, P>,
) -> Result<(), ConvertError> {
    match kind {
        EntityKind::Template => host::convert_template(entity, rewriter),
        EntityKind::Host => host::convert_host(entity, rewriter),
        EntityKind::Item => item::convert_item(entity, EntityKind::Trigger, rewriter),
        EntityKind::ItemPrototype => {
            item::convert_item(entity, EntityKind::TriggerPrototype, rewriter)
        }
        EntityKind::DiscoveryRule => item::convert_discovery_rule(entity, rewriter),
        EntityKind::PreprocessingStep => {
            item::convert_preprocessing_step(entity);
            Ok(())
        }
        EntityKind::Trigger | EntityKind::TriggerPrototype => {
            trigger::convert_trigger(kind, entity, rewriter)
        }
        EntityKind::Map => map::convert_map(entity, rewriter),
        EntityKind::Selement => map::convert_selement(entity, rewriter),
        EntityKind::Dashboard => convert_dashboard(entity),
        // Pages and widgets share their dashboard's reference counter and
        // are converted by the dashboard.
        EntityKind::DashboardPage | EntityKind::Widget | EntityKind::WidgetField => Ok(()),
    }
}

/// Rewrites a string field through the expression rewriter, if present.
fn rewrite_expression_field<P: ExpressionParser + ?Sized>(
    entity: &mut Map<String, Value>,
    field: &str,
    rewriter: &ExpressionRewriter<'_, P>,
) {
    if let Some(Value::String(text)) = entity.get_mut(field) {
        *text = rewriter.convert(text);
    }
}
