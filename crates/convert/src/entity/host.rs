//! Templates and hosts.

use serde_json::{Map, Value};
use zbx_expression::ExpressionParser;
use zbx_interchange::EntityKind;

use super::convert_children;
use crate::error::ConvertError;
use crate::expression::ExpressionRewriter;

pub(super) fn convert_template<P: ExpressionParser + ?Sized>(
    template: &mut Map<String, Value>,
    rewriter: &ExpressionRewriter<'_, P>,
) -> Result<(), ConvertError> {
    convert_children(
        template,
        &[
            EntityKind::Item,
            EntityKind::DiscoveryRule,
            EntityKind::Dashboard,
        ],
        rewriter,
    )
}

/// Hosts carry no dashboards.
pub(super) fn convert_host<P: ExpressionParser + ?Sized>(
    host: &mut Map<String, Value>,
    rewriter: &ExpressionRewriter<'_, P>,
) -> Result<(), ConvertError> {
    convert_children(
        host,
        &[EntityKind::Item, EntityKind::DiscoveryRule],
        rewriter,
    )
}
