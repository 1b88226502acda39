use std::fmt;

/// The kinds of entity found in an export document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Template,
    Host,
    Item,
    ItemPrototype,
    DiscoveryRule,
    PreprocessingStep,
    Trigger,
    TriggerPrototype,
    Map,
    Selement,
    Dashboard,
    DashboardPage,
    Widget,
    WidgetField,
}

impl EntityKind {
    /// Key under which a parent entity holds a collection of this kind.
    pub fn collection_key(self) -> &'static str {
        match self {
            EntityKind::Template => "templates",
            EntityKind::Host => "hosts",
            EntityKind::Item => "items",
            EntityKind::ItemPrototype => "item_prototypes",
            EntityKind::DiscoveryRule => "discovery_rules",
            EntityKind::PreprocessingStep => "preprocessing",
            EntityKind::Trigger => "triggers",
            EntityKind::TriggerPrototype => "trigger_prototypes",
            EntityKind::Map => "maps",
            EntityKind::Selement => "selements",
            EntityKind::Dashboard => "dashboards",
            EntityKind::DashboardPage => "pages",
            EntityKind::Widget => "widgets",
            EntityKind::WidgetField => "fields",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Template => "template",
            EntityKind::Host => "host",
            EntityKind::Item => "item",
            EntityKind::ItemPrototype => "item prototype",
            EntityKind::DiscoveryRule => "discovery rule",
            EntityKind::PreprocessingStep => "preprocessing step",
            EntityKind::Trigger => "trigger",
            EntityKind::TriggerPrototype => "trigger prototype",
            EntityKind::Map => "map",
            EntityKind::Selement => "map element",
            EntityKind::Dashboard => "dashboard",
            EntityKind::DashboardPage => "dashboard page",
            EntityKind::Widget => "widget",
            EntityKind::WidgetField => "widget field",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
