use std::hash::{Hash, Hasher};

/// Icon used when an item descriptor does not name one.
pub const DEFAULT_ICON: &str = "circle.fill";

/// Immutable descriptor for one tab.
///
/// Equality and hashing are keyed on [`TabItem::id`] only, so two items
/// built from the same identifier compare equal even if their labels differ.
#[derive(Debug, Clone)]
pub struct TabItem {
    id: String,
    title: Option<String>,
    icon: String,
    route: String,
    modal: Option<bool>,
    analytics: String,
}

impl TabItem {
    /// Create an item with default icon, empty route and empty analytics tag.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            id: identifier.into(),
            title: None,
            icon: DEFAULT_ICON.to_owned(),
            route: String::new(),
            modal: None,
            analytics: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = route.into();
        self
    }

    pub fn with_modal(mut self, modal: bool) -> Self {
        self.modal = Some(modal);
        self
    }

    pub fn with_analytics(mut self, analytics: impl Into<String>) -> Self {
        self.analytics = analytics.into();
        self
    }

    /// Return the unique identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Return the label, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Return the symbolic icon name.
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Return the navigation route (deeplink).
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Return the modal flag as provided; `None` when unspecified.
    pub fn is_modal(&self) -> Option<bool> {
        self.modal
    }

    /// Return the analytics tag.
    pub fn analytics(&self) -> &str {
        &self.analytics
    }

    /// Label shown in the strip: the title, or the capitalized identifier.
    pub fn display_title(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => capitalize(&self.id),
        }
    }
}

impl PartialEq for TabItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TabItem {}

impl Hash for TabItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Closed set of navigation actions relayed to the delegate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabAction {
    ResetNavigationStack,
    Present,
    Push,
}

impl TabAction {
    /// Built-in action for an item when no data source overrides it.
    pub fn default_for(item: &TabItem) -> Self {
        match item.id() {
            "search" | "profile" | "settings" => TabAction::Present,
            _ => TabAction::Push,
        }
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
