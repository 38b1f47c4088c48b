//! Parameter bag parsing.
//!
//! Hosts describe a tab bar with an untyped JSON object. Recognized keys are
//! listed in [`keys`]; anything else is ignored. Absent keys (or `null`)
//! take documented defaults, while present keys with the wrong shape are
//! rejected with a [`TabBarError`].

use serde_json::{Map, Value};

use crate::errors::TabBarError;
use crate::item::TabItem;
use crate::state::Visibility;
use crate::style::StyleKind;

/// Recognized parameter keys.
pub mod keys {
    pub const ITEMS: &str = "items";
    pub const SELECTED_ITEM: &str = "selectedItem";
    pub const STYLE: &str = "style";
    pub const IS_ANIMATED: &str = "isAnimated";
    pub const SHOW_TAB_BAR: &str = "showTabBar";
    pub const IS_DARK_MODE: &str = "isDarkMode";
    pub const SEARCH_ENABLED: &str = "searchEnabled";
    pub const SEARCH_PLACEHOLDER: &str = "searchPlaceholder";

    pub const IDENTIFIER: &str = "identifier";
    pub const TITLE: &str = "title";
    pub const ICON: &str = "icon";
    pub const DEEPLINK: &str = "deeplink";
    pub const MODAL: &str = "modal";
    pub const ANALYTICS: &str = "analytics";
}

/// Placeholder shown in an empty search field.
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search tabs...";

struct ItemRow {
    id: &'static str,
    title: &'static str,
    icon: &'static str,
    route: &'static str,
    modal: bool,
    analytics: &'static str,
}

const HOME: ItemRow = ItemRow {
    id: "home",
    title: "Home",
    icon: "house.fill",
    route: "app://home",
    modal: false,
    analytics: "tab_home_selected",
};

const SEARCH: ItemRow = ItemRow {
    id: "search",
    title: "Search",
    icon: "magnifyingglass",
    route: "app://search",
    modal: false,
    analytics: "tab_search_selected",
};

const FAVORITES: ItemRow = ItemRow {
    id: "favorites",
    title: "Favorites",
    icon: "heart.fill",
    route: "app://favorites",
    modal: false,
    analytics: "tab_favorites_selected",
};

const PROFILE: ItemRow = ItemRow {
    id: "profile",
    title: "Profile",
    icon: "person.fill",
    route: "app://profile",
    modal: false,
    analytics: "tab_profile_selected",
};

const SETTINGS: ItemRow = ItemRow {
    id: "settings",
    title: "Settings",
    icon: "gearshape.fill",
    route: "app://settings",
    modal: true,
    analytics: "tab_settings_selected",
};

const DEFAULT_ROWS: [ItemRow; 4] = [HOME, SEARCH, FAVORITES, PROFILE];
const EXTENDED_ROWS: [ItemRow; 5] = [HOME, SEARCH, FAVORITES, PROFILE, SETTINGS];

impl ItemRow {
    fn to_item(&self) -> TabItem {
        TabItem::new(self.id)
            .with_title(self.title)
            .with_icon(self.icon)
            .with_route(self.route)
            .with_modal(self.modal)
            .with_analytics(self.analytics)
    }
}

/// Home, search, favorites and profile.
pub fn default_items() -> Vec<TabItem> {
    DEFAULT_ROWS.iter().map(ItemRow::to_item).collect()
}

/// The default items followed by a modal settings tab.
pub fn extended_items() -> Vec<TabItem> {
    EXTENDED_ROWS.iter().map(ItemRow::to_item).collect()
}

/// Search field options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfiguration {
    pub enabled: bool,
    pub placeholder: String,
}

impl Default for SearchConfiguration {
    fn default() -> Self {
        Self {
            enabled: false,
            placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_owned(),
        }
    }
}

/// Strongly shaped tab bar configuration.
///
/// Built once per parameter bag and never mutated; a new bag produces a new
/// configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TabBarConfiguration {
    pub items: Vec<TabItem>,
    /// Member of `items`, or `None` only when `items` is empty.
    pub selected_item: Option<TabItem>,
    pub style: StyleKind,
    pub animated: bool,
    pub visible: bool,
    pub dark_mode: bool,
    pub search: SearchConfiguration,
}

impl Default for TabBarConfiguration {
    fn default() -> Self {
        let items = default_items();
        let selected_item = items.first().cloned();
        Self {
            items,
            selected_item,
            style: StyleKind::Default,
            animated: true,
            visible: true,
            dark_mode: false,
            search: SearchConfiguration::default(),
        }
    }
}

impl TabBarConfiguration {
    /// Parse a parameter bag. `None` yields [`TabBarConfiguration::default`].
    pub fn parse(
        parameters: Option<&Map<String, Value>>,
    ) -> Result<Self, TabBarError> {
        let Some(parameters) = parameters else {
            return Ok(Self::default());
        };

        let items = parse_items(parameters)?;
        let selected_item = parse_selected_item(parameters, &items)?;
        let style = parse_style(parameters)?;
        let animated = parse_bool(parameters, keys::IS_ANIMATED, true)?;
        let visible = parse_bool(parameters, keys::SHOW_TAB_BAR, true)?;
        let dark_mode = parse_bool(parameters, keys::IS_DARK_MODE, false)?;
        let search = SearchConfiguration {
            enabled: parse_bool(parameters, keys::SEARCH_ENABLED, false)?,
            placeholder: optional_string(parameters, keys::SEARCH_PLACEHOLDER)?
                .unwrap_or_else(|| DEFAULT_SEARCH_PLACEHOLDER.to_owned()),
        };

        Ok(Self {
            items,
            selected_item,
            style,
            animated,
            visible,
            dark_mode,
            search,
        })
    }

    /// Parse a JSON document whose top level is an object.
    pub fn from_json_str(json: &str) -> Result<Self, TabBarError> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(parameters) => Self::parse(Some(&parameters)),
            Value::Null => Self::parse(None),
            _ => Err(TabBarError::invalid("parameters")),
        }
    }

    pub fn visibility(&self) -> Visibility {
        Visibility::from_flag(self.visible)
    }
}

/// Build one item from a descriptor object.
pub fn parse_item(
    descriptor: &Map<String, Value>,
) -> Result<TabItem, TabBarError> {
    let identifier = match descriptor.get(keys::IDENTIFIER) {
        Some(Value::String(identifier)) => identifier.clone(),
        _ => return Err(TabBarError::missing(keys::IDENTIFIER)),
    };

    let mut item = TabItem::new(identifier);
    if let Some(title) = optional_string(descriptor, keys::TITLE)? {
        item = item.with_title(title);
    }
    if let Some(icon) = optional_string(descriptor, keys::ICON)? {
        item = item.with_icon(icon);
    }
    if let Some(route) = optional_string(descriptor, keys::DEEPLINK)? {
        item = item.with_route(route);
    }
    if let Some(modal) = optional_bool(descriptor, keys::MODAL)? {
        item = item.with_modal(modal);
    }
    if let Some(analytics) = optional_string(descriptor, keys::ANALYTICS)? {
        item = item.with_analytics(analytics);
    }

    Ok(item)
}

fn parse_items(
    parameters: &Map<String, Value>,
) -> Result<Vec<TabItem>, TabBarError> {
    let descriptors = match present(parameters, keys::ITEMS) {
        None => return Ok(default_items()),
        Some(Value::Array(descriptors)) => descriptors,
        Some(_) => return Err(TabBarError::invalid(keys::ITEMS)),
    };

    descriptors
        .iter()
        .map(|descriptor| match descriptor {
            Value::Object(descriptor) => parse_item(descriptor),
            _ => Err(TabBarError::invalid(keys::ITEMS)),
        })
        .collect()
}

fn parse_selected_item(
    parameters: &Map<String, Value>,
    items: &[TabItem],
) -> Result<Option<TabItem>, TabBarError> {
    let descriptor = match present(parameters, keys::SELECTED_ITEM) {
        None => return Ok(items.first().cloned()),
        Some(Value::Object(descriptor)) => descriptor,
        Some(_) => return Err(TabBarError::invalid(keys::SELECTED_ITEM)),
    };

    let requested = parse_item(descriptor)?;
    let resolved = items
        .iter()
        .find(|item| item.id() == requested.id())
        .or_else(|| items.first())
        .cloned();

    if resolved.as_ref().map(TabItem::id) != Some(requested.id()) {
        log::debug!(
            "selected item {} is not in the item list; falling back to the first item",
            requested.id()
        );
    }

    Ok(resolved)
}

fn parse_style(
    parameters: &Map<String, Value>,
) -> Result<StyleKind, TabBarError> {
    match present(parameters, keys::STYLE) {
        None => Ok(StyleKind::Default),
        Some(Value::String(name)) => StyleKind::from_name(name)
            .ok_or_else(|| TabBarError::invalid_enum(keys::STYLE, name.as_str())),
        Some(other) => {
            Err(TabBarError::invalid_enum(keys::STYLE, other.to_string()))
        },
    }
}

fn parse_bool(
    parameters: &Map<String, Value>,
    key: &str,
    default: bool,
) -> Result<bool, TabBarError> {
    Ok(optional_bool(parameters, key)?.unwrap_or(default))
}

fn optional_bool(
    map: &Map<String, Value>,
    key: &str,
) -> Result<Option<bool>, TabBarError> {
    match present(map, key) {
        None => Ok(None),
        Some(Value::Bool(value)) => Ok(Some(*value)),
        Some(_) => Err(TabBarError::invalid(key)),
    }
}

fn optional_string(
    map: &Map<String, Value>,
    key: &str,
) -> Result<Option<String>, TabBarError> {
    match present(map, key) {
        None => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(TabBarError::invalid(key)),
    }
}

/// Value for `key`, treating JSON `null` as absent.
fn present<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|value| !value.is_null())
}
