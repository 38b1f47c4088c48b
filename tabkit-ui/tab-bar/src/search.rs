//! Search field model shown above the strip when search is enabled.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::{DEFAULT_SEARCH_PLACEHOLDER, SearchConfiguration};
use crate::item::TabItem;

/// Bytes escaped in the query of a search route: everything except RFC 3986
/// unreserved characters, sub-delimiters, `:`, `@`, `/` and `?`.
const QUERY_ALLOWED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b':')
    .remove(b'@')
    .remove(b'/')
    .remove(b'?');

/// Most suggestions offered for one query.
pub const MAX_SUGGESTIONS: usize = 5;

/// Identifier of the item synthesized for a submitted query.
pub const SEARCH_ITEM_ID: &str = "search";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    enabled: bool,
    placeholder: String,
    query: String,
    suggestions: Vec<String>,
    active: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(&SearchConfiguration::default())
    }
}

impl SearchState {
    pub fn new(configuration: &SearchConfiguration) -> Self {
        let placeholder = if configuration.placeholder.is_empty() {
            DEFAULT_SEARCH_PLACEHOLDER.to_owned()
        } else {
            configuration.placeholder.clone()
        };

        Self {
            enabled: configuration.enabled,
            placeholder,
            query: String::new(),
            suggestions: Vec::new(),
            active: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Whether suggestions are showing or a query was submitted.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Replace the query and recompute suggestions from `items`.
    pub fn set_query(&mut self, query: impl Into<String>, items: &[TabItem]) {
        self.query = query.into();
        self.suggestions = suggestions(items, &self.query);
        self.active = !self.suggestions.is_empty();
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.suggestions.clear();
        self.active = false;
    }

    /// Submit the current query. Returns the item to report, if any.
    pub fn submit(&mut self) -> Option<TabItem> {
        let item = self.submission()?;
        self.active = true;
        Some(item)
    }

    /// Item to report for the current query, if there is anything to submit.
    ///
    /// The query is reported exactly as typed.
    pub fn submission(&self) -> Option<TabItem> {
        if self.query.is_empty() {
            None
        } else {
            Some(search_item(&self.query))
        }
    }
}

/// Titles of `items` containing `query`, ignoring case, in item order.
pub fn suggestions(items: &[TabItem], query: &str) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .filter_map(TabItem::title)
        .filter(|title| title.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .map(str::to_owned)
        .collect()
}

/// Item describing a submitted search.
pub fn search_item(query: &str) -> TabItem {
    let encoded = utf8_percent_encode(query, QUERY_ALLOWED);

    TabItem::new(SEARCH_ITEM_ID)
        .with_title("Search")
        .with_icon("magnifyingglass")
        .with_route(format!("app://search?query={encoded}"))
        .with_modal(false)
        .with_analytics(format!("search_query:{query}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(pairs: &[(&str, &str)]) -> Vec<TabItem> {
        pairs
            .iter()
            .map(|(id, title)| TabItem::new(*id).with_title(*title))
            .collect()
    }

    #[test]
    fn suggestions_match_case_insensitively_in_item_order() {
        let items = titled(&[
            ("home", "Home"),
            ("search", "Search"),
            ("phone", "Phone"),
        ]);
        assert_eq!(suggestions(&items, "HO"), vec!["Home", "Phone"]);
        assert!(suggestions(&items, "").is_empty());
        assert!(suggestions(&items, "zzz").is_empty());
    }

    #[test]
    fn suggestions_are_capped_and_skip_untitled_items() {
        let mut items: Vec<TabItem> = (0..8)
            .map(|i| TabItem::new(format!("t{i}")).with_title(format!("Tab {i}")))
            .collect();
        items.insert(0, TabItem::new("tab"));
        let found = suggestions(&items, "tab");
        assert_eq!(found.len(), MAX_SUGGESTIONS);
        assert_eq!(found[0], "Tab 0");
    }

    #[test]
    fn empty_query_deactivates_search() {
        let items = titled(&[("home", "Home")]);
        let mut state = SearchState::default();
        assert!(!state.is_enabled());
        assert_eq!(state.placeholder(), "Search tabs...");

        state.set_query("ho", &items);
        assert!(state.is_active());
        assert_eq!(state.suggestions(), ["Home".to_owned()]);

        state.set_query("", &items);
        assert!(!state.is_active());
        assert!(state.suggestions().is_empty());
        assert!(state.submit().is_none());
        assert!(!state.is_active());
    }

    #[test]
    fn submission_synthesizes_search_item() {
        let mut state = SearchState::new(&SearchConfiguration {
            enabled: true,
            placeholder: String::from("Find"),
        });
        state.set_query("red shoes&more", &[]);
        assert!(!state.is_active());

        let item = state.submit().expect("non-empty query submits");
        assert!(state.is_active());
        assert_eq!(item.id(), SEARCH_ITEM_ID);
        assert_eq!(item.title(), Some("Search"));
        assert_eq!(item.icon(), "magnifyingglass");
        assert_eq!(item.route(), "app://search?query=red%20shoes&more");
        assert_eq!(item.is_modal(), Some(false));
        assert_eq!(item.analytics(), "search_query:red shoes&more");
    }

    #[test]
    fn route_escapes_only_characters_outside_the_query_set() {
        let item = search_item("a#b%c\"d<é>");
        assert_eq!(item.route(), "app://search?query=a%23b%25c%22d%3C%C3%A9%3E");

        let item = search_item("k=v/p?x@y:z");
        assert_eq!(item.route(), "app://search?query=k=v/p?x@y:z");
    }

    #[test]
    fn query_is_submitted_as_typed() {
        let mut state = SearchState::default();
        state.set_query(" shoes ", &[]);
        let item = state.submit().expect("padded query submits");
        assert_eq!(item.analytics(), "search_query: shoes ");
        assert_eq!(item.route(), "app://search?query=%20shoes%20");

        state.set_query("   ", &[]);
        assert!(state.submit().is_some());
    }

    #[test]
    fn clear_resets_query() {
        let items = titled(&[("home", "Home")]);
        let mut state = SearchState::default();
        state.set_query("h", &items);
        state.clear();
        assert_eq!(state.query(), "");
        assert!(!state.is_active());
        assert!(state.suggestions().is_empty());
    }
}
