//! External collaborators consulted by the tab bar.
//!
//! Every query method has a default that declines (`None`), so an
//! implementor only overrides what it actually provides. Returning `None`
//! hands the decision to the next link of the resolution chain.

use iced::Element;

use crate::item::{TabAction, TabItem};
use crate::resolver::ControllerHandle;

/// Supplies the item list and, optionally, per-item content.
///
/// The tab bar only reads from a data source.
pub trait TabBarDataSource<Message> {
    /// Items to show, in strip order.
    fn items(&self) -> Vec<TabItem>;

    /// Host-owned content for `item`.
    fn controller_for(&self, _item: &TabItem) -> Option<ControllerHandle> {
        None
    }

    /// Declarative content for `item`.
    fn view_for(&self, _item: &TabItem) -> Option<Element<'_, Message>> {
        None
    }

    /// Navigation action to relay when `item` asks for its default action.
    fn action_for(&self, item: &TabItem) -> Option<TabAction> {
        Some(TabAction::default_for(item))
    }
}

/// Receives selection, action and search notifications and may supply
/// fallback content.
pub trait TabBarDelegate<Message> {
    fn on_item_selected(&self, _item: &TabItem) {}

    fn on_action_performed(&self, _action: TabAction, _item: &TabItem) {}

    fn controller_for(&self, _item: &TabItem) -> Option<ControllerHandle> {
        None
    }

    fn content_view_for(
        &self,
        _item: &TabItem,
    ) -> Option<Element<'_, Message>> {
        None
    }

    fn on_search(&self, _query: &str) {}

    fn on_search_cleared(&self) {}

    fn on_suggestion_selected(&self, _suggestion: &str) {}
}

/// Data source backed by a fixed item list.
#[derive(Debug, Clone, Default)]
pub struct StaticDataSource {
    items: Vec<TabItem>,
}

impl StaticDataSource {
    pub fn new(items: Vec<TabItem>) -> Self {
        Self { items }
    }
}

impl<Message> TabBarDataSource<Message> for StaticDataSource {
    fn items(&self) -> Vec<TabItem> {
        self.items.clone()
    }
}

/// Delegate that only logs notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingDelegate;

impl<Message> TabBarDelegate<Message> for LoggingDelegate {
    fn on_item_selected(&self, item: &TabItem) {
        log::info!("tab bar selected item {}", item.display_title());
    }

    fn on_action_performed(&self, action: TabAction, item: &TabItem) {
        log::info!(
            "tab bar performed {action:?} for item {}",
            item.display_title()
        );
    }

    fn on_search(&self, query: &str) {
        log::info!("tab bar search submitted: {query}");
    }

    fn on_search_cleared(&self) {
        log::info!("tab bar search cleared");
    }
}
