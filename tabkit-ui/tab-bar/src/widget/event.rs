use std::time::Instant;

use crate::item::{TabAction, TabItem};
use crate::state::Visibility;

/// Events reduced by [`TabBarWidget`](super::TabBarWidget).
#[derive(Debug, Clone)]
pub enum TabBarEvent {
    /// An item button was pressed.
    Select { id: String },
    /// Relay an explicit action for a member item.
    PerformAction { action: TabAction, id: String },
    /// Relay the action the data source (or the built-in table) picks.
    PerformDefaultAction { id: String },
    SetVisibility(Visibility),
    ToggleVisibility,
    /// Replace the item list.
    UpdateItems(Vec<TabItem>),
    /// Pull a fresh item list from the data source.
    ReloadItems,
    SearchChanged(String),
    SearchSubmitted,
    SearchCleared,
    SuggestionSelected(String),
    /// Frame tick while a visibility fade runs.
    Tick(Instant),
}

/// Effect events produced by the tab bar reducer.
///
/// Delegate callbacks have already run when an effect is delivered.
#[derive(Debug, Clone, PartialEq)]
pub enum TabBarEffect {
    /// A member item became the selection.
    Selected { id: String },
    /// An action was relayed for a member item.
    ActionPerformed { action: TabAction, id: String },
    /// Visibility changed; frames are needed while the host is animating.
    VisibilityChanged(Visibility),
    /// The item list was replaced. Carries the selection afterwards.
    ItemsUpdated { selected: Option<String> },
    /// A non-empty query was submitted.
    Searched { query: String },
    SearchCleared,
}
