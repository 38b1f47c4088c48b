use std::time::Instant;

use iced::Task;

use super::TabBarWidget;
use super::event::{TabBarEffect, TabBarEvent};
use crate::item::{TabAction, TabItem};
use crate::state::Visibility;

/// Reduce a tab bar event into state mutation and effect tasks.
pub(super) fn reduce<Message>(
    widget: &mut TabBarWidget<Message>,
    event: TabBarEvent,
) -> Task<TabBarEffect> {
    match apply(widget, event) {
        Some(effect) => Task::done(effect),
        None => Task::none(),
    }
}

fn apply<Message>(
    widget: &mut TabBarWidget<Message>,
    event: TabBarEvent,
) -> Option<TabBarEffect> {
    match event {
        TabBarEvent::Select { id } => select(widget, &id),
        TabBarEvent::PerformAction { action, id } => {
            perform_action(widget, action, &id)
        },
        TabBarEvent::PerformDefaultAction { id } => {
            perform_default_action(widget, &id)
        },
        TabBarEvent::SetVisibility(visibility) => {
            set_visibility(widget, visibility)
        },
        TabBarEvent::ToggleVisibility => {
            let visibility =
                Visibility::from_flag(!widget.visibility().is_visible());
            set_visibility(widget, visibility)
        },
        TabBarEvent::UpdateItems(items) => Some(update_items(widget, items)),
        TabBarEvent::ReloadItems => {
            let Some(items) =
                widget.data_source.as_deref().map(|source| source.items())
            else {
                log::warn!("tab bar reload requested without a data source");
                return None;
            };
            Some(update_items(widget, items))
        },
        TabBarEvent::SearchChanged(query) => {
            widget.search.set_query(query, widget.state.items());
            None
        },
        TabBarEvent::SearchSubmitted => submit_search(widget),
        TabBarEvent::SearchCleared => {
            widget.search.clear();
            if let Some(delegate) = widget.delegate.as_deref() {
                delegate.on_search_cleared();
            }
            Some(TabBarEffect::SearchCleared)
        },
        TabBarEvent::SuggestionSelected(suggestion) => {
            select_suggestion(widget, suggestion)
        },
        TabBarEvent::Tick(now) => {
            widget.clock = widget.clock.max(now);
            None
        },
    }
}

fn member<Message>(
    widget: &TabBarWidget<Message>,
    id: &str,
) -> Option<TabItem> {
    let item = widget.state.item(id).cloned();
    if item.is_none() {
        log::warn!("tab bar ignored event for unknown item {id}");
    }
    item
}

fn select<Message>(
    widget: &mut TabBarWidget<Message>,
    id: &str,
) -> Option<TabBarEffect> {
    let item = member(widget, id)?;

    widget
        .state
        .select_item(item, widget.delegate.as_deref());
    Some(TabBarEffect::Selected { id: id.to_owned() })
}

fn perform_action<Message>(
    widget: &mut TabBarWidget<Message>,
    action: TabAction,
    id: &str,
) -> Option<TabBarEffect> {
    let item = member(widget, id)?;

    widget
        .state
        .perform_action(action, &item, widget.delegate.as_deref());
    Some(TabBarEffect::ActionPerformed {
        action,
        id: id.to_owned(),
    })
}

fn perform_default_action<Message>(
    widget: &mut TabBarWidget<Message>,
    id: &str,
) -> Option<TabBarEffect> {
    let item = member(widget, id)?;

    let action = widget
        .data_source
        .as_deref()
        .and_then(|data_source| data_source.action_for(&item))
        .unwrap_or_else(|| TabAction::default_for(&item));
    perform_action(widget, action, id)
}

fn set_visibility<Message>(
    widget: &mut TabBarWidget<Message>,
    visibility: Visibility,
) -> Option<TabBarEffect> {
    let changed = widget.state.visibility() != visibility;
    widget.state.set_visibility(visibility);
    if !changed {
        return None;
    }

    let now = Instant::now();
    widget.clock = widget.clock.max(now);
    widget.fade.start(
        visibility,
        widget.style.transition(),
        widget.animated,
        widget.clock,
    );
    Some(TabBarEffect::VisibilityChanged(visibility))
}

fn update_items<Message>(
    widget: &mut TabBarWidget<Message>,
    items: Vec<TabItem>,
) -> TabBarEffect {
    widget.state.update_items(items);
    if !widget.search.query().is_empty() {
        let query = widget.search.query().to_owned();
        widget.search.set_query(query, widget.state.items());
    }
    TabBarEffect::ItemsUpdated {
        selected: widget.state.selected_item().map(|item| item.id().to_owned()),
    }
}

fn submit_search<Message>(
    widget: &mut TabBarWidget<Message>,
) -> Option<TabBarEffect> {
    let item = widget.search.submit()?;
    let query = widget.search.query().to_owned();

    log::debug!("tab bar search submitted: {}", item.route());
    if let Some(delegate) = widget.delegate.as_deref() {
        delegate.on_item_selected(&item);
        delegate.on_search(&query);
    }
    Some(TabBarEffect::Searched { query })
}

fn select_suggestion<Message>(
    widget: &mut TabBarWidget<Message>,
    suggestion: String,
) -> Option<TabBarEffect> {
    widget
        .search
        .set_query(suggestion.clone(), widget.state.items());
    let effect = submit_search(widget)?;
    if let Some(delegate) = widget.delegate.as_deref() {
        delegate.on_suggestion_selected(&suggestion);
    }
    Some(effect)
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::collaborators::TabBarDelegate;

    #[derive(Clone, Default)]
    struct Counter(Rc<Cell<usize>>);

    impl TabBarDelegate<()> for Counter {
        fn on_item_selected(&self, _item: &TabItem) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[derive(Clone, Default)]
    struct SearchLog(Rc<RefCell<Vec<String>>>);

    impl TabBarDelegate<()> for SearchLog {
        fn on_item_selected(&self, item: &TabItem) {
            self.0.borrow_mut().push(item.analytics().to_owned());
        }

        fn on_search(&self, query: &str) {
            self.0.borrow_mut().push(format!("search_query:{query}"));
        }
    }

    #[test]
    fn state_changes_produce_effects() {
        let mut widget = TabBarWidget::<()>::default();

        assert_eq!(
            apply(&mut widget, TabBarEvent::Select { id: String::from("profile") }),
            Some(TabBarEffect::Selected { id: String::from("profile") })
        );
        assert_eq!(
            apply(
                &mut widget,
                TabBarEvent::PerformDefaultAction { id: String::from("favorites") }
            ),
            Some(TabBarEffect::ActionPerformed {
                action: TabAction::Push,
                id: String::from("favorites"),
            })
        );
        assert_eq!(
            apply(&mut widget, TabBarEvent::ToggleVisibility),
            Some(TabBarEffect::VisibilityChanged(Visibility::Hidden))
        );
        assert_eq!(
            apply(
                &mut widget,
                TabBarEvent::UpdateItems(vec![TabItem::new("a"), TabItem::new("b")])
            ),
            Some(TabBarEffect::ItemsUpdated { selected: Some(String::from("a")) })
        );
        assert_eq!(
            apply(&mut widget, TabBarEvent::SearchCleared),
            Some(TabBarEffect::SearchCleared)
        );
    }

    #[test]
    fn ignored_events_produce_no_effect() {
        let mut widget = TabBarWidget::<()>::default();

        assert_eq!(
            apply(&mut widget, TabBarEvent::Select { id: String::from("nope") }),
            None
        );
        assert_eq!(
            apply(&mut widget, TabBarEvent::SetVisibility(Visibility::Visible)),
            None
        );
        assert_eq!(apply(&mut widget, TabBarEvent::ReloadItems), None);
        assert_eq!(apply(&mut widget, TabBarEvent::SearchSubmitted), None);
        assert_eq!(
            apply(&mut widget, TabBarEvent::SearchChanged(String::from("ho"))),
            None
        );
    }

    #[test]
    fn search_callbacks_share_the_typed_query() {
        let log = SearchLog::default();
        let mut widget = TabBarWidget::<()>::default().with_delegate(log.clone());

        let _ = apply(&mut widget, TabBarEvent::SearchChanged(String::from(" shoes ")));
        assert_eq!(
            apply(&mut widget, TabBarEvent::SearchSubmitted),
            Some(TabBarEffect::Searched { query: String::from(" shoes ") })
        );
        assert_eq!(
            *log.0.borrow(),
            vec![
                String::from("search_query: shoes "),
                String::from("search_query: shoes "),
            ]
        );
    }

    #[test]
    fn reselecting_the_active_item_still_notifies() {
        let counter = Counter::default();
        let mut widget =
            TabBarWidget::<()>::default().with_delegate(counter.clone());

        let _ = reduce(&mut widget, TabBarEvent::Select { id: String::from("home") });
        let _ = reduce(&mut widget, TabBarEvent::Select { id: String::from("home") });
        assert_eq!(counter.0.get(), 2);
    }

    #[test]
    fn repeated_visibility_does_not_restart_fade() {
        let mut widget = TabBarWidget::<()>::default();
        let _ = reduce(&mut widget, TabBarEvent::SetVisibility(Visibility::Visible));
        assert!(!widget.is_animating());
        assert_eq!(widget.opacity(), 1.0);
    }

    #[test]
    fn reload_without_data_source_is_a_noop() {
        let mut widget = TabBarWidget::<()>::default();
        let _ = reduce(&mut widget, TabBarEvent::ReloadItems);
        assert_eq!(widget.items().len(), 4);
    }

    #[test]
    fn item_update_refreshes_suggestions() {
        let mut widget = TabBarWidget::<()>::default();
        let _ = reduce(&mut widget, TabBarEvent::SearchChanged(String::from("e")));
        assert_eq!(widget.search.suggestions().len(), 4);

        let _ = reduce(
            &mut widget,
            TabBarEvent::UpdateItems(vec![TabItem::new("a").with_title("Alpha")]),
        );
        assert!(widget.search.suggestions().is_empty());
        assert!(!widget.search.is_active());
    }

    #[test]
    fn tick_never_moves_clock_backwards() {
        let mut widget = TabBarWidget::<()>::default();
        let before = widget.clock;
        let _ = reduce(&mut widget, TabBarEvent::Tick(before - std::time::Duration::from_millis(5)));
        assert_eq!(widget.clock, before);
    }
}
