use std::fmt;
use std::time::{Duration, Instant};

use crate::collaborators::TabBarDelegate;
use crate::item::{TabAction, TabItem};

/// Whether the strip is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }

    pub fn from_flag(visible: bool) -> Self {
        if visible { Self::Visible } else { Self::Hidden }
    }
}

/// Mutation applied to a [`TabBarState`], delivered to observers.
#[derive(Debug, Clone, PartialEq)]
pub enum TabBarChange {
    ItemsUpdated { selection_changed: bool },
    Selected(TabItem),
    VisibilityChanged(Visibility),
}

type Observer = Box<dyn FnMut(&TabBarChange)>;

/// Live items, selection and visibility of one mounted tab bar.
///
/// Every mutation notifies observers synchronously, in subscription order.
/// Selection changes additionally reach the delegate, after the observers.
pub struct TabBarState {
    items: Vec<TabItem>,
    selected: Option<TabItem>,
    visibility: Visibility,
    observers: Vec<Observer>,
}

impl fmt::Debug for TabBarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabBarState")
            .field("items", &self.items)
            .field("selected", &self.selected)
            .field("visibility", &self.visibility)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for TabBarState {
    fn default() -> Self {
        Self::new(Vec::new(), None, Visibility::Visible)
    }
}

impl TabBarState {
    /// Create state, auto-selecting the first item when `selected` is absent
    /// or not a member of `items`.
    pub fn new(
        items: Vec<TabItem>,
        selected: Option<TabItem>,
        visibility: Visibility,
    ) -> Self {
        let selected = match selected {
            Some(item) if items.contains(&item) => Some(item),
            _ => items.first().cloned(),
        };

        Self {
            items,
            selected,
            visibility,
            observers: Vec::new(),
        }
    }

    pub fn items(&self) -> &[TabItem] {
        &self.items
    }

    pub fn selected_item(&self) -> Option<&TabItem> {
        self.selected.as_ref()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a member item by identifier.
    pub fn item(&self, id: &str) -> Option<&TabItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.item(id).is_some()
    }

    /// Register an observer called after every mutation.
    pub fn subscribe(&mut self, observer: impl FnMut(&TabBarChange) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Replace the item list.
    ///
    /// The current selection survives when its id is still present;
    /// otherwise the first new item (or nothing) becomes selected.
    pub fn update_items(&mut self, items: Vec<TabItem>) -> TabBarChange {
        let keep = self
            .selected
            .as_ref()
            .is_some_and(|selected| items.contains(selected));
        let previous = self.selected.take();

        self.selected = if keep {
            previous.clone()
        } else {
            items.first().cloned()
        };
        self.items = items;

        let selection_changed = previous.as_ref().map(TabItem::id)
            != self.selected.as_ref().map(TabItem::id);
        log::debug!(
            "tab bar items updated: {} items, selection {:?}",
            self.items.len(),
            self.selected.as_ref().map(TabItem::id)
        );

        let change = TabBarChange::ItemsUpdated { selection_changed };
        self.notify(&change);
        change
    }

    /// Select `item` unconditionally.
    ///
    /// Callers pass a member of the current item list; membership is not
    /// checked here. The delegate hears about the selection exactly once,
    /// after the state is applied and observers ran.
    pub fn select_item<M>(
        &mut self,
        item: TabItem,
        delegate: Option<&dyn TabBarDelegate<M>>,
    ) -> TabBarChange {
        log::debug!("tab bar item selected: {}", item.id());
        self.selected = Some(item.clone());

        self.notify(&TabBarChange::Selected(item.clone()));
        if let Some(delegate) = delegate {
            delegate.on_item_selected(&item);
        }
        TabBarChange::Selected(item)
    }

    pub fn set_visibility(&mut self, visibility: Visibility) -> TabBarChange {
        log::debug!("tab bar visibility set to {visibility:?}");
        self.visibility = visibility;

        let change = TabBarChange::VisibilityChanged(visibility);
        self.notify(&change);
        change
    }

    /// Relay an action to the delegate. No state is touched.
    pub fn perform_action<M>(
        &self,
        action: TabAction,
        item: &TabItem,
        delegate: Option<&dyn TabBarDelegate<M>>,
    ) {
        log::debug!("tab bar action {action:?} for {}", item.id());
        if let Some(delegate) = delegate {
            delegate.on_action_performed(action, item);
        }
    }

    fn notify(&mut self, change: &TabBarChange) {
        for observer in &mut self.observers {
            observer(change);
        }
    }
}

/// Opacity transition between visibility states.
///
/// Opacity runs from 0.0 (hidden) to 1.0 (visible) with an ease-in-out
/// curve. A fade started mid-flight continues from the current opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityFade {
    from: f32,
    to: f32,
    started: Option<Instant>,
    duration: Duration,
}

impl VisibilityFade {
    /// A fade resting at `visibility`.
    pub fn settled(visibility: Visibility) -> Self {
        let opacity = opacity_of(visibility);
        Self {
            from: opacity,
            to: opacity,
            started: None,
            duration: Duration::ZERO,
        }
    }

    /// Head toward `target`. Without animation the opacity jumps.
    pub fn start(
        &mut self,
        target: Visibility,
        duration: Duration,
        animated: bool,
        now: Instant,
    ) {
        let to = opacity_of(target);
        if !animated || duration.is_zero() {
            *self = Self::settled(target);
            return;
        }

        self.from = self.opacity(now);
        self.to = to;
        self.started = Some(now);
        self.duration = duration;
    }

    pub fn opacity(&self, now: Instant) -> f32 {
        let progress = self.progress(now);
        self.from + (self.to - self.from) * ease_in_out(progress)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.started.is_some() && self.progress(now) < 1.0
    }

    /// Opacity the fade ends at.
    pub fn target(&self) -> f32 {
        self.to
    }

    fn progress(&self, now: Instant) -> f32 {
        match self.started {
            None => 1.0,
            Some(started) => {
                let elapsed = now.saturating_duration_since(started);
                (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
            },
        }
    }
}

fn opacity_of(visibility: Visibility) -> f32 {
    if visibility.is_visible() { 1.0 } else { 0.0 }
}

fn ease_in_out(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}
