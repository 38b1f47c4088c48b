pub mod event;
mod reducer;
mod view;

use std::fmt;
use std::time::Instant;

use iced::{Element, Task};
use serde_json::{Map, Value};

pub use self::event::{TabBarEffect, TabBarEvent};
use crate::collaborators::{TabBarDataSource, TabBarDelegate};
use crate::config::TabBarConfiguration;
use crate::errors::TabBarError;
use crate::item::TabItem;
use crate::resolver::{self, ControllerHandle, ResolvedContent};
use crate::search::SearchState;
use crate::state::{TabBarChange, TabBarState, Visibility, VisibilityFade};
use crate::style::TabBarStyle;
use crate::theme::TabBarPalette;

/// Mounted tab bar: state, content resolution and strip rendering.
///
/// The widget exclusively owns its [`TabBarState`]. Selection changes are
/// applied to the state before the delegate is told about them, and content
/// for the active item is resolved again on every render.
pub struct TabBarWidget<Message> {
    state: TabBarState,
    style: TabBarStyle,
    palette: TabBarPalette,
    animated: bool,
    fade: VisibilityFade,
    clock: Instant,
    search: SearchState,
    data_source: Option<Box<dyn TabBarDataSource<Message>>>,
    delegate: Option<Box<dyn TabBarDelegate<Message>>>,
}

impl<Message> fmt::Debug for TabBarWidget<Message> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabBarWidget")
            .field("state", &self.state)
            .field("style", &self.style)
            .field("animated", &self.animated)
            .field("search", &self.search)
            .field("has_data_source", &self.data_source.is_some())
            .field("has_delegate", &self.delegate.is_some())
            .finish_non_exhaustive()
    }
}

impl<Message> Default for TabBarWidget<Message> {
    fn default() -> Self {
        Self::new(TabBarConfiguration::default())
    }
}

impl<Message> TabBarWidget<Message> {
    /// Mount a tab bar for `configuration`.
    pub fn new(configuration: TabBarConfiguration) -> Self {
        let visibility = configuration.visibility();
        let state = TabBarState::new(
            configuration.items,
            configuration.selected_item,
            visibility,
        );

        Self {
            state,
            style: TabBarStyle::new(configuration.style),
            palette: TabBarPalette::for_dark_mode(configuration.dark_mode),
            animated: configuration.animated,
            fade: VisibilityFade::settled(visibility),
            clock: Instant::now(),
            search: SearchState::new(&configuration.search),
            data_source: None,
            delegate: None,
        }
    }

    /// Parse a parameter bag and mount the result.
    pub fn from_parameters(
        parameters: Option<&Map<String, Value>>,
    ) -> Result<Self, TabBarError> {
        TabBarConfiguration::parse(parameters).map(Self::new)
    }

    pub fn from_json_str(json: &str) -> Result<Self, TabBarError> {
        TabBarConfiguration::from_json_str(json).map(Self::new)
    }

    /// Replace the strip style, e.g. with a decorated one.
    pub fn with_style(mut self, style: impl Into<TabBarStyle>) -> Self {
        self.style = style.into();
        self
    }

    pub fn with_palette(mut self, palette: TabBarPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Attach a data source and take its item list.
    pub fn with_data_source(
        mut self,
        data_source: impl TabBarDataSource<Message> + 'static,
    ) -> Self {
        self.state.update_items(data_source.items());
        self.data_source = Some(Box::new(data_source));
        self
    }

    pub fn with_delegate(
        mut self,
        delegate: impl TabBarDelegate<Message> + 'static,
    ) -> Self {
        self.delegate = Some(Box::new(delegate));
        self
    }

    /// Observe every state mutation.
    pub fn subscribe(&mut self, observer: impl FnMut(&TabBarChange) + 'static) {
        self.state.subscribe(observer);
    }

    /// Reduce an event into state updates and the resulting effect.
    ///
    /// Events that leave the tab bar unchanged produce an empty task.
    pub fn reduce(&mut self, event: TabBarEvent) -> Task<TabBarEffect> {
        reducer::reduce(self, event)
    }

    pub fn state(&self) -> &TabBarState {
        &self.state
    }

    pub fn items(&self) -> &[TabItem] {
        self.state.items()
    }

    pub fn selected_item(&self) -> Option<&TabItem> {
        self.state.selected_item()
    }

    pub fn visibility(&self) -> Visibility {
        self.state.visibility()
    }

    pub fn style(&self) -> &TabBarStyle {
        &self.style
    }

    pub fn palette(&self) -> &TabBarPalette {
        &self.palette
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// Strip opacity at the last reduced tick.
    pub fn opacity(&self) -> f32 {
        self.fade.opacity(self.clock)
    }

    /// Whether a visibility fade still needs frame ticks.
    ///
    /// Measured against the last reduced tick, so frames keep flowing until
    /// [`opacity`](Self::opacity) has reached its target.
    pub fn is_animating(&self) -> bool {
        self.fade.is_animating(self.clock)
    }

    /// Resolve content for the selected item, or `None` with no selection.
    pub fn active_content(&self) -> Option<ResolvedContent<'_, Message>>
    where
        Message: 'static,
    {
        let item = self.state.selected_item()?;
        Some(resolver::resolve(
            item,
            self.data_source.as_deref(),
            self.delegate.as_deref(),
        ))
    }

    /// Render the active content above the strip.
    ///
    /// `on_event` lifts tab bar events into the application message type and
    /// `mount` renders a native controller handle.
    pub fn view<'a>(
        &'a self,
        on_event: impl Fn(TabBarEvent) -> Message + Clone + 'a,
        mount: impl Fn(&ControllerHandle) -> Element<'a, Message>,
    ) -> Element<'a, Message>
    where
        Message: Clone + 'static,
    {
        view::view(self, on_event, mount)
    }
}
