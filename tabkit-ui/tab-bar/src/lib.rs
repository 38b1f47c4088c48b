//! Configurable tab bar for [`iced`] applications.
//!
//! This crate is split into two layers:
//! - model helpers ([`TabItem`], [`TabBarConfiguration`], [`TabBarState`],
//!   [`ContentResolver`], [`TabBarStyle`]) that are UI-agnostic apart from
//!   carrying `iced` elements as opaque content;
//! - the host widget ([`TabBarWidget`]) that wires them together and renders
//!   the active content above the tab strip.
//!
//! Content for the active tab is resolved on every render by asking, in
//! order: the data source for a native controller, the delegate for a native
//! controller, the data source for a view, the delegate for a view. When
//! nobody answers, a built-in page is picked from the item's route.
//!
//! See `examples/tab_bar.rs` for a complete runnable example.
//!
//! # Quick Example
//!
//! ```no_run
//! use iced::widget::text;
//! use iced::{Element, Task};
//! use tabkit_ui_tab_bar::{
//!     TabBarDelegate, TabBarEffect, TabBarEvent, TabBarWidget, TabItem,
//! };
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     TabBar(TabBarEvent),
//!     Effect(TabBarEffect),
//! }
//!
//! struct Delegate;
//!
//! impl TabBarDelegate<Message> for Delegate {
//!     fn on_item_selected(&self, item: &TabItem) {
//!         println!("selected {}", item.id());
//!     }
//! }
//!
//! struct App {
//!     tab_bar: TabBarWidget<Message>,
//! }
//!
//! fn update(app: &mut App, message: Message) -> Task<Message> {
//!     match message {
//!         Message::TabBar(event) => {
//!             app.tab_bar.reduce(event).map(Message::Effect)
//!         },
//!         Message::Effect(TabBarEffect::Selected { id }) => {
//!             println!("now showing {id}");
//!             Task::none()
//!         },
//!         Message::Effect(_) => Task::none(),
//!     }
//! }
//!
//! fn view(app: &App) -> Element<'_, Message> {
//!     app.tab_bar
//!         .view(Message::TabBar, |handle| text(handle.name().to_owned()).into())
//! }
//!
//! let app = App {
//!     tab_bar: TabBarWidget::from_json_str(r#"{"style": "floating"}"#)
//!         .expect("valid parameters")
//!         .with_delegate(Delegate),
//! };
//! ```

mod collaborators;
mod config;
mod errors;
mod item;
mod resolver;
mod search;
mod state;
mod style;
mod theme;
mod widget;

pub use collaborators::{
    LoggingDelegate, StaticDataSource, TabBarDataSource, TabBarDelegate,
};
pub use config::{
    DEFAULT_SEARCH_PLACEHOLDER, SearchConfiguration, TabBarConfiguration,
    default_items, extended_items, keys, parse_item,
};
pub use errors::TabBarError;
pub use item::{DEFAULT_ICON, TabAction, TabItem};
pub use resolver::{
    BuiltinView, ContentResolver, ControllerHandle, ROUTE_SCHEME,
    ResolvedContent, resolve,
};
pub use search::{MAX_SUGGESTIONS, SearchState, search_item, suggestions};
pub use state::{TabBarChange, TabBarState, Visibility, VisibilityFade};
pub use style::{
    BackgroundTreatment, DEFAULT_TRANSITION, Decorator, ItemLayout, Pill,
    StripEntry, StripLayout, StyleKind, StyleMetrics, TabBarStyle,
};
pub use theme::TabBarPalette;
pub use widget::{TabBarEffect, TabBarEvent, TabBarWidget};
