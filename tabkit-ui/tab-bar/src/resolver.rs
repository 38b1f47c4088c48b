//! Per-tab content resolution.
//!
//! A [`ContentResolver`] is an ordered list of links. Each link either
//! answers with content or declines with `None`; the first answer wins and
//! later links are never consulted. When every link declines, the item's
//! route picks one of the [`BuiltinView`]s.
//!
//! Nothing is cached: the chain runs again on every render pass, so
//! collaborators are free to answer differently over time.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use iced::Element;

use crate::collaborators::{TabBarDataSource, TabBarDelegate};
use crate::item::TabItem;

/// Scheme prefix of routes served by built-in views.
pub const ROUTE_SCHEME: &str = "app://";

/// Opaque handle to host-owned content.
///
/// The tab bar never inspects the payload; the host mounts it when the
/// owning tab is rendered.
#[derive(Clone)]
pub struct ControllerHandle {
    name: String,
    controller: Rc<dyn Any>,
}

impl ControllerHandle {
    pub fn new<T: Any>(name: impl Into<String>, controller: T) -> Self {
        Self {
            name: name.into(),
            controller: Rc::new(controller),
        }
    }

    /// Human readable label, used for logging and titles.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.controller.downcast_ref::<T>()
    }
}

impl fmt::Debug for ControllerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerHandle")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Content pages shipped with the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinView {
    Home,
    Search,
    Favorites,
    Profile,
    Settings,
    /// Shown for routes outside the table.
    Generic,
}

const BUILTIN_ROUTES: [(&str, BuiltinView); 5] = [
    ("home", BuiltinView::Home),
    ("search", BuiltinView::Search),
    ("favorites", BuiltinView::Favorites),
    ("profile", BuiltinView::Profile),
    ("settings", BuiltinView::Settings),
];

impl BuiltinView {
    /// Pick the built-in page for a route like `app://settings`.
    ///
    /// Query strings and fragments are ignored.
    pub fn for_route(route: &str) -> Self {
        let Some(rest) = route.strip_prefix(ROUTE_SCHEME) else {
            return Self::Generic;
        };
        let name = rest
            .split(['?', '#', '/'])
            .next()
            .unwrap_or_default();

        BUILTIN_ROUTES
            .iter()
            .find(|(route_name, _)| *route_name == name)
            .map(|(_, view)| *view)
            .unwrap_or(Self::Generic)
    }
}

/// Outcome of resolving content for one tab.
pub enum ResolvedContent<'a, Message> {
    NativeController(ControllerHandle),
    DeclarativeView(Element<'a, Message>),
    /// Declarative page rendered by the tab bar itself.
    Builtin(BuiltinView),
}

impl<Message> ResolvedContent<'_, Message> {
    /// Short tag for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NativeController(_) => "native-controller",
            Self::DeclarativeView(_) => "declarative-view",
            Self::Builtin(_) => "builtin",
        }
    }
}

impl<Message> fmt::Debug for ResolvedContent<'_, Message> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NativeController(handle) => {
                f.debug_tuple("NativeController").field(handle).finish()
            },
            Self::DeclarativeView(_) => f.write_str("DeclarativeView(..)"),
            Self::Builtin(view) => f.debug_tuple("Builtin").field(view).finish(),
        }
    }
}

type Link<'a, Message> =
    Box<dyn Fn(&TabItem) -> Option<ResolvedContent<'a, Message>> + 'a>;

/// Ordered chain of content resolvers.
pub struct ContentResolver<'a, Message> {
    links: Vec<Link<'a, Message>>,
}

impl<Message> Default for ContentResolver<'_, Message> {
    fn default() -> Self {
        Self { links: Vec::new() }
    }
}

impl<'a, Message: 'a> ContentResolver<'a, Message> {
    /// Create an empty chain that always falls back to built-in views.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a link tried after all existing ones.
    pub fn link(
        mut self,
        link: impl Fn(&TabItem) -> Option<ResolvedContent<'a, Message>> + 'a,
    ) -> Self {
        self.links.push(Box::new(link));
        self
    }

    /// Standard chain: native content before declarative content, data
    /// source before delegate.
    pub fn for_collaborators(
        data_source: Option<&'a dyn TabBarDataSource<Message>>,
        delegate: Option<&'a dyn TabBarDelegate<Message>>,
    ) -> Self {
        let mut resolver = Self::new();

        if let Some(source) = data_source {
            resolver = resolver.link(move |item| {
                source
                    .controller_for(item)
                    .map(ResolvedContent::NativeController)
            });
        }
        if let Some(delegate) = delegate {
            resolver = resolver.link(move |item| {
                delegate
                    .controller_for(item)
                    .map(ResolvedContent::NativeController)
            });
        }
        if let Some(source) = data_source {
            resolver = resolver.link(move |item| {
                source.view_for(item).map(ResolvedContent::DeclarativeView)
            });
        }
        if let Some(delegate) = delegate {
            resolver = resolver.link(move |item| {
                delegate
                    .content_view_for(item)
                    .map(ResolvedContent::DeclarativeView)
            });
        }

        resolver
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Run the chain only; `None` when every link declines.
    pub fn try_resolve(
        &self,
        item: &TabItem,
    ) -> Option<ResolvedContent<'a, Message>> {
        self.links.iter().find_map(|link| link(item))
    }

    /// Run the chain, falling back to the built-in view for the route.
    pub fn resolve(&self, item: &TabItem) -> ResolvedContent<'a, Message> {
        let content = self.try_resolve(item).unwrap_or_else(|| {
            ResolvedContent::Builtin(BuiltinView::for_route(item.route()))
        });
        log::debug!("resolved {} content for tab {}", content.kind(), item.id());
        content
    }
}

/// Resolve content for `item` against the standard chain.
pub fn resolve<'a, Message: 'a>(
    item: &TabItem,
    data_source: Option<&'a dyn TabBarDataSource<Message>>,
    delegate: Option<&'a dyn TabBarDelegate<Message>>,
) -> ResolvedContent<'a, Message> {
    ContentResolver::for_collaborators(data_source, delegate).resolve(item)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use iced::widget::text;

    use super::*;

    /// Collaborator that answers each query kind on demand and counts calls.
    #[derive(Default)]
    struct Probe {
        answer_controller: bool,
        answer_view: bool,
        controller_calls: Cell<usize>,
        view_calls: Cell<usize>,
    }

    impl Probe {
        fn controller() -> Self {
            Self {
                answer_controller: true,
                ..Self::default()
            }
        }

        fn view() -> Self {
            Self {
                answer_view: true,
                ..Self::default()
            }
        }

        fn calls(&self) -> (usize, usize) {
            (self.controller_calls.get(), self.view_calls.get())
        }

        fn controller_answer(&self, item: &TabItem) -> Option<ControllerHandle> {
            self.controller_calls.set(self.controller_calls.get() + 1);
            self.answer_controller
                .then(|| ControllerHandle::new(item.id(), item.id().to_owned()))
        }

        fn view_answer(&self, item: &TabItem) -> Option<Element<'_, ()>> {
            self.view_calls.set(self.view_calls.get() + 1);
            self.answer_view.then(|| text(item.id().to_owned()).into())
        }
    }

    impl TabBarDataSource<()> for Probe {
        fn items(&self) -> Vec<TabItem> {
            Vec::new()
        }

        fn controller_for(&self, item: &TabItem) -> Option<ControllerHandle> {
            self.controller_answer(item)
        }

        fn view_for(&self, item: &TabItem) -> Option<Element<'_, ()>> {
            self.view_answer(item)
        }
    }

    impl TabBarDelegate<()> for Probe {
        fn controller_for(&self, item: &TabItem) -> Option<ControllerHandle> {
            self.controller_answer(item)
        }

        fn content_view_for(&self, item: &TabItem) -> Option<Element<'_, ()>> {
            self.view_answer(item)
        }
    }

    fn item(route: &str) -> TabItem {
        TabItem::new("tab").with_route(route)
    }

    #[test]
    fn data_source_controller_short_circuits_delegate() {
        let source = Probe::controller();
        let delegate = Probe::controller();

        let content = resolve::<()>(&item(""), Some(&source), Some(&delegate));

        match content {
            ResolvedContent::NativeController(handle) => {
                assert_eq!(handle.name(), "tab");
                assert_eq!(
                    handle.downcast_ref::<String>().map(String::as_str),
                    Some("tab")
                );
            },
            other => panic!("expected native controller, got {other:?}"),
        }
        assert_eq!(source.calls(), (1, 0));
        assert_eq!(delegate.calls(), (0, 0));
    }

    #[test]
    fn delegate_controller_beats_data_source_view() {
        let source = Probe::view();
        let delegate = Probe::controller();

        let content = resolve::<()>(&item(""), Some(&source), Some(&delegate));

        assert!(matches!(content, ResolvedContent::NativeController(_)));
        assert_eq!(source.calls(), (1, 0));
        assert_eq!(delegate.calls(), (1, 0));
    }

    #[test]
    fn data_source_view_beats_delegate_view() {
        let source = Probe::view();
        let delegate = Probe::view();

        let content = resolve::<()>(&item(""), Some(&source), Some(&delegate));

        assert!(matches!(content, ResolvedContent::DeclarativeView(_)));
        assert_eq!(source.calls(), (1, 1));
        assert_eq!(delegate.calls(), (1, 0));
    }

    #[test]
    fn delegate_view_is_the_last_collaborator_consulted() {
        let source = Probe::default();
        let delegate = Probe::view();

        let content = resolve::<()>(&item(""), Some(&source), Some(&delegate));

        assert!(matches!(content, ResolvedContent::DeclarativeView(_)));
        assert_eq!(source.calls(), (1, 1));
        assert_eq!(delegate.calls(), (1, 1));
    }

    #[test]
    fn settings_route_falls_back_to_builtin_settings() {
        let source = Probe::default();
        let delegate = Probe::default();

        let content =
            resolve::<()>(&item("app://settings"), Some(&source), Some(&delegate));

        assert!(matches!(
            content,
            ResolvedContent::Builtin(BuiltinView::Settings)
        ));
        assert_eq!(source.calls(), (1, 1));
        assert_eq!(delegate.calls(), (1, 1));
    }

    #[test]
    fn missing_collaborators_fall_back_to_builtin() {
        let content = resolve::<()>(&item("app://profile"), None, None);
        assert!(matches!(content, ResolvedContent::Builtin(BuiltinView::Profile)));

        let content = resolve::<()>(&item("app://unknown"), None, None);
        assert!(matches!(content, ResolvedContent::Builtin(BuiltinView::Generic)));
    }

    #[test]
    fn resolution_is_not_cached() {
        let source = Probe::controller();
        let resolver = ContentResolver::for_collaborators(
            Some(&source as &dyn TabBarDataSource<()>),
            None,
        );

        let tab = item("");
        let _ = resolver.resolve(&tab);
        let _ = resolver.resolve(&tab);
        assert_eq!(source.calls(), (2, 0));
    }

    #[test]
    fn custom_links_run_in_order_before_fallback() {
        let hits = Cell::new(0);
        let resolver = ContentResolver::<()>::new()
            .link(|_| {
                hits.set(hits.get() + 1);
                None
            })
            .link(|item| {
                (item.id() == "tab").then_some(ResolvedContent::Builtin(
                    BuiltinView::Favorites,
                ))
            });

        assert_eq!(resolver.len(), 2);
        assert!(matches!(
            resolver.resolve(&item("app://home")),
            ResolvedContent::Builtin(BuiltinView::Favorites)
        ));
        assert!(matches!(
            resolver.resolve(&TabItem::new("other").with_route("app://home")),
            ResolvedContent::Builtin(BuiltinView::Home)
        ));
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn empty_chain_declines() {
        let resolver = ContentResolver::<()>::new();
        assert!(resolver.is_empty());
        assert!(resolver.try_resolve(&item("app://home")).is_none());
    }

    #[test]
    fn for_route_covers_table_and_edge_cases() {
        assert_eq!(BuiltinView::for_route("app://home"), BuiltinView::Home);
        assert_eq!(BuiltinView::for_route("app://search"), BuiltinView::Search);
        assert_eq!(
            BuiltinView::for_route("app://search?query=rust"),
            BuiltinView::Search
        );
        assert_eq!(
            BuiltinView::for_route("app://favorites"),
            BuiltinView::Favorites
        );
        assert_eq!(BuiltinView::for_route("app://profile/edit"), BuiltinView::Profile);
        assert_eq!(BuiltinView::for_route("app://settings"), BuiltinView::Settings);
        assert_eq!(BuiltinView::for_route("settings"), BuiltinView::Generic);
        assert_eq!(BuiltinView::for_route(""), BuiltinView::Generic);
        assert_eq!(BuiltinView::for_route("app://"), BuiltinView::Generic);
    }
}
