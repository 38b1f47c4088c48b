use std::cell::RefCell;
use std::rc::Rc;

use env_logger::Env;
use iced::widget::{Space, button, column, container, row, text};
use iced::{Color, Element, Length, Subscription, Task, Vector, window};
use tabkit_ui_tab_bar::{
    ControllerHandle, StyleKind, TabAction, TabBarDataSource, TabBarDelegate,
    TabBarEffect, TabBarEvent, TabBarStyle, TabBarWidget, TabItem,
    extended_items,
};

const PARAMETERS: &str = r#"{
    "style": "default",
    "isAnimated": true,
    "searchEnabled": true,
    "selectedItem": {"identifier": "favorites"}
}"#;

const STYLES: [StyleKind; 5] = [
    StyleKind::Default,
    StyleKind::Compact,
    StyleKind::Floating,
    StyleKind::Minimal,
    StyleKind::Composable,
];

#[derive(Debug, Clone)]
enum Message {
    TabBar(TabBarEvent),
    TabBarEffect(TabBarEffect),
    NextStyle,
}

/// Host-owned profile screen handed out as a native controller.
struct ProfileController {
    name: String,
    email: String,
}

struct DemoDataSource;

impl TabBarDataSource<Message> for DemoDataSource {
    fn items(&self) -> Vec<TabItem> {
        extended_items()
    }

    fn controller_for(&self, item: &TabItem) -> Option<ControllerHandle> {
        (item.id() == "profile").then(|| {
            ControllerHandle::new(
                "profile",
                ProfileController {
                    name: String::from("John Doe"),
                    email: String::from("john.doe@example.com"),
                },
            )
        })
    }

    fn action_for(&self, item: &TabItem) -> Option<TabAction> {
        item.is_modal()
            .unwrap_or(false)
            .then_some(TabAction::Present)
    }
}

#[derive(Clone, Default)]
struct DemoDelegate {
    log: Rc<RefCell<Vec<String>>>,
}

impl DemoDelegate {
    fn record(&self, entry: String) {
        log::info!("{entry}");
        let mut log = self.log.borrow_mut();
        log.push(entry);
        let overflow = log.len().saturating_sub(5);
        log.drain(..overflow);
    }
}

impl TabBarDelegate<Message> for DemoDelegate {
    fn on_item_selected(&self, item: &TabItem) {
        self.record(format!("selected {} ({})", item.id(), item.analytics()));
    }

    fn on_action_performed(&self, action: TabAction, item: &TabItem) {
        self.record(format!("{action:?} {}", item.route()));
    }

    fn content_view_for(&self, item: &TabItem) -> Option<Element<'_, Message>> {
        if item.id() != "favorites" {
            return None;
        }

        let entries = self.log.borrow().clone();
        let history = entries
            .into_iter()
            .fold(column![text("Recent events").size(18)].spacing(6), |col, entry| {
                col.push(text(entry).size(13))
            });

        Some(
            container(history)
                .padding(24)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
        )
    }

    fn on_search(&self, query: &str) {
        self.record(format!("search \"{query}\""));
    }

    fn on_search_cleared(&self) {
        self.record(String::from("search cleared"));
    }

    fn on_suggestion_selected(&self, suggestion: &str) {
        self.record(format!("suggestion {suggestion}"));
    }
}

struct App {
    tab_bar: TabBarWidget<Message>,
    style_index: usize,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let tab_bar = match TabBarWidget::from_json_str(PARAMETERS) {
            Ok(tab_bar) => tab_bar,
            Err(err) => {
                log::warn!("invalid tab bar parameters, using defaults: {err}");
                TabBarWidget::default()
            },
        };

        let mut tab_bar = tab_bar
            .with_data_source(DemoDataSource)
            .with_delegate(DemoDelegate::default());
        tab_bar.subscribe(|change| log::debug!("tab bar change: {change:?}"));

        (
            Self {
                tab_bar,
                style_index: 0,
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        String::from("Tab bar")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabBar(event) => {
                self.tab_bar.reduce(event).map(Message::TabBarEffect)
            },
            Message::TabBarEffect(effect) => {
                if let TabBarEffect::ItemsUpdated { selected: None } = effect {
                    log::warn!("tab bar has no items left");
                }
                log::debug!("tab bar effect: {effect:?}");
                Task::none()
            },
            Message::NextStyle => {
                self.style_index = (self.style_index + 1) % STYLES.len();
                let style = style_for(STYLES[self.style_index]);
                let tab_bar = std::mem::take(&mut self.tab_bar);
                self.tab_bar = tab_bar.with_style(style);
                Task::none()
            },
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let toolbar = row![
            button(text(format!("Style: {}", self.tab_bar.style().kind().name())))
                .on_press(Message::NextStyle),
            button(text("Toggle tab bar"))
                .on_press(Message::TabBar(TabBarEvent::ToggleVisibility)),
            Space::new().width(Length::Fill),
        ]
        .spacing(8)
        .padding(8);

        column![toolbar, self.tab_bar.view(Message::TabBar, mount)].into()
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.tab_bar.is_animating() {
            window::frames().map(|at| Message::TabBar(TabBarEvent::Tick(at)))
        } else {
            Subscription::none()
        }
    }
}

fn style_for(kind: StyleKind) -> TabBarStyle {
    match kind {
        StyleKind::Composable => TabBarStyle::minimal()
            .background(Color::from_rgb8(0xE5, 0xE5, 0xEA), 16.0)
            .shadow(
                Color::from_rgba8(0, 0, 0, 0.2),
                10.0,
                Vector::new(0.0, 4.0),
            )
            .padding(12.0, 6.0)
            .animation(std::time::Duration::from_millis(500)),
        kind => TabBarStyle::new(kind),
    }
}

fn mount<'a>(handle: &ControllerHandle) -> Element<'a, Message> {
    match handle.downcast_ref::<ProfileController>() {
        Some(profile) => column![
            text(profile.name.clone()).size(24),
            text(profile.email.clone()).size(14),
        ]
        .spacing(8)
        .padding(24)
        .into(),
        None => text(format!("unmounted controller {}", handle.name())).into(),
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .run()
}
