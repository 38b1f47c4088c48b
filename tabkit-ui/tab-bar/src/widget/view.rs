use iced::widget::button::Status as ButtonStatus;
use iced::widget::{
    Column, Row, Space, button, column, container, row, text, text_input,
};
use iced::{
    Alignment, Border, Color, Element, Length, Padding, Shadow, Theme, Vector,
};

use super::TabBarWidget;
use super::event::TabBarEvent;
use crate::item::TabItem;
use crate::resolver::{BuiltinView, ControllerHandle, ResolvedContent};
use crate::style::{
    BackgroundTreatment, Decorator, ItemLayout, StripEntry, StripLayout,
    StyleMetrics,
};
use crate::theme::{TabBarPalette, with_alpha};

const SEPARATOR_HEIGHT: f32 = 0.5;
const SEARCH_PADDING_X: f32 = 16.0;
const SEARCH_PADDING_Y: f32 = 8.0;
const SEARCH_FONT_SIZE: f32 = 14.0;
const SUGGESTION_PADDING: f32 = 10.0;
const PAGE_PADDING: f32 = 24.0;
const PAGE_SPACING: f32 = 12.0;
const PAGE_TITLE_SIZE: f32 = 24.0;
const PAGE_BODY_SIZE: f32 = 14.0;
const PAGE_ICON_SIZE: f32 = 48.0;
const STRIP_SHADOW_BLUR: f32 = 8.0;

pub(super) fn view<'a, Message>(
    widget: &'a TabBarWidget<Message>,
    on_event: impl Fn(TabBarEvent) -> Message + Clone + 'a,
    mount: impl Fn(&ControllerHandle) -> Element<'a, Message>,
) -> Element<'a, Message>
where
    Message: Clone + 'static,
{
    let palette = widget.palette;
    let mut layout = Column::new().width(Length::Fill).height(Length::Fill);

    if widget.search.is_enabled() {
        layout = layout.push(search_bar(widget).map(on_event.clone()));
    }

    let page = container(content(widget, mount))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(palette.content_background.into()),
            text_color: Some(palette.foreground),
            ..Default::default()
        });

    layout.push(page).push(strip(widget).map(on_event)).into()
}

fn content<'a, Message>(
    widget: &'a TabBarWidget<Message>,
    mount: impl Fn(&ControllerHandle) -> Element<'a, Message>,
) -> Element<'a, Message>
where
    Message: 'static,
{
    let palette = widget.palette;
    let Some(item) = widget.selected_item() else {
        return centered(text("No tabs").color(palette.dim_foreground));
    };

    match widget.active_content() {
        Some(ResolvedContent::NativeController(handle)) => mount(&handle),
        Some(ResolvedContent::DeclarativeView(view)) => view,
        Some(ResolvedContent::Builtin(page)) => {
            builtin_page(page, item, palette)
        },
        None => centered(text("No tabs").color(palette.dim_foreground)),
    }
}

fn strip<'a, Message>(
    widget: &'a TabBarWidget<Message>,
) -> Element<'a, TabBarEvent> {
    let opacity = widget.opacity();
    let faded_out =
        !widget.visibility().is_visible() && !widget.is_animating();
    if opacity <= 0.0 || faded_out {
        return Space::new().into();
    }

    let palette = widget.palette.faded(opacity);
    let layout = widget.style.layout(
        widget.state.items(),
        widget.state.selected_item(),
        widget.state.visibility(),
    );
    render_strip(layout, palette, opacity)
}

/// Render a strip layout. An empty layout yields an empty bar.
///
/// A hidden layout is still drawn while it fades out, but its buttons
/// ignore presses.
fn render_strip<'a>(
    layout: StripLayout<'a>,
    palette: TabBarPalette,
    opacity: f32,
) -> Element<'a, TabBarEvent> {
    let interactive = layout.visibility.is_visible();
    let metrics = layout.metrics;
    let item_width = if metrics.fill_items {
        Length::Fill
    } else {
        Length::Shrink
    };

    let buttons = layout
        .entries
        .iter()
        .map(|entry| {
            item_button(*entry, &metrics, palette, item_width, interactive)
        });
    let items = Row::with_children(buttons)
        .spacing(metrics.item_spacing)
        .align_y(Alignment::Center)
        .width(item_width);

    let bar = container(items)
        .padding(Padding {
            top: metrics.padding_vertical,
            right: metrics.padding_horizontal,
            bottom: metrics.padding_vertical,
            left: metrics.padding_horizontal,
        })
        .width(item_width)
        .style(move |_| strip_style(&metrics, palette));

    let mut strip: Element<'a, TabBarEvent> = if metrics.separator {
        column![separator(palette.separator), bar].into()
    } else {
        bar.into()
    };

    if !metrics.fill_items {
        strip = container(strip).center_x(Length::Fill).into();
    }

    strip = container(strip)
        .padding(Padding {
            top: 0.0,
            right: metrics.outer_padding_horizontal,
            bottom: metrics.outer_padding_bottom,
            left: metrics.outer_padding_horizontal,
        })
        .width(Length::Fill)
        .into();

    layout
        .decorators
        .iter()
        .fold(strip, |inner, decorator| decorate(inner, decorator, opacity))
}

fn item_button<'a>(
    entry: StripEntry<'a>,
    metrics: &StyleMetrics,
    palette: TabBarPalette,
    width: Length,
    interactive: bool,
) -> Element<'a, TabBarEvent> {
    let tint = if entry.is_selected {
        palette.accent
    } else {
        palette.inactive
    };

    let glyph = text(icon_glyph(entry.item.icon()))
        .size(metrics.icon_size)
        .color(tint);
    let label = text(entry.item.display_title())
        .size(metrics.label_size)
        .color(tint);

    let body: Element<'a, TabBarEvent> = match metrics.item_layout {
        ItemLayout::Stacked => column![glyph, label]
            .spacing(metrics.label_spacing)
            .align_x(Alignment::Center)
            .into(),
        ItemLayout::Inline => row![glyph, label]
            .spacing(metrics.label_spacing)
            .align_y(Alignment::Center)
            .into(),
    };

    let body: Element<'a, TabBarEvent> = match metrics.selected_pill {
        Some(pill) if entry.is_selected => container(body)
            .padding([pill.padding_vertical, pill.padding_horizontal])
            .style(move |_| container::Style {
                background: Some(palette.pill.into()),
                border: Border {
                    radius: pill.corner_radius.into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .into(),
        _ => body,
    };

    button(container(body).center_x(width))
        .width(width)
        .padding(0)
        .style(move |_, status| item_button_style(&palette, status))
        .on_press_maybe(interactive.then(|| TabBarEvent::Select {
            id: entry.item.id().to_owned(),
        }))
        .into()
}

fn item_button_style(
    palette: &TabBarPalette,
    status: ButtonStatus,
) -> button::Style {
    let background = match status {
        ButtonStatus::Pressed => {
            Some(with_alpha(palette.pill, palette.pill.a * 0.5).into())
        },
        _ => None,
    };

    button::Style {
        background,
        text_color: palette.inactive,
        border: Border::default(),
        ..Default::default()
    }
}

fn strip_style(
    metrics: &StyleMetrics,
    palette: TabBarPalette,
) -> container::Style {
    let background = match metrics.background {
        BackgroundTreatment::Solid => Some(palette.background.into()),
        BackgroundTreatment::Material => Some(palette.material.into()),
        BackgroundTreatment::Clear => None,
    };

    let shadow = if metrics.shadow {
        Shadow {
            color: palette.shadow,
            offset: Vector::new(0.0, 2.0),
            blur_radius: STRIP_SHADOW_BLUR,
        }
    } else {
        Shadow::default()
    };

    container::Style {
        background,
        border: Border {
            color: palette.border,
            width: metrics.border_width,
            radius: metrics.corner_radius.into(),
        },
        shadow,
        ..Default::default()
    }
}

fn separator<'a>(color: Color) -> Element<'a, TabBarEvent> {
    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(SEPARATOR_HEIGHT))
        .style(move |_| container::Style {
            background: Some(color.into()),
            ..Default::default()
        })
        .into()
}

/// Wrap `inner` with one decorator. Colors fade with the strip.
fn decorate<'a>(
    inner: Element<'a, TabBarEvent>,
    decorator: &Decorator,
    opacity: f32,
) -> Element<'a, TabBarEvent> {
    match *decorator {
        Decorator::Background {
            color,
            corner_radius,
        } => container(inner)
            .width(Length::Fill)
            .style(move |_| container::Style {
                background: Some(with_alpha(color, color.a * opacity).into()),
                border: Border {
                    radius: corner_radius.into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .into(),
        Decorator::Shadow {
            color,
            radius,
            offset,
        } => container(inner)
            .width(Length::Fill)
            .style(move |_| container::Style {
                shadow: Shadow {
                    color: with_alpha(color, color.a * opacity),
                    offset,
                    blur_radius: radius,
                },
                ..Default::default()
            })
            .into(),
        Decorator::Padding {
            horizontal,
            vertical,
        } => container(inner)
            .width(Length::Fill)
            .padding([vertical, horizontal])
            .into(),
        Decorator::Animation { .. } => inner,
    }
}

fn search_bar<'a, Message>(
    widget: &'a TabBarWidget<Message>,
) -> Element<'a, TabBarEvent> {
    let search = &widget.search;
    let palette = widget.palette;

    let input = text_input(search.placeholder(), search.query())
        .on_input(TabBarEvent::SearchChanged)
        .on_submit(TabBarEvent::SearchSubmitted)
        .padding([SEARCH_PADDING_Y, SEARCH_PADDING_X / 2.0])
        .size(SEARCH_FONT_SIZE)
        .width(Length::Fill)
        .style(move |theme: &Theme, status| {
            let mut style = text_input::default(theme, status);
            style.background = palette.field.into();
            style.value = palette.foreground;
            style.placeholder = palette.dim_foreground;
            style.selection = palette.pill;
            style.border = Border {
                radius: 10.0.into(),
                ..Default::default()
            };
            style
        });

    let mut field = Row::new()
        .push(text(icon_glyph("magnifyingglass")).color(palette.inactive))
        .push(input)
        .spacing(SEARCH_PADDING_Y)
        .align_y(Alignment::Center);
    if !search.query().is_empty() {
        field = field.push(
            button(text("✕").size(SEARCH_FONT_SIZE).color(palette.inactive))
                .padding(4)
                .style(move |_, status| item_button_style(&palette, status))
                .on_press(TabBarEvent::SearchCleared),
        );
    }

    let mut bar = Column::new().push(
        container(field)
            .padding([SEARCH_PADDING_Y, SEARCH_PADDING_X])
            .width(Length::Fill),
    );

    if search.is_active() {
        for suggestion in search.suggestions() {
            bar = bar.push(
                button(
                    text(suggestion.as_str())
                        .size(SEARCH_FONT_SIZE)
                        .color(palette.foreground),
                )
                .width(Length::Fill)
                .padding([SUGGESTION_PADDING, SEARCH_PADDING_X])
                .style(move |_, status| item_button_style(&palette, status))
                .on_press(TabBarEvent::SuggestionSelected(suggestion.clone())),
            );
        }
    }

    container(bar)
        .width(Length::Fill)
        .style(move |_| container::Style {
            background: Some(palette.background.into()),
            ..Default::default()
        })
        .into()
}

struct Page {
    title: &'static str,
    subtitle: &'static str,
    rows: &'static [&'static str],
}

fn page_for(view: BuiltinView) -> Option<Page> {
    let page = match view {
        BuiltinView::Home => Page {
            title: "Welcome Home",
            subtitle: "This is your home dashboard with personalized content \
                       and quick access to your most used features.",
            rows: &["Quick Actions", "Recent Activity"],
        },
        BuiltinView::Search => Page {
            title: "Search",
            subtitle: "Find anything across your tabs.",
            rows: &["Search Result 1", "Search Result 2", "Search Result 3"],
        },
        BuiltinView::Favorites => Page {
            title: "Favorites",
            subtitle: "This is one of your favorite items.",
            rows: &["Favorite Item 1", "Favorite Item 2", "Favorite Item 3"],
        },
        BuiltinView::Profile => Page {
            title: "Profile",
            subtitle: "john.doe@example.com",
            rows: &[
                "Edit Profile",
                "Notifications",
                "Privacy & Security",
                "Help & Support",
            ],
        },
        BuiltinView::Settings => Page {
            title: "Settings",
            subtitle: "Preferences for this application.",
            rows: &[
                "Notifications",
                "Dark Mode",
                "Language",
                "Privacy Policy",
                "Data Usage",
                "Version",
                "Rate App",
            ],
        },
        BuiltinView::Generic => return None,
    };
    Some(page)
}

fn builtin_page<'a, Message: 'a>(
    view: BuiltinView,
    item: &'a TabItem,
    palette: TabBarPalette,
) -> Element<'a, Message> {
    let icon = text(icon_glyph(item.icon()))
        .size(PAGE_ICON_SIZE)
        .color(palette.accent);

    let Some(page) = page_for(view) else {
        let title = item.display_title();
        return column![
            icon,
            text(title.clone()).size(PAGE_TITLE_SIZE),
            text(format!("This is the content for {title}"))
                .size(PAGE_BODY_SIZE)
                .color(palette.dim_foreground),
            text("Deeplink Information").size(PAGE_BODY_SIZE),
            text(format!("Deeplink: {}", item.route()))
                .size(PAGE_BODY_SIZE)
                .color(palette.dim_foreground),
        ]
        .spacing(PAGE_SPACING)
        .padding(PAGE_PADDING)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .into();
    };

    let rows = page.rows.iter().map(|row_title| -> Element<'a, Message> {
        container(text(*row_title).size(PAGE_BODY_SIZE))
            .padding([PAGE_SPACING, PAGE_PADDING])
            .width(Length::Fill)
            .style(move |_| container::Style {
                background: Some(palette.field.into()),
                border: Border {
                    radius: 8.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .into()
    });

    column![
        icon,
        text(page.title).size(PAGE_TITLE_SIZE),
        text(page.subtitle)
            .size(PAGE_BODY_SIZE)
            .color(palette.dim_foreground),
        Column::with_children(rows).spacing(PAGE_SPACING / 2.0),
    ]
    .spacing(PAGE_SPACING)
    .padding(PAGE_PADDING)
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}

fn centered<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// Glyph drawn for a symbol name; unknown names get a filled circle.
fn icon_glyph(name: &str) -> &'static str {
    match name {
        "house.fill" | "house" => "⌂",
        "magnifyingglass" => "⌕",
        "heart.fill" | "heart" => "♥",
        "person.fill" | "person" => "☺",
        "gearshape.fill" | "gearshape" => "⚙",
        "star.fill" | "star" => "★",
        "bell.fill" | "bell" => "♪",
        "envelope.fill" | "envelope" => "✉",
        _ => "●",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Visibility;
    use crate::style::TabBarStyle;

    #[test]
    fn known_symbols_have_distinct_glyphs() {
        assert_eq!(icon_glyph("house.fill"), "⌂");
        assert_eq!(icon_glyph(crate::item::DEFAULT_ICON), "●");
        assert_eq!(icon_glyph("unheard.of"), "●");
        assert_ne!(icon_glyph("heart.fill"), icon_glyph("person.fill"));
    }

    #[test]
    fn generic_view_has_no_fixed_page() {
        assert!(page_for(BuiltinView::Generic).is_none());
        for view in [
            BuiltinView::Home,
            BuiltinView::Search,
            BuiltinView::Favorites,
            BuiltinView::Profile,
            BuiltinView::Settings,
        ] {
            assert!(page_for(view).is_some());
        }
    }

    #[test]
    fn empty_strip_renders_for_every_style() {
        let decorated = TabBarStyle::compact()
            .background(Color::WHITE, 12.0)
            .shadow(Color::BLACK, 8.0, Vector::new(0.0, 4.0))
            .padding(16.0, 8.0);
        for style in [
            TabBarStyle::default(),
            TabBarStyle::compact(),
            TabBarStyle::floating(),
            TabBarStyle::minimal(),
            decorated,
        ] {
            let layout = style.layout(&[], None, Visibility::Visible);
            let _strip = render_strip(layout, TabBarPalette::dark(), 1.0);
        }
    }
}
