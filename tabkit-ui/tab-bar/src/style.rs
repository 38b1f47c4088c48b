//! Pluggable strip layouts.
//!
//! A [`TabBarStyle`] is pure data: a base [`StyleKind`], the
//! [`StyleMetrics`] it implies, and an ordered list of [`Decorator`]s.
//! [`TabBarStyle::layout`] turns it into a [`StripLayout`] which the widget
//! view renders. Variants differ only in visual parameters; selection wiring
//! is identical for all of them.

use std::time::Duration;

use iced::{Color, Vector};

use crate::item::TabItem;
use crate::state::Visibility;

/// Fade duration used when no animation decorator overrides it.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(300);

/// Recognized strip styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleKind {
    #[default]
    Default,
    Compact,
    Floating,
    Minimal,
    /// A base style wrapped by decorators. Only reachable programmatically.
    Composable,
}

impl StyleKind {
    /// Names accepted in a parameter bag.
    pub const NAMES: [&'static str; 4] =
        ["default", "compact", "floating", "minimal"];

    /// Look up a style by its parameter name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::Default),
            "compact" => Some(Self::Compact),
            "floating" => Some(Self::Floating),
            "minimal" => Some(Self::Minimal),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Compact => "compact",
            Self::Floating => "floating",
            Self::Minimal => "minimal",
            Self::Composable => "composable",
        }
    }

    /// Layout metrics for this style.
    pub fn metrics(self) -> StyleMetrics {
        match self {
            Self::Default | Self::Composable => StyleMetrics {
                item_spacing: 0.0,
                padding_horizontal: 16.0,
                padding_vertical: 8.0,
                corner_radius: 0.0,
                background: BackgroundTreatment::Solid,
                separator: true,
                border_width: 0.0,
                shadow: false,
                outer_padding_horizontal: 0.0,
                outer_padding_bottom: 0.0,
                icon_size: 20.0,
                label_size: 11.0,
                label_spacing: 4.0,
                item_layout: ItemLayout::Stacked,
                selected_pill: None,
                fill_items: true,
            },
            Self::Compact => StyleMetrics {
                item_spacing: 12.0,
                padding_horizontal: 20.0,
                padding_vertical: 12.0,
                corner_radius: 25.0,
                background: BackgroundTreatment::Solid,
                separator: false,
                border_width: 0.0,
                shadow: true,
                outer_padding_horizontal: 0.0,
                outer_padding_bottom: 0.0,
                icon_size: 16.0,
                label_size: 12.0,
                label_spacing: 6.0,
                item_layout: ItemLayout::Inline,
                selected_pill: Some(Pill {
                    corner_radius: 16.0,
                    padding_horizontal: 12.0,
                    padding_vertical: 8.0,
                }),
                fill_items: false,
            },
            Self::Floating => StyleMetrics {
                item_spacing: 0.0,
                padding_horizontal: 16.0,
                padding_vertical: 12.0,
                corner_radius: 20.0,
                background: BackgroundTreatment::Material,
                separator: false,
                border_width: 0.5,
                shadow: false,
                outer_padding_horizontal: 16.0,
                outer_padding_bottom: 34.0,
                icon_size: 18.0,
                label_size: 11.0,
                label_spacing: 4.0,
                item_layout: ItemLayout::Stacked,
                selected_pill: None,
                fill_items: true,
            },
            Self::Minimal => StyleMetrics {
                item_spacing: 0.0,
                padding_horizontal: 8.0,
                padding_vertical: 4.0,
                corner_radius: 0.0,
                background: BackgroundTreatment::Clear,
                separator: false,
                border_width: 0.0,
                shadow: false,
                outer_padding_horizontal: 0.0,
                outer_padding_bottom: 0.0,
                icon_size: 16.0,
                label_size: 11.0,
                label_spacing: 2.0,
                item_layout: ItemLayout::Stacked,
                selected_pill: None,
                fill_items: true,
            },
        }
    }
}

/// How the strip background is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundTreatment {
    Solid,
    /// Translucent fill with a hairline border.
    Material,
    Clear,
}

/// Icon and label arrangement inside an item button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemLayout {
    /// Icon above label.
    Stacked,
    /// Icon beside label.
    Inline,
}

/// Highlight drawn behind the selected item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pill {
    pub corner_radius: f32,
    pub padding_horizontal: f32,
    pub padding_vertical: f32,
}

/// Visual parameters of a strip style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleMetrics {
    pub item_spacing: f32,
    pub padding_horizontal: f32,
    pub padding_vertical: f32,
    pub corner_radius: f32,
    pub background: BackgroundTreatment,
    /// Hairline drawn along the top edge.
    pub separator: bool,
    pub border_width: f32,
    /// Soft drop shadow under the strip.
    pub shadow: bool,
    pub outer_padding_horizontal: f32,
    pub outer_padding_bottom: f32,
    pub icon_size: f32,
    pub label_size: f32,
    pub label_spacing: f32,
    pub item_layout: ItemLayout,
    pub selected_pill: Option<Pill>,
    /// Items share the strip width equally.
    pub fill_items: bool,
}

/// Wrapper applied around a rendered strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decorator {
    Background {
        color: Color,
        corner_radius: f32,
    },
    Shadow {
        color: Color,
        radius: f32,
        offset: Vector,
    },
    Padding {
        horizontal: f32,
        vertical: f32,
    },
    Animation {
        duration: Duration,
    },
}

/// A strip style with optional decorators.
#[derive(Debug, Clone, PartialEq)]
pub struct TabBarStyle {
    base: StyleKind,
    metrics: StyleMetrics,
    decorators: Vec<Decorator>,
}

impl Default for TabBarStyle {
    fn default() -> Self {
        Self::new(StyleKind::Default)
    }
}

impl From<StyleKind> for TabBarStyle {
    fn from(kind: StyleKind) -> Self {
        Self::new(kind)
    }
}

impl TabBarStyle {
    pub fn new(kind: StyleKind) -> Self {
        Self {
            base: kind,
            metrics: kind.metrics(),
            decorators: Vec::new(),
        }
    }

    pub fn compact() -> Self {
        Self::new(StyleKind::Compact)
    }

    pub fn floating() -> Self {
        Self::new(StyleKind::Floating)
    }

    pub fn minimal() -> Self {
        Self::new(StyleKind::Minimal)
    }

    /// Style kind; [`StyleKind::Composable`] once any decorator is attached.
    pub fn kind(&self) -> StyleKind {
        if self.decorators.is_empty() {
            self.base
        } else {
            StyleKind::Composable
        }
    }

    /// Style the decorators wrap.
    pub fn base(&self) -> StyleKind {
        self.base
    }

    pub fn metrics(&self) -> &StyleMetrics {
        &self.metrics
    }

    /// Decorators in the order they were declared.
    pub fn decorators(&self) -> &[Decorator] {
        &self.decorators
    }

    /// Append an arbitrary decorator.
    pub fn decorate(mut self, decorator: Decorator) -> Self {
        self.decorators.push(decorator);
        self
    }

    pub fn background(self, color: Color, corner_radius: f32) -> Self {
        self.decorate(Decorator::Background {
            color,
            corner_radius,
        })
    }

    pub fn shadow(self, color: Color, radius: f32, offset: Vector) -> Self {
        self.decorate(Decorator::Shadow {
            color,
            radius,
            offset,
        })
    }

    pub fn padding(self, horizontal: f32, vertical: f32) -> Self {
        self.decorate(Decorator::Padding {
            horizontal,
            vertical,
        })
    }

    pub fn animation(self, duration: Duration) -> Self {
        self.decorate(Decorator::Animation { duration })
    }

    /// Fade duration for visibility changes.
    ///
    /// The last declared animation decorator wins.
    pub fn transition(&self) -> Duration {
        self.decorators
            .iter()
            .rev()
            .find_map(|decorator| match decorator {
                Decorator::Animation { duration } => Some(*duration),
                _ => None,
            })
            .unwrap_or(DEFAULT_TRANSITION)
    }

    /// Compute the strip render model. Total over any input, including an
    /// empty item list.
    pub fn layout<'a>(
        &'a self,
        items: &'a [TabItem],
        selected: Option<&TabItem>,
        visibility: Visibility,
    ) -> StripLayout<'a> {
        let entries = items
            .iter()
            .map(|item| StripEntry {
                item,
                is_selected: selected
                    .map(|selected| selected.id() == item.id())
                    .unwrap_or(false),
            })
            .collect();

        StripLayout {
            metrics: self.metrics,
            entries,
            decorators: &self.decorators,
            visibility,
        }
    }
}

/// One item button in a [`StripLayout`].
#[derive(Debug, Clone, Copy)]
pub struct StripEntry<'a> {
    pub item: &'a TabItem,
    pub is_selected: bool,
}

/// Render model for a strip, independent of the UI toolkit.
#[derive(Debug, Clone)]
pub struct StripLayout<'a> {
    pub metrics: StyleMetrics,
    pub entries: Vec<StripEntry<'a>>,
    pub decorators: &'a [Decorator],
    pub visibility: Visibility,
}

impl StripLayout<'_> {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selected(&self) -> Option<&TabItem> {
        self.entries
            .iter()
            .find(|entry| entry.is_selected)
            .map(|entry| entry.item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<TabItem> {
        vec![TabItem::new("a"), TabItem::new("b"), TabItem::new("c")]
    }

    #[test]
    fn from_name_accepts_only_parameter_names() {
        for name in StyleKind::NAMES {
            let kind = StyleKind::from_name(name).expect("known style");
            assert_eq!(kind.name(), name);
        }
        assert_eq!(StyleKind::from_name("composable"), None);
        assert_eq!(StyleKind::from_name("Default"), None);
        assert_eq!(StyleKind::from_name(""), None);
    }

    #[test]
    fn variants_differ_only_in_visual_parameters() {
        let items = items();
        let selected = items[1].clone();
        for kind in [
            StyleKind::Default,
            StyleKind::Compact,
            StyleKind::Floating,
            StyleKind::Minimal,
        ] {
            let style = TabBarStyle::new(kind);
            let layout =
                style.layout(&items, Some(&selected), Visibility::Visible);
            assert_eq!(layout.entries.len(), 3);
            assert_eq!(layout.selected().map(TabItem::id), Some("b"));
            assert_eq!(layout.metrics, kind.metrics());
        }
    }

    #[test]
    fn layout_of_empty_items_is_an_empty_strip() {
        let style = TabBarStyle::floating();
        let layout = style.layout(&[], None, Visibility::Hidden);
        assert!(layout.is_empty());
        assert!(layout.selected().is_none());
        assert_eq!(layout.visibility, Visibility::Hidden);
    }

    #[test]
    fn layout_marks_selection_by_id() {
        let items = items();
        let style = TabBarStyle::default();
        let foreign = TabItem::new("c").with_title("Other label");
        let layout = style.layout(&items, Some(&foreign), Visibility::Visible);
        let flags: Vec<bool> =
            layout.entries.iter().map(|entry| entry.is_selected).collect();
        assert_eq!(flags, vec![false, false, true]);
    }

    #[test]
    fn decorators_keep_declaration_order_and_make_style_composable() {
        let style = TabBarStyle::compact()
            .background(Color::WHITE, 12.0)
            .shadow(Color::BLACK, 8.0, Vector::new(0.0, 4.0))
            .padding(16.0, 8.0)
            .animation(Duration::from_millis(500));

        assert_eq!(style.kind(), StyleKind::Composable);
        assert_eq!(style.base(), StyleKind::Compact);
        assert_eq!(style.metrics(), &StyleKind::Compact.metrics());
        assert!(matches!(
            style.decorators(),
            [
                Decorator::Background { .. },
                Decorator::Shadow { .. },
                Decorator::Padding { .. },
                Decorator::Animation { .. },
            ]
        ));
    }

    #[test]
    fn transition_defaults_and_uses_last_animation_decorator() {
        assert_eq!(TabBarStyle::default().transition(), DEFAULT_TRANSITION);

        let style = TabBarStyle::default()
            .animation(Duration::from_millis(100))
            .padding(4.0, 4.0)
            .animation(Duration::from_millis(200));
        assert_eq!(style.transition(), Duration::from_millis(200));
    }

    #[test]
    fn undecorated_style_reports_its_base_kind() {
        assert_eq!(TabBarStyle::minimal().kind(), StyleKind::Minimal);
        assert_eq!(
            TabBarStyle::from(StyleKind::Floating).kind(),
            StyleKind::Floating
        );
    }
}
