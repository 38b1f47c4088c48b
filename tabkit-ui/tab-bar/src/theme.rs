use iced::Color;

/// Colors used to paint the strip and built-in pages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabBarPalette {
    /// Solid strip fill.
    pub background: Color,
    /// Translucent fill for material strips.
    pub material: Color,
    pub separator: Color,
    pub border: Color,
    pub shadow: Color,
    /// Selected item tint.
    pub accent: Color,
    /// Unselected item tint.
    pub inactive: Color,
    /// Highlight behind a selected item in pill layouts.
    pub pill: Color,
    pub content_background: Color,
    pub foreground: Color,
    pub dim_foreground: Color,
    pub field: Color,
}

impl Default for TabBarPalette {
    fn default() -> Self {
        Self::light()
    }
}

impl TabBarPalette {
    pub fn light() -> Self {
        let accent = Color::from_rgb8(0x00, 0x7A, 0xFF);
        Self {
            background: Color::from_rgb8(0xF9, 0xF9, 0xF9),
            material: Color::from_rgba8(0xF2, 0xF2, 0xF7, 0.85),
            separator: Color::from_rgb8(0xC6, 0xC6, 0xC8),
            border: Color::from_rgba8(0x3C, 0x3C, 0x43, 0.18),
            shadow: Color::from_rgba8(0x00, 0x00, 0x00, 0.10),
            accent,
            inactive: Color::from_rgb8(0x8E, 0x8E, 0x93),
            pill: with_alpha(accent, 0.12),
            content_background: Color::WHITE,
            foreground: Color::from_rgb8(0x1C, 0x1C, 0x1E),
            dim_foreground: Color::from_rgb8(0x6B, 0x72, 0x80),
            field: Color::from_rgb8(0xE5, 0xE5, 0xEA),
        }
    }

    pub fn dark() -> Self {
        let accent = Color::from_rgb8(0x4F, 0xA6, 0xED);
        Self {
            background: Color::from_rgb8(0x16, 0x18, 0x22),
            material: Color::from_rgba8(0x23, 0x25, 0x30, 0.85),
            separator: Color::from_rgb8(0x2C, 0x2F, 0x3A),
            border: Color::from_rgba8(0xC0, 0xC5, 0xCE, 0.18),
            shadow: Color::from_rgba8(0x00, 0x00, 0x00, 0.40),
            accent,
            inactive: Color::from_rgb8(0x6B, 0x72, 0x80),
            pill: with_alpha(accent, 0.20),
            content_background: Color::from_rgb8(0x0F, 0x11, 0x15),
            foreground: Color::from_rgb8(0xC0, 0xC5, 0xCE),
            dim_foreground: Color::from_rgb8(0x6C, 0x73, 0x85),
            field: Color::from_rgb8(0x23, 0x25, 0x30),
        }
    }

    pub fn for_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::dark() } else { Self::light() }
    }

    /// Every strip color with its alpha scaled by `opacity`.
    pub fn faded(&self, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        let scale = |color: Color| with_alpha(color, color.a * opacity);
        Self {
            background: scale(self.background),
            material: scale(self.material),
            separator: scale(self.separator),
            border: scale(self.border),
            shadow: scale(self.shadow),
            accent: scale(self.accent),
            inactive: scale(self.inactive),
            pill: scale(self.pill),
            field: scale(self.field),
            ..*self
        }
    }
}

pub(crate) fn with_alpha(mut color: Color, alpha: f32) -> Color {
    color.a = alpha;
    color
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_mode_flag_picks_palette() {
        assert_eq!(TabBarPalette::for_dark_mode(false), TabBarPalette::light());
        assert_eq!(TabBarPalette::for_dark_mode(true), TabBarPalette::dark());
        assert_ne!(TabBarPalette::light(), TabBarPalette::dark());
    }

    #[test]
    fn faded_scales_strip_alpha_only() {
        let palette = TabBarPalette::light();
        let faded = palette.faded(0.5);
        assert!((faded.background.a - 0.5).abs() < 1e-6);
        assert!((faded.material.a - palette.material.a * 0.5).abs() < 1e-6);
        assert_eq!(faded.content_background, palette.content_background);
        assert_eq!(faded.foreground, palette.foreground);

        let hidden = palette.faded(-1.0);
        assert_eq!(hidden.accent.a, 0.0);
    }
}
