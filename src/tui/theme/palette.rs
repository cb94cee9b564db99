use ratatui::prelude::*;

/// Warm terminal palette for the playground
pub struct Palette {
    // Text colors
    pub text_primary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_native: Color,
    pub accent_latin: Color,
    pub accent_warning: Color,

    // UI colors
    pub border_default: Color,
    pub border_focused: Color,
    pub caret: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text_primary: Color::Rgb(235, 219, 178),
            text_muted: Color::Rgb(146, 131, 116),

            accent_primary: Color::Rgb(131, 165, 152),
            accent_native: Color::Rgb(184, 187, 38),
            accent_latin: Color::Rgb(254, 128, 25),
            accent_warning: Color::Rgb(250, 189, 47),

            border_default: Color::Rgb(80, 73, 69),
            border_focused: Color::Rgb(131, 165, 152),
            caret: Color::Rgb(251, 241, 199),
        }
    }
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }
}
