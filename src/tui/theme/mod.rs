mod palette;

use ratatui::prelude::*;

pub use palette::Palette;

use ugkey_core::KeyboardMode;

pub struct Theme {
    pub palette: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    pub fn new() -> Self {
        Self {
            palette: Palette::new(),
        }
    }

    // Panel border style
    pub fn panel_border(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.palette.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.border_default)
        }
    }

    // Primary text
    pub fn text_primary(&self) -> Style {
        Style::default().fg(self.palette.text_primary)
    }

    // Muted text (hints, labels)
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.palette.text_muted)
    }

    // Key hint style (the key part like "Tab")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.palette.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    // Badge for a field's keyboard mode
    pub fn mode_badge(&self, mode: KeyboardMode) -> Style {
        let color = match mode {
            KeyboardMode::Native => self.palette.accent_native,
            KeyboardMode::Latin => self.palette.accent_latin,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    // Unattached fields render dimmed
    pub fn detached(&self) -> Style {
        Style::default()
            .fg(self.palette.text_muted)
            .add_modifier(Modifier::DIM)
    }

    // Caret cell inside a field
    pub fn caret(&self) -> Style {
        Style::default()
            .fg(self.palette.caret)
            .add_modifier(Modifier::REVERSED)
    }

    // Panel title with optional focus indicator
    pub fn panel_title(&self, title: &str, focused: bool) -> Line<'_> {
        let style = if focused {
            Style::default()
                .fg(self.palette.accent_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            self.text_muted()
        };
        Line::styled(format!(" {} ", title), style)
    }
}

/// Global theme instance
pub static THEME: std::sync::OnceLock<Theme> = std::sync::OnceLock::new();

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::new)
}
