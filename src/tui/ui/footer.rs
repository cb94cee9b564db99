use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use ugkey_core::TextInput;

use crate::tui::app::App;
use crate::tui::theme::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();

    let name = app.focused_name();
    let line1 = if app.is_attached(name) {
        Line::from(vec![
            Span::styled(format!("{} ", name), t.text_primary().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(
                    "mode:{} dir:{}",
                    app.field_mode(name),
                    app.fields[app.focused].direction()
                ),
                t.text_muted(),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(format!("{} ", name), t.text_primary().add_modifier(Modifier::BOLD)),
            Span::styled("not attached ~ keystrokes pass through", t.text_muted()),
        ])
    };

    let line2 = Line::from(vec![
        Span::styled("Tab", t.key_hint()),
        Span::styled(":field  ", t.text_muted()),
        Span::styled("Ctrl-K", t.key_hint()),
        Span::styled(":mode  ", t.text_muted()),
        Span::styled("Ctrl-T/Y", t.key_hint()),
        Span::styled(":direction  ", t.text_muted()),
        Span::styled("drag", t.key_hint()),
        Span::styled(":swipe  ", t.text_muted()),
        Span::styled("Esc", t.key_hint()),
        Span::styled(":quit", t.text_muted()),
    ]);

    let footer = Paragraph::new(vec![line1, line2]);
    frame.render_widget(footer, area);
}
