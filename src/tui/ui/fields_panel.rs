use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use ugkey_core::TextInput;

use crate::tui::app::App;
use crate::tui::theme::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();

    let block = Block::default()
        .title(t.panel_title("FIELDS", true))
        .borders(Borders::ALL)
        .border_style(t.panel_border(true))
        .border_type(BorderType::Plain);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::with_capacity(app.fields.len());
    for (index, field) in app.fields.iter().enumerate() {
        let focused = index == app.focused;
        let attached = app.is_attached(field.name());

        let marker = if focused { "> " } else { "  " };
        let mut spans = vec![Span::styled(
            format!("{}{:<10}", marker, field.name()),
            if focused { t.text_primary() } else { t.text_muted() },
        )];

        if attached {
            let mode = app.field_mode(field.name());
            spans.push(Span::styled(format!("[{}] ", mode), t.mode_badge(mode)));
            spans.push(Span::styled(
                format!("{} ", field.direction()),
                t.text_muted(),
            ));
        } else {
            spans.push(Span::styled("[--] ", t.detached()));
            spans.push(Span::styled("    ", t.text_muted()));
        }

        spans.push(Span::styled("\u{2502} ", t.text_muted()));
        spans.extend(value_spans(field, focused));

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Field content with the caret cell highlighted on the focused field.
fn value_spans(field: &crate::tui::app::SimField, focused: bool) -> Vec<Span<'static>> {
    let t = theme();
    let chars = field.chars();
    let caret = field.caret();

    if !focused {
        return vec![Span::styled(
            chars.iter().collect::<String>(),
            t.text_primary(),
        )];
    }

    let before: String = chars[..caret].iter().collect();
    let (at, after): (String, String) = if caret < chars.len() {
        (
            chars[caret].to_string(),
            chars[caret + 1..].iter().collect(),
        )
    } else {
        (" ".to_string(), String::new())
    };

    vec![
        Span::styled(before, t.text_primary()),
        Span::styled(at, t.caret()),
        Span::styled(after, t.text_primary()),
    ]
}
