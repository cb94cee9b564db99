use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::theme::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();

    let hamza_label = if app.binder.engine().smart_hamza() {
        "smart-hamza:on"
    } else {
        "smart-hamza:off"
    };

    let line = Line::from(vec![
        Span::styled("ugkey ", t.text_primary().add_modifier(Modifier::BOLD)),
        Span::styled("playground ", t.text_muted()),
        Span::styled(format!("[{}] ", hamza_label), t.key_hint()),
        Span::styled(
            format!("{} fields attached", app.binder.modes().field_count()),
            t.text_muted(),
        ),
        Span::raw(" "),
        Span::styled("Esc:quit", t.key_hint()),
    ]);

    let header = Paragraph::new(line).alignment(Alignment::Left);
    frame.render_widget(header, area);
}
