mod fields_panel;
mod footer;
mod header;
mod log_panel;

use ratatui::prelude::*;

use crate::tui::app::App;

pub fn draw_ui(frame: &mut Frame, app: &App) {
    let field_rows = app.fields.len() as u16 + 2;

    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),          // Compact header
            Constraint::Length(field_rows), // Text fields
            Constraint::Min(5),             // Event log
            Constraint::Length(2),          // Footer
        ])
        .split(frame.area());

    header::render(frame, app, root[0]);
    fields_panel::render(frame, app, root[1]);
    log_panel::render(frame, app, root[2]);
    footer::render(frame, app, root[3]);
}
