use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use ugkey_core::{EventDisposition, KeyInput};

use crate::tui::app::App;

/// Handle a key event and return true if the app should quit
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Tab => {
            app.cycle_focus_forward();
            return false;
        }
        KeyCode::BackTab => {
            app.cycle_focus_backward();
            return false;
        }
        _ => {}
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if let KeyCode::Char(c) = key.code {
        if ctrl {
            if c == 'q' {
                return true;
            }
            handle_command_key(app, c);
        } else {
            handle_character(app, c);
        }
        return false;
    }

    // Editing keys the engine never sees: plain field behavior.
    let field = app.focused_field();
    match key.code {
        KeyCode::Backspace => field.backspace(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        _ => {}
    }

    false
}

/// The keydown path: [Ctrl] shortcuts go to the binder first.
fn handle_command_key(app: &mut App, c: char) {
    let input = KeyInput::with_ctrl(c);
    let name = app.focused_name().to_string();
    let disposition = {
        let binder = &app.binder;
        // Split borrow: the binder toggles state, the field gets updated.
        let field = &mut app.fields[app.focused];
        binder.on_key_down(&input, field)
    };

    if disposition == EventDisposition::NotHandled {
        app.push_log(format!("ctrl-{} not bound on '{}'", c, name));
    }
}

/// The keypress path: characters go through the insertion engine; whatever
/// it passes through lands in the field the default way.
fn handle_character(app: &mut App, c: char) {
    let input = KeyInput::plain(c);
    let disposition = {
        let binder = &app.binder;
        let field = &mut app.fields[app.focused];
        binder.on_key_press(&input, field)
    };

    if disposition == EventDisposition::NotHandled {
        app.focused_field().type_char(c);
    }
}

/// A horizontal left-button drag on the playground is the swipe gesture.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let (x, y) = (mouse.column as f32, mouse.row as f32);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.swipe.touch_start(x, y, 1);
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            app.swipe.touch_move(x, y, 1);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(swipe) = app.swipe.touch_end() {
                let name = app.focused_name().to_string();
                app.binder.on_swipe(&name);
                app.push_log(format!("swipe {:?} on '{}'", swipe, name));
            }
        }
        _ => {}
    }
}
