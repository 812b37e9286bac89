use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::app::App;
use crate::conversation::Message;

/// What the event loop should do after a key event.
pub enum Control {
    Continue,
    Quit,
    /// A submission is ready: send this transcript snapshot to the backend.
    Dispatch(Vec<Message>),
}

pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Control {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Control::Quit,
        (_, KeyCode::Esc) => Control::Quit,

        // Enter sends; the input stays single-line
        (_, KeyCode::Enter) => match app.submit() {
            Some(snapshot) => Control::Dispatch(snapshot),
            None => Control::Continue,
        },

        (_, KeyCode::PageUp) => {
            app.scroll_up(5);
            Control::Continue
        }
        (_, KeyCode::PageDown) => {
            app.scroll_down(5);
            Control::Continue
        }

        // Everything else edits the draft
        _ => {
            app.textarea.input(Event::Key(key));
            Control::Continue
        }
    }
}

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.scroll_up(3),
        MouseEventKind::ScrollDown => app.scroll_down(3),
        _ => {}
    }
}
