use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

/// Search is a live filter: while typing, the visible lists narrow to the
/// current input. Enter commits it; Esc abandons it.
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Cancel: keep whatever was committed before
        (_, KeyCode::Esc) => {
            app.mode = Mode::Navigate;
            app.search_input.clear();
            app.clamp_cursors();
        }

        // Commit
        (_, KeyCode::Enter) => {
            app.last_search = if app.search_input.trim().is_empty() {
                None
            } else {
                Some(app.search_input.clone())
            };
            app.mode = Mode::Navigate;
            app.search_input.clear();
            app.clamp_cursors();
        }

        (_, KeyCode::Backspace) => {
            app.search_input.pop();
            app.clamp_cursors();
        }

        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.search_input.push(c);
            app.clamp_cursors();
        }

        _ => {}
    }
}
