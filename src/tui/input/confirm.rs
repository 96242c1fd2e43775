use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, ConfirmAction, Mode};

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Confirm: y
        (KeyModifiers::NONE, KeyCode::Char('y')) => {
            let action = app.confirm.take();
            app.mode = Mode::Navigate;
            if let Some(action) = action {
                perform_delete(app, action);
            }
        }
        // Cancel: n or Esc
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.confirm = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}

fn perform_delete(app: &mut App, action: ConfirmAction) {
    let result = match &action {
        ConfirmAction::DeleteTask { id, title } => app
            .tasks
            .delete(*id)
            .map(|_| format!("deleted \"{title}\"")),
        ConfirmAction::DeleteNote { id, title } => app
            .notes
            .delete(*id)
            .map(|_| format!("deleted \"{title}\"")),
    };

    app.status_message = Some(match result {
        Ok(message) => message,
        // Surface the miss instead of silently dropping it
        Err(e) => e.to_string(),
    });
    app.clamp_cursors();
}
