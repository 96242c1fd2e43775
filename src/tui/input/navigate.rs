use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::task::Category;
use crate::store::StoreError;
use crate::tui::app::{App, ConfirmAction, FormState, Mode, Pane, Workspace};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    app.status_message = None;

    match (key.modifiers, key.code) {
        // Quit
        (KeyModifiers::NONE, KeyCode::Char('q')) => {
            app.should_quit = true;
        }

        // Help
        (_, KeyCode::Char('?')) => {
            app.show_help = true;
        }

        // Clear active filters
        (_, KeyCode::Esc) => {
            app.last_search = None;
            match app.workspace {
                Workspace::Tasks => app.task_category = None,
                Workspace::Notes => app.note_category = None,
            }
            app.clamp_cursors();
        }

        // Workspace toggle
        (KeyModifiers::NONE, KeyCode::Tab) => {
            app.workspace = match app.workspace {
                Workspace::Tasks => Workspace::Notes,
                Workspace::Notes => Workspace::Tasks,
            };
            app.clamp_cursors();
        }

        // Pane toggle
        (KeyModifiers::NONE, KeyCode::Char('c')) => {
            app.pane = match app.pane {
                Pane::List => Pane::Calendar,
                Pane::Calendar => Pane::List,
            };
            app.clamp_cursors();
        }

        // Search
        (KeyModifiers::NONE, KeyCode::Char('/')) => {
            app.mode = Mode::Search;
            app.search_input.clear();
        }

        // Category filter cycling
        (KeyModifiers::NONE, KeyCode::Char('f')) => {
            cycle_category(app, true);
        }
        (KeyModifiers::SHIFT, KeyCode::Char('F')) => {
            cycle_category(app, false);
        }

        // Create / edit / delete
        (KeyModifiers::NONE, KeyCode::Char('a')) => {
            open_create_form(app);
        }
        (KeyModifiers::NONE, KeyCode::Char('e')) => {
            open_edit_form(app);
        }
        (KeyModifiers::NONE, KeyCode::Char('d')) => {
            request_delete(app);
        }

        // Task-only mutations
        (KeyModifiers::NONE, KeyCode::Char(' ')) => {
            toggle_selected_task(app);
        }
        (_, KeyCode::Char('+') | KeyCode::Char('=')) => {
            bump_selected_progress(app, 10);
        }
        (_, KeyCode::Char('-') | KeyCode::Char('_')) => {
            bump_selected_progress(app, -10);
        }

        // Movement
        (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => match app.pane {
            Pane::List => move_cursor(app, 1),
            Pane::Calendar => app.move_selected_date(7),
        },
        (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => match app.pane {
            Pane::List => move_cursor(app, -1),
            Pane::Calendar => app.move_selected_date(-7),
        },
        (KeyModifiers::NONE, KeyCode::Char('h') | KeyCode::Left) => {
            if app.pane == Pane::Calendar {
                app.move_selected_date(-1);
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('l') | KeyCode::Right) => {
            if app.pane == Pane::Calendar {
                app.move_selected_date(1);
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('g') | KeyCode::Home) => {
            if app.pane == Pane::List {
                set_cursor(app, 0);
            }
        }
        (KeyModifiers::SHIFT, KeyCode::Char('G')) | (_, KeyCode::End) => {
            if app.pane == Pane::List {
                let last = app.visible_len().saturating_sub(1);
                set_cursor(app, last);
            }
        }

        // Month stepping (calendar pane)
        (_, KeyCode::Char('[')) => {
            if app.pane == Pane::Calendar {
                app.step_month(false);
            }
        }
        (_, KeyCode::Char(']')) => {
            if app.pane == Pane::Calendar {
                app.step_month(true);
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('t')) => {
            if app.pane == Pane::Calendar {
                app.go_today();
            }
        }

        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn move_cursor(app: &mut App, delta: i64) {
    let len = app.visible_len();
    if len == 0 {
        return;
    }
    let cursor = match app.workspace {
        Workspace::Tasks => &mut app.task_cursor,
        Workspace::Notes => &mut app.note_cursor,
    };
    let next = (*cursor as i64 + delta).clamp(0, len as i64 - 1);
    *cursor = next as usize;
}

fn set_cursor(app: &mut App, value: usize) {
    match app.workspace {
        Workspace::Tasks => app.task_cursor = value,
        Workspace::Notes => app.note_cursor = value,
    }
}

/// Cycle the sidebar category filter: All -> first -> ... -> last -> All
fn cycle_category(app: &mut App, forward: bool) {
    match app.workspace {
        Workspace::Tasks => {
            let all = Category::ALL;
            let pos = app.task_category.and_then(|c| all.iter().position(|x| *x == c));
            app.task_category = step_option(pos, all.len(), forward).map(|i| all[i]);
        }
        Workspace::Notes => {
            let all: Vec<String> = app.notes.categories().iter().cloned().collect();
            let pos = app
                .note_category
                .as_ref()
                .and_then(|c| all.iter().position(|x| x == c));
            app.note_category = step_option(pos, all.len(), forward).map(|i| all[i].clone());
        }
    }
    app.clamp_cursors();
}

/// Step through None, Some(0), ..., Some(len-1), back to None
fn step_option(current: Option<usize>, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if forward {
        match current {
            None => Some(0),
            Some(i) if i + 1 < len => Some(i + 1),
            Some(_) => None,
        }
    } else {
        match current {
            None => Some(len - 1),
            Some(0) => None,
            Some(i) => Some(i - 1),
        }
    }
}

fn open_create_form(app: &mut App) {
    // On the calendar pane, prefill the selected date
    let prefill = match app.pane {
        Pane::Calendar => Some(app.selected_date),
        Pane::List => None,
    };
    app.form = Some(match app.workspace {
        Workspace::Tasks => FormState::new_task(prefill),
        Workspace::Notes => {
            let default_category = app
                .notes
                .categories()
                .first()
                .cloned()
                .unwrap_or_default();
            FormState::new_note(&default_category, prefill)
        }
    });
    app.mode = Mode::Form;
}

fn open_edit_form(app: &mut App) {
    if app.pane != Pane::List {
        return;
    }
    match app.workspace {
        Workspace::Tasks => {
            if let Some(id) = app.selected_task_id()
                && let Some(task) = app.tasks.get(id)
            {
                app.form = Some(FormState::edit_task(task));
                app.mode = Mode::Form;
            }
        }
        Workspace::Notes => {
            if let Some(id) = app.selected_note_id()
                && let Some(note) = app.notes.get(id)
            {
                app.form = Some(FormState::edit_note(note));
                app.mode = Mode::Form;
            }
        }
    }
}

fn request_delete(app: &mut App) {
    if app.pane != Pane::List {
        return;
    }
    match app.workspace {
        Workspace::Tasks => {
            if let Some(id) = app.selected_task_id()
                && let Some(task) = app.tasks.get(id)
            {
                app.confirm = Some(ConfirmAction::DeleteTask {
                    id,
                    title: task.title.clone(),
                });
                app.mode = Mode::Confirm;
            }
        }
        Workspace::Notes => {
            if let Some(id) = app.selected_note_id()
                && let Some(note) = app.notes.get(id)
            {
                app.confirm = Some(ConfirmAction::DeleteNote {
                    id,
                    title: note.title.clone(),
                });
                app.mode = Mode::Confirm;
            }
        }
    }
}

fn toggle_selected_task(app: &mut App) {
    if app.workspace != Workspace::Tasks || app.pane != Pane::List {
        return;
    }
    if let Some(id) = app.selected_task_id() {
        match app.tasks.toggle_completion(id) {
            Ok(true) => app.status_message = Some("completed".into()),
            Ok(false) => app.status_message = Some("reopened".into()),
            Err(e @ StoreError::NotFound(_)) => app.status_message = Some(e.to_string()),
            Err(_) => {}
        }
    }
}

fn bump_selected_progress(app: &mut App, delta: i32) {
    if app.workspace != Workspace::Tasks || app.pane != Pane::List {
        return;
    }
    if let Some(id) = app.selected_task_id() {
        let current = app.tasks.get(id).map(|t| t.progress as i32).unwrap_or(0);
        match app.tasks.set_progress(id, current + delta) {
            Ok(progress) => app.status_message = Some(format!("progress {progress}%")),
            Err(e) => app.status_message = Some(e.to_string()),
        }
    }
}
