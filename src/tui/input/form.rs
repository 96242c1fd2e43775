use chrono::{NaiveDate, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::note::NoteDraft;
use crate::model::task::{Category, Priority, TaskDraft};
use crate::tui::app::{App, FormField, FormKind, FormState, Mode};

use super::common;

pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    let Some(mut form) = app.form.take() else {
        app.mode = Mode::Navigate;
        return;
    };

    match (key.modifiers, key.code) {
        // Abandon the form
        (_, KeyCode::Esc) => {
            app.mode = Mode::Navigate;
            return;
        }

        // Field navigation
        (KeyModifiers::NONE, KeyCode::Tab) | (_, KeyCode::Down) => {
            focus_field(&mut form, 1);
        }
        (_, KeyCode::BackTab) | (_, KeyCode::Up) => {
            focus_field(&mut form, -1);
        }

        // Enter: commit a tag on the tag field, otherwise submit
        (_, KeyCode::Enter) => {
            if form.focused() == FormField::Tags && !form.tag_entry.trim().is_empty() {
                commit_tag(&mut form);
            } else if submit(app, &mut form) {
                app.mode = Mode::Navigate;
                return;
            }
        }

        // Select fields cycle with left/right or space
        (_, KeyCode::Left) if form.focused().is_select() => cycle_select(&mut form, -1),
        (_, KeyCode::Right) if form.focused().is_select() => cycle_select(&mut form, 1),
        (KeyModifiers::NONE, KeyCode::Char(' ')) if form.focused().is_select() => {
            cycle_select(&mut form, 1)
        }

        // Text editing
        (_, KeyCode::Left) => {
            if let Some(buffer) = form.text_buffer() {
                let buffer = buffer.clone();
                common::cursor_left(&buffer, &mut form.cursor);
            }
        }
        (_, KeyCode::Right) => {
            if let Some(buffer) = form.text_buffer() {
                let buffer = buffer.clone();
                common::cursor_right(&buffer, &mut form.cursor);
            }
        }
        (_, KeyCode::Home) => form.cursor = 0,
        (_, KeyCode::End) => {
            if let Some(buffer) = form.text_buffer() {
                form.cursor = buffer.len();
            }
        }
        (_, KeyCode::Backspace) => {
            // An empty tag entry backspaces into the committed tags
            if form.focused() == FormField::Tags && form.tag_entry.is_empty() {
                form.tags.pop();
            } else {
                let mut cursor = form.cursor;
                if let Some(buffer) = form.text_buffer_mut() {
                    common::backspace(buffer, &mut cursor);
                }
                form.cursor = cursor;
            }
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            let mut cursor = form.cursor;
            if let Some(buffer) = form.text_buffer_mut() {
                common::insert_char(buffer, &mut cursor, c);
            }
            form.cursor = cursor;
        }

        _ => {}
    }

    app.form = Some(form);
}

/// Move focus by `delta` fields, wrapping, and reset the cursor to the end of
/// the newly focused text buffer.
fn focus_field(form: &mut FormState, delta: i64) {
    let len = form.fields().len() as i64;
    form.focus = ((form.focus as i64 + delta).rem_euclid(len)) as usize;
    form.cursor = form.text_buffer().map_or(0, |b| b.len());
}

fn cycle_select(form: &mut FormState, delta: i64) {
    match form.focused() {
        FormField::Category => {
            let len = Category::ALL.len() as i64;
            form.category_idx = ((form.category_idx as i64 + delta).rem_euclid(len)) as usize;
        }
        FormField::Priority => {
            let len = Priority::ALL.len() as i64;
            form.priority_idx = ((form.priority_idx as i64 + delta).rem_euclid(len)) as usize;
        }
        _ => {}
    }
}

/// Move the tag entry into the committed tag set (the set dedups)
fn commit_tag(form: &mut FormState) {
    let tag = form.tag_entry.trim().trim_start_matches('#').trim();
    if !tag.is_empty() {
        form.tags.insert(tag.to_string());
    }
    form.tag_entry.clear();
    form.cursor = 0;
}

/// Validate, build the draft, and commit it to the store.
/// Returns true when the form is done; on failure the error is shown inline.
fn submit(app: &mut App, form: &mut FormState) -> bool {
    // A half-typed tag counts: commit it before validating
    if !form.tag_entry.trim().is_empty() {
        commit_tag(form);
    }

    let result = match form.kind {
        FormKind::Task { editing } => build_task_draft(form).and_then(|draft| match editing {
            Some(id) => app
                .tasks
                .update(id, draft)
                .map(|_| format!("updated task #{id}"))
                .map_err(|e| e.to_string()),
            None => app
                .tasks
                .create(draft)
                .map(|id| format!("created task #{id}"))
                .map_err(|e| e.to_string()),
        }),
        FormKind::Note { editing } => build_note_draft(form).and_then(|draft| match editing {
            Some(id) => app
                .notes
                .update(id, draft)
                .map(|_| format!("updated note #{id}"))
                .map_err(|e| e.to_string()),
            None => app
                .notes
                .create(draft)
                .map(|id| format!("created note #{id}"))
                .map_err(|e| e.to_string()),
        }),
    };

    match result {
        Ok(message) => {
            app.status_message = Some(message);
            app.clamp_cursors();
            true
        }
        Err(message) => {
            form.error = Some(message);
            false
        }
    }
}

fn build_task_draft(form: &FormState) -> Result<TaskDraft, String> {
    Ok(TaskDraft {
        title: form.title.clone(),
        description: form.body.clone(),
        category: Category::ALL[form.category_idx],
        priority: Priority::ALL[form.priority_idx],
        deadline: parse_deadline(&form.deadline)?,
        estimated_hours: parse_hours(&form.hours)?,
    })
}

fn build_note_draft(form: &FormState) -> Result<NoteDraft, String> {
    Ok(NoteDraft {
        title: form.title.clone(),
        content: form.body.clone(),
        category: form.note_category.clone(),
        date: parse_date(&form.date)?,
        tags: form.tags.clone(),
    })
}

// ---------------------------------------------------------------------------
// Field parsing
//
// The original forms used typed browser inputs, so malformed text was
// unrepresentable; a terminal text field needs the checks at submit time.
// ---------------------------------------------------------------------------

/// Empty = no deadline. Accepts "YYYY-MM-DD HH:MM" or a bare date (midnight).
fn parse_deadline(text: &str) -> Result<Option<NaiveDateTime>, String> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDate::parse_from_str(text, "%Y-%m-%d").map(|d| d.and_time(Default::default())))
        .map(Some)
        .map_err(|_| "deadline must be YYYY-MM-DD or YYYY-MM-DD HH:MM".to_string())
}

/// Empty = unset (create: today; edit: keep)
fn parse_date(text: &str) -> Result<Option<NaiveDate>, String> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| "date must be YYYY-MM-DD".to_string())
}

/// Empty = the form default of 1 hour. Negative values are accepted.
fn parse_hours(text: &str) -> Result<f32, String> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(1.0);
    }
    text.parse::<f32>()
        .map_err(|_| "estimated hours must be a number".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_deadline_formats() {
        assert_eq!(parse_deadline("  "), Ok(None));
        assert_eq!(
            parse_deadline("2026-08-10 09:30"),
            Ok(NaiveDate::from_ymd_opt(2026, 8, 10)
                .unwrap()
                .and_hms_opt(9, 30, 0))
        );
        // Bare date lands at midnight
        assert_eq!(
            parse_deadline("2026-08-10"),
            Ok(NaiveDate::from_ymd_opt(2026, 8, 10)
                .unwrap()
                .and_hms_opt(0, 0, 0))
        );
        assert!(parse_deadline("tomorrow").is_err());
        assert!(parse_deadline("2026-13-01").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date(""), Ok(None));
        assert_eq!(
            parse_date("2026-02-28"),
            Ok(NaiveDate::from_ymd_opt(2026, 2, 28))
        );
        assert!(parse_date("02/28/2026").is_err());
    }

    #[test]
    fn test_parse_hours() {
        assert_eq!(parse_hours(""), Ok(1.0));
        assert_eq!(parse_hours("2.5"), Ok(2.5));
        // The unchecked-gap from the original is preserved
        assert_eq!(parse_hours("-3"), Ok(-3.0));
        assert!(parse_hours("two").is_err());
    }

    #[test]
    fn test_commit_tag_dedups_and_strips_hash() {
        let mut form = FormState::new_note("work", None);
        form.tag_entry = "#retro".into();
        commit_tag(&mut form);
        form.tag_entry = " retro ".into();
        commit_tag(&mut form);
        assert_eq!(form.tags.len(), 1);
        assert!(form.tags.contains("retro"));
        assert!(form.tag_entry.is_empty());
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = FormState::new_task(None);
        assert_eq!(form.focused(), FormField::Title);
        focus_field(&mut form, -1);
        assert_eq!(form.focused(), FormField::Hours);
        focus_field(&mut form, 1);
        assert_eq!(form.focused(), FormField::Title);
    }

    #[test]
    fn test_cycle_select_wraps() {
        let mut form = FormState::new_task(None);
        // Focus the category field
        while form.focused() != FormField::Category {
            focus_field(&mut form, 1);
        }
        form.category_idx = Category::ALL.len() - 1;
        cycle_select(&mut form, 1);
        assert_eq!(form.category_idx, 0);
        cycle_select(&mut form, -1);
        assert_eq!(form.category_idx, Category::ALL.len() - 1);
    }
}
