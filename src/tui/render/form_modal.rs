use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::task::{Category, Priority};
use crate::tui::app::{App, FormField, FormState};

use super::helpers::centered_rect;

const LABEL_WIDTH: usize = 12;

/// Render the create/edit form as a centered modal over the content area
pub fn render_form_modal(frame: &mut Frame, app: &App, area: Rect) {
    let form = match &app.form {
        Some(form) => form,
        None => return,
    };

    // One row per field plus committed tags, error, and hint rows
    let height = (form.fields().len() + 6) as u16;
    let rect = centered_rect(58, height, area);

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(app.theme.background))
        .title(format!(" {} ", form.heading()))
        .title_style(
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.background)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(app.theme.background));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let mut lines: Vec<Line> = Vec::new();
    for (i, field) in form.fields().iter().enumerate() {
        lines.push(field_line(app, form, *field, i == form.focus));
    }

    // Committed tags (note form)
    if form.fields().contains(&FormField::Tags) {
        let mut spans = vec![Span::styled(
            format!(" {:<width$}", "", width = LABEL_WIDTH),
            Style::default().bg(app.theme.background),
        )];
        if form.tags.is_empty() {
            spans.push(Span::styled(
                "no tags yet \u{2014} Enter adds one",
                Style::default().fg(app.theme.dim).bg(app.theme.background),
            ));
        } else {
            for (i, tag) in form.tags.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled(" ", Style::default().bg(app.theme.background)));
                }
                spans.push(Span::styled(
                    format!("#{}", tag),
                    Style::default()
                        .fg(app.theme.tag_color(tag))
                        .bg(app.theme.background),
                ));
            }
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());

    // Validation error, surfaced inline
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(app.theme.red).bg(app.theme.background),
        )));
    } else {
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        " Enter save \u{00B7} Tab next field \u{00B7} Esc cancel",
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    )));

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(app.theme.background)),
        inner,
    );
}

fn field_line<'a>(app: &App, form: &FormState, field: FormField, focused: bool) -> Line<'a> {
    let bg = app.theme.background;
    let label_style = if focused {
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };

    let mut spans = vec![Span::styled(
        format!(" {:<width$}", field.label(), width = LABEL_WIDTH),
        label_style,
    )];

    match field {
        FormField::Category => {
            spans.extend(select_spans(
                app,
                Category::ALL[form.category_idx].label(),
                focused,
            ));
        }
        FormField::Priority => {
            spans.extend(select_spans(
                app,
                Priority::ALL[form.priority_idx].label(),
                focused,
            ));
        }
        _ => {
            let value = match field {
                FormField::Title => &form.title,
                FormField::Body => &form.body,
                FormField::Deadline => &form.deadline,
                FormField::Hours => &form.hours,
                FormField::NoteCategory => &form.note_category,
                FormField::Date => &form.date,
                FormField::Tags => &form.tag_entry,
                FormField::Category | FormField::Priority => unreachable!(),
            };
            spans.extend(text_spans(app, value, form.cursor, focused));
            if !focused {
                if let Some(placeholder) = placeholder_for(field, value) {
                    spans.push(Span::styled(
                        placeholder,
                        Style::default().fg(app.theme.dim).bg(bg),
                    ));
                }
            }
        }
    }

    Line::from(spans)
}

/// Spans for a text field value, with a cursor bar when focused
fn text_spans<'a>(app: &App, value: &str, cursor: usize, focused: bool) -> Vec<Span<'a>> {
    let bg = app.theme.background;
    let style = Style::default().fg(app.theme.text_bright).bg(bg);

    if !focused {
        return vec![Span::styled(value.to_string(), style)];
    }

    let at = cursor.min(value.len());
    let mut spans = Vec::new();
    if at > 0 {
        spans.push(Span::styled(value[..at].to_string(), style));
    }
    spans.push(Span::styled(
        "\u{258C}",
        Style::default().fg(app.theme.highlight).bg(bg),
    ));
    if at < value.len() {
        spans.push(Span::styled(value[at..].to_string(), style));
    }
    spans
}

/// Spans for a select field: arrows when focused
fn select_spans<'a>(app: &App, value: &'static str, focused: bool) -> Vec<Span<'a>> {
    let bg = app.theme.background;
    if focused {
        vec![
            Span::styled("\u{25C2} ", Style::default().fg(app.theme.highlight).bg(bg)),
            Span::styled(
                value,
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" \u{25B8}", Style::default().fg(app.theme.highlight).bg(bg)),
        ]
    } else {
        vec![Span::styled(
            value,
            Style::default().fg(app.theme.text_bright).bg(bg),
        )]
    }
}

/// Format hints for empty unfocused fields
fn placeholder_for(field: FormField, value: &str) -> Option<&'static str> {
    if !value.is_empty() {
        return None;
    }
    match field {
        FormField::Deadline => Some("YYYY-MM-DD [HH:MM]"),
        FormField::Date => Some("YYYY-MM-DD (today)"),
        FormField::Tags => Some("type and press Enter"),
        _ => None,
    }
}
