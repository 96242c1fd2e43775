use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, ConfirmAction, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Navigate => {
            let mut spans: Vec<Span> = Vec::new();
            if let Some(message) = &app.status_message {
                spans.push(Span::styled(
                    format!(" {}", message),
                    Style::default().fg(app.theme.text).bg(bg),
                ));
            } else if let Some(pattern) = &app.last_search {
                spans.push(Span::styled(
                    format!(" /{}", pattern),
                    Style::default().fg(app.theme.dim).bg(bg),
                ));
            }
            with_right_hint(spans, "? help", width, app, bg)
        }
        Mode::Search => {
            let spans = vec![
                Span::styled(
                    format!(" /{}", app.search_input),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled(
                    "\u{258C}",
                    Style::default().fg(app.theme.highlight).bg(bg),
                ),
            ];
            with_right_hint(spans, "Enter apply  Esc cancel", width, app, bg)
        }
        Mode::Form => {
            let spans = vec![Span::styled(
                " editing",
                Style::default().fg(app.theme.dim).bg(bg),
            )];
            with_right_hint(spans, "Enter save  Tab field  Esc cancel", width, app, bg)
        }
        Mode::Confirm => {
            let prompt = match &app.confirm {
                Some(ConfirmAction::DeleteTask { title, .. }) => {
                    format!(" delete task \"{}\"? ", title)
                }
                Some(ConfirmAction::DeleteNote { title, .. }) => {
                    format!(" delete note \"{}\"? ", title)
                }
                None => String::new(),
            };
            let spans = vec![Span::styled(
                prompt,
                Style::default().fg(app.theme.yellow).bg(bg),
            )];
            with_right_hint(spans, "y confirm  n cancel", width, app, bg)
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Pad spans to the full width with a dimmed hint on the right edge
fn with_right_hint<'a>(
    mut spans: Vec<Span<'a>>,
    hint: &'a str,
    width: usize,
    app: &App,
    bg: ratatui::style::Color,
) -> Line<'a> {
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count() + 1;
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            hint,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
    Line::from(spans)
}
