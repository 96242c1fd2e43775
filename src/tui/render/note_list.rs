use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::stats::note_stats;
use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::spans_width;
use super::push_highlighted_spans;

/// Rows each note occupies in the list (title line, detail line, blank)
const ROWS_PER_NOTE: usize = 3;

/// Render the note workspace list pane: stats, category sidebar, note rows
pub fn render_note_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // stats
            Constraint::Length(1), // spacer
            Constraint::Min(1),    // content
        ])
        .split(area);

    render_stats(frame, app, chunks[0]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(1)])
        .split(chunks[2]);

    render_sidebar(frame, app, content[0]);
    render_rows(frame, app, content[1]);
}

fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
    let stats = note_stats(app.notes.list(), Local::now().date_naive());
    let bg = app.theme.background;

    let spans = vec![
        Span::styled(
            format!(" \u{25A3} {} notes", stats.total),
            Style::default().fg(app.theme.blue).bg(bg),
        ),
        Span::styled("   ", Style::default().bg(bg)),
        Span::styled(
            format!("\u{2600} {} today", stats.today),
            Style::default().fg(app.theme.yellow).bg(bg),
        ),
        Span::styled("   ", Style::default().bg(bg)),
        Span::styled(
            format!("\u{25C6} {} categories", stats.categories),
            Style::default().fg(app.theme.cyan).bg(bg),
        ),
        Span::styled("   ", Style::default().bg(bg)),
        Span::styled(
            format!("# {} tags", stats.tags),
            Style::default().fg(app.theme.purple).bg(bg),
        ),
    ];

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        " Categories",
        Style::default()
            .fg(app.theme.dim)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));

    lines.push(sidebar_row(
        "All Notes".to_string(),
        app.notes.len(),
        app.theme.text,
        app.note_category.is_none(),
        app,
        width,
    ));

    for category in app.notes.categories() {
        let count = app
            .notes
            .list()
            .iter()
            .filter(|n| &n.category == category)
            .count();
        lines.push(sidebar_row(
            category.clone(),
            count,
            app.theme.tag_color(category),
            app.note_category.as_ref() == Some(category),
            app,
            width,
        ));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );
}

fn sidebar_row<'a>(
    label: String,
    count: usize,
    color: ratatui::style::Color,
    selected: bool,
    app: &App,
    width: usize,
) -> Line<'a> {
    let bg = if selected {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let label_style = if selected {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(bg)
    };

    let mut spans = vec![
        Span::styled(" \u{25CF} ", Style::default().fg(color).bg(bg)),
        Span::styled(
            unicode::truncate_to_width(&label, width.saturating_sub(8)),
            label_style,
        ),
    ];
    let count_text = format!("{}", count);
    let used = spans_width(&spans);
    let padding = width.saturating_sub(used + count_text.len() + 1);
    spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
    spans.push(Span::styled(
        count_text,
        Style::default().fg(app.theme.dim).bg(bg),
    ));
    Line::from(spans)
}

fn render_rows(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.visible_len() == 0 {
        let message = if app.notes.is_empty() {
            " No notes yet — press a to create one"
        } else {
            " No notes match the current filter"
        };
        let empty =
            Paragraph::new(message).style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    // Keep the cursor row on screen (mutate before borrowing the note list)
    let items_on_screen = (area.height as usize / ROWS_PER_NOTE).max(1);
    if app.note_cursor < app.note_scroll {
        app.note_scroll = app.note_cursor;
    }
    if app.note_cursor >= app.note_scroll + items_on_screen {
        app.note_scroll = app.note_cursor + 1 - items_on_screen;
    }

    let search_re = app.active_search_re();
    let visible = app.visible_notes();
    let mut lines: Vec<Line> = Vec::new();

    for (i, note) in visible
        .iter()
        .enumerate()
        .skip(app.note_scroll)
        .take(items_on_screen)
    {
        let is_cursor = i == app.note_cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

        // Title line with tags
        let mut spans: Vec<Span> = Vec::new();
        spans.push(Span::styled("  ", Style::default().bg(row_bg)));
        let mut title_style = Style::default().fg(app.theme.text_bright).bg(row_bg);
        if is_cursor {
            title_style = title_style.add_modifier(Modifier::BOLD);
        }
        push_highlighted_spans(
            &mut spans,
            &note.title,
            title_style,
            Style::default()
                .fg(app.theme.search_match_fg)
                .bg(app.theme.search_match_bg),
            search_re.as_ref(),
        );
        for tag in &note.tags {
            spans.push(Span::styled("  ", Style::default().bg(row_bg)));
            push_highlighted_spans(
                &mut spans,
                &format!("#{}", tag),
                Style::default().fg(app.theme.tag_color(tag)).bg(row_bg),
                Style::default()
                    .fg(app.theme.search_match_fg)
                    .bg(app.theme.search_match_bg),
                search_re.as_ref(),
            );
        }
        pad_line(&mut spans, area.width as usize, row_bg);
        lines.push(Line::from(spans));

        // Detail line: category, date, first line of content
        let mut detail: Vec<Span> = Vec::new();
        detail.push(Span::styled("  ", Style::default().bg(row_bg)));
        detail.push(Span::styled(
            note.category.clone(),
            Style::default()
                .fg(app.theme.tag_color(&note.category))
                .bg(row_bg),
        ));
        detail.push(Span::styled(
            format!(" \u{00B7} {}", note.date.format("%Y-%m-%d")),
            Style::default().fg(app.theme.dim).bg(row_bg),
        ));
        if let Some(first_line) = note.content.lines().next() {
            if !first_line.trim().is_empty() {
                detail.push(Span::styled(
                    format!(
                        " \u{00B7} {}",
                        unicode::truncate_to_width(first_line, (area.width as usize).saturating_sub(spans_width(&detail) + 3))
                    ),
                    Style::default().fg(app.theme.dim).bg(row_bg),
                ));
            }
        }
        pad_line(&mut detail, area.width as usize, row_bg);
        lines.push(Line::from(detail));

        lines.push(Line::from(Span::styled(
            " ".repeat(area.width as usize),
            Style::default().bg(bg),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );
}

/// Pad a line's spans with background out to the full width
fn pad_line(spans: &mut Vec<Span>, width: usize, bg: ratatui::style::Color) {
    let used = spans_width(spans);
    if used < width {
        spans.push(Span::styled(
            " ".repeat(width - used),
            Style::default().bg(bg),
        ));
    }
}
