use chrono::{Datelike, Local, NaiveDate};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::calendar::CalendarCell;
use crate::ops::calendar::items_on;
use crate::tui::app::{App, Workspace};
use crate::util::unicode;

use super::helpers::spans_width;
use super::push_highlighted_spans;

const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Render the calendar pane: month header, weekday row, day grid, and the
/// item list for the selected date.
pub fn render_calendar_view(frame: &mut Frame, app: &App, area: Rect) {
    let grid = app.grid();
    let week_count = grid.weeks().count();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                     // month header
            Constraint::Length(1),                     // weekday labels
            Constraint::Length((week_count * 2) as u16), // day grid
            Constraint::Length(1),                     // spacer
            Constraint::Min(1),                        // selected-day items
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    render_weekday_row(frame, app, chunks[1]);
    render_grid(frame, app, &grid, chunks[2]);
    render_day_items(frame, app, chunks[4]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = vec![Span::styled(
        format!(" {}", app.month.label()),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];

    let hint = "[ prev  ] next  t today";
    let content_width = spans_width(&spans);
    let hint_width = hint.chars().count() + 1;
    if content_width + hint_width < width {
        spans.push(Span::styled(
            " ".repeat(width - content_width - hint_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            hint,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

fn render_weekday_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let cell_width = cell_width(area);

    let mut spans: Vec<Span> = Vec::new();
    for label in WEEKDAY_LABELS {
        spans.push(Span::styled(
            format!(" {:<width$}", label, width = cell_width - 1),
            Style::default()
                .fg(app.theme.dim)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

fn render_grid(
    frame: &mut Frame,
    app: &App,
    grid: &crate::model::calendar::MonthGrid,
    area: Rect,
) {
    let bg = app.theme.background;
    let cell_width = cell_width(area);
    let today = Local::now().date_naive();
    let mut lines: Vec<Line> = Vec::new();

    for week in grid.weeks() {
        let mut number_spans: Vec<Span> = Vec::new();
        let mut count_spans: Vec<Span> = Vec::new();

        for col in 0..7 {
            match week.get(col) {
                Some(CalendarCell::Day { date, in_month }) => {
                    let selected = *date == app.selected_date;
                    let cell_bg = if selected { app.theme.selection_bg } else { bg };

                    let mut number_style = if *in_month {
                        Style::default().fg(app.theme.text).bg(cell_bg)
                    } else {
                        Style::default().fg(app.theme.dim).bg(cell_bg)
                    };
                    if *date == today {
                        number_style = number_style
                            .fg(app.theme.highlight)
                            .add_modifier(Modifier::BOLD);
                    }
                    if selected {
                        number_style = number_style.add_modifier(Modifier::BOLD);
                    }

                    let marker = if *date == today { "\u{25CB}" } else { " " };
                    number_spans.push(Span::styled(
                        format!(" {:>2}{:<width$}", date.day(), marker, width = cell_width - 3),
                        number_style,
                    ));

                    let count = items_on_date(app, *date);
                    let count_text = if count > 0 {
                        format!("  \u{25CF}{:<width$}", count, width = cell_width - 3)
                    } else {
                        " ".repeat(cell_width)
                    };
                    count_spans.push(Span::styled(
                        count_text,
                        Style::default().fg(workspace_accent(app)).bg(cell_bg),
                    ));
                }
                Some(CalendarCell::Blank) | None => {
                    number_spans.push(Span::styled(
                        " ".repeat(cell_width),
                        Style::default().bg(bg),
                    ));
                    count_spans.push(Span::styled(
                        " ".repeat(cell_width),
                        Style::default().bg(bg),
                    ));
                }
            }
        }

        lines.push(Line::from(number_spans));
        lines.push(Line::from(count_spans));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );
}

/// The filtered items for the selected date, listed under the grid
fn render_day_items(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let search_re = app.active_search_re();
    let mut lines: Vec<Line> = Vec::new();

    let header_label = match app.workspace {
        Workspace::Tasks => "tasks",
        Workspace::Notes => "notes",
    };
    let count = app.visible_len();
    lines.push(Line::from(Span::styled(
        format!(
            " {} \u{2014} {} {}",
            app.selected_date.format("%a %b %e"),
            count,
            header_label
        ),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));

    if count == 0 {
        lines.push(Line::from(Span::styled(
            "   nothing on this day",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    } else {
        let max_rows = (area.height as usize).saturating_sub(1);
        match app.workspace {
            Workspace::Tasks => {
                for task in app.visible_tasks().into_iter().take(max_rows) {
                    let mut spans = vec![Span::styled(
                        if task.completed { "   [x] " } else { "   [ ] " },
                        Style::default()
                            .fg(if task.completed {
                                app.theme.green
                            } else {
                                app.theme.dim
                            })
                            .bg(bg),
                    )];
                    push_highlighted_spans(
                        &mut spans,
                        &unicode::truncate_to_width(
                            &task.title,
                            (area.width as usize).saturating_sub(10),
                        ),
                        Style::default().fg(app.theme.text).bg(bg),
                        Style::default()
                            .fg(app.theme.search_match_fg)
                            .bg(app.theme.search_match_bg),
                        search_re.as_ref(),
                    );
                    lines.push(Line::from(spans));
                }
            }
            Workspace::Notes => {
                for note in app.visible_notes().into_iter().take(max_rows) {
                    let mut spans = vec![Span::styled(
                        "   \u{2022} ",
                        Style::default().fg(app.theme.purple).bg(bg),
                    )];
                    push_highlighted_spans(
                        &mut spans,
                        &unicode::truncate_to_width(
                            &note.title,
                            (area.width as usize).saturating_sub(10),
                        ),
                        Style::default().fg(app.theme.text).bg(bg),
                        Style::default()
                            .fg(app.theme.search_match_fg)
                            .bg(app.theme.search_match_bg),
                        search_re.as_ref(),
                    );
                    lines.push(Line::from(spans));
                }
            }
        }
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );
}

/// How many items in the active collection fall on `date` (unfiltered — the
/// grid badges always show the full picture)
fn items_on_date(app: &App, date: NaiveDate) -> usize {
    match app.workspace {
        Workspace::Tasks => items_on(app.tasks.list(), date, |t| t.deadline_date()).len(),
        Workspace::Notes => items_on(app.notes.list(), date, |n| Some(n.date)).len(),
    }
}

fn workspace_accent(app: &App) -> ratatui::style::Color {
    match app.workspace {
        Workspace::Tasks => app.theme.blue,
        Workspace::Notes => app.theme.purple,
    }
}

fn cell_width(area: Rect) -> usize {
    ((area.width / 7) as usize).max(4)
}
