use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::{Category, Task};
use crate::ops::stats::task_stats;
use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::{progress_bar, spans_width};
use super::push_highlighted_spans;

/// Rows each task occupies in the list (main line, progress line, blank)
const ROWS_PER_TASK: usize = 3;

/// Render the task workspace list pane: stats, category sidebar, task rows
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
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
    let stats = task_stats(app.tasks.list(), Local::now().naive_local());
    let bg = app.theme.background;

    let spans = vec![
        Span::styled(
            format!(" \u{25A3} {} total", stats.total),
            Style::default().fg(app.theme.blue).bg(bg),
        ),
        Span::styled("   ", Style::default().bg(bg)),
        Span::styled(
            format!("\u{2713} {} completed", stats.completed),
            Style::default().fg(app.theme.green).bg(bg),
        ),
        Span::styled("   ", Style::default().bg(bg)),
        Span::styled(
            format!("\u{25D0} {} in progress", stats.in_progress),
            Style::default().fg(app.theme.yellow).bg(bg),
        ),
        Span::styled("   ", Style::default().bg(bg)),
        Span::styled(
            format!("! {} overdue", stats.overdue),
            Style::default().fg(app.theme.red).bg(bg),
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
        "All Tasks",
        app.tasks.len(),
        app.theme.text,
        app.task_category.is_none(),
        app,
        width,
    ));

    for category in Category::ALL {
        let count = app
            .tasks
            .list()
            .iter()
            .filter(|t| t.category == category)
            .count();
        lines.push(sidebar_row(
            category.label(),
            count,
            app.theme.category_color(category),
            app.task_category == Some(category),
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
    label: &'a str,
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
        Span::styled(unicode::truncate_to_width(label, width.saturating_sub(8)), label_style),
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
        let message = if app.tasks.is_empty() {
            " No tasks yet — press a to create one"
        } else {
            " No tasks match the current filter"
        };
        let empty =
            Paragraph::new(message).style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    // Keep the cursor row on screen (mutate before borrowing the task list)
    let items_on_screen = (area.height as usize / ROWS_PER_TASK).max(1);
    if app.task_cursor < app.task_scroll {
        app.task_scroll = app.task_cursor;
    }
    if app.task_cursor >= app.task_scroll + items_on_screen {
        app.task_scroll = app.task_cursor + 1 - items_on_screen;
    }

    let search_re = app.active_search_re();
    let now = Local::now().naive_local();
    let visible = app.visible_tasks();
    let mut lines: Vec<Line> = Vec::new();

    for (i, task) in visible
        .iter()
        .enumerate()
        .skip(app.task_scroll)
        .take(items_on_screen)
    {
        let is_cursor = i == app.task_cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

        // Main line: checkbox, title, priority, deadline, estimate
        let mut spans: Vec<Span> = Vec::new();
        let checkbox = if task.completed { " [x] " } else { " [ ] " };
        let checkbox_color = if task.completed {
            app.theme.green
        } else {
            app.theme.dim
        };
        spans.push(Span::styled(
            checkbox,
            Style::default().fg(checkbox_color).bg(row_bg),
        ));

        let mut title_style = Style::default().fg(app.theme.text_bright).bg(row_bg);
        if task.completed {
            title_style = title_style
                .fg(app.theme.dim)
                .add_modifier(Modifier::CROSSED_OUT);
        }
        if is_cursor {
            title_style = title_style.add_modifier(Modifier::BOLD);
        }
        push_highlighted_spans(
            &mut spans,
            &task.title,
            title_style,
            Style::default()
                .fg(app.theme.search_match_fg)
                .bg(app.theme.search_match_bg),
            search_re.as_ref(),
        );

        spans.push(Span::styled(
            format!("  {}", task.priority.label()),
            Style::default()
                .fg(app.theme.priority_color(task.priority))
                .bg(row_bg),
        ));

        if let Some(deadline) = task.deadline {
            let overdue = task.is_overdue(now);
            let color = if overdue { app.theme.red } else { app.theme.dim };
            spans.push(Span::styled(
                format!("  \u{23F1} {}", deadline.format("%b %e %H:%M")),
                Style::default().fg(color).bg(row_bg),
            ));
        }

        spans.push(Span::styled(
            format!("  ~{}h", task.estimated_hours),
            Style::default().fg(app.theme.dim).bg(row_bg),
        ));

        pad_line(&mut spans, area.width as usize, row_bg);
        lines.push(Line::from(spans));

        // Progress line: bar, percent, category chip
        lines.push(progress_line(app, task, row_bg, area.width as usize));

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

fn progress_line<'a>(
    app: &App,
    task: &Task,
    row_bg: ratatui::style::Color,
    width: usize,
) -> Line<'a> {
    let category_color = app.theme.category_color(task.category);
    let mut spans = vec![
        Span::styled("     ", Style::default().bg(row_bg)),
        Span::styled(
            progress_bar(task.progress, 20),
            Style::default().fg(category_color).bg(row_bg),
        ),
        Span::styled(
            format!(" {:>3}%", task.progress),
            Style::default().fg(app.theme.text).bg(row_bg),
        ),
        Span::styled(
            format!("  \u{25CF} {}", task.category.label()),
            Style::default().fg(category_color).bg(row_bg),
        ),
    ];
    pad_line(&mut spans, width, row_bg);
    Line::from(spans)
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
