use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::helpers::centered_rect;

const BINDINGS: &[(&str, &str)] = &[
    ("Tab", "switch tasks / notes"),
    ("c", "toggle list / calendar"),
    ("j k", "move selection"),
    ("h l", "move day (calendar)"),
    ("[ ]", "previous / next month"),
    ("t", "jump to today"),
    ("a", "add item"),
    ("e", "edit item"),
    ("d", "delete item"),
    ("Space", "toggle task done"),
    ("+ -", "adjust task progress"),
    ("f F", "cycle category filter"),
    ("/", "search"),
    ("Esc", "clear filters"),
    ("q", "quit"),
];

/// Render the keybinding help overlay
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let rect = centered_rect(44, (BINDINGS.len() + 4) as u16, area);

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.purple).bg(bg))
        .title(" Keys ")
        .title_style(
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(bg));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let mut lines: Vec<Line> = vec![Line::default()];
    for (key, action) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:>6}  ", key),
                Style::default().fg(app.theme.highlight).bg(bg),
            ),
            Span::styled(*action, Style::default().fg(app.theme.text).bg(bg)),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        inner,
    );
}
