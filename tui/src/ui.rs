//! Panel Rendering
//!
//! Lays the panel out the way a carpark sign reads: a bordered, titled
//! box with one line per field - label right-aligned against a center
//! gutter, value left-aligned after it - and a one-line feed status at
//! the bottom.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use carpark_core::{FeedState, PLACEHOLDER};

use crate::app::App;
use crate::theme;

/// Draw one full frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let block = Block::bordered()
        .title(Line::from(format!(" {} ", app.panel().title())).centered())
        .border_style(Style::default().fg(theme::TITLE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [rows_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    draw_rows(frame, app, rows_area);
    draw_status(frame, app, status_area);
}

/// One line per field, vertically centered in the panel.
fn draw_rows(frame: &mut Frame, app: &App, area: Rect) {
    let rows = app.panel().rows();
    if rows.is_empty() {
        return;
    }

    // Fill / row / gap / row / ... / row / fill
    let mut constraints = vec![Constraint::Fill(1)];
    for i in 0..rows.len() {
        if i > 0 {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Fill(1));
    let chunks = Layout::vertical(constraints).split(area);

    for (i, row) in rows.iter().enumerate() {
        let line_area = chunks[1 + 2 * i];
        let [label_area, _, value_area] = Layout::horizontal([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(line_area);

        let label = Paragraph::new(format!("{}:", row.name()))
            .style(Style::default().fg(theme::LABEL))
            .alignment(Alignment::Right);
        frame.render_widget(label, label_area);

        let value_style = if row.value() == PLACEHOLDER {
            Style::default().fg(theme::PLACEHOLDER_VALUE)
        } else {
            Style::default()
                .fg(theme::VALUE)
                .add_modifier(Modifier::BOLD)
        };
        let value = Paragraph::new(row.value()).style(value_style);
        frame.render_widget(value, value_area);
    }
}

/// Feed state plus update age on the left, quit hint on the right.
fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.feed_state();
    let state_color = match state {
        FeedState::Subscribed => theme::FEED_LIVE,
        FeedState::Connecting => theme::FEED_CONNECTING,
        FeedState::Disconnected => theme::FEED_OFFLINE,
    };

    let age = match app.seconds_since_update() {
        Some(0) => " | updated just now".to_string(),
        Some(s) => format!(" | updated {s}s ago"),
        None => " | no updates yet".to_string(),
    };

    let left = Line::from(vec![
        Span::styled(format!("feed: {state}"), Style::default().fg(state_color)),
        Span::styled(age, Style::default().fg(theme::STATUS_DIM)),
    ]);
    frame.render_widget(Paragraph::new(left), area);

    let right = Paragraph::new("q to quit")
        .style(Style::default().fg(theme::STATUS_DIM))
        .alignment(Alignment::Right);
    frame.render_widget(right, area);
}
