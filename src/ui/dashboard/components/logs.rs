//! Dashboard logs panel component
//!
//! Renders activity logs with event formatting

use super::super::state::DashboardState;
use super::super::utils::{clean_http_error_message, format_compact_timestamp, get_worker_color};
use crate::events::{Event as WorkerEvent, EventType};
use crate::logging::LogLevel;
use crate::view::sanitize_terminal_text;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render logs panel, newest first.
pub fn render_logs_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    // Borders plus padding take three rows
    let log_count = (area.height.saturating_sub(3) as usize).max(1);

    let log_lines: Vec<Line> = state
        .activity_logs
        .iter()
        .filter(|event| event.should_display())
        .rev()
        .take(log_count)
        .map(log_line)
        .collect();

    let log_paragraph = if log_lines.is_empty() {
        Paragraph::new(vec![Line::from("Waiting for the first refresh...")])
    } else {
        Paragraph::new(log_lines)
    };

    let logs_block = Block::default()
        .title("ACTIVITY LOG")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(log_paragraph.block(logs_block).wrap(Wrap { trim: true }), area);
}

fn log_line(event: &WorkerEvent) -> Line<'static> {
    let status_icon = match (event.event_type, event.log_level) {
        (EventType::Success, _) => "✅",
        (EventType::Error, LogLevel::Error) => "❌",
        (EventType::Error, _) => "⚠️",
        (EventType::Refresh, _) => "🔄",
        (EventType::Waiting, _) => "⏳",
    };

    Line::from(vec![
        Span::raw(format!("{} ", status_icon)),
        Span::styled(
            format!("{} ", format_compact_timestamp(&event.timestamp)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            sanitize_terminal_text(&clean_http_error_message(&event.msg)),
            Style::default().fg(get_worker_color(&event.worker)),
        ),
    ])
}
