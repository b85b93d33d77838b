//! Blocking notice popup

use super::super::state::DashboardState;
use crate::view::{NoticeKind, sanitize_terminal_text};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

/// Draws the current notice over the dashboard, if there is one.
pub fn render_notice(f: &mut Frame, state: &DashboardState) {
    let Some(notice) = &state.view.notice else {
        return;
    };

    let (title, color) = match notice.kind {
        NoticeKind::Warning => ("WARNING", Color::Yellow),
        NoticeKind::Error => ("ERROR", Color::Red),
    };

    let area = centered(f.area(), 60, 7);
    let popup = Paragraph::new(vec![
        Line::from(sanitize_terminal_text(&notice.message)),
        Line::from(""),
        Line::styled("[Enter] Dismiss", Style::default().fg(Color::DarkGray)),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
    );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    popup
}
