//! Dashboard header component
//!
//! Renders the title and refresh gauge

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and refresh countdown.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let title_text = format!(
        "SENTIMENT DASHBOARD v{} - {}",
        env!("CARGO_PKG_VERSION"),
        state.environment.api_url()
    );
    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let (progress_text, gauge_color, progress_percent) = gauge_status(state);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}

/// Analysis in flight takes priority over the refresh countdown.
fn gauge_status(state: &DashboardState) -> (String, Color, u16) {
    if state.view.is_submitting() {
        // Loops every 20 ticks
        let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
        return (
            "ANALYZING - Waiting for the service".to_string(),
            Color::LightGreen,
            progress,
        );
    }

    match state.next_refresh_in() {
        Some(remaining) => {
            let progress = (state.refresh_progress() * 100.0) as u16;
            let remaining_secs = remaining.as_secs_f64().ceil() as u64;
            let text = if remaining_secs > 0 {
                format!("LIVE - Next refresh in {}s", remaining_secs)
            } else {
                "LIVE - Refreshing".to_string()
            };
            (text, Color::LightBlue, progress.min(100))
        }
        None => ("CONNECTING - Loading dashboard".to_string(), Color::Yellow, 0),
    }
}
