//! Dashboard main renderer

use super::components::{feed, footer, header, input, logs, notice, stats, trends};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Fill(1),
            Constraint::Percentage(40),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    input::render_input_panel(f, main_chunks[1], state);

    let chart_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(main_chunks[2]);
    stats::render_stats_panel(f, chart_chunks[0], state);
    trends::render_trends_panel(f, chart_chunks[1], state);

    let feed_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_chunks[3]);
    feed::render_feed_panel(f, feed_chunks[0], state);
    logs::render_logs_panel(f, feed_chunks[1], state);

    footer::render_footer(f, main_chunks[4]);
    notice::render_notice(f, state);
}
