//! Sentiment counters and distribution chart

use super::super::state::DashboardState;
use super::super::utils::sentiment_color;
use crate::consts::cli_consts::display::EMPTY_CHART_MESSAGE;
use crate::models::SentimentStats;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Padding, Paragraph};

pub fn render_stats_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let stats = &state.view.stats;
    let block = Block::default()
        .title("SENTIMENT DISTRIBUTION")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Fill(1)])
        .split(inner);

    f.render_widget(Paragraph::new(counter_lines(stats)), chunks[0]);

    if stats.is_empty() {
        let placeholder = Paragraph::new(EMPTY_CHART_MESSAGE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(placeholder, chunks[1]);
        return;
    }

    let bars: Vec<Bar> = stats
        .bars()
        .iter()
        .map(|bar| {
            let color = sentiment_color(bar.sentiment);
            Bar::default()
                .label(Line::from(bar.sentiment.label()))
                .value(bar.value)
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(8)
        .bar_gap(2);
    f.render_widget(chart, chunks[1]);
}

/// One line per sentiment: label, count and share of the total.
pub fn counter_lines(stats: &SentimentStats) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = stats
        .bars()
        .iter()
        .map(|bar| {
            Line::from(vec![
                Span::styled(
                    format!("{:<9}", bar.sentiment.label()),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("{:>5}", bar.value),
                    Style::default()
                        .fg(sentiment_color(bar.sentiment))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" {:>5.1}%", bar.share * 100.0),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(format!("{:<9}", "Total"), Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{:>5}", stats.total()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_counter_lines() {
        let lines = counter_lines(&SentimentStats::new(2, 1, 0));
        let texts: Vec<String> = lines.iter().map(line_text).collect();

        assert_eq!(texts[0], "Positive     2  66.7%");
        assert_eq!(texts[1], "Negative     1  33.3%");
        assert_eq!(texts[2], "Neutral      0   0.0%");
        assert_eq!(texts[4], "Total        3");
    }
}
