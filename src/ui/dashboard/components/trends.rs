//! Per-day trend chart

use super::super::state::DashboardState;
use super::super::utils::sentiment_color;
use crate::consts::cli_consts::display::EMPTY_TRENDS_MESSAGE;
use crate::models::{Sentiment, TrendPoint};
use crate::view::sanitize_terminal_text;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph};

pub fn render_trends_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title("SENTIMENT TRENDS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let trends = &state.view.trends;
    if trends.is_empty() {
        let placeholder = Paragraph::new(EMPTY_TRENDS_MESSAGE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let series: Vec<(Sentiment, Vec<(f64, f64)>)> = Sentiment::ALL
        .iter()
        .map(|sentiment| (*sentiment, trend_series(trends, *sentiment)))
        .collect();

    let datasets: Vec<Dataset> = series
        .iter()
        .map(|(sentiment, points)| {
            Dataset::default()
                .name(sentiment.label())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(sentiment_color(*sentiment)))
                .data(points)
        })
        .collect();

    let max_x = (trends.len().saturating_sub(1)).max(1) as f64;
    let max_y = max_count(trends).max(1) as f64;
    let x_labels = date_labels(trends);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, max_x])
                .labels(x_labels.into_iter().map(Span::raw).collect::<Vec<_>>()),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, max_y])
                .labels(vec![Span::raw("0"), Span::raw(format!("{}", max_y as u64))]),
        );
    f.render_widget(chart, area);
}

/// (day index, count) pairs for one sentiment, in date order.
pub fn trend_series(trends: &[TrendPoint], sentiment: Sentiment) -> Vec<(f64, f64)> {
    trends
        .iter()
        .enumerate()
        .map(|(index, point)| (index as f64, point.stats.count(sentiment) as f64))
        .collect()
}

fn max_count(trends: &[TrendPoint]) -> u64 {
    trends
        .iter()
        .flat_map(|point| Sentiment::ALL.map(|sentiment| point.stats.count(sentiment)))
        .max()
        .unwrap_or(0)
}

/// First and last day, or just the one day.
fn date_labels(trends: &[TrendPoint]) -> Vec<String> {
    match (trends.first(), trends.last()) {
        (Some(first), Some(last)) if trends.len() > 1 => {
            vec![
                sanitize_terminal_text(&first.date),
                sanitize_terminal_text(&last.date),
            ]
        }
        (Some(only), _) => vec![sanitize_terminal_text(&only.date)],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SentimentStats;

    fn trends() -> Vec<TrendPoint> {
        vec![
            TrendPoint::new("2024-05-01", SentimentStats::new(1, 4, 0)),
            TrendPoint::new("2024-05-02", SentimentStats::new(3, 0, 2)),
        ]
    }

    #[test]
    fn test_trend_series_follows_date_order() {
        assert_eq!(
            trend_series(&trends(), Sentiment::Positive),
            vec![(0.0, 1.0), (1.0, 3.0)]
        );
        assert_eq!(
            trend_series(&trends(), Sentiment::Negative),
            vec![(0.0, 4.0), (1.0, 0.0)]
        );
    }

    #[test]
    fn test_axis_helpers() {
        assert_eq!(max_count(&trends()), 4);
        assert_eq!(date_labels(&trends()), ["2024-05-01", "2024-05-02"]);
        assert_eq!(date_labels(&trends()[..1]), ["2024-05-01"]);
        assert!(date_labels(&[]).is_empty());
    }
}
