//! Analyze box and transient result

use super::super::state::DashboardState;
use super::super::utils::sentiment_color;
use crate::models::{AnalysisResult, format_polarity};
use crate::view::sanitize_terminal_text;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

pub fn render_input_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let submitting = state.view.is_submitting();
    let (title, border_color) = if submitting {
        ("ANALYZING...", Color::DarkGray)
    } else {
        ("ANALYZE TEXT [Enter]", Color::Cyan)
    };
    // Blinking cursor while idle
    let cursor = if !submitting && state.tick % 10 < 5 { "_" } else { " " };

    let input = Paragraph::new(Line::from(vec![
        Span::raw("> "),
        Span::styled(state.input.clone(), Style::default().fg(Color::White)),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]))
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color)),
    );
    f.render_widget(input, chunks[0]);

    let block = Block::default()
        .title("ANALYSIS RESULT")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let body = match &state.view.result {
        Some(visible) => Paragraph::new(result_lines(&visible.result)),
        None => Paragraph::new(Line::from(Span::styled(
            "Submit text to see its sentiment",
            Style::default().fg(Color::DarkGray),
        ))),
    };
    f.render_widget(body.wrap(Wrap { trim: true }).block(block), chunks[1]);
}

pub fn result_lines(result: &AnalysisResult) -> Vec<Line<'static>> {
    let color = sentiment_color(result.sentiment);
    vec![
        Line::from(vec![
            Span::styled("Sentiment: ", Style::default().fg(Color::Gray)),
            Span::styled(
                result.sentiment.label(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Polarity Score: ", Style::default().fg(Color::Gray)),
            Span::styled(format_polarity(result.polarity), Style::default().fg(color)),
        ]),
        Line::from(vec![
            Span::styled("Text: ", Style::default().fg(Color::Gray)),
            Span::raw(format!("\"{}\"", sanitize_terminal_text(&result.text))),
        ]),
    ]
}
