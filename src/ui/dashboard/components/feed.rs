//! Live feed of recent posts

use super::super::state::DashboardState;
use super::super::utils::sentiment_color;
use crate::consts::cli_consts::display::EMPTY_FEED_MESSAGE;
use crate::view::{DashboardView, sanitize_terminal_text};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_feed_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title("LIVE FEED")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let feed = Paragraph::new(feed_lines(&state.view))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(feed, area);
}

/// Two lines per post (meta, then text). A single placeholder line when the
/// feed is empty.
pub fn feed_lines(view: &DashboardView) -> Vec<Line<'static>> {
    if !view.feed_loaded {
        return vec![Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::DarkGray),
        ))];
    }
    if view.feed.is_empty() {
        return vec![Line::from(Span::styled(
            EMPTY_FEED_MESSAGE,
            Style::default().fg(Color::DarkGray),
        ))];
    }

    view.feed
        .iter()
        .flat_map(|post| {
            [
                Line::from(vec![
                    Span::styled(
                        format!("{} ", post.local_timestamp()),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        post.badge(),
                        Style::default().fg(sentiment_color(post.sentiment)),
                    ),
                ]),
                Line::from(sanitize_terminal_text(&post.text)),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ViewUpdate;
    use crate::view::testing::post;

    #[test]
    fn test_empty_feed_single_placeholder() {
        let mut view = DashboardView::default();
        view.apply(ViewUpdate::Posts(Vec::new()));

        let lines = feed_lines(&view);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].content, EMPTY_FEED_MESSAGE);
    }

    #[test]
    fn test_feed_shows_first_ten_posts() {
        let mut view = DashboardView::default();
        view.apply(ViewUpdate::Posts(
            (0..13).map(|i| post(&format!("post {i}"))).collect(),
        ));

        let lines = feed_lines(&view);
        assert_eq!(lines.len(), 20);
        assert_eq!(lines[1].spans[0].content, "post 0");
        assert_eq!(lines[19].spans[0].content, "post 9");
    }

    #[test]
    fn test_post_text_loses_control_characters() {
        let mut view = DashboardView::default();
        view.apply(ViewUpdate::Posts(vec![post("bad\x1b[2Jnews\x07")]));

        let lines = feed_lines(&view);
        assert_eq!(lines[1].spans[0].content, "bad [2Jnews ");
    }
}
