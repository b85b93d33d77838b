//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Worker;
use crate::models::Sentiment;
use chrono::NaiveDateTime;
use ratatui::prelude::Color;

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::Poller => Color::Cyan,
        Worker::Submitter => Color::Green,
        Worker::Seeder => Color::Yellow,
    }
}

pub fn sentiment_color(sentiment: Sentiment) -> Color {
    match sentiment {
        Sentiment::Positive => Color::Green,
        Sentiment::Negative => Color::Red,
        Sentiment::Neutral => Color::Gray,
    }
}

/// Shortens "YYYY-MM-DD HH:MM:SS" to "MM-DD HH:MM".
pub fn format_compact_timestamp(timestamp: &str) -> String {
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S")
        .map(|parsed| parsed.format("%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

/// Replaces verbose transport errors with something that fits on one line.
pub fn clean_http_error_message(msg: &str) -> String {
    if !msg.contains("Reqwest error") {
        return msg.to_string();
    }
    let prefix = msg.split("Reqwest error").next().unwrap_or_default();
    let lower = msg.to_lowercase();
    let summary = if lower.contains("timed out") || lower.contains("timeout") {
        "request timed out"
    } else if lower.contains("connect") {
        "service unreachable"
    } else {
        "network error"
    };
    format!("{}{}", prefix, summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(format_compact_timestamp("2024-05-01 13:45:09"), "05-01 13:45");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_clean_http_error_message() {
        assert_eq!(
            clean_http_error_message(
                "Failed to fetch stats: Reqwest error: error sending request for url (http://localhost:5000/api/stats): client error (Connect)"
            ),
            "Failed to fetch stats: service unreachable"
        );
        assert_eq!(
            clean_http_error_message("Failed to fetch posts: Reqwest error: operation timed out"),
            "Failed to fetch posts: request timed out"
        );
        let http = "Failed to fetch trends: HTTP error with status 503: unavailable";
        assert_eq!(clean_http_error_message(http), http);
    }
}
