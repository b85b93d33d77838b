//! Static HTML snapshot of the dashboard.
//!
//! Markup follows the web dashboard's element ids and classes so the export
//! can be styled with the same stylesheet. Every piece of service-provided
//! text goes through [`escape_html`].

use super::{DashboardView, RenderSink, ViewUpdate};
use crate::consts::cli_consts::display::{EMPTY_CHART_MESSAGE, EMPTY_FEED_MESSAGE, EMPTY_TRENDS_MESSAGE};
use crate::models::{Post, TrendPoint, format_polarity};
use std::path::Path;
use std::sync::Mutex;

/// Escapes text for use in element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Collects updates and renders them as a standalone HTML page.
#[derive(Default)]
pub struct HtmlSnapshot {
    view: Mutex<DashboardView>,
}

impl HtmlSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> DashboardView {
        match self.view.lock() {
            Ok(view) => view.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn to_html(&self) -> String {
        render_html(&self.view())
    }

    pub fn write_to(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.to_html())
    }
}

#[async_trait::async_trait]
impl RenderSink for HtmlSnapshot {
    async fn render(&self, update: ViewUpdate) {
        match self.view.lock() {
            Ok(mut view) => {
                view.apply(update);
            }
            Err(poisoned) => {
                poisoned.into_inner().apply(update);
            }
        }
    }
}

pub fn render_html(view: &DashboardView) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Sentiment Dashboard</title>\n</head>\n<body>\n<h1>Sentiment Dashboard</h1>\n",
    );
    html.push_str(&render_counters(view));
    html.push_str(&render_distribution(view));
    html.push_str(&render_trends(&view.trends));
    html.push_str(&render_result(view));
    html.push_str(&render_feed(&view.feed));
    html.push_str("</body>\n</html>\n");
    html
}

fn render_counters(view: &DashboardView) -> String {
    let mut html = String::from("<section class=\"counters\">\n");
    for bar in view.stats.bars() {
        html.push_str(&format!(
            "<div class=\"counter {sentiment}\"><span class=\"label\">{label}</span> \
             <span id=\"{sentiment}Count\">{value}</span></div>\n",
            sentiment = bar.sentiment,
            label = bar.sentiment.label(),
            value = bar.value,
        ));
    }
    html.push_str("</section>\n");
    html
}

fn render_distribution(view: &DashboardView) -> String {
    let mut html = String::from("<section id=\"sentimentChart\" class=\"chart\">\n");
    if view.stats.is_empty() {
        html.push_str(&format!("<div class=\"loading\">{}</div>\n", EMPTY_CHART_MESSAGE));
    } else {
        for bar in view.stats.bars() {
            html.push_str(&format!(
                "<div class=\"bar {}\" style=\"width: {:.1}%\" data-value=\"{}\"></div>\n",
                bar.sentiment,
                bar.share * 100.0,
                bar.value
            ));
        }
    }
    html.push_str("</section>\n");
    html
}

fn render_trends(trends: &[TrendPoint]) -> String {
    let mut html = String::from("<section id=\"trendsChart\" class=\"chart\">\n");
    if trends.is_empty() {
        html.push_str(&format!("<div class=\"loading\">{}</div>\n", EMPTY_TRENDS_MESSAGE));
    } else {
        html.push_str(
            "<table>\n<tr><th>Date</th><th>Positive</th><th>Negative</th><th>Neutral</th></tr>\n",
        );
        for point in trends {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(&point.date),
                point.stats.positive,
                point.stats.negative,
                point.stats.neutral
            ));
        }
        html.push_str("</table>\n");
    }
    html.push_str("</section>\n");
    html
}

fn render_result(view: &DashboardView) -> String {
    let Some(visible) = &view.result else {
        return "<div id=\"analysisResult\" class=\"result-box\" style=\"display: none\"></div>\n"
            .to_string();
    };
    let result = &visible.result;
    let analyzed_at = result
        .local_timestamp()
        .map(|at| format!("<p class=\"timestamp\">Analyzed at {}</p>\n", at))
        .unwrap_or_default();
    format!(
        "<div id=\"analysisResult\" class=\"result-box {}\">\n<h3>Analysis Result</h3>\n\
         <p><strong>Sentiment:</strong> {}</p>\n<p><strong>Polarity Score:</strong> {}</p>\n\
         <p><strong>Text:</strong> \"{}\"</p>\n{}</div>\n",
        result.sentiment,
        result.sentiment.label(),
        format_polarity(result.polarity),
        escape_html(&result.text),
        analyzed_at
    )
}

fn render_feed(feed: &[Post]) -> String {
    let mut html = String::from("<section id=\"liveFeed\">\n");
    if feed.is_empty() {
        html.push_str(&format!("<div class=\"loading\">{}</div>\n", EMPTY_FEED_MESSAGE));
    }
    for post in feed {
        html.push_str(&format!(
            "<div class=\"post-item {sentiment}\">\n<div class=\"post-content\">{text}</div>\n\
             <div class=\"post-meta\"><span class=\"timestamp\">{timestamp}</span> \
             <span class=\"sentiment-badge {sentiment}\">{badge}</span></div>\n</div>\n",
            sentiment = post.sentiment,
            text = escape_html(&post.text),
            timestamp = post.local_timestamp(),
            badge = escape_html(&post.badge()),
        ));
    }
    html.push_str("</section>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Sentiment, SentimentStats};
    use crate::view::testing::{post, result};

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>alert(\"x\") & 'y'</script>"),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[tokio::test]
    async fn test_counters_and_bars() {
        let sink = HtmlSnapshot::new();
        sink.render(ViewUpdate::Stats(SentimentStats::new(2, 1, 0)))
            .await;
        let html = sink.to_html();

        assert!(html.contains("<span id=\"positiveCount\">2</span>"));
        assert!(html.contains("<span id=\"negativeCount\">1</span>"));
        assert!(html.contains("<span id=\"neutralCount\">0</span>"));
        assert!(html.contains("style=\"width: 66.7%\" data-value=\"2\""));
        assert!(html.contains("style=\"width: 33.3%\" data-value=\"1\""));
        assert!(!html.contains(EMPTY_CHART_MESSAGE));
    }

    #[tokio::test]
    // Post text must show up literally, never as markup.
    async fn test_post_text_is_escaped() {
        let sink = HtmlSnapshot::new();
        sink.render(ViewUpdate::Posts(vec![post("<script>alert(1)</script>")]))
            .await;
        let html = sink.to_html();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[tokio::test]
    async fn test_result_text_is_escaped() {
        let sink = HtmlSnapshot::new();
        sink.render(ViewUpdate::ResultShown {
            seq: 1,
            result: result("<b>bold</b>", Sentiment::Negative),
        })
        .await;
        let html = sink.to_html();

        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(html.contains("<strong>Sentiment:</strong> Negative"));
        assert!(html.contains("<strong>Polarity Score:</strong> -0.500"));
        assert!(!html.contains("Analyzed at"));
    }

    #[tokio::test]
    async fn test_result_shows_analysis_time() {
        let sink = HtmlSnapshot::new();
        let mut analyzed = result("fine", Sentiment::Neutral);
        analyzed.timestamp = crate::models::parse_timestamp("2024-05-01 12:00:00");
        sink.render(ViewUpdate::ResultShown {
            seq: 1,
            result: analyzed,
        })
        .await;

        assert!(sink.to_html().contains("<p class=\"timestamp\">Analyzed at "));
    }

    #[test]
    fn test_empty_feed_has_single_placeholder() {
        let html = render_html(&DashboardView::default());
        let feed = html.split("<section id=\"liveFeed\">").nth(1).unwrap();

        assert_eq!(feed.matches("class=\"loading\"").count(), 1);
        assert!(feed.contains(EMPTY_FEED_MESSAGE));
        assert!(!feed.contains("post-item"));
    }

    #[test]
    fn test_feed_renders_at_most_ten_posts() {
        let mut view = DashboardView::default();
        view.apply(ViewUpdate::Posts(
            (0..12).map(|i| post(&format!("p{i}"))).collect(),
        ));
        let html = render_html(&view);

        assert_eq!(html.matches("class=\"post-item").count(), 10);
        assert!(html.contains(">p9</div>"));
        assert!(!html.contains(">p10</div>"));
    }

    #[test]
    fn test_hidden_result_box() {
        let html = render_html(&DashboardView::default());
        assert!(html.contains("id=\"analysisResult\" class=\"result-box\" style=\"display: none\""));
    }
}
