//! Sentiment service data model
//!
//! Wire types returned by the sentiment service, plus the derived values the
//! renderers need (totals, shares, chart bars, sorted trend series).

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Categorical label for a text's emotional tone.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Display order used by counters and charts.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    /// Capitalized label, e.g. "Positive".
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

/// Aggregate sentiment counts. The service omits sentiments it has never
/// seen, so every count defaults to zero.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentStats {
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
}

/// One bar of the distribution chart.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ChartBar {
    pub sentiment: Sentiment,
    pub value: u64,
    /// Fraction of the total in [0, 1]; zero when there is no data.
    pub share: f64,
}

impl SentimentStats {
    pub fn new(positive: u64, negative: u64, neutral: u64) -> Self {
        Self {
            positive,
            negative,
            neutral,
        }
    }

    pub fn count(&self, sentiment: Sentiment) -> u64 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> u64 {
        self.positive + self.negative + self.neutral
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn share(&self, sentiment: Sentiment) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.count(sentiment) as f64 / total as f64,
        }
    }

    /// Bars in display order. Values always sum to `total()`.
    pub fn bars(&self) -> [ChartBar; 3] {
        Sentiment::ALL.map(|sentiment| ChartBar {
            sentiment,
            value: self.count(sentiment),
            share: self.share(sentiment),
        })
    }
}

/// One analyzed text submission as listed by the service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: Option<i64>,
    pub text: String,
    pub sentiment: Sentiment,
    pub polarity: f64,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl Post {
    /// Timestamp in the viewer's local time zone.
    pub fn local_timestamp(&self) -> String {
        format_local(&self.timestamp)
    }

    /// Badge text, e.g. "positive (0.625)".
    pub fn badge(&self) -> String {
        format!("{} ({})", self.sentiment, format_polarity(self.polarity))
    }
}

/// Result of analyzing one submitted text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisResult {
    pub text: String,
    pub sentiment: Sentiment,
    pub polarity: f64,
    /// When the service stored the analysis, if it said.
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl AnalysisResult {
    pub fn local_timestamp(&self) -> Option<String> {
        self.timestamp.as_ref().map(format_local)
    }
}

/// Body of an analyze request.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub text: &'a str,
}

/// Per-day bucket of sentiment counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    /// Day key as sent by the service, e.g. "2024-05-01".
    pub date: String,
    pub stats: SentimentStats,
}

impl TrendPoint {
    pub fn new(date: impl Into<String>, stats: SentimentStats) -> Self {
        Self {
            date: date.into(),
            stats,
        }
    }

    /// Orders a trend series by date key, ascending.
    pub fn sorted(mut points: Vec<TrendPoint>) -> Vec<TrendPoint> {
        points.sort_by(|a, b| a.date.cmp(&b.date));
        points
    }
}

/// Polarity with three decimals, the precision used everywhere on screen.
pub fn format_polarity(polarity: f64) -> String {
    format!("{:.3}", polarity)
}

/// Parses the timestamp formats the service emits: SQL `CURRENT_TIMESTAMP`
/// values (UTC, no zone) and ISO 8601 with or without an offset.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

fn format_local(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognized timestamp: {}", raw)))
}

fn deserialize_optional_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognized timestamp: {}", raw))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    #[test]
    // Missing sentiment keys should read as zero.
    fn test_stats_default_missing_counts() {
        let stats: SentimentStats = serde_json::from_value(json!({"positive": 4})).unwrap();
        assert_eq!(stats, SentimentStats::new(4, 0, 0));

        let stats: SentimentStats = serde_json::from_value(json!({})).unwrap();
        assert!(stats.is_empty());
    }

    #[test]
    // Chart bars should be proportional and sum to the total.
    fn test_bars_sum_to_total() {
        let stats = SentimentStats::new(2, 1, 0);
        let bars = stats.bars();

        assert_eq!(bars.iter().map(|bar| bar.value).sum::<u64>(), stats.total());
        assert_eq!(bars[0].sentiment, Sentiment::Positive);
        assert!((bars[0].share - 2.0 / 3.0).abs() < f64::EPSILON);
        assert!((bars[1].share - 1.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(bars[2].share, 0.0);
        assert!((bars.iter().map(|bar| bar.share).sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    // Shares of an empty distribution should be zero rather than NaN.
    fn test_empty_stats_have_zero_shares() {
        let stats = SentimentStats::default();
        assert!(stats.bars().iter().all(|bar| bar.share == 0.0));
    }

    #[test]
    fn test_parse_sql_timestamp() {
        let parsed = parse_timestamp("2024-05-01 13:45:10").unwrap();
        assert_eq!(parsed.year(), 2024);
        assert_eq!(parsed.hour(), 13);
        assert_eq!(parsed.second(), 10);
    }

    #[test]
    fn test_parse_iso_timestamps() {
        assert!(parse_timestamp("2024-05-01T13:45:10.123456").is_some());
        let with_offset = parse_timestamp("2024-05-01T13:45:10+02:00").unwrap();
        assert_eq!(with_offset.hour(), 11);
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_post_deserializes_service_row() {
        let post: Post = serde_json::from_value(json!({
            "id": 7,
            "text": "Great job on the presentation today!",
            "sentiment": "positive",
            "polarity": 0.8,
            "timestamp": "2024-05-01 09:00:00"
        }))
        .unwrap();

        assert_eq!(post.id, Some(7));
        assert_eq!(post.sentiment, Sentiment::Positive);
        assert_eq!(post.badge(), "positive (0.800)");
    }

    #[test]
    // The analyze response may or may not carry the stored timestamp.
    fn test_analysis_result_optional_timestamp() {
        let with: AnalysisResult = serde_json::from_value(json!({
            "text": "nice", "sentiment": "positive", "polarity": 0.6,
            "timestamp": "2024-05-01T10:00:00.000001"
        }))
        .unwrap();
        let stored = with.timestamp.unwrap();
        assert_eq!((stored.hour(), stored.minute()), (10, 0));
        assert!(with.local_timestamp().is_some());

        let without: AnalysisResult = serde_json::from_value(json!({
            "text": "nice", "sentiment": "positive", "polarity": 0.6
        }))
        .unwrap();
        assert_eq!(without.timestamp, None);
        assert_eq!(without.local_timestamp(), None);

        let null: AnalysisResult = serde_json::from_value(json!({
            "text": "nice", "sentiment": "positive", "polarity": 0.6, "timestamp": null
        }))
        .unwrap();
        assert_eq!(null.timestamp, None);
    }

    #[test]
    fn test_post_rejects_unknown_sentiment() {
        let result = serde_json::from_value::<Post>(json!({
            "text": "?",
            "sentiment": "confused",
            "polarity": 0.0,
            "timestamp": "2024-05-01 09:00:00"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_trends_sort_ascending() {
        let points = vec![
            TrendPoint::new("2024-05-03", SentimentStats::new(1, 0, 0)),
            TrendPoint::new("2024-05-01", SentimentStats::new(0, 1, 0)),
            TrendPoint::new("2024-05-02", SentimentStats::new(0, 0, 1)),
        ];
        let dates: Vec<String> = TrendPoint::sorted(points)
            .into_iter()
            .map(|point| point.date)
            .collect();
        assert_eq!(dates, ["2024-05-01", "2024-05-02", "2024-05-03"]);
    }

    #[test]
    fn test_sentiment_labels() {
        assert_eq!(Sentiment::Negative.to_string(), "negative");
        assert_eq!(Sentiment::Negative.label(), "Negative");
        assert_eq!(format_polarity(-0.25), "-0.250");
    }
}
