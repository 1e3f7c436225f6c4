//! Data model for a single scrape run.
//!
//! Every invocation of the scraper produces exactly one [`ScrapeResult`].
//! The record is assembled once, never mutated afterwards, and carries no
//! state between runs.
//!
//! # Nullability
//!
//! Each content field is independently optional: a layout change on one
//! source degrades that field to `None` without affecting the others. The
//! one exception is the news pair — `news_title` and `news_paragraph` come
//! from the same listing entry and are always both present or both absent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The assembled output of one scrape run.
///
/// Consumers must treat every content field as optionally absent: a record
/// with `None` fields is shape-identical to a fully populated one. Only
/// `last_modified` is always present.
#[derive(Debug, Deserialize, Serialize)]
pub struct ScrapeResult {
    /// Headline of the most recent story on the news listing.
    pub news_title: Option<String>,
    /// Teaser paragraph accompanying that headline.
    pub news_paragraph: Option<String>,
    /// Absolute URL of the gallery's full-resolution featured image.
    pub featured_image: Option<String>,
    /// Mars/Earth comparison table, serialized as an HTML fragment.
    pub facts: Option<String>,
    /// When this record was assembled.
    pub last_modified: DateTime<Utc>,
}

impl fmt::Display for ScrapeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "news_title:     {}", dump(&self.news_title))?;
        writeln!(f, "news_paragraph: {}", dump(&self.news_paragraph))?;
        writeln!(f, "featured_image: {}", dump(&self.featured_image))?;
        writeln!(f, "facts:          {}", dump(&self.facts))?;
        writeln!(f, "last_modified:  {}", self.last_modified.to_rfc3339())
    }
}

fn dump(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("(none)")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScrapeResult {
        ScrapeResult {
            news_title: Some("NASA's Perseverance Rover...".to_string()),
            news_paragraph: Some("Sensors on NASA's...".to_string()),
            featured_image: Some(
                "https://spaceimages-mars.com/image/featured/mars2.jpg".to_string(),
            ),
            facts: Some("<table border=\"1\" class=\"table table-striped\"></table>".to_string()),
            last_modified: Utc::now(),
        }
    }

    #[test]
    fn test_serialization_round_trip() {
        let result = sample();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("NASA's Perseverance Rover..."));
        assert!(json.contains("last_modified"));

        let back: ScrapeResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.news_title, result.news_title);
        assert_eq!(back.last_modified, result.last_modified);
    }

    #[test]
    fn test_degraded_record_same_shape() {
        let degraded = ScrapeResult {
            news_title: None,
            news_paragraph: None,
            featured_image: None,
            facts: None,
            last_modified: Utc::now(),
        };

        let json = serde_json::to_string(&degraded).unwrap();
        // All five fields serialize even when empty.
        for field in [
            "news_title",
            "news_paragraph",
            "featured_image",
            "facts",
            "last_modified",
        ] {
            assert!(json.contains(field), "missing field {field}");
        }
    }

    #[test]
    fn test_display_dumps_every_field() {
        let text = sample().to_string();
        assert!(text.contains("news_title:     NASA's Perseverance Rover..."));
        assert!(text.contains("news_paragraph: Sensors on NASA's..."));
        assert!(text.contains("featured_image: https://spaceimages-mars.com/"));
        assert!(text.contains("last_modified:  "));
    }

    #[test]
    fn test_display_marks_absent_fields() {
        let degraded = ScrapeResult {
            news_title: None,
            news_paragraph: None,
            featured_image: None,
            facts: None,
            last_modified: Utc::now(),
        };

        let text = degraded.to_string();
        assert_eq!(text.matches("(none)").count(), 4);
    }

    #[test]
    fn test_timestamps_non_decreasing_across_sequential_records() {
        let first = ScrapeResult {
            news_title: None,
            news_paragraph: None,
            featured_image: None,
            facts: None,
            last_modified: Utc::now(),
        };
        let second = ScrapeResult {
            news_title: None,
            news_paragraph: None,
            featured_image: None,
            facts: None,
            last_modified: Utc::now(),
        };

        assert!(first.last_modified <= second.last_modified);
    }
}
