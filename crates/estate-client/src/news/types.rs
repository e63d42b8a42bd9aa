//! News search input and output.

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Number of articles returned when no maximum is given.
pub const DEFAULT_MAX_ARTICLES: u32 = 5;

/// Largest accepted maximum.
pub const MAX_ARTICLES_LIMIT: u32 = 10;

fn default_max() -> u32 {
    DEFAULT_MAX_ARTICLES
}

/// One extracted news item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    /// Headline, with HTML entities decoded.
    pub title: String,
    /// Summary text, absent when the item has none.
    pub description: Option<String>,
    /// Link to the article.
    pub url: String,
    /// Publisher name, "Google News" when the item names none.
    pub source: String,
    /// Publication date as given by the feed.
    pub published_at: String,
}

/// News search parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct NewsQuery {
    /// Search query
    pub query: String,

    /// Maximum number of articles to return (1 to 10)
    #[cfg_attr(feature = "config", arg(long, default_value_t = DEFAULT_MAX_ARTICLES))]
    #[serde(default = "default_max")]
    #[validate(range(min = 1, max = 10, message = "max must be between 1 and 10"))]
    pub max: u32,
}

impl NewsQuery {
    /// Creates a query returning up to [`DEFAULT_MAX_ARTICLES`] articles.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max: DEFAULT_MAX_ARTICLES,
        }
    }

    /// Set the maximum number of articles.
    #[must_use]
    pub fn with_max(mut self, max: u32) -> Self {
        self.max = max;
        self
    }
}

/// Articles returned by a news search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsResponse {
    /// Articles in feed order.
    pub articles: Vec<NewsArticle>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_wire_names() {
        let article = NewsArticle {
            title: "t".into(),
            description: None,
            url: "u".into(),
            source: "s".into(),
            published_at: "p".into(),
        };
        let value = serde_json::to_value(&article).unwrap();
        assert_eq!(value["publishedAt"], "p");
        assert!(value["description"].is_null());
    }

    #[test]
    fn test_max_defaults_to_five() {
        let query: NewsQuery = serde_json::from_str(r#"{"query": "tokyo"}"#).unwrap();
        assert_eq!(query.max, DEFAULT_MAX_ARTICLES);
    }

    #[test]
    fn test_max_range() {
        assert!(NewsQuery::new("q").with_max(1).validate().is_ok());
        assert!(NewsQuery::new("q").with_max(MAX_ARTICLES_LIMIT).validate().is_ok());
        assert!(NewsQuery::new("q").with_max(0).validate().is_err());
        assert!(NewsQuery::new("q").with_max(11).validate().is_err());
    }
}
