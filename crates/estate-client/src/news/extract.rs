//! Article extraction from RSS feed text.
//!
//! This is pattern matching, not XML parsing: each `<item>` block is located
//! independently and each field is captured on its own. A field that is
//! missing, empty, or spans lines falls back to its default.

use std::sync::LazyLock;

use regex::Regex;

use super::NewsArticle;

/// Source name used when an item carries no `<source>` element.
pub const DEFAULT_SOURCE: &str = "Google News";

static ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<item>(.*?)</item>").expect("valid regex"));
static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<title>(.*?)</title>").expect("valid regex"));
static DESCRIPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<description>(.*?)</description>").expect("valid regex"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<link>(.*?)</link>").expect("valid regex"));
static SOURCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<source.*?>(.*?)</source>").expect("valid regex"));
static PUB_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<pubDate>(.*?)</pubDate>").expect("valid regex"));

/// Returns the first capture of `pattern` in `text`, or `None` when absent or empty.
fn capture<'a>(pattern: &Regex, text: &'a str) -> Option<&'a str> {
    pattern
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|found| found.as_str())
        .filter(|value| !value.is_empty())
}

/// Decodes the five predefined XML entities.
///
/// `&amp;` is replaced last, so `&amp;lt;` becomes `&lt;` rather than `<`.
pub fn decode_entities(text: &str) -> String {
    text.replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

fn extract_article(item: &str) -> NewsArticle {
    NewsArticle {
        title: capture(&TITLE, item).map(decode_entities).unwrap_or_default(),
        description: capture(&DESCRIPTION, item).map(decode_entities),
        url: capture(&LINK, item).unwrap_or_default().to_owned(),
        source: capture(&SOURCE, item).unwrap_or(DEFAULT_SOURCE).to_owned(),
        published_at: capture(&PUB_DATE, item).unwrap_or_default().to_owned(),
    }
}

/// Extracts up to `max` articles from `feed`, in feed order.
///
/// Never fails; malformed input yields fewer articles or default fields.
pub fn extract_articles(feed: &str, max: usize) -> Vec<NewsArticle> {
    ITEM.captures_iter(feed)
        .filter_map(|captures| captures.get(1))
        .take(max)
        .map(|item| extract_article(item.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"
      <rss version="2.0">
        <channel>
          <title>Feed title</title>
          <item>
            <title>Test Title &quot;quoted&quot;</title>
            <description>Test Description &amp; more</description>
            <link>http://example.com/1</link>
            <source url="http://source.com">Test Source</source>
            <pubDate>Wed, 06 Mar 2024 12:00:00 GMT</pubDate>
          </item>
          <item>
            <title>Second Title</title>
            <description>Second Description</description>
            <link>http://example.com/2</link>
            <source url="http://source2.com">Test Source 2</source>
            <pubDate>Wed, 06 Mar 2024 13:00:00 GMT</pubDate>
          </item>
          <item>
            <title>Third Title</title>
            <link>http://example.com/3</link>
          </item>
        </channel>
      </rss>
    "#;

    #[test]
    fn test_extracts_fields() {
        let articles = extract_articles(FEED, 5);
        assert_eq!(articles.len(), 3);
        assert_eq!(
            articles[0],
            NewsArticle {
                title: "Test Title \"quoted\"".into(),
                description: Some("Test Description & more".into()),
                url: "http://example.com/1".into(),
                source: "Test Source".into(),
                published_at: "Wed, 06 Mar 2024 12:00:00 GMT".into(),
            }
        );
    }

    #[test]
    fn test_respects_max_in_order() {
        let articles = extract_articles(FEED, 2);
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].url, "http://example.com/1");
        assert_eq!(articles[1].title, "Second Title");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let articles = extract_articles(FEED, 10);
        let third = &articles[2];
        assert_eq!(third.title, "Third Title");
        assert_eq!(third.description, None);
        assert_eq!(third.source, DEFAULT_SOURCE);
        assert_eq!(third.published_at, "");
    }

    #[test]
    fn test_empty_capture_is_absent() {
        let feed = "<item><title></title><description></description><source url=\"x\"></source></item>";
        let articles = extract_articles(feed, 5);
        assert_eq!(articles[0].title, "");
        assert_eq!(articles[0].description, None);
        assert_eq!(articles[0].source, DEFAULT_SOURCE);
    }

    #[test]
    fn test_multiline_field_is_absent() {
        let feed = "<item><title>one\ntwo</title><link>http://example.com</link></item>";
        let articles = extract_articles(feed, 5);
        assert_eq!(articles[0].title, "");
        assert_eq!(articles[0].url, "http://example.com");
    }

    #[test]
    fn test_no_items() {
        let feed = "<rss version=\"2.0\"><channel></channel></rss>";
        assert!(extract_articles(feed, 5).is_empty());
        assert!(extract_articles("not a feed at all", 5).is_empty());
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(
            decode_entities("Test Title &quot;quoted&quot;"),
            "Test Title \"quoted\""
        );
        assert_eq!(decode_entities("&lt;b&gt; &apos;x&apos;"), "<b> 'x'");
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
        assert_eq!(decode_entities("no entities"), "no entities");
    }

    #[test]
    fn test_url_and_source_are_not_decoded() {
        let feed = "<item><link>http://a.com/?x=1&amp;y=2</link><source>A &amp; B</source></item>";
        let articles = extract_articles(feed, 1);
        assert_eq!(articles[0].url, "http://a.com/?x=1&amp;y=2");
        assert_eq!(articles[0].source, "A &amp; B");
    }
}
