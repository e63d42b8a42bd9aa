//! News search tool.

use estate_client::news::{DEFAULT_MAX_ARTICLES, MAX_ARTICLES_LIMIT};
use estate_client::{NewsClient, NewsQuery, NewsResponse};
use rig::completion::ToolDefinition;
use rig::tool::Tool;

use crate::{Error, TRACING_TARGET_TOOLS};

/// Tool that returns the latest Google News articles for a query.
#[derive(Debug, Clone)]
pub struct GoogleNewsTool {
    client: NewsClient,
}

impl GoogleNewsTool {
    /// Creates a new news tool.
    pub fn new(client: NewsClient) -> Self {
        Self { client }
    }
}

impl Tool for GoogleNewsTool {
    type Args = NewsQuery;
    type Error = Error;
    type Output = NewsResponse;

    const NAME: &'static str = "google-news";

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: "Get latest news from Google News".to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query"
                    },
                    "max": {
                        "type": "integer",
                        "description": "Maximum number of articles to return",
                        "minimum": 1,
                        "maximum": MAX_ARTICLES_LIMIT,
                        "default": DEFAULT_MAX_ARTICLES
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        tracing::debug!(
            target: TRACING_TARGET_TOOLS,
            tool = Self::NAME,
            max = args.max,
            "Tool called"
        );

        self.client
            .search(&args)
            .await
            .map_err(|error| Error::tool(Self::NAME, error))
    }
}

#[cfg(test)]
mod tests {
    use estate_client::ClientConfig;
    use estate_core::ErrorKind;
    use estate_test::MockTransport;

    use super::*;

    const FEED: &str = "<rss><channel>\
        <item><title>A &amp; B</title><link>http://example.com/1</link></item>\
        <item><title>Second</title><link>http://example.com/2</link></item>\
        </channel></rss>";

    fn tool(mock: &MockTransport) -> GoogleNewsTool {
        GoogleNewsTool::new(NewsClient::new(mock.service(), &ClientConfig::new()))
    }

    #[tokio::test]
    async fn test_definition() {
        let definition = tool(&MockTransport::new()).definition(String::new()).await;
        assert_eq!(definition.name, "google-news");
        assert_eq!(definition.description, "Get latest news from Google News");
        assert_eq!(definition.parameters["properties"]["max"]["default"], 5);
    }

    #[tokio::test]
    async fn test_call_with_default_max() {
        let mock = MockTransport::new().with_text(FEED);

        let args: NewsQuery = serde_json::from_value(serde_json::json!({"query": "不動産"})).unwrap();
        let output = tool(&mock).call(args).await.unwrap();
        assert_eq!(output.articles.len(), 2);
        assert_eq!(output.articles[0].title, "A & B");

        let value = serde_json::to_value(&output).unwrap();
        assert!(value["articles"].is_array());
    }

    #[tokio::test]
    async fn test_call_rejects_max_out_of_range() {
        let mock = MockTransport::new().with_text(FEED);

        let error = tool(&mock)
            .call(NewsQuery::new("test").with_max(20))
            .await
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidQuery);
        assert_eq!(mock.call_count(), 0);
    }
}
