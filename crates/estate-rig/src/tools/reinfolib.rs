//! Real estate transaction search tool.

use estate_client::{RealEstateClient, RealEstateQuery, RealEstateResponse};
use rig::completion::ToolDefinition;
use rig::tool::Tool;

use crate::{Error, TRACING_TARGET_TOOLS};

/// Tool that searches the Real Estate Information Library.
#[derive(Debug, Clone)]
pub struct ReinfolibTool {
    client: RealEstateClient,
}

impl ReinfolibTool {
    /// Creates a new transaction search tool.
    pub fn new(client: RealEstateClient) -> Self {
        Self { client }
    }
}

impl Tool for ReinfolibTool {
    type Args = RealEstateQuery;
    type Error = Error;
    type Output = RealEstateResponse;

    const NAME: &'static str = "reinfolib";

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description:
                "Search real estate transaction data from Real Estate Information Library"
                    .to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "description": "At least one of area, city, or station must be specified",
                "properties": {
                    "priceClassification": {
                        "type": "string",
                        "pattern": "^[0-9]{2}$",
                        "description": "Price classification code (2 digits)"
                    },
                    "year": {
                        "type": "string",
                        "pattern": "^[0-9]{4}$",
                        "description": "Target year (YYYY)"
                    },
                    "quarter": {
                        "type": "string",
                        "pattern": "^[1-4]$",
                        "description": "Target quarter (1-4)"
                    },
                    "area": {
                        "type": "string",
                        "pattern": "^[0-9]{2}$",
                        "description": "Area code (2 digits)"
                    },
                    "city": {
                        "type": "string",
                        "pattern": "^[0-9]{5}$",
                        "description": "City code (5 digits)"
                    },
                    "station": {
                        "type": "string",
                        "pattern": "^[0-9]{6}$",
                        "description": "Station code (6 digits)"
                    },
                    "language": {
                        "type": "string",
                        "enum": ["ja", "en"],
                        "description": "Response language (ja/en)"
                    }
                },
                "required": ["priceClassification", "year", "quarter", "language"]
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        tracing::debug!(
            target: TRACING_TARGET_TOOLS,
            tool = Self::NAME,
            "Tool called"
        );

        self.client
            .fetch_transactions(&args)
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

    fn tool(mock: &MockTransport) -> ReinfolibTool {
        let config = ClientConfig::new().with_reinfolib_api_key("dummy-api-key");
        ReinfolibTool::new(RealEstateClient::new(mock.service(), &config))
    }

    #[tokio::test]
    async fn test_definition() {
        let definition = tool(&MockTransport::new()).definition(String::new()).await;
        assert_eq!(definition.name, "reinfolib");
        assert_eq!(
            definition.parameters["properties"]["language"]["enum"],
            serde_json::json!(["ja", "en"])
        );
    }

    #[tokio::test]
    async fn test_call_returns_envelope() {
        let mock = MockTransport::new().with_json(&serde_json::json!({"status": "OK", "data": []}));

        let args: RealEstateQuery = serde_json::from_value(serde_json::json!({
            "priceClassification": "01",
            "year": "2024",
            "quarter": "1",
            "city": "13101",
            "language": "en"
        }))
        .unwrap();
        let output = tool(&mock).call(args).await.unwrap();
        assert_eq!(output.status, "OK");

        let request = mock.last_request().unwrap();
        assert_eq!(request.query_param("city").as_deref(), Some("13101"));
        assert_eq!(request.query_param("language").as_deref(), Some("en"));
    }

    #[tokio::test]
    async fn test_call_without_location() {
        let mock = MockTransport::new();

        let args: RealEstateQuery = serde_json::from_value(serde_json::json!({
            "priceClassification": "01",
            "year": "2024",
            "quarter": "1",
            "language": "ja"
        }))
        .unwrap();
        let error = tool(&mock).call(args).await.unwrap_err();
        assert_eq!(error.tool_name(), "reinfolib");
        assert_eq!(error.kind(), ErrorKind::InvalidQuery);
        assert!(error.to_string().contains("At least one of area, city, or station"));
        assert_eq!(mock.call_count(), 0);
    }
}
