//! Address geocoding tool.

use estate_client::{GeocodeResult, GeocodingClient};
use rig::completion::ToolDefinition;
use rig::tool::Tool;
use serde::{Deserialize, Serialize};

use crate::{Error, TRACING_TARGET_TOOLS};

/// Arguments for geocoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingArgs {
    /// Address to geocode.
    pub address: String,
}

/// Tool that converts an address to geographical coordinates.
#[derive(Debug, Clone)]
pub struct GeocodingTool {
    client: GeocodingClient,
}

impl GeocodingTool {
    /// Creates a new geocoding tool.
    pub fn new(client: GeocodingClient) -> Self {
        Self { client }
    }
}

impl Tool for GeocodingTool {
    type Args = GeocodingArgs;
    type Error = Error;
    type Output = GeocodeResult;

    const NAME: &'static str = "geocoding";

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: "Convert an address to geographical coordinates".to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "address": {
                        "type": "string",
                        "description": "Address to geocode"
                    }
                },
                "required": ["address"]
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
            .search_address(&args.address)
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

    #[tokio::test]
    async fn test_definition() {
        let mock = MockTransport::new();
        let tool = GeocodingTool::new(GeocodingClient::new(mock.service(), &ClientConfig::new()));

        let definition = tool.definition(String::new()).await;
        assert_eq!(definition.name, "geocoding");
        assert_eq!(
            definition.description,
            "Convert an address to geographical coordinates"
        );
        assert_eq!(definition.parameters["required"], serde_json::json!(["address"]));
    }

    #[tokio::test]
    async fn test_call() {
        let mock = MockTransport::new().with_json(&serde_json::json!({
            "results": [],
            "status": "ZERO_RESULTS"
        }));
        let config = ClientConfig::new().with_google_maps_api_key("key");
        let tool = GeocodingTool::new(GeocodingClient::new(mock.service(), &config));

        let args: GeocodingArgs =
            serde_json::from_value(serde_json::json!({"address": "東京都中央区築地"})).unwrap();
        let output = tool.call(args).await.unwrap();
        assert_eq!(output.status, "ZERO_RESULTS");
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_call_without_key() {
        let mock = MockTransport::new();
        let tool = GeocodingTool::new(GeocodingClient::new(mock.service(), &ClientConfig::new()));

        let error = tool
            .call(GeocodingArgs {
                address: "東京".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(error.tool_name(), "geocoding");
        assert_eq!(error.kind(), ErrorKind::Configuration);
        assert_eq!(mock.call_count(), 0);
    }
}
