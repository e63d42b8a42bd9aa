//! Agent tools over the estate API clients.
//!
//! - [`GeocodingTool`] - Convert an address to coordinates
//! - [`GoogleNewsTool`] - Search recent news articles
//! - [`ReinfolibTool`] - Search real estate transaction records

mod geocoding;
mod google_news;
mod reinfolib;

use estate_client::EstateClients;
use rig::completion::ToolDefinition;
use rig::tool::Tool;

pub use geocoding::{GeocodingArgs, GeocodingTool};
pub use google_news::GoogleNewsTool;
pub use reinfolib::ReinfolibTool;

/// Every estate tool, built from one set of clients.
#[derive(Debug, Clone)]
pub struct EstateTools {
    pub geocoding: GeocodingTool,
    pub news: GoogleNewsTool,
    pub reinfolib: ReinfolibTool,
}

impl EstateTools {
    /// Creates all tools, sharing the given clients.
    pub fn new(clients: &EstateClients) -> Self {
        Self {
            geocoding: GeocodingTool::new(clients.geocoding.clone()),
            news: GoogleNewsTool::new(clients.news.clone()),
            reinfolib: ReinfolibTool::new(clients.real_estate.clone()),
        }
    }

    /// Returns the definitions of all tools, in a fixed order.
    pub async fn definitions(&self) -> Vec<ToolDefinition> {
        vec![
            self.geocoding.definition(String::new()).await,
            self.news.definition(String::new()).await,
            self.reinfolib.definition(String::new()).await,
        ]
    }
}

#[cfg(test)]
mod tests {
    use estate_client::ClientConfig;
    use estate_test::MockTransport;

    use super::*;

    #[tokio::test]
    async fn test_definitions() {
        let mock = MockTransport::new();
        let clients = EstateClients::new(mock.service(), &ClientConfig::new());
        let tools = EstateTools::new(&clients);

        let names: Vec<String> = tools
            .definitions()
            .await
            .into_iter()
            .map(|definition| definition.name)
            .collect();
        assert_eq!(names, ["geocoding", "google-news", "reinfolib"]);
        assert_eq!(mock.call_count(), 0);
    }
}
