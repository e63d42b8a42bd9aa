//! News search client.

use std::sync::Arc;

use estate_core::{HttpRequest, HttpService, Result};
use url::Url;
use validator::Validate;

use super::{NewsArticle, NewsQuery, NewsResponse, extract_articles};
use crate::{ClientConfig, TRACING_TARGET_NEWS, validation};

/// Fixed locale parameters: Japanese results for Japan.
const LOCALE_PARAMS: [(&str, &str); 3] = [("hl", "ja"), ("gl", "JP"), ("ceid", "JP:ja")];

struct NewsClientInner {
    http: HttpService,
    endpoint: Url,
}

/// Client for the Google News RSS search feed. Needs no credentials.
#[derive(Clone)]
pub struct NewsClient {
    inner: Arc<NewsClientInner>,
}

impl NewsClient {
    /// Creates a client from the shared configuration.
    pub fn new(http: HttpService, config: &ClientConfig) -> Self {
        let inner = NewsClientInner {
            http,
            endpoint: config.news_url.clone(),
        };

        Self {
            inner: Arc::new(inner),
        }
    }

    /// Returns up to `max` articles matching `query`.
    ///
    /// `max` must be within `1..=10`.
    pub async fn get_articles(&self, query: &str, max: u32) -> Result<Vec<NewsArticle>> {
        let query = NewsQuery::new(query).with_max(max);
        let response = self.search(&query).await?;
        Ok(response.articles)
    }

    /// Runs a news search.
    ///
    /// # Errors
    ///
    /// - `InvalidQuery` when `max` is out of range (no request is sent)
    /// - `UpstreamHttp` on a non-success status
    /// - `Transport` when the request cannot be completed
    ///
    /// Feed content never causes an error; unparseable items degrade to
    /// default field values.
    pub async fn search(&self, query: &NewsQuery) -> Result<NewsResponse> {
        query.validate().map_err(validation::invalid_query)?;

        let mut url = self.inner.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", &query.query);
            for (name, value) in LOCALE_PARAMS {
                pairs.append_pair(name, value);
            }
        }

        tracing::debug!(
            target: TRACING_TARGET_NEWS,
            query = %query.query,
            max = query.max,
            "Searching news"
        );

        let response = self
            .inner
            .http
            .get(&HttpRequest::get(url))
            .await?
            .error_for_status("news")?;

        let articles = extract_articles(&response.text(), query.max as usize);

        tracing::info!(
            target: TRACING_TARGET_NEWS,
            articles = articles.len(),
            "News search completed"
        );

        Ok(NewsResponse { articles })
    }
}

impl std::fmt::Debug for NewsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsClient")
            .field("endpoint", &self.inner.endpoint.as_str())
            .finish_non_exhaustive()
    }
}
