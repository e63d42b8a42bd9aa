//! Google News RSS search.

mod client;
mod extract;
mod types;

pub use client::NewsClient;
pub use extract::{DEFAULT_SOURCE, decode_entities, extract_articles};
pub use types::{DEFAULT_MAX_ARTICLES, MAX_ARTICLES_LIMIT, NewsArticle, NewsQuery, NewsResponse};
