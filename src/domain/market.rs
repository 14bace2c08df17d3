use crate::domain::models::{FetchReport, NewsPage, NewsQuery, Suggestion, VerifyOutcome};
use crate::error::ApiError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketApi: Send + Sync {
    // Ticker lookup; may return an empty list
    async fn search_tickers(&self, query: &str) -> Result<Vec<Suggestion>, ApiError>;

    // Verify-and-register: registers the ticker server-side when it is new
    async fn verify_ticker(&self, symbol: &str) -> Result<VerifyOutcome, ApiError>;

    async fn search_news(&self, query: &NewsQuery) -> Result<NewsPage, ApiError>;

    async fn fetch_news(&self, symbols: Vec<String>, limit: u32) -> Result<FetchReport, ApiError>;

    fn base_url(&self) -> String;
}
