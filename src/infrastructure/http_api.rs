use crate::config::AppConfig;
use crate::domain::market::MarketApi;
use crate::domain::models::{
    FetchReport, FetchRequest, NewsPage, NewsQuery, Suggestion, SuggestionDto, VerifyOutcome,
    VerifyResponse,
};
use crate::error::ApiError;
use crate::infrastructure::retry::RetryPolicy;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// The server caps fetch requests at this many articles.
pub const MAX_FETCH_LIMIT: u32 = 50;

#[derive(Debug, Clone)]
pub struct HttpMarketApi {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
    retry: RetryPolicy,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl HttpMarketApi {
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert("X-Requested-With", HeaderValue::from_static("XMLHttpRequest"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .user_agent(concat!("stockscope/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::InvalidRequest(format!("building HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.request_timeout(),
            retry: RetryPolicy::new(config.max_retries),
        })
    }

    pub(crate) fn search_ticker_url(&self, query: &str) -> String {
        format!(
            "{}/search_ticker?query={}",
            self.base_url,
            urlencoding::encode(query)
        )
    }

    pub(crate) fn verify_url(&self, symbol: &str) -> String {
        format!(
            "{}/verify_and_add_ticker/{}",
            self.base_url,
            urlencoding::encode(symbol)
        )
    }

    pub(crate) fn news_search_url(&self, query: &NewsQuery) -> String {
        let params = query
            .to_params()
            .into_iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(&v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}/news/search?{params}", self.base_url)
    }

    pub(crate) fn news_fetch_url(&self) -> String {
        format!("{}/news/api/fetch", self.base_url)
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(status_error(status.as_u16(), &body));
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).timeout(self.timeout).send().await?;
        Self::read_json(response).await
    }
}

fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error.or(b.message))
        .unwrap_or_else(|| format!("HTTP error! status: {status}"));
    ApiError::Status { status, message }
}

#[async_trait]
impl MarketApi for HttpMarketApi {
    async fn search_tickers(&self, query: &str) -> Result<Vec<Suggestion>, ApiError> {
        let url = self.search_ticker_url(query);
        let rows: Vec<SuggestionDto> = self.get_json(&url).await?;
        tracing::debug!(query, results = rows.len(), "ticker lookup returned");
        Ok(rows.into_iter().map(Suggestion::from).collect())
    }

    async fn verify_ticker(&self, symbol: &str) -> Result<VerifyOutcome, ApiError> {
        let url = self.verify_url(symbol);
        // Not retried: the endpoint registers new tickers as a side effect.
        let response: VerifyResponse = self.get_json(&url).await?;
        tracing::info!(symbol, success = response.success, exists = ?response.exists, "ticker verification");
        Ok(response.into_outcome(symbol))
    }

    async fn search_news(&self, query: &NewsQuery) -> Result<NewsPage, ApiError> {
        let url = self.news_search_url(query);
        let (this, url) = (self, url.as_str());
        self.retry
            .run("news search", move || this.get_json::<NewsPage>(url))
            .await
    }

    async fn fetch_news(&self, symbols: Vec<String>, limit: u32) -> Result<FetchReport, ApiError> {
        if symbols.is_empty() {
            return Err(ApiError::InvalidRequest("No symbols provided".to_string()));
        }
        let url = self.news_fetch_url();
        let body = FetchRequest {
            symbols: &symbols,
            limit: limit.clamp(1, MAX_FETCH_LIMIT),
        };
        let (client, timeout, url, body) = (&self.client, self.timeout, url.as_str(), &body);
        let report: FetchReport = self
            .retry
            .run("news fetch", move || async move {
                tracing::debug!(url, symbols = ?body.symbols, "POST");
                let response = client.post(url).timeout(timeout).json(body).send().await?;
                Self::read_json::<FetchReport>(response).await
            })
            .await?;
        if let Some(err) = &report.error {
            return Err(ApiError::Status {
                status: 200,
                message: err.clone(),
            });
        }
        Ok(report)
    }

    fn base_url(&self) -> String {
        self.base_url.clone()
    }
}
