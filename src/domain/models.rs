use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// Separator between symbol and company name in the ticker field.
pub const DISPLAY_SEPARATOR: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub symbol: String,
    pub exchange_symbol: String,
    pub name: String,
}

impl Suggestion {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        let symbol = symbol.into();
        Self {
            exchange_symbol: symbol.clone(),
            symbol,
            name: name.into(),
        }
    }

    /// Entries whose symbol repeats the name carry nothing worth showing.
    #[must_use]
    pub fn is_informative(&self) -> bool {
        self.symbol.to_uppercase() != self.name.to_uppercase()
    }

    #[must_use]
    pub fn display_value(&self) -> String {
        display_value(&self.symbol, &self.name)
    }
}

#[must_use]
pub fn display_value(symbol: &str, name: &str) -> String {
    format!("{symbol}{DISPLAY_SEPARATOR}{name}")
}

/// Undo the backslash escaping the lookup service applies to apostrophes.
#[must_use]
pub fn format_company_name(name: &str) -> String {
    name.replace("\\'", "'")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedTicker {
    pub symbol: String,
    pub name: String,
}

impl From<&Suggestion> for SelectedTicker {
    fn from(s: &Suggestion) -> Self {
        Self {
            symbol: s.symbol.clone(),
            name: s.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    Accepted {
        ticker: SelectedTicker,
        newly_added: bool,
    },
    Rejected {
        message: String,
    },
}

// --- Wire types ---

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionDto {
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub exchange_symbol: Option<String>,
}

impl From<SuggestionDto> for Suggestion {
    fn from(dto: SuggestionDto) -> Self {
        Self {
            exchange_symbol: dto.exchange_symbol.unwrap_or_else(|| dto.symbol.clone()),
            symbol: dto.symbol,
            name: format_company_name(&dto.name),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifyResponse {
    pub success: bool,
    #[serde(default)]
    pub exists: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl VerifyResponse {
    pub fn into_outcome(self, requested: &str) -> VerifyOutcome {
        if !self.success {
            return VerifyOutcome::Rejected {
                message: self
                    .message
                    .unwrap_or_else(|| format!("Could not verify ticker {requested}")),
            };
        }
        let symbol = self.symbol.unwrap_or_else(|| requested.to_uppercase());
        let name = self
            .name
            .map(|n| format_company_name(&n))
            .unwrap_or_else(|| symbol.clone());
        VerifyOutcome::Accepted {
            ticker: SelectedTicker { symbol, name },
            // Absent `exists` means the server already knew the ticker.
            newly_added: self.exists == Some(false),
        }
    }
}

// --- News ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "POSITIVE" => Some(Self::Positive),
            "NEGATIVE" => Some(Self::Negative),
            "NEUTRAL" => Some(Self::Neutral),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Neutral => "NEUTRAL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ArticleSentiment {
    #[serde(default)]
    pub overall_sentiment: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ArticleSummary {
    #[serde(default)]
    pub brief: Option<String>,
    #[serde(default)]
    pub market_impact: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct NewsArticle {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub summary: Option<ArticleSummary>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub symbols: Vec<String>,
    #[serde(default)]
    pub sentiment: Option<ArticleSentiment>,
}

impl NewsArticle {
    #[must_use]
    pub fn excerpt(&self) -> &str {
        self.summary
            .as_ref()
            .and_then(|s| s.brief.as_deref())
            .or(self.content.as_deref())
            .unwrap_or("")
    }

    #[must_use]
    pub fn market_impact(&self) -> Option<&str> {
        self.summary
            .as_ref()
            .and_then(|s| s.market_impact.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn sentiment_label(&self) -> String {
        let sentiment = self.sentiment.as_ref();
        let label = sentiment
            .and_then(|s| s.overall_sentiment.as_deref())
            .and_then(Sentiment::parse)
            .unwrap_or(Sentiment::Neutral)
            .as_str();
        match sentiment.and_then(|s| s.confidence) {
            Some(c) => format!("{label} ({:.1}%)", c * 100.0),
            None => label.to_string(),
        }
    }

    /// "Mar 4, 14:05" style, falling back to the raw string.
    #[must_use]
    pub fn published_label(&self) -> String {
        let Some(raw) = self.published_at.as_deref() else {
            return String::new();
        };
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return dt.with_timezone(&Local).format("%b %-d, %H:%M").to_string();
        }
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return dt.format("%b %-d, %H:%M").to_string();
        }
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
            return dt.format("%b %-d, %H:%M").to_string();
        }
        raw.to_string()
    }
}

fn null_as_empty<'de, D>(de: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(de)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewsQuery {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub sentiment: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default = "first_page")]
    pub page: u32,
}

fn first_page() -> u32 {
    1
}

impl NewsQuery {
    /// Empty filters with the last thirty days as the date window.
    #[must_use]
    pub fn with_default_dates(today: NaiveDate) -> Self {
        Self {
            start_date: (today - chrono::Duration::days(30))
                .format("%Y-%m-%d")
                .to_string(),
            end_date: today.format("%Y-%m-%d").to_string(),
            page: 1,
            ..Default::default()
        }
    }

    /// Query pairs for the search endpoint; blank filters are omitted.
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        let fields = [
            ("keyword", self.keyword.trim().to_string()),
            ("symbol", self.symbol.trim().to_uppercase()),
            (
                "sentiment",
                Sentiment::parse(&self.sentiment)
                    .map(|s| s.as_str().to_string())
                    .unwrap_or_default(),
            ),
            ("start_date", self.start_date.trim().to_string()),
            ("end_date", self.end_date.trim().to_string()),
        ];
        for (key, value) in fields {
            if !value.is_empty() {
                params.push((key, value));
            }
        }
        params.push(("page", self.page.max(1).to_string()));
        params
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct NewsPage {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub articles: Vec<NewsArticle>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FetchReport {
    #[serde(default)]
    pub articles: Vec<NewsArticle>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FetchRequest<'a> {
    pub symbols: &'a [String],
    pub limit: u32,
}
