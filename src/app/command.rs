use crate::domain::models::NewsQuery;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Restart the ticker debounce window for `seq`.
    ScheduleTickerLookup { seq: u64, query: String },
    LookupTickers { seq: u64, query: String },
    VerifyTicker { seq: u64, query: String },
    /// Restart the news filter debounce window for `seq`.
    ScheduleNewsSearch { seq: u64 },
    SearchNews { seq: u64, query: NewsQuery },
    FetchNews { symbol: String, limit: u32 },
}
