use crate::app::{action::Action, command::Command, debounce::Timers};
use crate::domain::market::MarketApi;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs a command: timers are restarted in place, network calls are spawned
/// and report back through `tx`.
pub fn handle_command(
    command: Command,
    api: Arc<dyn MarketApi>,
    tx: mpsc::Sender<Action>,
    timers: &Timers,
) -> Result<()> {
    match command {
        Command::ScheduleTickerLookup { seq, query } => {
            tracing::trace!(seq, %query, "debouncing ticker lookup");
            timers.ticker.schedule(Action::TickerDebounceElapsed(seq));
        }
        Command::ScheduleNewsSearch { seq } => {
            timers.news.schedule(Action::NewsDebounceElapsed(seq));
        }
        Command::LookupTickers { seq, query } => {
            tokio::spawn(async move {
                let action = match api.search_tickers(&query).await {
                    Ok(suggestions) => Action::SuggestionsLoaded(seq, suggestions),
                    Err(e) => Action::LookupFailed(seq, e.to_string()),
                };
                let _ = tx.send(action).await;
            });
        }
        Command::VerifyTicker { seq, query } => {
            tokio::spawn(async move {
                let outcome = api.verify_ticker(&query).await.map_err(|e| {
                    tracing::warn!(%query, error = %e, "verify request failed");
                    e.user_message()
                });
                let _ = tx.send(Action::TickerVerified(seq, outcome)).await;
            });
        }
        Command::SearchNews { seq, query } => {
            tokio::spawn(async move {
                let result = api
                    .search_news(&query)
                    .await
                    .map_err(|e| e.user_message());
                let _ = tx.send(Action::NewsLoaded(seq, result)).await;
            });
        }
        Command::FetchNews { symbol, limit } => {
            tokio::spawn(async move {
                let result = api
                    .fetch_news(vec![symbol.clone()], limit)
                    .await
                    .map(|report| {
                        if let Some(message) = &report.message {
                            tracing::info!(%symbol, %message, "news fetch");
                        }
                        report.articles.len()
                    })
                    .map_err(|e| e.user_message());
                let _ = tx.send(Action::NewsFetched(symbol, result)).await;
            });
        }
    }
    Ok(())
}
