use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    persistence::LAST_SEARCH,
    state::{AppState, Focus, NewsField, NoticeKind},
};

pub const MISSING_SYMBOL_MESSAGE: &str = "Please enter a stock symbol";
pub const FETCHING_MESSAGE: &str = "Fetching latest news...";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch news";

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::TextAreaInput(key) => {
            let Focus::News(field) = state.focus else {
                return UpdateResult::NotHandled;
            };
            if !state.news.field_mut(field).input_single_line(*key) {
                return UpdateResult::Handled(None);
            }
            state.news.page = 1;
            state.news.latest_seq += 1;
            UpdateResult::Handled(Some(Command::ScheduleNewsSearch {
                seq: state.news.latest_seq,
            }))
        }
        Action::NewsDebounceElapsed(seq) => {
            if *seq != state.news.latest_seq {
                tracing::trace!(seq, latest = state.news.latest_seq, "superseded news debounce");
                return UpdateResult::Handled(None);
            }
            UpdateResult::Handled(start_search(state))
        }
        Action::SearchNews => UpdateResult::Handled(start_search(state)),
        Action::NextPage => {
            if let Some(last) = last_page(state) {
                if state.news.page >= last {
                    return UpdateResult::Handled(None);
                }
            }
            state.news.page += 1;
            UpdateResult::Handled(start_search(state))
        }
        Action::PrevPage => {
            if state.news.page <= 1 {
                return UpdateResult::Handled(None);
            }
            state.news.page -= 1;
            UpdateResult::Handled(start_search(state))
        }
        Action::ResetNews => {
            state.news.reset(AppState::today());
            UpdateResult::Handled(start_search(state))
        }
        Action::FetchNews => {
            let symbol = state.news.value(NewsField::Symbol).trim().to_uppercase();
            if symbol.is_empty() {
                state.feedback.notify(NoticeKind::Error, MISSING_SYMBOL_MESSAGE);
                return UpdateResult::Handled(None);
            }
            state.feedback.notify(NoticeKind::Info, FETCHING_MESSAGE);
            state.news.fetching = true;
            UpdateResult::Handled(Some(Command::FetchNews {
                symbol,
                limit: state.settings.fetch_limit,
            }))
        }
        Action::SelectNextArticle => {
            state.news.select_next_article();
            UpdateResult::Handled(None)
        }
        Action::SelectPrevArticle => {
            state.news.select_prev_article();
            UpdateResult::Handled(None)
        }

        // --- Async Results ---
        Action::NewsLoaded(seq, result) => {
            if *seq != state.news.latest_seq {
                tracing::debug!(seq, latest = state.news.latest_seq, "dropping stale news page");
                return UpdateResult::Handled(None);
            }
            state.news.loading = false;
            state.ticker.busy = false;
            match result {
                Ok(page) => {
                    state.news.results = Some(page.clone());
                    state.news.selected_article = 0;
                    state.news.error = None;
                    state.preferences.save(LAST_SEARCH, &state.news.query());
                }
                Err(e) => {
                    state
                        .feedback
                        .notify(NoticeKind::Error, format!("Failed to search news: {e}"));
                    state.news.error = Some(e.clone());
                }
            }
            UpdateResult::Handled(None)
        }
        Action::NewsFetched(symbol, result) => {
            state.news.fetching = false;
            match result {
                Ok(count) => {
                    state.feedback.notify(
                        NoticeKind::Success,
                        format!("Successfully fetched {count} articles for {symbol}"),
                    );
                    UpdateResult::Handled(search_for_symbol(state, symbol))
                }
                Err(e) => {
                    tracing::warn!(%symbol, error = %e, "news fetch failed");
                    state.feedback.notify(NoticeKind::Error, FETCH_FAILED_MESSAGE);
                    UpdateResult::Handled(None)
                }
            }
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Makes `symbol` the symbol filter and searches from the first page.
pub fn search_for_symbol(state: &mut AppState, symbol: &str) -> Option<Command> {
    state.news.set_field(NewsField::Symbol, symbol);
    state.news.page = 1;
    start_search(state)
}

fn start_search(state: &mut AppState) -> Option<Command> {
    let seq = state.news.begin_search();
    let query = state.news.query();
    tracing::debug!(seq, ?query, "news search");
    Some(Command::SearchNews { seq, query })
}

fn last_page(state: &AppState) -> Option<u32> {
    let results = state.news.results.as_ref()?;
    let per_page = u64::from(results.per_page.filter(|p| *p > 0)?);
    let pages = results.total.div_ceil(per_page).max(1);
    Some(u32::try_from(pages).unwrap_or(u32::MAX))
}
