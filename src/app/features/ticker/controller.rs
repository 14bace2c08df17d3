use super::view::SearchView;
use crate::app::command::Command;
use crate::app::state::NoticeKind;
use crate::domain::models::{display_value, SelectedTicker, Suggestion, VerifyOutcome};

pub const EMPTY_TICKER_MESSAGE: &str = "Please enter a ticker symbol";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Typing,
    Fetching,
    Suggesting,
    Verifying,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    pub seq: u64,
    pub query: String,
}

/// Debounced ticker lookup with verify-and-register fallback.
///
/// Every input change bumps `latest_seq`. Timer fires, lookup results and
/// verification results all carry the sequence number they were issued for,
/// and anything that no longer matches is dropped on arrival. One instance
/// per ticker field; nothing is shared between instances.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickerSearchController {
    latest_seq: u64,
    pending: Option<PendingSearch>,
    phase: SearchPhase,
    rendered: Vec<Suggestion>,
    selected: Option<SelectedTicker>,
}

impl TickerSearchController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    #[must_use]
    pub fn selected(&self) -> Option<&SelectedTicker> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn pending(&self) -> Option<&PendingSearch> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.rendered
    }

    #[must_use]
    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    fn is_current(&self, seq: u64) -> bool {
        seq == self.latest_seq && self.pending.as_ref().is_some_and(|p| p.seq == seq)
    }

    fn settle(&mut self, phase: SearchPhase) {
        self.pending = None;
        self.phase = phase;
    }

    /// Field text changed. Returns the debounce request, if any.
    pub fn on_input(&mut self, view: &mut impl SearchView, raw: &str) -> Option<Command> {
        self.latest_seq += 1;
        self.selected = None;

        let query = raw.trim();
        if query.is_empty() {
            self.rendered.clear();
            view.clear_suggestions();
            self.settle(SearchPhase::Idle);
            return None;
        }

        let seq = self.latest_seq;
        self.pending = Some(PendingSearch {
            seq,
            query: query.to_string(),
        });
        self.phase = SearchPhase::Typing;
        Some(Command::ScheduleTickerLookup {
            seq,
            query: query.to_string(),
        })
    }

    pub fn on_debounce_elapsed(&mut self, seq: u64) -> Option<Command> {
        if !self.is_current(seq) || self.phase != SearchPhase::Typing {
            tracing::trace!(seq, latest = self.latest_seq, "superseded debounce fire");
            return None;
        }
        let query = self.pending.as_ref()?.query.clone();
        self.phase = SearchPhase::Fetching;
        tracing::debug!(seq, %query, "issuing ticker lookup");
        Some(Command::LookupTickers { seq, query })
    }

    pub fn on_suggestions_loaded(
        &mut self,
        view: &mut impl SearchView,
        seq: u64,
        results: Vec<Suggestion>,
    ) -> Option<Command> {
        if !self.is_current(seq) || self.phase != SearchPhase::Fetching {
            tracing::debug!(seq, latest = self.latest_seq, "dropping stale lookup response");
            return None;
        }

        if results.is_empty() {
            let query = self.pending.as_ref()?.query.clone();
            // Rows from an earlier query must not stay clickable while verifying.
            self.rendered.clear();
            view.clear_suggestions();
            self.phase = SearchPhase::Verifying;
            tracing::info!(seq, %query, "no local match, verifying ticker");
            return Some(Command::VerifyTicker { seq, query });
        }

        let filtered: Vec<Suggestion> = results.into_iter().filter(Suggestion::is_informative).collect();
        if filtered.is_empty() {
            self.rendered.clear();
            view.clear_suggestions();
            self.settle(SearchPhase::Idle);
        } else {
            view.render_suggestions(&filtered);
            self.rendered = filtered;
            self.settle(SearchPhase::Suggesting);
        }
        None
    }

    /// Transport failures are not shown to the user beyond hiding the list.
    pub fn on_lookup_failed(&mut self, view: &mut impl SearchView, seq: u64, error: &str) {
        if !self.is_current(seq) {
            tracing::debug!(seq, "ignoring failure of superseded lookup");
            return;
        }
        tracing::warn!(seq, error, "ticker lookup failed");
        self.rendered.clear();
        view.clear_suggestions();
        self.settle(SearchPhase::Idle);
    }

    pub fn on_verified(
        &mut self,
        view: &mut impl SearchView,
        seq: u64,
        outcome: Result<VerifyOutcome, String>,
    ) {
        if !self.is_current(seq) || self.phase != SearchPhase::Verifying {
            tracing::debug!(seq, latest = self.latest_seq, "dropping stale verification");
            return;
        }
        self.settle(SearchPhase::Idle);

        match outcome {
            Ok(VerifyOutcome::Accepted {
                ticker,
                newly_added,
            }) => {
                view.set_field_value(&display_value(&ticker.symbol, &ticker.name));
                self.rendered.clear();
                view.clear_suggestions();
                if newly_added {
                    view.notify(
                        NoticeKind::Info,
                        &format!("Ticker {} ({}) was added", ticker.symbol, ticker.name),
                    );
                }
                self.selected = Some(ticker);
            }
            Ok(VerifyOutcome::Rejected { message }) => {
                view.alert(&message);
            }
            Err(error) => {
                tracing::warn!(seq, %error, "ticker verification failed");
                self.rendered.clear();
                view.clear_suggestions();
            }
        }
    }

    /// A dropdown row was chosen. The click is consumed here and must not
    /// also be dispatched as an outside click.
    pub fn on_suggestion_click(&mut self, view: &mut impl SearchView, index: usize) {
        let Some(suggestion) = self.rendered.get(index).cloned() else {
            return;
        };
        // Anything still debouncing or in flight now describes an older intent.
        self.latest_seq += 1;
        self.settle(SearchPhase::Idle);

        view.set_field_value(&suggestion.display_value());
        view.hide_suggestions();
        self.selected = Some(SelectedTicker::from(&suggestion));
    }

    pub fn on_input_click(&mut self, view: &mut impl SearchView, raw: &str) {
        if !raw.trim().is_empty() && !self.rendered.is_empty() {
            view.show_suggestions();
        }
    }

    pub fn on_outside_click(&mut self, view: &mut impl SearchView) {
        view.hide_suggestions();
    }

    /// Double-click on the field empties it.
    pub fn on_clear_gesture(&mut self, view: &mut impl SearchView, raw: &str) {
        if raw.is_empty() {
            return;
        }
        self.latest_seq += 1;
        self.selected = None;
        self.rendered.clear();
        self.settle(SearchPhase::Idle);
        view.set_field_value("");
        view.clear_suggestions();
    }

    /// Resolves the ticker to submit, or blocks with a validation message.
    pub fn on_submit(&mut self, view: &mut impl SearchView, raw: &str) -> Option<String> {
        let symbol = match &self.selected {
            Some(ticker) => ticker.symbol.clone(),
            None => raw.split_whitespace().next().unwrap_or_default().to_string(),
        };

        if symbol.is_empty() {
            view.alert(EMPTY_TICKER_MESSAGE);
            return None;
        }

        tracing::info!(%symbol, "ticker submitted");
        view.hide_suggestions();
        view.set_busy(true);
        Some(symbol)
    }
}
