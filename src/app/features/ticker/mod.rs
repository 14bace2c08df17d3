//! Ticker autocomplete. The controller owns the search protocol; `update`
//! maps actions onto it.

pub mod controller;
pub mod view;

pub use controller::{SearchPhase, TickerSearchController};
pub use view::SearchView;

use crate::app::{
    action::{Action, UpdateResult},
    state::{AppState, Focus},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::TextAreaInput(key) if state.focus == Focus::Ticker => {
            if !state.ticker.field.input_single_line(*key) {
                return UpdateResult::Handled(None);
            }
            let raw = state.ticker.value();
            let (controller, mut view) = state.ticker_parts();
            UpdateResult::Handled(controller.on_input(&mut view, &raw))
        }
        Action::TickerClicked => {
            state.focus = Focus::Ticker;
            let raw = state.ticker.value();
            let (controller, mut view) = state.ticker_parts();
            controller.on_input_click(&mut view, &raw);
            UpdateResult::Handled(None)
        }
        Action::TickerDoubleClicked => {
            state.focus = Focus::Ticker;
            let raw = state.ticker.value();
            let (controller, mut view) = state.ticker_parts();
            controller.on_clear_gesture(&mut view, &raw);
            UpdateResult::Handled(None)
        }
        Action::SuggestionClicked(index) => {
            state.focus = Focus::Ticker;
            let (controller, mut view) = state.ticker_parts();
            controller.on_suggestion_click(&mut view, *index);
            UpdateResult::Handled(None)
        }
        Action::OutsideClick | Action::HideSuggestions => {
            let (controller, mut view) = state.ticker_parts();
            controller.on_outside_click(&mut view);
            UpdateResult::Handled(None)
        }
        Action::HighlightNext => {
            state.ticker.highlight_next();
            UpdateResult::Handled(None)
        }
        Action::HighlightPrev => {
            state.ticker.highlight_prev();
            UpdateResult::Handled(None)
        }
        Action::ConfirmTicker => match state.ticker.highlighted {
            Some(index) if state.ticker.shows_dropdown() => {
                let (controller, mut view) = state.ticker_parts();
                controller.on_suggestion_click(&mut view, index);
                UpdateResult::Handled(None)
            }
            _ => submit(state),
        },
        Action::SubmitTicker => submit(state),

        // --- Async Results ---
        Action::TickerDebounceElapsed(seq) => {
            UpdateResult::Handled(state.ticker_search.on_debounce_elapsed(*seq))
        }
        Action::SuggestionsLoaded(seq, suggestions) => {
            let (controller, mut view) = state.ticker_parts();
            UpdateResult::Handled(controller.on_suggestions_loaded(
                &mut view,
                *seq,
                suggestions.clone(),
            ))
        }
        Action::LookupFailed(seq, error) => {
            let (controller, mut view) = state.ticker_parts();
            controller.on_lookup_failed(&mut view, *seq, error);
            UpdateResult::Handled(None)
        }
        Action::TickerVerified(seq, outcome) => {
            let (controller, mut view) = state.ticker_parts();
            controller.on_verified(&mut view, *seq, outcome.clone());
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Hands a submitted ticker to the news panel as its symbol filter.
fn submit(state: &mut AppState) -> UpdateResult {
    let raw = state.ticker.value();
    let (controller, mut view) = state.ticker_parts();
    match controller.on_submit(&mut view, &raw) {
        Some(symbol) => UpdateResult::Handled(super::news::search_for_symbol(state, &symbol)),
        None => UpdateResult::Handled(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::command::Command;
    use crate::app::state::NewsField;
    use crate::domain::models::Suggestion;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn type_into(state: &mut AppState, text: &str) -> Option<Command> {
        let mut last = None;
        for c in text.chars() {
            let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
            if let UpdateResult::Handled(cmd) = update(state, &Action::TextAreaInput(key)) {
                last = cmd;
            }
        }
        last
    }

    fn loaded(state: &mut AppState, rows: Vec<Suggestion>) {
        let seq = state.ticker_search.latest_seq();
        update(state, &Action::TickerDebounceElapsed(seq));
        update(state, &Action::SuggestionsLoaded(seq, rows));
    }

    #[test]
    fn test_typing_schedules_lookup() {
        let mut state = AppState::default();
        let cmd = type_into(&mut state, "msft");
        assert_eq!(
            cmd,
            Some(Command::ScheduleTickerLookup {
                seq: 4,
                query: "msft".into()
            })
        );
    }

    #[test]
    fn test_typing_elsewhere_is_not_handled() {
        let mut state = AppState::default();
        state.focus = Focus::News(NewsField::Keyword);
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(matches!(
            update(&mut state, &Action::TextAreaInput(key)),
            UpdateResult::NotHandled
        ));
        assert_eq!(state.ticker.value(), "");
    }

    #[test]
    fn test_enter_commits_highlighted_row() {
        let mut state = AppState::default();
        type_into(&mut state, "AA");
        loaded(
            &mut state,
            vec![
                Suggestion::new("AA", "Alcoa Corp"),
                Suggestion::new("AAPL", "Apple Inc."),
            ],
        );
        assert!(state.ticker.shows_dropdown());

        update(&mut state, &Action::HighlightNext);
        update(&mut state, &Action::HighlightNext);
        update(&mut state, &Action::ConfirmTicker);

        assert_eq!(state.ticker.value(), "AAPL    Apple Inc.");
        assert!(!state.ticker.dropdown_visible);
        assert_eq!(
            state.ticker_search.selected().map(|t| t.symbol.as_str()),
            Some("AAPL")
        );
    }

    #[test]
    fn test_enter_without_highlight_submits_to_news() {
        let mut state = AppState::default();
        type_into(&mut state, "tsla");
        let result = update(&mut state, &Action::ConfirmTicker);

        let query = match result {
            UpdateResult::Handled(Some(Command::SearchNews { query, .. })) => query,
            other => panic!("expected a news search, got {other:?}"),
        };
        assert_eq!(query.symbol, "tsla");
        assert_eq!(query.page, 1);
        assert!(state.ticker.busy);
        assert_eq!(state.news.value(NewsField::Symbol), "tsla");
    }

    #[test]
    fn test_empty_submit_raises_alert() {
        let mut state = AppState::default();
        let result = update(&mut state, &Action::SubmitTicker);
        assert!(matches!(result, UpdateResult::Handled(None)));
        assert!(state.feedback.has_alert());
        assert!(!state.ticker.busy);
    }

    #[test]
    fn test_outside_click_then_field_click_reshows() {
        let mut state = AppState::default();
        type_into(&mut state, "AAPL");
        loaded(&mut state, vec![Suggestion::new("AAPL", "Apple Inc.")]);

        update(&mut state, &Action::OutsideClick);
        assert!(!state.ticker.shows_dropdown());
        update(&mut state, &Action::TickerClicked);
        assert!(state.ticker.shows_dropdown());
    }

    #[test]
    fn test_double_click_clears_field() {
        let mut state = AppState::default();
        type_into(&mut state, "AAPL");
        update(&mut state, &Action::TickerDoubleClicked);
        assert_eq!(state.ticker.value(), "");
    }
}
