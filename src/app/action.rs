use crate::app::command::Command;
use crate::app::state::Focus;
use crate::domain::models::{NewsPage, Suggestion, VerifyOutcome};

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Quit,

    // --- Focus ---
    FocusNext,
    FocusPrev,
    FocusField(Focus),
    FocusKeyword,
    TextAreaInput(crossterm::event::KeyEvent), // Keystroke for the focused field

    // --- Ticker Field ---
    TickerClicked,            // Click inside the ticker field
    TickerDoubleClicked,      // Clear gesture
    SuggestionClicked(usize), // Row in the dropdown
    OutsideClick,             // Click anywhere else
    HighlightNext,
    HighlightPrev,
    ConfirmTicker, // Enter in the ticker field
    HideSuggestions,
    SubmitTicker,

    // --- Feedback ---
    DismissAlert,
    DismissNotices,

    // --- News ---
    SearchNews,
    NextPage,
    PrevPage,
    ResetNews,
    FetchNews,
    SelectNextArticle,
    SelectPrevArticle,

    // --- Async Results (The "Callback") ---
    TickerDebounceElapsed(u64),
    SuggestionsLoaded(u64, Vec<Suggestion>),
    LookupFailed(u64, String),
    TickerVerified(u64, Result<VerifyOutcome, String>),
    NewsDebounceElapsed(u64),
    NewsLoaded(u64, Result<NewsPage, String>),
    NewsFetched(String, Result<usize, String>), // Symbol, article count
}
