use super::action::Action;
use super::state::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub global: HashMap<KeyEvent, Action>,
    pub ticker_mode: HashMap<KeyEvent, Action>,
    pub news_mode: HashMap<KeyEvent, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut global = HashMap::new();
        let mut ticker_mode = HashMap::new();
        let mut news_mode = HashMap::new();

        // --- Global ---
        global.insert(ctrl('c'), Action::Quit);
        global.insert(key(KeyCode::Tab), Action::FocusNext);
        global.insert(key(KeyCode::BackTab), Action::FocusPrev);
        global.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            Action::FocusPrev,
        );
        global.insert(ctrl('k'), Action::FocusKeyword);
        global.insert(ctrl('t'), Action::SubmitTicker);
        global.insert(ctrl('d'), Action::DismissNotices);
        global.insert(ctrl('s'), Action::SearchNews);
        global.insert(ctrl('r'), Action::ResetNews);
        global.insert(ctrl('f'), Action::FetchNews);
        global.insert(key(KeyCode::PageDown), Action::NextPage);
        global.insert(key(KeyCode::PageUp), Action::PrevPage);

        // --- Ticker Field ---
        ticker_mode.insert(key(KeyCode::Down), Action::HighlightNext);
        ticker_mode.insert(key(KeyCode::Up), Action::HighlightPrev);
        ticker_mode.insert(key(KeyCode::Enter), Action::ConfirmTicker);
        ticker_mode.insert(key(KeyCode::Esc), Action::HideSuggestions);

        // --- News Filters ---
        news_mode.insert(key(KeyCode::Enter), Action::SearchNews);
        news_mode.insert(key(KeyCode::Esc), Action::ResetNews);
        news_mode.insert(key(KeyCode::Down), Action::SelectNextArticle);
        news_mode.insert(key(KeyCode::Up), Action::SelectPrevArticle);

        Self {
            global,
            ticker_mode,
            news_mode,
        }
    }
}

impl KeyMap {
    pub fn get_action(&self, event: KeyEvent, focus: Focus) -> Option<Action> {
        // Terminals differ in kind/state reporting; match on code and modifiers only.
        let event = KeyEvent::new(event.code, event.modifiers);
        let mode = match focus {
            Focus::Ticker => &self.ticker_mode,
            Focus::News(_) => &self.news_mode,
        };
        if let Some(action) = mode.get(&event) {
            return Some(action.clone());
        }
        self.global.get(&event).cloned()
    }
}

fn key(code: impl Into<KeyCode>) -> KeyEvent {
    KeyEvent::new(code.into(), KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
