use crate::app::{
    action::{Action, UpdateResult},
    state::{AppState, Focus, NewsField},
};
use std::time::Instant;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            state
                .feedback
                .expire(Instant::now(), state.settings.notice_duration);
            UpdateResult::Handled(None)
        }
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        Action::FocusNext => {
            state.focus = state.focus.next();
            UpdateResult::Handled(None)
        }
        Action::FocusPrev => {
            state.focus = state.focus.prev();
            UpdateResult::Handled(None)
        }
        Action::FocusKeyword => {
            state.focus = Focus::News(NewsField::Keyword);
            UpdateResult::Handled(None)
        }
        Action::FocusField(focus) => {
            state.focus = *focus;
            // Clicking another field is a click outside the dropdown.
            if *focus != Focus::Ticker {
                state.ticker.dropdown_visible = false;
            }
            UpdateResult::Handled(None)
        }
        Action::DismissAlert => {
            state.feedback.dismiss_alert();
            UpdateResult::Handled(None)
        }
        Action::DismissNotices => {
            state.feedback.dismiss_notices();
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
