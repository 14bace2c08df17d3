use crate::app::{
    action::Action,
    state::{AppState, Focus, NewsField},
    ui,
};
use crate::components::ticker_input::dropdown_offset;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect, Size};
use std::time::{Duration, Instant};

pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(500);

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    match event {
        Event::Key(key) => map_key(key, app_state),
        Event::Mouse(mouse) if !app_state.feedback.has_alert() => {
            map_mouse(mouse, app_state, terminal_size)
        }
        _ => None,
    }
}

fn map_key(key: KeyEvent, app_state: &AppState<'_>) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    // An open alert swallows everything but its acknowledgement.
    if app_state.feedback.has_alert() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::DismissAlert),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Quit)
            }
            _ => None,
        };
    }

    if let Some(action) = app_state.keymap.get_action(key, app_state.focus) {
        return Some(action);
    }

    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    Some(Action::TextAreaInput(key))
}

/// Index of the dropdown row under `pos`, if the dropdown is showing.
pub fn resolve_suggestion_row(
    app_state: &AppState<'_>,
    area: Rect,
    pos: Position,
) -> Option<Option<usize>> {
    if !app_state.ticker.shows_dropdown() {
        return None;
    }
    let layout = ui::get_layout(area);
    let dropdown = ui::dropdown_area(&layout, area, app_state.ticker.suggestions.len());
    if !dropdown.contains(pos) {
        return None;
    }

    // Border rows belong to the dropdown but select nothing.
    let visible = dropdown.height.saturating_sub(2);
    if pos.y <= dropdown.y || pos.y > dropdown.y + visible {
        return Some(None);
    }
    let offset = dropdown_offset(app_state.ticker.highlighted, usize::from(visible));
    let index = offset + usize::from(pos.y - dropdown.y - 1);
    Some((index < app_state.ticker.suggestions.len()).then_some(index))
}

fn map_mouse(mouse: MouseEvent, app_state: &AppState<'_>, terminal_size: Size) -> Option<Action> {
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    let pos = Position::new(mouse.column, mouse.row);
    let layout = ui::get_layout(area);

    match mouse.kind {
        MouseEventKind::ScrollDown if layout.results.contains(pos) => {
            Some(Action::SelectNextArticle)
        }
        MouseEventKind::ScrollUp if layout.results.contains(pos) => Some(Action::SelectPrevArticle),
        MouseEventKind::Down(MouseButton::Left) => {
            // The dropdown overlaps the panels below, so it is checked first.
            if let Some(row) = resolve_suggestion_row(app_state, area, pos) {
                return row.map(Action::SuggestionClicked);
            }

            if layout.ticker.contains(pos) {
                let now = Instant::now();
                let is_double_click = app_state
                    .last_click_time
                    .is_some_and(|t| now.duration_since(t) < DOUBLE_CLICK_WINDOW)
                    && app_state.last_click_pos == Some((mouse.column, mouse.row));
                return Some(if is_double_click {
                    Action::TickerDoubleClicked
                } else {
                    Action::TickerClicked
                });
            }

            for field in NewsField::ALL {
                if layout.filter(field).contains(pos) {
                    return Some(Action::FocusField(Focus::News(field)));
                }
            }

            Some(Action::OutsideClick)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Suggestion;

    const SIZE: Size = Size {
        width: 100,
        height: 30,
    };

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        })
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn with_dropdown() -> AppState<'static> {
        let mut state = AppState::default();
        state.ticker.suggestions = vec![
            Suggestion::new("AAPL", "Apple Inc."),
            Suggestion::new("AAL", "American Airlines"),
        ];
        state.ticker.dropdown_visible = true;
        state
    }

    #[test]
    fn test_characters_go_to_focused_field() {
        let state = AppState::default();
        let event = press(KeyCode::Char('a'), KeyModifiers::NONE);
        assert!(matches!(
            map_event_to_action(event, &state, SIZE),
            Some(Action::TextAreaInput(_))
        ));
        assert_eq!(
            map_event_to_action(press(KeyCode::Char('x'), KeyModifiers::CONTROL), &state, SIZE),
            None
        );
    }

    #[test]
    fn test_alert_blocks_input() {
        let mut state = AppState::default();
        state.feedback.alert("Please enter a ticker symbol");

        assert_eq!(
            map_event_to_action(press(KeyCode::Char('a'), KeyModifiers::NONE), &state, SIZE),
            None
        );
        assert_eq!(map_event_to_action(click(5, 2), &state, SIZE), None);
        assert_eq!(
            map_event_to_action(press(KeyCode::Enter, KeyModifiers::NONE), &state, SIZE),
            Some(Action::DismissAlert)
        );
    }

    #[test]
    fn test_click_on_dropdown_row_selects_it() {
        let state = with_dropdown();
        // Ticker box occupies rows 1..4, the dropdown border sits on row 4.
        assert_eq!(
            map_event_to_action(click(10, 5), &state, SIZE),
            Some(Action::SuggestionClicked(0))
        );
        assert_eq!(
            map_event_to_action(click(10, 6), &state, SIZE),
            Some(Action::SuggestionClicked(1))
        );
        assert_eq!(map_event_to_action(click(10, 4), &state, SIZE), None);
    }

    #[test]
    fn test_click_targets() {
        let mut state = AppState::default();
        assert_eq!(
            map_event_to_action(click(10, 2), &state, SIZE),
            Some(Action::TickerClicked)
        );
        assert_eq!(
            map_event_to_action(click(2, 5), &state, SIZE),
            Some(Action::FocusField(Focus::News(NewsField::Keyword)))
        );
        assert_eq!(
            map_event_to_action(click(50, 20), &state, SIZE),
            Some(Action::OutsideClick)
        );

        state.last_click_time = Some(Instant::now());
        state.last_click_pos = Some((10, 2));
        assert_eq!(
            map_event_to_action(click(10, 2), &state, SIZE),
            Some(Action::TickerDoubleClicked)
        );
        assert_eq!(
            map_event_to_action(click(11, 2), &state, SIZE),
            Some(Action::TickerClicked)
        );
    }

    #[test]
    fn test_focus_changes_key_meaning() {
        let mut state = with_dropdown();
        let down = press(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(
            map_event_to_action(down.clone(), &state, SIZE),
            Some(Action::HighlightNext)
        );
        state.focus = Focus::News(NewsField::Symbol);
        assert_eq!(
            map_event_to_action(down, &state, SIZE),
            Some(Action::SelectNextArticle)
        );
    }
}
