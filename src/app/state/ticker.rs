use super::{AppTextArea, Feedback, NoticeKind};
use crate::app::features::ticker::SearchView;
use crate::domain::models::Suggestion;

/// The ticker field and its dropdown as drawn on screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickerPanel<'a> {
    pub field: AppTextArea<'a>,
    pub suggestions: Vec<Suggestion>,
    pub dropdown_visible: bool,
    pub highlighted: Option<usize>,
    pub busy: bool,
}

impl TickerPanel<'_> {
    #[must_use]
    pub fn value(&self) -> String {
        self.field.value()
    }

    #[must_use]
    pub fn shows_dropdown(&self) -> bool {
        self.dropdown_visible && !self.suggestions.is_empty()
    }

    pub fn highlight_next(&mut self) {
        if !self.shows_dropdown() {
            return;
        }
        let len = self.suggestions.len();
        self.highlighted = Some(match self.highlighted {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        });
    }

    pub fn highlight_prev(&mut self) {
        if !self.shows_dropdown() {
            return;
        }
        let len = self.suggestions.len();
        self.highlighted = Some(match self.highlighted {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
    }
}

/// Borrowed view over the panel and the feedback area, handed to the
/// ticker search controller for one transition.
pub struct SearchSurface<'s, 'a> {
    pub panel: &'s mut TickerPanel<'a>,
    pub feedback: &'s mut Feedback,
}

impl SearchView for SearchSurface<'_, '_> {
    fn render_suggestions(&mut self, suggestions: &[Suggestion]) {
        self.panel.suggestions = suggestions.to_vec();
        self.panel.dropdown_visible = true;
        self.panel.highlighted = None;
    }

    fn clear_suggestions(&mut self) {
        self.panel.suggestions.clear();
        self.panel.dropdown_visible = false;
        self.panel.highlighted = None;
    }

    fn hide_suggestions(&mut self) {
        self.panel.dropdown_visible = false;
    }

    fn show_suggestions(&mut self) {
        self.panel.dropdown_visible = !self.panel.suggestions.is_empty();
    }

    fn set_field_value(&mut self, value: &str) {
        self.panel.field = AppTextArea::with_text(value);
    }

    fn notify(&mut self, kind: NoticeKind, message: &str) {
        self.feedback.notify(kind, message);
    }

    fn alert(&mut self, message: &str) {
        self.feedback.alert(message);
    }

    fn set_busy(&mut self, busy: bool) {
        self.panel.busy = busy;
    }
}
