use crate::app::state::NoticeKind;
use crate::domain::models::Suggestion;

/// What the ticker search controller needs from whatever draws it.
pub trait SearchView {
    /// Replace the dropdown contents and make it visible.
    fn render_suggestions(&mut self, suggestions: &[Suggestion]);

    /// Hide the dropdown and drop its contents.
    fn clear_suggestions(&mut self);

    /// Hide the dropdown, keeping its contents for a later re-show.
    fn hide_suggestions(&mut self);

    /// Re-show previously rendered contents, if any.
    fn show_suggestions(&mut self);

    fn set_field_value(&mut self, value: &str);

    fn notify(&mut self, kind: NoticeKind, message: &str);

    fn alert(&mut self, message: &str);

    fn set_busy(&mut self, busy: bool);
}
